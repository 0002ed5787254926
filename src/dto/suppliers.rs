//! DTOs exposed by the supplier list endpoints.

use serde::{Deserialize, Serialize};

use crate::domain::supplier::Supplier;
use crate::services::export::{ExportError, XmlFields, XmlOutput, XmlRecord};

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SuppliersListRequest {
    pub name: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct SupplierListItem {
    pub id: i32,
    pub name: String,
    pub address: String,
    pub email: String,
    pub phone: String,
}

impl From<Supplier> for SupplierListItem {
    fn from(supplier: Supplier) -> Self {
        Self {
            id: supplier.id,
            name: supplier.name,
            address: supplier.address,
            email: supplier.email,
            phone: supplier.phone,
        }
    }
}

impl XmlFields for SupplierListItem {
    fn write_fields(&self, out: &mut XmlOutput) -> Result<(), ExportError> {
        out.field("id", &self.id.to_string())?;
        out.field("name", &self.name)?;
        out.field("address", &self.address)?;
        out.field("email", &self.email)?;
        out.field("phone", &self.phone)
    }
}

impl XmlRecord for SupplierListItem {
    const ELEMENT: &'static str = "supplier";
}
