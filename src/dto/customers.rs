//! DTOs exposed by the customer list endpoints.

use serde::{Deserialize, Serialize};

use crate::domain::customer::{Customer, CustomerCategory};
use crate::dto::ReferenceItem;
use crate::services::export::{ExportError, XmlFields, XmlOutput, XmlRecord};

/// Query parameters accepted by the customer list.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CustomersListRequest {
    /// Matched against name or email.
    pub search_text: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct CustomerListItem {
    pub id: i32,
    pub name: String,
    pub address: String,
    pub email: String,
    pub phone: String,
    pub iban: String,
    pub customer_category: Option<ReferenceItem>,
}

impl From<CustomerCategory> for ReferenceItem {
    fn from(category: CustomerCategory) -> Self {
        Self {
            code: category.code,
            description: category.description,
        }
    }
}

impl From<Customer> for CustomerListItem {
    fn from(customer: Customer) -> Self {
        Self {
            id: customer.id,
            name: customer.name,
            address: customer.address,
            email: customer.email,
            phone: customer.phone,
            iban: customer.iban,
            customer_category: customer.customer_category.map(Into::into),
        }
    }
}

impl XmlFields for CustomerListItem {
    fn write_fields(&self, out: &mut XmlOutput) -> Result<(), ExportError> {
        out.field("id", &self.id.to_string())?;
        out.field("name", &self.name)?;
        out.field("address", &self.address)?;
        out.field("email", &self.email)?;
        out.field("phone", &self.phone)?;
        out.field("iban", &self.iban)?;
        if let Some(category) = &self.customer_category {
            out.group("customerCategory", |out| category.write_fields(out))?;
        }
        Ok(())
    }
}

impl XmlRecord for CustomerListItem {
    const ELEMENT: &'static str = "customer";
}
