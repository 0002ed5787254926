use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq, Default)]
pub struct Supplier {
    pub id: i32,
    pub name: String,
    pub address: String,
    pub email: String,
    pub phone: String,
}

#[derive(Clone, Debug, Deserialize)]
pub struct NewSupplier {
    pub name: String,
    pub address: String,
    pub email: String,
    pub phone: String,
}

/// Supplier columns usable as filter or sort keys.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SupplierColumn {
    Name,
}
