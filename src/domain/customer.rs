use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq, Default)]
pub struct CustomerCategory {
    pub id: i32,
    pub code: String,
    pub description: String,
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq, Default)]
pub struct Customer {
    pub id: i32,
    pub name: String,
    pub address: String,
    pub email: String,
    pub phone: String,
    pub iban: String,
    /// Present only when the row references a category.
    pub customer_category: Option<CustomerCategory>,
}

#[derive(Clone, Debug, Deserialize)]
pub struct NewCustomerCategory {
    pub code: String,
    pub description: String,
}

#[derive(Clone, Debug, Deserialize)]
pub struct NewCustomer {
    pub name: String,
    pub address: String,
    pub email: String,
    pub phone: String,
    pub iban: String,
    pub customer_category_id: Option<i32>,
}

/// Customer columns usable as filter or sort keys.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CustomerColumn {
    Name,
    Email,
}
