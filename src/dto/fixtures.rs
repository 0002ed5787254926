//! Shape of the JSON fixture consumed by the `seed` binary.
//!
//! Customers and employees reference their category/department by `code`;
//! the codes must be declared in the same fixture.

use serde::Deserialize;

use crate::dto::ReferenceItem;

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct DirectoryFixture {
    pub customer_categories: Vec<ReferenceItem>,
    pub departments: Vec<ReferenceItem>,
    pub customers: Vec<CustomerFixture>,
    pub employees: Vec<EmployeeFixture>,
    pub suppliers: Vec<SupplierFixture>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CustomerFixture {
    pub name: String,
    pub address: String,
    pub email: String,
    pub phone: String,
    pub iban: String,
    /// Code of a declared customer category.
    pub category: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct EmployeeFixture {
    pub code: String,
    pub first_name: String,
    pub last_name: String,
    pub address: String,
    pub email: String,
    pub phone: String,
    /// Code of a declared department.
    pub department: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SupplierFixture {
    pub name: String,
    pub address: String,
    pub email: String,
    pub phone: String,
}

/// Number of rows inserted per collection.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct FixtureSummary {
    pub customer_categories: usize,
    pub departments: usize,
    pub customers: usize,
    pub employees: usize,
    pub suppliers: usize,
}
