use diesel::prelude::*;

use crate::domain::customer::{
    Customer as DomainCustomer, CustomerCategory as DomainCustomerCategory,
    NewCustomer as DomainNewCustomer, NewCustomerCategory as DomainNewCustomerCategory,
};

#[derive(Debug, Clone, Identifiable, Queryable, Selectable)]
#[diesel(table_name = crate::schema::customer_categories)]
/// Diesel model for [`crate::domain::customer::CustomerCategory`].
pub struct CustomerCategory {
    pub id: i32,
    pub code: String,
    pub description: String,
}

#[derive(Debug, Clone, Identifiable, Queryable, Selectable)]
#[diesel(table_name = crate::schema::customers)]
/// Diesel model for [`crate::domain::customer::Customer`].
pub struct Customer {
    pub id: i32,
    pub name: String,
    pub address: String,
    pub email: String,
    pub phone: String,
    pub iban: String,
    pub customer_category_id: Option<i32>,
}

#[derive(Insertable)]
#[diesel(table_name = crate::schema::customer_categories)]
/// Insertable form of [`CustomerCategory`].
pub struct NewCustomerCategory<'a> {
    pub code: &'a str,
    pub description: &'a str,
}

#[derive(Insertable)]
#[diesel(table_name = crate::schema::customers)]
/// Insertable form of [`Customer`].
pub struct NewCustomer<'a> {
    pub name: &'a str,
    pub address: &'a str,
    pub email: &'a str,
    pub phone: &'a str,
    pub iban: &'a str,
    pub customer_category_id: Option<i32>,
}

impl Customer {
    /// Converts the row into the domain aggregate with its expanded category.
    pub fn into_domain(self, customer_category: Option<DomainCustomerCategory>) -> DomainCustomer {
        DomainCustomer {
            id: self.id,
            name: self.name,
            address: self.address,
            email: self.email,
            phone: self.phone,
            iban: self.iban,
            customer_category,
        }
    }
}

impl From<CustomerCategory> for DomainCustomerCategory {
    fn from(category: CustomerCategory) -> Self {
        Self {
            id: category.id,
            code: category.code,
            description: category.description,
        }
    }
}

impl<'a> From<&'a DomainNewCustomerCategory> for NewCustomerCategory<'a> {
    fn from(category: &'a DomainNewCustomerCategory) -> Self {
        Self {
            code: category.code.as_str(),
            description: category.description.as_str(),
        }
    }
}

impl<'a> From<&'a DomainNewCustomer> for NewCustomer<'a> {
    fn from(customer: &'a DomainNewCustomer) -> Self {
        Self {
            name: customer.name.as_str(),
            address: customer.address.as_str(),
            email: customer.email.as_str(),
            phone: customer.phone.as_str(),
            iban: customer.iban.as_str(),
            customer_category_id: customer.customer_category_id,
        }
    }
}
