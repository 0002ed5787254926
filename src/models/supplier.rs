use diesel::prelude::*;

use crate::domain::supplier::{NewSupplier as DomainNewSupplier, Supplier as DomainSupplier};

#[derive(Debug, Clone, Identifiable, Queryable, Selectable)]
#[diesel(table_name = crate::schema::suppliers)]
/// Diesel model for [`crate::domain::supplier::Supplier`].
pub struct Supplier {
    pub id: i32,
    pub name: String,
    pub address: String,
    pub email: String,
    pub phone: String,
}

#[derive(Insertable)]
#[diesel(table_name = crate::schema::suppliers)]
pub struct NewSupplier<'a> {
    pub name: &'a str,
    pub address: &'a str,
    pub email: &'a str,
    pub phone: &'a str,
}

impl From<Supplier> for DomainSupplier {
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

impl<'a> From<&'a DomainNewSupplier> for NewSupplier<'a> {
    fn from(supplier: &'a DomainNewSupplier) -> Self {
        Self {
            name: supplier.name.as_str(),
            address: supplier.address.as_str(),
            email: supplier.email.as_str(),
            phone: supplier.phone.as_str(),
        }
    }
}
