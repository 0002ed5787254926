//! Storage collaborators for the directory lists.
//!
//! Each entity exposes one reader taking a [`RowQuery`] and returning rows
//! with their reference association already attached, plus a writer used to
//! load fixtures.

use diesel::prelude::*;
use diesel::sql_types::Bool;
use diesel::sqlite::Sqlite;

use crate::db::{DbConnection, DbPool, get_connection};
use crate::domain::customer::{
    Customer, CustomerCategory, CustomerColumn, NewCustomer, NewCustomerCategory,
};
use crate::domain::employee::{
    Department, Employee, EmployeeColumn, NewDepartment, NewEmployee,
};
use crate::domain::listing::{Criterion, RowQuery, SearchTerm};
use crate::domain::supplier::{NewSupplier, Supplier, SupplierColumn};
use crate::repository::errors::RepositoryResult;

pub mod customer;
pub mod employee;
pub mod errors;
#[cfg(any(test, feature = "test-mocks"))]
pub mod mock;
pub mod supplier;

/// Boolean filter over the rows of table `T`.
type RowFilter<T> = Box<dyn BoxableExpression<T, Sqlite, SqlType = Bool>>;

/// ORs the per-column tests of one criterion. `None` when the criterion
/// names no column.
fn criterion_filter<T, C, F>(criterion: &Criterion<C>, column_contains: F) -> Option<RowFilter<T>>
where
    T: 'static,
    C: Copy,
    F: Fn(C, &SearchTerm) -> RowFilter<T>,
{
    criterion
        .columns
        .iter()
        .map(|column| column_contains(*column, &criterion.term))
        .reduce(|acc, next| -> RowFilter<T> { Box::new(acc.or(next)) })
}

/// Diesel-backed implementation of every repository trait.
#[derive(Clone)]
pub struct DieselRepository {
    pool: DbPool,
}

impl DieselRepository {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }

    fn conn(&self) -> RepositoryResult<DbConnection> {
        Ok(get_connection(&self.pool)?)
    }
}

pub trait CustomerReader {
    fn list_customers(&self, query: &RowQuery<CustomerColumn>) -> RepositoryResult<Vec<Customer>>;
}

pub trait CustomerWriter {
    fn create_customer_category(
        &self,
        new_category: &NewCustomerCategory,
    ) -> RepositoryResult<CustomerCategory>;
    fn create_customers(&self, new_customers: &[NewCustomer]) -> RepositoryResult<usize>;
}

pub trait EmployeeReader {
    fn list_employees(&self, query: &RowQuery<EmployeeColumn>) -> RepositoryResult<Vec<Employee>>;
}

pub trait EmployeeWriter {
    fn create_department(&self, new_department: &NewDepartment) -> RepositoryResult<Department>;
    fn create_employees(&self, new_employees: &[NewEmployee]) -> RepositoryResult<usize>;
}

pub trait SupplierReader {
    fn list_suppliers(&self, query: &RowQuery<SupplierColumn>) -> RepositoryResult<Vec<Supplier>>;
}

pub trait SupplierWriter {
    fn create_suppliers(&self, new_suppliers: &[NewSupplier]) -> RepositoryResult<usize>;
}
