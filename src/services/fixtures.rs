//! Loads a [`DirectoryFixture`] into storage.

use std::collections::{HashMap, HashSet};

use crate::domain::customer::{NewCustomer, NewCustomerCategory};
use crate::domain::employee::{NewDepartment, NewEmployee};
use crate::domain::supplier::NewSupplier;
use crate::dto::ReferenceItem;
use crate::dto::fixtures::{DirectoryFixture, FixtureSummary};
use crate::repository::{CustomerWriter, EmployeeWriter, SupplierWriter};
use crate::services::{ServiceError, ServiceResult};

fn resolve(codes: &HashMap<String, i32>, code: Option<&str>, kind: &str) -> ServiceResult<Option<i32>> {
    match code {
        None => Ok(None),
        Some(code) => codes
            .get(code)
            .copied()
            .map(Some)
            .ok_or_else(|| ServiceError::Fixture(format!("unknown {kind} code {code:?}"))),
    }
}

fn declared_codes<'a>(items: &'a [ReferenceItem], kind: &str) -> ServiceResult<HashSet<&'a str>> {
    let mut codes = HashSet::new();
    for item in items {
        if !codes.insert(item.code.as_str()) {
            return Err(ServiceError::Fixture(format!(
                "duplicate {kind} code {:?}",
                item.code
            )));
        }
    }
    Ok(codes)
}

fn check_declared(codes: &HashSet<&str>, code: Option<&str>, kind: &str) -> ServiceResult<()> {
    match code {
        Some(code) if !codes.contains(code) => Err(ServiceError::Fixture(format!(
            "unknown {kind} code {code:?}"
        ))),
        _ => Ok(()),
    }
}

/// Rejects duplicate reference codes and references to undeclared codes.
fn validate(fixture: &DirectoryFixture) -> ServiceResult<()> {
    let categories = declared_codes(&fixture.customer_categories, "customer category")?;
    let departments = declared_codes(&fixture.departments, "department")?;
    for customer in &fixture.customers {
        check_declared(&categories, customer.category.as_deref(), "customer category")?;
    }
    for employee in &fixture.employees {
        check_declared(&departments, employee.department.as_deref(), "department")?;
    }
    Ok(())
}

/// Inserts every collection of `fixture`, references first.
///
/// The fixture is validated before anything is written, so a duplicate or
/// unknown code leaves the database untouched. The inserts themselves are
/// not atomic: a storage failure part-way keeps the rows already written,
/// which is why fixtures are meant for a fresh database.
pub fn load_fixture<R>(repo: &R, fixture: &DirectoryFixture) -> ServiceResult<FixtureSummary>
where
    R: CustomerWriter + EmployeeWriter + SupplierWriter + ?Sized,
{
    validate(fixture)?;

    let mut category_ids = HashMap::new();
    for category in &fixture.customer_categories {
        let created = repo.create_customer_category(&NewCustomerCategory {
            code: category.code.clone(),
            description: category.description.clone(),
        })?;
        category_ids.insert(created.code, created.id);
    }

    let mut department_ids = HashMap::new();
    for department in &fixture.departments {
        let created = repo.create_department(&NewDepartment {
            code: department.code.clone(),
            description: department.description.clone(),
        })?;
        department_ids.insert(created.code, created.id);
    }

    let customers = fixture
        .customers
        .iter()
        .map(|customer| {
            Ok(NewCustomer {
                name: customer.name.clone(),
                address: customer.address.clone(),
                email: customer.email.clone(),
                phone: customer.phone.clone(),
                iban: customer.iban.clone(),
                customer_category_id: resolve(
                    &category_ids,
                    customer.category.as_deref(),
                    "customer category",
                )?,
            })
        })
        .collect::<ServiceResult<Vec<_>>>()?;

    let employees = fixture
        .employees
        .iter()
        .map(|employee| {
            Ok(NewEmployee {
                code: employee.code.clone(),
                first_name: employee.first_name.clone(),
                last_name: employee.last_name.clone(),
                address: employee.address.clone(),
                email: employee.email.clone(),
                phone: employee.phone.clone(),
                department_id: resolve(
                    &department_ids,
                    employee.department.as_deref(),
                    "department",
                )?,
            })
        })
        .collect::<ServiceResult<Vec<_>>>()?;

    let suppliers = fixture
        .suppliers
        .iter()
        .map(|supplier| NewSupplier {
            name: supplier.name.clone(),
            address: supplier.address.clone(),
            email: supplier.email.clone(),
            phone: supplier.phone.clone(),
        })
        .collect::<Vec<_>>();

    let summary = FixtureSummary {
        customer_categories: category_ids.len(),
        departments: department_ids.len(),
        customers: repo.create_customers(&customers)?,
        employees: repo.create_employees(&employees)?,
        suppliers: repo.create_suppliers(&suppliers)?,
    };

    log::info!("Loaded fixture: {summary:?}");

    Ok(summary)
}
