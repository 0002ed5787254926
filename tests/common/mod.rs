#![allow(dead_code)]

use std::path::PathBuf;

use tempfile::TempDir;

use pushkind_backoffice::db::{DbPool, establish_connection_pool, run_migrations};
use pushkind_backoffice::domain::customer::{NewCustomer, NewCustomerCategory};
use pushkind_backoffice::domain::employee::{NewDepartment, NewEmployee};
use pushkind_backoffice::domain::supplier::NewSupplier;
use pushkind_backoffice::repository::{
    CustomerWriter, DieselRepository, EmployeeWriter, SupplierWriter,
};

/// Migrated SQLite database living in a temporary directory that is removed
/// on drop.
pub struct TestDb {
    pool: DbPool,
    path: PathBuf,
    _dir: TempDir,
}

impl TestDb {
    pub fn new(name: &str) -> Self {
        let dir = tempfile::tempdir().expect("create temp dir");
        let path = dir.path().join(name);
        let pool = establish_connection_pool(path.to_str().expect("utf-8 path"))
            .expect("create pool");
        run_migrations(&pool).expect("run migrations");
        Self {
            pool,
            path,
            _dir: dir,
        }
    }

    pub fn pool(&self) -> DbPool {
        self.pool.clone()
    }

    pub fn path(&self) -> &PathBuf {
        &self.path
    }

    pub fn repo(&self) -> DieselRepository {
        DieselRepository::new(self.pool())
    }
}

fn customer(name: &str, email: &str, category: Option<i32>) -> NewCustomer {
    NewCustomer {
        name: name.to_string(),
        address: format!("{name} street"),
        email: email.to_string(),
        phone: "555-0100".to_string(),
        iban: "DE89370400440532013000".to_string(),
        customer_category_id: category,
    }
}

fn employee(code: &str, first: &str, last: &str, department: Option<i32>) -> NewEmployee {
    NewEmployee {
        code: code.to_string(),
        first_name: first.to_string(),
        last_name: last.to_string(),
        address: "1 Office Way".to_string(),
        email: format!("{}@corp.example", first.to_lowercase()),
        phone: "555-0200".to_string(),
        department_id: department,
    }
}

fn supplier(name: &str) -> NewSupplier {
    NewSupplier {
        name: name.to_string(),
        address: "Industrial Park".to_string(),
        email: "orders@supplier.example".to_string(),
        phone: "555-0300".to_string(),
    }
}

/// Inserts a small directory used by the list and route tests.
///
/// Customers: "Zeta Traders" (Wholesale), "Ana Smith" (Retail),
/// "Bob Jones" with email "dana@x.com" (no category) and "Carl Ek"
/// (no category). Employees: Joan Smith (Sales), John Adams, Maria Jonsson
/// (Accounting) and Adam Smith. Suppliers: "Acme Parts", "Beta Metals",
/// "ACME Logistics".
pub fn seed(repo: &DieselRepository) {
    let retail = repo
        .create_customer_category(&NewCustomerCategory {
            code: "RET".to_string(),
            description: "Retail".to_string(),
        })
        .unwrap();
    let wholesale = repo
        .create_customer_category(&NewCustomerCategory {
            code: "WHS".to_string(),
            description: "Wholesale".to_string(),
        })
        .unwrap();
    repo.create_customers(&[
        customer("Zeta Traders", "zeta@traders.example", Some(wholesale.id)),
        customer("Ana Smith", "ana@smith.example", Some(retail.id)),
        customer("Bob Jones", "dana@x.com", None),
        customer("Carl Ek", "carl@ek.example", None),
    ])
    .unwrap();

    let sales = repo
        .create_department(&NewDepartment {
            code: "SAL".to_string(),
            description: "Sales".to_string(),
        })
        .unwrap();
    let accounting = repo
        .create_department(&NewDepartment {
            code: "ACC".to_string(),
            description: "Accounting".to_string(),
        })
        .unwrap();
    repo.create_employees(&[
        employee("E1", "Joan", "Smith", Some(sales.id)),
        employee("E2", "John", "Adams", None),
        employee("E3", "Maria", "Jonsson", Some(accounting.id)),
        employee("E4", "Adam", "Smith", None),
    ])
    .unwrap();

    repo.create_suppliers(&[
        supplier("Acme Parts"),
        supplier("Beta Metals"),
        supplier("ACME Logistics"),
    ])
    .unwrap();
}
