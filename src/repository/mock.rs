//! Mock repository implementations for isolating services in tests.

use mockall::mock;

use crate::domain::customer::{
    Customer, CustomerCategory, CustomerColumn, NewCustomer, NewCustomerCategory,
};
use crate::domain::employee::{
    Department, Employee, EmployeeColumn, NewDepartment, NewEmployee,
};
use crate::domain::listing::RowQuery;
use crate::domain::supplier::{NewSupplier, Supplier, SupplierColumn};
use crate::repository::errors::RepositoryResult;
use crate::repository::{
    CustomerReader, CustomerWriter, EmployeeReader, EmployeeWriter, SupplierReader,
    SupplierWriter,
};

mock! {
    pub Repository {}

    impl CustomerReader for Repository {
        fn list_customers(&self, query: &RowQuery<CustomerColumn>) -> RepositoryResult<Vec<Customer>>;
    }

    impl CustomerWriter for Repository {
        fn create_customer_category(
            &self,
            new_category: &NewCustomerCategory,
        ) -> RepositoryResult<CustomerCategory>;
        fn create_customers(&self, new_customers: &[NewCustomer]) -> RepositoryResult<usize>;
    }

    impl EmployeeReader for Repository {
        fn list_employees(&self, query: &RowQuery<EmployeeColumn>) -> RepositoryResult<Vec<Employee>>;
    }

    impl EmployeeWriter for Repository {
        fn create_department(&self, new_department: &NewDepartment) -> RepositoryResult<Department>;
        fn create_employees(&self, new_employees: &[NewEmployee]) -> RepositoryResult<usize>;
    }

    impl SupplierReader for Repository {
        fn list_suppliers(&self, query: &RowQuery<SupplierColumn>) -> RepositoryResult<Vec<Supplier>>;
    }

    impl SupplierWriter for Repository {
        fn create_suppliers(&self, new_suppliers: &[NewSupplier]) -> RepositoryResult<usize>;
    }
}
