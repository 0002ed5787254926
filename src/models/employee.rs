use diesel::prelude::*;

use crate::domain::employee::{
    Department as DomainDepartment, Employee as DomainEmployee,
    NewDepartment as DomainNewDepartment, NewEmployee as DomainNewEmployee,
};

#[derive(Debug, Clone, Identifiable, Queryable, Selectable)]
#[diesel(table_name = crate::schema::departments)]
/// Diesel model for [`crate::domain::employee::Department`].
pub struct Department {
    pub id: i32,
    pub code: String,
    pub description: String,
}

#[derive(Debug, Clone, Identifiable, Queryable, Selectable)]
#[diesel(table_name = crate::schema::employees)]
/// Diesel model for [`crate::domain::employee::Employee`].
pub struct Employee {
    pub id: i32,
    pub code: String,
    pub first_name: String,
    pub last_name: String,
    pub address: String,
    pub email: String,
    pub phone: String,
    pub department_id: Option<i32>,
}

#[derive(Insertable)]
#[diesel(table_name = crate::schema::departments)]
pub struct NewDepartment<'a> {
    pub code: &'a str,
    pub description: &'a str,
}

#[derive(Insertable)]
#[diesel(table_name = crate::schema::employees)]
pub struct NewEmployee<'a> {
    pub code: &'a str,
    pub first_name: &'a str,
    pub last_name: &'a str,
    pub address: &'a str,
    pub email: &'a str,
    pub phone: &'a str,
    pub department_id: Option<i32>,
}

impl Employee {
    pub fn into_domain(self, department: Option<DomainDepartment>) -> DomainEmployee {
        DomainEmployee {
            id: self.id,
            code: self.code,
            first_name: self.first_name,
            last_name: self.last_name,
            address: self.address,
            email: self.email,
            phone: self.phone,
            department,
        }
    }
}

impl From<Department> for DomainDepartment {
    fn from(department: Department) -> Self {
        Self {
            id: department.id,
            code: department.code,
            description: department.description,
        }
    }
}

impl<'a> From<&'a DomainNewDepartment> for NewDepartment<'a> {
    fn from(department: &'a DomainNewDepartment) -> Self {
        Self {
            code: department.code.as_str(),
            description: department.description.as_str(),
        }
    }
}

impl<'a> From<&'a DomainNewEmployee> for NewEmployee<'a> {
    fn from(employee: &'a DomainNewEmployee) -> Self {
        Self {
            code: employee.code.as_str(),
            first_name: employee.first_name.as_str(),
            last_name: employee.last_name.as_str(),
            address: employee.address.as_str(),
            email: employee.email.as_str(),
            phone: employee.phone.as_str(),
            department_id: employee.department_id,
        }
    }
}
