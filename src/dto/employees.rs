//! DTOs exposed by the employee list endpoints.

use serde::{Deserialize, Serialize};

use crate::domain::employee::{Department, Employee};
use crate::dto::ReferenceItem;
use crate::services::export::{ExportError, XmlFields, XmlOutput, XmlRecord};

/// Query parameters accepted by the employee list. Both filters apply
/// independently.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct EmployeesListRequest {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct EmployeeListItem {
    pub id: i32,
    pub code: String,
    pub first_name: String,
    pub last_name: String,
    pub address: String,
    pub email: String,
    pub phone: String,
    pub department: Option<ReferenceItem>,
}

impl From<Department> for ReferenceItem {
    fn from(department: Department) -> Self {
        Self {
            code: department.code,
            description: department.description,
        }
    }
}

impl From<Employee> for EmployeeListItem {
    fn from(employee: Employee) -> Self {
        Self {
            id: employee.id,
            code: employee.code,
            first_name: employee.first_name,
            last_name: employee.last_name,
            address: employee.address,
            email: employee.email,
            phone: employee.phone,
            department: employee.department.map(Into::into),
        }
    }
}

impl XmlFields for EmployeeListItem {
    fn write_fields(&self, out: &mut XmlOutput) -> Result<(), ExportError> {
        out.field("id", &self.id.to_string())?;
        out.field("code", &self.code)?;
        out.field("firstName", &self.first_name)?;
        out.field("lastName", &self.last_name)?;
        out.field("address", &self.address)?;
        out.field("email", &self.email)?;
        out.field("phone", &self.phone)?;
        if let Some(department) = &self.department {
            out.group("department", |out| department.write_fields(out))?;
        }
        Ok(())
    }
}

impl XmlRecord for EmployeeListItem {
    const ELEMENT: &'static str = "employee";
}
