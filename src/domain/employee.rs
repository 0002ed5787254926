use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq, Default)]
pub struct Department {
    pub id: i32,
    pub code: String,
    pub description: String,
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq, Default)]
pub struct Employee {
    pub id: i32,
    pub code: String,
    pub first_name: String,
    pub last_name: String,
    pub address: String,
    pub email: String,
    pub phone: String,
    pub department: Option<Department>,
}

#[derive(Clone, Debug, Deserialize)]
pub struct NewDepartment {
    pub code: String,
    pub description: String,
}

#[derive(Clone, Debug, Deserialize)]
pub struct NewEmployee {
    pub code: String,
    pub first_name: String,
    pub last_name: String,
    pub address: String,
    pub email: String,
    pub phone: String,
    pub department_id: Option<i32>,
}

/// Employee columns usable as filter or sort keys.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EmployeeColumn {
    FirstName,
    LastName,
}
