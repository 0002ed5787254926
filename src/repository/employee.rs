//! Repository implementation for employees and their departments.

use std::collections::{BTreeSet, HashMap};

use diesel::prelude::*;
use diesel::sqlite::Sqlite;

use crate::db::contains_folded;
use crate::domain::employee::{
    Department, Employee, EmployeeColumn, NewDepartment, NewEmployee,
};
use crate::domain::listing::{RowQuery, SearchTerm};
use crate::models::employee::{
    Department as DbDepartment, Employee as DbEmployee, NewDepartment as DbNewDepartment,
    NewEmployee as DbNewEmployee,
};
use crate::repository::errors::RepositoryResult;
use crate::repository::{
    DieselRepository, EmployeeReader, EmployeeWriter, RowFilter, criterion_filter,
};
use crate::schema::{departments, employees};

type EmployeeFilter = RowFilter<employees::table>;

fn column_contains(column: EmployeeColumn, term: &SearchTerm) -> EmployeeFilter {
    let needle = term.as_str().to_owned();
    match column {
        EmployeeColumn::FirstName => Box::new(contains_folded(employees::first_name, needle)),
        EmployeeColumn::LastName => Box::new(contains_folded(employees::last_name, needle)),
    }
}

impl EmployeeReader for DieselRepository {
    fn list_employees(&self, query: &RowQuery<EmployeeColumn>) -> RepositoryResult<Vec<Employee>> {
        let mut conn = self.conn()?;

        let mut items = employees::table
            .select(DbEmployee::as_select())
            .into_boxed::<Sqlite>();

        for criterion in &query.criteria {
            if let Some(filter) = criterion_filter(criterion, column_contains) {
                items = items.filter(filter);
            }
        }

        for column in &query.order {
            items = match column {
                EmployeeColumn::FirstName => items.then_order_by(employees::first_name.asc()),
                EmployeeColumn::LastName => items.then_order_by(employees::last_name.asc()),
            };
        }
        items = items.then_order_by(employees::id.asc());

        let rows = items.load::<DbEmployee>(&mut conn)?;

        let mut departments_by_id: HashMap<i32, Department> = HashMap::new();
        if query.expand {
            let department_ids = rows
                .iter()
                .filter_map(|row| row.department_id)
                .collect::<BTreeSet<i32>>()
                .into_iter()
                .collect::<Vec<i32>>();

            if !department_ids.is_empty() {
                departments_by_id = departments::table
                    .filter(departments::id.eq_any(department_ids))
                    .select(DbDepartment::as_select())
                    .load::<DbDepartment>(&mut conn)?
                    .into_iter()
                    .map(|department| (department.id, department.into()))
                    .collect();
            }
        }

        let employees = rows
            .into_iter()
            .map(|row| {
                let department = row
                    .department_id
                    .and_then(|id| departments_by_id.get(&id).cloned());
                row.into_domain(department)
            })
            .collect();

        Ok(employees)
    }
}

impl EmployeeWriter for DieselRepository {
    fn create_department(&self, new_department: &NewDepartment) -> RepositoryResult<Department> {
        let mut conn = self.conn()?;

        let insertable: DbNewDepartment = new_department.into();
        let department = diesel::insert_into(departments::table)
            .values(&insertable)
            .returning(DbDepartment::as_returning())
            .get_result::<DbDepartment>(&mut conn)?;

        Ok(department.into())
    }

    fn create_employees(&self, new_employees: &[NewEmployee]) -> RepositoryResult<usize> {
        if new_employees.is_empty() {
            return Ok(0);
        }

        let mut conn = self.conn()?;

        let insertables: Vec<DbNewEmployee> = new_employees.iter().map(Into::into).collect();
        let affected = diesel::insert_into(employees::table)
            .values(&insertables)
            .execute(&mut conn)?;

        Ok(affected)
    }
}
