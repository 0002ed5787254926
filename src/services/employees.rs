//! Employee list: first and last name filters, sorted by last then first
//! name.

use crate::domain::employee::{Employee, EmployeeColumn};
use crate::domain::listing::{Criterion, SearchTerm};
use crate::dto::employees::{EmployeeListItem, EmployeesListRequest};
use crate::repository::EmployeeReader;
use crate::services::ServiceResult;
use crate::services::listing::{ListShape, run_list};

pub struct EmployeeListing;

impl ListShape for EmployeeListing {
    type Request = EmployeesListRequest;
    type Column = EmployeeColumn;
    type Row = Employee;
    type Item = EmployeeListItem;

    const ORDER: &'static [EmployeeColumn] = &[EmployeeColumn::LastName, EmployeeColumn::FirstName];
    const EXPAND: bool = true;

    fn criteria(request: &EmployeesListRequest) -> Vec<Criterion<EmployeeColumn>> {
        [
            (EmployeeColumn::FirstName, request.first_name.as_deref()),
            (EmployeeColumn::LastName, request.last_name.as_deref()),
        ]
        .into_iter()
        .filter_map(|(column, value)| {
            SearchTerm::parse(value).map(|term| Criterion::new([column], term))
        })
        .collect()
    }

    fn project(row: Employee) -> EmployeeListItem {
        row.into()
    }
}

/// Returns every employee matching `request`, sorted by last name then first
/// name.
pub fn list_employees<R>(
    repo: &R,
    request: &EmployeesListRequest,
) -> ServiceResult<Vec<EmployeeListItem>>
where
    R: EmployeeReader + ?Sized,
{
    run_list::<EmployeeListing, _>(request, |query| repo.list_employees(query))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::employee::Department;
    use crate::domain::listing::RowQuery;
    use crate::repository::mock::MockRepository;

    fn request(first_name: Option<&str>, last_name: Option<&str>) -> EmployeesListRequest {
        EmployeesListRequest {
            first_name: first_name.map(str::to_string),
            last_name: last_name.map(str::to_string),
        }
    }

    #[test]
    fn each_name_gets_its_own_criterion() {
        let criteria = EmployeeListing::criteria(&request(Some("Jo"), Some("SM")));
        assert_eq!(
            criteria,
            vec![
                Criterion::new(
                    [EmployeeColumn::FirstName],
                    SearchTerm::parse(Some("jo")).unwrap()
                ),
                Criterion::new(
                    [EmployeeColumn::LastName],
                    SearchTerm::parse(Some("sm")).unwrap()
                ),
            ]
        );
    }

    #[test]
    fn empty_last_name_is_ignored() {
        let mut repo = MockRepository::new();
        repo.expect_list_employees()
            .withf(|query: &RowQuery<EmployeeColumn>| {
                query.criteria.len() == 1
                    && query.criteria[0].columns == vec![EmployeeColumn::FirstName]
                    && query.order == vec![EmployeeColumn::LastName, EmployeeColumn::FirstName]
                    && query.expand
            })
            .times(1)
            .returning(|_| Ok(Vec::new()));

        let items = list_employees(&repo, &request(Some("jo"), Some(""))).unwrap();
        assert!(items.is_empty());
    }

    #[test]
    fn department_is_projected() {
        let mut repo = MockRepository::new();
        repo.expect_list_employees().returning(|_| {
            Ok(vec![Employee {
                id: 4,
                code: "E-004".to_string(),
                first_name: "John".to_string(),
                last_name: "Doe".to_string(),
                department: Some(Department {
                    id: 1,
                    code: "IT".to_string(),
                    description: "Information technology".to_string(),
                }),
                ..Employee::default()
            }])
        });

        let items = list_employees(&repo, &request(None, None)).unwrap();
        let department = items[0].department.as_ref().unwrap();
        assert_eq!(items[0].code, "E-004");
        assert_eq!(department.code, "IT");
        assert_eq!(department.description, "Information technology");
    }
}
