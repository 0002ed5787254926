use pushkind_backoffice::domain::customer::NewCustomer;
use pushkind_backoffice::domain::listing::SearchTerm;
use pushkind_backoffice::dto::ReferenceItem;
use pushkind_backoffice::dto::customers::CustomersListRequest;
use pushkind_backoffice::dto::employees::EmployeesListRequest;
use pushkind_backoffice::dto::suppliers::SuppliersListRequest;
use pushkind_backoffice::repository::CustomerWriter;
use pushkind_backoffice::services::customers::list_customers;
use pushkind_backoffice::services::employees::list_employees;
use pushkind_backoffice::services::suppliers::list_suppliers;

mod common;

fn customers_request(search_text: &str) -> CustomersListRequest {
    CustomersListRequest {
        search_text: Some(search_text.to_string()),
    }
}

#[test]
fn test_customers_unfiltered_sorted_with_categories() {
    let test_db = common::TestDb::new("test_customers_unfiltered.db");
    let repo = test_db.repo();
    common::seed(&repo);

    let items = list_customers(&repo, &CustomersListRequest::default()).unwrap();
    let names: Vec<&str> = items.iter().map(|c| c.name.as_str()).collect();
    assert_eq!(names, ["Ana Smith", "Bob Jones", "Carl Ek", "Zeta Traders"]);

    assert_eq!(
        items[0].customer_category,
        Some(ReferenceItem {
            code: "RET".to_string(),
            description: "Retail".to_string(),
        })
    );
    assert_eq!(items[1].customer_category, None);
    assert_eq!(items[2].customer_category, None);
    assert_eq!(
        items[3].customer_category.as_ref().map(|c| c.code.as_str()),
        Some("WHS")
    );
}

#[test]
fn test_customers_empty_filter_equals_unfiltered() {
    let test_db = common::TestDb::new("test_customers_empty_filter.db");
    let repo = test_db.repo();
    common::seed(&repo);

    let unfiltered = list_customers(&repo, &CustomersListRequest::default()).unwrap();
    let empty = list_customers(&repo, &customers_request("")).unwrap();
    assert_eq!(unfiltered, empty);
}

#[test]
fn test_customers_filter_matches_name_or_email_ignoring_case() {
    let test_db = common::TestDb::new("test_customers_filter.db");
    let repo = test_db.repo();
    common::seed(&repo);

    let items = list_customers(&repo, &customers_request("ANA")).unwrap();
    let names: Vec<&str> = items.iter().map(|c| c.name.as_str()).collect();
    // "Bob Jones" matches through dana@x.com.
    assert_eq!(names, ["Ana Smith", "Bob Jones"]);
}

#[test]
fn test_customers_filter_has_no_false_positives_or_negatives() {
    let test_db = common::TestDb::new("test_customers_filter_exact.db");
    let repo = test_db.repo();
    common::seed(&repo);

    let all = list_customers(&repo, &CustomersListRequest::default()).unwrap();
    for needle in ["a", "SMITH", "example", "x.c", "%", "zz"] {
        let term = SearchTerm::parse(Some(needle)).unwrap();
        let expected: Vec<_> = all
            .iter()
            .filter(|c| term.matches(&c.name) || term.matches(&c.email))
            .cloned()
            .collect();
        let actual = list_customers(&repo, &customers_request(needle)).unwrap();
        assert_eq!(actual, expected, "filter {needle:?}");
    }
}

#[test]
fn test_customers_filter_is_not_trimmed() {
    let test_db = common::TestDb::new("test_customers_not_trimmed.db");
    let repo = test_db.repo();
    common::seed(&repo);

    let items = list_customers(&repo, &customers_request(" smith")).unwrap();
    assert_eq!(items.len(), 1);
    assert_eq!(items[0].name, "Ana Smith");

    let items = list_customers(&repo, &customers_request("smith ")).unwrap();
    assert!(items.is_empty());
}

#[test]
fn test_employees_first_name_filter_sorted_by_last_then_first() {
    let test_db = common::TestDb::new("test_employees_first_name.db");
    let repo = test_db.repo();
    common::seed(&repo);

    let request = EmployeesListRequest {
        first_name: Some("jo".to_string()),
        last_name: Some(String::new()),
    };
    let items = list_employees(&repo, &request).unwrap();
    let names: Vec<(&str, &str)> = items
        .iter()
        .map(|e| (e.last_name.as_str(), e.first_name.as_str()))
        .collect();
    assert_eq!(names, [("Adams", "John"), ("Smith", "Joan")]);
}

#[test]
fn test_employees_filters_combine() {
    let test_db = common::TestDb::new("test_employees_combined.db");
    let repo = test_db.repo();
    common::seed(&repo);

    let request = EmployeesListRequest {
        first_name: Some("a".to_string()),
        last_name: Some("SMITH".to_string()),
    };
    let items = list_employees(&repo, &request).unwrap();
    let codes: Vec<&str> = items.iter().map(|e| e.code.as_str()).collect();
    assert_eq!(codes, ["E4", "E1"]);
}

#[test]
fn test_employees_sort_invariant_and_departments() {
    let test_db = common::TestDb::new("test_employees_sort.db");
    let repo = test_db.repo();
    common::seed(&repo);

    let items = list_employees(&repo, &EmployeesListRequest::default()).unwrap();
    assert_eq!(items.len(), 4);
    for pair in items.windows(2) {
        let a = (&pair[0].last_name, &pair[0].first_name, pair[0].id);
        let b = (&pair[1].last_name, &pair[1].first_name, pair[1].id);
        assert!(a <= b, "{a:?} sorted after {b:?}");
    }

    let by_code = |code: &str| items.iter().find(|e| e.code == code).unwrap();
    assert_eq!(
        by_code("E1").department.as_ref().map(|d| d.description.as_str()),
        Some("Sales")
    );
    assert_eq!(
        by_code("E3").department.as_ref().map(|d| d.code.as_str()),
        Some("ACC")
    );
    assert!(by_code("E2").department.is_none());
    assert!(by_code("E4").department.is_none());
}

#[test]
fn test_suppliers_filter_sorted_by_name() {
    let test_db = common::TestDb::new("test_suppliers_filter.db");
    let repo = test_db.repo();
    common::seed(&repo);

    let request = SuppliersListRequest {
        name: Some("acme".to_string()),
    };
    let items = list_suppliers(&repo, &request).unwrap();
    let names: Vec<&str> = items.iter().map(|s| s.name.as_str()).collect();
    // Binary order puts upper-case letters first.
    assert_eq!(names, ["ACME Logistics", "Acme Parts"]);

    let json = serde_json::to_value(&items).unwrap();
    for item in json.as_array().unwrap() {
        assert!(item.get("customerCategory").is_none());
        assert!(item.get("department").is_none());
    }
}

#[test]
fn test_lists_are_empty_without_rows() {
    let test_db = common::TestDb::new("test_lists_empty.db");
    let repo = test_db.repo();

    assert!(list_customers(&repo, &CustomersListRequest::default()).unwrap().is_empty());
    assert!(list_employees(&repo, &EmployeesListRequest::default()).unwrap().is_empty());
    assert!(list_suppliers(&repo, &SuppliersListRequest::default()).unwrap().is_empty());
}

#[test]
fn test_customers_filter_folds_each_character_independently() {
    let test_db = common::TestDb::new("test_customers_sigma.db");
    let repo = test_db.repo();
    repo.create_customers(&[NewCustomer {
        name: "ΟΔΟΣΑ Ltd".to_string(),
        address: String::new(),
        email: String::new(),
        phone: String::new(),
        iban: String::new(),
        customer_category_id: None,
    }])
    .unwrap();

    // A trailing capital sigma in the filter must still match the same
    // letter in the middle of a word.
    let items = list_customers(&repo, &customers_request("ΟΔΟΣ")).unwrap();
    assert_eq!(items.len(), 1);
    assert_eq!(items[0].name, "ΟΔΟΣΑ Ltd");
}
