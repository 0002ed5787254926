//! The filtered list query shared by every directory list.
//!
//! An entity plugs into [`run_list`] by implementing [`ListShape`]: how the
//! request becomes filter criteria, which columns define the sort order,
//! whether the reference association is expanded and how a row is projected
//! into its list item.

use crate::domain::listing::{Criterion, RowQuery};
use crate::repository::errors::RepositoryResult;
use crate::services::ServiceResult;

pub trait ListShape {
    type Request;
    type Column: Copy + 'static;
    type Row;
    type Item;

    /// Sort keys, most significant first.
    const ORDER: &'static [Self::Column];
    /// Whether rows come with their reference association loaded.
    const EXPAND: bool;

    /// Criteria for every supplied, non-blank filter field.
    fn criteria(request: &Self::Request) -> Vec<Criterion<Self::Column>>;

    fn project(row: Self::Row) -> Self::Item;
}

/// Builds the storage query for `request`.
pub fn row_query<S: ListShape>(request: &S::Request) -> RowQuery<S::Column> {
    let mut query = S::criteria(request)
        .into_iter()
        .fold(RowQuery::new(), RowQuery::filter)
        .order_by(S::ORDER.iter().copied());
    if S::EXPAND {
        query = query.expand();
    }
    query
}

/// Runs the list query through `fetch` and projects every returned row.
///
/// The complete matching set is returned in storage order, or the storage
/// error is returned unchanged.
pub fn run_list<S, F>(request: &S::Request, fetch: F) -> ServiceResult<Vec<S::Item>>
where
    S: ListShape,
    F: FnOnce(&RowQuery<S::Column>) -> RepositoryResult<Vec<S::Row>>,
{
    let query = row_query::<S>(request);
    let rows = fetch(&query)?;
    log::debug!(
        "List query with {} criteria returned {} rows",
        query.criteria.len(),
        rows.len()
    );
    Ok(rows.into_iter().map(S::project).collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::listing::SearchTerm;
    use crate::repository::errors::RepositoryError;
    use crate::services::ServiceError;

    struct Words;

    impl ListShape for Words {
        type Request = Option<String>;
        type Column = u8;
        type Row = &'static str;
        type Item = String;

        const ORDER: &'static [u8] = &[2, 1];
        const EXPAND: bool = true;

        fn criteria(request: &Option<String>) -> Vec<Criterion<u8>> {
            SearchTerm::parse(request.as_deref())
                .map(|term| Criterion::new([1], term))
                .into_iter()
                .collect()
        }

        fn project(row: &'static str) -> String {
            row.to_uppercase()
        }
    }

    #[test]
    fn query_carries_order_and_expand_without_criteria() {
        let query = row_query::<Words>(&None);
        assert!(query.criteria.is_empty());
        assert_eq!(query.order, vec![2, 1]);
        assert!(query.expand);
    }

    #[test]
    fn blank_request_adds_no_criteria() {
        let query = row_query::<Words>(&Some("  ".to_string()));
        assert!(query.criteria.is_empty());
    }

    #[test]
    fn rows_are_projected_in_order() {
        let items = run_list::<Words, _>(&Some("A".to_string()), |query| {
            assert_eq!(query.criteria.len(), 1);
            assert_eq!(query.criteria[0].term.as_str(), "a");
            Ok(vec!["b", "a"])
        })
        .unwrap();
        assert_eq!(items, vec!["B".to_string(), "A".to_string()]);
    }

    #[test]
    fn storage_errors_pass_through() {
        let result = run_list::<Words, _>(&None, |_| {
            Err(RepositoryError::ConnectionError("down".to_string()))
        });
        assert!(matches!(
            result,
            Err(ServiceError::Repository(RepositoryError::ConnectionError(_)))
        ));
    }
}
