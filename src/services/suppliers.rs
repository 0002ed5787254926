//! Supplier list: name filter, sorted by name. Suppliers have no reference
//! association.

use crate::domain::listing::{Criterion, SearchTerm};
use crate::domain::supplier::{Supplier, SupplierColumn};
use crate::dto::suppliers::{SupplierListItem, SuppliersListRequest};
use crate::repository::SupplierReader;
use crate::services::ServiceResult;
use crate::services::listing::{ListShape, run_list};

pub struct SupplierListing;

impl ListShape for SupplierListing {
    type Request = SuppliersListRequest;
    type Column = SupplierColumn;
    type Row = Supplier;
    type Item = SupplierListItem;

    const ORDER: &'static [SupplierColumn] = &[SupplierColumn::Name];
    const EXPAND: bool = false;

    fn criteria(request: &SuppliersListRequest) -> Vec<Criterion<SupplierColumn>> {
        SearchTerm::parse(request.name.as_deref())
            .map(|term| Criterion::new([SupplierColumn::Name], term))
            .into_iter()
            .collect()
    }

    fn project(row: Supplier) -> SupplierListItem {
        row.into()
    }
}

/// Returns every supplier matching `request`, sorted by name.
pub fn list_suppliers<R>(
    repo: &R,
    request: &SuppliersListRequest,
) -> ServiceResult<Vec<SupplierListItem>>
where
    R: SupplierReader + ?Sized,
{
    run_list::<SupplierListing, _>(request, |query| repo.list_suppliers(query))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::listing::RowQuery;
    use crate::repository::mock::MockRepository;

    #[test]
    fn name_filter_is_lower_cased() {
        let mut repo = MockRepository::new();
        repo.expect_list_suppliers()
            .withf(|query: &RowQuery<SupplierColumn>| {
                query.criteria
                    == vec![Criterion::new(
                        [SupplierColumn::Name],
                        SearchTerm::parse(Some("acme")).unwrap(),
                    )]
                    && query.order == vec![SupplierColumn::Name]
                    && !query.expand
            })
            .times(1)
            .returning(|_| {
                Ok(vec![Supplier {
                    id: 1,
                    name: "ACME Corp".to_string(),
                    ..Supplier::default()
                }])
            });

        let request = SuppliersListRequest {
            name: Some("AcMe".to_string()),
        };
        let items = list_suppliers(&repo, &request).unwrap();
        assert_eq!(items[0].name, "ACME Corp");
    }
}
