//! Customer list: free text over name or email, sorted by name.

use crate::domain::customer::{Customer, CustomerColumn};
use crate::domain::listing::{Criterion, SearchTerm};
use crate::dto::customers::{CustomerListItem, CustomersListRequest};
use crate::repository::CustomerReader;
use crate::services::ServiceResult;
use crate::services::listing::{ListShape, run_list};

pub struct CustomerListing;

impl ListShape for CustomerListing {
    type Request = CustomersListRequest;
    type Column = CustomerColumn;
    type Row = Customer;
    type Item = CustomerListItem;

    const ORDER: &'static [CustomerColumn] = &[CustomerColumn::Name];
    const EXPAND: bool = true;

    fn criteria(request: &CustomersListRequest) -> Vec<Criterion<CustomerColumn>> {
        SearchTerm::parse(request.search_text.as_deref())
            .map(|term| Criterion::new([CustomerColumn::Name, CustomerColumn::Email], term))
            .into_iter()
            .collect()
    }

    fn project(row: Customer) -> CustomerListItem {
        row.into()
    }
}

/// Returns every customer matching `request`, sorted by name.
pub fn list_customers<R>(
    repo: &R,
    request: &CustomersListRequest,
) -> ServiceResult<Vec<CustomerListItem>>
where
    R: CustomerReader + ?Sized,
{
    run_list::<CustomerListing, _>(request, |query| repo.list_customers(query))
}
