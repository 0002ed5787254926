//! Repository implementation for customers and their categories.

use std::collections::{BTreeSet, HashMap};

use diesel::prelude::*;
use diesel::sqlite::Sqlite;

use crate::db::contains_folded;
use crate::domain::customer::{
    Customer, CustomerCategory, CustomerColumn, NewCustomer, NewCustomerCategory,
};
use crate::domain::listing::{RowQuery, SearchTerm};
use crate::models::customer::{
    Customer as DbCustomer, CustomerCategory as DbCustomerCategory,
    NewCustomer as DbNewCustomer, NewCustomerCategory as DbNewCustomerCategory,
};
use crate::repository::errors::RepositoryResult;
use crate::repository::{
    CustomerReader, CustomerWriter, DieselRepository, RowFilter, criterion_filter,
};
use crate::schema::{customer_categories, customers};

type CustomerFilter = RowFilter<customers::table>;

fn column_contains(column: CustomerColumn, term: &SearchTerm) -> CustomerFilter {
    let needle = term.as_str().to_owned();
    match column {
        CustomerColumn::Name => Box::new(contains_folded(customers::name, needle)),
        CustomerColumn::Email => Box::new(contains_folded(customers::email, needle)),
    }
}

impl CustomerReader for DieselRepository {
    fn list_customers(&self, query: &RowQuery<CustomerColumn>) -> RepositoryResult<Vec<Customer>> {
        let mut conn = self.conn()?;

        let mut items = customers::table
            .select(DbCustomer::as_select())
            .into_boxed::<Sqlite>();

        for criterion in &query.criteria {
            if let Some(filter) = criterion_filter(criterion, column_contains) {
                items = items.filter(filter);
            }
        }

        for column in &query.order {
            items = match column {
                CustomerColumn::Name => items.then_order_by(customers::name.asc()),
                CustomerColumn::Email => items.then_order_by(customers::email.asc()),
            };
        }
        items = items.then_order_by(customers::id.asc());

        let rows = items.load::<DbCustomer>(&mut conn)?;

        let mut categories: HashMap<i32, CustomerCategory> = HashMap::new();
        if query.expand {
            let category_ids = rows
                .iter()
                .filter_map(|row| row.customer_category_id)
                .collect::<BTreeSet<i32>>()
                .into_iter()
                .collect::<Vec<i32>>();

            if !category_ids.is_empty() {
                categories = customer_categories::table
                    .filter(customer_categories::id.eq_any(category_ids))
                    .select(DbCustomerCategory::as_select())
                    .load::<DbCustomerCategory>(&mut conn)?
                    .into_iter()
                    .map(|category| (category.id, category.into()))
                    .collect();
            }
        }

        let customers = rows
            .into_iter()
            .map(|row| {
                let category = row
                    .customer_category_id
                    .and_then(|id| categories.get(&id).cloned());
                row.into_domain(category)
            })
            .collect();

        Ok(customers)
    }
}

impl CustomerWriter for DieselRepository {
    fn create_customer_category(
        &self,
        new_category: &NewCustomerCategory,
    ) -> RepositoryResult<CustomerCategory> {
        let mut conn = self.conn()?;

        let insertable: DbNewCustomerCategory = new_category.into();
        let category = diesel::insert_into(customer_categories::table)
            .values(&insertable)
            .returning(DbCustomerCategory::as_returning())
            .get_result::<DbCustomerCategory>(&mut conn)?;

        Ok(category.into())
    }

    fn create_customers(&self, new_customers: &[NewCustomer]) -> RepositoryResult<usize> {
        if new_customers.is_empty() {
            return Ok(0);
        }

        let mut conn = self.conn()?;

        let insertables: Vec<DbNewCustomer> = new_customers.iter().map(Into::into).collect();
        let affected = diesel::insert_into(customers::table)
            .values(&insertables)
            .execute(&mut conn)?;

        Ok(affected)
    }
}
