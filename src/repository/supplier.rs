//! Repository implementation for suppliers.

use diesel::prelude::*;
use diesel::sqlite::Sqlite;

use crate::db::contains_folded;
use crate::domain::listing::{RowQuery, SearchTerm};
use crate::domain::supplier::{NewSupplier, Supplier, SupplierColumn};
use crate::models::supplier::{NewSupplier as DbNewSupplier, Supplier as DbSupplier};
use crate::repository::errors::RepositoryResult;
use crate::repository::{
    DieselRepository, RowFilter, SupplierReader, SupplierWriter, criterion_filter,
};
use crate::schema::suppliers;

type SupplierFilter = RowFilter<suppliers::table>;

fn column_contains(column: SupplierColumn, term: &SearchTerm) -> SupplierFilter {
    let needle = term.as_str().to_owned();
    match column {
        SupplierColumn::Name => Box::new(contains_folded(suppliers::name, needle)),
    }
}

impl SupplierReader for DieselRepository {
    fn list_suppliers(&self, query: &RowQuery<SupplierColumn>) -> RepositoryResult<Vec<Supplier>> {
        let mut conn = self.conn()?;

        let mut items = suppliers::table
            .select(DbSupplier::as_select())
            .into_boxed::<Sqlite>();

        for criterion in &query.criteria {
            if let Some(filter) = criterion_filter(criterion, column_contains) {
                items = items.filter(filter);
            }
        }

        for column in &query.order {
            items = match column {
                SupplierColumn::Name => items.then_order_by(suppliers::name.asc()),
            };
        }
        items = items.then_order_by(suppliers::id.asc());

        // Suppliers carry no reference association; `expand` has nothing to load.
        let suppliers = items
            .load::<DbSupplier>(&mut conn)?
            .into_iter()
            .map(Into::into)
            .collect();

        Ok(suppliers)
    }
}

impl SupplierWriter for DieselRepository {
    fn create_suppliers(&self, new_suppliers: &[NewSupplier]) -> RepositoryResult<usize> {
        if new_suppliers.is_empty() {
            return Ok(0);
        }

        let mut conn = self.conn()?;

        let insertables: Vec<DbNewSupplier> = new_suppliers.iter().map(Into::into).collect();
        let affected = diesel::insert_into(suppliers::table)
            .values(&insertables)
            .execute(&mut conn)?;

        Ok(affected)
    }
}
