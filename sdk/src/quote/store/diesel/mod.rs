// Copyright 2018-2022 Cargill Incorporated
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

pub mod models;
mod operations;
pub(crate) mod schema;

use diesel::r2d2::{ConnectionManager, Pool};

use super::{LineItem, Quote, QuoteRevision, QuoteStore, QuoteStoreError, Subcontractor};

use operations::list_line_items::QuoteStoreListLineItemsOperation as _;
use operations::list_quotes::QuoteStoreListQuotesOperation as _;
use operations::list_subcontractors::QuoteStoreListSubcontractorsOperation as _;
use operations::save_quote_revision::QuoteStoreSaveQuoteRevisionOperation as _;
use operations::QuoteStoreOperations;

/// Manages quote revisions in the database
#[derive(Clone)]
pub struct DieselQuoteStore<C: diesel::Connection + 'static> {
    connection_pool: Pool<ConnectionManager<C>>,
}

impl<C: diesel::Connection> DieselQuoteStore<C> {
    /// Creates a new DieselQuoteStore
    ///
    /// # Arguments
    ///
    ///  * `connection_pool`: connection pool to the database
    pub fn new(connection_pool: Pool<ConnectionManager<C>>) -> Self {
        DieselQuoteStore { connection_pool }
    }
}

#[cfg(feature = "sqlite")]
impl QuoteStore for DieselQuoteStore<diesel::sqlite::SqliteConnection> {
    fn list_quotes(&self, service_call_id: &str) -> Result<Vec<Quote>, QuoteStoreError> {
        QuoteStoreOperations::new(&*self.connection_pool.get()?).list_quotes(service_call_id)
    }

    fn list_line_items(&self, quote_ids: &[i64]) -> Result<Vec<LineItem>, QuoteStoreError> {
        QuoteStoreOperations::new(&*self.connection_pool.get()?).list_line_items(quote_ids)
    }

    fn list_subcontractors(
        &self,
        quote_ids: &[i64],
    ) -> Result<Vec<Subcontractor>, QuoteStoreError> {
        QuoteStoreOperations::new(&*self.connection_pool.get()?).list_subcontractors(quote_ids)
    }

    fn save_quote_revision(&self, revision: QuoteRevision) -> Result<i64, QuoteStoreError> {
        QuoteStoreOperations::new(&*self.connection_pool.get()?).save_quote_revision(&revision)
    }
}

#[cfg(all(test, feature = "sqlite"))]
mod tests {
    use super::*;

    use pretty_assertions::assert_eq;

    use crate::quote::store::{Labor, NewLineItem, NewSubcontractor, QuoteRevisionBuilder};
    use crate::store::testing::create_test_pool;

    fn part(number: &str, quantity: f64, unit_cost: f64) -> NewLineItem {
        NewLineItem {
            part_number: Some(number.to_string()),
            description: Some(format!("{} description", number)),
            vendor: Some("Acme".to_string()),
            on_hand: Some("N/A".to_string()),
            quantity,
            unit_cost,
        }
    }

    fn revision(id: &str, number: i64, parts: Vec<NewLineItem>) -> QuoteRevision {
        QuoteRevisionBuilder::new()
            .with_service_call_id(id)
            .with_revision(number)
            .with_description(format!("Revision {}", number))
            .with_customer_name(Some("Plant 4".to_string()))
            .with_labor(Labor {
                tech_count: 2,
                tech_hours: 4.0,
                travel_hours: 1.5,
                tech_rate: 95.0,
                travel_rate: 75.0,
            })
            .with_line_items(parts)
            .with_subcontractors(vec![NewSubcontractor {
                contact_name: Some("Crane Co".to_string()),
                contact_details: Some("555-0100".to_string()),
                cost: 400.0,
            }])
            .build()
            .expect("Unable to build revision")
    }

    /// Saving a revision and reading it back returns the header, the line items with computed
    /// totals, and the subcontractors.
    #[test]
    fn test_save_and_list_revision() -> Result<(), Box<dyn std::error::Error>> {
        let store = DieselQuoteStore::new(create_test_pool()?);

        let quote_id = store.save_quote_revision(revision(
            "25-00123",
            1,
            vec![part("X1", 3.0, 10.0), part("X2", 0.5, 8.0)],
        ))?;

        let quotes = store.list_quotes("25-00123")?;
        assert_eq!(quotes.len(), 1);
        assert_eq!(quotes[0].id, quote_id);
        assert_eq!(quotes[0].status, "Draft");
        assert_eq!(quotes[0].labor.tech_count, 2);
        assert_eq!(quotes[0].customer_name.as_deref(), Some("Plant 4"));

        let items = store.list_line_items(&[quote_id])?;
        assert_eq!(items.len(), 2);
        assert_eq!(items[0].part_number.as_deref(), Some("X1"));
        assert_eq!(items[0].total_cost, 30.0);
        assert_eq!(items[1].total_cost, 4.0);

        let subs = store.list_subcontractors(&[quote_id])?;
        assert_eq!(subs.len(), 1);
        assert_eq!(subs[0].cost, 400.0);

        Ok(())
    }

    /// Saving the same revision twice leaves only the second set of children, and no orphans.
    #[test]
    fn test_resave_replaces_revision() -> Result<(), Box<dyn std::error::Error>> {
        let store = DieselQuoteStore::new(create_test_pool()?);

        let first_id = store.save_quote_revision(revision(
            "25-00123",
            1,
            vec![part("X1", 3.0, 10.0), part("X2", 1.0, 1.0), part("X3", 1.0, 1.0)],
        ))?;
        let second_id = store.save_quote_revision(revision("25-00123", 1, vec![]))?;

        assert_ne!(first_id, second_id);

        let quotes = store.list_quotes("25-00123")?;
        assert_eq!(quotes.len(), 1);
        assert_eq!(quotes[0].id, second_id);

        assert!(store.list_line_items(&[second_id])?.is_empty());
        assert!(store.list_line_items(&[first_id])?.is_empty());
        assert!(store.list_subcontractors(&[first_id])?.is_empty());
        assert_eq!(store.list_subcontractors(&[second_id])?.len(), 1);

        Ok(())
    }

    /// Revisions are kept apart per revision number and listed in ascending order.
    #[test]
    fn test_revisions_are_independent() -> Result<(), Box<dyn std::error::Error>> {
        let store = DieselQuoteStore::new(create_test_pool()?);

        let second = store.save_quote_revision(revision("25-00123", 2, vec![part("B", 1.0, 2.0)]))?;
        let first = store.save_quote_revision(revision("25-00123", 1, vec![part("A", 1.0, 1.0)]))?;
        store.save_quote_revision(revision("25-00999", 1, vec![part("C", 1.0, 1.0)]))?;

        let revisions: Vec<i64> = store
            .list_quotes("25-00123")?
            .into_iter()
            .map(|quote| quote.revision)
            .collect();
        assert_eq!(revisions, vec![1, 2]);

        let items = store.list_line_items(&[first, second])?;
        let parts: Vec<Option<String>> = items.into_iter().map(|item| item.part_number).collect();
        assert_eq!(parts, vec![Some("B".to_string()), Some("A".to_string())]);

        Ok(())
    }
}
