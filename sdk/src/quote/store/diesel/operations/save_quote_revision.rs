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

use super::{trim, QuoteStoreOperations};
use crate::quote::store::diesel::{
    models::{make_line_item_models, make_subcontractor_models, NewQuoteModel},
    schema::{quote, quote_line_item, subcontractor},
    QuoteStoreError,
};
use crate::quote::store::QuoteRevision;

use diesel::{
    dsl::{delete, insert_into},
    prelude::*,
};

no_arg_sql_function!(
    last_insert_rowid,
    diesel::sql_types::BigInt,
    "Row id of the most recent insert on this connection"
);

pub(in crate::quote::store::diesel) trait QuoteStoreSaveQuoteRevisionOperation {
    fn save_quote_revision(&self, revision: &QuoteRevision) -> Result<i64, QuoteStoreError>;
}

#[cfg(feature = "sqlite")]
impl<'a> QuoteStoreSaveQuoteRevisionOperation
    for QuoteStoreOperations<'a, diesel::sqlite::SqliteConnection>
{
    fn save_quote_revision(&self, revision: &QuoteRevision) -> Result<i64, QuoteStoreError> {
        self.conn.transaction::<_, QuoteStoreError, _>(|| {
            let replaced = quote::table
                .select(quote::id)
                .filter(trim(quote::service_call_id).eq(revision.service_call_id()))
                .filter(quote::revision.eq(revision.revision()))
                .load::<i64>(self.conn)?;

            if !replaced.is_empty() {
                debug!(
                    "Replacing revision {} of service call {} (quote ids {:?})",
                    revision.revision(),
                    revision.service_call_id(),
                    replaced
                );

                // Children are removed explicitly; tables created before foreign keys were
                // enforced may not cascade.
                delete(quote_line_item::table.filter(quote_line_item::quote_id.eq_any(&replaced)))
                    .execute(self.conn)?;
                delete(subcontractor::table.filter(subcontractor::quote_id.eq_any(&replaced)))
                    .execute(self.conn)?;
                delete(quote::table.filter(quote::id.eq_any(&replaced))).execute(self.conn)?;
            }

            insert_into(quote::table)
                .values(NewQuoteModel::from(revision))
                .execute(self.conn)?;

            let quote_id = diesel::select(last_insert_rowid).get_result::<i64>(self.conn)?;

            let line_items = make_line_item_models(quote_id, revision.line_items());
            if !line_items.is_empty() {
                insert_into(quote_line_item::table)
                    .values(line_items)
                    .execute(self.conn)?;
            }

            let subcontractors = make_subcontractor_models(quote_id, revision.subcontractors());
            if !subcontractors.is_empty() {
                insert_into(subcontractor::table)
                    .values(subcontractors)
                    .execute(self.conn)?;
            }

            debug!(
                "Saved revision {} of service call {} as quote {}",
                revision.revision(),
                revision.service_call_id(),
                quote_id
            );

            Ok(quote_id)
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use diesel::connection::SimpleConnection;

    use crate::migrations::run_sqlite_migrations;
    use crate::quote::store::{Labor, NewLineItem, QuoteRevisionBuilder};

    fn revision_with_parts(count: usize) -> QuoteRevision {
        QuoteRevisionBuilder::new()
            .with_service_call_id("25-00123")
            .with_revision(1)
            .with_description("Load bank test".to_string())
            .with_labor(Labor::default())
            .with_line_items(
                (0..count)
                    .map(|i| NewLineItem {
                        part_number: Some(format!("P{}", i)),
                        quantity: 1.0,
                        unit_cost: 2.0,
                        ..Default::default()
                    })
                    .collect(),
            )
            .build()
            .expect("Unable to build revision")
    }

    /// A failure while inserting the new children rolls back the delete of the previous
    /// revision.
    #[test]
    fn test_failed_save_keeps_previous_revision() -> Result<(), Box<dyn std::error::Error>> {
        let conn = SqliteConnection::establish(":memory:")?;
        run_sqlite_migrations(&conn)?;
        let ops = QuoteStoreOperations::new(&conn);

        let original_id = ops.save_quote_revision(&revision_with_parts(2))?;

        conn.batch_execute(
            "CREATE TRIGGER reject_line_items BEFORE INSERT ON quote_line_item
             BEGIN SELECT RAISE(ABORT, 'line items rejected'); END;",
        )?;

        assert!(ops.save_quote_revision(&revision_with_parts(1)).is_err());

        let ids = quote::table.select(quote::id).load::<i64>(&conn)?;
        assert_eq!(ids, vec![original_id]);
        let items = quote_line_item::table
            .filter(quote_line_item::quote_id.eq(original_id))
            .count()
            .get_result::<i64>(&conn)?;
        assert_eq!(items, 2);

        Ok(())
    }

    /// Rows saved with padded service call ids are still replaced.
    #[test]
    fn test_save_replaces_padded_service_call_id() -> Result<(), Box<dyn std::error::Error>> {
        let conn = SqliteConnection::establish(":memory:")?;
        run_sqlite_migrations(&conn)?;
        conn.batch_execute(
            "INSERT INTO quote (service_call_id, revision, description)
             VALUES ('25-00123   ', 1, 'legacy');",
        )?;
        let ops = QuoteStoreOperations::new(&conn);

        let quote_id = ops.save_quote_revision(&revision_with_parts(0))?;

        let ids = quote::table.select(quote::id).load::<i64>(&conn)?;
        assert_eq!(ids, vec![quote_id]);

        Ok(())
    }
}
