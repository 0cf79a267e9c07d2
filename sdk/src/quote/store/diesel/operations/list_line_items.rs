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

use super::QuoteStoreOperations;
use crate::quote::store::diesel::{
    models::LineItemModel, schema::quote_line_item, QuoteStoreError,
};
use crate::quote::store::LineItem;

use diesel::prelude::*;

pub(in crate::quote::store::diesel) trait QuoteStoreListLineItemsOperation {
    fn list_line_items(&self, quote_ids: &[i64]) -> Result<Vec<LineItem>, QuoteStoreError>;
}

#[cfg(feature = "sqlite")]
impl<'a> QuoteStoreListLineItemsOperation
    for QuoteStoreOperations<'a, diesel::sqlite::SqliteConnection>
{
    fn list_line_items(&self, quote_ids: &[i64]) -> Result<Vec<LineItem>, QuoteStoreError> {
        if quote_ids.is_empty() {
            return Ok(Vec::new());
        }

        let items = quote_line_item::table
            .filter(quote_line_item::quote_id.eq_any(quote_ids))
            .order(quote_line_item::id.asc())
            .load::<LineItemModel>(self.conn)?;

        Ok(items.into_iter().map(LineItem::from).collect())
    }
}
