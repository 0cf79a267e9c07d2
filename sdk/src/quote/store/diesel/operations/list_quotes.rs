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
use crate::quote::store::diesel::{models::QuoteModel, schema::quote, QuoteStoreError};
use crate::quote::store::Quote;

use diesel::prelude::*;

pub(in crate::quote::store::diesel) trait QuoteStoreListQuotesOperation {
    fn list_quotes(&self, service_call_id: &str) -> Result<Vec<Quote>, QuoteStoreError>;
}

#[cfg(feature = "sqlite")]
impl<'a> QuoteStoreListQuotesOperation for QuoteStoreOperations<'a, diesel::sqlite::SqliteConnection> {
    fn list_quotes(&self, service_call_id: &str) -> Result<Vec<Quote>, QuoteStoreError> {
        let quotes = quote::table
            .filter(trim(quote::service_call_id).eq(service_call_id.trim()))
            .order((quote::revision.asc(), quote::id.asc()))
            .load::<QuoteModel>(self.conn)?;

        Ok(quotes.into_iter().map(Quote::from).collect())
    }
}
