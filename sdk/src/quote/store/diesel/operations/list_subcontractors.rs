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
    models::SubcontractorModel, schema::subcontractor, QuoteStoreError,
};
use crate::quote::store::Subcontractor;

use diesel::prelude::*;

pub(in crate::quote::store::diesel) trait QuoteStoreListSubcontractorsOperation {
    fn list_subcontractors(&self, quote_ids: &[i64])
        -> Result<Vec<Subcontractor>, QuoteStoreError>;
}

#[cfg(feature = "sqlite")]
impl<'a> QuoteStoreListSubcontractorsOperation
    for QuoteStoreOperations<'a, diesel::sqlite::SqliteConnection>
{
    fn list_subcontractors(
        &self,
        quote_ids: &[i64],
    ) -> Result<Vec<Subcontractor>, QuoteStoreError> {
        if quote_ids.is_empty() {
            return Ok(Vec::new());
        }

        let subcontractors = subcontractor::table
            .filter(subcontractor::quote_id.eq_any(quote_ids))
            .order(subcontractor::id.asc())
            .load::<SubcontractorModel>(self.conn)?;

        Ok(subcontractors
            .into_iter()
            .map(Subcontractor::from)
            .collect())
    }
}
