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

use super::{missing_table_as_empty, trim, ErpStoreOperations};
use crate::erp::store::diesel::{schema::sv000805_service_notes, ErpStoreError};

use diesel::prelude::*;

pub(in crate::erp::store::diesel) trait ErpStoreListServiceNotesOperation {
    fn list_service_notes(&self, service_call_id: &str) -> Result<Vec<String>, ErpStoreError>;
}

#[cfg(feature = "sqlite")]
impl<'a> ErpStoreListServiceNotesOperation
    for ErpStoreOperations<'a, diesel::sqlite::SqliteConnection>
{
    fn list_service_notes(&self, service_call_id: &str) -> Result<Vec<String>, ErpStoreError> {
        let notes = missing_table_as_empty(
            sv000805_service_notes::table
                .select(sv000805_service_notes::record_notes)
                .filter(trim(sv000805_service_notes::service_call_id).eq(service_call_id.trim()))
                .load::<Option<String>>(self.conn),
        )?;

        Ok(notes.into_iter().flatten().collect())
    }
}
