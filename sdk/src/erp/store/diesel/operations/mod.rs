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

pub(super) mod get_labor_rate;
pub(super) mod get_service_call_detail;
pub(super) mod list_on_hand_quantities;
pub(super) mod list_service_notes;

use diesel::{result::Error as DieselError, sql_types::Text, QueryResult};

sql_function! {
    /// SQL `TRIM`; the ERP pads CHAR columns with trailing blanks.
    fn trim(x: Text) -> Text;
}

pub(super) struct ErpStoreOperations<'a, C> {
    conn: &'a C,
}

impl<'a, C> ErpStoreOperations<'a, C>
where
    C: diesel::Connection,
{
    pub fn new(conn: &'a C) -> Self {
        ErpStoreOperations { conn }
    }
}

/// Reads a missing mirror table as empty. The extraction job drops and recreates the tables, so
/// they may briefly not exist.
fn missing_table_as_empty<T: Default>(result: QueryResult<T>) -> QueryResult<T> {
    match result {
        Err(DieselError::DatabaseError(_, info)) if info.message().starts_with("no such table") => {
            warn!("ERP mirror unavailable: {}", info.message());
            Ok(T::default())
        }
        other => other,
    }
}
