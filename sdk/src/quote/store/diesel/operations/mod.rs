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

pub(super) mod list_line_items;
pub(super) mod list_quotes;
pub(super) mod list_subcontractors;
pub(super) mod save_quote_revision;

use diesel::sql_types::Text;

sql_function! {
    /// SQL `TRIM`; stored service call ids may carry padding from older saves.
    fn trim(x: Text) -> Text;
}

pub(super) struct QuoteStoreOperations<'a, C> {
    conn: &'a C,
}

impl<'a, C> QuoteStoreOperations<'a, C>
where
    C: diesel::Connection,
{
    pub fn new(conn: &'a C) -> Self {
        QuoteStoreOperations { conn }
    }
}
