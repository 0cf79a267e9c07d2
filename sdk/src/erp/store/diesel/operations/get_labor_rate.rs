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
use crate::erp::store::diesel::{schema::sv000123_overhead_groups, ErpStoreError};

use diesel::prelude::*;

pub(in crate::erp::store::diesel) trait ErpStoreGetLaborRateOperation {
    fn get_labor_rate(&self, labor_group_name: &str) -> Result<Option<f64>, ErpStoreError>;
}

#[cfg(feature = "sqlite")]
impl<'a> ErpStoreGetLaborRateOperation for ErpStoreOperations<'a, diesel::sqlite::SqliteConnection> {
    fn get_labor_rate(&self, labor_group_name: &str) -> Result<Option<f64>, ErpStoreError> {
        let rate = missing_table_as_empty(
            sv000123_overhead_groups::table
                .select(sv000123_overhead_groups::billing_amount)
                .filter(trim(sv000123_overhead_groups::labor_group_name).eq(labor_group_name.trim()))
                .first::<Option<f64>>(self.conn)
                .optional(),
        )?;

        Ok(rate.flatten())
    }
}
