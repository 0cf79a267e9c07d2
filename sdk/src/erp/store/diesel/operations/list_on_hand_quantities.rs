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

use std::collections::HashMap;

use super::{missing_table_as_empty, trim, ErpStoreOperations};
use crate::erp::store::diesel::{schema::iv00102_item_quantity_all, ErpStoreError};

use diesel::prelude::*;

pub(in crate::erp::store::diesel) trait ErpStoreListOnHandQuantitiesOperation {
    fn list_on_hand_quantities(
        &self,
        part_numbers: &[String],
    ) -> Result<HashMap<String, f64>, ErpStoreError>;
}

#[cfg(feature = "sqlite")]
impl<'a> ErpStoreListOnHandQuantitiesOperation
    for ErpStoreOperations<'a, diesel::sqlite::SqliteConnection>
{
    fn list_on_hand_quantities(
        &self,
        part_numbers: &[String],
    ) -> Result<HashMap<String, f64>, ErpStoreError> {
        if part_numbers.is_empty() {
            return Ok(HashMap::new());
        }

        let rows = missing_table_as_empty(
            iv00102_item_quantity_all::table
                .select((
                    trim(iv00102_item_quantity_all::item_number),
                    iv00102_item_quantity_all::quantity_on_hand,
                ))
                .filter(trim(iv00102_item_quantity_all::item_number).eq_any(part_numbers))
                .load::<(String, Option<f64>)>(self.conn),
        )?;

        let mut on_hand = HashMap::new();
        for (part_number, quantity) in rows {
            *on_hand.entry(part_number).or_insert(0.0) += quantity.unwrap_or(0.0);
        }

        Ok(on_hand)
    }
}
