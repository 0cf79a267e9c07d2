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

use std::collections::HashMap;

use diesel::r2d2::{ConnectionManager, Pool};

use super::{ErpStore, ErpStoreError, ServiceCallDetail};

use operations::get_labor_rate::ErpStoreGetLaborRateOperation as _;
use operations::get_service_call_detail::ErpStoreGetServiceCallDetailOperation as _;
use operations::list_on_hand_quantities::ErpStoreListOnHandQuantitiesOperation as _;
use operations::list_service_notes::ErpStoreListServiceNotesOperation as _;
use operations::ErpStoreOperations;

/// Reads the ERP mirror tables from the database
#[derive(Clone)]
pub struct DieselErpStore<C: diesel::Connection + 'static> {
    connection_pool: Pool<ConnectionManager<C>>,
}

impl<C: diesel::Connection> DieselErpStore<C> {
    /// Creates a new DieselErpStore
    ///
    /// # Arguments
    ///
    ///  * `connection_pool`: connection pool to the database
    pub fn new(connection_pool: Pool<ConnectionManager<C>>) -> Self {
        DieselErpStore { connection_pool }
    }
}

#[cfg(feature = "sqlite")]
impl ErpStore for DieselErpStore<diesel::sqlite::SqliteConnection> {
    fn get_service_call_detail(
        &self,
        service_call_id: &str,
    ) -> Result<Option<ServiceCallDetail>, ErpStoreError> {
        ErpStoreOperations::new(&*self.connection_pool.get()?)
            .get_service_call_detail(service_call_id)
    }

    fn list_service_notes(&self, service_call_id: &str) -> Result<Vec<String>, ErpStoreError> {
        ErpStoreOperations::new(&*self.connection_pool.get()?).list_service_notes(service_call_id)
    }

    fn get_labor_rate(&self, labor_group_name: &str) -> Result<Option<f64>, ErpStoreError> {
        ErpStoreOperations::new(&*self.connection_pool.get()?).get_labor_rate(labor_group_name)
    }

    fn list_on_hand_quantities(
        &self,
        part_numbers: &[String],
    ) -> Result<HashMap<String, f64>, ErpStoreError> {
        ErpStoreOperations::new(&*self.connection_pool.get()?)
            .list_on_hand_quantities(part_numbers)
    }
}

#[cfg(all(test, feature = "sqlite"))]
mod tests {
    use super::*;

    use diesel::connection::SimpleConnection;

    use crate::store::sqlite::create_connection_pool;
    use crate::store::testing::create_populated_test_pool;

    #[test]
    fn test_get_service_call_detail() -> Result<(), Box<dyn std::error::Error>> {
        let store = DieselErpStore::new(create_populated_test_pool()?);

        let detail = store
            .get_service_call_detail("25-00123")?
            .expect("Service call not found");
        assert_eq!(detail.customer_name.as_deref(), Some("Riverside Plant"));
        assert_eq!(detail.generator_serial.as_deref(), Some("G-1001"));
        assert_eq!(detail.labor_group_name.as_deref(), Some("GEN-SERVICE    "));

        assert!(store.get_service_call_detail("25-00999")?.is_none());

        Ok(())
    }

    #[test]
    fn test_list_service_notes() -> Result<(), Box<dyn std::error::Error>> {
        let store = DieselErpStore::new(create_populated_test_pool()?);

        let notes = store.list_service_notes("25-00123")?;
        assert_eq!(
            notes,
            vec![
                "  Replaced fuel filter.  ".to_string(),
                "   ".to_string(),
                "Load bank test passed.".to_string(),
            ]
        );

        Ok(())
    }

    #[test]
    fn test_get_labor_rate() -> Result<(), Box<dyn std::error::Error>> {
        let store = DieselErpStore::new(create_populated_test_pool()?);

        assert_eq!(store.get_labor_rate("GEN-SERVICE    ")?, Some(110.5));
        assert_eq!(store.get_labor_rate("UNKNOWN")?, None);

        Ok(())
    }

    /// Quantities are summed over all locations and keyed by the trimmed part number.
    #[test]
    fn test_list_on_hand_quantities() -> Result<(), Box<dyn std::error::Error>> {
        let store = DieselErpStore::new(create_populated_test_pool()?);

        let on_hand = store.list_on_hand_quantities(&[
            "X1".to_string(),
            "X2".to_string(),
            "X9".to_string(),
        ])?;
        assert_eq!(on_hand.len(), 2);
        assert_eq!(on_hand.get("X1"), Some(&5.5));
        assert_eq!(on_hand.get("X2"), Some(&0.0));
        assert_eq!(on_hand.get("X9"), None);

        assert!(store.list_on_hand_quantities(&[])?.is_empty());

        Ok(())
    }

    /// Before the extraction job has run, the mirror reads as empty instead of failing.
    #[test]
    fn test_missing_mirror_tables_read_as_empty() -> Result<(), Box<dyn std::error::Error>> {
        let pool = create_connection_pool(":memory:")?;
        pool.get()?.batch_execute("CREATE TABLE unrelated (id INTEGER);")?;
        let store = DieselErpStore::new(pool);

        assert!(store.get_service_call_detail("25-00123")?.is_none());
        assert!(store.list_service_notes("25-00123")?.is_empty());
        assert_eq!(store.get_labor_rate("GEN-SERVICE")?, None);
        assert!(store
            .list_on_hand_quantities(&["X1".to_string()])?
            .is_empty());

        Ok(())
    }
}
