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

use diesel::{
    connection::SimpleConnection,
    r2d2::{self, ConnectionManager, CustomizeConnection, Pool},
    sqlite::SqliteConnection,
};

use super::StoreFactory;
use crate::erp::store::{diesel::DieselErpStore, ErpStore};
use crate::error::InternalError;
use crate::quote::store::{diesel::DieselQuoteStore, QuoteStore};

/// Connection pool type shared by the SQLite-backed stores
pub type SqlitePool = Pool<ConnectionManager<SqliteConnection>>;

/// Turns on foreign key enforcement, which SQLite leaves off for every new connection.
#[derive(Debug)]
struct ForeignKeysOn;

impl CustomizeConnection<SqliteConnection, r2d2::Error> for ForeignKeysOn {
    fn on_acquire(&self, conn: &mut SqliteConnection) -> Result<(), r2d2::Error> {
        conn.batch_execute("PRAGMA foreign_keys = ON;")
            .map_err(r2d2::Error::QueryError)
    }
}

/// Builds a connection pool for the SQLite database at `conn_str`.
///
/// Every pooled connection enforces foreign keys. The in-memory database is limited to a single
/// connection that is never recycled, since each new connection to `:memory:` would otherwise
/// open a separate, empty database.
pub fn create_connection_pool(conn_str: &str) -> Result<SqlitePool, InternalError> {
    let connection_manager = ConnectionManager::<SqliteConnection>::new(conn_str);
    let mut pool_builder = Pool::builder().connection_customizer(Box::new(ForeignKeysOn));
    if conn_str == ":memory:" {
        pool_builder = pool_builder
            .max_size(1)
            .max_lifetime(None)
            .idle_timeout(None);
    }
    pool_builder.build(connection_manager).map_err(|err| {
        InternalError::from_source_with_prefix(
            Box::new(err),
            "Failed to build connection pool".to_string(),
        )
    })
}

/// A `StoreFactory` backed by a SQLite database.
pub struct SqliteStoreFactory {
    pool: SqlitePool,
}

impl SqliteStoreFactory {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

impl StoreFactory for SqliteStoreFactory {
    fn get_quote_store(&self) -> Box<dyn QuoteStore> {
        Box::new(DieselQuoteStore::new(self.pool.clone()))
    }

    fn get_erp_store(&self) -> Box<dyn ErpStore> {
        Box::new(DieselErpStore::new(self.pool.clone()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use diesel::{prelude::*, sql_query, sql_types::BigInt};

    #[derive(QueryableByName)]
    struct Pragma {
        #[sql_type = "BigInt"]
        foreign_keys: i64,
    }

    #[test]
    fn test_pooled_connections_enforce_foreign_keys() -> Result<(), Box<dyn std::error::Error>> {
        let pool = create_connection_pool(":memory:")?;
        let conn = pool.get()?;

        let pragma = sql_query("PRAGMA foreign_keys").load::<Pragma>(&*conn)?;
        assert_eq!(pragma.len(), 1);
        assert_eq!(pragma[0].foreign_keys, 1);

        Ok(())
    }

    #[test]
    fn test_in_memory_pool_shares_one_connection() -> Result<(), Box<dyn std::error::Error>> {
        let pool = create_connection_pool(":memory:")?;
        assert_eq!(pool.max_size(), 1);
        assert_eq!(pool.max_lifetime(), None);
        assert_eq!(pool.idle_timeout(), None);

        Ok(())
    }

    /// A file database keeps r2d2's default pool settings.
    #[test]
    fn test_file_pool_recycles_connections() -> Result<(), Box<dyn std::error::Error>> {
        let path = std::env::temp_dir().join(format!("quotesheet-pool-{}.db", std::process::id()));
        let pool = create_connection_pool(&path.to_string_lossy())?;
        assert!(pool.max_size() > 1);
        assert!(pool.max_lifetime().is_some());

        drop(pool);
        let _ = std::fs::remove_file(&path);

        Ok(())
    }
}
