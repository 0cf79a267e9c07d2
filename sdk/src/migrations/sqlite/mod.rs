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
    prelude::*,
    sql_query,
    sql_types::Text,
    sqlite::SqliteConnection,
};

use super::MigrationsError;
use crate::error::ResourceTemporarilyUnavailableError;

embed_migrations!("./src/migrations/sqlite/migrations");

#[derive(QueryableByName)]
struct TableName {
    #[sql_type = "Text"]
    #[allow(dead_code)]
    name: String,
}

/// Returns true if a table with the given name exists in the database.
pub fn has_table(conn: &SqliteConnection, table: &str) -> Result<bool, MigrationsError> {
    let found = sql_query("SELECT name FROM sqlite_master WHERE type = 'table' AND name = ?")
        .bind::<Text, _>(table)
        .load::<TableName>(conn)?;

    Ok(!found.is_empty())
}

/// Creates the quote tables if they are missing.
///
/// The embedded migrations only use `CREATE ... IF NOT EXISTS`, so a database that already holds
/// quote tables from an earlier deployment is left untouched.
///
/// # Arguments
///
/// * `conn` - Connection to the SQLite database
///
pub fn run_sqlite_migrations(conn: &SqliteConnection) -> Result<(), MigrationsError> {
    if has_table(conn, "quote")? {
        debug!("Quote tables found, checking for pending migrations");
    } else {
        warn!("Application tables not found, initializing quote schema");
    }

    embedded_migrations::run(conn).map_err(|err| {
        MigrationsError::ResourceTemporarilyUnavailableError(
            ResourceTemporarilyUnavailableError::from_source(Box::new(err)),
        )
    })?;

    info!("Successfully applied Quotesheet migrations");

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    use diesel::connection::SimpleConnection;

    use crate::quote::store::diesel::schema::quote;

    #[test]
    fn test_migrations_create_quote_tables() -> Result<(), Box<dyn std::error::Error>> {
        let conn = SqliteConnection::establish(":memory:")?;

        assert!(!has_table(&conn, "quote")?);

        run_sqlite_migrations(&conn)?;

        assert!(has_table(&conn, "quote")?);
        assert!(has_table(&conn, "quote_line_item")?);
        assert!(has_table(&conn, "subcontractor")?);

        Ok(())
    }

    /// A database created by an earlier deployment keeps its existing rows.
    #[test]
    fn test_migrations_keep_existing_quote_table() -> Result<(), Box<dyn std::error::Error>> {
        let conn = SqliteConnection::establish(":memory:")?;
        conn.batch_execute(
            "CREATE TABLE quote (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                service_call_id TEXT NOT NULL,
                revision INTEGER NOT NULL,
                description TEXT,
                customer_name TEXT,
                status TEXT NOT NULL DEFAULT 'Draft',
                tech_count INTEGER,
                tech_hours REAL,
                travel_hours REAL,
                tech_rate REAL,
                travel_rate REAL
            );
            INSERT INTO quote (service_call_id, revision) VALUES ('25-00001', 1);",
        )?;

        run_sqlite_migrations(&conn)?;

        assert!(has_table(&conn, "quote_line_item")?);
        let remaining = quote::table.count().get_result::<i64>(&conn)?;
        assert_eq!(remaining, 1);

        Ok(())
    }
}
