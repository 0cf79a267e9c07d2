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

//! Shared setup for tests that need a populated SQLite database.

use diesel::connection::SimpleConnection;

use super::sqlite::{create_connection_pool, SqlitePool};
use crate::migrations::run_sqlite_migrations;

/// Mirror tables as the extraction job creates them, reduced to the columns that are read.
pub const MIRROR_TABLES: &str = r#"
CREATE TABLE service_call_details (
    SV00300_Service_Call_ID TEXT,
    PL_CUSTNAME TEXT,
    BillCustomer_CUSTNAME TEXT,
    PL_Labor_Group_Name TEXT,
    Generator_Wennsoft_Model_Number TEXT,
    Generator_Wennsoft_Serial_Number TEXT,
    SV00400_Warranty_Expiration TIMESTAMP,
    ATS_Wennsoft_Model_Number TEXT,
    ATS_Wennsoft_Serial_Number TEXT,
    Engine_Wennsoft_Model_Number TEXT,
    Engine_Wennsoft_Serial_Number TEXT
);
CREATE TABLE sv000805_service_notes (
    Service_Call_ID TEXT,
    Record_Notes TEXT
);
CREATE TABLE sv000123_overhead_groups (
    Labor_Group_Name TEXT,
    Billing_Amount REAL
);
CREATE TABLE iv00102_item_quantity_all (
    ITEMNMBR TEXT,
    LOCNCODE TEXT,
    QTYONHND REAL
);
"#;

/// Sample ERP data for service call `25-00123`, padded the way the ERP exports CHAR columns.
pub const MIRROR_ROWS: &str = r#"
INSERT INTO service_call_details VALUES (
    '25-00123       ', 'Riverside Plant', '   ', 'GEN-SERVICE    ',
    'SD500', 'G-1001', '2999-06-30 00:00:00',
    'ATS-A; ;ATS-B', 'S-1;S-2', 'QSX15', 'E-77'
);
INSERT INTO sv000805_service_notes VALUES ('25-00123   ', '  Replaced fuel filter.  ');
INSERT INTO sv000805_service_notes VALUES ('25-00123   ', '   ');
INSERT INTO sv000805_service_notes VALUES ('25-00123   ', NULL);
INSERT INTO sv000805_service_notes VALUES ('25-00123   ', 'Load bank test passed.');
INSERT INTO sv000805_service_notes VALUES ('25-00999   ', 'Other call.');
INSERT INTO sv000123_overhead_groups VALUES ('GEN-SERVICE', 110.5);
INSERT INTO iv00102_item_quantity_all VALUES ('X1             ', 'MAIN', 4);
INSERT INTO iv00102_item_quantity_all VALUES ('X1             ', 'TRUCK-2', 1.5);
INSERT INTO iv00102_item_quantity_all VALUES ('X2             ', 'MAIN', 0);
"#;

/// Creates an in-memory pool with the quote tables and empty mirror tables.
pub fn create_test_pool() -> Result<SqlitePool, Box<dyn std::error::Error>> {
    let pool = create_connection_pool(":memory:")?;
    {
        let conn = pool.get()?;
        run_sqlite_migrations(&conn)?;
        conn.batch_execute(MIRROR_TABLES)?;
    }
    Ok(pool)
}

/// Creates an in-memory pool with the quote tables and the sample ERP data.
pub fn create_populated_test_pool() -> Result<SqlitePool, Box<dyn std::error::Error>> {
    let pool = create_test_pool()?;
    pool.get()?.batch_execute(MIRROR_ROWS)?;
    Ok(pool)
}
