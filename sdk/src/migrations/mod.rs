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

//! Schema management for the application-owned tables.
//!
//! The ERP mirror tables are created and refreshed by the external extraction job; only the
//! quote tables are managed here.

mod error;
#[cfg(feature = "sqlite")]
mod sqlite;

pub use error::MigrationsError;
#[cfg(feature = "sqlite")]
pub use sqlite::{has_table, run_sqlite_migrations};
