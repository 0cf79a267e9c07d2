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

#[cfg(feature = "sqlite")]
pub mod sqlite;
#[cfg(all(test, feature = "sqlite"))]
pub(crate) mod testing;

use std::str::FromStr;

use crate::erp::store::ErpStore;
use crate::error::InternalError;
use crate::quote::store::QuoteStore;

/// An abstract factory for the stores that share one underlying database
pub trait StoreFactory {
    /// Get a new `QuoteStore`
    fn get_quote_store(&self) -> Box<dyn QuoteStore>;
    /// Get a new `ErpStore`
    fn get_erp_store(&self) -> Box<dyn ErpStore>;
}

/// The possible connection types and identifiers for a `StoreFactory`
#[derive(Clone, Debug, PartialEq)]
pub enum ConnectionUri {
    #[cfg(feature = "sqlite")]
    Sqlite(String),
}

impl FromStr for ConnectionUri {
    type Err = InternalError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            _ if s.starts_with("postgres://") => Err(InternalError::with_message(format!(
                "Unsupported database connection: {}",
                s
            ))),
            #[cfg(feature = "sqlite")]
            _ => Ok(ConnectionUri::Sqlite(
                s.strip_prefix("sqlite://").unwrap_or(s).to_string(),
            )),
            #[cfg(not(feature = "sqlite"))]
            _ => Err(InternalError::with_message(format!(
                "No compatible connection type: {}",
                s
            ))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_connection_uri() {
        assert_eq!(
            ConnectionUri::from_str("test_data_trim.db").ok(),
            Some(ConnectionUri::Sqlite("test_data_trim.db".to_string()))
        );
        assert_eq!(
            ConnectionUri::from_str("sqlite://:memory:").ok(),
            Some(ConnectionUri::Sqlite(":memory:".to_string()))
        );
        assert!(ConnectionUri::from_str("postgres://db:5432/quotes").is_err());
    }
}
