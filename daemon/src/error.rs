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

use std::error::Error;
use std::fmt;

use flexi_logger::FlexiLoggerError;
use quotesheet_sdk::error::InternalError;

use crate::config::error::ConfigError;

#[derive(Debug)]
pub enum DaemonError {
    ConfigurationError(Box<ConfigError>),
    DatabaseError(Box<dyn Error>),
    LoggingInitializationError(Box<FlexiLoggerError>),
    StartUpError(Box<dyn Error>),
    RestApiError(InternalError),
}

impl Error for DaemonError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            DaemonError::ConfigurationError(err) => Some(err),
            DaemonError::DatabaseError(err) => Some(&**err),
            DaemonError::LoggingInitializationError(err) => Some(err),
            DaemonError::StartUpError(err) => Some(&**err),
            DaemonError::RestApiError(err) => Some(err),
        }
    }
}

impl fmt::Display for DaemonError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            DaemonError::ConfigurationError(e) => write!(f, "Configuration Error: {}", e),
            DaemonError::DatabaseError(e) => write!(f, "Database Error: {}", e),
            DaemonError::LoggingInitializationError(e) => {
                write!(f, "Logging initialization error: {}", e)
            }
            DaemonError::StartUpError(e) => write!(f, "Start-up error: {}", e),
            DaemonError::RestApiError(e) => write!(f, "REST API error: {}", e),
        }
    }
}

impl From<ConfigError> for DaemonError {
    fn from(err: ConfigError) -> DaemonError {
        DaemonError::ConfigurationError(Box::new(err))
    }
}

impl From<FlexiLoggerError> for DaemonError {
    fn from(err: FlexiLoggerError) -> DaemonError {
        DaemonError::LoggingInitializationError(Box::new(err))
    }
}
