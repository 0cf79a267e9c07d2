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

//! An intermediate representation of the daemon configuration, taken from one source.

use crate::config::error::ConfigError;

/// Displays the source of the configuration value
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigSource {
    Default,
    Environment,
    CommandLine,
}

/// Builds a `PartialConfig` from one source of configuration values
pub trait PartialConfigBuilder {
    fn build(self) -> Result<PartialConfig, ConfigError>;
}

pub struct PartialConfig {
    source: ConfigSource,
    bind: Option<String>,
    database_url: Option<String>,
    llm_url: Option<String>,
    llm_model: Option<String>,
    llm_timeout: Option<u64>,
    verbosity: Option<log::Level>,
}

impl PartialConfig {
    pub fn new(source: ConfigSource) -> Self {
        PartialConfig {
            source,
            bind: None,
            database_url: None,
            llm_url: None,
            llm_model: None,
            llm_timeout: None,
            verbosity: None,
        }
    }

    pub fn source(&self) -> ConfigSource {
        self.source.clone()
    }

    pub fn bind(&self) -> Option<String> {
        self.bind.clone()
    }

    pub fn database_url(&self) -> Option<String> {
        self.database_url.clone()
    }

    pub fn llm_url(&self) -> Option<String> {
        self.llm_url.clone()
    }

    pub fn llm_model(&self) -> Option<String> {
        self.llm_model.clone()
    }

    pub fn llm_timeout(&self) -> Option<u64> {
        self.llm_timeout
    }

    pub fn verbosity(&self) -> Option<log::Level> {
        self.verbosity
    }

    /// Adds a `bind` value to the `PartialConfig` object.
    ///
    /// # Arguments
    ///
    /// * `bind` - Endpoint the REST API will bind to
    ///
    pub fn with_bind(mut self, bind: Option<String>) -> Self {
        self.bind = bind;
        self
    }

    /// Adds a `database_url` value to the `PartialConfig` object.
    ///
    /// # Arguments
    ///
    /// * `database_url` - Location of the SQLite database holding the ERP mirror and the quotes
    ///
    pub fn with_database_url(mut self, database_url: Option<String>) -> Self {
        self.database_url = database_url;
        self
    }

    /// Adds an `llm_url` value to the `PartialConfig` object.
    ///
    /// # Arguments
    ///
    /// * `llm_url` - Address of the language model server
    ///
    pub fn with_llm_url(mut self, llm_url: Option<String>) -> Self {
        self.llm_url = llm_url;
        self
    }

    pub fn with_llm_model(mut self, llm_model: Option<String>) -> Self {
        self.llm_model = llm_model;
        self
    }

    /// Adds an `llm_timeout` value, in seconds, to the `PartialConfig` object.
    pub fn with_llm_timeout(mut self, llm_timeout: Option<u64>) -> Self {
        self.llm_timeout = llm_timeout;
        self
    }

    /// Adds a `verbosity` value to the `PartialConfig` object.
    ///
    /// # Arguments
    ///
    /// * `verbosity` - Level of logging to be performed
    ///
    pub fn with_verbosity(mut self, verbosity: Option<log::Level>) -> Self {
        self.verbosity = verbosity;
        self
    }
}

/// Parses a timeout given in whole seconds.
pub(super) fn parse_timeout(raw: &str) -> Result<u64, ConfigError> {
    raw.trim().parse::<u64>().map_err(|_| {
        ConfigError::InvalidArgument(format!(
            "llm_timeout must be a whole number of seconds, got '{}'",
            raw
        ))
    })
}
