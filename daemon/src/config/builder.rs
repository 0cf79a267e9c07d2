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

//! Combines `PartialConfig` objects into a final `Config`.

use std::time::Duration;

use crate::config::{error::ConfigError, Config, ConfigSource, PartialConfig};

/// Collects `PartialConfig` objects and merges them into a `Config`.
///
/// Partial configs are consulted in the order they were added, so the first one holding a value
/// for a setting wins.
#[derive(Default)]
pub struct ConfigBuilder {
    partial_configs: Vec<PartialConfig>,
}

impl ConfigBuilder {
    pub fn new() -> Self {
        ConfigBuilder {
            partial_configs: Vec::new(),
        }
    }

    pub fn with_partial_config(mut self, partial: PartialConfig) -> Self {
        self.partial_configs.push(partial);
        self
    }

    pub fn build(self) -> Result<Config, ConfigError> {
        let bind = self
            .first_value(PartialConfig::bind)
            .ok_or_else(|| ConfigError::MissingValue("bind".to_string()))?;
        let database_url = self
            .first_value(PartialConfig::database_url)
            .ok_or_else(|| ConfigError::MissingValue("database_url".to_string()))?;
        let llm_url = self
            .first_value(PartialConfig::llm_url)
            .ok_or_else(|| ConfigError::MissingValue("llm_url".to_string()))?;
        let llm_model = self
            .first_value(PartialConfig::llm_model)
            .ok_or_else(|| ConfigError::MissingValue("llm_model".to_string()))?;
        let (llm_timeout, llm_timeout_source) = self
            .first_value(PartialConfig::llm_timeout)
            .ok_or_else(|| ConfigError::MissingValue("llm_timeout".to_string()))?;
        let verbosity = self
            .first_value(PartialConfig::verbosity)
            .ok_or_else(|| ConfigError::MissingValue("verbosity".to_string()))?;

        Ok(Config {
            bind,
            database_url,
            llm_url,
            llm_model,
            llm_timeout: (Duration::from_secs(llm_timeout), llm_timeout_source),
            verbosity,
        })
    }

    fn first_value<T, F>(&self, get: F) -> Option<(T, ConfigSource)>
    where
        F: Fn(&PartialConfig) -> Option<T>,
    {
        self.partial_configs
            .iter()
            .find_map(|partial| get(partial).map(|value| (value, partial.source())))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use std::collections::HashMap;

    use crate::config::clap::{tests::create_arg_matches, ClapPartialConfigBuilder};
    use crate::config::default::DefaultPartialConfigBuilder;
    use crate::config::env::{tests::HashmapEnvStore, EnvPartialConfigBuilder};
    use crate::config::PartialConfigBuilder;

    #[test]
    /// This test verifies that a `Config` object is constructed in the order of precedence
    /// command line, environment, defaults:
    ///
    ///     1. Build a command line partial config holding only the bind endpoint
    ///     2. Build an environment partial config holding the bind endpoint, the model and the
    ///        timeout
    ///     3. Build the default partial config
    ///     4. Merge them and verify each value comes from the highest-precedence source that
    ///        carries it
    ///
    fn test_config_precedence() {
        let clap_config = ClapPartialConfigBuilder::new(create_arg_matches(vec![
            "test",
            "-b",
            "127.0.0.1:4000",
        ]))
        .build()
        .expect("Unable to build command line config");

        let mut env_values = HashMap::new();
        env_values.insert("QUOTESHEET_BIND".to_string(), "127.0.0.1:5000".to_string());
        env_values.insert("QUOTESHEET_LLM_MODEL".to_string(), "llama3".to_string());
        env_values.insert("QUOTESHEET_LLM_TIMEOUT".to_string(), "10".to_string());
        let env_config = EnvPartialConfigBuilder::from_store(HashmapEnvStore::new(env_values))
            .build()
            .expect("Unable to build environment config");

        let default_config = DefaultPartialConfigBuilder::new()
            .build()
            .expect("Unable to build default config");

        let config = ConfigBuilder::new()
            .with_partial_config(clap_config)
            .with_partial_config(env_config)
            .with_partial_config(default_config)
            .build()
            .expect("Unable to build config");

        assert_eq!(config.bind(), "127.0.0.1:4000");
        assert_eq!(config.bind_source(), &ConfigSource::CommandLine);
        assert_eq!(config.llm_model(), "llama3");
        assert_eq!(config.llm_model_source(), &ConfigSource::Environment);
        assert_eq!(config.llm_timeout(), Duration::from_secs(10));
        assert_eq!(config.llm_timeout_source(), &ConfigSource::Environment);
        assert_eq!(config.database_url(), "test_data_trim.db");
        assert_eq!(config.database_url_source(), &ConfigSource::Default);
        assert_eq!(config.llm_url(), "http://localhost:11434");
        assert_eq!(config.verbosity(), log::Level::Info);
        assert_eq!(config.verbosity_source(), &ConfigSource::Default);
    }

    #[test]
    /// A setting that no partial config carries is reported as missing.
    fn test_missing_value() {
        let partial = PartialConfig::new(ConfigSource::CommandLine)
            .with_bind(Some("127.0.0.1:4000".to_string()));

        match ConfigBuilder::new().with_partial_config(partial).build() {
            Err(ConfigError::MissingValue(field)) => assert_eq!(field, "database_url"),
            Err(err) => panic!("Expected a missing value, got {}", err),
            Ok(_) => panic!("Expected a missing value"),
        }
    }
}
