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

//! `PartialConfig` builder using values from the environment.

use std::env;

use crate::config::{
    error::ConfigError, partial::parse_timeout, ConfigSource, PartialConfig, PartialConfigBuilder,
};

const BIND_ENV: &str = "QUOTESHEET_BIND";
const DATABASE_URL_ENV: &str = "QUOTESHEET_DATABASE_URL";
const LLM_URL_ENV: &str = "QUOTESHEET_LLM_URL";
const LLM_MODEL_ENV: &str = "QUOTESHEET_LLM_MODEL";
const LLM_TIMEOUT_ENV: &str = "QUOTESHEET_LLM_TIMEOUT";

/// Trait to outline a basic read-only environment variable store
pub trait EnvStore {
    /// Returns an environment variable for a given key
    ///
    /// # Arguments
    ///
    /// * `key` - A string slice of the name of the environment variable
    fn get(&self, key: &str) -> Option<String>;
}

/// Implementation of `EnvStore` for OS environment variables
pub struct OsEnvStore;

impl EnvStore for OsEnvStore {
    fn get(&self, key: &str) -> Option<String> {
        env::var(key).ok()
    }
}

pub struct EnvPartialConfigBuilder<S: EnvStore> {
    store: S,
}

impl EnvPartialConfigBuilder<OsEnvStore> {
    pub fn new() -> Self {
        EnvPartialConfigBuilder { store: OsEnvStore }
    }
}

impl<S: EnvStore> EnvPartialConfigBuilder<S> {
    /// Returns an `EnvPartialConfigBuilder` that will fetch data from the given store.
    ///
    /// # Arguments
    ///
    /// * `store` - An instance of `EnvStore`
    ///
    #[cfg(test)]
    pub fn from_store(store: S) -> Self {
        EnvPartialConfigBuilder { store }
    }
}

impl<S: EnvStore> PartialConfigBuilder for EnvPartialConfigBuilder<S> {
    fn build(self) -> Result<PartialConfig, ConfigError> {
        let llm_timeout = self
            .store
            .get(LLM_TIMEOUT_ENV)
            .map(|raw| parse_timeout(&raw))
            .transpose()?;

        Ok(PartialConfig::new(ConfigSource::Environment)
            .with_bind(self.store.get(BIND_ENV))
            .with_database_url(self.store.get(DATABASE_URL_ENV))
            .with_llm_url(self.store.get(LLM_URL_ENV))
            .with_llm_model(self.store.get(LLM_MODEL_ENV))
            .with_llm_timeout(llm_timeout))
    }
}
