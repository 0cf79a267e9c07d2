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

//! `PartialConfig` builder using default values.

use crate::config::{error::ConfigError, ConfigSource, PartialConfig, PartialConfigBuilder};

const BIND: &str = "0.0.0.0:3000";
const DATABASE_URL: &str = "test_data_trim.db";
const LLM_URL: &str = "http://localhost:11434";
const LLM_MODEL: &str = "mistral";
const LLM_TIMEOUT: u64 = 90;

#[derive(Default)]
pub struct DefaultPartialConfigBuilder;

impl DefaultPartialConfigBuilder {
    pub fn new() -> Self {
        DefaultPartialConfigBuilder {}
    }
}

impl PartialConfigBuilder for DefaultPartialConfigBuilder {
    fn build(self) -> Result<PartialConfig, ConfigError> {
        Ok(PartialConfig::new(ConfigSource::Default)
            .with_bind(Some(String::from(BIND)))
            .with_database_url(Some(String::from(DATABASE_URL)))
            .with_llm_url(Some(String::from(LLM_URL)))
            .with_llm_model(Some(String::from(LLM_MODEL)))
            .with_llm_timeout(Some(LLM_TIMEOUT))
            .with_verbosity(Some(log::Level::Info)))
    }
}
