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

//! Configuration to provide the necessary values to start up the quotesheet daemon.
//!
//! These values may be sourced from command line arguments, environment variables or pre-defined
//! defaults. This module allows for configuration values from each of these sources to be combined
//! into a final `Config` object.

mod builder;
mod clap;
mod default;
mod env;
pub mod error;
mod partial;

use std::time::Duration;

pub use self::builder::ConfigBuilder;
pub use self::clap::ClapPartialConfigBuilder;
pub use self::default::DefaultPartialConfigBuilder;
pub use self::env::EnvPartialConfigBuilder;
pub use self::partial::{ConfigSource, PartialConfig, PartialConfigBuilder};

#[derive(Debug)]
pub struct Config {
    bind: (String, ConfigSource),
    database_url: (String, ConfigSource),
    llm_url: (String, ConfigSource),
    llm_model: (String, ConfigSource),
    llm_timeout: (Duration, ConfigSource),
    verbosity: (log::Level, ConfigSource),
}

impl Config {
    pub fn bind(&self) -> &str {
        &self.bind.0
    }

    pub fn bind_source(&self) -> &ConfigSource {
        &self.bind.1
    }

    pub fn database_url(&self) -> &str {
        &self.database_url.0
    }

    pub fn database_url_source(&self) -> &ConfigSource {
        &self.database_url.1
    }

    pub fn llm_url(&self) -> &str {
        &self.llm_url.0
    }

    pub fn llm_url_source(&self) -> &ConfigSource {
        &self.llm_url.1
    }

    pub fn llm_model(&self) -> &str {
        &self.llm_model.0
    }

    pub fn llm_model_source(&self) -> &ConfigSource {
        &self.llm_model.1
    }

    pub fn llm_timeout(&self) -> Duration {
        self.llm_timeout.0
    }

    pub fn llm_timeout_source(&self) -> &ConfigSource {
        &self.llm_timeout.1
    }

    pub fn verbosity(&self) -> log::Level {
        self.verbosity.0
    }

    pub fn verbosity_source(&self) -> &ConfigSource {
        &self.verbosity.1
    }

    pub fn log_as_debug(&self) {
        debug!(
            "Quotesheet Config: bind: {} (source: {:?})",
            self.bind(),
            self.bind_source(),
        );
        debug!(
            "Quotesheet Config: database_url: {} (source: {:?})",
            self.database_url(),
            self.database_url_source(),
        );
        debug!(
            "Quotesheet Config: llm_url: {} (source: {:?})",
            self.llm_url(),
            self.llm_url_source(),
        );
        debug!(
            "Quotesheet Config: llm_model: {} (source: {:?})",
            self.llm_model(),
            self.llm_model_source(),
        );
        debug!(
            "Quotesheet Config: llm_timeout: {}s (source: {:?})",
            self.llm_timeout().as_secs(),
            self.llm_timeout_source(),
        );
        debug!(
            "Quotesheet Config: verbosity: {} (source: {:?})",
            self.verbosity(),
            self.verbosity_source(),
        );
    }
}
