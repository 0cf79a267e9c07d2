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

//! `PartialConfig` builder using values from the command line arguments.

use clap::ArgMatches;

use crate::config::{
    error::ConfigError, partial::parse_timeout, ConfigSource, PartialConfig, PartialConfigBuilder,
};

/// `PartialConfig` builder using command line arguments, represented as clap `ArgMatches`.
pub struct ClapPartialConfigBuilder<'a> {
    matches: ArgMatches<'a>,
}

impl<'a> ClapPartialConfigBuilder<'a> {
    pub fn new(matches: ArgMatches<'a>) -> Self {
        ClapPartialConfigBuilder { matches }
    }
}

impl PartialConfigBuilder for ClapPartialConfigBuilder<'_> {
    fn build(self) -> Result<PartialConfig, ConfigError> {
        let llm_timeout = self
            .matches
            .value_of("llm_timeout")
            .map(parse_timeout)
            .transpose()?;

        let verbosity = if self.matches.is_present("quiet") {
            Some(log::Level::Error)
        } else {
            match self.matches.occurrences_of("verbose") {
                0 => None,
                1 => Some(log::Level::Info),
                2 => Some(log::Level::Debug),
                _ => Some(log::Level::Trace),
            }
        };

        Ok(PartialConfig::new(ConfigSource::CommandLine)
            .with_bind(self.matches.value_of("bind").map(String::from))
            .with_database_url(self.matches.value_of("database_url").map(String::from))
            .with_llm_url(self.matches.value_of("llm_url").map(String::from))
            .with_llm_model(self.matches.value_of("llm_model").map(String::from))
            .with_llm_timeout(llm_timeout)
            .with_verbosity(verbosity))
    }
}
