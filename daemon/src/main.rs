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

#[macro_use]
extern crate clap;
#[macro_use]
extern crate log;

mod config;
mod error;

use std::str::FromStr;
use std::sync::Arc;

use clap::{App, Arg};
use flexi_logger::{DeferredNow, LogSpecBuilder, Logger};
use log::Record;
use quotesheet_sdk::migrations::run_sqlite_migrations;
use quotesheet_sdk::rest_api::actix_web_4::{self, State};
use quotesheet_sdk::store::{sqlite::create_connection_pool, ConnectionUri};
use quotesheet_sdk::summarizer::{PromptTemplate, ReqwestSummarizer};

use crate::config::{
    ClapPartialConfigBuilder, Config, ConfigBuilder, DefaultPartialConfigBuilder,
    EnvPartialConfigBuilder, PartialConfigBuilder,
};
use crate::error::DaemonError;

fn log_format(
    w: &mut dyn std::io::Write,
    _now: &mut DeferredNow,
    record: &Record,
) -> Result<(), std::io::Error> {
    write!(w, "[{}] {}", record.level(), record.args())
}

async fn run() -> Result<(), DaemonError> {
    let matches = App::new("quotesheetd")
        .version(crate_version!())
        .author(crate_authors!())
        .about("Serves service call data and quote revisions to the quote sheet")
        .arg(
            Arg::with_name("verbose")
                .short("v")
                .multiple(true)
                .global(true)
                .conflicts_with("quiet")
                .help("Log verbosely"),
        )
        .arg(
            Arg::with_name("quiet")
                .short("q")
                .long("quiet")
                .global(true)
                .conflicts_with("verbose")
                .help("Do not display output"),
        )
        .arg(
            Arg::with_name("bind")
                .short("b")
                .long("bind")
                .takes_value(true)
                .help("Connection endpoint for the REST API"),
        )
        .arg(
            Arg::with_name("database_url")
                .long("database-url")
                .takes_value(true)
                .help("Path of the SQLite database holding the ERP mirror and the quotes"),
        )
        .arg(
            Arg::with_name("llm_url")
                .long("llm-url")
                .takes_value(true)
                .help("Base URL of the language model server"),
        )
        .arg(
            Arg::with_name("llm_model")
                .long("llm-model")
                .takes_value(true)
                .help("Name of the model used to summarize write-ups"),
        )
        .arg(
            Arg::with_name("llm_timeout")
                .long("llm-timeout")
                .takes_value(true)
                .help("Seconds to wait for the language model before giving up"),
        )
        .get_matches();

    let config = ConfigBuilder::new()
        .with_partial_config(ClapPartialConfigBuilder::new(matches).build()?)
        .with_partial_config(EnvPartialConfigBuilder::new().build()?)
        .with_partial_config(DefaultPartialConfigBuilder::new().build()?)
        .build()?;

    let mut log_spec_builder = LogSpecBuilder::new();
    log_spec_builder.default(config.verbosity().to_level_filter());
    log_spec_builder.module("hyper", log::LevelFilter::Warn);
    log_spec_builder.module("tokio", log::LevelFilter::Warn);
    log_spec_builder.module("reqwest", log::LevelFilter::Warn);
    log_spec_builder.module("actix_server", log::LevelFilter::Warn);

    Logger::with(log_spec_builder.build())
        .format(log_format)
        .start()?;

    config.log_as_debug();

    let state = build_state(&config)?;

    actix_web_4::run(config.bind(), state)
        .await
        .map_err(DaemonError::RestApiError)
}

fn build_state(config: &Config) -> Result<State, DaemonError> {
    let connection_uri = ConnectionUri::from_str(config.database_url())
        .map_err(|err| DaemonError::StartUpError(Box::new(err)))?;

    let pool = match connection_uri {
        ConnectionUri::Sqlite(path) => {
            create_connection_pool(&path).map_err(|err| DaemonError::DatabaseError(Box::new(err)))?
        }
    };

    let conn = pool
        .get()
        .map_err(|err| DaemonError::DatabaseError(Box::new(err)))?;
    run_sqlite_migrations(&*conn).map_err(|err| DaemonError::DatabaseError(Box::new(err)))?;
    drop(conn);

    let summarizer = ReqwestSummarizer::new(
        config.llm_url(),
        config.llm_model(),
        config.llm_timeout(),
        PromptTemplate::default(),
    )
    .map_err(|err| DaemonError::StartUpError(Box::new(err)))?;

    Ok(State::with_sqlite_pool(pool, Arc::new(summarizer)))
}

#[actix_web::main]
async fn main() {
    if let Err(e) = run().await {
        error!("{}", e);
        std::process::exit(1);
    }
}
