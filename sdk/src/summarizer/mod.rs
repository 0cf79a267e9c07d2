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

//! Client for the language model that turns technician write-ups into customer-facing text.

mod error;
mod prompt;
mod reqwest;

use async_trait::async_trait;
use serde_json::{Map, Value};

pub use self::error::SummarizerError;
pub use self::prompt::PromptTemplate;
pub use self::reqwest::ReqwestSummarizer;

/// The shape of the reply requested from the model.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SummaryFormat {
    /// A single customer-facing paragraph
    Text,
    /// A JSON object with `summary`, `tech_count`, `tech_hours` and `days`
    Json,
}

impl Default for SummaryFormat {
    fn default() -> Self {
        SummaryFormat::Text
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum Summary {
    Text(String),
    /// The model's JSON object, passed through without inspection
    Structured(Map<String, Value>),
}

#[async_trait]
pub trait Summarizer: Send + Sync {
    /// Sends one write-up to the model. There are no retries.
    async fn summarize(
        &self,
        writeup: &str,
        format: SummaryFormat,
    ) -> Result<Summary, SummarizerError>;
}
