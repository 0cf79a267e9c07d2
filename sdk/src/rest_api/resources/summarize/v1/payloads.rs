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

use serde::Serialize;
use serde_json::{Map, Value};

use crate::rest_api::resources::error::ErrorResponse;
use crate::summarizer::{Summary, SummaryFormat};

const MISSING_WRITEUP: &str = "Missing 'writeup' in request body";

#[derive(Debug, PartialEq)]
pub struct SummarizeRequest {
    pub writeup: String,
    pub format: SummaryFormat,
}

impl SummarizeRequest {
    /// Reads `{"writeup": string, "format"?: "json"}` from a request body.
    pub fn from_body(body: &[u8]) -> Result<Self, ErrorResponse> {
        let value = serde_json::from_slice::<Value>(body)
            .map_err(|_| ErrorResponse::new(400, MISSING_WRITEUP))?;

        let writeup = value
            .get("writeup")
            .and_then(Value::as_str)
            .ok_or_else(|| ErrorResponse::new(400, MISSING_WRITEUP))?;

        let format = match value.get("format").and_then(Value::as_str) {
            Some(format) if format.eq_ignore_ascii_case("json") => SummaryFormat::Json,
            _ => SummaryFormat::Text,
        };

        Ok(Self {
            writeup: writeup.to_string(),
            format,
        })
    }
}

#[derive(Debug, Serialize)]
#[serde(untagged)]
pub enum SummarizeResponse {
    Text { summary: String },
    Structured(Map<String, Value>),
}

impl From<Summary> for SummarizeResponse {
    fn from(summary: Summary) -> Self {
        match summary {
            Summary::Text(summary) => SummarizeResponse::Text { summary },
            Summary::Structured(map) => SummarizeResponse::Structured(map),
        }
    }
}
