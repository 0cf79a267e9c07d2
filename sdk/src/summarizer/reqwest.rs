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

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use url::Url;

use super::{PromptTemplate, Summarizer, SummarizerError, Summary, SummaryFormat};
use crate::error::InternalError;

const GENERATE_ROUTE: &str = "api/generate";
const UNKNOWN_UPSTREAM_ERROR: &str = "Unknown error from LLM service";

/// Summarizer backed by an Ollama-compatible `/api/generate` endpoint.
pub struct ReqwestSummarizer {
    client: Client,
    generate_url: Url,
    model: String,
    prompts: PromptTemplate,
}

impl ReqwestSummarizer {
    /// Creates a new summarizer.
    ///
    /// # Arguments
    ///
    /// * `base_url` - Address of the model server, for example `http://localhost:11434`
    /// * `model` - Name of the model to run
    /// * `timeout` - Upper bound on one whole request
    /// * `prompts` - Templates the write-up is substituted into
    pub fn new(
        base_url: &str,
        model: &str,
        timeout: Duration,
        prompts: PromptTemplate,
    ) -> Result<Self, InternalError> {
        let generate_url = Url::parse(&format!(
            "{}/{}",
            base_url.trim_end_matches('/'),
            GENERATE_ROUTE
        ))
        .map_err(|err| {
            InternalError::from_source_with_prefix(
                Box::new(err),
                format!("Invalid language model URL '{}'", base_url),
            )
        })?;

        let client = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|err| InternalError::from_source(Box::new(err)))?;

        Ok(Self {
            client,
            generate_url,
            model: model.to_string(),
            prompts,
        })
    }
}

#[derive(Serialize)]
struct GenerateRequest<'a> {
    model: &'a str,
    prompt: String,
    stream: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    format: Option<&'static str>,
}

#[derive(Deserialize)]
struct GenerateResponse {
    response: Option<String>,
}

#[async_trait]
impl Summarizer for ReqwestSummarizer {
    async fn summarize(
        &self,
        writeup: &str,
        format: SummaryFormat,
    ) -> Result<Summary, SummarizerError> {
        let request = GenerateRequest {
            model: &self.model,
            prompt: self.prompts.render(writeup, format),
            stream: false,
            format: match format {
                SummaryFormat::Text => None,
                SummaryFormat::Json => Some("json"),
            },
        };

        let response = self
            .client
            .post(self.generate_url.clone())
            .json(&request)
            .send()
            .await
            .map_err(|err| {
                error!("Unable to reach language model at {}: {}", self.generate_url, err);
                SummarizerError::Unavailable(Box::new(err))
            })?;

        let status = response.status();
        let body = response.text().await.map_err(|err| {
            error!("Failed to read language model reply: {}", err);
            SummarizerError::Unavailable(Box::new(err))
        })?;

        if !status.is_success() {
            let message = upstream_message(status.as_u16(), &body);
            warn!("Language model returned {}: {}", status, message);
            return Err(SummarizerError::Upstream {
                status: status.as_u16(),
                message,
            });
        }

        parse_reply(&body, format)
    }
}

/// Message reported for a failed model server reply. A JSON body without a usable `error` field
/// gives `UNKNOWN_UPSTREAM_ERROR`, and a body that is not JSON is reported as-is.
fn upstream_message(status: u16, body: &str) -> String {
    match serde_json::from_str::<Value>(body) {
        Ok(reply) => match reply.get("error") {
            Some(Value::String(message)) => message.clone(),
            Some(other) if !other.is_null() => other.to_string(),
            _ => UNKNOWN_UPSTREAM_ERROR.to_string(),
        },
        Err(_) if !body.trim().is_empty() => body.to_string(),
        Err(_) => format!("Service returned status {}", status),
    }
}

fn parse_reply(body: &str, format: SummaryFormat) -> Result<Summary, SummarizerError> {
    let reply = serde_json::from_str::<GenerateResponse>(body).map_err(|err| {
        SummarizerError::MalformedOutput(format!("Reply is not valid JSON: {}", err))
    })?;
    let text = reply.response.ok_or_else(|| {
        SummarizerError::MalformedOutput("Reply has no 'response' field".to_string())
    })?;

    match format {
        SummaryFormat::Text => Ok(Summary::Text(text.trim().to_string())),
        SummaryFormat::Json => match serde_json::from_str::<Value>(&text) {
            Ok(Value::Object(map)) => Ok(Summary::Structured(map)),
            Ok(_) => Err(SummarizerError::MalformedOutput(
                "Response is not a JSON object".to_string(),
            )),
            Err(err) => Err(SummarizerError::MalformedOutput(format!(
                "Response is not valid JSON: {}",
                err
            ))),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use mockito::{self, mock, Matcher};
    use pretty_assertions::assert_eq;
    use serde_json::json;

    const WRITEUP: &str = "Replaced block heater hose, topped off coolant.";

    fn summarizer(base_url: &str) -> ReqwestSummarizer {
        ReqwestSummarizer::new(
            base_url,
            "mistral",
            Duration::from_secs(5),
            PromptTemplate::default(),
        )
        .expect("Unable to create summarizer")
    }

    #[actix_rt::test]
    /// A text reply is trimmed and returned as the summary
    async fn summarize_text() {
        let endpoint = mock("POST", "/api/generate")
            .match_body(Matcher::PartialJson(json!({
                "model": "mistral",
                "stream": false,
            })))
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(r#"{"model":"mistral","response":"  We replaced the hose.  ","done":true}"#)
            .create();

        let summary = summarizer(&mockito::server_url())
            .summarize(WRITEUP, SummaryFormat::Text)
            .await
            .expect("Summary failed");

        endpoint.assert();
        assert_eq!(summary, Summary::Text("We replaced the hose.".to_string()));
    }

    #[actix_rt::test]
    /// JSON mode sends `format: json` and passes the object through untouched
    async fn summarize_json() {
        let reply = json!({
            "response": r#"{"summary":"We replaced the hose.","tech_count":2,"tech_hours":3.5,"days":1}"#,
        });
        let endpoint = mock("POST", "/api/generate")
            .match_body(Matcher::PartialJson(json!({ "format": "json" })))
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(reply.to_string())
            .create();

        let summary = summarizer(&format!("{}/", mockito::server_url()))
            .summarize(WRITEUP, SummaryFormat::Json)
            .await
            .expect("Summary failed");

        endpoint.assert();
        let expected = json!({
            "summary": "We replaced the hose.",
            "tech_count": 2,
            "tech_hours": 3.5,
            "days": 1,
        });
        match summary {
            Summary::Structured(map) => assert_eq!(Value::Object(map), expected),
            other => panic!("Expected a structured summary, got {:?}", other),
        }
    }

    #[actix_rt::test]
    /// Unparseable JSON-mode text is reported as malformed output
    async fn summarize_json_malformed() {
        let endpoint = mock("POST", "/api/generate")
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(json!({ "response": "Sure! Here is the summary" }).to_string())
            .create();

        let result = summarizer(&mockito::server_url())
            .summarize(WRITEUP, SummaryFormat::Json)
            .await;

        endpoint.assert();
        match result {
            Err(SummarizerError::MalformedOutput(_)) => (),
            other => panic!("Expected malformed output, got {:?}", other),
        }
    }

    #[actix_rt::test]
    /// The upstream status and its `error` field are passed through
    async fn summarize_upstream_json_error() {
        let endpoint = mock("POST", "/api/generate")
            .with_status(404)
            .with_header("content-type", "application/json")
            .with_body(r#"{"error":"model 'mistral' not found"}"#)
            .create();

        let result = summarizer(&mockito::server_url())
            .summarize(WRITEUP, SummaryFormat::Text)
            .await;

        endpoint.assert();
        match result {
            Err(SummarizerError::Upstream { status, message }) => {
                assert_eq!(status, 404);
                assert_eq!(message, "model 'mistral' not found");
            }
            other => panic!("Expected an upstream error, got {:?}", other),
        }
    }

    #[actix_rt::test]
    /// Without a JSON error, the raw body or the status is used as the message
    async fn summarize_upstream_text_error() {
        let endpoint = mock("POST", "/api/generate")
            .with_status(500)
            .with_body("out of memory")
            .create();

        let result = summarizer(&mockito::server_url())
            .summarize(WRITEUP, SummaryFormat::Text)
            .await;

        endpoint.assert();
        match result {
            Err(SummarizerError::Upstream { status, message }) => {
                assert_eq!(status, 500);
                assert_eq!(message, "out of memory");
            }
            other => panic!("Expected an upstream error, got {:?}", other),
        }

        assert_eq!(upstream_message(502, ""), "Service returned status 502");
        assert_eq!(
            upstream_message(500, r#"{"detail": "busy"}"#),
            "Unknown error from LLM service"
        );
        assert_eq!(upstream_message(404, r#"{"error": "model not found"}"#), "model not found");
    }

    #[actix_rt::test]
    /// A refused connection is reported as unavailable
    async fn summarize_unavailable() {
        let result = summarizer("http://127.0.0.1:1")
            .summarize(WRITEUP, SummaryFormat::Text)
            .await;

        match result {
            Err(SummarizerError::Unavailable(_)) => (),
            other => panic!("Expected unavailable, got {:?}", other),
        }
    }

    #[test]
    fn test_parse_reply_missing_response() {
        match parse_reply(r#"{"done":true}"#, SummaryFormat::Text) {
            Err(SummarizerError::MalformedOutput(_)) => (),
            other => panic!("Expected malformed output, got {:?}", other),
        }
        match parse_reply("<html>", SummaryFormat::Text) {
            Err(SummarizerError::MalformedOutput(_)) => (),
            other => panic!("Expected malformed output, got {:?}", other),
        }
    }

    #[test]
    fn test_invalid_base_url() {
        assert!(ReqwestSummarizer::new(
            "not a url",
            "mistral",
            Duration::from_secs(1),
            PromptTemplate::default()
        )
        .is_err());
    }
}
