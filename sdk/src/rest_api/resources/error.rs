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

use std::error;
use std::fmt;

use serde::Serialize;

use crate::erp::store::ErpStoreError;
use crate::error::BoxedError;
use crate::quote::store::QuoteStoreError;
use crate::summarizer::SummarizerError;

/// Generic error designed with the expectation that it may be converted into an HTTP response
///
/// Only the message is serialized, as `{"error": message}`.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    /// A corresponding HTTP status code for the error
    #[serde(skip_serializing)]
    status_code: u16,

    /// The message that would be returned in an HTTP response
    #[serde(rename = "error")]
    message: String,

    /// Wrapped error that is not exposed in the HTTP response
    #[serde(skip_serializing)]
    source: Option<BoxedError>,
}

impl ErrorResponse {
    /// Create a new ErrorResponse
    ///
    /// # Arguments
    ///
    /// * `status_code` - Corresponding HTTP status code
    /// * `message` - External message to display to the user
    ///
    /// # Examples
    /// ```
    /// use quotesheet_sdk::rest_api::resources::error::ErrorResponse;
    ///
    /// let response = ErrorResponse::new(404, "Service Call ID not found");
    ///
    /// assert_eq!(404, response.status_code());
    /// assert_eq!("Service Call ID not found", response.message());
    /// ```
    pub fn new(status_code: u16, message: &str) -> Self {
        Self {
            status_code,
            message: message.to_string(),
            source: None,
        }
    }

    /// Create a new ErrorResponse that does not expose the underlying error
    ///
    /// # Arguments
    ///
    /// * `source` - Underlying internal error
    ///
    /// # Examples
    /// ```
    /// use quotesheet_sdk::rest_api::resources::error::ErrorResponse;
    ///
    /// // Mock an internal error
    /// let error = "NaN".parse::<u32>().unwrap_err();
    ///
    /// let response = ErrorResponse::internal_error(Box::new(error));
    ///
    /// assert_eq!(500, response.status_code());
    /// assert_eq!("Internal Server Error", response.message());
    /// ```
    pub fn internal_error(source: BoxedError) -> Self {
        Self {
            status_code: 500,
            message: "Internal Server Error".to_string(),
            source: Some(source),
        }
    }

    /// Create a new 503 ErrorResponse that does not expose the underlying error
    pub fn unavailable(source: BoxedError) -> Self {
        Self {
            status_code: 503,
            message: "Service Unavailable".to_string(),
            source: Some(source),
        }
    }

    pub fn status_code(&self) -> u16 {
        self.status_code
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

impl error::Error for ErrorResponse {
    fn source(&self) -> Option<&(dyn error::Error + 'static)> {
        match &self.source {
            Some(source) => Some(&**source),
            None => None,
        }
    }
}

impl fmt::Display for ErrorResponse {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        if let Some(ref src) = self.source {
            write!(f, "{}", src)
        } else {
            write!(
                f,
                "Status Code {}: Message {}",
                self.status_code, self.message
            )
        }
    }
}

impl From<QuoteStoreError> for ErrorResponse {
    fn from(err: QuoteStoreError) -> Self {
        error!("Quote store failure: {}", err);
        match err {
            QuoteStoreError::ResourceTemporarilyUnavailableError(err) => {
                ErrorResponse::unavailable(Box::new(err))
            }
            QuoteStoreError::InternalError(err) => ErrorResponse::internal_error(Box::new(err)),
            QuoteStoreError::ConstraintViolationError(err) => ErrorResponse::internal_error(err),
        }
    }
}

impl From<ErpStoreError> for ErrorResponse {
    fn from(err: ErpStoreError) -> Self {
        error!("ERP store failure: {}", err);
        match err {
            ErpStoreError::ResourceTemporarilyUnavailableError(err) => {
                ErrorResponse::unavailable(Box::new(err))
            }
            ErpStoreError::InternalError(err) => ErrorResponse::internal_error(Box::new(err)),
        }
    }
}

impl From<SummarizerError> for ErrorResponse {
    fn from(err: SummarizerError) -> Self {
        match err {
            SummarizerError::Unavailable(source) => {
                error!("Language model unavailable: {}", source);
                Self {
                    status_code: 503,
                    message: "Failed to connect to the LLM service. Is it running?".to_string(),
                    source: Some(source),
                }
            }
            SummarizerError::Upstream { status, message } => {
                ErrorResponse::new(status, &format!("LLM Error: {}", message))
            }
            SummarizerError::MalformedOutput(message) => {
                error!("Language model returned malformed output: {}", message);
                ErrorResponse::new(502, &format!("LLM returned malformed output: {}", message))
            }
        }
    }
}
