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

//! Module containing InternalError implementation.

use std::error;
use std::fmt;

use super::BoxedError;

/// An error returned when something failed for reasons the caller cannot act upon.
///
/// The display string is either an explicit message, or the display of the wrapped source,
/// optionally preceded by a prefix.
pub struct InternalError {
    message: Option<String>,
    prefix: Option<String>,
    source: Option<BoxedError>,
}

impl InternalError {
    /// Wraps a source error, passing its display string through unmodified.
    ///
    /// ```
    /// use quotesheet_sdk::error::InternalError;
    ///
    /// let io_err = std::io::Error::new(std::io::ErrorKind::Other, "disk full");
    /// assert_eq!(InternalError::from_source(Box::new(io_err)).to_string(), "disk full");
    /// ```
    pub fn from_source(source: BoxedError) -> Self {
        Self {
            message: None,
            prefix: None,
            source: Some(source),
        }
    }

    /// Wraps a source error, displayed as `"{prefix}: {source}"`.
    ///
    /// ```
    /// use quotesheet_sdk::error::InternalError;
    ///
    /// let io_err = std::io::Error::new(std::io::ErrorKind::Other, "disk full");
    /// let err = InternalError::from_source_with_prefix(Box::new(io_err), "Unable to save".into());
    /// assert_eq!(err.to_string(), "Unable to save: disk full");
    /// ```
    pub fn from_source_with_prefix(source: BoxedError, prefix: String) -> Self {
        Self {
            message: None,
            prefix: Some(prefix),
            source: Some(source),
        }
    }

    /// Creates an error that only carries a message.
    pub fn with_message(message: String) -> Self {
        Self {
            message: Some(message),
            prefix: None,
            source: None,
        }
    }
}

impl error::Error for InternalError {
    fn source(&self) -> Option<&(dyn error::Error + 'static)> {
        match &self.source {
            Some(source) => Some(&**source),
            None => None,
        }
    }
}

impl fmt::Display for InternalError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match (&self.message, &self.prefix, &self.source) {
            (Some(message), _, _) => f.write_str(message),
            (None, Some(prefix), Some(source)) => write!(f, "{}: {}", prefix, source),
            (None, None, Some(source)) => write!(f, "{}", source),
            (None, _, None) => f.write_str("InternalError"),
        }
    }
}

impl fmt::Debug for InternalError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let mut debug = f.debug_struct("InternalError");
        if let Some(message) = &self.message {
            debug.field("message", message);
        }
        if let Some(prefix) = &self.prefix {
            debug.field("prefix", prefix);
        }
        if let Some(source) = &self.source {
            debug.field("source", source);
        }
        debug.finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_message_takes_precedence() {
        let err = InternalError::with_message("pool closed".to_string());
        assert_eq!(err.to_string(), "pool closed");
        assert!(error::Error::source(&err).is_none());
    }

    #[test]
    fn test_prefixed_source() {
        let source = "abc".parse::<i64>().unwrap_err();
        let err = InternalError::from_source_with_prefix(Box::new(source), "bad id".to_string());
        assert_eq!(err.to_string(), "bad id: invalid digit found in string");
        assert!(error::Error::source(&err).is_some());
        assert!(format!("{:?}", err).starts_with("InternalError { prefix: \"bad id\""));
    }
}
