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

//! Basic errors shared by the stores, the summarizer and the REST resources.
//!
//! These are meant to be wrapped by the more specific error `enum`s of each component, for
//! example:
//!
//! ```
//! use std::fmt;
//!
//! use quotesheet_sdk::error::InternalError;
//!
//! #[derive(Debug)]
//! enum LookupError {
//!     InternalError(InternalError),
//!     Missing(String),
//! }
//!
//! impl std::error::Error for LookupError {}
//!
//! impl fmt::Display for LookupError {
//!     fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
//!         match self {
//!             LookupError::InternalError(err) => write!(f, "{}", err),
//!             LookupError::Missing(id) => write!(f, "Nothing stored for {}", id),
//!         }
//!     }
//! }
//!
//! fn parse_revision(raw: &str) -> Result<i64, LookupError> {
//!     raw.trim()
//!         .parse::<i64>()
//!         .map_err(|err| LookupError::InternalError(InternalError::from_source(Box::new(err))))
//! }
//!
//! assert!(parse_revision(" 3 ").is_ok());
//! ```

mod internal;
mod unavailable;

pub use internal::InternalError;
pub use unavailable::ResourceTemporarilyUnavailableError;

/// Error type that may cross thread boundaries, such as the blocking pool used by the REST API.
pub type BoxedError = Box<dyn std::error::Error + Send + Sync>;
