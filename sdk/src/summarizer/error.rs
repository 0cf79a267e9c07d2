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

use std::error::Error;
use std::fmt;

use crate::error::BoxedError;

/// Failure kinds of a summarization request.
#[derive(Debug)]
pub enum SummarizerError {
    /// The model server could not be reached, or did not answer in time
    Unavailable(BoxedError),
    /// The model server answered with a non-success status
    Upstream { status: u16, message: String },
    /// The model server answered, but not in the requested shape
    MalformedOutput(String),
}

impl Error for SummarizerError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            SummarizerError::Unavailable(err) => Some(&**err),
            SummarizerError::Upstream { .. } => None,
            SummarizerError::MalformedOutput(_) => None,
        }
    }
}

impl fmt::Display for SummarizerError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            SummarizerError::Unavailable(err) => {
                write!(f, "Unable to reach the language model: {}", err)
            }
            SummarizerError::Upstream { status, message } => {
                write!(f, "Language model returned {}: {}", status, message)
            }
            SummarizerError::MalformedOutput(msg) => {
                write!(f, "Language model returned malformed output: {}", msg)
            }
        }
    }
}
