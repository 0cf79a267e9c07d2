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

use crate::error::{InternalError, ResourceTemporarilyUnavailableError};

/// Represents ErpStore errors
#[derive(Debug)]
pub enum ErpStoreError {
    InternalError(InternalError),
    ResourceTemporarilyUnavailableError(ResourceTemporarilyUnavailableError),
}

impl Error for ErpStoreError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            ErpStoreError::InternalError(err) => Some(err),
            ErpStoreError::ResourceTemporarilyUnavailableError(err) => Some(err),
        }
    }
}

impl fmt::Display for ErpStoreError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            ErpStoreError::InternalError(err) => err.fmt(f),
            ErpStoreError::ResourceTemporarilyUnavailableError(err) => err.fmt(f),
        }
    }
}

#[cfg(feature = "diesel")]
impl From<diesel::result::Error> for ErpStoreError {
    fn from(err: diesel::result::Error) -> Self {
        ErpStoreError::InternalError(InternalError::from_source_with_prefix(
            Box::new(err),
            "Unable to read ERP mirror".to_string(),
        ))
    }
}

#[cfg(feature = "diesel")]
impl From<diesel::r2d2::PoolError> for ErpStoreError {
    fn from(err: diesel::r2d2::PoolError) -> ErpStoreError {
        ErpStoreError::ResourceTemporarilyUnavailableError(
            ResourceTemporarilyUnavailableError::from_source(Box::new(err)),
        )
    }
}
