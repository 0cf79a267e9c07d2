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

use crate::error::{BoxedError, InternalError, ResourceTemporarilyUnavailableError};

/// Represents QuoteStore errors
#[derive(Debug)]
pub enum QuoteStoreError {
    InternalError(InternalError),
    /// A foreign key or uniqueness rule of the database was broken
    ConstraintViolationError(BoxedError),
    ResourceTemporarilyUnavailableError(ResourceTemporarilyUnavailableError),
}

impl Error for QuoteStoreError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            QuoteStoreError::InternalError(err) => Some(err),
            QuoteStoreError::ConstraintViolationError(err) => Some(&**err),
            QuoteStoreError::ResourceTemporarilyUnavailableError(err) => Some(err),
        }
    }
}

impl fmt::Display for QuoteStoreError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            QuoteStoreError::InternalError(err) => err.fmt(f),
            QuoteStoreError::ConstraintViolationError(err) => {
                write!(f, "Constraint violation: {}", err)
            }
            QuoteStoreError::ResourceTemporarilyUnavailableError(err) => err.fmt(f),
        }
    }
}

#[cfg(feature = "diesel")]
impl From<diesel::result::Error> for QuoteStoreError {
    fn from(err: diesel::result::Error) -> Self {
        match err {
            diesel::result::Error::DatabaseError(
                diesel::result::DatabaseErrorKind::UniqueViolation,
                _,
            )
            | diesel::result::Error::DatabaseError(
                diesel::result::DatabaseErrorKind::ForeignKeyViolation,
                _,
            ) => QuoteStoreError::ConstraintViolationError(Box::new(err)),
            _ => QuoteStoreError::InternalError(InternalError::from_source(Box::new(err))),
        }
    }
}

#[cfg(feature = "diesel")]
impl From<diesel::r2d2::PoolError> for QuoteStoreError {
    fn from(err: diesel::r2d2::PoolError) -> QuoteStoreError {
        QuoteStoreError::ResourceTemporarilyUnavailableError(
            ResourceTemporarilyUnavailableError::from_source(Box::new(err)),
        )
    }
}

/// Represents QuoteRevisionBuilder errors
#[derive(Debug)]
pub enum QuoteBuilderError {
    /// Returned when a required field was not set
    MissingRequiredField(String),
}

impl Error for QuoteBuilderError {}

impl fmt::Display for QuoteBuilderError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            QuoteBuilderError::MissingRequiredField(field) => {
                write!(f, "Missing required field: {}", field)
            }
        }
    }
}
