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

use chrono::NaiveDateTime;

use super::NOT_AVAILABLE;

const WARRANTY_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Describes the warranty state of a unit, given the expiration stored in the ERP.
///
/// The ERP uses dates in 1900 as a "no warranty" marker.
pub fn format_warranty(expiration: Option<&str>, now: NaiveDateTime) -> String {
    let expiration = match expiration.map(str::trim) {
        Some(raw) if !raw.is_empty() && !raw.contains("1900") => raw,
        _ => return NOT_AVAILABLE.to_string(),
    };

    match NaiveDateTime::parse_from_str(expiration, WARRANTY_FORMAT) {
        Ok(expires) if expires > now => format!("Active until {}", expires.format("%m/%Y")),
        Ok(expires) => format!("Expired on {}", expires.format("%m/%Y")),
        Err(_) => "Invalid Date".to_string(),
    }
}
