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

//! Read access to the ERP data mirrored into the local database, and the rules used to present
//! it on a quote.

pub mod store;
mod warranty;

pub use warranty::format_warranty;

/// Fallback hourly rate for technician and travel time
pub const DEFAULT_HOURLY_RATE: f64 = 75.00;

/// Placeholder shown wherever ERP data is not available
pub const NOT_AVAILABLE: &str = "N/A";

/// Normalizes a multi-value ERP field such as `"ATS-A; ;ATS-B"` to `"ATS-A; ATS-B"`.
///
/// Returns `None` if the field is absent or holds no values.
pub fn normalize_multi_value(raw: Option<&str>) -> Option<String> {
    let values: Vec<&str> = raw?
        .split(';')
        .map(str::trim)
        .filter(|value| !value.is_empty())
        .collect();

    if values.is_empty() {
        None
    } else {
        Some(values.join("; "))
    }
}

/// Joins service notes into one write-up. Notes are trimmed and blank ones are dropped.
pub fn join_service_notes<S: AsRef<str>>(notes: &[S]) -> String {
    notes
        .iter()
        .map(|note| note.as_ref().trim())
        .filter(|note| !note.is_empty())
        .collect::<Vec<_>>()
        .join("\n")
}

/// Renders a summed on-hand quantity, without a fraction when it is a whole number.
pub fn format_quantity(quantity: f64) -> String {
    if quantity.fract() == 0.0 && quantity.abs() < 1e15 {
        format!("{}", quantity as i64)
    } else {
        format!("{}", quantity)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_multi_value() {
        assert_eq!(
            normalize_multi_value(Some("ATS-A; ;ATS-B")),
            Some("ATS-A; ATS-B".to_string())
        );
        assert_eq!(
            normalize_multi_value(Some("  QSX15  ")),
            Some("QSX15".to_string())
        );
        assert_eq!(normalize_multi_value(Some(" ; ")), None);
        assert_eq!(normalize_multi_value(None), None);
    }

    #[test]
    fn test_join_service_notes() {
        let notes = vec!["  first  ", "", "   ", "second"];
        assert_eq!(join_service_notes(&notes), "first\nsecond");
        assert_eq!(join_service_notes::<String>(&[]), "");
    }

    #[test]
    fn test_format_quantity() {
        assert_eq!(format_quantity(5.0), "5");
        assert_eq!(format_quantity(0.0), "0");
        assert_eq!(format_quantity(5.5), "5.5");
    }
}
