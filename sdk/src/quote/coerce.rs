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

//! Lenient numeric coercion for values typed into the quote sheet.
//!
//! Figures arrive either as JSON numbers or as whatever the user typed into a text box. Anything
//! that cannot be read as a finite number falls back to a default instead of failing the save.

use serde_json::Value;

/// Reads a JSON value as a float, returning `default` when it is missing or not numeric.
///
/// Numbers are taken as-is, strings are trimmed and parsed, and booleans count as 1.0 or 0.0.
/// Non-finite results (`"NaN"`, `"inf"`) are replaced by `default`, since SQLite would store
/// them as NULL.
pub fn coerce_float(value: Option<&Value>, default: f64) -> f64 {
    let parsed = match value {
        Some(Value::Number(number)) => number.as_f64(),
        Some(Value::String(text)) => text.trim().parse::<f64>().ok(),
        Some(Value::Bool(flag)) => Some(if *flag { 1.0 } else { 0.0 }),
        _ => None,
    };

    parsed.filter(|n| n.is_finite()).unwrap_or(default)
}

/// Reads a JSON value as an integer. Fractional values are truncated toward zero.
pub fn coerce_integer(value: Option<&Value>, default: i64) -> i64 {
    match value {
        Some(Value::Number(number)) if number.is_i64() => number.as_i64().unwrap_or(default),
        Some(Value::String(text)) if text.trim().parse::<i64>().is_ok() => {
            text.trim().parse::<i64>().unwrap_or(default)
        }
        other => {
            let float = coerce_float(other, default as f64);
            if float.abs() < i64::MAX as f64 {
                float.trunc() as i64
            } else {
                default
            }
        }
    }
}
