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

use std::convert::TryFrom;

use serde_json::Value;

use crate::quote::store::{QuoteRevision, QuoteStore};
use crate::rest_api::resources::error::ErrorResponse;

use super::payloads::{QuotePayload, SaveQuoteResponse};

/// Saves a quote revision, replacing any revision already saved under the same number.
///
/// # Arguments
///
/// * `store` - The saved quotes
/// * `body` - The JSON request body
pub fn save_quote(store: &dyn QuoteStore, body: &[u8]) -> Result<SaveQuoteResponse, ErrorResponse> {
    let value = serde_json::from_slice::<Value>(body)
        .map_err(|err| ErrorResponse::new(400, &format!("Invalid JSON body: {}", err)))?;
    if !value.is_object() {
        return Err(ErrorResponse::new(400, "Request body must be a JSON object"));
    }
    let payload = serde_json::from_value::<QuotePayload>(value)
        .map_err(|err| ErrorResponse::new(400, &format!("Invalid quote payload: {}", err)))?;

    let revision = QuoteRevision::try_from(payload)?;
    let revision_number = revision.revision();

    let quote_id = store.save_quote_revision(revision)?;

    Ok(SaveQuoteResponse {
        message: format!("Quote revision {} saved successfully.", revision_number),
        quote_id,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    use pretty_assertions::assert_eq;
    use serde_json::json;

    use crate::quote::store::diesel::DieselQuoteStore;
    use crate::store::testing::create_test_pool;

    type TestResult = Result<(), Box<dyn std::error::Error>>;

    fn body(parts: Value) -> Vec<u8> {
        json!({
            "serviceCallId": "25-00123",
            "revision": 1,
            "description": "Annual service",
            "customer": {"name": "Riverside Plant"},
            "labor": {
                "techCount": 1,
                "techHours": 2,
                "travelHours": 1,
                "techRate": 75,
                "travelRate": 75,
            },
            "parts": parts,
            "subcontractors": [],
        })
        .to_string()
        .into_bytes()
    }

    #[test]
    /// String figures are coerced and the line total is computed at save time
    fn test_save_quote_coerces_figures() -> TestResult {
        let store = DieselQuoteStore::new(create_test_pool()?);

        let response = save_quote(
            &store,
            &body(json!([{"part": "X1", "qty": "3", "unitCost": "10"}])),
        )?;
        assert_eq!(response.message, "Quote revision 1 saved successfully.");

        let items = store.list_line_items(&[response.quote_id])?;
        assert_eq!(items.len(), 1);
        assert_eq!(items[0].quantity, 3.0);
        assert_eq!(items[0].unit_cost, 10.0);
        assert_eq!(items[0].total_cost, 30.0);

        Ok(())
    }

    #[test]
    /// Saving the same revision without parts leaves it without parts
    fn test_resave_with_zero_parts() -> TestResult {
        let store = DieselQuoteStore::new(create_test_pool()?);

        save_quote(
            &store,
            &body(json!([
                {"part": "X1", "qty": 1, "unitCost": 1},
                {"part": "X2", "qty": 1, "unitCost": 1},
                {"part": "X3", "qty": 1, "unitCost": 1},
            ])),
        )?;
        let response = save_quote(&store, &body(json!([])))?;

        let quotes = store.list_quotes("25-00123")?;
        assert_eq!(quotes.len(), 1);
        assert_eq!(quotes[0].id, response.quote_id);
        assert!(store.list_line_items(&[response.quote_id])?.is_empty());

        Ok(())
    }

    #[test]
    fn test_save_quote_malformed_body() -> TestResult {
        let store = DieselQuoteStore::new(create_test_pool()?);

        let bodies: [&[u8]; 3] = [b"not json", b"[1, 2]", br#"{"revision": 1}"#];
        for raw in bodies.iter() {
            match save_quote(&store, raw) {
                Err(err) => assert_eq!(err.status_code(), 400),
                Ok(response) => panic!("Expected a client error, got {:?}", response),
            }
        }
        assert!(store.list_quotes("25-00123")?.is_empty());

        Ok(())
    }
}
