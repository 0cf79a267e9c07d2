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

use std::collections::{BTreeSet, HashMap};

use chrono::NaiveDateTime;

use crate::erp::{store::ErpStore, DEFAULT_HOURLY_RATE};
use crate::quote::store::QuoteStore;
use crate::rest_api::resources::error::ErrorResponse;

use super::payloads::{
    BaseDataSlice, LineItemSlice, QuoteRevisionSlice, ServiceCallSlice, SubcontractorSlice,
};

const NOT_FOUND_MESSAGE: &str = "Service Call ID not found";

/// Assembles the mirrored ERP context of a service call with all of its saved quote revisions.
///
/// The number of store round trips does not depend on the number of revisions: children and
/// inventory are each fetched with one batched lookup.
///
/// # Arguments
///
/// * `erp_store` - Read access to the ERP mirror
/// * `quote_store` - The saved quotes
/// * `service_call_id` - The requested id; surrounding whitespace is ignored
/// * `now` - The time warranties are checked against
pub fn fetch_service_call(
    erp_store: &dyn ErpStore,
    quote_store: &dyn QuoteStore,
    service_call_id: &str,
    now: NaiveDateTime,
) -> Result<ServiceCallSlice, ErrorResponse> {
    let service_call_id = service_call_id.trim();
    if service_call_id.is_empty() {
        return Err(ErrorResponse::new(404, NOT_FOUND_MESSAGE));
    }

    let detail = erp_store.get_service_call_detail(service_call_id)?;
    let quotes = quote_store.list_quotes(service_call_id)?;

    if detail.is_none() && quotes.is_empty() {
        return Err(ErrorResponse::new(404, NOT_FOUND_MESSAGE));
    }

    let quote_ids: Vec<i64> = quotes.iter().map(|quote| quote.id).collect();
    let line_items = quote_store.list_line_items(&quote_ids)?;
    let subcontractors = quote_store.list_subcontractors(&quote_ids)?;

    let part_numbers: Vec<String> = line_items
        .iter()
        .filter_map(|item| item.part_number.as_deref())
        .map(str::trim)
        .filter(|part| !part.is_empty())
        .map(String::from)
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect();
    let on_hand = erp_store.list_on_hand_quantities(&part_numbers)?;

    let mut parts_by_quote: HashMap<i64, Vec<LineItemSlice>> = HashMap::new();
    for item in line_items {
        parts_by_quote
            .entry(item.quote_id)
            .or_default()
            .push(LineItemSlice::new(item, &on_hand));
    }

    let mut subcontractors_by_quote: HashMap<i64, Vec<SubcontractorSlice>> = HashMap::new();
    for subcontractor in subcontractors {
        subcontractors_by_quote
            .entry(subcontractor.quote_id)
            .or_default()
            .push(SubcontractorSlice::from(subcontractor));
    }

    let revisions = quotes
        .into_iter()
        .map(|quote| {
            let parts = parts_by_quote.remove(&quote.id).unwrap_or_default();
            let subcontractors = subcontractors_by_quote
                .remove(&quote.id)
                .unwrap_or_default();
            QuoteRevisionSlice::new(quote, parts, subcontractors)
        })
        .collect();

    let base_data = match detail {
        Some(detail) => {
            let notes = erp_store.list_service_notes(service_call_id)?;
            let hourly_rate = match detail
                .labor_group_name
                .as_deref()
                .map(str::trim)
                .filter(|group| !group.is_empty())
            {
                Some(group) => erp_store
                    .get_labor_rate(group)?
                    .unwrap_or(DEFAULT_HOURLY_RATE),
                None => DEFAULT_HOURLY_RATE,
            };
            BaseDataSlice::from_detail(&detail, &notes, hourly_rate, now)
        }
        None => BaseDataSlice::placeholder(),
    };

    Ok(ServiceCallSlice {
        revisions,
        base_data,
    })
}
