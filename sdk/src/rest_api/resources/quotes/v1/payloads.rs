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

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::erp::NOT_AVAILABLE;
use crate::quote::store::{
    Labor, NewLineItem, NewSubcontractor, QuoteRevision, QuoteRevisionBuilder,
};
use crate::quote::{coerce_float, coerce_integer};
use crate::rest_api::resources::error::ErrorResponse;

/// A quote revision as sent by the quote sheet.
///
/// Figures are kept as raw JSON values and coerced when the revision is built, so a stray
/// character in one cell does not reject the whole save.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuotePayload {
    pub service_call_id: Option<String>,
    pub revision: Option<Value>,
    pub description: Option<String>,
    pub customer: Option<CustomerPayload>,
    pub labor: Option<Map<String, Value>>,
    pub parts: Option<Vec<PartPayload>>,
    pub subcontractors: Option<Vec<SubcontractorPayload>>,
}

#[derive(Debug, Default, Deserialize)]
pub struct CustomerPayload {
    pub name: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PartPayload {
    pub part: Option<Value>,
    pub desc: Option<Value>,
    pub vendor: Option<Value>,
    pub on_hand: Option<Value>,
    pub qty: Option<Value>,
    pub unit_cost: Option<Value>,
}

#[derive(Debug, Default, Deserialize)]
pub struct SubcontractorPayload {
    pub contact_name: Option<Value>,
    pub contact_details: Option<Value>,
    pub cost: Option<Value>,
}

#[derive(Debug, Serialize)]
pub struct SaveQuoteResponse {
    pub message: String,
    pub quote_id: i64,
}

fn missing(field: &str) -> ErrorResponse {
    ErrorResponse::new(400, &format!("Missing required field '{}'", field))
}

/// Reads a scalar as text. Numbers and booleans keep their JSON spelling.
fn text(value: Option<Value>) -> Option<String> {
    match value? {
        Value::Null => None,
        Value::String(text) => Some(text),
        other => Some(other.to_string()),
    }
}

fn revision_number(value: &Value) -> Option<i64> {
    match value {
        Value::Number(number) => number
            .as_i64()
            .or_else(|| number.as_f64().filter(|n| n.fract() == 0.0).map(|n| n as i64)),
        Value::String(text) => text.trim().parse::<i64>().ok(),
        _ => None,
    }
}

impl From<PartPayload> for NewLineItem {
    fn from(part: PartPayload) -> Self {
        Self {
            quantity: coerce_float(part.qty.as_ref(), 0.0),
            unit_cost: coerce_float(part.unit_cost.as_ref(), 0.0),
            part_number: text(part.part),
            description: text(part.desc),
            vendor: text(part.vendor),
            on_hand: text(part.on_hand).or_else(|| Some(NOT_AVAILABLE.to_string())),
        }
    }
}

impl From<SubcontractorPayload> for NewSubcontractor {
    fn from(subcontractor: SubcontractorPayload) -> Self {
        Self {
            cost: coerce_float(subcontractor.cost.as_ref(), 0.0),
            contact_name: text(subcontractor.contact_name),
            contact_details: text(subcontractor.contact_details),
        }
    }
}

impl TryFrom<QuotePayload> for QuoteRevision {
    type Error = ErrorResponse;

    fn try_from(payload: QuotePayload) -> Result<Self, Self::Error> {
        let service_call_id = payload
            .service_call_id
            .filter(|id| !id.trim().is_empty())
            .ok_or_else(|| missing("serviceCallId"))?;
        let revision = payload
            .revision
            .as_ref()
            .and_then(revision_number)
            .ok_or_else(|| missing("revision"))?;
        let description = payload
            .description
            .ok_or_else(|| missing("description"))?;
        let customer_name = payload
            .customer
            .and_then(|customer| customer.name)
            .ok_or_else(|| missing("customer.name"))?;
        let labor = payload.labor.ok_or_else(|| missing("labor"))?;

        QuoteRevisionBuilder::new()
            .with_service_call_id(&service_call_id)
            .with_revision(revision)
            .with_description(description)
            .with_customer_name(Some(customer_name))
            .with_labor(Labor {
                tech_count: coerce_integer(labor.get("techCount"), 0),
                tech_hours: coerce_float(labor.get("techHours"), 0.0),
                travel_hours: coerce_float(labor.get("travelHours"), 0.0),
                tech_rate: coerce_float(labor.get("techRate"), 0.0),
                travel_rate: coerce_float(labor.get("travelRate"), 0.0),
            })
            .with_line_items(
                payload
                    .parts
                    .unwrap_or_default()
                    .into_iter()
                    .map(NewLineItem::from)
                    .collect(),
            )
            .with_subcontractors(
                payload
                    .subcontractors
                    .unwrap_or_default()
                    .into_iter()
                    .map(NewSubcontractor::from)
                    .collect(),
            )
            .build()
            .map_err(|err| ErrorResponse::new(400, &err.to_string()))
    }
}
