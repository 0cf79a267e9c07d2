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

use std::collections::HashMap;

use serde::Serialize;

use crate::erp::{
    format_quantity, format_warranty, join_service_notes, normalize_multi_value,
    store::ServiceCallDetail, DEFAULT_HOURLY_RATE, NOT_AVAILABLE,
};
use crate::quote::store::{LineItem, Quote, Subcontractor};

use chrono::NaiveDateTime;

pub const MANUAL_ENTRY: &str = "N/A (Manual Entry)";
pub const MISSING_WRITEUP: &str =
    "No service write-up found in ERP. Description from latest revision is shown.";

#[derive(Debug, Serialize)]
pub struct ServiceCallSlice {
    pub revisions: Vec<QuoteRevisionSlice>,
    #[serde(rename = "baseData")]
    pub base_data: BaseDataSlice,
}

#[derive(Debug, Serialize)]
pub struct QuoteRevisionSlice {
    pub id: i64,
    pub revision: i64,
    pub description: String,
    pub customer_name: Option<String>,
    pub status: String,
    pub tech_count: i64,
    pub tech_hours: f64,
    pub travel_hours: f64,
    pub tech_rate: f64,
    pub travel_rate: f64,
    pub parts: Vec<LineItemSlice>,
    pub subcontractors: Vec<SubcontractorSlice>,
}

impl QuoteRevisionSlice {
    pub fn new(
        quote: Quote,
        parts: Vec<LineItemSlice>,
        subcontractors: Vec<SubcontractorSlice>,
    ) -> Self {
        Self {
            id: quote.id,
            revision: quote.revision,
            description: quote.description,
            customer_name: quote.customer_name,
            status: quote.status,
            tech_count: quote.labor.tech_count,
            tech_hours: quote.labor.tech_hours,
            travel_hours: quote.labor.travel_hours,
            tech_rate: quote.labor.tech_rate,
            travel_rate: quote.labor.travel_rate,
            parts,
            subcontractors,
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LineItemSlice {
    pub part: Option<String>,
    pub desc: Option<String>,
    pub vendor: Option<String>,
    /// Current inventory, not the value stored with the revision
    pub on_hand: String,
    pub qty: f64,
    pub unit_cost: f64,
    pub total_cost: f64,
}

impl LineItemSlice {
    /// Builds the slice, resolving on-hand from the inventory totals keyed by trimmed part number.
    pub fn new(item: LineItem, on_hand: &HashMap<String, f64>) -> Self {
        let on_hand = item
            .part_number
            .as_deref()
            .and_then(|part| on_hand.get(part.trim()))
            .map(|quantity| format_quantity(*quantity))
            .unwrap_or_else(|| NOT_AVAILABLE.to_string());

        Self {
            part: item.part_number,
            desc: item.description,
            vendor: item.vendor,
            on_hand,
            qty: item.quantity,
            unit_cost: item.unit_cost,
            total_cost: item.total_cost,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct SubcontractorSlice {
    pub contact_name: Option<String>,
    pub contact_details: Option<String>,
    pub cost: f64,
}

impl From<Subcontractor> for SubcontractorSlice {
    fn from(subcontractor: Subcontractor) -> Self {
        Self {
            contact_name: subcontractor.contact_name,
            contact_details: subcontractor.contact_details,
            cost: subcontractor.cost,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct BaseDataSlice {
    pub customer: CustomerSlice,
    #[serde(rename = "unitInfo")]
    pub unit_info: UnitInfoSlice,
    pub writeup: String,
    pub rates: RatesSlice,
}

impl BaseDataSlice {
    /// Base data taken from the ERP mirror.
    ///
    /// # Arguments
    ///
    /// * `detail` - The mirrored service call record
    /// * `notes` - Raw service notes of the call
    /// * `hourly_rate` - Billing amount of the call's labor group
    /// * `now` - The time the warranty is checked against
    pub fn from_detail(
        detail: &ServiceCallDetail,
        notes: &[String],
        hourly_rate: f64,
        now: NaiveDateTime,
    ) -> Self {
        let customer_name = or_not_available(detail.customer_name.as_deref().map(str::trim));
        let company = or_not_available(detail.company_name());

        Self {
            customer: CustomerSlice {
                name: customer_name,
                company,
            },
            unit_info: UnitInfoSlice {
                generator_model: or_not_available(detail.generator_model.as_deref()),
                generator_serial: or_not_available(detail.generator_serial.as_deref()),
                generator_spec: NOT_AVAILABLE.to_string(),
                generator_kw: NOT_AVAILABLE.to_string(),
                generator_voltage: NOT_AVAILABLE.to_string(),
                generator_warranty: format_warranty(detail.warranty_expiration.as_deref(), now),
                engine_model: multi_value(detail.engine_model.as_deref()),
                engine_serial: multi_value(detail.engine_serial.as_deref()),
                ats_model: multi_value(detail.ats_model.as_deref()),
                ats_serial: multi_value(detail.ats_serial.as_deref()),
            },
            writeup: join_service_notes(notes),
            rates: RatesSlice {
                tech: hourly_rate,
                travel: hourly_rate,
            },
        }
    }

    /// Base data for a call that only exists as saved quotes.
    pub fn placeholder() -> Self {
        Self {
            customer: CustomerSlice {
                name: MANUAL_ENTRY.to_string(),
                company: MANUAL_ENTRY.to_string(),
            },
            unit_info: UnitInfoSlice::default(),
            writeup: MISSING_WRITEUP.to_string(),
            rates: RatesSlice {
                tech: DEFAULT_HOURLY_RATE,
                travel: DEFAULT_HOURLY_RATE,
            },
        }
    }
}

fn or_not_available(value: Option<&str>) -> String {
    value
        .map(str::trim)
        .filter(|value| !value.is_empty())
        .unwrap_or(NOT_AVAILABLE)
        .to_string()
}

fn multi_value(raw: Option<&str>) -> String {
    normalize_multi_value(raw).unwrap_or_else(|| NOT_AVAILABLE.to_string())
}

#[derive(Debug, Serialize)]
pub struct CustomerSlice {
    pub name: String,
    pub company: String,
}

#[derive(Debug, Serialize)]
pub struct UnitInfoSlice {
    #[serde(rename = "generator.model")]
    pub generator_model: String,
    #[serde(rename = "generator.serial")]
    pub generator_serial: String,
    #[serde(rename = "generator.spec")]
    pub generator_spec: String,
    #[serde(rename = "generator.kw")]
    pub generator_kw: String,
    #[serde(rename = "generator.voltage")]
    pub generator_voltage: String,
    #[serde(rename = "generator.warranty")]
    pub generator_warranty: String,
    #[serde(rename = "engine.model")]
    pub engine_model: String,
    #[serde(rename = "engine.serial")]
    pub engine_serial: String,
    #[serde(rename = "ats.model")]
    pub ats_model: String,
    #[serde(rename = "ats.serial")]
    pub ats_serial: String,
}

impl Default for UnitInfoSlice {
    fn default() -> Self {
        let na = || NOT_AVAILABLE.to_string();
        Self {
            generator_model: na(),
            generator_serial: na(),
            generator_spec: na(),
            generator_kw: na(),
            generator_voltage: na(),
            generator_warranty: na(),
            engine_model: na(),
            engine_serial: na(),
            ats_model: na(),
            ats_serial: na(),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct RatesSlice {
    pub tech: f64,
    pub travel: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    use pretty_assertions::assert_eq;
    use serde_json::json;

    #[test]
    fn test_placeholder_json() -> Result<(), serde_json::Error> {
        let value = serde_json::to_value(BaseDataSlice::placeholder())?;

        assert_eq!(value["customer"]["name"], json!("N/A (Manual Entry)"));
        assert_eq!(value["unitInfo"]["generator.warranty"], json!("N/A"));
        assert_eq!(value["unitInfo"]["ats.serial"], json!("N/A"));
        assert_eq!(value["rates"], json!({"tech": 75.0, "travel": 75.0}));

        Ok(())
    }

    #[test]
    fn test_line_item_on_hand_resolution() {
        let item = LineItem {
            quote_id: 1,
            part_number: Some(" X1 ".to_string()),
            description: None,
            vendor: None,
            on_hand: Some("12".to_string()),
            quantity: 2.0,
            unit_cost: 4.0,
            total_cost: 8.0,
        };
        let mut on_hand = HashMap::new();
        on_hand.insert("X1".to_string(), 5.5);

        assert_eq!(LineItemSlice::new(item.clone(), &on_hand).on_hand, "5.5");
        assert_eq!(LineItemSlice::new(item, &HashMap::new()).on_hand, "N/A");
    }
}
