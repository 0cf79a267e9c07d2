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

//! Database representations of quote revisions.
//!
//! The `New*Model` structs are inserted, the others are loaded.

use super::schema::{quote, quote_line_item, subcontractor};
use crate::quote::store::{
    Labor, LineItem, NewLineItem, NewSubcontractor, Quote, QuoteRevision, Subcontractor,
    DRAFT_STATUS,
};

#[derive(Insertable, PartialEq, Debug)]
#[table_name = "quote"]
pub struct NewQuoteModel {
    pub service_call_id: String,
    pub revision: i64,
    pub description: Option<String>,
    pub customer_name: Option<String>,
    pub status: String,
    pub tech_count: Option<i64>,
    pub tech_hours: Option<f64>,
    pub travel_hours: Option<f64>,
    pub tech_rate: Option<f64>,
    pub travel_rate: Option<f64>,
}

#[derive(Queryable, PartialEq, Debug)]
pub struct QuoteModel {
    pub id: i64,
    pub service_call_id: String,
    pub revision: i64,
    pub description: Option<String>,
    pub customer_name: Option<String>,
    pub status: String,
    pub tech_count: Option<i64>,
    pub tech_hours: Option<f64>,
    pub travel_hours: Option<f64>,
    pub tech_rate: Option<f64>,
    pub travel_rate: Option<f64>,
}

#[derive(Insertable, PartialEq, Debug)]
#[table_name = "quote_line_item"]
pub struct NewLineItemModel {
    pub quote_id: i64,
    pub part_number: Option<String>,
    pub description: Option<String>,
    pub vendor: Option<String>,
    pub on_hand: Option<String>,
    pub quantity: f64,
    pub unit_cost: f64,
    pub total_cost: f64,
}

#[derive(Queryable, PartialEq, Debug)]
pub struct LineItemModel {
    pub id: i64,
    pub quote_id: i64,
    pub part_number: Option<String>,
    pub description: Option<String>,
    pub vendor: Option<String>,
    pub on_hand: Option<String>,
    pub quantity: f64,
    pub unit_cost: f64,
    pub total_cost: f64,
}

#[derive(Insertable, PartialEq, Debug)]
#[table_name = "subcontractor"]
pub struct NewSubcontractorModel {
    pub quote_id: i64,
    pub contact_name: Option<String>,
    pub contact_details: Option<String>,
    pub cost: f64,
}

#[derive(Queryable, PartialEq, Debug)]
pub struct SubcontractorModel {
    pub id: i64,
    pub quote_id: i64,
    pub contact_name: Option<String>,
    pub contact_details: Option<String>,
    pub cost: f64,
}

impl From<&QuoteRevision> for NewQuoteModel {
    fn from(revision: &QuoteRevision) -> Self {
        let labor = revision.labor();
        NewQuoteModel {
            service_call_id: revision.service_call_id().to_string(),
            revision: revision.revision(),
            description: Some(revision.description().to_string()),
            customer_name: revision.customer_name().map(String::from),
            status: DRAFT_STATUS.to_string(),
            tech_count: Some(labor.tech_count),
            tech_hours: Some(labor.tech_hours),
            travel_hours: Some(labor.travel_hours),
            tech_rate: Some(labor.tech_rate),
            travel_rate: Some(labor.travel_rate),
        }
    }
}

impl From<QuoteModel> for Quote {
    fn from(model: QuoteModel) -> Self {
        Quote {
            id: model.id,
            service_call_id: model.service_call_id,
            revision: model.revision,
            description: model.description.unwrap_or_default(),
            customer_name: model.customer_name,
            status: model.status,
            labor: Labor {
                tech_count: model.tech_count.unwrap_or(0),
                tech_hours: model.tech_hours.unwrap_or(0.0),
                travel_hours: model.travel_hours.unwrap_or(0.0),
                tech_rate: model.tech_rate.unwrap_or(0.0),
                travel_rate: model.travel_rate.unwrap_or(0.0),
            },
        }
    }
}

impl From<LineItemModel> for LineItem {
    fn from(model: LineItemModel) -> Self {
        LineItem {
            quote_id: model.quote_id,
            part_number: model.part_number,
            description: model.description,
            vendor: model.vendor,
            on_hand: model.on_hand,
            quantity: model.quantity,
            unit_cost: model.unit_cost,
            total_cost: model.total_cost,
        }
    }
}

impl From<SubcontractorModel> for Subcontractor {
    fn from(model: SubcontractorModel) -> Self {
        Subcontractor {
            quote_id: model.quote_id,
            contact_name: model.contact_name,
            contact_details: model.contact_details,
            cost: model.cost,
        }
    }
}

pub fn make_line_item_models(quote_id: i64, items: &[NewLineItem]) -> Vec<NewLineItemModel> {
    items
        .iter()
        .map(|item| NewLineItemModel {
            quote_id,
            part_number: item.part_number.clone(),
            description: item.description.clone(),
            vendor: item.vendor.clone(),
            on_hand: item.on_hand.clone(),
            quantity: item.quantity,
            unit_cost: item.unit_cost,
            total_cost: item.total_cost(),
        })
        .collect()
}

pub fn make_subcontractor_models(
    quote_id: i64,
    subcontractors: &[NewSubcontractor],
) -> Vec<NewSubcontractorModel> {
    subcontractors
        .iter()
        .map(|sub| NewSubcontractorModel {
            quote_id,
            contact_name: sub.contact_name.clone(),
            contact_details: sub.contact_details.clone(),
            cost: sub.cost,
        })
        .collect()
}
