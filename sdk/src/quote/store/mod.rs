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

#[cfg(feature = "diesel")]
pub mod diesel;
mod error;

pub use error::{QuoteBuilderError, QuoteStoreError};

/// Status given to every newly saved revision
pub const DRAFT_STATUS: &str = "Draft";

/// Labor figures of a quote revision
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Labor {
    pub tech_count: i64,
    pub tech_hours: f64,
    pub travel_hours: f64,
    pub tech_rate: f64,
    pub travel_rate: f64,
}

/// Header row of a saved quote revision
#[derive(Clone, Debug, PartialEq)]
pub struct Quote {
    pub id: i64,
    pub service_call_id: String,
    pub revision: i64,
    pub description: String,
    pub customer_name: Option<String>,
    pub status: String,
    pub labor: Labor,
}

/// A part on a saved quote revision
#[derive(Clone, Debug, PartialEq)]
pub struct LineItem {
    pub quote_id: i64,
    pub part_number: Option<String>,
    pub description: Option<String>,
    pub vendor: Option<String>,
    /// On-hand quantity as seen by the user when the revision was saved
    pub on_hand: Option<String>,
    pub quantity: f64,
    pub unit_cost: f64,
    pub total_cost: f64,
}

/// A subcontractor entry on a saved quote revision
#[derive(Clone, Debug, PartialEq)]
pub struct Subcontractor {
    pub quote_id: i64,
    pub contact_name: Option<String>,
    pub contact_details: Option<String>,
    pub cost: f64,
}

/// A part to be saved with a new revision
#[derive(Clone, Debug, Default, PartialEq)]
pub struct NewLineItem {
    pub part_number: Option<String>,
    pub description: Option<String>,
    pub vendor: Option<String>,
    pub on_hand: Option<String>,
    pub quantity: f64,
    pub unit_cost: f64,
}

impl NewLineItem {
    /// The line total, fixed when the revision is saved. A product too large to represent is
    /// stored as 0.0.
    pub fn total_cost(&self) -> f64 {
        let total = self.quantity * self.unit_cost;
        if total.is_finite() {
            total
        } else {
            0.0
        }
    }
}

/// A subcontractor entry to be saved with a new revision
#[derive(Clone, Debug, Default, PartialEq)]
pub struct NewSubcontractor {
    pub contact_name: Option<String>,
    pub contact_details: Option<String>,
    pub cost: f64,
}

/// A complete quote revision, as submitted for saving
#[derive(Clone, Debug, PartialEq)]
pub struct QuoteRevision {
    service_call_id: String,
    revision: i64,
    description: String,
    customer_name: Option<String>,
    labor: Labor,
    line_items: Vec<NewLineItem>,
    subcontractors: Vec<NewSubcontractor>,
}

impl QuoteRevision {
    pub fn service_call_id(&self) -> &str {
        &self.service_call_id
    }

    pub fn revision(&self) -> i64 {
        self.revision
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn customer_name(&self) -> Option<&str> {
        self.customer_name.as_deref()
    }

    pub fn labor(&self) -> &Labor {
        &self.labor
    }

    pub fn line_items(&self) -> &[NewLineItem] {
        &self.line_items
    }

    pub fn subcontractors(&self) -> &[NewSubcontractor] {
        &self.subcontractors
    }
}

/// Builder used to create a `QuoteRevision`
#[derive(Clone, Debug, Default)]
pub struct QuoteRevisionBuilder {
    service_call_id: Option<String>,
    revision: Option<i64>,
    description: Option<String>,
    customer_name: Option<String>,
    labor: Option<Labor>,
    line_items: Vec<NewLineItem>,
    subcontractors: Vec<NewSubcontractor>,
}

impl QuoteRevisionBuilder {
    pub fn new() -> Self {
        QuoteRevisionBuilder::default()
    }

    /// Sets the service call id. Surrounding whitespace is removed.
    pub fn with_service_call_id(mut self, service_call_id: &str) -> Self {
        self.service_call_id = Some(service_call_id.trim().to_string());
        self
    }

    pub fn with_revision(mut self, revision: i64) -> Self {
        self.revision = Some(revision);
        self
    }

    pub fn with_description(mut self, description: String) -> Self {
        self.description = Some(description);
        self
    }

    pub fn with_customer_name(mut self, customer_name: Option<String>) -> Self {
        self.customer_name = customer_name;
        self
    }

    pub fn with_labor(mut self, labor: Labor) -> Self {
        self.labor = Some(labor);
        self
    }

    pub fn with_line_items(mut self, line_items: Vec<NewLineItem>) -> Self {
        self.line_items = line_items;
        self
    }

    pub fn with_subcontractors(mut self, subcontractors: Vec<NewSubcontractor>) -> Self {
        self.subcontractors = subcontractors;
        self
    }

    pub fn build(self) -> Result<QuoteRevision, QuoteBuilderError> {
        let service_call_id = self
            .service_call_id
            .filter(|id| !id.is_empty())
            .ok_or_else(|| QuoteBuilderError::MissingRequiredField("service_call_id".into()))?;
        let revision = self
            .revision
            .ok_or_else(|| QuoteBuilderError::MissingRequiredField("revision".into()))?;
        let description = self
            .description
            .ok_or_else(|| QuoteBuilderError::MissingRequiredField("description".into()))?;
        let labor = self
            .labor
            .ok_or_else(|| QuoteBuilderError::MissingRequiredField("labor".into()))?;

        Ok(QuoteRevision {
            service_call_id,
            revision,
            description,
            customer_name: self.customer_name,
            labor,
            line_items: self.line_items,
            subcontractors: self.subcontractors,
        })
    }
}

pub trait QuoteStore: Send + Sync {
    /// Lists the revisions saved for a service call, ordered by revision number
    ///
    /// # Arguments
    ///
    ///  * `service_call_id` - The trimmed service call id
    fn list_quotes(&self, service_call_id: &str) -> Result<Vec<Quote>, QuoteStoreError>;

    /// Lists the line items of all the given revisions in one lookup, in the order they were
    /// saved
    ///
    /// # Arguments
    ///
    ///  * `quote_ids` - Ids of the revisions whose line items are returned
    fn list_line_items(&self, quote_ids: &[i64]) -> Result<Vec<LineItem>, QuoteStoreError>;

    /// Lists the subcontractors of all the given revisions in one lookup
    ///
    /// # Arguments
    ///
    ///  * `quote_ids` - Ids of the revisions whose subcontractors are returned
    fn list_subcontractors(&self, quote_ids: &[i64])
        -> Result<Vec<Subcontractor>, QuoteStoreError>;

    /// Saves a revision, replacing any revision already stored under the same service call id
    /// and revision number along with its line items and subcontractors. Returns the id of the
    /// new revision.
    ///
    /// # Arguments
    ///
    ///  * `revision` - The complete revision to save
    fn save_quote_revision(&self, revision: QuoteRevision) -> Result<i64, QuoteStoreError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_quote_revision() {
        let revision = QuoteRevisionBuilder::new()
            .with_service_call_id("  25-00123 ")
            .with_revision(2)
            .with_description("Replace starter".to_string())
            .with_labor(Labor::default())
            .with_line_items(vec![NewLineItem {
                quantity: 3.0,
                unit_cost: 10.0,
                ..Default::default()
            }])
            .build()
            .expect("Unable to build revision");

        assert_eq!(revision.service_call_id(), "25-00123");
        assert_eq!(revision.revision(), 2);
        assert_eq!(revision.customer_name(), None);
        assert_eq!(revision.line_items()[0].total_cost(), 30.0);
        assert!(revision.subcontractors().is_empty());
    }

    #[test]
    fn test_build_quote_revision_missing_fields() {
        match QuoteRevisionBuilder::new()
            .with_service_call_id("   ")
            .with_revision(1)
            .build()
        {
            Err(QuoteBuilderError::MissingRequiredField(field)) => {
                assert_eq!(field, "service_call_id")
            }
            other => panic!("Unexpected result: {:?}", other),
        }

        match QuoteRevisionBuilder::new()
            .with_service_call_id("25-00123")
            .with_revision(1)
            .with_description(String::new())
            .build()
        {
            Err(QuoteBuilderError::MissingRequiredField(field)) => assert_eq!(field, "labor"),
            other => panic!("Unexpected result: {:?}", other),
        }
    }
}
