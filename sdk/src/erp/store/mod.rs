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

use std::collections::HashMap;

pub use error::ErpStoreError;

/// Service call record mirrored from the ERP
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ServiceCallDetail {
    /// Customer name at the service location
    pub customer_name: Option<String>,
    /// Billing customer, when it differs from the location
    pub bill_customer_name: Option<String>,
    pub labor_group_name: Option<String>,
    pub generator_model: Option<String>,
    pub generator_serial: Option<String>,
    pub warranty_expiration: Option<String>,
    pub ats_model: Option<String>,
    pub ats_serial: Option<String>,
    pub engine_model: Option<String>,
    pub engine_serial: Option<String>,
}

impl ServiceCallDetail {
    /// The company billed for the call, falling back to the location customer.
    pub fn company_name(&self) -> Option<&str> {
        self.bill_customer_name
            .as_deref()
            .map(str::trim)
            .filter(|name| !name.is_empty())
            .or_else(|| self.customer_name.as_deref().map(str::trim))
    }
}

/// Read-only access to the ERP mirror.
///
/// All identifiers are compared against trimmed column values. A mirror table that does not
/// exist, for instance while the extraction job is replacing it, reads as empty.
pub trait ErpStore: Send + Sync {
    /// Fetches the service call record, if the mirror has one
    ///
    /// # Arguments
    ///
    ///  * `service_call_id` - The trimmed service call id
    fn get_service_call_detail(
        &self,
        service_call_id: &str,
    ) -> Result<Option<ServiceCallDetail>, ErpStoreError>;

    /// Lists the raw service notes recorded for a service call. Null notes are skipped.
    ///
    /// # Arguments
    ///
    ///  * `service_call_id` - The trimmed service call id
    fn list_service_notes(&self, service_call_id: &str) -> Result<Vec<String>, ErpStoreError>;

    /// Fetches the billing amount of a labor group
    ///
    /// # Arguments
    ///
    ///  * `labor_group_name` - Name of the labor group
    fn get_labor_rate(&self, labor_group_name: &str) -> Result<Option<f64>, ErpStoreError>;

    /// Sums the on-hand quantity of each part across all inventory locations, in one lookup.
    /// Parts without an inventory record are absent from the result.
    ///
    /// # Arguments
    ///
    ///  * `part_numbers` - Trimmed part numbers to look up
    fn list_on_hand_quantities(
        &self,
        part_numbers: &[String],
    ) -> Result<HashMap<String, f64>, ErpStoreError>;
}
