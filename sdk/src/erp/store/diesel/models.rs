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

use crate::erp::store::ServiceCallDetail;

#[derive(Queryable, PartialEq, Debug)]
pub struct ServiceCallDetailModel {
    pub service_call_id: String,
    pub customer_name: Option<String>,
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

impl From<ServiceCallDetailModel> for ServiceCallDetail {
    fn from(model: ServiceCallDetailModel) -> Self {
        ServiceCallDetail {
            customer_name: model.customer_name,
            bill_customer_name: model.bill_customer_name,
            labor_group_name: model.labor_group_name,
            generator_model: model.generator_model,
            generator_serial: model.generator_serial,
            warranty_expiration: model.warranty_expiration,
            ats_model: model.ats_model,
            ats_serial: model.ats_serial,
            engine_model: model.engine_model,
            engine_serial: model.engine_serial,
        }
    }
}
