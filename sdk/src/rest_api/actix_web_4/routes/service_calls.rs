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

use actix_web::{web, HttpResponse};
use chrono::Local;

use crate::rest_api::actix_web_4::State;
use crate::rest_api::resources::service_calls::v1;

use super::{block, into_http_response};

pub async fn get_service_call(
    state: web::Data<State>,
    service_call_id: web::Path<String>,
) -> HttpResponse {
    let erp_store = state.erp_store.clone();
    let quote_store = state.quote_store.clone();
    let service_call_id = service_call_id.into_inner();

    into_http_response(
        block(move || {
            v1::fetch_service_call(
                &*erp_store,
                &*quote_store,
                &service_call_id,
                Local::now().naive_local(),
            )
        })
        .await,
    )
}
