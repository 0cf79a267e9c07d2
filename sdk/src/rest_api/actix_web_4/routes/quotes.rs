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

use crate::rest_api::actix_web_4::State;
use crate::rest_api::resources::quotes::v1;

use super::{block, into_http_response};

pub async fn post_quote(state: web::Data<State>, body: web::Bytes) -> HttpResponse {
    let store = state.quote_store.clone();

    into_http_response(block(move || v1::save_quote(&*store, &body)).await)
}
