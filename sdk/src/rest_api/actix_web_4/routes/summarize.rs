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
use crate::rest_api::resources::summarize::v1;

use super::into_http_response;

pub async fn post_summarize(state: web::Data<State>, body: web::Bytes) -> HttpResponse {
    into_http_response(v1::summarize(&*state.summarizer, &body).await)
}
