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

use actix_web::{web::Data, App, HttpServer};

use crate::error::InternalError;

use super::{routes, Cors, State};

/// Serves the API on `bind` until the server is stopped.
pub async fn run(bind: &str, state: State) -> Result<(), InternalError> {
    info!("Starting REST API on {}", bind);

    HttpServer::new(move || {
        App::new()
            .app_data(Data::new(state.clone()))
            .wrap(Cors)
            .configure(routes::configure)
    })
    .bind(bind)
    .map_err(|err| {
        InternalError::from_source_with_prefix(Box::new(err), format!("Unable to bind {}", bind))
    })?
    .run()
    .await
    .map_err(|err| InternalError::from_source(Box::new(err)))
}
