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

mod health;
mod quotes;
mod service_calls;
mod summarize;

use actix_web::{http::StatusCode, web, HttpResponse};
use serde::Serialize;

use crate::error::InternalError;
use crate::rest_api::resources::error::ErrorResponse;

pub use health::get_health;
pub use quotes::post_quote;
pub use service_calls::get_service_call;
pub use summarize::post_summarize;

/// Registers every route of the API.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.route("/health", web::get().to(get_health))
        .route(
            "/api/service-call/{service_call_id}",
            web::get().to(get_service_call),
        )
        .route("/api/quote", web::post().to(post_quote))
        .route("/summarize", web::post().to(post_summarize));
}

fn into_http_response<T: Serialize>(result: Result<T, ErrorResponse>) -> HttpResponse {
    match result {
        Ok(res) => HttpResponse::Ok().json(res),
        Err(err) => HttpResponse::build(
            StatusCode::from_u16(err.status_code()).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR),
        )
        .json(err),
    }
}

/// Runs a synchronous store call on the blocking thread pool.
async fn block<F, T>(f: F) -> Result<T, ErrorResponse>
where
    F: FnOnce() -> Result<T, ErrorResponse> + Send + 'static,
    T: Send + 'static,
{
    web::block(f).await.map_err(|err| {
        error!("Blocking task failed: {}", err);
        ErrorResponse::internal_error(Box::new(InternalError::with_message(err.to_string())))
    })?
}

#[cfg(test)]
mod tests {
    use super::*;

    use std::sync::Arc;
    use std::time::Duration;

    use actix_web::{test, web::Data, App};
    use pretty_assertions::assert_eq;
    use serde_json::{json, Value};

    use crate::rest_api::actix_web_4::{Cors, State};
    use crate::store::testing::create_test_pool;
    use crate::summarizer::{PromptTemplate, ReqwestSummarizer};

    fn state() -> State {
        let pool = create_test_pool().expect("Unable to create test pool");
        // Nothing listens on port 1, so every summary fails to connect
        let summarizer = ReqwestSummarizer::new(
            "http://127.0.0.1:1",
            "mistral",
            Duration::from_secs(5),
            PromptTemplate::default(),
        )
        .expect("Unable to create summarizer");
        State::with_sqlite_pool(pool, Arc::new(summarizer))
    }

    #[actix_rt::test]
    /// Responses echo the request origin and preflight requests are answered directly
    async fn cors_headers() {
        let app = test::init_service(
            App::new()
                .app_data(Data::new(state()))
                .wrap(Cors)
                .configure(configure),
        )
        .await;

        let req = test::TestRequest::get()
            .uri("/health")
            .insert_header(("Origin", "http://quotes.local"))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::OK);
        assert_eq!(
            resp.headers()
                .get("access-control-allow-origin")
                .and_then(|value| value.to_str().ok()),
            Some("http://quotes.local")
        );
        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body, json!({"status": "healthy"}));

        let req = test::TestRequest::default()
            .method(actix_web::http::Method::OPTIONS)
            .uri("/api/quote")
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::OK);
        assert_eq!(
            resp.headers()
                .get("access-control-allow-origin")
                .and_then(|value| value.to_str().ok()),
            Some("*")
        );
        assert_eq!(
            resp.headers()
                .get("access-control-allow-methods")
                .and_then(|value| value.to_str().ok()),
            Some("GET, POST, OPTIONS")
        );
    }

    #[actix_rt::test]
    /// A saved revision is served back with its line items
    async fn save_then_fetch() {
        let app = test::init_service(
            App::new()
                .app_data(Data::new(state()))
                .configure(configure),
        )
        .await;

        let req = test::TestRequest::get()
            .uri("/api/service-call/25-00123")
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);
        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body, json!({"error": "Service Call ID not found"}));

        let req = test::TestRequest::post()
            .uri("/api/quote")
            .set_json(&json!({
                "serviceCallId": "25-00123",
                "revision": 1,
                "description": "Annual service",
                "customer": {"name": "Riverside Plant"},
                "labor": {"techCount": 1, "techHours": 2},
                "parts": [{"part": "X1", "qty": "3", "unitCost": "10"}],
            }))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::OK);
        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["message"], json!("Quote revision 1 saved successfully."));
        assert!(body["quote_id"].is_i64());

        let req = test::TestRequest::get()
            .uri("/api/service-call/25-00123")
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::OK);
        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["revisions"][0]["parts"][0]["totalCost"], json!(30.0));
        assert_eq!(
            body["baseData"]["customer"]["name"],
            json!("N/A (Manual Entry)")
        );

        let req = test::TestRequest::post()
            .uri("/api/quote")
            .set_payload("not json")
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    }

    #[actix_rt::test]
    /// Summarize rejects a missing write-up and reports an unreachable model as 503
    async fn summarize_status() {
        let app = test::init_service(
            App::new()
                .app_data(Data::new(state()))
                .configure(configure),
        )
        .await;

        let req = test::TestRequest::post()
            .uri("/summarize")
            .set_json(&json!({"text": "no writeup"}))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body, json!({"error": "Missing 'writeup' in request body"}));

        let req = test::TestRequest::post()
            .uri("/summarize")
            .set_json(&json!({"writeup": "Replaced starter."}))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::SERVICE_UNAVAILABLE);
        let body: Value = test::read_body_json(resp).await;
        assert_eq!(
            body,
            json!({"error": "Failed to connect to the LLM service. Is it running?"})
        );
    }
}
