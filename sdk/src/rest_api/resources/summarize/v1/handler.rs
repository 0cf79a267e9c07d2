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

use crate::rest_api::resources::error::ErrorResponse;
use crate::summarizer::Summarizer;

use super::payloads::{SummarizeRequest, SummarizeResponse};

/// Summarizes a technician write-up through the language model.
pub async fn summarize(
    summarizer: &dyn Summarizer,
    body: &[u8],
) -> Result<SummarizeResponse, ErrorResponse> {
    let request = SummarizeRequest::from_body(body)?;

    let summary = summarizer
        .summarize(&request.writeup, request.format)
        .await?;

    Ok(SummarizeResponse::from(summary))
}
