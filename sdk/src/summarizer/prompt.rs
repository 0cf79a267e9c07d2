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

use super::SummaryFormat;

const WRITEUP_PLACEHOLDER: &str = "{writeup}";

const TEXT_PROMPT: &str = "You are an expert technical writer for an HVAC company.
A technician provided this service call write-up. Rewrite it into a clear, professional, \
customer-facing description for a quote.
Focus on the work performed and its value. Omit internal jargon. The output must be a single \
paragraph.

Technician's Write-up:
\"{writeup}\"

Customer-Facing Quote Description:";

const JSON_PROMPT: &str = "You are an expert technical writer for an HVAC company.
A technician provided this service call write-up. Respond with a JSON object only, using \
these keys:
\"summary\": a clear, professional, customer-facing description of the work, as a single \
paragraph without internal jargon;
\"tech_count\": the number of technicians the work needs;
\"tech_hours\": the technician hours the work needs;
\"days\": the number of days the work takes.

Technician's Write-up:
\"{writeup}\"";

/// Prompt text sent to the model, one template per [`SummaryFormat`].
///
/// Each template carries a `{writeup}` placeholder.
#[derive(Clone, Debug, PartialEq)]
pub struct PromptTemplate {
    text: String,
    structured: String,
}

impl PromptTemplate {
    pub fn new(text: String, structured: String) -> Self {
        Self { text, structured }
    }

    pub fn render(&self, writeup: &str, format: SummaryFormat) -> String {
        let template = match format {
            SummaryFormat::Text => &self.text,
            SummaryFormat::Json => &self.structured,
        };
        template.replace(WRITEUP_PLACEHOLDER, writeup)
    }
}

impl Default for PromptTemplate {
    fn default() -> Self {
        Self::new(TEXT_PROMPT.to_string(), JSON_PROMPT.to_string())
    }
}
