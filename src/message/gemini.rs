use std::time::Duration;

use serde::Deserialize;
use serde_json::json;

use super::MessageSource;
use super::prompt::{TEMPERATURE, TOP_P, welcome_prompt};
use crate::consts::{EMPTY_REPLY_MESSAGE, FALLBACK_MESSAGE};
use crate::error::GenerateError;

const GENERATE_TIMEOUT: Duration = Duration::from_secs(15);

#[derive(Debug, Default, Deserialize)]
struct GenerateResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Debug, Default, Deserialize)]
struct Candidate {
    #[serde(default)]
    content: Option<Content>,
}

#[derive(Debug, Default, Deserialize)]
struct Content {
    #[serde(default)]
    parts: Vec<Part>,
}

#[derive(Debug, Default, Deserialize)]
struct Part {
    #[serde(default)]
    text: Option<String>,
}

/// Text of the first candidate, or `None` when the model returned nothing usable
fn extract_text(response: &GenerateResponse) -> Option<String> {
    let content = response.candidates.first()?.content.as_ref()?;
    let text: String = content
        .parts
        .iter()
        .filter_map(|p| p.text.as_deref())
        .collect();
    let text = text.trim();
    (!text.is_empty()).then(|| text.to_string())
}

/// Client for the hosted generateContent endpoint
pub(crate) struct GeminiClient {
    api_key: Option<String>,
    endpoint: String,
    agent: ureq::Agent,
}

impl GeminiClient {
    pub(crate) fn new(api_key: Option<String>, api_base: &str, model: &str) -> Self {
        let agent: ureq::Agent = ureq::Agent::config_builder()
            .timeout_global(Some(GENERATE_TIMEOUT))
            .build()
            .into();
        Self {
            api_key,
            endpoint: format!(
                "{}/v1beta/models/{}:generateContent",
                api_base.trim_end_matches('/'),
                model
            ),
            agent,
        }
    }

    fn try_generate(&self, email: &str) -> Result<Option<String>, GenerateError> {
        let api_key = self
            .api_key
            .as_deref()
            .ok_or(GenerateError::MissingCredential)?;

        let body = json!({
            "contents": [{ "parts": [{ "text": welcome_prompt(email) }] }],
            "generationConfig": { "temperature": TEMPERATURE, "topP": TOP_P },
        });

        let response = self
            .agent
            .post(&self.endpoint)
            .header("x-goog-api-key", api_key)
            .send_json(&body)
            .map_err(|e| GenerateError::Http(e.to_string()))?;

        let mut body = response.into_body();
        let parsed: GenerateResponse = serde_json::from_reader(body.as_reader())
            .map_err(|e| GenerateError::Decode(e.to_string()))?;
        Ok(extract_text(&parsed))
    }
}

impl MessageSource for GeminiClient {
    fn get_message(&self, email: &str) -> String {
        match self.try_generate(email) {
            Ok(Some(text)) => text,
            Ok(None) => EMPTY_REPLY_MESSAGE.to_string(),
            Err(e) => {
                tracing::warn!(error = %e, "welcome message unavailable, using fallback");
                FALLBACK_MESSAGE.to_string()
            }
        }
    }
}
