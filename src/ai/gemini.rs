//! Gemini `generateContent` client
//!
//! Minimal REST client for Google's generative language API. One request per
//! call, no retries; the credential is sent in the `x-goog-api-key` header and
//! is never logged.
//!
//! # Wire format
//!
//! ```text
//! POST {api_base}/v1beta/models/{model}:generateContent
//! { "contents": [ { "parts": [ { "text": "<prompt>" } ] } ] }
//!
//! 200 { "candidates": [ { "content": { "parts": [ { "text": "e2e4" } ] } } ] }
//! 4xx { "error": { "code": 400, "message": "API key not valid", "status": "INVALID_ARGUMENT" } }
//! ```

use super::error::{ProposerError, ProposerResult};
use super::proposer::TextGenerator;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

/// Default public endpoint
pub const DEFAULT_API_BASE: &str = "https://generativelanguage.googleapis.com";

/// Model the pages were written against
pub const DEFAULT_MODEL: &str = "gemini-1.5-flash";

const API_KEY_HEADER: &str = "x-goog-api-key";

#[derive(Serialize)]
struct GenerateContentRequest<'a> {
    contents: Vec<RequestContent<'a>>,
}

#[derive(Serialize)]
struct RequestContent<'a> {
    parts: Vec<RequestPart<'a>>,
}

#[derive(Serialize)]
struct RequestPart<'a> {
    text: &'a str,
}

#[derive(Deserialize, Debug, Default)]
#[serde(rename_all = "camelCase")]
struct GenerateContentResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
    prompt_feedback: Option<PromptFeedback>,
}

#[derive(Deserialize, Debug)]
struct Candidate {
    content: Option<CandidateContent>,
}

#[derive(Deserialize, Debug)]
struct CandidateContent {
    #[serde(default)]
    parts: Vec<ResponsePart>,
}

#[derive(Deserialize, Debug)]
struct ResponsePart {
    text: Option<String>,
}

#[derive(Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
struct PromptFeedback {
    block_reason: Option<String>,
}

#[derive(Deserialize, Debug)]
struct ApiErrorBody {
    error: ApiErrorDetail,
}

#[derive(Deserialize, Debug)]
struct ApiErrorDetail {
    message: String,
}

/// HTTP client for one Gemini model
#[derive(Debug, Clone)]
pub struct GeminiClient {
    http: reqwest::Client,
    api_base: String,
    model: String,
}

impl GeminiClient {
    pub fn new(api_base: &str, model: &str) -> Self {
        Self {
            http: reqwest::Client::new(),
            api_base: api_base.trim_end_matches('/').to_string(),
            model: model.trim_start_matches("models/").to_string(),
        }
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    fn endpoint(&self) -> String {
        format!(
            "{}/v1beta/models/{}:generateContent",
            self.api_base, self.model
        )
    }
}

impl Default for GeminiClient {
    fn default() -> Self {
        Self::new(DEFAULT_API_BASE, DEFAULT_MODEL)
    }
}

#[async_trait]
impl TextGenerator for GeminiClient {
    async fn generate(&self, credential: &str, prompt: &str) -> ProposerResult<String> {
        let request = GenerateContentRequest {
            contents: vec![RequestContent {
                parts: vec![RequestPart { text: prompt }],
            }],
        };

        debug!("[GEMINI] POST {}", self.endpoint());
        let response = self
            .http
            .post(self.endpoint())
            .header(API_KEY_HEADER, credential)
            .json(&request)
            .send()
            .await?;

        let status = response.status();
        let body = response.text().await?;

        if !status.is_success() {
            return Err(ProposerError::Api {
                status: status.as_u16(),
                message: api_error_message(&body),
            });
        }

        let parsed: GenerateContentResponse = serde_json::from_str(&body)
            .map_err(|e| ProposerError::Service(format!("malformed response: {e}")))?;
        let text = extract_text(parsed)?;

        info!("[GEMINI] {} answered {} bytes", self.model, text.len());
        Ok(text)
    }
}

/// Error message from an error body, or the raw body if it isn't JSON
fn api_error_message(body: &str) -> String {
    serde_json::from_str::<ApiErrorBody>(body)
        .map(|b| b.error.message)
        .unwrap_or_else(|_| body.trim().to_string())
}

/// Concatenated text parts of the first candidate
fn extract_text(response: GenerateContentResponse) -> ProposerResult<String> {
    if let Some(reason) = response.prompt_feedback.and_then(|f| f.block_reason) {
        return Err(ProposerError::Blocked { reason });
    }

    let text: String = response
        .candidates
        .into_iter()
        .next()
        .and_then(|c| c.content)
        .map(|content| {
            content
                .parts
                .into_iter()
                .filter_map(|p| p.text)
                .collect()
        })
        .unwrap_or_default();

    if text.trim().is_empty() {
        Err(ProposerError::EmptyResponse)
    } else {
        Ok(text)
    }
}
