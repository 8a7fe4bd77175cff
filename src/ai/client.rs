//! Generative-language (`Gemini`) API client module
//!
//! Encapsulates the single outbound `generateContent` call and turns every
//! possible outcome into an [`UpstreamResult`].

use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::time::Duration;
use tokio_retry::RetryIf;
use tokio_retry::strategy::{ExponentialBackoff, jitter};
use tracing::{error, info, warn};
use url::Url;

use super::prompt_builder::UpstreamPayload;
use crate::core::config::AppConfig;
use crate::errors::TutorError;

/// Outcome of one upstream call, after any configured retries.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UpstreamResult {
    /// Text of the first part of the first candidate.
    Text(String),
    /// Non-success HTTP status, with the API's own error message if it sent one.
    Status { code: u16, message: Option<String> },
    /// Success status but no candidate/content/part/text in the body.
    Malformed,
    /// Network failure or an unreadable body.
    Transport(String),
}

impl UpstreamResult {
    /// Only failures that might go away on their own are worth another attempt.
    #[must_use]
    pub fn is_retryable(&self) -> bool {
        match self {
            UpstreamResult::Transport(_) => true,
            UpstreamResult::Status { code, .. } => *code == 429 || *code >= 500,
            UpstreamResult::Text(_) | UpstreamResult::Malformed => false,
        }
    }

    /// # Errors
    ///
    /// Returns the [`TutorError`] matching every non-text outcome.
    pub fn into_text(self) -> Result<String, TutorError> {
        match self {
            UpstreamResult::Text(text) => Ok(text),
            UpstreamResult::Status { code, message } => {
                let message = message
                    .or_else(|| {
                        StatusCode::from_u16(code)
                            .ok()
                            .and_then(|s| s.canonical_reason())
                            .map(str::to_string)
                    })
                    .unwrap_or_default();
                Err(TutorError::UpstreamStatus {
                    status: code,
                    message,
                })
            }
            UpstreamResult::Malformed => Err(TutorError::NoContent),
            UpstreamResult::Transport(message) => Err(TutorError::HttpError(message)),
        }
    }
}

/// Anything that can turn a prompt into lesson text.
#[async_trait]
pub trait LessonGenerator: Send + Sync {
    async fn generate(&self, api_key: &str, payload: &UpstreamPayload) -> UpstreamResult;
}

/// Gemini API client for generating lessons
pub struct GeminiClient {
    http: Client,
    api_base: String,
    model_name: String,
    max_attempts: u32,
}

impl GeminiClient {
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be built with the configured
    /// timeout.
    pub fn new(config: &AppConfig) -> Result<Self, TutorError> {
        let mut builder = Client::builder();
        if let Some(timeout) = config.request_timeout {
            builder = builder.timeout(timeout);
        }
        let http = builder.build().map_err(|e| {
            error!("Failed to build Gemini HTTP client: {}", e);
            TutorError::Internal(format!("Failed to build HTTP client: {}", e.without_url()))
        })?;

        Ok(Self {
            http,
            api_base: config.gemini_api_base.trim_end_matches('/').to_string(),
            model_name: config.gemini_model.clone(),
            max_attempts: config.max_attempts.max(1),
        })
    }

    /// `<base>/models/<model>:generateContent?key=<key>`
    ///
    /// # Errors
    ///
    /// Returns an error if the configured base URL is not a valid absolute URL.
    pub fn endpoint(&self, api_key: &str) -> Result<Url, TutorError> {
        let raw = format!("{}/models/{}:generateContent", self.api_base, self.model_name);
        let mut url = Url::parse(&raw)
            .map_err(|e| TutorError::Internal(format!("Invalid Gemini endpoint {raw}: {e}")))?;
        url.query_pairs_mut().append_pair("key", api_key);
        Ok(url)
    }

    async fn send_once(&self, url: &Url, request: &GenerateContentRequest<'_>) -> UpstreamResult {
        let response = match self.http.post(url.clone()).json(request).send().await {
            Ok(response) => response,
            // The URL carries the key, so it must not reach the message.
            Err(e) => {
                return UpstreamResult::Transport(format!(
                    "Gemini API request failed: {}",
                    e.without_url()
                ));
            }
        };

        let status = response.status();
        let body = match response.text().await {
            Ok(body) => body,
            Err(e) => {
                return UpstreamResult::Transport(format!(
                    "Failed to read Gemini response: {}",
                    e.without_url()
                ));
            }
        };

        if !status.is_success() {
            warn!(status = status.as_u16(), "Gemini API returned an error status");
            return UpstreamResult::Status {
                code: status.as_u16(),
                message: extract_error_message(&body),
            };
        }

        parse_generate_response(&body)
    }
}

#[async_trait]
impl LessonGenerator for GeminiClient {
    async fn generate(&self, api_key: &str, payload: &UpstreamPayload) -> UpstreamResult {
        #[cfg(feature = "debug-logs")]
        info!("Using Gemini prompt:\n{:?}", payload);

        #[cfg(not(feature = "debug-logs"))]
        info!(
            model = %self.model_name,
            query_len = payload.user_query.len(),
            "Requesting lesson from Gemini"
        );

        let url = match self.endpoint(api_key) {
            Ok(url) => url,
            Err(e) => return UpstreamResult::Transport(e.to_string()),
        };
        let request = GenerateContentRequest::from_payload(payload);

        if self.max_attempts <= 1 {
            return self.send_once(&url, &request).await;
        }

        let retries = (self.max_attempts - 1) as usize;
        // 100ms, 200ms, 400ms ... capped at 2s
        let strategy = ExponentialBackoff::from_millis(2)
            .factor(50)
            .max_delay(Duration::from_secs(2))
            .map(jitter)
            .take(retries);

        let (url, request) = (&url, &request);
        let outcome = RetryIf::start(
            strategy,
            move || async move {
                match self.send_once(url, request).await {
                    UpstreamResult::Text(text) => Ok(text),
                    other => Err(other),
                }
            },
            |failure: &UpstreamResult| {
                let retry = failure.is_retryable();
                if retry {
                    warn!(?failure, "Retrying Gemini request");
                }
                retry
            },
        )
        .await;

        match outcome {
            Ok(text) => UpstreamResult::Text(text),
            Err(failure) => failure,
        }
    }
}

/// Best-effort read of `error.message` from an API error body.
#[must_use]
pub fn extract_error_message(body: &str) -> Option<String> {
    let value: Value = serde_json::from_str(body).ok()?;
    value
        .get("error")
        .and_then(|e| e.get("message"))
        .and_then(|m| m.as_str())
        .map(str::trim)
        .filter(|m| !m.is_empty())
        .map(str::to_string)
}

/// Pulls `candidates[0].content.parts[0].text` out of a success body.
#[must_use]
pub fn parse_generate_response(body: &str) -> UpstreamResult {
    let parsed: GenerateContentResponse = match serde_json::from_str(body) {
        Ok(parsed) => parsed,
        Err(e) => return UpstreamResult::Transport(format!("Failed to parse Gemini response: {e}")),
    };

    parsed
        .candidates
        .unwrap_or_default()
        .into_iter()
        .next()
        .and_then(|candidate| candidate.content)
        .and_then(|content| content.parts.unwrap_or_default().into_iter().next())
        .and_then(|part| part.text)
        .map_or(UpstreamResult::Malformed, UpstreamResult::Text)
}

// ============================================================================
// Gemini API Request/Response Types
// ============================================================================

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerateContentRequest<'a> {
    contents: Vec<RequestContent<'a>>,
    system_instruction: RequestContent<'a>,
}

impl<'a> GenerateContentRequest<'a> {
    fn from_payload(payload: &'a UpstreamPayload) -> Self {
        Self {
            contents: vec![RequestContent {
                parts: vec![RequestPart {
                    text: &payload.user_query,
                }],
            }],
            system_instruction: RequestContent {
                parts: vec![RequestPart {
                    text: &payload.system_instruction,
                }],
            },
        }
    }
}

#[derive(Debug, Serialize)]
struct RequestContent<'a> {
    parts: Vec<RequestPart<'a>>,
}

#[derive(Debug, Serialize)]
struct RequestPart<'a> {
    text: &'a str,
}

#[derive(Debug, Deserialize)]
struct GenerateContentResponse {
    #[serde(default)]
    candidates: Option<Vec<Candidate>>,
}

#[derive(Debug, Deserialize)]
struct Candidate {
    #[serde(default)]
    content: Option<CandidateContent>,
}

#[derive(Debug, Deserialize)]
struct CandidateContent {
    #[serde(default)]
    parts: Option<Vec<ResponsePart>>,
}

#[derive(Debug, Deserialize)]
struct ResponsePart {
    #[serde(default)]
    text: Option<String>,
}
