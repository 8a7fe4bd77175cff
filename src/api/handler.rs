//! Lesson request handler.
//!
//! Runs the request through a fixed sequence of gates (API key, body, skills,
//! upstream call, formatting). Every gate returns early on failure and every
//! failure, including a panic, ends up as a JSON error response.

use futures::FutureExt;
use std::any::Any;
use std::panic::AssertUnwindSafe;
use tracing::{error, info, warn};

use crate::ai::client::LessonGenerator;
use crate::ai::prompt_builder::build_payload;
use crate::core::config::AppConfig;
use crate::core::models::{ApiResponse, LessonRequest};
use crate::errors::TutorError;
use crate::formatter::format_lesson_html;

const PANIC_FALLBACK_MESSAGE: &str = "Internal server error";

/// Handles one lesson request and always produces a response.
#[tracing::instrument(level = "info", skip_all)]
pub async fn handle_request(
    config: &AppConfig,
    generator: &dyn LessonGenerator,
    raw_body: Option<&str>,
) -> ApiResponse {
    let outcome = AssertUnwindSafe(generate_lesson(config, generator, raw_body))
        .catch_unwind()
        .await;

    let response = match outcome {
        Ok(Ok(html)) => ApiResponse::lesson(html),
        Ok(Err(e)) => {
            if e.is_client_error() {
                warn!(error = ?e, "Rejected lesson request");
            } else {
                error!(error = ?e, "Lesson request failed: {}", e);
            }
            ApiResponse::from(e)
        }
        Err(panic) => {
            let message = panic_message(panic.as_ref());
            error!("Lesson request panicked: {}", message);
            ApiResponse::error(500, message)
        }
    };

    info!(status = response.status_code, "Lesson request finished");
    response
}

async fn generate_lesson(
    config: &AppConfig,
    generator: &dyn LessonGenerator,
    raw_body: Option<&str>,
) -> Result<String, TutorError> {
    let Some(api_key) = config.api_key() else {
        return Err(TutorError::MissingApiKey);
    };

    let request = parse_request(raw_body)?;
    if request.skills.is_empty() {
        return Err(TutorError::NoSkills);
    }

    info!(skill_count = request.skills.len(), "Generating lesson");

    let payload = build_payload(&request.skills);
    let text = generator.generate(api_key, &payload).await.into_text()?;

    Ok(format_lesson_html(&text))
}

/// Parses the inbound body. A missing `skills` field yields an empty list.
///
/// # Errors
///
/// Returns [`TutorError::InvalidBody`] when the body is absent or is not a
/// JSON object whose `skills` is a list of strings.
pub fn parse_request(raw_body: Option<&str>) -> Result<LessonRequest, TutorError> {
    let body = raw_body.ok_or_else(|| TutorError::InvalidBody("missing body".to_string()))?;
    Ok(serde_json::from_str(body)?)
}

fn panic_message(panic: &(dyn Any + Send)) -> String {
    if let Some(s) = panic.downcast_ref::<&str>() {
        (*s).to_string()
    } else if let Some(s) = panic.downcast_ref::<String>() {
        s.clone()
    } else {
        PANIC_FALLBACK_MESSAGE.to_string()
    }
}
