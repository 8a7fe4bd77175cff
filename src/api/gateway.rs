//! API Gateway / function URL adapter around [`handle_request`].

use lambda_runtime::{Error, LambdaEvent};
use serde_json::Value;
use tracing::{Instrument, info, info_span};
use uuid::Uuid;

use super::handler::handle_request;
use super::{helpers, parsing};
use crate::ai::client::LessonGenerator;
use crate::core::config::AppConfig;

pub use self::function_handler as handler;

/// Lambda handler for the lesson endpoint.
///
/// # Errors
///
/// Never fails in practice; every outcome, including faults, is returned as a
/// proxy response so the runtime does not report an invocation error.
pub async fn function_handler(
    config: &AppConfig,
    generator: &dyn LessonGenerator,
    event: LambdaEvent<Value>,
) -> Result<Value, Error> {
    let correlation_id = Uuid::new_v4().to_string();
    let span = info_span!(
        "lesson_invocation",
        correlation_id = %correlation_id,
        aws_request_id = %event.context.request_id
    );

    Ok(handle_event(config, generator, &event.payload)
        .instrument(span)
        .await)
}

/// Routes one proxy event and builds the proxy response.
pub async fn handle_event(
    config: &AppConfig,
    generator: &dyn LessonGenerator,
    payload: &Value,
) -> Value {
    let method = parsing::request_method(payload);
    info!(method = %method, "Lesson API received request");

    if method.eq_ignore_ascii_case("OPTIONS") {
        return helpers::preflight(config);
    }

    if !method.eq_ignore_ascii_case("POST") {
        return helpers::err_response(config, 405, "Method Not Allowed");
    }

    let body = parsing::extract_body(payload);
    let response = handle_request(config, generator, body.as_deref()).await;

    helpers::json_response(config, &response)
}
