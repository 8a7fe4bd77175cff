//! Response builders for the Lambda proxy integration.

use serde_json::{Value, json};

use crate::core::config::AppConfig;
use crate::core::models::ApiResponse;

const SERIALIZATION_FALLBACK: &str = r#"{"error":"Internal server error"}"#;

fn cors_headers(config: &AppConfig) -> Value {
    json!({
        "Content-Type": "application/json",
        "Access-Control-Allow-Origin": config.cors_allow_origin,
    })
}

/// Wraps an [`ApiResponse`] as a proxy result with a JSON string body.
#[must_use]
pub fn json_response(config: &AppConfig, response: &ApiResponse) -> Value {
    let body = serde_json::to_string(&response.body)
        .unwrap_or_else(|_| SERIALIZATION_FALLBACK.to_string());

    json!({
        "statusCode": response.status_code,
        "headers": cors_headers(config),
        "body": body
    })
}

/// Returns an error response with the given status code and message.
#[must_use]
pub fn err_response(config: &AppConfig, status_code: u16, message: &str) -> Value {
    json_response(config, &ApiResponse::error(status_code, message))
}

/// Returns a 204 answer to a CORS preflight request.
#[must_use]
pub fn preflight(config: &AppConfig) -> Value {
    json!({
        "statusCode": 204,
        "headers": {
            "Access-Control-Allow-Origin": config.cors_allow_origin,
            "Access-Control-Allow-Methods": "POST, OPTIONS",
            "Access-Control-Allow-Headers": "Content-Type",
        },
        "body": ""
    })
}
