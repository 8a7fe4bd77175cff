use base64::{Engine as _, engine::general_purpose};
use serde_json::Value;
use tracing::warn;

/// Method assumed when the event carries none (direct invocation).
pub const DEFAULT_METHOD: &str = "POST";

pub fn v_path<'a>(root: &'a Value, path: &[&str]) -> Option<&'a Value> {
    let mut cur = root;
    for key in path {
        cur = cur.get(*key)?;
    }
    Some(cur)
}

pub fn v_str<'a>(root: &'a Value, path: &[&str]) -> Option<&'a str> {
    v_path(root, path).and_then(|v| v.as_str())
}

/// HTTP method from a REST API (v1) or HTTP API / function URL (v2) event.
pub fn request_method(payload: &Value) -> &str {
    v_str(payload, &["httpMethod"])
        .or_else(|| v_str(payload, &["requestContext", "http", "method"]))
        .unwrap_or(DEFAULT_METHOD)
}

/// Request body as text, base64-decoded when the gateway flagged it.
pub fn extract_body(payload: &Value) -> Option<String> {
    let body = v_str(payload, &["body"])?;

    let encoded = payload
        .get("isBase64Encoded")
        .and_then(Value::as_bool)
        .unwrap_or(false);
    if !encoded {
        return Some(body.to_string());
    }

    let bytes = match general_purpose::STANDARD.decode(body) {
        Ok(bytes) => bytes,
        Err(e) => {
            warn!("Failed to decode base64 body: {}", e);
            return None;
        }
    };

    match String::from_utf8(bytes) {
        Ok(text) => Some(text),
        Err(e) => {
            warn!("Decoded body is not UTF-8: {}", e);
            None
        }
    }
}
