use std::error::Error;
use skill_tutor::TutorError;
use skill_tutor::core::models::ApiResponse;

#[test]
fn test_tutor_error_implements_error_trait() {
    fn assert_error<T: Error>(_: &T) {}

    let error = TutorError::InvalidBody("expected value".to_string());
    assert_error(&error);
}

#[test]
fn test_tutor_error_display() {
    assert_eq!(
        TutorError::MissingApiKey.to_string(),
        "API key is not configured on the server."
    );
    assert_eq!(
        TutorError::InvalidBody("expected value at line 1".to_string()).to_string(),
        "Invalid request body."
    );
    assert_eq!(TutorError::NoSkills.to_string(), "No skills provided.");
    assert_eq!(
        TutorError::UpstreamStatus {
            status: 403,
            message: "Permission denied".to_string()
        }
        .to_string(),
        "API Error: 403 Permission denied"
    );
    assert_eq!(
        TutorError::NoContent.to_string(),
        "Invalid response from AI. No content found."
    );
    assert_eq!(
        TutorError::HttpError("Gemini API request failed: timed out".to_string()).to_string(),
        "Gemini API request failed: timed out"
    );
}

#[test]
fn test_status_codes_follow_taxonomy() {
    assert_eq!(TutorError::MissingApiKey.status_code(), 500);
    assert_eq!(TutorError::InvalidBody(String::new()).status_code(), 400);
    assert_eq!(TutorError::NoSkills.status_code(), 400);
    assert_eq!(
        TutorError::UpstreamStatus {
            status: 400,
            message: String::new()
        }
        .status_code(),
        500
    );
    assert_eq!(TutorError::NoContent.status_code(), 500);
    assert_eq!(TutorError::HttpError(String::new()).status_code(), 500);
    assert_eq!(TutorError::Internal(String::new()).status_code(), 500);

    assert!(TutorError::NoSkills.is_client_error());
    assert!(!TutorError::NoContent.is_client_error());
}

#[test]
fn test_tutor_error_from_conversions() {
    let err = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
    let tutor_err: TutorError = err.into();
    assert!(matches!(tutor_err, TutorError::InvalidBody(_)));
}

#[tokio::test]
async fn test_reqwest_conversion_drops_the_url() {
    // Nothing listens on port 1
    let err = reqwest::Client::new()
        .post("http://127.0.0.1:1/v1beta/models/m:generateContent?key=very-secret")
        .send()
        .await
        .unwrap_err();

    let tutor_err = TutorError::from(err);
    assert!(matches!(tutor_err, TutorError::HttpError(_)));
    let message = tutor_err.to_string();
    assert!(!message.contains("very-secret"), "key leaked: {message}");
    assert!(!message.contains("127.0.0.1:1"), "url leaked: {message}");
}

#[test]
fn test_error_into_response() {
    let response = ApiResponse::from(TutorError::NoSkills);
    assert_eq!(response.status_code, 400);
    assert_eq!(response.error_message(), Some("No skills provided."));

    let json = serde_json::to_string(&response.body).unwrap();
    assert_eq!(json, r#"{"error":"No skills provided."}"#);
}
