//! Skill Tutor - a serverless endpoint that turns a student's missed skills into
//! short mini-lessons.
//!
//! Each invocation takes `{ "skills": [...] }`, asks the Gemini
//! generative-language API for a lesson per skill using a fixed teaching
//! prompt, and returns the model's text converted to a small HTML fragment
//! (`h3`, `p`, `ul`, `li`) as `{ "html": ... }`, or `{ "error": ... }` on failure.
//!
//! # Architecture
//!
//! The system uses:
//! - AWS Lambda for serverless execution
//! - reqwest for the single outbound Gemini call
//! - A line classifier and block renderer for the text-to-HTML step
//! - Tokio for async runtime
//!
//! # Example
//!
//! ```no_run
//! use skill_tutor::ai::GeminiClient;
//! use skill_tutor::api::handle_request;
//! use skill_tutor::core::config::AppConfig;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     skill_tutor::setup_logging();
//!
//!     let config = AppConfig::default().with_api_key("dummy_gemini_key");
//!     let client = GeminiClient::new(&config)?;
//!
//!     let response = handle_request(&config, &client, Some(r#"{"skills":["Fractions"]}"#)).await;
//!     match response.html() {
//!         Some(html) => println!("Lesson: {}", html),
//!         None => println!("Error: {:?}", response.error_message()),
//!     }
//!
//!     Ok(())
//! }
//! ```

// Module declarations
pub mod ai;
pub mod api;
pub mod core;
pub mod errors;
pub mod formatter;

pub use errors::TutorError;
pub use formatter::format_lesson_html;

/// Configure structured logging with JSON format for AWS Lambda environments.
///
/// This function sets up tracing-subscriber with a JSON formatter suitable for
/// `CloudWatch` Logs integration. Calling it more than once is harmless; only
/// the first call installs the subscriber.
///
/// # Example
///
/// ```
/// // Initialize structured logging at the start of your Lambda handler
/// skill_tutor::setup_logging();
/// ```
pub fn setup_logging() {
    use tracing_subscriber::prelude::*;
    let fmt_layer = tracing_subscriber::fmt::layer().json().with_target(true);

    let _ = tracing_subscriber::registry().with(fmt_layer).try_init();
}
