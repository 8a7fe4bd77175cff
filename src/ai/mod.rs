//! All generative-language API functionality

pub mod client;
pub mod prompt_builder;

// Re-export main types for convenience
pub use client::{GeminiClient, LessonGenerator, UpstreamResult};
pub use prompt_builder::{UpstreamPayload, build_payload, build_user_query};
