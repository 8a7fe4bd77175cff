//! Lesson API Lambda handler and request processing

pub mod gateway;
pub mod handler;
pub mod helpers;
pub mod parsing;

// Re-export the main handlers for convenience
pub use gateway::handler;
pub use handler::handle_request;
