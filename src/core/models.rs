use serde::{Deserialize, Deserializer, Serialize};

/// Inbound request body: the skills a student struggled with.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LessonRequest {
    /// Absent and `null` both mean no skills.
    #[serde(default, deserialize_with = "null_as_empty")]
    pub skills: Vec<String>,
}

fn null_as_empty<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<Vec<String>>::deserialize(deserializer)?.unwrap_or_default())
}

/// JSON body returned to the caller.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ResponseBody {
    Lesson { html: String },
    Error { error: String },
}

/// Status code plus body, independent of how the runtime serializes it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiResponse {
    pub status_code: u16,
    pub body: ResponseBody,
}

impl ApiResponse {
    #[must_use]
    pub fn lesson(html: String) -> Self {
        Self {
            status_code: 200,
            body: ResponseBody::Lesson { html },
        }
    }

    #[must_use]
    pub fn error(status_code: u16, message: impl Into<String>) -> Self {
        Self {
            status_code,
            body: ResponseBody::Error {
                error: message.into(),
            },
        }
    }

    /// The `error` message, when this is a failure response.
    #[must_use]
    pub fn error_message(&self) -> Option<&str> {
        match &self.body {
            ResponseBody::Error { error } => Some(error),
            ResponseBody::Lesson { .. } => None,
        }
    }

    #[must_use]
    pub fn html(&self) -> Option<&str> {
        match &self.body {
            ResponseBody::Lesson { html } => Some(html),
            ResponseBody::Error { .. } => None,
        }
    }
}

impl From<crate::errors::TutorError> for ApiResponse {
    fn from(error: crate::errors::TutorError) -> Self {
        ApiResponse::error(error.status_code(), error.to_string())
    }
}
