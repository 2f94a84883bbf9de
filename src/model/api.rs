use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Body returned for every non-2xx response.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ErrorDto {
    /// HTTP status code repeated in the body
    pub code: u16,
    pub message: String,
}

impl ErrorDto {
    pub fn new(code: u16, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
        }
    }
}
