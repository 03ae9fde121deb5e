use serde::{Deserialize, Serialize};

pub mod messages;

/// Body of every non-2xx response.
#[derive(Debug, PartialEq, Deserialize, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

impl ErrorResponse {
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
        }
    }
}
