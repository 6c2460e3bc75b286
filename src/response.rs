use serde::Serialize;
use utoipa::ToSchema;

pub const SUCCESS: &str = "success";
pub const ERROR: &str = "error";

/// Success envelope. The payload's own keys (`providerInfo`, `booking`, ...)
/// sit next to `message` rather than under a `data` key.
#[derive(Debug, Serialize, ToSchema)]
pub struct ApiResponse<T> {
    pub message: String,
    #[serde(flatten)]
    pub data: T,
}

impl<T: Serialize> ApiResponse<T> {
    pub fn success(data: T) -> Self {
        Self {
            message: SUCCESS.to_string(),
            data,
        }
    }
}

impl ApiResponse<Empty> {
    pub fn message_only() -> Self {
        Self::success(Empty {})
    }
}

/// Payload for operations that answer with the bare message.
#[derive(Debug, Serialize, ToSchema)]
pub struct Empty {}

#[derive(Debug, Serialize, ToSchema)]
pub struct ErrorResponse {
    pub message: String,
    pub error: String,
}

impl ErrorResponse {
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            message: ERROR.to_string(),
            error: error.into(),
        }
    }
}
