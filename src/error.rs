use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Default model '{0}' is not in the model table")]
    UnknownDefaultModel(String),

    #[error("Invalid value for {key}: {value}")]
    InvalidValue { key: &'static str, value: String },

    #[error("Minimum summary length {min} exceeds maximum text length {max}")]
    InvalidLimits { min: usize, max: usize },
}

/// Input text rejected before any outbound call
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Text cannot be empty")]
    Empty,

    #[error("Text must be at least {0} characters long")]
    TooShort(usize),

    #[error("Text cannot exceed {0} characters")]
    TooLong(usize),
}

/// Failure of the outbound call to the inference API
#[derive(Debug, Error)]
pub enum InferenceError {
    #[error("Request timed out")]
    Timeout,

    #[error("Connection failed: {0}")]
    Connection(String),

    #[error("Failed to decode response: {0}")]
    Decode(String),

    #[error("Unexpected error: {0}")]
    Unexpected(String),
}

impl From<reqwest::Error> for InferenceError {
    fn from(error: reqwest::Error) -> Self {
        if error.is_timeout() {
            InferenceError::Timeout
        } else if error.is_connect() || error.is_request() {
            InferenceError::Connection(error.to_string())
        } else if error.is_decode() || error.is_body() {
            InferenceError::Decode(error.to_string())
        } else {
            InferenceError::Unexpected(error.to_string())
        }
    }
}

/// Errors returned to the HTTP client as `{success: false, error}`
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("No data provided")]
    NoData,

    #[error("Invalid request body: {0}")]
    InvalidBody(String),

    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error("Endpoint not found")]
    NotFound,

    #[error("Internal server error")]
    Internal,
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::NoData | ApiError::InvalidBody(_) | ApiError::Validation(_) => {
                StatusCode::BAD_REQUEST
            }
            ApiError::NotFound => StatusCode::NOT_FOUND,
            ApiError::Internal => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (
            self.status(),
            Json(json!({
                "success": false,
                "error": self.to_string()
            })),
        )
            .into_response()
    }
}
