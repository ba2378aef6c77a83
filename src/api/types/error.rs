//! API error type and its JSON rendering

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::{Map, Value};
use tracing::error;

use crate::domain::product::ProductValidationError;
use crate::domain::user::UserValidationError;
use crate::domain::DomainError;

/// Key under which the message is returned
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageKey {
    /// `{"error": "..."}`
    Error,
    /// `{"msg": "..."}`
    Msg,
}

impl MessageKey {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Error => "error",
            Self::Msg => "msg",
        }
    }
}

/// API error with status code
#[derive(Debug)]
pub struct ApiError {
    pub status: StatusCode,
    pub key: MessageKey,
    pub message: String,
}

impl ApiError {
    /// Create a new API error
    pub fn new(status: StatusCode, message: impl Into<String>) -> Self {
        Self {
            status,
            key: MessageKey::Error,
            message: message.into(),
        }
    }

    /// Report the message under `msg` instead of `error`
    pub fn with_msg_key(mut self) -> Self {
        self.key = MessageKey::Msg;
        self
    }

    /// Bad request error
    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::new(StatusCode::BAD_REQUEST, message)
    }

    /// Not found error
    pub fn not_found(message: impl Into<String>) -> Self {
        Self::new(StatusCode::NOT_FOUND, message)
    }

    /// Internal server error
    pub fn internal(message: impl Into<String>) -> Self {
        Self::new(StatusCode::INTERNAL_SERVER_ERROR, message)
    }

    /// The JSON body this error renders to
    pub fn body(&self) -> Value {
        let mut body = Map::new();
        body.insert(self.key.as_str().to_string(), Value::String(self.message.clone()));
        Value::Object(body)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (self.status, Json(self.body())).into_response()
    }
}

impl From<DomainError> for ApiError {
    fn from(err: DomainError) -> Self {
        match &err {
            DomainError::NotFound { message } => Self::not_found(message),
            DomainError::Validation { message } => Self::bad_request(message),
            DomainError::Conflict { message } => Self::bad_request(message),
            DomainError::Storage { message } | DomainError::Internal { message } => {
                error!(error = %err, "Request failed");
                Self::internal(message)
            }
        }
    }
}

impl From<UserValidationError> for ApiError {
    fn from(err: UserValidationError) -> Self {
        Self::bad_request(err.to_string())
    }
}

impl From<ProductValidationError> for ApiError {
    fn from(err: ProductValidationError) -> Self {
        Self::bad_request(err.to_string())
    }
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.status, self.message)
    }
}

impl std::error::Error for ApiError {}
