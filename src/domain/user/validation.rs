//! User request schemas and validation

use once_cell::sync::Lazy;
use regex::Regex;
use serde_json::Value;
use thiserror::Error;

use crate::domain::payload::present_str;
use crate::domain::DomainError;

static EMAIL_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern compiles"));

/// Errors that can occur while reading a user request body
#[derive(Debug, Error, Clone, PartialEq)]
pub enum UserValidationError {
    #[error("Please provide all the required parameters.")]
    MissingRegistrationParameters,

    #[error("Please provide all required parameters.")]
    MissingParameters,

    #[error("Please provide a valid email.")]
    InvalidEmail,
}

/// Validate an email against the basic `local@domain.tld` shape
pub fn validate_email(email: &str) -> Result<(), UserValidationError> {
    if EMAIL_PATTERN.is_match(email) {
        Ok(())
    } else {
        Err(UserValidationError::InvalidEmail)
    }
}

/// Validated body of `POST /register`
#[derive(Debug, Clone, PartialEq)]
pub struct RegisterRequest {
    pub username: String,
    pub email: String,
    pub password: String,
}

impl RegisterRequest {
    pub fn from_payload(payload: &Value) -> Result<Self, UserValidationError> {
        let (Some(username), Some(email), Some(password)) = (
            present_str(payload, "username"),
            present_str(payload, "email"),
            present_str(payload, "password"),
        ) else {
            return Err(UserValidationError::MissingRegistrationParameters);
        };

        validate_email(email)?;

        Ok(Self {
            username: username.to_string(),
            email: email.to_string(),
            password: password.to_string(),
        })
    }
}

/// Validated body of `POST /login`
#[derive(Debug, Clone, PartialEq)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

impl LoginRequest {
    pub fn from_payload(payload: &Value) -> Result<Self, UserValidationError> {
        let (Some(email), Some(password)) =
            (present_str(payload, "email"), present_str(payload, "password"))
        else {
            return Err(UserValidationError::MissingParameters);
        };

        Ok(Self {
            email: email.to_string(),
            password: password.to_string(),
        })
    }
}

/// Validated body of `PUT /user/{id}`; a full replacement, not a patch
#[derive(Debug, Clone, PartialEq)]
pub struct UpdateUserRequest {
    pub username: String,
    pub email: String,
    pub password: String,
}

impl UpdateUserRequest {
    pub fn from_payload(payload: &Value) -> Result<Self, UserValidationError> {
        let (Some(username), Some(email), Some(password)) = (
            present_str(payload, "username"),
            present_str(payload, "email"),
            present_str(payload, "password"),
        ) else {
            return Err(UserValidationError::MissingParameters);
        };

        validate_email(email)?;

        Ok(Self {
            username: username.to_string(),
            email: email.to_string(),
            password: password.to_string(),
        })
    }
}

impl From<UserValidationError> for DomainError {
    fn from(err: UserValidationError) -> Self {
        DomainError::validation(err.to_string())
    }
}
