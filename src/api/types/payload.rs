//! Request body extractor accepting JSON or urlencoded forms

use std::collections::HashMap;

use axum::{
    body::Bytes,
    extract::{rejection::JsonRejection, FromRequest, Request},
    http::header::CONTENT_TYPE,
    Form, Json as AxumJson,
};
use serde_json::{Map, Value};

use super::error::ApiError;

/// Loosely-typed request body, validated afterwards by a request schema
///
/// - `application/json` bodies are parsed as-is; syntax errors are a 400 and
///   an empty body is an empty object.
/// - `application/x-www-form-urlencoded` bodies become an object of strings.
/// - Any other (or missing) content type yields an empty object, so the
///   schema reports the missing fields.
#[derive(Debug, Clone, PartialEq)]
pub struct Payload(pub Value);

impl Payload {
    /// Consume the extractor and return the inner value
    pub fn into_inner(self) -> Value {
        self.0
    }
}

impl std::ops::Deref for Payload {
    type Target = Value;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum BodyKind {
    Json,
    Form,
    Other,
}

fn body_kind(request: &Request) -> BodyKind {
    let Some(content_type) = request
        .headers()
        .get(CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
    else {
        return BodyKind::Other;
    };

    let mime = content_type
        .split(';')
        .next()
        .unwrap_or_default()
        .trim()
        .to_ascii_lowercase();

    if mime == "application/json" || mime.ends_with("+json") {
        BodyKind::Json
    } else if mime == "application/x-www-form-urlencoded" {
        BodyKind::Form
    } else {
        BodyKind::Other
    }
}

impl<S> FromRequest<S> for Payload
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        match body_kind(&req) {
            BodyKind::Json => {
                let bytes = Bytes::from_request(req, state).await.map_err(|rejection| {
                    ApiError::new(
                        rejection.status(),
                        format!("Failed to read request body: {}", rejection.body_text()),
                    )
                })?;

                if bytes.iter().all(u8::is_ascii_whitespace) {
                    return Ok(Payload(Value::Object(Map::new())));
                }

                match AxumJson::<Value>::from_bytes(&bytes) {
                    Ok(AxumJson(value)) => Ok(Payload(value)),
                    Err(rejection) => Err(ApiError::new(
                        rejection.status(),
                        format_rejection_message(&rejection),
                    )),
                }
            }
            BodyKind::Form => {
                let Form(fields) = Form::<HashMap<String, String>>::from_request(req, state)
                    .await
                    .map_err(|rejection| {
                        ApiError::new(
                            rejection.status(),
                            format!("Invalid form data: {}", rejection.body_text()),
                        )
                    })?;

                let object: Map<String, Value> = fields
                    .into_iter()
                    .map(|(name, value)| (name, Value::String(value)))
                    .collect();

                Ok(Payload(Value::Object(object)))
            }
            BodyKind::Other => Ok(Payload(Value::Object(Map::new()))),
        }
    }
}

/// Format the rejection message to be more user-friendly
fn format_rejection_message(rejection: &JsonRejection) -> String {
    match rejection {
        JsonRejection::JsonDataError(err) => format!("Invalid JSON data: {}", err.body_text()),
        JsonRejection::JsonSyntaxError(err) => {
            format!("Invalid JSON syntax: {}", err.body_text())
        }
        JsonRejection::BytesRejection(err) => {
            format!("Failed to read request body: {}", err.body_text())
        }
        _ => "Invalid JSON request".to_string(),
    }
}
