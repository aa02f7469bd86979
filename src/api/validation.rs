//! Request validation shared by every controller.
//!
//! [`ValidatedJson`] replaces `axum::Json` for request bodies: it rejects
//! empty bodies, maps deserialization failures to [`ApiError::ValidationError`]
//! and then runs the DTO's own [`Validate`] rules. [`ValidId`] does the same
//! for `:id` path segments.

use axum::{
    body::Bytes,
    extract::{FromRequest, FromRequestParts, Path, Request, rejection::BytesRejection},
    http::{StatusCode, request::Parts},
};
use serde::de::DeserializeOwned;
use std::fmt;

use super::ApiError;

const VALIDATION_PREFIX: &str = "Validation failed";

/// A single rule violation on a request body field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldError {
    pub field: &'static str,
    pub message: String,
}

impl FieldError {
    pub fn new(field: &'static str, message: impl Into<String>) -> Self {
        Self {
            field,
            message: message.into(),
        }
    }
}

impl fmt::Display for FieldError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.field, self.message)
    }
}

/// Field-level rules for a request DTO.
pub trait Validate {
    /// Returns every violated rule; an empty vector means the value is valid.
    fn validate(&self) -> Vec<FieldError>;
}

/// Pushes an error when `value` is empty or whitespace.
pub fn require_non_blank(errors: &mut Vec<FieldError>, field: &'static str, value: &str) {
    if value.trim().is_empty() {
        errors.push(FieldError::new(field, "should not be empty"));
    }
}

/// Same as [`require_non_blank`] but only when the field was supplied.
pub fn optional_non_blank(errors: &mut Vec<FieldError>, field: &'static str, value: Option<&str>) {
    if let Some(value) = value {
        require_non_blank(errors, field, value);
    }
}

fn failed(detail: impl fmt::Display) -> ApiError {
    ApiError::validation(format!("{VALIDATION_PREFIX}: {detail}"))
}

/// Parses and validates a raw JSON body.
pub fn parse_body<T>(body: &[u8]) -> Result<T, ApiError>
where
    T: DeserializeOwned + Validate,
{
    if body.iter().all(u8::is_ascii_whitespace) {
        return Err(failed("No body submitted"));
    }

    let value: serde_json::Value = serde_json::from_slice(body).map_err(failed)?;

    if value.as_object().is_some_and(serde_json::Map::is_empty) {
        return Err(failed("No body submitted"));
    }

    let dto: T = serde_json::from_value(value).map_err(failed)?;

    let errors = dto.validate();
    if !errors.is_empty() {
        let detail = errors
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join(", ");
        return Err(failed(detail));
    }

    Ok(dto)
}

/// JSON body extractor that runs [`Validate`] before the handler sees it.
#[derive(Debug, Clone)]
pub struct ValidatedJson<T>(pub T);

impl<S, T> FromRequest<S> for ValidatedJson<T>
where
    S: Send + Sync,
    T: DeserializeOwned + Validate,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let body = Bytes::from_request(req, state)
            .await
            .map_err(buffer_failed)?;
        parse_body(&body).map(Self)
    }
}

/// Body read failures are transport problems, not validation ones.
fn buffer_failed(rejection: BytesRejection) -> ApiError {
    if rejection.status() == StatusCode::PAYLOAD_TOO_LARGE {
        ApiError::PayloadTooLarge(rejection.body_text())
    } else {
        ApiError::BadRequest(rejection.body_text())
    }
}

/// `:id` path segment, checked to be a UUID and normalized to lowercase
/// hyphenated form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidId(pub String);

impl<S> FromRequestParts<S> for ValidId
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(id): Path<String> = Path::from_request_parts(parts, state)
            .await
            .map_err(|_| failed("id is required"))?;

        validate_id(&id).map(Self)
    }
}

pub fn validate_id(id: &str) -> Result<String, ApiError> {
    uuid::Uuid::parse_str(id.trim())
        .map(|uuid| uuid.to_string())
        .map_err(|_| failed(format!("Invalid id: {id}. Expected a UUID")))
}
