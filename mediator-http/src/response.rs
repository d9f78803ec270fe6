//! Response value object and its HTTP translation.
//!
//! [`HandlerResponse`] carries the outcome of a domain handling step in a
//! framework-agnostic shape: an optional payload, an HTTP status, an error
//! message, and an ordered list of validation failures. Its
//! [`IntoResponse`] impl performs the fixed translation onto an axum
//! response; the handler base never inspects the fields itself.
//!
//! Construction is one-step and immutable. The success flag is computed from
//! the failure list, so the two can never disagree.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use serde_json::Value;

use crate::error::ResponseError;
use crate::validation::ValidationFailure;

/// Error message carried by [`HandlerResponse::not_found`].
pub const NOT_FOUND_MESSAGE: &str = "Status Code: 404; Not Found";

/// Outcome of a domain handling step, before HTTP translation.
///
/// Constructed fresh for every request by the domain step and discarded once
/// rendered. Payloads are erased to [`serde_json::Value`] at construction so
/// the response stays non-generic; the host serializes the value into the
/// body.
///
/// # Example
///
/// ```rust
/// use mediator_http::HandlerResponse;
///
/// let response = HandlerResponse::conflict("email already registered")?;
/// assert!(!response.succeeded());
/// assert_eq!(response.status().as_u16(), 409);
/// # Ok::<(), mediator_http::ResponseError>(())
/// ```
#[derive(Debug, Clone)]
pub struct HandlerResponse {
    payload: Option<Value>,
    status: StatusCode,
    error_message: String,
    failures: Vec<ValidationFailure>,
}

impl HandlerResponse {
    fn success(status: StatusCode, payload: Option<Value>) -> Self {
        Self {
            payload,
            status,
            error_message: String::new(),
            failures: Vec::new(),
        }
    }

    fn failed(status: StatusCode, message: String, failures: Vec<ValidationFailure>) -> Self {
        Self {
            payload: None,
            status,
            error_message: message,
            failures,
        }
    }

    fn erase_payload(payload: impl Serialize) -> Result<Value, ResponseError> {
        match serde_json::to_value(payload)? {
            Value::Null => Err(ResponseError::NullPayload),
            value => Ok(value),
        }
    }

    /// Respond successfully with a 200 (OK) response and payload.
    ///
    /// # Errors
    ///
    /// [`ResponseError::NullPayload`] if the payload serializes to JSON
    /// `null` (for example `Option::None` or `()`), or
    /// [`ResponseError::PayloadSerialization`] if serde rejects it.
    pub fn ok(payload: impl Serialize) -> Result<Self, ResponseError> {
        Ok(Self::success(
            StatusCode::OK,
            Some(Self::erase_payload(payload)?),
        ))
    }

    /// Respond successfully with a 201 (Created) response, no payload.
    #[must_use]
    pub fn created() -> Self {
        Self::success(StatusCode::CREATED, None)
    }

    /// Respond successfully with a 201 (Created) response and payload.
    ///
    /// The payload branch of the HTTP translation always renders 200, so the
    /// stored 201 reaches the wire only through [`status`](Self::status).
    ///
    /// # Errors
    ///
    /// Same as [`ok`](Self::ok).
    pub fn created_with(payload: impl Serialize) -> Result<Self, ResponseError> {
        Ok(Self::success(
            StatusCode::CREATED,
            Some(Self::erase_payload(payload)?),
        ))
    }

    /// Respond successfully with a 204 (No Content) response.
    #[must_use]
    pub fn no_content() -> Self {
        Self::success(StatusCode::NO_CONTENT, None)
    }

    /// Respond with a 404 (Not Found) failure.
    ///
    /// Records a request-level failure carrying [`NOT_FOUND_MESSAGE`] so the
    /// response reports `succeeded() == false`.
    #[must_use]
    pub fn not_found() -> Self {
        Self::failed(
            StatusCode::NOT_FOUND,
            NOT_FOUND_MESSAGE.to_string(),
            vec![ValidationFailure::of_request(NOT_FOUND_MESSAGE)],
        )
    }

    /// Respond with a 409 (Conflict) failure carrying the given message.
    ///
    /// # Errors
    ///
    /// [`ResponseError::EmptyErrorMessage`] when the message is empty or
    /// whitespace-only.
    pub fn conflict(message: impl Into<String>) -> Result<Self, ResponseError> {
        let message = message.into();
        if message.trim().is_empty() {
            return Err(ResponseError::EmptyErrorMessage);
        }
        let failure = ValidationFailure::of_request(message.clone());
        Ok(Self::failed(StatusCode::CONFLICT, message, vec![failure]))
    }

    /// Respond with a 422 (Unprocessable Entity) failure carrying
    /// field-level validation failures.
    ///
    /// The error message is the failures joined with `"; "`, in input order.
    ///
    /// # Errors
    ///
    /// [`ResponseError::NoFailures`] when the list is empty.
    pub fn validation_failed(failures: Vec<ValidationFailure>) -> Result<Self, ResponseError> {
        if failures.is_empty() {
            return Err(ResponseError::NoFailures);
        }
        let message = failures
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join("; ");
        Ok(Self::failed(
            StatusCode::UNPROCESSABLE_ENTITY,
            message,
            failures,
        ))
    }

    /// True when the failure list is empty.
    ///
    /// Computed, never stored: the flag cannot drift out of sync with
    /// [`failures`](Self::failures).
    #[must_use]
    pub fn succeeded(&self) -> bool {
        self.failures.is_empty()
    }

    /// HTTP status recorded for this response.
    #[must_use]
    pub fn status(&self) -> StatusCode {
        self.status
    }

    /// Success payload, if any.
    #[must_use]
    pub fn payload(&self) -> Option<&Value> {
        self.payload.as_ref()
    }

    /// Error message; empty on success.
    #[must_use]
    pub fn error_message(&self) -> &str {
        &self.error_message
    }

    /// Validation failures, in the order they were recorded.
    #[must_use]
    pub fn failures(&self) -> &[ValidationFailure] {
        &self.failures
    }
}

impl IntoResponse for HandlerResponse {
    fn into_response(self) -> Response {
        if !self.succeeded() {
            return (self.status, self.error_message).into_response();
        }
        if let Some(payload) = self.payload {
            return (StatusCode::OK, Json(payload)).into_response();
        }
        self.status.into_response()
    }
}
