//! Argument errors raised by response constructors.

use thiserror::Error;

/// Rejected arguments to a [`HandlerResponse`](crate::HandlerResponse)
/// constructor.
///
/// These signal programmer error: they are raised immediately, are not
/// recoverable, and are meant to surface in development and tests rather
/// than in production traffic.
#[derive(Debug, Error)]
pub enum ResponseError {
    /// A success payload serialized to JSON `null`.
    #[error("response payload must not serialize to null")]
    NullPayload,

    /// An error message was empty or whitespace-only.
    #[error("error message must not be empty or whitespace-only")]
    EmptyErrorMessage,

    /// A validation-failure response was constructed with no failures.
    #[error("validation failure list must not be empty")]
    NoFailures,

    /// The payload could not be serialized to JSON.
    #[error("failed to serialize response payload: {0}")]
    PayloadSerialization(#[from] serde_json::Error),
}
