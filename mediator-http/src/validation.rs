//! Field-level validation failure records.

use std::fmt;

use serde::{Deserialize, Serialize};

/// A single validation problem recorded on a response.
///
/// Distinct from the free-form error message on
/// [`HandlerResponse`](crate::HandlerResponse): a failure is structured
/// (field + message), and the derived success flag of a response is computed
/// from the failure list alone.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationFailure {
    /// Field the failure refers to; `None` for request-level failures that
    /// are not tied to a single field.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub field: Option<String>,
    /// Human-readable description of the problem.
    pub message: String,
}

impl ValidationFailure {
    /// Create a failure tied to a named field.
    ///
    /// # Example
    ///
    /// ```rust
    /// use mediator_http::ValidationFailure;
    ///
    /// let failure = ValidationFailure::new("email", "Invalid email format");
    /// assert_eq!(failure.field.as_deref(), Some("email"));
    /// ```
    pub fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: Some(field.into()),
            message: message.into(),
        }
    }

    /// Create a request-level failure not tied to any field.
    pub fn of_request(message: impl Into<String>) -> Self {
        Self {
            field: None,
            message: message.into(),
        }
    }
}

impl fmt::Display for ValidationFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.field {
            Some(field) => write!(f, "{}: {}", field, self.message),
            None => write!(f, "{}", self.message),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_with_field() {
        let failure = ValidationFailure::new("email", "Email is required");
        assert_eq!(format!("{}", failure), "email: Email is required");
    }

    #[test]
    fn test_display_without_field() {
        let failure = ValidationFailure::of_request("Request body missing");
        assert_eq!(format!("{}", failure), "Request body missing");
    }

    #[test]
    fn test_serialization_skips_absent_field() {
        let failure = ValidationFailure::of_request("bad request");
        let json = serde_json::to_string(&failure).unwrap();
        assert_eq!(json, r#"{"message":"bad request"}"#);
    }

    #[test]
    fn test_serialization_includes_field() {
        let failure = ValidationFailure::new("name", "required");
        let json = serde_json::to_string(&failure).unwrap();
        assert_eq!(json, r#"{"field":"name","message":"required"}"#);
    }

    #[test]
    fn test_round_trip() {
        let failure = ValidationFailure::new("age", "must be positive");
        let json = serde_json::to_string(&failure).unwrap();
        let parsed: ValidationFailure = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, failure);
    }
}
