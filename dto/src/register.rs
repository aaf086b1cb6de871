use serde::{Deserialize, Serialize};
use std::fmt;

/// Shown when the service rejected the registration without saying why.
pub const GENERIC_FAILURE: &str = "Registration failed";
/// Shown when no response was received at all.
pub const UNREACHABLE_FAILURE: &str = "Registration failed. Please try again.";

#[derive(Clone, Serialize, Deserialize, PartialEq)]
pub struct RegisterRequest {
    pub username: String,
    pub password: String,
}

impl fmt::Debug for RegisterRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RegisterRequest")
            .field("username", &self.username)
            .field("password", &"REDACTED")
            .finish()
    }
}

/// Error body the registration service may send on a rejected request.
/// `detail` is optional; the service is free to send nothing at all.
#[derive(Debug, Default, Clone, Serialize, Deserialize, PartialEq)]
pub struct RegisterError {
    #[serde(default)]
    pub detail: Option<String>,
}

/// Settled result of one registration attempt.
///
/// `Rejected` means the service answered with a failure status (its body, if
/// parseable, supplies `detail`). `Unreachable` means the request never got a
/// response.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RegisterOutcome {
    Success,
    Rejected { detail: Option<String> },
    Unreachable,
}

impl RegisterOutcome {
    /// User-facing message for this outcome, `None` on success.
    ///
    /// A `detail` from the service is passed through verbatim; everything
    /// else falls back to one of the fixed literals.
    pub fn error_message(&self) -> Option<String> {
        match self {
            Self::Success => None,
            Self::Rejected {
                detail: Some(detail),
            } => Some(detail.clone()),
            Self::Rejected { detail: None } => Some(GENERIC_FAILURE.to_string()),
            Self::Unreachable => Some(UNREACHABLE_FAILURE.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn success_has_no_message() {
        assert_eq!(RegisterOutcome::Success.error_message(), None);
    }

    #[test]
    fn detail_passes_through_verbatim() {
        let outcome = RegisterOutcome::Rejected {
            detail: Some("username taken".to_string()),
        };
        assert_eq!(outcome.error_message().as_deref(), Some("username taken"));
    }

    #[test]
    fn rejection_without_detail_uses_generic_message() {
        let outcome = RegisterOutcome::Rejected { detail: None };
        assert_eq!(
            outcome.error_message().as_deref(),
            Some("Registration failed")
        );
    }

    #[test]
    fn unreachable_asks_for_retry() {
        assert_eq!(
            RegisterOutcome::Unreachable.error_message().as_deref(),
            Some("Registration failed. Please try again.")
        );
    }

    #[test]
    fn error_body_with_detail_parses() {
        let error: RegisterError = serde_json::from_str(r#"{"detail": "Email already registered"}"#)
            .expect("valid error body");
        assert_eq!(error.detail.as_deref(), Some("Email already registered"));
    }

    #[test]
    fn empty_error_body_parses_without_detail() {
        let error: RegisterError = serde_json::from_str("{}").expect("empty object");
        assert_eq!(error.detail, None);
    }

    #[test]
    fn unrelated_fields_are_ignored() {
        let error: RegisterError =
            serde_json::from_str(r#"{"status": 400, "code": "dup"}"#).expect("unknown fields");
        assert_eq!(error.detail, None);
    }

    #[test]
    fn malformed_body_is_an_error() {
        assert!(serde_json::from_str::<RegisterError>("not json").is_err());
    }

    #[test]
    fn request_serializes_both_fields() {
        let request = RegisterRequest {
            username: "alice".to_string(),
            password: "secret1".to_string(),
        };
        let body = serde_json::to_value(&request).expect("serializable");
        assert_eq!(body["username"], "alice");
        assert_eq!(body["password"], "secret1");
    }

    #[test]
    fn debug_redacts_password() {
        let request = RegisterRequest {
            username: "alice".to_string(),
            password: "secret1".to_string(),
        };
        let debug = format!("{request:?}");
        assert!(debug.contains("REDACTED"));
        assert!(!debug.contains("secret1"));
    }
}
