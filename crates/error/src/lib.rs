//! # fpkit-error
//!
//! Shared error types for the fpkit crates.
//!
//! Most of fpkit reports failure as data (`Maybe::Empty`, `Outcome::Err`).
//! The types here cover the remaining cases:
//!
//! - [`FpError`]: a library function rejected its *arguments* or
//!   configuration (for example `chunk(source, 0)`).
//! - [`CapturedPanic`]: the payload of a panic caught at the single
//!   panic-to-value boundary (`Outcome::capture`, `try_catch`).
//! - [`ConfigError`]: a configuration struct failed `validate()`.
//!
//! ```rust
//! use fpkit_error::{FpError, FpResult};
//!
//! fn positive(name: &'static str, n: usize) -> FpResult<usize> {
//!     if n == 0 {
//!         return Err(FpError::invalid_argument(name, "must be greater than 0"));
//!     }
//!     Ok(n)
//! }
//!
//! assert!(positive("size", 0).is_err());
//! ```

use std::any::Any;
use std::borrow::Cow;

/// Result alias for fallible fpkit library calls.
pub type FpResult<T> = std::result::Result<T, FpError>;

// ============================================================================
// FP ERROR
// ============================================================================

/// Errors raised by fpkit itself, never by user data.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[non_exhaustive]
pub enum FpError {
    /// An argument was outside the range the operation accepts.
    #[error("invalid argument `{name}`: {reason}")]
    InvalidArgument {
        /// Parameter name as it appears in the signature.
        name: &'static str,
        /// What was wrong with it.
        reason: Cow<'static, str>,
    },

    /// A configuration struct failed validation.
    #[error(transparent)]
    Config(#[from] ConfigError),
}

impl FpError {
    /// Creates an [`FpError::InvalidArgument`].
    pub fn invalid_argument(name: &'static str, reason: impl Into<Cow<'static, str>>) -> Self {
        Self::InvalidArgument {
            name,
            reason: reason.into(),
        }
    }

    /// Returns `true` for [`FpError::InvalidArgument`].
    pub fn is_invalid_argument(&self) -> bool {
        matches!(self, Self::InvalidArgument { .. })
    }
}

// ============================================================================
// CONFIG ERROR
// ============================================================================

/// Configuration validation failure.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[non_exhaustive]
pub enum ConfigError {
    /// A field held a value the component cannot run with.
    #[error("invalid configuration: {0}")]
    Validation(String),
}

impl ConfigError {
    /// Creates a [`ConfigError::Validation`].
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation(message.into())
    }
}

// ============================================================================
// CAPTURED PANIC
// ============================================================================

/// A panic converted into a value.
///
/// Panic payloads are `Box<dyn Any + Send>`; the usual `&'static str` and
/// `String` payloads keep their message, anything else is reported as an
/// opaque payload.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[error("captured panic: {message}")]
pub struct CapturedPanic {
    message: String,
}

impl CapturedPanic {
    const OPAQUE: &'static str = "<non-string panic payload>";

    /// Creates a captured panic from a plain message.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    /// Extracts the message from a payload returned by `catch_unwind`.
    pub fn from_payload(payload: Box<dyn Any + Send>) -> Self {
        let message = match payload.downcast::<String>() {
            Ok(s) => *s,
            Err(payload) => match payload.downcast::<&'static str>() {
                Ok(s) => (*s).to_owned(),
                Err(_) => Self::OPAQUE.to_owned(),
            },
        };
        Self { message }
    }

    /// The panic message.
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Returns `true` if the payload was neither `String` nor `&str`.
    pub fn is_opaque(&self) -> bool {
        self.message == Self::OPAQUE
    }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    #[test]
    fn invalid_argument_display() {
        let err = FpError::invalid_argument("size", "must be greater than 0");
        assert!(err.is_invalid_argument());
        assert_eq!(
            err.to_string(),
            "invalid argument `size`: must be greater than 0"
        );
    }

    #[test]
    fn config_error_converts() {
        let err: FpError = ConfigError::validation("limit is zero").into();
        assert!(!err.is_invalid_argument());
        assert_eq!(err.to_string(), "invalid configuration: limit is zero");
    }

    #[rstest]
    #[case(Box::new("static str"), "static str", false)]
    #[case(Box::new(String::from("owned")), "owned", false)]
    #[case(Box::new(42_u32), CapturedPanic::OPAQUE, true)]
    fn payload_messages(
        #[case] payload: Box<dyn Any + Send>,
        #[case] expected: &str,
        #[case] opaque: bool,
    ) {
        let captured = CapturedPanic::from_payload(payload);
        assert_eq!(captured.message(), expected);
        assert_eq!(captured.is_opaque(), opaque);
    }

    #[test]
    fn captured_panic_from_catch_unwind() {
        let payload = std::panic::catch_unwind(|| panic!("boom {}", 7)).unwrap_err();
        let captured = CapturedPanic::from_payload(payload);
        assert_eq!(captured.to_string(), "captured panic: boom 7");
    }

    #[cfg(feature = "serde")]
    #[test]
    fn captured_panic_serde_roundtrip() {
        let captured = CapturedPanic::new("boom");
        let json = serde_json::to_string(&captured).unwrap();
        assert_eq!(json, r#"{"message":"boom"}"#);
        let back: CapturedPanic = serde_json::from_str(&json).unwrap();
        assert_eq!(back, captured);
    }
}
