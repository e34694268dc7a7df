//! Error types for decorated calls.
use std::fmt;

/// Error surfaced by a decorated call.
///
/// A decorated call fails exactly the ways the undecorated call fails
/// (`Inner`), plus one new way: the breaker refused permission before the
/// wrapped call was ever invoked (`NotPermitted`).
#[derive(Debug, Clone)]
pub enum CallError<E> {
    /// The breaker denied permission; the wrapped call was not invoked and
    /// no outcome was reported.
    NotPermitted {
        /// Name of the breaker that rejected the call.
        breaker: String,
    },
    /// The underlying call failed; the cause was reported to the breaker and
    /// re-surfaced unchanged.
    Inner(E),
}

impl<E: fmt::Display> fmt::Display for CallError<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NotPermitted { breaker } => {
                write!(f, "call not permitted: circuit breaker '{}' is open", breaker)
            }
            Self::Inner(e) => write!(f, "{}", e),
        }
    }
}

impl<E: std::error::Error + 'static> std::error::Error for CallError<E> {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Inner(e) => Some(e),
            Self::NotPermitted { .. } => None,
        }
    }
}

impl<E> CallError<E> {
    /// Check if this error is a breaker rejection.
    pub fn is_not_permitted(&self) -> bool {
        matches!(self, Self::NotPermitted { .. })
    }

    /// Check if this error wraps an underlying call failure.
    pub fn is_inner(&self) -> bool {
        matches!(self, Self::Inner(_))
    }

    /// Borrow the underlying call failure if present.
    pub fn as_inner(&self) -> Option<&E> {
        match self {
            Self::Inner(e) => Some(e),
            _ => None,
        }
    }

    /// Get the underlying call failure if this is an `Inner` variant.
    pub fn into_inner(self) -> Option<E> {
        match self {
            Self::Inner(e) => Some(e),
            _ => None,
        }
    }

    /// Name of the rejecting breaker, for `NotPermitted` errors.
    pub fn breaker_name(&self) -> Option<&str> {
        match self {
            Self::NotPermitted { breaker } => Some(breaker),
            _ => None,
        }
    }
}

/// Cause reported to the breaker when the success predicate classifies a
/// completed response as a failure.
///
/// Synthesized inside the decorator and never returned to the caller; the
/// caller still receives the original response.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unexpected response: status {status} - {message}")]
pub struct UnexpectedResponse {
    /// Status code of the offending response.
    pub status: u16,
    /// Status message of the offending response.
    pub message: String,
}
