//! Consumed circuit breaker interface.
//!
//! The breaker itself lives outside this crate; the decorator only needs to
//! ask for permission and report how each permitted attempt went. Any state
//! machine satisfying this trait can gate decorated calls.

use std::error::Error;
use std::time::Duration;

/// The breaker surface consumed by the call decorator.
///
/// Shared, externally managed, long-lived: the decorator holds the breaker
/// behind an `Arc` and never mutates its lifecycle, it only invokes the
/// permission and report operations.
pub trait CircuitBreaker: Send + Sync {
    /// Whether the breaker currently permits an execution attempt.
    fn is_call_permitted(&self) -> bool;

    /// The breaker's name, used as the timer and event-consumer correlation
    /// key.
    fn name(&self) -> &str;

    /// Record a successful attempt and how long it took.
    fn on_success(&self, elapsed: Duration);

    /// Record a failed attempt, how long it took, and what went wrong.
    fn on_error(&self, elapsed: Duration, cause: &(dyn Error + 'static));
}
