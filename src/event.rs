//! Breaker lifecycle events observable through event consumers.
//!
//! The breaker component emits these as it gates and observes decorated
//! calls; registering a consumer under the breaker's name collects the most
//! recent ones for inspection.

use std::fmt;
use std::time::Duration;

/// The state a breaker can be in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum BreakerState {
    /// Normal operating mode.
    Closed,
    /// Short-circuits calls until the breaker decides to probe again.
    Open,
    /// Probe mode allowing a limited number of trial calls.
    HalfOpen,
}

impl fmt::Display for BreakerState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BreakerState::Closed => write!(f, "Closed"),
            BreakerState::Open => write!(f, "Open"),
            BreakerState::HalfOpen => write!(f, "HalfOpen"),
        }
    }
}

/// Events emitted by a breaker observing decorated calls.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum BreakerEvent {
    /// A permitted call completed and was classified successful.
    CallSucceeded {
        /// Measured processing duration of the attempt.
        duration: Duration,
    },
    /// A permitted call failed, or completed but was classified a failure.
    CallFailed {
        /// Measured processing duration of the attempt.
        duration: Duration,
    },
    /// The breaker denied permission before execution.
    CallRejected,
    /// The breaker moved between states.
    StateTransition {
        /// State before the transition.
        from: BreakerState,
        /// State after the transition.
        to: BreakerState,
    },
}

impl fmt::Display for BreakerEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BreakerEvent::CallSucceeded { duration } => {
                write!(f, "CallSucceeded(duration={:?})", duration)
            }
            BreakerEvent::CallFailed { duration } => {
                write!(f, "CallFailed(duration={:?})", duration)
            }
            BreakerEvent::CallRejected => write!(f, "CallRejected"),
            BreakerEvent::StateTransition { from, to } => {
                write!(f, "StateTransition({} → {})", from, to)
            }
        }
    }
}
