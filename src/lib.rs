#![forbid(unsafe_code)]
#![deny(warnings)]
#![cfg_attr(not(test), deny(clippy::all))]

//! # Fusebox 🔌
//!
//! Circuit-breaker instrumentation for outbound remote calls: transparent
//! call decoration plus bounded event history.
//!
//! ## Features
//!
//! - **Call decoration** wrapping any [`Call`] so each execution is gated by
//!   a breaker's permission check, timed, classified by a success predicate,
//!   and reported back, while cancellation, cloning, and async dispatch pass
//!   through untouched
//! - **Pluggable breakers**: any state machine implementing
//!   [`CircuitBreaker`] can gate calls; this crate never dictates thresholds
//! - **Bounded event history** via named [`CircularEventConsumer`] buffers,
//!   handed out idempotently by an [`EventConsumerRegistry`]
//! - **Deterministic timing** through an injectable [`Clock`]
//!
//! ## Quick Start
//!
//! ```rust
//! use fusebox::{BreakerEvent, BreakerState, EventConsumerRegistry};
//! use std::time::Duration;
//!
//! // One registry for the process; consumers rendezvous on the breaker name.
//! let registry: EventConsumerRegistry<BreakerEvent> = EventConsumerRegistry::new();
//! let consumer = registry.create_event_consumer("payments", 5);
//!
//! // The breaker emission path feeds the consumer as calls are observed.
//! consumer.consume_event(BreakerEvent::CallSucceeded {
//!     duration: Duration::from_millis(12),
//! });
//! consumer.consume_event(BreakerEvent::StateTransition {
//!     from: BreakerState::Closed,
//!     to: BreakerState::Open,
//! });
//!
//! let events = consumer.buffered_events();
//! assert_eq!(events.len(), 2);
//! ```
//!
//! Decorating a call is a single function; see [`decorate`] for a complete
//! example with a transport-specific [`Call`] implementation.

pub mod breaker;
pub mod call;
pub mod clock;
pub mod consumer;
pub mod decorator;
pub mod error;
pub mod event;
pub mod prelude;
pub mod registry;
pub mod stopwatch;

// Re-exports
pub use breaker::CircuitBreaker;
pub use call::{Call, CallCallback, Response};
pub use clock::{Clock, MonotonicClock};
pub use consumer::CircularEventConsumer;
pub use decorator::{decorate, DecoratedCall};
pub use error::{CallError, UnexpectedResponse};
pub use event::{BreakerEvent, BreakerState};
pub use registry::EventConsumerRegistry;
pub use stopwatch::StopWatch;
