//! Convenient re-exports for common Fusebox types.
pub use crate::{
    breaker::CircuitBreaker,
    call::{Call, CallCallback, Response},
    clock::{Clock, MonotonicClock},
    consumer::CircularEventConsumer,
    decorator::{decorate, DecoratedCall},
    error::{CallError, UnexpectedResponse},
    event::{BreakerEvent, BreakerState},
    registry::EventConsumerRegistry,
    stopwatch::StopWatch,
};
