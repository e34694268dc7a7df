//! Transparent circuit-breaker decoration of remote calls.
//!
//! [`decorate`] wraps any [`Call`] so that each synchronous execution is
//! gated by a breaker's permission check, timed, classified by a
//! caller-supplied success predicate, and reported back to the breaker. Every
//! other capability of the wrapped call (asynchronous dispatch, cancellation,
//! introspection, cloning) passes through unchanged.

use crate::breaker::CircuitBreaker;
use crate::call::{Call, CallCallback, Response};
use crate::clock::{Clock, MonotonicClock};
use crate::error::{CallError, UnexpectedResponse};
use crate::stopwatch::StopWatch;
use std::sync::Arc;

/// Decorate `call` so every synchronous execution consults `breaker`.
///
/// `success` classifies a completed response for reporting purposes only:
/// responses it rejects are reported to the breaker as errors but still
/// returned to the caller unchanged. Decoration itself has no side effects;
/// everything happens at execution time.
///
/// # Example
///
/// ```rust
/// use fusebox::{decorate, Call, CallCallback, CircuitBreaker, Response};
/// use std::sync::Arc;
/// use std::time::Duration;
///
/// struct PingCall {
///     request: &'static str,
/// }
///
/// impl Call for PingCall {
///     type Body = &'static str;
///     type Error = std::io::Error;
///     type Request = &'static str;
///
///     fn execute(&mut self) -> Result<Response<Self::Body>, Self::Error> {
///         Ok(Response::ok("pong"))
///     }
///
///     fn enqueue(&mut self, callback: CallCallback<Self::Body, Self::Error>) {
///         callback(Ok(Response::ok("pong")));
///     }
///
///     fn cancel(&self) {}
///
///     fn is_canceled(&self) -> bool {
///         false
///     }
///
///     fn is_executed(&self) -> bool {
///         false
///     }
///
///     fn request(&self) -> &Self::Request {
///         &self.request
///     }
///
///     fn clone_call(&self) -> Self {
///         PingCall { request: self.request }
///     }
/// }
///
/// #[derive(Debug)]
/// struct AlwaysClosed;
///
/// impl CircuitBreaker for AlwaysClosed {
///     fn is_call_permitted(&self) -> bool {
///         true
///     }
///
///     fn name(&self) -> &str {
///         "ping"
///     }
///
///     fn on_success(&self, _elapsed: Duration) {}
///
///     fn on_error(&self, _elapsed: Duration, _cause: &(dyn std::error::Error + 'static)) {}
/// }
///
/// let call = PingCall { request: "GET /ping" };
/// let mut decorated = decorate(Arc::new(AlwaysClosed), call, Response::is_success);
/// let response = decorated.execute().unwrap();
/// assert_eq!(*response.body(), "pong");
/// ```
pub fn decorate<C, B, P>(breaker: Arc<B>, call: C, success: P) -> DecoratedCall<C, B, P>
where
    C: Call,
    B: CircuitBreaker + ?Sized,
    P: Fn(&Response<C::Body>) -> bool + Send + Sync,
{
    DecoratedCall {
        inner: call,
        breaker,
        success: Arc::new(success),
        clock: Arc::new(MonotonicClock::default()),
    }
}

/// A [`Call`] whose synchronous execution path is instrumented by a breaker.
///
/// Produced by [`decorate`]. Clones of the underlying call made through
/// [`Call::clone_call`] are re-decorated with the same shared breaker,
/// predicate, and clock, yielding an independent instrumented call.
pub struct DecoratedCall<C, B: ?Sized, P> {
    inner: C,
    breaker: Arc<B>,
    success: Arc<P>,
    clock: Arc<dyn Clock>,
}

impl<C, B, P> DecoratedCall<C, B, P>
where
    C: Call,
    B: CircuitBreaker + ?Sized,
    P: Fn(&Response<C::Body>) -> bool + Send + Sync,
{
    /// Override the clock used to time attempts (useful for deterministic
    /// tests).
    pub fn with_clock<K: Clock + 'static>(mut self, clock: K) -> Self {
        self.clock = Arc::new(clock);
        self
    }

    /// Borrow the wrapped, undecorated call.
    pub fn inner(&self) -> &C {
        &self.inner
    }
}

impl<C, B, P> Call for DecoratedCall<C, B, P>
where
    C: Call,
    C::Body: 'static,
    B: CircuitBreaker + ?Sized,
    P: Fn(&Response<C::Body>) -> bool + Send + Sync,
{
    type Body = C::Body;
    type Error = CallError<C::Error>;
    type Request = C::Request;

    /// Execute under breaker instrumentation.
    ///
    /// Exactly one outcome report reaches the breaker per permitted attempt;
    /// a rejected attempt never touches the wrapped call and reports nothing.
    fn execute(&mut self) -> Result<Response<Self::Body>, Self::Error> {
        if !self.breaker.is_call_permitted() {
            let breaker = self.breaker.name().to_string();
            tracing::debug!(breaker = %breaker, "call rejected, breaker does not permit execution");
            return Err(CallError::NotPermitted { breaker });
        }

        let watch = StopWatch::start(self.breaker.name(), self.clock.clone());
        match self.inner.execute() {
            Ok(response) => {
                if (*self.success)(&response) {
                    self.breaker.on_success(watch.stop());
                } else {
                    let cause = UnexpectedResponse {
                        status: response.status(),
                        message: response.message().to_string(),
                    };
                    tracing::debug!(
                        breaker = self.breaker.name(),
                        status = cause.status,
                        "response classified as failure"
                    );
                    self.breaker.on_error(watch.stop(), &cause);
                }
                Ok(response)
            }
            Err(cause) => {
                self.breaker.on_error(watch.stop(), &cause);
                Err(CallError::Inner(cause))
            }
        }
    }

    /// Asynchronous dispatch is not instrumented; only the callback's error
    /// side is adapted so the decorated call presents one error type.
    fn enqueue(&mut self, callback: CallCallback<Self::Body, Self::Error>) {
        self.inner.enqueue(Box::new(move |result| callback(result.map_err(CallError::Inner))));
    }

    fn cancel(&self) {
        self.inner.cancel();
    }

    fn is_canceled(&self) -> bool {
        self.inner.is_canceled()
    }

    fn is_executed(&self) -> bool {
        self.inner.is_executed()
    }

    fn request(&self) -> &Self::Request {
        self.inner.request()
    }

    fn clone_call(&self) -> Self {
        Self {
            inner: self.inner.clone_call(),
            breaker: self.breaker.clone(),
            success: self.success.clone(),
            clock: self.clock.clone(),
        }
    }
}
