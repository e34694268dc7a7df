//! The remote-call abstraction that this crate decorates.
//!
//! A [`Call`] models a single outbound invocation: it can be executed on the
//! calling thread, dispatched asynchronously with a completion callback,
//! cancelled, queried, and cloned into a fresh unexecuted copy. The decorator
//! in [`crate::decorator`] wraps any `Call` implementation and overrides only
//! the synchronous execution path.

/// Completion callback for an asynchronously dispatched call.
///
/// Invoked exactly once, with either the completed response or the transport
/// error that ended the attempt.
pub type CallCallback<T, E> = Box<dyn FnOnce(Result<Response<T>, E>) + Send>;

/// Outcome of a completed remote call: a status line plus the decoded body.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Response<T> {
    status: u16,
    message: String,
    body: T,
}

impl<T> Response<T> {
    /// Create a response with an explicit status code and status message.
    pub fn new(status: u16, message: impl Into<String>, body: T) -> Self {
        Self { status, message: message.into(), body }
    }

    /// Create a `200 OK` response.
    pub fn ok(body: T) -> Self {
        Self::new(200, "OK", body)
    }

    /// The status code reported by the transport.
    pub fn status(&self) -> u16 {
        self.status
    }

    /// The status message reported by the transport.
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Borrow the decoded body.
    pub fn body(&self) -> &T {
        &self.body
    }

    /// Consume the response, yielding the decoded body.
    pub fn into_body(self) -> T {
        self.body
    }

    /// Whether the status code is in the 2xx range.
    ///
    /// The usual success predicate handed to
    /// [`decorate`](crate::decorator::decorate).
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// A single outbound remote invocation.
///
/// Implementations are transport-specific; the trait fixes the capability set
/// the decorator must preserve. `execute` blocks the calling thread until the
/// attempt completes. `enqueue` hands the attempt to the transport's own
/// asynchronous machinery and returns immediately.
pub trait Call {
    /// Decoded response body type.
    type Body;
    /// Transport error type.
    type Error: std::error::Error + Send + Sync + 'static;
    /// The underlying request description, exposed for introspection.
    type Request;

    /// Execute the call on the current thread, blocking until it completes.
    fn execute(&mut self) -> Result<Response<Self::Body>, Self::Error>;

    /// Dispatch the call asynchronously; `callback` fires exactly once on
    /// completion.
    fn enqueue(&mut self, callback: CallCallback<Self::Body, Self::Error>);

    /// Cancel the call, if the transport supports it.
    fn cancel(&self);

    /// Whether the call has been cancelled.
    fn is_canceled(&self) -> bool;

    /// Whether the call has been executed or enqueued.
    fn is_executed(&self) -> bool;

    /// The request this call will perform.
    fn request(&self) -> &Self::Request;

    /// Produce an independent, unexecuted copy of this call.
    ///
    /// A call is one-shot; cloning is how callers re-issue a request that has
    /// already been executed or cancelled.
    fn clone_call(&self) -> Self
    where
        Self: Sized;
}
