use fusebox::{Call, CallCallback, CircuitBreaker, Response};
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;

/// Breaker double that records every report and can be flipped to deny
/// permission.
#[derive(Debug)]
pub struct RecordingBreaker {
    name: String,
    permit: AtomicBool,
    successes: Mutex<Vec<Duration>>,
    errors: Mutex<Vec<(Duration, String)>>,
}

impl RecordingBreaker {
    pub fn named(name: &str) -> Self {
        Self {
            name: name.to_string(),
            permit: AtomicBool::new(true),
            successes: Mutex::new(Vec::new()),
            errors: Mutex::new(Vec::new()),
        }
    }

    pub fn deny(&self) {
        self.permit.store(false, Ordering::SeqCst);
    }

    pub fn successes(&self) -> Vec<Duration> {
        self.successes.lock().unwrap().clone()
    }

    pub fn errors(&self) -> Vec<(Duration, String)> {
        self.errors.lock().unwrap().clone()
    }
}

impl CircuitBreaker for RecordingBreaker {
    fn is_call_permitted(&self) -> bool {
        self.permit.load(Ordering::SeqCst)
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn on_success(&self, elapsed: Duration) {
        self.successes.lock().unwrap().push(elapsed);
    }

    fn on_error(&self, elapsed: Duration, cause: &(dyn std::error::Error + 'static)) {
        self.errors.lock().unwrap().push((elapsed, cause.to_string()));
    }
}

/// What a [`MockCall`] does when executed.
#[derive(Clone, Copy)]
pub enum CallScript {
    Respond(u16, &'static str),
    Fail(&'static str),
}

/// Transport double: a one-shot call following a fixed script.
///
/// The execution counter is shared across clones so tests can count
/// delegations through re-decorated copies.
pub struct MockCall {
    script: CallScript,
    request: String,
    pub executions: Arc<AtomicUsize>,
    canceled: AtomicBool,
    executed: AtomicBool,
}

impl MockCall {
    pub fn responding(status: u16, message: &'static str) -> Self {
        Self::scripted(CallScript::Respond(status, message))
    }

    pub fn failing(message: &'static str) -> Self {
        Self::scripted(CallScript::Fail(message))
    }

    pub fn scripted(script: CallScript) -> Self {
        Self {
            script,
            request: "GET /orders".to_string(),
            executions: Arc::new(AtomicUsize::new(0)),
            canceled: AtomicBool::new(false),
            executed: AtomicBool::new(false),
        }
    }

    fn outcome(&self) -> Result<Response<&'static str>, std::io::Error> {
        match self.script {
            CallScript::Respond(status, message) => Ok(Response::new(status, message, "payload")),
            CallScript::Fail(message) => {
                Err(std::io::Error::new(std::io::ErrorKind::ConnectionReset, message))
            }
        }
    }
}

impl Call for MockCall {
    type Body = &'static str;
    type Error = std::io::Error;
    type Request = String;

    fn execute(&mut self) -> Result<Response<Self::Body>, Self::Error> {
        self.executions.fetch_add(1, Ordering::SeqCst);
        self.executed.store(true, Ordering::SeqCst);
        self.outcome()
    }

    fn enqueue(&mut self, callback: CallCallback<Self::Body, Self::Error>) {
        self.executed.store(true, Ordering::SeqCst);
        callback(self.outcome());
    }

    fn cancel(&self) {
        self.canceled.store(true, Ordering::SeqCst);
    }

    fn is_canceled(&self) -> bool {
        self.canceled.load(Ordering::SeqCst)
    }

    fn is_executed(&self) -> bool {
        self.executed.load(Ordering::SeqCst)
    }

    fn request(&self) -> &String {
        &self.request
    }

    fn clone_call(&self) -> Self {
        Self {
            script: self.script,
            request: self.request.clone(),
            executions: self.executions.clone(),
            canceled: AtomicBool::new(false),
            executed: AtomicBool::new(false),
        }
    }
}
