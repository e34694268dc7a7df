//! Elapsed-time measurement for instrumented call attempts.

use crate::clock::Clock;
use std::sync::Arc;
use std::time::Duration;

/// Measures the processing duration of one call attempt.
///
/// A watch is started when the breaker permits an attempt and stopped exactly
/// once, at completion, whichever way the attempt ends. The name is the
/// owning breaker's name and correlates the measurement with that breaker's
/// event stream.
#[derive(Debug)]
pub struct StopWatch {
    name: String,
    started_at: Duration,
    clock: Arc<dyn Clock>,
}

impl StopWatch {
    /// Start a watch keyed by `name` on the given clock.
    pub fn start(name: impl Into<String>, clock: Arc<dyn Clock>) -> Self {
        let started_at = clock.now();
        Self { name: name.into(), started_at, clock }
    }

    /// The correlation key this watch was started with.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Stop the watch and return the elapsed duration.
    ///
    /// Consumes the watch; one watch measures one attempt. Saturates to zero
    /// if the clock is non-monotonic.
    pub fn stop(self) -> Duration {
        let elapsed = self.clock.now().saturating_sub(self.started_at);
        tracing::trace!(name = %self.name, ?elapsed, "stopwatch stopped");
        elapsed
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicU64, Ordering};

    #[derive(Debug, Default)]
    struct ManualClock {
        now_millis: AtomicU64,
    }

    impl ManualClock {
        fn advance(&self, millis: u64) {
            self.now_millis.fetch_add(millis, Ordering::SeqCst);
        }
    }

    impl Clock for ManualClock {
        fn now(&self) -> Duration {
            Duration::from_millis(self.now_millis.load(Ordering::SeqCst))
        }
    }

    #[test]
    fn measures_elapsed_time_between_start_and_stop() {
        let clock = Arc::new(ManualClock::default());
        let watch = StopWatch::start("payments", clock.clone());
        clock.advance(250);
        assert_eq!(watch.stop(), Duration::from_millis(250));
    }

    #[test]
    fn keeps_the_correlation_name() {
        let clock = Arc::new(ManualClock::default());
        let watch = StopWatch::start("inventory", clock);
        assert_eq!(watch.name(), "inventory");
    }

    #[test]
    fn saturates_on_clock_regression() {
        #[derive(Debug)]
        struct BackwardsClock {
            readings: std::sync::Mutex<Vec<u64>>,
        }

        impl Clock for BackwardsClock {
            fn now(&self) -> Duration {
                let mut readings = self.readings.lock().unwrap();
                Duration::from_millis(readings.pop().unwrap_or(0))
            }
        }

        let clock = Arc::new(BackwardsClock { readings: std::sync::Mutex::new(vec![10, 100]) });
        let watch = StopWatch::start("svc", clock);
        assert_eq!(watch.stop(), Duration::ZERO);
    }
}
