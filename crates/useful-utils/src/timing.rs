//! Timing helpers for performance monitoring and logging.

use std::time::{Duration, Instant};

use crate::help::{FunctionCategory, FunctionDescriptor};

/// Registry entry describing [`log_time`].
pub(crate) fn log_time_descriptor() -> FunctionDescriptor {
    FunctionDescriptor::new(
        "log_time",
        "timing",
        FunctionCategory::Timing,
        "Time a block of code and log the elapsed time",
    )
    .with_signature("(label: impl Into<String>) -> TimeGuard")
    .with_docs(
        "Returns a scope guard that logs \"<label> completed in <seconds> \
         seconds\" at INFO severity when dropped, including on the unwind \
         path.",
    )
    .with_location(file!(), line!())
}

/// Registry entry describing [`time_it`].
pub(crate) fn time_it_descriptor() -> FunctionDescriptor {
    FunctionDescriptor::new(
        "time_it",
        "timing",
        FunctionCategory::Timing,
        "Wrap a closure call in a timed scope",
    )
    .with_signature("(label: impl Into<String>, f: impl FnOnce() -> T) -> T")
    .with_docs(
        "Runs the closure inside a log_time scope and forwards its return \
         value unchanged.",
    )
    .with_location(file!(), line!())
}

/// Scope guard that logs elapsed wall-clock time when dropped.
///
/// Created by [`log_time`]. The completion line is emitted exactly once
/// per guard, on drop, so it fires on the unwind path too.
#[derive(Debug)]
pub struct TimeGuard {
    label: String,
    start: Instant,
}

impl TimeGuard {
    /// Wall-clock time elapsed since the guard was created.
    pub fn elapsed(&self) -> Duration {
        self.start.elapsed()
    }
}

impl Drop for TimeGuard {
    fn drop(&mut self) {
        let secs = self.start.elapsed().as_secs_f64();
        tracing::info!("{} completed in {:.2} seconds", self.label, secs);
    }
}

/// Time a block of code, logging the elapsed time at INFO when the
/// returned guard goes out of scope.
///
/// ```
/// use useful_utils::log_time;
///
/// let _timer = log_time("Loading data");
/// // ... work ...
/// // "Loading data completed in 0.00 seconds" logged here
/// ```
pub fn log_time(label: impl Into<String>) -> TimeGuard {
    TimeGuard {
        label: label.into(),
        start: Instant::now(),
    }
}

/// Run `f` inside a [`log_time`] scope, forwarding its return value.
///
/// ```
/// use useful_utils::time_it;
///
/// let answer = time_it("Heavy computation", || 42);
/// assert_eq!(answer, 42);
/// ```
pub fn time_it<T>(label: impl Into<String>, f: impl FnOnce() -> T) -> T {
    let _timer = log_time(label);
    f()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn elapsed_is_monotonic() {
        let timer = log_time("test block");
        let first = timer.elapsed();
        let second = timer.elapsed();
        assert!(second >= first);
    }

    #[test]
    fn time_it_forwards_return_value() {
        let value = time_it("forwarding", || "Function completed");
        assert_eq!(value, "Function completed");
    }

    #[test]
    fn guard_logs_on_unwind() {
        // Drop must run while the panic propagates; the log side effect is
        // not observable here, but a double-panic or a skipped Drop would
        // abort the test process.
        let result = std::panic::catch_unwind(|| {
            let _timer = log_time("failing block");
            panic!("boom");
        });
        assert!(result.is_err());
    }

    #[test]
    fn nested_guards_drop_in_reverse_order() {
        let outer = log_time("outer");
        {
            let inner = log_time("inner");
            assert!(inner.elapsed() <= outer.elapsed());
        }
        assert!(outer.elapsed() >= Duration::ZERO);
    }
}
