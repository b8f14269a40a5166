//! Wall-clock timing of solver work
//!
//! A [`Stopwatch`] runs an operation, measures how long it took and reports the measurement to
//! an injected [`TimingSink`]. Nothing is written anywhere unless a sink is supplied.

use std::future::Future;
use std::time::{Duration, Instant};

/// A value together with the time it took to produce it
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Timed<T> {
    pub value: T,
    pub elapsed: Duration,
}

impl<T> Timed<T> {
    /// Elapsed time in whole milliseconds (truncated)
    pub fn elapsed_ms(&self) -> u128 {
        self.elapsed.as_millis()
    }

    /// Transform the value while keeping the measurement
    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> Timed<U> {
        Timed {
            value: f(self.value),
            elapsed: self.elapsed,
        }
    }
}

/// Receiver of completed timing measurements
pub trait TimingSink {
    fn record(&self, action: &str, elapsed: Duration);
}

impl<S: TimingSink + ?Sized> TimingSink for &S {
    fn record(&self, action: &str, elapsed: Duration) {
        (**self).record(action, elapsed)
    }
}

/// Writes `[<action>] completed in <N>ms` lines to standard output
#[derive(Debug, Default, Clone, Copy)]
pub struct ConsoleSink;

impl TimingSink for ConsoleSink {
    fn record(&self, action: &str, elapsed: Duration) {
        tracing::debug!(action, ?elapsed, "timed");
        println!("{}", format_timing(action, elapsed));
    }
}

/// Format a measurement the way [`ConsoleSink`] prints it
pub fn format_timing(action: &str, elapsed: Duration) -> String {
    format!("[{}] completed in {}ms", action, elapsed.as_millis())
}

/// Times operations and reports each measurement to its sink
///
/// # Example
///
/// ```
/// use aoc_solver::{Stopwatch, TimingSink};
/// use std::cell::RefCell;
/// use std::time::Duration;
///
/// #[derive(Default)]
/// struct Collect(RefCell<Vec<String>>);
///
/// impl TimingSink for Collect {
///     fn record(&self, action: &str, _elapsed: Duration) {
///         self.0.borrow_mut().push(action.to_string());
///     }
/// }
///
/// let sink = Collect::default();
/// let stopwatch = Stopwatch::new(&sink);
/// let timed = stopwatch.time("Add", || 2 + 2);
/// assert_eq!(timed.value, 4);
/// assert_eq!(sink.0.borrow().as_slice(), ["Add"]);
/// ```
pub struct Stopwatch<S> {
    sink: S,
}

impl<S: TimingSink> Stopwatch<S> {
    pub fn new(sink: S) -> Self {
        Self { sink }
    }

    /// Run `op`, log its duration and return the value with the measurement
    pub fn time<T>(&self, action: &str, op: impl FnOnce() -> T) -> Timed<T> {
        let start = Instant::now();
        let value = op();
        let elapsed = start.elapsed();
        self.sink.record(action, elapsed);
        Timed { value, elapsed }
    }

    /// Run a fallible `op`.
    ///
    /// On success behaves like [`Stopwatch::time`]. On failure nothing is logged and the error
    /// is returned unchanged.
    pub fn try_time<T, E>(
        &self,
        action: &str,
        op: impl FnOnce() -> Result<T, E>,
    ) -> Result<Timed<T>, E> {
        let start = Instant::now();
        let value = op()?;
        let elapsed = start.elapsed();
        self.sink.record(action, elapsed);
        Ok(Timed { value, elapsed })
    }

    /// Await `future`, log its duration and return its output with the measurement.
    ///
    /// The clock covers every suspension of the future, so the measurement includes whatever
    /// time the executor spends elsewhere while it is pending.
    pub async fn time_async<F: Future>(&self, action: &str, future: F) -> Timed<F::Output> {
        let start = Instant::now();
        let value = future.await;
        let elapsed = start.elapsed();
        self.sink.record(action, elapsed);
        Timed { value, elapsed }
    }

    /// Run `op` for its side effects, only logging the duration
    pub fn run(&self, action: &str, op: impl FnOnce()) {
        self.time(action, op);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_truncates_to_whole_milliseconds() {
        assert_eq!(
            format_timing("Solve", Duration::from_micros(2_999)),
            "[Solve] completed in 2ms"
        );
        assert_eq!(
            format_timing("Read input file", Duration::ZERO),
            "[Read input file] completed in 0ms"
        );
    }

    #[test]
    fn test_map_keeps_elapsed() {
        let timed = Timed {
            value: 21,
            elapsed: Duration::from_millis(7),
        };
        let doubled = timed.map(|v| v * 2);
        assert_eq!(doubled.value, 42);
        assert_eq!(doubled.elapsed_ms(), 7);
    }
}
