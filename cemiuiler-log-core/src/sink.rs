//! Log sink capability.

use std::sync::Arc;

/// The external channel that records one formatted line per call.
///
/// A sink is assumed infallible from the facade's point of view: whatever
/// goes wrong inside `emit` stays inside the sink. Sinks are shared across
/// every thread that logs, so they must be `Send + Sync`.
#[diagnostic::on_unimplemented(
    message = "`{Self}` is not a log sink",
    label = "missing `LogSink` implementation",
    note = "Wrap a closure with `cemiuiler_log_std::sinks::FnSink` to use it as a sink."
)]
pub trait LogSink: Send + Sync {
    /// Record a single, fully formatted line.
    fn emit(&self, line: &str);
}

/// A type-erased, shareable sink.
pub type DynSink = Arc<dyn LogSink>;

impl<T: LogSink + ?Sized> LogSink for &T {
    fn emit(&self, line: &str) {
        (**self).emit(line)
    }
}

impl<T: LogSink + ?Sized> LogSink for Box<T> {
    fn emit(&self, line: &str) {
        (**self).emit(line)
    }
}

impl<T: LogSink + ?Sized> LogSink for Arc<T> {
    fn emit(&self, line: &str) {
        (**self).emit(line)
    }
}
