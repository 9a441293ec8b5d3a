//! Closure-backed sink.

use cemiuiler_log_core::LogSink;

/// A sink that hands every line to a closure.
///
/// This is the usual way to plug in a host primitive such as the hooking
/// framework's own `log(String)` call.
///
/// # Example
///
/// ```rust,ignore
/// let sink = sink_fn(|line| host_bridge::log(line));
/// let logger = Logger::builder().sink(sink).build()?;
/// ```
#[derive(Clone)]
pub struct FnSink<F>(F);

impl<F> FnSink<F>
where
    F: Fn(&str) + Send + Sync,
{
    /// Wrap a closure.
    pub const fn new(f: F) -> Self {
        Self(f)
    }
}

/// Shorthand for [`FnSink::new`].
pub const fn sink_fn<F>(f: F) -> FnSink<F>
where
    F: Fn(&str) + Send + Sync,
{
    FnSink::new(f)
}

impl<F> LogSink for FnSink<F>
where
    F: Fn(&str) + Send + Sync,
{
    fn emit(&self, line: &str) {
        (self.0)(line)
    }
}
