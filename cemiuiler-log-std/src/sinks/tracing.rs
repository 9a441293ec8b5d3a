//! Sink forwarding lines to `tracing`.

use cemiuiler_log_core::LogSink;

/// A sink that records each line as a `tracing` info event.
///
/// The host bridge logs every line at info priority regardless of the
/// bracketed severity, so this sink does the same. Events use the
/// `cemiuiler` target so they can be filtered as a group.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingSink;

impl TracingSink {
    /// Create a new `TracingSink`.
    pub const fn new() -> Self {
        Self
    }
}

impl LogSink for TracingSink {
    fn emit(&self, line: &str) {
        tracing::info!(target: "cemiuiler", "{line}");
    }
}
