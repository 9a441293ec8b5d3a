//! Testing utilities for the logging facade.
//!
//! This module provides stand-ins for the host so loggers can be exercised
//! without a hooking framework.
//!
//! # Features
//!
//! - [`RecordingSink`]: A sink that records every line it receives
//! - [`FixedConfig`]: A config source answering from a fixed key list

use cemiuiler_log_core::{ConfigSource, DISABLE_DETAILED_LOG_KEY, LogSink};
use std::sync::{Arc, Mutex, PoisonError};

// ============================================================================
// Recording Sink
// ============================================================================

/// A sink that records all lines it receives.
///
/// Clones share the same buffer, so one clone can go into a logger while the
/// test keeps another to inspect.
///
/// # Example
///
/// ```rust,ignore
/// let sink = RecordingSink::new();
/// let logger = Logger::new(sink.clone(), LogPolicy::new(true, false));
///
/// logger.info(Some("Tag"), "Hi");
///
/// assert_eq!(sink.lines(), vec!["[Cemiuiler][I][Tag]: Hi"]);
/// ```
#[derive(Clone, Default)]
pub struct RecordingSink {
    lines: Arc<Mutex<Vec<String>>>,
}

impl RecordingSink {
    /// Create a new, empty recording sink.
    pub fn new() -> Self {
        Self::default()
    }

    /// Get a copy of the recorded lines.
    pub fn lines(&self) -> Vec<String> {
        self.lines
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// The most recent line, if any.
    pub fn last(&self) -> Option<String> {
        self.lines
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .last()
            .cloned()
    }

    /// Get the number of recorded lines.
    pub fn count(&self) -> usize {
        self.lines.lock().unwrap_or_else(PoisonError::into_inner).len()
    }

    /// Whether nothing has been recorded.
    pub fn is_empty(&self) -> bool {
        self.count() == 0
    }

    /// Clear all recorded lines.
    pub fn clear(&self) {
        self.lines
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clear();
    }
}

impl LogSink for RecordingSink {
    fn emit(&self, line: &str) {
        self.lines
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(line.to_owned());
    }
}

// ============================================================================
// Fixed Config
// ============================================================================

/// A config source that answers `true` for a fixed set of keys.
///
/// Every other key reads as `false`.
#[derive(Clone, Debug, Default)]
pub struct FixedConfig {
    enabled: Vec<String>,
}

impl FixedConfig {
    /// A source where every key is `false`.
    pub fn new() -> Self {
        Self::default()
    }

    /// Mark `key` as `true`.
    pub fn enable(mut self, key: impl Into<String>) -> Self {
        self.enabled.push(key.into());
        self
    }

    /// A source with detailed logs disabled by the user.
    pub fn detailed_logs_disabled() -> Self {
        Self::new().enable(DISABLE_DETAILED_LOG_KEY)
    }
}

impl ConfigSource for FixedConfig {
    fn get_bool(&self, key: &str) -> bool {
        self.enabled.iter().any(|k| k == key)
    }
}
