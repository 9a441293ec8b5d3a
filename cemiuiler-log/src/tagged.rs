//! A logger view bound to one tag.

use crate::logger::Logger;
use cemiuiler_log_core::{Failure, Level, LogSink};
use std::fmt;

/// A [`Logger`] with the tag filled in.
///
/// Each hook logs under its own name; holding one of these saves repeating
/// the tag at every call site.
///
/// # Example
///
/// ```rust,ignore
/// let log = logger.tagged("IconScaleHook");
/// log.info("scaled to 1.2");
/// log.error(Some("resolve"), Failure::error(&err));
/// ```
pub struct TaggedLogger<'a, S> {
    logger: &'a Logger<S>,
    tag: &'a str,
}

impl<'a, S: LogSink> TaggedLogger<'a, S> {
    pub(crate) fn new(logger: &'a Logger<S>, tag: &'a str) -> Self {
        Self { logger, tag }
    }

    /// The bound tag.
    pub fn tag(&self) -> &'a str {
        self.tag
    }

    /// The logger behind this view.
    pub fn logger(&self) -> &'a Logger<S> {
        self.logger
    }

    /// Whether a call at `level` would reach the sink.
    pub fn enabled(&self, level: Level) -> bool {
        self.logger.hook_enabled(level)
    }

    /// Informational line under the bound tag.
    ///
    /// Unlike [`Logger::info`] this is emitted on any non-release build (beta
    /// included) while detailed logs are enabled.
    pub fn info(&self, msg: impl fmt::Display) {
        self.logger.hook_info(self.tag, &msg);
    }

    /// See [`Logger::warn`].
    pub fn warn(&self, msg: Option<&str>, error: &dyn fmt::Display) {
        self.logger.warn(self.tag, msg, error);
    }

    /// See [`Logger::error`].
    pub fn error(&self, msg: Option<&str>, failure: Failure<'_>) {
        self.logger.error(self.tag, msg, failure);
    }

    /// See [`Logger::debug`].
    pub fn debug(&self, msg: impl fmt::Display) {
        self.logger.debug(Some(self.tag), msg);
    }
}

impl<S> Clone for TaggedLogger<'_, S> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<S> Copy for TaggedLogger<'_, S> {}

impl<S> fmt::Debug for TaggedLogger<'_, S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TaggedLogger")
            .field("tag", &self.tag)
            .field("logger", self.logger)
            .finish()
    }
}
