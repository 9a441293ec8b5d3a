//! The logger facade.

use crate::{policy::LogPolicy, tagged::TaggedLogger};
use cemiuiler_log_core::{DEFAULT_PREFIX, Failure, Level, LevelSet, LogSink, format_line};
use std::{borrow::Cow, fmt};

/// Gated, prefixed logging in front of a single sink.
///
/// A `Logger` is immutable once built: its policy and prefix never change,
/// so it can be shared freely between threads as long as the sink can.
/// Every call either formats one line and hands it to the sink, or does
/// nothing at all.
///
/// # Example
///
/// ```rust,ignore
/// use cemiuiler_log::{Failure, LogPolicy, Logger, testing::RecordingSink};
///
/// let sink = RecordingSink::new();
/// let logger = Logger::new(sink.clone(), LogPolicy::new(true, false));
///
/// logger.info(Some("Tag"), "Hi");
/// logger.error("Tag", None, Failure::none());
///
/// assert_eq!(sink.lines(), ["[Cemiuiler][I][Tag]: Hi", "[Cemiuiler][E][Tag]: "]);
/// ```
#[derive(Clone)]
pub struct Logger<S> {
    sink: S,
    policy: LogPolicy,
    levels: LevelSet,
    hook_levels: LevelSet,
    prefix: Cow<'static, str>,
}

impl<S: LogSink> Logger<S> {
    /// Create a logger with the default `Cemiuiler` prefix.
    pub fn new(sink: S, policy: LogPolicy) -> Self {
        Self {
            sink,
            policy,
            levels: policy.enabled_levels(),
            hook_levels: policy.hook_levels(),
            prefix: Cow::Borrowed(DEFAULT_PREFIX),
        }
    }

    /// Replace the bracketed prefix.
    pub fn with_prefix(mut self, prefix: impl Into<Cow<'static, str>>) -> Self {
        self.prefix = prefix.into();
        self
    }

    /// The policy this logger was built with.
    pub fn policy(&self) -> LogPolicy {
        self.policy
    }

    /// The bracketed prefix.
    pub fn prefix(&self) -> &str {
        &self.prefix
    }

    /// The underlying sink.
    pub fn sink(&self) -> &S {
        &self.sink
    }

    /// Consume the logger, returning its sink.
    pub fn into_sink(self) -> S {
        self.sink
    }

    /// Whether a call at `level` would reach the sink.
    pub fn enabled(&self, level: Level) -> bool {
        self.levels.allows(level)
    }

    /// A view of this logger bound to `tag`.
    pub fn tagged<'a>(&'a self, tag: &'a str) -> TaggedLogger<'a, S> {
        TaggedLogger::new(self, tag)
    }

    /// Informational line: `[P][I][tag]: msg`, or `[P][I]: msg` without a tag.
    ///
    /// Emitted only on debug builds with detailed logs enabled.
    pub fn info(&self, tag: Option<&str>, msg: impl fmt::Display) {
        self.log(Level::Info, tag, &msg);
    }

    /// Warning line: `[P][W][tag]: error`, or `[P][W][tag]: msg, warning by error`.
    ///
    /// Emitted unless detailed logs are disabled.
    pub fn warn(&self, tag: &str, msg: Option<&str>, error: &dyn fmt::Display) {
        self.log(Level::Warn, Some(tag), &WarnBody { msg, error });
    }

    /// Error line: `[P][E][tag]: msg` followed by `, hook failed by <cause>`
    /// when the failure carries an error or exception.
    ///
    /// Always emitted.
    pub fn error(&self, tag: &str, msg: Option<&str>, failure: Failure<'_>) {
        self.log(Level::Error, Some(tag), &ErrorBody { msg, failure });
    }

    /// Debug line: `[P][D][tag]: msg`, or `[P][D]: msg` without a tag.
    ///
    /// Emitted only on debug builds.
    pub fn debug(&self, tag: Option<&str>, msg: impl fmt::Display) {
        self.log(Level::Debug, tag, &msg);
    }

    pub(crate) fn hook_enabled(&self, level: Level) -> bool {
        self.hook_levels.allows(level)
    }

    // Info from a hook's own tagged logger, gated on a non-release build.
    pub(crate) fn hook_info(&self, tag: &str, msg: &dyn fmt::Display) {
        self.log_gated(self.hook_levels, Level::Info, Some(tag), msg);
    }

    fn log(&self, level: Level, tag: Option<&str>, body: &dyn fmt::Display) {
        self.log_gated(self.levels, level, tag, body);
    }

    fn log_gated(&self, levels: LevelSet, level: Level, tag: Option<&str>, body: &dyn fmt::Display) {
        if !levels.allows(level) {
            #[cfg(feature = "tracing")]
            {
                tracing::trace!(%level, tag = tag.unwrap_or(""), "log line suppressed");
            }
            return;
        }
        self.sink.emit(&format_line(&self.prefix, level, tag, body));
    }
}

impl<S> fmt::Debug for Logger<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Logger")
            .field("prefix", &self.prefix)
            .field("policy", &self.policy)
            .finish_non_exhaustive()
    }
}

struct WarnBody<'a> {
    msg: Option<&'a str>,
    error: &'a dyn fmt::Display,
}

impl fmt::Display for WarnBody<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.msg {
            Some(msg) => write!(f, "{msg}, warning by {}", self.error),
            None => write!(f, "{}", self.error),
        }
    }
}

struct ErrorBody<'a> {
    msg: Option<&'a str>,
    failure: Failure<'a>,
}

impl fmt::Display for ErrorBody<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.msg.unwrap_or(""))?;
        if let Some(cause) = self.failure.cause() {
            write!(f, ", hook failed by {cause}")?;
        }
        Ok(())
    }
}
