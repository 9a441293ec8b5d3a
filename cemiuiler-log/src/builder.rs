//! Startup configuration for a [`Logger`].

use crate::{logger::Logger, policy::LogPolicy};
use cemiuiler_log_core::{BuildError, ConfigSource, DISABLE_DETAILED_LOG_KEY, DynSink, LogSink};
use cemiuiler_log_std::config::BuildType;
use std::borrow::Cow;

/// Builder for constructing a [`Logger`].
///
/// Flags resolve in this order: an explicit setter wins, then the build type
/// or config source, then the defaults (build type of the running binary,
/// detailed logs enabled).
///
/// # Example
///
/// ```rust,ignore
/// let logger = Logger::builder()
///     .build_type(BuildType::new(env!("BUILD_TYPE")))
///     .config_source(&prefs)
///     .sink(sink_fn(|line| host::log(line)))
///     .build()?;
/// ```
pub struct LoggerBuilder<S> {
    sink: Option<S>,
    prefix: Option<Cow<'static, str>>,
    build_type: Option<BuildType>,
    debug_build: Option<bool>,
    from_config: Option<bool>,
    suppress_detailed_logs: Option<bool>,
}

impl Logger<DynSink> {
    /// Start building a logger.
    pub fn builder() -> LoggerBuilder<DynSink> {
        LoggerBuilder::new()
    }
}

impl LoggerBuilder<DynSink> {
    /// Create a new builder with nothing configured.
    pub fn new() -> Self {
        Self {
            sink: None,
            prefix: None,
            build_type: None,
            debug_build: None,
            from_config: None,
            suppress_detailed_logs: None,
        }
    }
}

impl Default for LoggerBuilder<DynSink> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S> LoggerBuilder<S> {
    /// Set the sink every line goes to.
    pub fn sink<T: LogSink>(self, sink: T) -> LoggerBuilder<T> {
        LoggerBuilder {
            sink: Some(sink),
            prefix: self.prefix,
            build_type: self.build_type,
            debug_build: self.debug_build,
            from_config: self.from_config,
            suppress_detailed_logs: self.suppress_detailed_logs,
        }
    }

    /// Replace the `Cemiuiler` prefix.
    pub fn prefix(mut self, prefix: impl Into<Cow<'static, str>>) -> Self {
        self.prefix = Some(prefix.into());
        self
    }

    /// Take the debug-build and non-release flags from a build type.
    pub fn build_type(mut self, build_type: BuildType) -> Self {
        self.build_type = Some(build_type);
        self
    }

    /// Set the debug-build flag directly.
    pub fn debug_build(mut self, debug_build: bool) -> Self {
        self.debug_build = Some(debug_build);
        self
    }

    /// Read the detailed-log toggle from user preferences.
    ///
    /// The preference is read once, here.
    pub fn config_source<C: ConfigSource + ?Sized>(mut self, config: &C) -> Self {
        self.from_config = Some(config.get_bool(DISABLE_DETAILED_LOG_KEY));
        self
    }

    /// Set the detailed-log toggle directly.
    pub fn suppress_detailed_logs(mut self, suppress: bool) -> Self {
        self.suppress_detailed_logs = Some(suppress);
        self
    }

    /// The policy the current settings resolve to.
    pub fn policy(&self) -> LogPolicy {
        let debug_build = self.debug_build.unwrap_or_else(|| {
            self.build_type
                .as_ref()
                .map_or_else(|| BuildType::current().is_debug(), BuildType::is_debug)
        });
        // A debug build is never a release build.
        let not_release = debug_build
            || self
                .build_type
                .as_ref()
                .is_some_and(BuildType::is_not_release);
        let suppress = self
            .suppress_detailed_logs
            .or(self.from_config)
            .unwrap_or(false);
        LogPolicy::new(debug_build, suppress).with_not_release_build(not_release)
    }
}

impl<S: LogSink> LoggerBuilder<S> {
    /// Build the logger.
    pub fn build(self) -> Result<Logger<S>, BuildError> {
        let policy = self.policy();
        let sink = self.sink.ok_or(BuildError::MissingSink)?;
        let logger = Logger::new(sink, policy);
        Ok(match self.prefix {
            Some(prefix) => logger.with_prefix(prefix),
            None => logger,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use cemiuiler_log_std::{
        config::PrefsMap,
        testing::{FixedConfig, RecordingSink},
    };
    use std::sync::Arc;

    #[test]
    fn test_missing_sink() {
        let err = Logger::builder().debug_build(true).build().unwrap_err();
        assert_eq!(err, BuildError::MissingSink);
    }

    #[test]
    fn test_dyn_sink() {
        let sink = RecordingSink::new();
        let dyn_sink: DynSink = Arc::new(sink.clone());
        let logger = Logger::builder()
            .sink(dyn_sink)
            .debug_build(true)
            .build()
            .unwrap();
        logger.info(Some("Tag"), "Hi");
        assert_eq!(sink.lines(), ["[Cemiuiler][I][Tag]: Hi"]);
    }

    #[test]
    fn test_build_type_and_config() {
        let builder = Logger::builder()
            .build_type(BuildType::new("release"))
            .config_source(&FixedConfig::detailed_logs_disabled());
        assert_eq!(builder.policy(), LogPolicy::new(false, true));
    }

    #[test]
    fn test_explicit_flags_win() {
        let prefs = PrefsMap::new().with(DISABLE_DETAILED_LOG_KEY, true);
        let builder = Logger::builder()
            .build_type(BuildType::release())
            .debug_build(true)
            .config_source(&prefs)
            .suppress_detailed_logs(false);
        assert_eq!(builder.policy(), LogPolicy::new(true, false));
    }

    #[test]
    fn test_beta_build_type() {
        let builder = Logger::builder().build_type(BuildType::new("beta"));
        let policy = builder.policy();
        assert!(!policy.is_debug_build());
        assert!(policy.is_not_release_build());
        assert_eq!(
            policy,
            LogPolicy::new(false, false).with_not_release_build(true)
        );
    }

    #[test]
    fn test_defaults() {
        let builder = Logger::builder();
        assert_eq!(builder.policy(), LogPolicy::default());
    }

    #[test]
    fn test_prefix() {
        let sink = RecordingSink::new();
        let logger = Logger::builder()
            .prefix("Test")
            .sink(sink.clone())
            .build()
            .unwrap();
        logger.error("T", None, cemiuiler_log_core::Failure::none());
        assert_eq!(sink.lines(), ["[Test][E][T]: "]);
    }
}
