//! Emission policy derived from the two startup flags.

use cemiuiler_log_core::{ConfigSource, DISABLE_DETAILED_LOG_KEY, LevelSet};
use cemiuiler_log_std::config::BuildType;

/// Which severities a logger lets through.
///
/// Both flags are fixed when the policy is created:
///
/// | Level | Emitted when |
/// |---|---|
/// | info | debug build and detailed logs not suppressed |
/// | warn | detailed logs not suppressed |
/// | error | always |
/// | debug | debug build |
///
/// Lines a hook logs under its own tag (see [`TaggedLogger`]) follow
/// [`hook_levels`](Self::hook_levels) instead, where info only needs a
/// non-release build, so beta builds keep per-hook detail.
///
/// [`TaggedLogger`]: crate::TaggedLogger
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LogPolicy {
    debug_build: bool,
    not_release_build: bool,
    suppress_detailed_logs: bool,
}

impl LogPolicy {
    /// Create a policy from explicit flags.
    ///
    /// The build counts as non-release exactly when it is a debug build; use
    /// [`with_not_release_build`](Self::with_not_release_build) for builds
    /// such as beta that are neither.
    pub const fn new(debug_build: bool, suppress_detailed_logs: bool) -> Self {
        Self {
            debug_build,
            not_release_build: debug_build,
            suppress_detailed_logs,
        }
    }

    /// Set whether the build is anything other than a release build.
    pub const fn with_not_release_build(mut self, not_release_build: bool) -> Self {
        self.not_release_build = not_release_build;
        self
    }

    /// Resolve the policy from build metadata and the user's preferences.
    pub fn from_config<C: ConfigSource + ?Sized>(build: &BuildType, config: &C) -> Self {
        Self::new(build.is_debug(), config.get_bool(DISABLE_DETAILED_LOG_KEY))
            .with_not_release_build(build.is_not_release())
    }

    /// Whether this is a debug build.
    pub const fn is_debug_build(&self) -> bool {
        self.debug_build
    }

    /// Whether this is anything other than a release build.
    pub const fn is_not_release_build(&self) -> bool {
        self.not_release_build
    }

    /// Whether the user disabled detailed logs.
    pub const fn suppresses_detailed_logs(&self) -> bool {
        self.suppress_detailed_logs
    }

    /// The set of levels that reach the sink.
    pub const fn enabled_levels(&self) -> LevelSet {
        let mut set = LevelSet::ERROR;
        if self.debug_build {
            set = set.union(LevelSet::DEBUG);
        }
        if !self.suppress_detailed_logs {
            set = set.union(LevelSet::WARN);
            if self.debug_build {
                set = set.union(LevelSet::INFO);
            }
        }
        set
    }

    /// The set of levels that reach the sink from a hook's tagged logger.
    ///
    /// Same as [`enabled_levels`](Self::enabled_levels) except that info is
    /// let through on any non-release build.
    pub const fn hook_levels(&self) -> LevelSet {
        let mut set = self.enabled_levels().difference(LevelSet::INFO);
        if self.not_release_build && !self.suppress_detailed_logs {
            set = set.union(LevelSet::INFO);
        }
        set
    }
}

impl Default for LogPolicy {
    fn default() -> Self {
        Self::new(BuildType::current().is_debug(), false)
    }
}
