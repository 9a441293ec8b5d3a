//! # cemiuiler-log - Gated Logging Facade for Module Hooks
//!
//! `cemiuiler-log` sits between a module's hooks and the host framework's log
//! channel. Every line is tagged, prefixed and either handed to a single
//! [`LogSink`] or dropped, depending on two flags fixed at startup:
//!
//! - whether this is a **debug build**
//! - whether the user **disabled detailed logs** (`settings_disable_detailed_log`)
//!
//! Errors always get through; info and warnings respect the user's toggle;
//! info and debug output exist only in debug builds.
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use cemiuiler_log::{BuildType, Failure, Logger, PrefsMap, sinks::sink_fn};
//!
//! let prefs = PrefsMap::from_lines(&settings_text)?;
//! let logger = Logger::builder()
//!     .build_type(BuildType::new("debug"))
//!     .config_source(&prefs)
//!     .sink(sink_fn(|line| host::log(line)))
//!     .build()?;
//!
//! logger.info(Some("IconScaleHook"), "Hook Success.");
//! logger.error("IconScaleHook", Some("Hook Failed"), Failure::error(&err));
//! ```

#![deny(clippy::wildcard_imports)]
#![warn(missing_docs)]

mod builder;
mod lifecycle;
mod logger;
mod macros;
mod policy;
mod tagged;

pub use builder::LoggerBuilder;
pub use lifecycle::ModuleHook;
pub use logger::Logger;
pub use policy::LogPolicy;
pub use tagged::TaggedLogger;

pub use cemiuiler_log_core::{
    // Error types
    BoxError,
    BuildError,
    // Capabilities
    ConfigSource,
    ConfigError,
    DEFAULT_PREFIX,
    DISABLE_DETAILED_LOG_KEY,
    DynSink,
    // Failure payload
    Failure,
    HookError,
    // Severities
    Level,
    LevelSet,
    LogSink,
    format_line,
};

pub use cemiuiler_log_std::config::{BuildType, PrefValue, PrefsMap, parse_bool};

/// Standard sink implementations.
pub mod sinks {
    #![allow(clippy::wildcard_imports)]
    pub use cemiuiler_log_std::sinks::*;
}

/// Testing utilities.
pub mod testing {
    #![allow(clippy::wildcard_imports)]
    pub use cemiuiler_log_std::testing::*;
}

/// Prelude module - common imports for hook code.
///
/// # Usage
///
/// ```rust,ignore
/// use cemiuiler_log::prelude::*;
/// ```
pub mod prelude {
    pub use crate::{
        BoxError, Failure, Level, LogPolicy, LogSink, Logger, ModuleHook, TaggedLogger, log_d,
        log_e, log_i, log_w,
    };
}
