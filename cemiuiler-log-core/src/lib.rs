//! # cemiuiler-log-core
//!
//! Core traits for the Cemiuiler hook logging facade.
//!
//! This crate has minimal dependencies and is meant to be imported by hooks
//! and host adapters that only need to talk about sinks, preferences and
//! severities, without pulling in the facade itself.
//!
//! # Capabilities
//!
//! The facade never reaches into the host framework directly. Everything it
//! needs from the outside world comes in through two traits:
//!
//! - [`LogSink`] - where a finished line goes (the host's log channel)
//! - [`ConfigSource`] - where boolean preferences are read from
//!
//! # Building Blocks
//!
//! - [`Level`] / [`LevelSet`] - severities and the mask of enabled ones
//! - [`Failure`] - the optional error / exception pair attached to error logs
//! - [`format_line`] - the `[Prefix][L][tag]: body` line layout
//!
//! # Error Types
//!
//! - [`ConfigError`] - Preference lookup and parsing errors
//! - [`BuildError`] - Logger construction errors
//! - [`HookError`] - Hook initialization failures

#![deny(clippy::wildcard_imports)]
#![warn(missing_docs)]

mod config;
mod error;
mod failure;
mod format;
mod level;
mod sink;

// Re-exports
pub use config::{ConfigSource, DISABLE_DETAILED_LOG_KEY};
pub use error::{BoxError, BuildError, ConfigError, HookError};
pub use failure::Failure;
pub use format::{DEFAULT_PREFIX, format_line};
pub use level::{Level, LevelSet};
pub use sink::{DynSink, LogSink};
