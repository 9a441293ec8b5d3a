//! # cemiuiler-log-std
//!
//! Standard implementations for the Cemiuiler logging facade.
//!
//! This crate provides:
//! - **Preferences**: [`PrefsMap`](config::PrefsMap), a typed in-memory preference store
//! - **Build metadata**: [`BuildType`](config::BuildType)
//! - **Sinks**: [`FnSink`](sinks::FnSink), [`WriterSink`](sinks::WriterSink) and,
//!   with the `tracing` feature, `TracingSink`
//! - **Testing**: [`RecordingSink`](testing::RecordingSink), [`FixedConfig`](testing::FixedConfig)

#![deny(clippy::wildcard_imports)]
#![warn(missing_docs)]

// Re-export core traits
pub use cemiuiler_log_core;

// Modules
pub mod config;
pub mod sinks;
pub mod testing;
