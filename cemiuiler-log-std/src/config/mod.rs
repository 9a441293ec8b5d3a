//! Startup inputs: user preferences and build metadata.

mod build;
mod prefs;

pub use build::BuildType;
pub use prefs::{PrefValue, PrefsMap, parse_bool};
