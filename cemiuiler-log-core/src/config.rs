//! Preference source capability.

use std::sync::Arc;

/// Preference key under which the user disables detailed logging.
pub const DISABLE_DETAILED_LOG_KEY: &str = "settings_disable_detailed_log";

/// A read-only source of boolean preferences.
///
/// Implementations wrap whatever storage the host offers (shared preferences,
/// a config file, a fixed map in tests). A key that is absent, or that holds
/// something other than a boolean, reads as `false`.
///
/// # Example
///
/// ```rust,ignore
/// struct Always(bool);
///
/// impl ConfigSource for Always {
///     fn get_bool(&self, _key: &str) -> bool {
///         self.0
///     }
/// }
/// ```
pub trait ConfigSource: Send + Sync {
    /// Read a boolean preference.
    fn get_bool(&self, key: &str) -> bool;
}

impl<T: ConfigSource + ?Sized> ConfigSource for &T {
    fn get_bool(&self, key: &str) -> bool {
        (**self).get_bool(key)
    }
}

impl<T: ConfigSource + ?Sized> ConfigSource for Box<T> {
    fn get_bool(&self, key: &str) -> bool {
        (**self).get_bool(key)
    }
}

impl<T: ConfigSource + ?Sized> ConfigSource for Arc<T> {
    fn get_bool(&self, key: &str) -> bool {
        (**self).get_bool(key)
    }
}
