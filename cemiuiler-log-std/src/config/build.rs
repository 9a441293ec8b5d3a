//! Build type resolution.

use std::{borrow::Cow, convert::Infallible, fmt, str::FromStr};

/// The build variant the module was compiled as, e.g. `debug`, `release`, `beta`.
///
/// Matching is by substring, so flavored variants such as `fastDebug` or
/// `release_signed` classify the same way as their base type.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct BuildType(Cow<'static, str>);

impl BuildType {
    /// A build type from its name.
    pub fn new(name: impl Into<Cow<'static, str>>) -> Self {
        Self(name.into())
    }

    /// The plain `debug` build type.
    pub const fn debug() -> Self {
        Self(Cow::Borrowed("debug"))
    }

    /// The plain `release` build type.
    pub const fn release() -> Self {
        Self(Cow::Borrowed("release"))
    }

    /// The build type of the running binary, from `debug_assertions`.
    pub const fn current() -> Self {
        if cfg!(debug_assertions) {
            Self::debug()
        } else {
            Self::release()
        }
    }

    /// The build type name.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Whether verbose logging is permitted for this build.
    pub fn is_debug(&self) -> bool {
        self.0.contains("debug")
    }

    /// Whether this is a release build.
    pub fn is_release(&self) -> bool {
        self.0.contains("release")
    }

    /// Whether this is anything other than a release build.
    pub fn is_not_release(&self) -> bool {
        !self.is_release()
    }
}

impl Default for BuildType {
    fn default() -> Self {
        Self::current()
    }
}

impl fmt::Display for BuildType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for BuildType {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::new(s.to_owned()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_debug_and_release() {
        assert!(BuildType::debug().is_debug());
        assert!(!BuildType::debug().is_release());
        assert!(BuildType::release().is_release());
        assert!(!BuildType::release().is_debug());
    }

    #[test]
    fn test_substring_match() {
        let build: BuildType = "canary_debug".parse().unwrap();
        assert!(build.is_debug());
        assert!(build.is_not_release());
    }

    #[test]
    fn test_beta_is_neither() {
        let build = BuildType::new("beta");
        assert!(!build.is_debug());
        assert!(build.is_not_release());
        assert_eq!(build.to_string(), "beta");
    }

    #[test]
    fn test_current_follows_debug_assertions() {
        assert_eq!(BuildType::current().is_debug(), cfg!(debug_assertions));
    }
}
