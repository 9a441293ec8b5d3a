//! The failure payload attached to error lines.

use std::fmt;

/// The optional error and exception objects attached to an error log.
///
/// Hooks report failures through two overlapping paths: a caught error and a
/// caught exception. Either, both or neither may be present. When both are
/// present, the error object wins and the exception is ignored.
///
/// # Example
///
/// ```rust,ignore
/// let io = std::io::Error::other("denied");
/// logger.error("IconScaleHook", Some("resolve"), Failure::error(&io));
/// // [Cemiuiler][E][IconScaleHook]: resolve, hook failed by denied
/// ```
#[derive(Clone, Copy, Default)]
pub struct Failure<'a> {
    error: Option<&'a dyn fmt::Display>,
    exception: Option<&'a dyn fmt::Display>,
}

impl<'a> Failure<'a> {
    /// No failure object at all.
    pub const fn none() -> Self {
        Self {
            error: None,
            exception: None,
        }
    }

    /// Only an error object.
    pub const fn error(error: &'a dyn fmt::Display) -> Self {
        Self {
            error: Some(error),
            exception: None,
        }
    }

    /// Only an exception object.
    pub const fn exception(exception: &'a dyn fmt::Display) -> Self {
        Self {
            error: None,
            exception: Some(exception),
        }
    }

    /// Both objects. Only `error` will be rendered.
    pub const fn both(error: &'a dyn fmt::Display, exception: &'a dyn fmt::Display) -> Self {
        Self {
            error: Some(error),
            exception: Some(exception),
        }
    }

    /// Build from two optional objects.
    pub const fn new(
        error: Option<&'a dyn fmt::Display>,
        exception: Option<&'a dyn fmt::Display>,
    ) -> Self {
        Self { error, exception }
    }

    /// The object that ends up in the line: the error if present, else the exception.
    pub fn cause(&self) -> Option<&'a dyn fmt::Display> {
        self.error.or(self.exception)
    }

    /// Whether neither object is present.
    pub fn is_empty(&self) -> bool {
        self.error.is_none() && self.exception.is_none()
    }
}

impl fmt::Debug for Failure<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Failure")
            .field("error", &self.error.map(|e| e.to_string()))
            .field("exception", &self.exception.map(|e| e.to_string()))
            .finish()
    }
}
