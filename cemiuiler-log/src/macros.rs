//! Formatting macros that skip all work for suppressed levels.
//!
//! The message arguments are only formatted once the logger has confirmed
//! the level reaches its sink.

/// Log an info line with a formatted message.
///
/// # Example
///
/// ```rust,ignore
/// log_i!(logger, "IconScaleHook", "scale set to {}", scale);
/// log_i!(logger; "module loaded in {:?}", elapsed);
/// ```
#[macro_export]
macro_rules! log_i {
    ($logger:expr; $($arg:tt)+) => {{
        let logger = &$logger;
        if logger.enabled($crate::Level::Info) {
            logger.info(::core::option::Option::None, ::core::format_args!($($arg)+));
        }
    }};
    ($logger:expr, $tag:expr, $($arg:tt)+) => {{
        let logger = &$logger;
        if logger.enabled($crate::Level::Info) {
            logger.info(::core::option::Option::Some($tag), ::core::format_args!($($arg)+));
        }
    }};
}

/// Log a debug line with a formatted message.
///
/// Same shapes as [`log_i!`].
#[macro_export]
macro_rules! log_d {
    ($logger:expr; $($arg:tt)+) => {{
        let logger = &$logger;
        if logger.enabled($crate::Level::Debug) {
            logger.debug(::core::option::Option::None, ::core::format_args!($($arg)+));
        }
    }};
    ($logger:expr, $tag:expr, $($arg:tt)+) => {{
        let logger = &$logger;
        if logger.enabled($crate::Level::Debug) {
            logger.debug(::core::option::Option::Some($tag), ::core::format_args!($($arg)+));
        }
    }};
}

/// Log a warning, optionally with a formatted context message.
///
/// # Example
///
/// ```rust,ignore
/// log_w!(logger, "InstallSource", &err);
/// log_w!(logger, "InstallSource", &err, "falling back to {}", pkg);
/// ```
#[macro_export]
macro_rules! log_w {
    ($logger:expr, $tag:expr, $error:expr, $($arg:tt)+) => {{
        let logger = &$logger;
        if logger.enabled($crate::Level::Warn) {
            let msg = ::std::format!($($arg)+);
            logger.warn($tag, ::core::option::Option::Some(msg.as_str()), $error);
        }
    }};
    ($logger:expr, $tag:expr, $error:expr $(,)?) => {{
        $logger.warn($tag, ::core::option::Option::None, $error)
    }};
}

/// Log an error with a [`Failure`](crate::Failure), optionally with a formatted message.
///
/// # Example
///
/// ```rust,ignore
/// log_e!(logger, "MiuiAppNoOverScroll", Failure::exception(&err), "TAG{}", pkg);
/// log_e!(logger, "MiuiAppNoOverScroll", Failure::none());
/// ```
#[macro_export]
macro_rules! log_e {
    ($logger:expr, $tag:expr, $failure:expr, $($arg:tt)+) => {{
        let msg = ::std::format!($($arg)+);
        $logger.error($tag, ::core::option::Option::Some(msg.as_str()), $failure)
    }};
    ($logger:expr, $tag:expr, $failure:expr $(,)?) => {{
        $logger.error($tag, ::core::option::Option::None, $failure)
    }};
}
