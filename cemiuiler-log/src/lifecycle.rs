//! Hook initialization with success / failure reporting.
//!
//! A module installs many independent hooks. Each one is initialized once
//! and its outcome is logged under the hook's tag: an info line when it went
//! in, an error line when it failed. A failing hook never takes the module
//! down with it, panics included.

use crate::logger::Logger;
use cemiuiler_log_core::{BoxError, Failure, HookError, LogSink};
use std::{
    any::{Any, type_name},
    panic::{self, AssertUnwindSafe},
};

/// A hook that can be initialized and reported on.
///
/// # Example
///
/// ```rust,ignore
/// struct IconScaleHook { scale: f32 }
///
/// impl ModuleHook for IconScaleHook {
///     fn init(&mut self) -> Result<(), BoxError> {
///         hook_method("com.miui.home.launcher.Launcher", "onCreate")?;
///         Ok(())
///     }
/// }
///
/// logger.run_hook(&mut IconScaleHook { scale: 1.2 });
/// // [Cemiuiler][I][IconScaleHook]: Hook Success.
/// ```
pub trait ModuleHook {
    /// The tag this hook logs under. Defaults to the type's short name.
    fn tag(&self) -> &str {
        short_type_name::<Self>()
    }

    /// Install the hook.
    fn init(&mut self) -> Result<(), BoxError>;
}

impl<S: LogSink> Logger<S> {
    /// Initialize `hook` and log the outcome under its tag.
    ///
    /// On success an info line `Hook Success.` is logged. On an error or a
    /// panic an error line `Hook Failed, hook failed by <cause>` is logged and
    /// the failure is returned. Panics are caught and never propagate.
    pub fn run_hook<H: ModuleHook + ?Sized>(&self, hook: &mut H) -> Result<(), HookError> {
        let outcome = panic::catch_unwind(AssertUnwindSafe(|| hook.init()));
        let result = match outcome {
            Ok(Ok(())) => Ok(()),
            Ok(Err(err)) => Err(HookError::Init(err)),
            Err(payload) => Err(HookError::Panic(panic_message(payload.as_ref()))),
        };

        let tag = hook.tag();
        match &result {
            Ok(()) => self.info(Some(tag), "Hook Success."),
            Err(err) => self.error(tag, Some("Hook Failed"), Failure::error(err)),
        }
        result
    }

    /// Initialize every hook in turn, returning how many failed.
    pub fn run_hooks<'h, I>(&self, hooks: I) -> usize
    where
        I: IntoIterator<Item = &'h mut dyn ModuleHook>,
    {
        hooks
            .into_iter()
            .map(|hook| self.run_hook(hook))
            .filter(Result::is_err)
            .count()
    }
}

fn panic_message(payload: &(dyn Any + Send)) -> String {
    if let Some(msg) = payload.downcast_ref::<&str>() {
        (*msg).to_owned()
    } else if let Some(msg) = payload.downcast_ref::<String>() {
        msg.clone()
    } else {
        "unknown panic payload".to_owned()
    }
}

/// The last path segment of a type name, without generic arguments.
pub(crate) fn short_type_name<T: ?Sized>() -> &'static str {
    let full = type_name::<T>();
    let base = full.split('<').next().unwrap_or(full);
    base.rsplit("::").next().unwrap_or(base)
}
