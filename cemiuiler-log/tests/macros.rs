//! Formatting macros.

use cemiuiler_log::prelude::*;
use std::{
    fmt,
    sync::atomic::{AtomicUsize, Ordering},
};

mod common;
use common::recording_logger;

// Counts how many times it gets formatted.
struct FormatCounter<'a>(&'a AtomicUsize);

impl fmt::Display for FormatCounter<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fetch_add(1, Ordering::SeqCst);
        f.write_str("formatted")
    }
}

#[test]
fn test_info_and_debug_shapes() {
    let (logger, sink) = recording_logger(true, false);
    log_i!(logger, "IconScaleHook", "scale {}", 1.5);
    log_i!(logger; "loaded {} hooks", 12);
    log_d!(logger, "IconScaleHook", "raw={:?}", "x");
    log_d!(logger; "done");

    assert_eq!(
        sink.lines(),
        [
            "[Cemiuiler][I][IconScaleHook]: scale 1.5",
            "[Cemiuiler][I]: loaded 12 hooks",
            "[Cemiuiler][D][IconScaleHook]: raw=\"x\"",
            "[Cemiuiler][D]: done",
        ]
    );
}

#[test]
fn test_warn_and_error_shapes() {
    let (logger, sink) = recording_logger(false, false);
    let err = std::io::Error::other("denied");
    log_w!(logger, "Tag", &err);
    log_w!(logger, "Tag", &err, "reading {}", "prefs");
    log_e!(logger, "Tag", Failure::none());
    log_e!(logger, "Tag", Failure::error(&err), "TAG{}", "com.miui.home");

    assert_eq!(
        sink.lines(),
        [
            "[Cemiuiler][W][Tag]: denied",
            "[Cemiuiler][W][Tag]: reading prefs, warning by denied",
            "[Cemiuiler][E][Tag]: ",
            "[Cemiuiler][E][Tag]: TAGcom.miui.home, hook failed by denied",
        ]
    );
}

#[test]
fn test_suppressed_levels_are_not_formatted() {
    let (logger, sink) = recording_logger(false, true);
    let formatted = AtomicUsize::new(0);

    log_i!(logger, "Tag", "{}", FormatCounter(&formatted));
    log_d!(logger; "{}", FormatCounter(&formatted));
    log_w!(logger, "Tag", &"err", "{}", FormatCounter(&formatted));

    assert_eq!(formatted.load(Ordering::SeqCst), 0);
    assert!(sink.is_empty());

    log_e!(logger, "Tag", Failure::none(), "{}", FormatCounter(&formatted));
    assert_eq!(formatted.load(Ordering::SeqCst), 1);
    assert_eq!(sink.lines(), ["[Cemiuiler][E][Tag]: formatted"]);
}

#[test]
fn test_macros_accept_references() {
    let (logger, sink) = recording_logger(true, false);
    let shared = &logger;
    log_i!(shared, "Tag", "via ref");
    assert_eq!(sink.count(), 1);
}
