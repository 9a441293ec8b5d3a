//! Which calls reach the sink under each flag combination.

use cemiuiler_log::Failure;

mod common;
use common::{ALL_FLAGS, recording_logger};

const TAGS: [&str; 3] = ["Tag", "", "NotificationVolumeSeparateSlider"];
const MESSAGES: [&str; 3] = ["Hi", "", "multi\nline"];

#[test]
fn test_release_build_drops_info_and_debug() {
    for suppress in [false, true] {
        let (logger, sink) = recording_logger(false, suppress);
        for tag in TAGS {
            for msg in MESSAGES {
                logger.info(Some(tag), msg);
                logger.info(None, msg);
                logger.debug(Some(tag), msg);
                logger.debug(None, msg);
            }
        }
        assert!(sink.is_empty(), "suppress={suppress}: {:?}", sink.lines());
    }
}

#[test]
fn test_detail_toggle_drops_info_and_warn() {
    for debug_build in [false, true] {
        let (logger, sink) = recording_logger(debug_build, true);
        let err = std::io::Error::other("boom");
        for tag in TAGS {
            for msg in MESSAGES {
                logger.info(Some(tag), msg);
                logger.info(None, msg);
                logger.warn(tag, None, &err);
                logger.warn(tag, Some(msg), &err);
            }
        }
        assert!(sink.is_empty(), "debug_build={debug_build}: {:?}", sink.lines());
    }
}

#[test]
fn test_errors_always_emitted() {
    for (debug_build, suppress) in ALL_FLAGS {
        let (logger, sink) = recording_logger(debug_build, suppress);
        for tag in TAGS {
            logger.error(tag, None, Failure::none());
            logger.error(tag, Some("Hook Failed"), Failure::exception(&"x"));
        }
        assert_eq!(sink.count(), TAGS.len() * 2);
    }
}

#[test]
fn test_warn_ignores_build_type() {
    let (logger, sink) = recording_logger(false, false);
    logger.warn("Tag", None, &"ClassNotFoundException");
    assert_eq!(sink.lines(), ["[Cemiuiler][W][Tag]: ClassNotFoundException"]);
}

#[test]
fn test_debug_ignores_detail_toggle() {
    let (logger, sink) = recording_logger(true, true);
    logger.debug(Some("Tag"), "still here");
    assert_eq!(sink.lines(), ["[Cemiuiler][D][Tag]: still here"]);
}

#[test]
fn test_emission_count_per_flags() {
    // (debug_build, suppress) -> lines out of info, warn, error, debug
    let expected = [
        ((false, false), 2),
        ((false, true), 1),
        ((true, false), 4),
        ((true, true), 2),
    ];
    for ((debug_build, suppress), count) in expected {
        let (logger, sink) = recording_logger(debug_build, suppress);
        logger.info(Some("T"), "i");
        logger.warn("T", None, &"w");
        logger.error("T", None, Failure::none());
        logger.debug(Some("T"), "d");
        assert_eq!(
            sink.count(),
            count,
            "debug_build={debug_build} suppress={suppress}"
        );
    }
}
