//! Line layout: `[Prefix][L][tag]: body`.

use crate::level::Level;
use std::fmt::{self, Write};

/// The prefix every line carries unless a logger is given another one.
pub const DEFAULT_PREFIX: &str = "Cemiuiler";

/// Render one log line.
///
/// The tag segment is omitted when `tag` is `None`. A `Display` impl that
/// reports an error only truncates the body; this function never fails.
pub fn format_line(
    prefix: &str,
    level: Level,
    tag: Option<&str>,
    body: &dyn fmt::Display,
) -> String {
    let mut line = String::with_capacity(prefix.len() + tag.map_or(0, str::len) + 32);
    let _ = write!(line, "[{prefix}][{}]", level.letter());
    if let Some(tag) = tag {
        let _ = write!(line, "[{tag}]");
    }
    let _ = write!(line, ": {body}");
    line
}
