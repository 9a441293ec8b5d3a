//! Severities and the mask of severities a logger lets through.

use bitflags::bitflags;
use std::fmt;

/// Severity of a log line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Level {
    /// Informational, debug builds only, silenced by the detailed-log toggle.
    Info,
    /// Recoverable problem, silenced by the detailed-log toggle.
    Warn,
    /// Hook failure, always emitted.
    Error,
    /// Developer output, debug builds only.
    Debug,
}

impl Level {
    /// The single letter used in the line prefix.
    pub const fn letter(self) -> char {
        match self {
            Level::Info => 'I',
            Level::Warn => 'W',
            Level::Error => 'E',
            Level::Debug => 'D',
        }
    }

    /// The mask bit for this level.
    pub const fn flag(self) -> LevelSet {
        match self {
            Level::Info => LevelSet::INFO,
            Level::Warn => LevelSet::WARN,
            Level::Error => LevelSet::ERROR,
            Level::Debug => LevelSet::DEBUG,
        }
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Level::Info => "info",
            Level::Warn => "warn",
            Level::Error => "error",
            Level::Debug => "debug",
        };
        f.write_str(name)
    }
}

bitflags! {
    /// A set of enabled levels.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct LevelSet: u8 {
        /// Info lines.
        const INFO = 1 << 0;
        /// Warning lines.
        const WARN = 1 << 1;
        /// Error lines.
        const ERROR = 1 << 2;
        /// Debug lines.
        const DEBUG = 1 << 3;
    }
}

impl LevelSet {
    /// Whether `level` is part of this set.
    pub const fn allows(self, level: Level) -> bool {
        self.contains(level.flag())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_letters() {
        let letters: String = [Level::Info, Level::Warn, Level::Error, Level::Debug]
            .iter()
            .map(|l| l.letter())
            .collect();
        assert_eq!(letters, "IWED");
    }

    #[test]
    fn test_allows() {
        let set = LevelSet::ERROR | LevelSet::WARN;
        assert!(set.allows(Level::Error));
        assert!(set.allows(Level::Warn));
        assert!(!set.allows(Level::Info));
        assert!(!set.allows(Level::Debug));
    }
}
