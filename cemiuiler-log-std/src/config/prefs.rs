//! Typed in-memory preference store.

use cemiuiler_log_core::{ConfigError, ConfigSource};
use std::collections::{BTreeSet, HashMap};

/// A single stored preference.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PrefValue {
    /// A switch preference.
    Bool(bool),
    /// A numeric preference (seek bars, list indices).
    Int(i64),
    /// A text or list preference.
    Str(String),
    /// A multi-select preference.
    StrSet(BTreeSet<String>),
}

impl PrefValue {
    /// Name of the stored type, used in mismatch errors.
    pub const fn type_name(&self) -> &'static str {
        match self {
            PrefValue::Bool(_) => "bool",
            PrefValue::Int(_) => "int",
            PrefValue::Str(_) => "string",
            PrefValue::StrSet(_) => "string set",
        }
    }

    // Untyped `key=value` text: booleans first, then integers, else a string.
    fn infer(raw: &str) -> Self {
        if raw.eq_ignore_ascii_case("true") {
            PrefValue::Bool(true)
        } else if raw.eq_ignore_ascii_case("false") {
            PrefValue::Bool(false)
        } else if let Ok(n) = raw.parse::<i64>() {
            PrefValue::Int(n)
        } else {
            PrefValue::Str(raw.to_owned())
        }
    }
}

impl From<bool> for PrefValue {
    fn from(v: bool) -> Self {
        PrefValue::Bool(v)
    }
}

impl From<i64> for PrefValue {
    fn from(v: i64) -> Self {
        PrefValue::Int(v)
    }
}

impl From<i32> for PrefValue {
    fn from(v: i32) -> Self {
        PrefValue::Int(v.into())
    }
}

impl From<&str> for PrefValue {
    fn from(v: &str) -> Self {
        PrefValue::Str(v.to_owned())
    }
}

impl From<String> for PrefValue {
    fn from(v: String) -> Self {
        PrefValue::Str(v)
    }
}

impl From<BTreeSet<String>> for PrefValue {
    fn from(v: BTreeSet<String>) -> Self {
        PrefValue::StrSet(v)
    }
}

/// Parse a string-typed switch value.
///
/// Accepts `true/false`, `1/0`, `yes/no` and `on/off`, ignoring ASCII case and
/// surrounding whitespace.
pub fn parse_bool(raw: &str) -> Result<bool, ConfigError> {
    let value = raw.trim();
    const TRUE: [&str; 4] = ["true", "1", "yes", "on"];
    const FALSE: [&str; 4] = ["false", "0", "no", "off"];
    if TRUE.iter().any(|t| value.eq_ignore_ascii_case(t)) {
        Ok(true)
    } else if FALSE.iter().any(|f| value.eq_ignore_ascii_case(f)) {
        Ok(false)
    } else {
        Err(ConfigError::InvalidBool(raw.to_owned()))
    }
}

/// A map of user preferences, keyed by preference name.
///
/// # Example
///
/// ```rust,ignore
/// let prefs = PrefsMap::new().with("settings_disable_detailed_log", true);
/// assert!(prefs.get_bool("settings_disable_detailed_log"));
/// assert!(!prefs.get_bool("unknown_key"));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PrefsMap {
    values: HashMap<String, PrefValue>,
}

impl PrefsMap {
    /// Create an empty preference map.
    pub fn new() -> Self {
        Self::default()
    }

    /// Load preferences from `key=value` lines.
    ///
    /// Blank lines and lines starting with `#` are skipped. Keys and values are
    /// trimmed. Values are typed as bool, then int, then string. A later line
    /// overrides an earlier one with the same key.
    pub fn from_lines(text: &str) -> Result<Self, ConfigError> {
        let mut prefs = Self::new();
        for (idx, raw) in text.lines().enumerate() {
            let line = raw.trim();
            if line.is_empty() || line.starts_with('#') {
                continue;
            }
            let malformed = || ConfigError::MalformedLine {
                line: idx + 1,
                content: raw.to_owned(),
            };
            let (key, value) = line.split_once('=').ok_or_else(malformed)?;
            let key = key.trim();
            if key.is_empty() {
                return Err(malformed());
            }
            prefs.insert(key, PrefValue::infer(value.trim()));
        }
        Ok(prefs)
    }

    /// Store a value, returning the previous one.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<PrefValue>) -> Option<PrefValue> {
        self.values.insert(key.into(), value.into())
    }

    /// Builder-style [`insert`](Self::insert).
    pub fn with(mut self, key: impl Into<String>, value: impl Into<PrefValue>) -> Self {
        self.insert(key, value);
        self
    }

    /// The raw stored value.
    pub fn get(&self, key: &str) -> Option<&PrefValue> {
        self.values.get(key)
    }

    /// Whether a key is present.
    pub fn contains(&self, key: &str) -> bool {
        self.values.contains_key(key)
    }

    /// Number of stored preferences.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Whether the map holds no preferences.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Read a boolean, reporting why it could not be read.
    ///
    /// String values are accepted if [`parse_bool`] understands them, and the
    /// integers `0` and `1` read as `false` and `true`, so a switch reads the
    /// same however it was written.
    pub fn try_bool(&self, key: &str) -> Result<bool, ConfigError> {
        match self.values.get(key) {
            None => Err(ConfigError::Missing(key.to_owned())),
            Some(PrefValue::Bool(b)) => Ok(*b),
            Some(PrefValue::Int(0)) => Ok(false),
            Some(PrefValue::Int(1)) => Ok(true),
            Some(PrefValue::Str(s)) => parse_bool(s),
            Some(other) => Err(ConfigError::TypeMismatch {
                key: key.to_owned(),
                expected: "bool",
                found: other.type_name(),
            }),
        }
    }

    /// Read an integer, falling back to `default` when absent or not an int.
    pub fn get_int(&self, key: &str, default: i64) -> i64 {
        match self.values.get(key) {
            Some(PrefValue::Int(n)) => *n,
            _ => default,
        }
    }

    /// Read a string, if one is stored under `key`.
    pub fn get_str(&self, key: &str) -> Option<&str> {
        match self.values.get(key) {
            Some(PrefValue::Str(s)) => Some(s),
            _ => None,
        }
    }
}

impl ConfigSource for PrefsMap {
    fn get_bool(&self, key: &str) -> bool {
        self.try_bool(key).unwrap_or(false)
    }
}

impl<K: Into<String>, V: Into<PrefValue>> FromIterator<(K, V)> for PrefsMap {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            values: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}
