//! String-to-typed coercions for environment values.
//!
//! Every coercion the group loaders need lives here as a named function,
//! so the fatal-vs-default policy is explicit: an absent variable takes
//! the typed default, a present but unparseable one is a load-time error.

use crate::errors::ConfigError;
use std::env;

/// Read a string variable, falling back to `default` when unset.
pub(crate) fn string_or(key: &'static str, default: &str) -> String {
    env::var(key).unwrap_or_else(|_| default.to_string())
}

/// Read an optional variable. Unset yields `None`; set-but-empty yields
/// `Some("")` so downstream code can tell the two apart.
pub(crate) fn optional(key: &'static str) -> Option<String> {
    env::var(key).ok()
}

/// Read a float variable, falling back to `default` when unset.
pub(crate) fn float_or(key: &'static str, default: f64) -> Result<f64, ConfigError> {
    match env::var(key) {
        Ok(raw) => parse_float(key, &raw),
        Err(_) => Ok(default),
    }
}

/// Read an unsigned integer variable, falling back to `default` when unset.
pub(crate) fn u64_or(key: &'static str, default: u64) -> Result<u64, ConfigError> {
    match env::var(key) {
        Ok(raw) => parse_u64(key, &raw),
        Err(_) => Ok(default),
    }
}

/// Read a boolean flag, falling back to `default` when unset.
///
/// A set variable is true iff it equals the literal `true` under ASCII
/// case-insensitive comparison. `"1"`, `"yes"`, and everything else are
/// false. Operators rely on this exact comparator, so it is not a
/// generic truthy parse and it never fails.
pub(crate) fn flag_or(key: &'static str, default: bool) -> bool {
    env::var(key).map(|raw| is_true(&raw)).unwrap_or(default)
}

pub(crate) fn is_true(raw: &str) -> bool {
    raw.eq_ignore_ascii_case("true")
}

pub(crate) fn parse_float(key: &'static str, raw: &str) -> Result<f64, ConfigError> {
    raw.trim().parse::<f64>().map_err(|_| ConfigError::Parse {
        key,
        value: raw.to_string(),
        expected: "floating-point number",
    })
}

pub(crate) fn parse_u64(key: &'static str, raw: &str) -> Result<u64, ConfigError> {
    raw.trim().parse::<u64>().map_err(|_| ConfigError::Parse {
        key,
        value: raw.to_string(),
        expected: "integer",
    })
}
