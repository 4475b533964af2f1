//! Colon-delimited minute lists (`4:5:6`).

use crate::error::{SnoozeConfigError, SnoozeConfigResult};

const SEPARATOR: char = ':';

/// Parses a colon-delimited list of minutes.
///
/// Empty and whitespace-only tokens are dropped; every other token must be
/// a non-negative base-10 integer. Order is preserved and duplicates kept.
///
/// # Errors
///
/// Returns [`SnoozeConfigError::InvalidInteger`] for the first bad token,
/// or [`SnoozeConfigError::EmptyList`] if no tokens remain.
pub fn try_parse_int_array(raw: &str) -> SnoozeConfigResult<Vec<u32>> {
    let values = raw
        .split(SEPARATOR)
        .map(str::trim)
        .filter(|token| !token.is_empty())
        .map(|token| {
            token
                .parse::<u32>()
                .map_err(|_| SnoozeConfigError::invalid_integer(token))
        })
        .collect::<SnoozeConfigResult<Vec<_>>>()?;

    if values.is_empty() {
        return Err(SnoozeConfigError::EmptyList);
    }
    Ok(values)
}

/// Parses `raw_value`, returning `fallback` if it is absent, contains any
/// invalid token, or has no tokens.
pub fn parse_int_array(raw_value: Option<&str>, fallback: &[u32]) -> Vec<u32> {
    raw_value
        .and_then(|raw| try_parse_int_array(raw).ok())
        .unwrap_or_else(|| fallback.to_vec())
}
