//! Report problems in an override string.

use snoozectl_core::{KEY_DEFAULT, KEY_OPTIONS_ARRAY, KeyValueListParser};

use crate::config::ClientConfig;
use crate::error::{ClientError, ClientResult};
use crate::render;

/// Prints every fallback `value` would cause.
///
/// Fails with [`ClientError::Invalid`] if there was at least one.
pub fn run(config: &ClientConfig, value: &str, json: bool) -> ClientResult<()> {
    let resolver = config.snooze.resolver().map_err(ClientError::Config)?;
    let resolution = resolver.resolve_with_diagnostics(Some(value));
    let ignored = ignored_keys(value);
    println!(
        "{}",
        render::check_report(&resolution.config, &resolution.issues, &ignored, json)?
    );

    if resolution.is_clean() {
        Ok(())
    } else {
        Err(ClientError::Invalid(resolution.issues.len()))
    }
}

/// Keys in a well-formed `value` that resolution never looks at, sorted.
fn ignored_keys(value: &str) -> Vec<String> {
    let mut parser = KeyValueListParser::new();
    if parser.set_string(Some(value)).is_err() {
        return Vec::new();
    }
    let mut keys: Vec<String> = parser
        .keys()
        .filter(|key| *key != KEY_DEFAULT && *key != KEY_OPTIONS_ARRAY)
        .map(String::from)
        .collect();
    keys.sort();
    keys
}
