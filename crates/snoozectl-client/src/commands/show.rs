//! Print the resolved snooze options.

use chrono::Local;
use tracing::debug;

use crate::config::ClientConfig;
use crate::error::{ClientError, ClientResult};
use crate::render;

/// Resolves and prints the options.
///
/// `override_value` takes precedence over the override stored in the config.
pub fn run(config: &ClientConfig, override_value: Option<&str>, json: bool) -> ClientResult<()> {
    let resolver = config.snooze.resolver().map_err(ClientError::Config)?;
    let raw = override_value.or(config.snooze.override_value.as_deref());
    debug!(raw_override = ?raw, "Resolving snooze options");

    let resolution = resolver.resolve_with_diagnostics(raw);
    for issue in &resolution.issues {
        debug!(error = %issue, "Fell back while resolving");
    }
    println!("{}", render::options(&resolution.config, json, &Local::now())?);
    Ok(())
}
