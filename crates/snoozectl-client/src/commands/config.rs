//! Configuration commands.

use std::path::Path;

use crate::config::ClientConfig;
use crate::error::{ClientError, ClientResult};

/// Dump the current configuration to stdout.
///
/// `path` is the file the configuration was loaded from.
pub fn dump(config: &ClientConfig, path: &Path) -> ClientResult<()> {
    println!("{}", dump_text(config, path)?);
    Ok(())
}

fn dump_text(config: &ClientConfig, path: &Path) -> ClientResult<String> {
    let toml_str = toml::to_string_pretty(config)
        .map_err(|e| ClientError::Config(format!("failed to serialize config: {}", e)))?;
    Ok(format!("# config.toml ({})\n{}", path.display(), toml_str))
}

/// Validate the configuration.
///
/// A stored override with problems is reported but does not fail
/// validation, since it always resolves to something usable.
pub fn validate(config: &ClientConfig) -> ClientResult<()> {
    let resolver = config.snooze.resolver().map_err(ClientError::Config)?;

    if !config.snooze.options.contains(&config.snooze.default) {
        println!(
            "warning: default of {} minutes is not among the options; the first option will be pre-selected",
            config.snooze.default
        );
    }

    if let Some(ref raw) = config.snooze.override_value {
        let resolution = resolver.resolve_with_diagnostics(Some(raw));
        for issue in &resolution.issues {
            println!("warning: override: {}", issue);
        }
    }

    println!("Configuration is valid.");
    Ok(())
}

/// Show the configuration file path.
pub fn path(path: &Path) -> ClientResult<()> {
    println!("{}", path_text(path));
    Ok(())
}

fn path_text(path: &Path) -> String {
    format!("config: {}", path.display())
}
