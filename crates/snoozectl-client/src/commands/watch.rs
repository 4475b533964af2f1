//! Follow an override file and print the options whenever they change.

use std::io::ErrorKind;
use std::path::Path;
use std::time::Duration;

use chrono::Local;
use snoozectl_core::SnoozeOptionsProvider;
use tracing::{debug, info, warn};

use crate::config::ClientConfig;
use crate::error::{ClientError, ClientResult};
use crate::render;

/// Reads the override from `path`.
///
/// A missing file or one holding only whitespace means no override.
pub async fn read_override(path: &Path) -> ClientResult<Option<String>> {
    match tokio::fs::read_to_string(path).await {
        Ok(content) => {
            let trimmed = content.trim();
            Ok((!trimmed.is_empty()).then(|| trimmed.to_string()))
        }
        Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
        Err(e) => Err(e.into()),
    }
}

/// Re-reads `path` into `provider`. Returns whether the options changed.
pub async fn poll_once(provider: &mut SnoozeOptionsProvider, path: &Path) -> ClientResult<bool> {
    let raw = read_override(path).await?;
    Ok(provider.set_override(raw))
}

/// Watches `path` until Ctrl-C.
pub async fn run(config: &ClientConfig, path: &Path, interval: u64, json: bool) -> ClientResult<()> {
    let resolver = config.snooze.resolver().map_err(ClientError::Config)?;
    let initial = read_override(path).await?;
    let mut provider = SnoozeOptionsProvider::new(resolver, initial);
    println!("{}", render::options(provider.current(), json, &Local::now())?);

    provider.subscribe(move |resolved| match render::options(resolved, json, &Local::now()) {
        Ok(output) => println!("{}", output),
        Err(e) => warn!(error = %e, "Failed to render snooze options"),
    });

    let mut ticker = tokio::time::interval(Duration::from_secs(interval.max(1)));
    ticker.tick().await;
    let shutdown = tokio::signal::ctrl_c();
    tokio::pin!(shutdown);

    info!(path = %path.display(), interval_secs = interval.max(1), "Watching snooze override");
    loop {
        tokio::select! {
            _ = ticker.tick() => {
                match poll_once(&mut provider, path).await {
                    Ok(true) => debug!("Snooze options updated"),
                    Ok(false) => {}
                    Err(e) => warn!(error = %e, "Failed to read snooze override"),
                }
            }
            _ = &mut shutdown => {
                info!("Stopping watch");
                return Ok(());
            }
        }
    }
}
