//! Output rendering for resolved snooze options.

use std::fmt::Display;

use chrono::{DateTime, TimeZone, Utc};
use serde_json::json;
use snoozectl_core::{ResolvedSnoozeConfig, SnoozeConfigError, SnoozeOption};

fn option_lines(config: &ResolvedSnoozeConfig, suffix: impl Fn(&SnoozeOption) -> String) -> String {
    let default_index = config.default_index();
    config
        .options()
        .iter()
        .enumerate()
        .map(|(i, option)| {
            let marker = if i == default_index { '*' } else { ' ' };
            format!(
                "{} {} min{}",
                marker,
                option.minutes_to_snooze_for(),
                suffix(option)
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Renders options one per line, marking the default with `*` and showing
/// when a notification snoozed at `now` would come back.
pub fn options_text<Tz>(config: &ResolvedSnoozeConfig, now: &DateTime<Tz>) -> String
where
    Tz: TimeZone,
    Tz::Offset: Display,
{
    option_lines(config, |option| {
        let until = option
            .snooze_until(now.with_timezone(&Utc))
            .with_timezone(&now.timezone());
        format!(" (until {})", until.format("%H:%M"))
    })
}

/// Renders options as a single JSON document.
pub fn options_json(config: &ResolvedSnoozeConfig) -> Result<String, serde_json::Error> {
    serde_json::to_string(config)
}

/// Renders options in the requested format.
pub fn options<Tz>(
    config: &ResolvedSnoozeConfig,
    as_json: bool,
    now: &DateTime<Tz>,
) -> Result<String, serde_json::Error>
where
    Tz: TimeZone,
    Tz::Offset: Display,
{
    if as_json {
        options_json(config)
    } else {
        Ok(options_text(config, now))
    }
}

/// Renders the outcome of checking an override.
///
/// `ignored_keys` are well-formed keys the resolver does not recognize.
pub fn check_report(
    config: &ResolvedSnoozeConfig,
    issues: &[SnoozeConfigError],
    ignored_keys: &[String],
    as_json: bool,
) -> Result<String, serde_json::Error> {
    if as_json {
        let issues: Vec<String> = issues.iter().map(ToString::to_string).collect();
        return serde_json::to_string(&json!({
            "clean": issues.is_empty(),
            "issues": issues,
            "ignored_keys": ignored_keys,
            "resolved": config,
        }));
    }

    let mut lines = Vec::with_capacity(issues.len() + ignored_keys.len() + 2);
    if issues.is_empty() {
        lines.push("Override is valid.".to_string());
    } else {
        lines.extend(issues.iter().map(|issue| format!("warning: {}", issue)));
    }
    lines.extend(
        ignored_keys
            .iter()
            .map(|key| format!("note: unrecognized key '{}' ignored", key)),
    );
    lines.push(option_lines(config, |_| String::new()));
    Ok(lines.join("\n"))
}
