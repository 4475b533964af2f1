//! Snooze option types.
//!
//! [`SnoozeOption`] is a single selectable duration, [`ResolvedSnoozeConfig`]
//! is the ordered set offered to the user plus the pre-selected entry, and
//! [`SnoozeDefaults`] bundles the compiled-in values used as fallbacks.

use chrono::{DateTime, Duration, Utc};
use serde::Serialize;

use crate::error::{SnoozeConfigError, SnoozeConfigResult};

/// Built-in snooze durations, in minutes.
pub const DEFAULT_SNOOZE_MINUTES: [u32; 4] = [15, 30, 60, 120];

/// Built-in pre-selected snooze duration, in minutes.
pub const DEFAULT_SNOOZE_DEFAULT: u32 = 60;

/// One selectable snooze duration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct SnoozeOption {
    #[serde(rename = "minutes")]
    minutes_to_snooze_for: u32,
}

impl SnoozeOption {
    /// Creates an option snoozing for the given number of minutes.
    pub fn new(minutes_to_snooze_for: u32) -> Self {
        Self {
            minutes_to_snooze_for,
        }
    }

    /// Returns the number of minutes this option snoozes for.
    pub fn minutes_to_snooze_for(&self) -> u32 {
        self.minutes_to_snooze_for
    }

    /// Returns the snooze length as a duration.
    pub fn duration(&self) -> Duration {
        Duration::minutes(i64::from(self.minutes_to_snooze_for))
    }

    /// Returns when a notification snoozed at `now` reappears.
    pub fn snooze_until(&self, now: DateTime<Utc>) -> DateTime<Utc> {
        now + self.duration()
    }
}

/// The resolved set of snooze options and the one pre-selected.
///
/// `options` is never empty and `default_option` is always one of them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ResolvedSnoozeConfig {
    options: Vec<SnoozeOption>,
    default_option: SnoozeOption,
}

impl ResolvedSnoozeConfig {
    /// Callers must uphold the non-empty and membership invariants.
    pub(crate) fn new(options: Vec<SnoozeOption>, default_option: SnoozeOption) -> Self {
        debug_assert!(!options.is_empty());
        debug_assert!(options.contains(&default_option));
        Self {
            options,
            default_option,
        }
    }

    /// Options in display order.
    pub fn options(&self) -> &[SnoozeOption] {
        &self.options
    }

    /// The pre-selected option.
    pub fn default_option(&self) -> SnoozeOption {
        self.default_option
    }

    /// Minutes of every option, in order.
    pub fn minutes(&self) -> Vec<u32> {
        self.options
            .iter()
            .map(SnoozeOption::minutes_to_snooze_for)
            .collect()
    }

    /// Position of the pre-selected option in [`Self::options`].
    pub fn default_index(&self) -> usize {
        self.options
            .iter()
            .position(|o| *o == self.default_option)
            .unwrap_or(0)
    }
}

/// Compiled-in snooze options and default, used whenever the override is
/// absent or unusable.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SnoozeDefaults {
    minutes: Vec<u32>,
    default_minutes: u32,
}

impl Default for SnoozeDefaults {
    fn default() -> Self {
        Self {
            minutes: DEFAULT_SNOOZE_MINUTES.to_vec(),
            default_minutes: DEFAULT_SNOOZE_DEFAULT,
        }
    }
}

impl SnoozeDefaults {
    /// Creates defaults from an option list and pre-selected value.
    ///
    /// # Errors
    ///
    /// Returns [`SnoozeConfigError::EmptyDefaults`] if `minutes` is empty.
    pub fn new(minutes: Vec<u32>, default_minutes: u32) -> SnoozeConfigResult<Self> {
        if minutes.is_empty() {
            return Err(SnoozeConfigError::EmptyDefaults);
        }
        Ok(Self {
            minutes,
            default_minutes,
        })
    }

    /// The default option list.
    pub fn minutes(&self) -> &[u32] {
        &self.minutes
    }

    /// The default pre-selected value.
    pub fn default_minutes(&self) -> u32 {
        self.default_minutes
    }
}
