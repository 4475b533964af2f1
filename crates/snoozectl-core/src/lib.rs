//! Snooze option resolution: defaults, override parsing, change tracking

pub mod error;
pub mod int_array;
pub mod kvlist;
pub mod option;
pub mod provider;
pub mod resolver;
pub mod tracing;

pub use error::{SnoozeConfigError, SnoozeConfigResult};
pub use int_array::{parse_int_array, try_parse_int_array};
pub use kvlist::KeyValueListParser;
pub use option::{
    DEFAULT_SNOOZE_DEFAULT, DEFAULT_SNOOZE_MINUTES, ResolvedSnoozeConfig, SnoozeDefaults,
    SnoozeOption,
};
pub use provider::{SnoozeOptionsProvider, SubscriptionId};
pub use resolver::{
    KEY_DEFAULT, KEY_OPTIONS_ARRAY, Resolution, SnoozeConfigResolver,
    resolve_default_snooze_options,
};
pub use tracing::{TracingConfig, TracingError, TracingOutputFormat, init_tracing};
