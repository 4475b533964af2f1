//! Resolution of snooze options from compiled-in defaults and an override.
//!
//! The override is a key-value list (see [`crate::kvlist`]) with two
//! recognized keys:
//!
//! - `default`: minutes of the pre-selected option
//! - `options_array`: colon-delimited minutes, e.g. `10:30:60`
//!
//! Resolution never fails. Anything unusable falls back to the compiled-in
//! value, and when the requested default is not among the options the first
//! option is pre-selected.

use crate::error::SnoozeConfigError;
use crate::int_array::try_parse_int_array;
use crate::kvlist::KeyValueListParser;
use crate::option::{ResolvedSnoozeConfig, SnoozeDefaults, SnoozeOption};

/// Override key holding the pre-selected minutes.
pub const KEY_DEFAULT: &str = "default";

/// Override key holding the colon-delimited option list.
pub const KEY_OPTIONS_ARRAY: &str = "options_array";

/// Resolves the snooze options for an optional raw override.
///
/// There is no cap on the number of options; use [`SnoozeConfigResolver`]
/// with [`SnoozeConfigResolver::with_max_options`] for that.
pub fn resolve_default_snooze_options(
    raw_override: Option<&str>,
    compiled_default_minutes: &[u32],
    compiled_default_value: u32,
) -> ResolvedSnoozeConfig {
    resolve(
        raw_override,
        compiled_default_minutes,
        compiled_default_value,
        None,
    )
    .config
}

/// A resolved configuration together with every fallback taken to reach it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Resolution {
    /// The resolved options.
    pub config: ResolvedSnoozeConfig,
    /// Problems found in the inputs, in the order they were hit.
    pub issues: Vec<SnoozeConfigError>,
}

impl Resolution {
    /// Returns `true` if the inputs were used without any fallback.
    pub fn is_clean(&self) -> bool {
        self.issues.is_empty()
    }
}

/// Resolver bound to a set of compiled-in defaults.
#[derive(Debug, Clone, Default)]
pub struct SnoozeConfigResolver {
    defaults: SnoozeDefaults,
    max_options: Option<usize>,
}

impl SnoozeConfigResolver {
    /// Creates a resolver with the given defaults and no option cap.
    pub fn new(defaults: SnoozeDefaults) -> Self {
        Self {
            defaults,
            max_options: None,
        }
    }

    /// Builder: keep at most `max` options (at least one is always kept).
    pub fn with_max_options(mut self, max: usize) -> Self {
        self.max_options = Some(max.max(1));
        self
    }

    /// The compiled-in defaults.
    pub fn defaults(&self) -> &SnoozeDefaults {
        &self.defaults
    }

    /// The option cap, if any.
    pub fn max_options(&self) -> Option<usize> {
        self.max_options
    }

    /// Resolves the options for `raw_override`.
    pub fn resolve(&self, raw_override: Option<&str>) -> ResolvedSnoozeConfig {
        self.resolve_with_diagnostics(raw_override).config
    }

    /// Resolves the options for `raw_override`, recording each fallback taken.
    pub fn resolve_with_diagnostics(&self, raw_override: Option<&str>) -> Resolution {
        resolve(
            raw_override,
            self.defaults.minutes(),
            self.defaults.default_minutes(),
            self.max_options,
        )
    }
}

fn resolve(
    raw_override: Option<&str>,
    fallback_minutes: &[u32],
    fallback_default: u32,
    max_options: Option<usize>,
) -> Resolution {
    let mut issues = Vec::new();

    let mut parser = KeyValueListParser::new();
    if let Err(e) = parser.set_string(raw_override) {
        issues.push(e);
    }

    let mut minutes = match parser.get_string(KEY_OPTIONS_ARRAY) {
        Some(raw) => try_parse_int_array(raw).unwrap_or_else(|e| {
            issues.push(e);
            fallback_minutes.to_vec()
        }),
        None => fallback_minutes.to_vec(),
    };
    if minutes.is_empty() {
        issues.push(SnoozeConfigError::EmptyDefaults);
        minutes.push(fallback_default);
    }

    if let Some(max) = max_options {
        let max = max.max(1);
        if minutes.len() > max {
            issues.push(SnoozeConfigError::Truncated {
                from: minutes.len(),
                to: max,
            });
            minutes.truncate(max);
        }
    }

    let target = match parser.try_get_int(KEY_DEFAULT) {
        Some(Ok(value)) => value,
        Some(Err(e)) => {
            issues.push(e);
            fallback_default
        }
        None => fallback_default,
    };

    let options: Vec<SnoozeOption> = minutes.into_iter().map(SnoozeOption::new).collect();
    let default_option = match options
        .iter()
        .find(|o| o.minutes_to_snooze_for() == target)
    {
        Some(option) => *option,
        None => {
            issues.push(SnoozeConfigError::DefaultNotInOptions { minutes: target });
            options[0]
        }
    };

    Resolution {
        config: ResolvedSnoozeConfig::new(options, default_option),
        issues,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const RES_DEFAULT: u32 = 2;
    const RES_OPTIONS: [u32; 3] = [1, 2, 3];

    fn resolve_res(raw: Option<&str>) -> ResolvedSnoozeConfig {
        resolve_default_snooze_options(raw, &RES_OPTIONS, RES_DEFAULT)
    }

    fn resolver() -> SnoozeConfigResolver {
        SnoozeConfigResolver::new(SnoozeDefaults::new(RES_OPTIONS.to_vec(), RES_DEFAULT).unwrap())
    }

    #[test]
    fn no_config_uses_defaults() {
        let result = resolve_res(None);
        assert_eq!(result.minutes(), vec![1, 2, 3]);
        assert_eq!(result.default_option().minutes_to_snooze_for(), 2);
    }

    #[test]
    fn invalid_config_uses_defaults() {
        let result = resolve_res(Some("this is garbage"));
        assert_eq!(result.minutes(), vec![1, 2, 3]);
        assert_eq!(result.default_option().minutes_to_snooze_for(), 2);
    }

    #[test]
    fn default_outside_options_picks_first() {
        let result = resolve_res(Some("default=10,options_array=4:5:6:7"));
        assert_eq!(result.minutes(), vec![4, 5, 6, 7]);
        assert_eq!(result.default_option().minutes_to_snooze_for(), 4);
        assert!(result.options().contains(&result.default_option()));
    }

    #[test]
    fn valid_config() {
        let result = resolve_res(Some("default=6,options_array=4:5:6:7"));
        assert_eq!(result.minutes(), vec![4, 5, 6, 7]);
        assert_eq!(result.default_option().minutes_to_snooze_for(), 6);
        assert_eq!(result.default_index(), 2);
    }

    #[test]
    fn long_config_is_not_capped() {
        let result =
            resolve_res(Some("default=6,options_array=4:5:6:7:8:9:10:11:12:13:14:15:16:17"));
        assert!(result.options().len() > 3);
        assert_eq!(&result.minutes()[..3], &[4, 5, 6]);
        assert_eq!(result.options().len(), 14);
    }

    #[test]
    fn only_default_key() {
        let result = resolve_res(Some("default=3"));
        assert_eq!(result.minutes(), vec![1, 2, 3]);
        assert_eq!(result.default_option().minutes_to_snooze_for(), 3);
    }

    #[test]
    fn only_options_key_keeps_compiled_default_when_present() {
        let result = resolve_res(Some("options_array=2:4:8"));
        assert_eq!(result.minutes(), vec![2, 4, 8]);
        assert_eq!(result.default_option().minutes_to_snooze_for(), 2);
    }

    #[test]
    fn unparsable_default_uses_compiled_default() {
        let result = resolve_res(Some("default=abc"));
        assert_eq!(result.default_option().minutes_to_snooze_for(), 2);
    }

    #[test]
    fn empty_options_array_falls_back() {
        let result = resolve_res(Some("options_array="));
        assert_eq!(result.minutes(), vec![1, 2, 3]);
    }

    #[test]
    fn bad_options_array_falls_back_but_keeps_default() {
        let result = resolve_res(Some("default=3,options_array=4:x"));
        assert_eq!(result.minutes(), vec![1, 2, 3]);
        assert_eq!(result.default_option().minutes_to_snooze_for(), 3);
    }

    #[test]
    fn malformed_pair_discards_valid_keys() {
        let result = resolve_res(Some("default=3,options_array=4:5,garbage"));
        assert_eq!(result.minutes(), vec![1, 2, 3]);
        assert_eq!(result.default_option().minutes_to_snooze_for(), 2);
    }

    #[test]
    fn unknown_keys_are_ignored() {
        let result = resolve_res(Some("color=blue,default=3"));
        assert_eq!(result.minutes(), vec![1, 2, 3]);
        assert_eq!(result.default_option().minutes_to_snooze_for(), 3);
    }

    #[test]
    fn duplicates_keep_position_and_first_match_wins() {
        let result = resolve_res(Some("default=5,options_array=5:1:5"));
        assert_eq!(result.minutes(), vec![5, 1, 5]);
        assert_eq!(result.default_index(), 0);
    }

    #[test]
    fn empty_compiled_defaults_still_yield_an_option() {
        let result = resolve_default_snooze_options(None, &[], 7);
        assert_eq!(result.minutes(), vec![7]);
        assert_eq!(result.default_option().minutes_to_snooze_for(), 7);
    }

    #[test]
    fn resolver_matches_free_function() {
        for raw in [
            None,
            Some("this is garbage"),
            Some("default=6,options_array=4:5:6:7"),
            Some("default=10,options_array=4:5:6:7"),
        ] {
            assert_eq!(resolver().resolve(raw), resolve_res(raw));
        }
    }

    #[test]
    fn max_options_truncates_in_order() {
        let resolution = resolver()
            .with_max_options(4)
            .resolve_with_diagnostics(Some("default=6,options_array=4:5:6:7:8:9:10"));
        assert_eq!(resolution.config.minutes(), vec![4, 5, 6, 7]);
        assert_eq!(resolution.config.default_option().minutes_to_snooze_for(), 6);
        assert_eq!(
            resolution.issues,
            vec![SnoozeConfigError::Truncated { from: 7, to: 4 }]
        );
    }

    #[test]
    fn default_cut_off_by_cap_picks_first() {
        let result = resolver()
            .with_max_options(2)
            .resolve(Some("default=6,options_array=4:5:6"));
        assert_eq!(result.minutes(), vec![4, 5]);
        assert_eq!(result.default_option().minutes_to_snooze_for(), 4);
    }

    #[test]
    fn zero_cap_keeps_one() {
        let resolver = resolver().with_max_options(0);
        assert_eq!(resolver.max_options(), Some(1));
        assert_eq!(resolver.resolve(None).minutes(), vec![1]);
    }

    #[test]
    fn clean_resolution_has_no_issues() {
        let resolution = resolver().resolve_with_diagnostics(Some("default=6,options_array=4:5:6"));
        assert!(resolution.is_clean());
        assert!(resolver().resolve_with_diagnostics(None).is_clean());
    }

    #[test]
    fn diagnostics_describe_fallbacks() {
        let resolution = resolver().resolve_with_diagnostics(Some("this is garbage"));
        assert_eq!(
            resolution.issues,
            vec![SnoozeConfigError::malformed_pair("this is garbage")]
        );

        let resolution =
            resolver().resolve_with_diagnostics(Some("default=abc,options_array=4:x"));
        assert_eq!(
            resolution.issues,
            vec![
                SnoozeConfigError::invalid_integer("x"),
                SnoozeConfigError::invalid_default("abc"),
            ]
        );

        let resolution = resolver().resolve_with_diagnostics(Some("default=10,options_array=4:5"));
        assert_eq!(
            resolution.issues,
            vec![SnoozeConfigError::DefaultNotInOptions { minutes: 10 }]
        );

        let resolution = resolver().resolve_with_diagnostics(Some("options_array=::"));
        assert_eq!(resolution.issues, vec![SnoozeConfigError::EmptyList]);
    }

    #[test]
    fn resolved_config_snapshot() {
        let result = resolver().resolve(Some("default=6,options_array=4:5:6:7"));
        insta::assert_json_snapshot!(result, @r#"
        {
          "options": [
            {
              "minutes": 4
            },
            {
              "minutes": 5
            },
            {
              "minutes": 6
            },
            {
              "minutes": 7
            }
          ],
          "default_option": {
            "minutes": 6
          }
        }
        "#);
    }

    mod properties {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #[test]
            fn never_empty_and_default_is_member(
                raw in proptest::option::of(".*"),
                fallback in proptest::collection::vec(0u32..1000, 1..8),
                default in 0u32..1000,
                cap in proptest::option::of(0usize..6),
            ) {
                let mut resolver =
                    SnoozeConfigResolver::new(SnoozeDefaults::new(fallback, default).unwrap());
                if let Some(cap) = cap {
                    resolver = resolver.with_max_options(cap);
                }
                let result = resolver.resolve(raw.as_deref());
                prop_assert!(!result.options().is_empty());
                prop_assert!(result.options().contains(&result.default_option()));
            }

            #[test]
            fn structured_overrides_are_honoured(
                minutes in proptest::collection::vec(0u32..10_000, 1..12),
                pick in 0usize..12,
            ) {
                let default = minutes[pick % minutes.len()];
                let list = minutes
                    .iter()
                    .map(u32::to_string)
                    .collect::<Vec<_>>()
                    .join(":");
                let raw = format!("default={default},options_array={list}");
                let result = resolve_default_snooze_options(Some(&raw), &RES_OPTIONS, RES_DEFAULT);
                prop_assert_eq!(result.minutes(), minutes);
                prop_assert_eq!(result.default_option().minutes_to_snooze_for(), default);
            }
        }
    }
}
