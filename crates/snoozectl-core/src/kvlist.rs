//! Parser for `key=value,key=value` override strings.
//!
//! Pairs are separated by `,` and split on their first `=`. Keys and values
//! are trimmed, empty pairs are skipped and a later key replaces an earlier
//! one. A non-empty pair without `=` invalidates the whole string.

use std::collections::HashMap;

use crate::error::{SnoozeConfigError, SnoozeConfigResult};

const PAIR_SEPARATOR: char = ',';
const KEY_VALUE_SEPARATOR: char = '=';

/// Holds the pairs of the last string given to [`KeyValueListParser::set_string`].
#[derive(Debug, Clone, Default)]
pub struct KeyValueListParser {
    values: HashMap<String, String>,
}

impl KeyValueListParser {
    /// Creates an empty parser.
    pub fn new() -> Self {
        Self::default()
    }

    /// Parses `input`, replacing any previously held pairs.
    ///
    /// # Errors
    ///
    /// Returns [`SnoozeConfigError::MalformedPair`] for the first non-empty
    /// pair lacking `=`. The parser is left empty in that case.
    pub fn set_string(&mut self, input: Option<&str>) -> SnoozeConfigResult<()> {
        self.values.clear();
        let Some(input) = input else {
            return Ok(());
        };

        for pair in input.split(PAIR_SEPARATOR) {
            if pair.trim().is_empty() {
                continue;
            }
            let Some((key, value)) = pair.split_once(KEY_VALUE_SEPARATOR) else {
                self.values.clear();
                return Err(SnoozeConfigError::malformed_pair(pair));
            };
            self.values
                .insert(key.trim().to_string(), value.trim().to_string());
        }
        Ok(())
    }

    /// Returns the raw value for `key`.
    pub fn get_string(&self, key: &str) -> Option<&str> {
        self.values.get(key).map(String::as_str)
    }

    /// Returns `key` parsed as minutes, or `None` if the key is absent.
    pub fn try_get_int(&self, key: &str) -> Option<SnoozeConfigResult<u32>> {
        self.get_string(key).map(|value| {
            value
                .parse::<u32>()
                .map_err(|_| SnoozeConfigError::invalid_default(value))
        })
    }

    /// Returns `key` parsed as minutes, or `default` if absent or unparsable.
    pub fn get_int(&self, key: &str, default: u32) -> u32 {
        match self.try_get_int(key) {
            Some(Ok(value)) => value,
            _ => default,
        }
    }

    /// Returns every key currently held, in no particular order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.values.keys().map(String::as_str)
    }

    /// Returns the number of pairs held.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Returns `true` if no pairs are held.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parsed(input: &str) -> KeyValueListParser {
        let mut parser = KeyValueListParser::new();
        parser.set_string(Some(input)).unwrap();
        parser
    }

    #[test]
    fn parses_pairs() {
        let parser = parsed("default=6,options_array=4:5:6:7");
        assert_eq!(parser.get_string("default"), Some("6"));
        assert_eq!(parser.get_string("options_array"), Some("4:5:6:7"));
        assert_eq!(parser.len(), 2);
    }

    #[test]
    fn trims_keys_and_values() {
        let parser = parsed(" default = 6 , options_array = 4:5 ");
        assert_eq!(parser.get_string("default"), Some("6"));
        assert_eq!(parser.get_string("options_array"), Some("4:5"));
    }

    #[test]
    fn splits_on_first_equals() {
        let parser = parsed("key=a=b");
        assert_eq!(parser.get_string("key"), Some("a=b"));
    }

    #[test]
    fn skips_empty_pairs() {
        let parser = parsed("default=6,,options_array=1:2,");
        assert_eq!(parser.len(), 2);
    }

    #[test]
    fn later_key_wins() {
        let parser = parsed("default=6,default=9");
        assert_eq!(parser.get_int("default", 0), 9);
    }

    #[test]
    fn empty_value_is_present() {
        let parser = parsed("options_array=");
        assert_eq!(parser.get_string("options_array"), Some(""));
    }

    #[test]
    fn garbage_is_rejected_and_clears() {
        let mut parser = parsed("default=6");
        let err = parser.set_string(Some("this is garbage")).unwrap_err();
        assert_eq!(err, SnoozeConfigError::malformed_pair("this is garbage"));
        assert!(parser.is_empty());
        assert_eq!(parser.get_string("default"), None);
    }

    #[test]
    fn one_bad_pair_rejects_everything() {
        let mut parser = KeyValueListParser::new();
        assert!(parser.set_string(Some("default=6,garbage")).is_err());
        assert_eq!(parser.get_string("default"), None);
    }

    #[test]
    fn none_clears() {
        let mut parser = parsed("default=6");
        parser.set_string(None).unwrap();
        assert!(parser.is_empty());
    }

    #[test]
    fn get_int_falls_back() {
        let parser = parsed("default=abc,other=-3");
        assert_eq!(parser.get_int("default", 2), 2);
        assert_eq!(parser.get_int("other", 2), 2);
        assert_eq!(parser.get_int("missing", 2), 2);
        assert_eq!(
            parser.try_get_int("default"),
            Some(Err(SnoozeConfigError::invalid_default("abc")))
        );
        assert_eq!(parser.try_get_int("missing"), None);
    }

    #[test]
    fn unknown_keys_are_kept() {
        let parser = parsed("color=blue");
        let keys: Vec<_> = parser.keys().collect();
        assert_eq!(keys, vec!["color"]);
    }
}
