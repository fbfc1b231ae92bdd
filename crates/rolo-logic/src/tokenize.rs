//! Splits a command's argument string into a preamble and prefixed values.
//!
//! A prefix is recognised only at the start of the string or right after
//! whitespace, so `time/` never matches the `e/` inside it. Beyond that the
//! scan is purely lexical: a prefix literal typed inside a value starts a new
//! argument.

use std::collections::HashMap;

use crate::syntax::Prefix;

/// Tokenizer output: the preamble plus every value seen for each prefix, in
/// input order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ArgMap {
  preamble: String,
  values:   HashMap<Prefix, Vec<String>>,
}

impl ArgMap {
  /// Text before the first recognised prefix, trimmed.
  pub fn preamble(&self) -> &str { &self.preamble }

  /// The last value given for `prefix`, if it appeared at all. A prefix with
  /// nothing after it yields `Some("")`.
  pub fn value(&self, prefix: Prefix) -> Option<&str> {
    self
      .values
      .get(&prefix)
      .and_then(|v| v.last())
      .map(String::as_str)
  }

  pub fn all_values(&self, prefix: Prefix) -> &[String] {
    self.values.get(&prefix).map(Vec::as_slice).unwrap_or_default()
  }
}

/// Tokenize `args` against `prefixes`.
pub fn tokenize(args: &str, prefixes: &[Prefix]) -> ArgMap {
  let mut positions = find_prefix_positions(args, prefixes);
  positions.sort_by_key(|(pos, _)| *pos);

  let preamble_end = positions.first().map_or(args.len(), |(pos, _)| *pos);
  let mut map = ArgMap {
    preamble: args[..preamble_end].trim().to_string(),
    values:   HashMap::new(),
  };

  for (i, (pos, prefix)) in positions.iter().enumerate() {
    let value_start = pos + prefix.as_str().len();
    let value_end = positions.get(i + 1).map_or(args.len(), |(next, _)| *next);
    let value = args[value_start..value_end].trim().to_string();
    map.values.entry(*prefix).or_default().push(value);
  }

  tracing::trace!(preamble = %map.preamble, prefixes = positions.len(), "tokenized");
  map
}

/// Byte offsets of every prefix occurrence that starts a token.
fn find_prefix_positions(args: &str, prefixes: &[Prefix]) -> Vec<(usize, Prefix)> {
  let mut positions = Vec::new();
  for prefix in prefixes {
    for (pos, _) in args.match_indices(prefix.as_str()) {
      let at_token_start = args[..pos]
        .chars()
        .next_back()
        .is_none_or(char::is_whitespace);
      if at_token_start {
        positions.push((pos, *prefix));
      }
    }
  }
  positions
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::syntax::{
    PREFIX_EMAIL, PREFIX_MEETING, PREFIX_NAME, PREFIX_TAG, PREFIX_TIME,
  };

  #[test]
  fn splits_preamble_and_values() {
    let map = tokenize(
      "John m/Meeting time/23-03-2025 1400-1500",
      &[PREFIX_MEETING, PREFIX_TIME],
    );
    assert_eq!(map.preamble(), "John");
    assert_eq!(map.value(PREFIX_MEETING), Some("Meeting"));
    assert_eq!(map.value(PREFIX_TIME), Some("23-03-2025 1400-1500"));
  }

  #[test]
  fn no_prefixes_means_everything_is_preamble() {
    let map = tokenize("  some random string  ", &[PREFIX_NAME]);
    assert_eq!(map.preamble(), "some random string");
    assert_eq!(map.value(PREFIX_NAME), None);
    assert!(map.value(PREFIX_NAME).is_none());
  }

  #[test]
  fn empty_value_is_present_but_blank() {
    let map = tokenize("John m/", &[PREFIX_MEETING, PREFIX_TIME]);
    assert_eq!(map.value(PREFIX_MEETING), Some(""));
    assert_eq!(map.value(PREFIX_TIME), None);
  }

  #[test]
  fn repeated_prefix_keeps_every_value() {
    let map = tokenize("Amy t/friends t/owes t/friends", &[PREFIX_TAG]);
    assert_eq!(map.all_values(PREFIX_TAG), ["friends", "owes", "friends"]);
    assert_eq!(map.value(PREFIX_TAG), Some("friends"));
    assert!(map.all_values(PREFIX_NAME).is_empty());
  }

  #[test]
  fn prefix_must_start_a_token() {
    // `e/` inside `time/` and inside `some/e/thing` is part of the value.
    let map = tokenize(
      "Bob time/01-01-2030 n/some/e/thing",
      &[PREFIX_EMAIL, PREFIX_TIME, PREFIX_NAME],
    );
    assert_eq!(map.value(PREFIX_TIME), Some("01-01-2030"));
    assert_eq!(map.value(PREFIX_NAME), Some("some/e/thing"));
    assert_eq!(map.value(PREFIX_EMAIL), None);
  }

  #[test]
  fn leading_prefix_leaves_empty_preamble() {
    let map = tokenize("n/John Smith", &[PREFIX_NAME]);
    assert_eq!(map.preamble(), "");
    assert_eq!(map.value(PREFIX_NAME), Some("John Smith"));
  }

  #[test]
  fn prefix_literal_inside_free_text_is_greedy() {
    let map = tokenize("Amy m/Review t/ drafts", &[PREFIX_MEETING, PREFIX_TAG]);
    assert_eq!(map.value(PREFIX_MEETING), Some("Review"));
    assert_eq!(map.value(PREFIX_TAG), Some("drafts"));
  }
}
