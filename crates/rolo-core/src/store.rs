//! The `PersonStore` trait — the interpreter's view of the address book.
//!
//! Commands never hold on to records. They resolve a person from the visible
//! list, build a replacement, and ask the store to swap it in. Backends (e.g.
//! `rolo-store-memory`) implement the trait; `rolo-logic` depends only on this
//! abstraction.

use crate::person::Person;

// ─── Lookup and filter types ─────────────────────────────────────────────────

/// How a lookup key is compared against a person's name.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NameMatch {
  /// Byte-for-byte equality after trimming the key.
  Exact,
  IgnoreCase,
}

impl NameMatch {
  pub fn matches(self, person: &Person, key: &str) -> bool {
    match self {
      Self::Exact => person.name.as_str() == key.trim(),
      Self::IgnoreCase => person.name.eq_ignore_case(key),
    }
  }
}

/// Which persons the visible list shows.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum PersonFilter {
  #[default]
  All,
  WithMeeting,
}

impl PersonFilter {
  pub fn matches(self, person: &Person) -> bool {
    match self {
      Self::All => true,
      Self::WithMeeting => person.has_meeting(),
    }
  }
}

// ─── Trait ───────────────────────────────────────────────────────────────────

/// Abstraction over the record store the interpreter runs against.
///
/// Calls are synchronous and come from one command at a time.
pub trait PersonStore {
  type Error: std::error::Error + Send + Sync + 'static;

  /// The persons currently visible, in display order.
  fn filtered_persons(&self) -> Vec<&Person>;

  /// Whether any stored person [`is_same_person`](Person::is_same_person) as
  /// `person`.
  fn has_person(&self, person: &Person) -> bool;

  /// Replace `target` with `edited`.
  ///
  /// Fails if `target` is not stored, or if `edited` has a different identity
  /// that another stored person already has. The store is unchanged on
  /// failure.
  fn set_person(&mut self, target: &Person, edited: Person) -> Result<(), Self::Error>;

  /// Change which persons [`filtered_persons`](Self::filtered_persons)
  /// returns.
  fn update_filter(&mut self, filter: PersonFilter);

  /// Resolve a person in the visible list by name.
  fn find_by_name(&self, key: &str, mode: NameMatch) -> Option<Person> {
    self
      .filtered_persons()
      .into_iter()
      .find(|p| mode.matches(p, key))
      .cloned()
  }
}
