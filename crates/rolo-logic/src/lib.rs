//! Command interpreter for the rolo contact manager.
//!
//! Turns one line of user input into a [`Command`] and runs it against any
//! [`PersonStore`]. Pure and synchronous: the only outside input besides the
//! line itself is the current time, which callers pass in.
//!
//! # Quick start
//!
//! ```no_run
//! use rolo_core::clock::ReferenceZone;
//! use rolo_logic::interpret;
//! use rolo_store_memory::AddressBook;
//!
//! let mut book = AddressBook::new();
//! let now = ReferenceZone::default().now();
//! match interpret("mtg John m/Review time/23-03-2030 1400-1500", &mut book, now) {
//!   Ok(result) => println!("{}", result.feedback),
//!   Err(e) => eprintln!("{e}"),
//! }
//! ```

pub mod command;
pub mod descriptor;
pub mod error;
pub mod field;
pub mod parse;
pub mod schedule;
pub mod syntax;
pub mod tokenize;

use chrono::NaiveDateTime;
pub use command::{Command, CommandResult};
pub use descriptor::EditPersonDescriptor;
pub use error::{CommandError, Error, ParseError, Result};
pub use parse::parse_command;
use rolo_core::store::PersonStore;

/// Parse `input` and execute it against `store`.
///
/// On any error the store is left exactly as it was.
pub fn interpret<S: PersonStore>(
  input: &str,
  store: &mut S,
  now: NaiveDateTime,
) -> Result<CommandResult> {
  let command = parse_command(input, now).inspect_err(|e| {
    tracing::warn!(error = %e, "rejected command");
  })?;
  Ok(command.execute(store)?)
}


// ─── Shared test helpers ──────────────────────────────────────────────────────

#[cfg(test)]
pub(crate) mod test_helpers {
  use chrono::{NaiveDate, NaiveDateTime};
  use rolo_core::person::{Address, Email, Name, Person, Phone, Tag};
  use rolo_store_memory::AddressBook;

  /// 1 January 2025, 09:00 in the reference zone.
  pub(crate) fn now() -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2025, 1, 1)
      .unwrap()
      .and_hms_opt(9, 0, 0)
      .unwrap()
  }

  pub(crate) fn person(name: &str) -> Person {
    Person::new(
      Name::new(name).unwrap(),
      Phone::new("94351253").unwrap(),
      Email::new("alice@example.com").unwrap(),
      Address::new("123, Jurong West Ave 6, #08-111").unwrap(),
    )
  }

  /// Alice, Benson and Carl; Benson is tagged `owesMoney` and `friends`.
  pub(crate) fn typical_book() -> AddressBook {
    let mut benson = person("Benson Meier");
    benson.tags.insert(Tag::new("owesMoney").unwrap());
    benson.tags.insert(Tag::new("friends").unwrap());
    AddressBook::from_persons([person("Alice Pauline"), benson, person("Carl Kurz")])
      .unwrap()
  }
}
