//! Commands — immutable, single-use requests against a [`PersonStore`].
//!
//! A command is built by one of the parsers in [`crate::parse`] and consumed
//! by [`Command::execute`]. Execution either replaces one record and returns a
//! message, or fails and leaves the store as it was.

pub mod edit;
pub mod meeting;
pub mod remark;

use rolo_core::{
  person::Person,
  store::{NameMatch, PersonFilter, PersonStore},
};

use crate::error::CommandError;
pub use edit::EditCommand;
pub use meeting::AddMeetingCommand;
pub use remark::RemarkCommand;

pub const LIST_WORD: &str = "list";
pub const LIST_SUCCESS: &str = "Listed all persons";

pub const HELP_WORD: &str = "help";
pub const HELP_USAGE: &str = "help: Shows program usage instructions.\nExample: help";
pub const SHOWING_HELP: &str = "Showing usage instructions.";

pub const EXIT_WORD: &str = "exit";
pub const EXIT_ACKNOWLEDGEMENT: &str = "Exiting Address Book as requested ...";

// ─── Result ──────────────────────────────────────────────────────────────────

/// What the caller should show after a command succeeds.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandResult {
  pub feedback: String,
  /// The caller should present [`usage`].
  pub show_help: bool,
  /// The caller should stop reading commands.
  pub exit: bool,
}

impl CommandResult {
  pub fn new(feedback: impl Into<String>) -> Self {
    Self {
      feedback:  feedback.into(),
      show_help: false,
      exit:      false,
    }
  }
}

// ─── Command ─────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
  Edit(EditCommand),
  AddMeeting(AddMeetingCommand),
  FindMeetings,
  Remark(RemarkCommand),
  List,
  Help,
  Exit,
}

impl Command {
  pub fn execute<S: PersonStore>(self, store: &mut S) -> Result<CommandResult, CommandError> {
    match self {
      Self::Edit(cmd) => cmd.execute(store),
      Self::AddMeeting(cmd) => cmd.execute(store),
      Self::FindMeetings => Ok(meeting::find_meetings(store)),
      Self::Remark(cmd) => cmd.execute(store),
      Self::List => {
        store.update_filter(PersonFilter::All);
        Ok(CommandResult::new(LIST_SUCCESS))
      }
      Self::Help => Ok(CommandResult {
        show_help: true,
        ..CommandResult::new(SHOWING_HELP)
      }),
      Self::Exit => Ok(CommandResult {
        exit: true,
        ..CommandResult::new(EXIT_ACKNOWLEDGEMENT)
      }),
    }
  }
}

/// Usage text for every command, one block per command.
pub fn usage() -> String {
  [
    edit::USAGE,
    meeting::ADD_USAGE,
    meeting::FIND_USAGE,
    remark::USAGE,
    "list: Lists all persons.\nExample: list",
    HELP_USAGE,
    "exit: Exits the program.\nExample: exit",
  ]
  .join("\n\n")
}

// ─── Shared execution steps ──────────────────────────────────────────────────

/// Find `key` in the visible list or fail with `PersonNotFound`.
pub(crate) fn resolve<S: PersonStore>(
  store: &S,
  key: &str,
  mode: NameMatch,
) -> Result<Person, CommandError> {
  store
    .find_by_name(key, mode)
    .ok_or_else(|| CommandError::PersonNotFound(key.to_string()))
}

/// Swap `target` for `edited` and show everyone again.
pub(crate) fn replace<S: PersonStore>(
  store: &mut S,
  target: &Person,
  edited: Person,
) -> Result<(), CommandError> {
  store
    .set_person(target, edited)
    .map_err(|e| CommandError::Store(Box::new(e)))?;
  store.update_filter(PersonFilter::All);
  Ok(())
}
