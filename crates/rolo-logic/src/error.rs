//! Error types for the command interpreter.
//!
//! Every variant's `Display` text is the exact message shown to the user.

use thiserror::Error;

/// Input could not be turned into a [`Command`](crate::command::Command).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
  #[error("Unknown command")]
  UnknownCommand,

  /// Carries the usage text of the command that was misused.
  #[error("Invalid command format! \n{0}")]
  InvalidFormat(&'static str),

  #[error("At least one field to edit must be provided.")]
  NotEdited,

  #[error("Contact name cannot be empty.")]
  EmptyName,

  #[error("Meeting description cannot be empty when a timing is given.")]
  EmptyDescription,

  #[error("Meeting timing cannot be empty when a description is given.")]
  EmptyTiming,

  #[error(
    "Meeting timing should be of the format dd-MM-yyyy HHmm-HHmm, e.g. \
     23-03-2025 1400-1500"
  )]
  MeetingFormat,

  #[error(
    "Invalid date or time. Dates are dd-MM-yyyy and times are 24-hour HHmm."
  )]
  InvalidDateTime,

  #[error("Meeting cannot be scheduled at a time in the past.")]
  TimeInPast,

  #[error("Meeting end time cannot be earlier than its start time.")]
  TimingBackwards,

  /// A field value broke its format rule.
  #[error(transparent)]
  InvalidField(#[from] rolo_core::Error),
}

/// A well-formed command could not be applied to the store.
#[derive(Debug, Error)]
pub enum CommandError {
  #[error("No contact named \"{0}\" in the displayed list.")]
  PersonNotFound(String),

  #[error("This person already exists in the address book.")]
  DuplicatePerson,

  #[error("store error: {0}")]
  Store(#[source] Box<dyn std::error::Error + Send + Sync>),
}

#[derive(Debug, Error)]
pub enum Error {
  #[error(transparent)]
  Parse(#[from] ParseError),

  #[error(transparent)]
  Command(#[from] CommandError),
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
