//! Command parsers.
//!
//! [`parse_command`] splits off the command word and hands the remaining
//! argument string to that command's parser. Each parser tokenizes against its
//! own prefixes, validates, and returns a ready [`Command`].

mod edit;
mod meeting;
mod remark;

use chrono::NaiveDateTime;

pub use edit::parse_edit;
pub use meeting::parse_add_meeting;
pub use remark::parse_remark;

use crate::{
  command::{self, Command},
  error::ParseError,
};

/// Parse one line of user input.
///
/// `now` is the current wall-clock time in the reference zone; only commands
/// that schedule something look at it.
pub fn parse_command(input: &str, now: NaiveDateTime) -> Result<Command, ParseError> {
  let input = input.trim();
  if input.is_empty() {
    return Err(ParseError::InvalidFormat(command::HELP_USAGE));
  }
  let (word, args) = input
    .split_once(char::is_whitespace)
    .unwrap_or((input, ""));
  tracing::debug!(word, args, "parsing command");

  match word {
    command::edit::WORD => parse_edit(args).map(Command::Edit),
    command::meeting::ADD_WORD => parse_add_meeting(args, now).map(Command::AddMeeting),
    command::meeting::FIND_WORD => Ok(Command::FindMeetings),
    command::remark::WORD => parse_remark(args).map(Command::Remark),
    command::LIST_WORD => Ok(Command::List),
    command::HELP_WORD => Ok(Command::Help),
    command::EXIT_WORD => Ok(Command::Exit),
    _ => Err(ParseError::UnknownCommand),
  }
}
