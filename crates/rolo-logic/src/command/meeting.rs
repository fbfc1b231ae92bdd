//! `mtg` and `meetings` — schedule, clear and list meetings.

use rolo_core::{
  meeting::Meeting,
  person::Person,
  store::{NameMatch, PersonFilter, PersonStore},
};

use super::{CommandResult, replace, resolve};
use crate::error::CommandError;

pub const ADD_WORD: &str = "mtg";

pub const ADD_USAGE: &str = "mtg: Schedules a meeting with the person identified by name, \
                             replacing any existing one. Leave out the description and timing \
                             to delete the meeting.\nParameters: NAME m/DESCRIPTION \
                             time/dd-MM-yyyy HHmm-HHmm\nExample: mtg John m/Project review \
                             time/23-03-2025 1400-1500";

pub const ADD_SUCCESS: &str = "Added meeting to Person: ";
pub const DELETE_SUCCESS: &str = "Removed meeting from Person: ";

pub const FIND_WORD: &str = "meetings";

pub const FIND_USAGE: &str = "meetings: Finds all meetings with the respective contacts and \
                              displays them as a list.\nExample: meetings";

pub const FIND_SUCCESS: &str = "Listed contacts with meetings";
pub const FIND_NONE: &str = "Oops! No contacts found with meetings.";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AddMeetingCommand {
  /// Name of the person, matched ignoring case.
  pub target:  String,
  /// `Unscheduled` deletes the person's meeting.
  pub meeting: Meeting,
}

impl AddMeetingCommand {
  pub fn new(target: impl Into<String>, meeting: Meeting) -> Self {
    Self {
      target: target.into(),
      meeting,
    }
  }

  pub fn execute<S: PersonStore>(self, store: &mut S) -> Result<CommandResult, CommandError> {
    let original = resolve(store, &self.target, NameMatch::IgnoreCase)?;
    let prefix = if self.meeting.is_scheduled() {
      ADD_SUCCESS
    } else {
      DELETE_SUCCESS
    };
    let edited = Person {
      meeting: self.meeting,
      ..original.clone()
    };

    let feedback = format!("{prefix}{edited}");
    replace(store, &original, edited)?;
    tracing::info!(person = %self.target, "updated meeting");
    Ok(CommandResult::new(feedback))
  }
}

/// Narrow the visible list to persons with a scheduled meeting.
pub fn find_meetings<S: PersonStore>(store: &mut S) -> CommandResult {
  store.update_filter(PersonFilter::WithMeeting);
  if store.filtered_persons().is_empty() {
    CommandResult::new(FIND_NONE)
  } else {
    CommandResult::new(FIND_SUCCESS)
  }
}
