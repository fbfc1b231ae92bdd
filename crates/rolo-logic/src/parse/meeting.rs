use chrono::NaiveDateTime;

use crate::{
  command::AddMeetingCommand,
  error::ParseError,
  schedule::validate_meeting,
  syntax::{PREFIX_MEETING, PREFIX_TIME},
  tokenize::tokenize,
};

/// `mtg NAME m/DESCRIPTION time/dd-MM-yyyy HHmm-HHmm`, or `mtg NAME m/` to
/// delete.
pub fn parse_add_meeting(args: &str, now: NaiveDateTime) -> Result<AddMeetingCommand, ParseError> {
  let map = tokenize(args, &[PREFIX_MEETING, PREFIX_TIME]);

  let target = map.preamble();
  if target.is_empty() {
    return Err(ParseError::EmptyName);
  }

  let description = map.value(PREFIX_MEETING).unwrap_or_default();
  let timing = map.value(PREFIX_TIME).unwrap_or_default();
  let meeting = validate_meeting(description, timing, now)?;

  Ok(AddMeetingCommand::new(target, meeting))
}

#[cfg(test)]
mod tests {
  use chrono::{NaiveDate, NaiveTime};
  use rolo_core::meeting::Meeting;

  use super::*;
  use crate::test_helpers::now;

  #[test]
  fn valid_meeting() {
    let cmd = parse_add_meeting("John m/Meeting time/23-03-2025 1400-1500", now()).unwrap();
    assert_eq!(
      cmd,
      AddMeetingCommand::new(
        "John",
        Meeting::scheduled(
          "Meeting",
          NaiveDate::from_ymd_opt(2025, 3, 23).unwrap(),
          NaiveTime::from_hms_opt(14, 0, 0).unwrap(),
          NaiveTime::from_hms_opt(15, 0, 0).unwrap(),
        )
      )
    );
  }

  #[test]
  fn multi_word_name_and_description() {
    let cmd =
      parse_add_meeting("John Doe m/Quarterly review time/23-03-2025 1400-1500", now()).unwrap();
    assert_eq!(cmd.target, "John Doe");
    assert_eq!(cmd.meeting.as_scheduled().unwrap().description, "Quarterly review");
  }

  #[test]
  fn empty_description_deletes() {
    assert_eq!(
      parse_add_meeting("John m/", now()).unwrap(),
      AddMeetingCommand::new("John", Meeting::Unscheduled)
    );
    assert_eq!(
      parse_add_meeting("John", now()).unwrap(),
      AddMeetingCommand::new("John", Meeting::Unscheduled)
    );
  }

  #[test]
  fn missing_contact_name() {
    assert_eq!(
      parse_add_meeting(" m/ time/23-03-2024 1400-1500", now()).unwrap_err(),
      ParseError::EmptyName
    );
  }

  #[test]
  fn missing_description() {
    assert_eq!(
      parse_add_meeting("John m/ time/23-03-2024 1400-1500", now()).unwrap_err(),
      ParseError::EmptyDescription
    );
    assert_eq!(
      parse_add_meeting("John time/23-03-2025 1400-1500", now()).unwrap_err(),
      ParseError::EmptyDescription
    );
  }

  #[test]
  fn missing_timing() {
    assert_eq!(
      parse_add_meeting("John m/interview", now()).unwrap_err(),
      ParseError::EmptyTiming
    );
  }

  #[test]
  fn invalid_date() {
    assert_eq!(
      parse_add_meeting("John m/Meeting time/31-02-2025 1400-1500", now()).unwrap_err(),
      ParseError::InvalidDateTime
    );
  }

  #[test]
  fn invalid_time() {
    assert_eq!(
      parse_add_meeting("John m/Meeting time/23-03-2025 1400-2400", now()).unwrap_err(),
      ParseError::InvalidDateTime
    );
  }

  #[test]
  fn time_in_past() {
    assert_eq!(
      parse_add_meeting("John m/Meeting time/23-03-1999 1400-1500", now()).unwrap_err(),
      ParseError::TimeInPast
    );
  }

  #[test]
  fn timing_backwards() {
    assert_eq!(
      parse_add_meeting("John m/Meeting time/23-03-2025 1900-1200", now()).unwrap_err(),
      ParseError::TimingBackwards
    );
  }

  #[test]
  fn malformed_timing() {
    assert_eq!(
      parse_add_meeting("John m/Meeting time/tomorrow", now()).unwrap_err(),
      ParseError::MeetingFormat
    );
  }
}
