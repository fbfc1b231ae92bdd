//! Meeting validation.
//!
//! Pipeline, first failure wins:
//!   description + timing token
//!     └─ both empty            → Meeting::Unscheduled
//!     └─ split_timing()        → date / start / end segments   (MeetingFormat)
//!          └─ parse_date()     → NaiveDate                     (InvalidDateTime)
//!          └─ parse_time() ×2  → NaiveTime                     (InvalidDateTime)
//!               └─ check_not_past()                            (TimeInPast)
//!               └─ check_ordered()                             (TimingBackwards)
//!                    └─ Meeting::Scheduled
//!
//! "Now" is passed in by the caller, read once from the reference zone.

use std::sync::LazyLock;

use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use regex::Regex;
use rolo_core::meeting::Meeting;

use crate::{
  error::ParseError,
  field::{parse_date, parse_time},
};

type Result<T> = std::result::Result<T, ParseError>;

static TIMING_RE: LazyLock<Regex> = LazyLock::new(|| {
  Regex::new(r"^(?P<date>\S+)\s+(?P<start>[^\s-]+)\s*-\s*(?P<end>[^\s-]+)$").unwrap()
});

/// A parsed but not yet time-checked timing token.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Timing {
  pub date:  NaiveDate,
  pub start: NaiveTime,
  pub end:   NaiveTime,
}

/// Parse `dd-MM-yyyy HHmm-HHmm`.
pub fn parse_timing(token: &str) -> Result<Timing> {
  let caps = TIMING_RE
    .captures(token.trim())
    .ok_or(ParseError::MeetingFormat)?;
  let date = parse_date(&caps["date"])?;
  let start = parse_time(&caps["start"])?;
  let end = parse_time(&caps["end"])?;
  Ok(Timing { date, start, end })
}

/// Reject a timing that starts before `now` or ends before it starts.
pub fn check_timing(timing: &Timing, now: NaiveDateTime) -> Result<()> {
  check_not_past(timing, now)?;
  check_ordered(timing)
}

fn check_not_past(timing: &Timing, now: NaiveDateTime) -> Result<()> {
  let today = now.date();
  if timing.date < today || (timing.date == today && timing.start < now.time()) {
    tracing::debug!(date = %timing.date, start = %timing.start, %now, "meeting in the past");
    return Err(ParseError::TimeInPast);
  }
  Ok(())
}

fn check_ordered(timing: &Timing) -> Result<()> {
  if timing.end < timing.start {
    return Err(ParseError::TimingBackwards);
  }
  Ok(())
}

/// Build the meeting described by `description` and `timing`.
///
/// Both blank is the request to clear a meeting and yields
/// [`Meeting::Unscheduled`]. Exactly one blank is an error.
pub fn validate_meeting(description: &str, timing: &str, now: NaiveDateTime) -> Result<Meeting> {
  let description = description.trim();
  let timing = timing.trim();

  match (description.is_empty(), timing.is_empty()) {
    (true, true) => return Ok(Meeting::Unscheduled),
    (true, false) => return Err(ParseError::EmptyDescription),
    (false, true) => return Err(ParseError::EmptyTiming),
    (false, false) => {}
  }

  let parsed = parse_timing(timing)?;
  check_timing(&parsed, now)?;
  Ok(Meeting::scheduled(description, parsed.date, parsed.start, parsed.end))
}

#[cfg(test)]
mod tests {
  use super::*;

  fn at(date: &str, time: &str) -> NaiveDateTime {
    parse_date(date).unwrap().and_time(parse_time(time).unwrap())
  }

  /// 1 January 2025, 09:00 in the reference zone.
  fn now() -> NaiveDateTime { at("01-01-2025", "0900") }

  #[test]
  fn accepts_future_meeting() {
    let meeting = validate_meeting("Meeting", "23-03-2025 1400-1500", now()).unwrap();
    assert_eq!(
      meeting,
      Meeting::scheduled(
        "Meeting",
        NaiveDate::from_ymd_opt(2025, 3, 23).unwrap(),
        NaiveTime::from_hms_opt(14, 0, 0).unwrap(),
        NaiveTime::from_hms_opt(15, 0, 0).unwrap(),
      )
    );
  }

  #[test]
  fn spaces_around_hyphen_are_tolerated() {
    assert!(validate_meeting("Sync", "23-03-2025 1400 - 1500", now()).is_ok());
  }

  #[test]
  fn blank_description_and_timing_clear_the_meeting() {
    assert_eq!(validate_meeting("", "", now()).unwrap(), Meeting::Unscheduled);
    assert_eq!(validate_meeting("  ", " ", now()).unwrap(), Meeting::Unscheduled);
  }

  #[test]
  fn one_side_blank_is_rejected() {
    assert_eq!(
      validate_meeting("", "23-03-2025 1400-1500", now()).unwrap_err(),
      ParseError::EmptyDescription
    );
    assert_eq!(
      validate_meeting("interview", "", now()).unwrap_err(),
      ParseError::EmptyTiming
    );
  }

  #[test]
  fn malformed_shape() {
    for bad in ["23-03-2025", "23-03-2025 1400", "1400-1500", "23-03-2025 1400-1500 extra"] {
      assert_eq!(parse_timing(bad).unwrap_err(), ParseError::MeetingFormat, "{bad}");
    }
  }

  #[test]
  fn impossible_date_or_time() {
    assert_eq!(
      validate_meeting("Meeting", "31-02-2025 1400-1500", now()).unwrap_err(),
      ParseError::InvalidDateTime
    );
    assert_eq!(
      validate_meeting("Meeting", "23-03-2025 1400-2400", now()).unwrap_err(),
      ParseError::InvalidDateTime
    );
  }

  #[test]
  fn past_date_rejected_whatever_the_times() {
    for timing in ["23-03-1999 1400-1500", "23-03-1999 1900-1200", "31-12-2024 2300-2359"] {
      assert_eq!(
        validate_meeting("Meeting", timing, now()).unwrap_err(),
        ParseError::TimeInPast,
        "{timing}"
      );
    }
  }

  #[test]
  fn today_compares_start_against_current_time() {
    assert_eq!(
      validate_meeting("Standup", "01-01-2025 0830-0845", now()).unwrap_err(),
      ParseError::TimeInPast
    );
    assert!(validate_meeting("Standup", "01-01-2025 0900-0915", now()).is_ok());
    // Only the start matters; an end already behind "now" is the backwards rule's job.
    assert_eq!(
      validate_meeting("Standup", "01-01-2025 1000-0800", now()).unwrap_err(),
      ParseError::TimingBackwards
    );
  }

  #[test]
  fn end_before_start_rejected() {
    assert_eq!(
      validate_meeting("Meeting", "23-03-2025 1900-1200", now()).unwrap_err(),
      ParseError::TimingBackwards
    );
    // Zero-length meetings are allowed.
    assert!(validate_meeting("Meeting", "23-03-2025 1200-1200", now()).is_ok());
  }

  #[test]
  fn invalid_date_reported_before_past_check() {
    assert_eq!(
      validate_meeting("Meeting", "30-02-1999 1400-1500", now()).unwrap_err(),
      ParseError::InvalidDateTime
    );
  }
}
