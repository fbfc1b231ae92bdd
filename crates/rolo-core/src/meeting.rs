//! Meeting — the single upcoming appointment a person may have.
//!
//! A meeting is either [`Meeting::Unscheduled`] or a fully populated
//! [`ScheduledMeeting`]. Validation against the current time happens when a
//! command schedules one (see `rolo-logic`); this module only models and
//! renders the value.

use std::{fmt, str::FromStr, sync::LazyLock};

use chrono::{NaiveDate, NaiveTime};
use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Date layout accepted on the command line, e.g. `23-03-2025`.
pub const INPUT_DATE_FORMAT: &str = "%d-%m-%Y";
/// 24-hour clock layout, e.g. `1400`.
pub const TIME_FORMAT: &str = "%H%M";
/// Date layout used when a meeting is rendered, e.g. `23 March 2025`.
pub const RENDERED_DATE_FORMAT: &str = "%-d %B %Y";

static RENDERED_RE: LazyLock<Regex> = LazyLock::new(|| {
  Regex::new(
    r"^(?P<desc>.+): (?P<date>\d{1,2} [A-Za-z]+ \d{4}) \((?P<start>\d{4}) - (?P<end>\d{4})\)$",
  )
  .unwrap()
});

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ScheduledMeeting {
  pub description: String,
  pub date:        NaiveDate,
  pub start:       NaiveTime,
  pub end:         NaiveTime,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum Meeting {
  /// No meeting; renders as the empty string.
  #[default]
  Unscheduled,
  Scheduled(ScheduledMeeting),
}

impl Meeting {
  pub fn scheduled(
    description: impl Into<String>,
    date: NaiveDate,
    start: NaiveTime,
    end: NaiveTime,
  ) -> Self {
    Self::Scheduled(ScheduledMeeting {
      description: description.into(),
      date,
      start,
      end,
    })
  }

  pub fn is_scheduled(&self) -> bool { matches!(self, Self::Scheduled(_)) }

  pub fn as_scheduled(&self) -> Option<&ScheduledMeeting> {
    match self {
      Self::Scheduled(m) => Some(m),
      Self::Unscheduled => None,
    }
  }
}

impl fmt::Display for Meeting {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      Self::Unscheduled => Ok(()),
      Self::Scheduled(m) => write!(
        f,
        "{}: {} ({} - {})",
        m.description,
        m.date.format(RENDERED_DATE_FORMAT),
        m.start.format(TIME_FORMAT),
        m.end.format(TIME_FORMAT),
      ),
    }
  }
}

/// Parses the rendered form back into a meeting. The empty string is
/// `Unscheduled`. No check against the current time is made here.
impl FromStr for Meeting {
  type Err = Error;

  fn from_str(s: &str) -> Result<Self> {
    let s = s.trim();
    if s.is_empty() {
      return Ok(Self::Unscheduled);
    }
    let malformed = || Error::MalformedMeeting(s.to_string());
    let caps = RENDERED_RE.captures(s).ok_or_else(malformed)?;

    let date = NaiveDate::parse_from_str(&caps["date"], "%d %B %Y")
      .map_err(|_| malformed())?;
    let start = NaiveTime::parse_from_str(&caps["start"], TIME_FORMAT)
      .map_err(|_| malformed())?;
    let end = NaiveTime::parse_from_str(&caps["end"], TIME_FORMAT)
      .map_err(|_| malformed())?;

    Ok(Self::scheduled(caps["desc"].trim(), date, start, end))
  }
}

impl TryFrom<String> for Meeting {
  type Error = Error;

  fn try_from(s: String) -> Result<Self> { s.parse() }
}

impl From<Meeting> for String {
  fn from(value: Meeting) -> Self { value.to_string() }
}
