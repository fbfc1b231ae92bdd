//! Reference time zone for "now" comparisons.
//!
//! Scheduling rules compare against the wall-clock time of one fixed zone,
//! whatever zone the host runs in. Callers read [`ReferenceZone::now`] once
//! per command and pass the value down.

use chrono::{DateTime, FixedOffset, NaiveDateTime, Offset, Utc};

use crate::error::{Error, Result};

/// Hours east of UTC used when no offset is configured (UTC+08:00).
pub const DEFAULT_UTC_OFFSET_HOURS: i32 = 8;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReferenceZone {
  offset: FixedOffset,
}

impl ReferenceZone {
  pub fn from_utc_offset_hours(hours: i32) -> Result<Self> {
    let offset = hours
      .checked_mul(3600)
      .and_then(FixedOffset::east_opt)
      .ok_or(Error::InvalidUtcOffset(hours))?;
    Ok(Self { offset })
  }

  /// Local wall-clock time of `instant` in this zone.
  pub fn localize(&self, instant: DateTime<Utc>) -> NaiveDateTime {
    instant.with_timezone(&self.offset).naive_local()
  }

  pub fn now(&self) -> NaiveDateTime { self.localize(Utc::now()) }
}

impl Default for ReferenceZone {
  fn default() -> Self {
    Self::from_utc_offset_hours(DEFAULT_UTC_OFFSET_HOURS)
      .unwrap_or(Self { offset: Utc.fix() })
  }
}
