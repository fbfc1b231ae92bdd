//! Field value parsers: one raw token in, one validated value out.

use std::collections::BTreeSet;

use chrono::{NaiveDate, NaiveTime};
use rolo_core::{
  meeting::{INPUT_DATE_FORMAT, TIME_FORMAT},
  person::{Address, Email, Name, Phone, Remark, Tag},
};

use crate::error::ParseError;

type Result<T> = std::result::Result<T, ParseError>;

pub fn parse_name(raw: &str) -> Result<Name> { Ok(Name::new(raw)?) }

pub fn parse_phone(raw: &str) -> Result<Phone> { Ok(Phone::new(raw)?) }

pub fn parse_email(raw: &str) -> Result<Email> { Ok(Email::new(raw)?) }

pub fn parse_address(raw: &str) -> Result<Address> { Ok(Address::new(raw)?) }

pub fn parse_remark(raw: &str) -> Result<Remark> { Ok(Remark::new(raw)?) }

pub fn parse_tag(raw: &str) -> Result<Tag> { Ok(Tag::new(raw)?) }

/// Parse every value into a set; duplicates collapse.
pub fn parse_tags<S: AsRef<str>>(raws: &[S]) -> Result<BTreeSet<Tag>> {
  raws.iter().map(|raw| parse_tag(raw.as_ref())).collect()
}

/// Tags as given to `edit`: no `t/` at all leaves tags alone (`None`), a
/// single empty `t/` clears them (`Some` of an empty set).
pub fn parse_tags_for_edit<S: AsRef<str>>(raws: &[S]) -> Result<Option<BTreeSet<Tag>>> {
  match raws {
    [] => Ok(None),
    [only] if only.as_ref().trim().is_empty() => Ok(Some(BTreeSet::new())),
    _ => parse_tags(raws).map(Some),
  }
}

/// `dd-MM-yyyy`, exactly two-two-four digits.
pub fn parse_date(raw: &str) -> Result<NaiveDate> {
  let raw = raw.trim();
  let shape_ok = raw.len() == 10
    && raw.char_indices().all(|(i, c)| match i {
      2 | 5 => c == '-',
      _ => c.is_ascii_digit(),
    });
  if !shape_ok {
    return Err(ParseError::InvalidDateTime);
  }
  NaiveDate::parse_from_str(raw, INPUT_DATE_FORMAT).map_err(|_| ParseError::InvalidDateTime)
}

/// `HHmm` on a 24-hour clock; `2400` is not a time.
pub fn parse_time(raw: &str) -> Result<NaiveTime> {
  let raw = raw.trim();
  if raw.len() != 4 || !raw.bytes().all(|b| b.is_ascii_digit()) {
    return Err(ParseError::InvalidDateTime);
  }
  NaiveTime::parse_from_str(raw, TIME_FORMAT).map_err(|_| ParseError::InvalidDateTime)
}
