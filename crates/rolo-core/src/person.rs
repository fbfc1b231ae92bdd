//! Person — the record held by the address book — and its field value
//! objects.
//!
//! Every field type validates on construction, so a `Person` can only ever be
//! assembled from well-formed parts. Records are never edited in place: an
//! update builds a new `Person` and swaps it into the store.

use std::{collections::BTreeSet, fmt, str::FromStr, sync::LazyLock};

use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::{
  error::{Error, Result},
  meeting::Meeting,
};

// ─── Format rules ────────────────────────────────────────────────────────────

static NAME_RE: LazyLock<Regex> =
  LazyLock::new(|| Regex::new(r"^[A-Za-z0-9][A-Za-z0-9 ]*$").unwrap());

static PHONE_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^[0-9]{3,}$").unwrap());

static EMAIL_RE: LazyLock<Regex> = LazyLock::new(|| {
  let local = r"[A-Za-z0-9]+(?:[+_.-][A-Za-z0-9]+)*";
  let label = r"[A-Za-z0-9](?:[A-Za-z0-9-]*[A-Za-z0-9])?";
  let last = r"[A-Za-z0-9][A-Za-z0-9-]*[A-Za-z0-9]";
  Regex::new(&format!(r"^{local}@(?:{label}\.)*{last}$")).unwrap()
});

static TAG_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^[A-Za-z0-9]+$").unwrap());

fn is_blank(s: &str) -> bool { s.trim().is_empty() }

// ─── Validated text fields ───────────────────────────────────────────────────

/// Declares a trimmed, validated string newtype.
///
/// The generated type trims its input, rejects it with `$err` when `$valid`
/// returns false, and (de)serialises as a plain string.
macro_rules! text_field {
  ($(#[$meta:meta])* $ty:ident, $err:expr, $valid:expr) => {
    $(#[$meta])*
    #[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
    #[serde(try_from = "String", into = "String")]
    pub struct $ty(String);

    impl $ty {
      pub fn new(raw: &str) -> Result<Self> {
        let trimmed = raw.trim();
        let valid: fn(&str) -> bool = $valid;
        if valid(trimmed) { Ok(Self(trimmed.to_string())) } else { Err($err) }
      }

      pub fn as_str(&self) -> &str { &self.0 }
    }

    impl FromStr for $ty {
      type Err = Error;

      fn from_str(s: &str) -> Result<Self> { Self::new(s) }
    }

    impl TryFrom<String> for $ty {
      type Error = Error;

      fn try_from(s: String) -> Result<Self> { Self::new(&s) }
    }

    impl From<$ty> for String {
      fn from(value: $ty) -> Self { value.0 }
    }

    impl fmt::Display for $ty {
      fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result { f.write_str(&self.0) }
    }
  };
}

text_field!(
  /// A person's name; also the key commands use to find them.
  Name,
  Error::InvalidName,
  |s| NAME_RE.is_match(s)
);

text_field!(
  /// A phone number of at least three digits.
  Phone,
  Error::InvalidPhone,
  |s| PHONE_RE.is_match(s)
);

text_field!(Email, Error::InvalidEmail, |s| EMAIL_RE.is_match(s));

text_field!(Address, Error::InvalidAddress, |s| !is_blank(s));

text_field!(
  /// A single alphanumeric label. A person's tags form a set.
  Tag,
  Error::InvalidTag,
  |s| TAG_RE.is_match(s)
);

text_field!(
  /// Free-form note attached to a person.
  Remark,
  Error::InvalidRemark,
  |s| !is_blank(s)
);

text_field!(Company, Error::InvalidCompany, |s| !is_blank(s));

impl Name {
  /// Case-insensitive comparison against a raw lookup key.
  pub fn eq_ignore_case(&self, other: &str) -> bool {
    self.0.to_lowercase() == other.trim().to_lowercase()
  }
}

// ─── Priority ────────────────────────────────────────────────────────────────

#[derive(
  Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
  #[default]
  Low,
  Medium,
  High,
}

impl FromStr for Priority {
  type Err = Error;

  fn from_str(s: &str) -> Result<Self> {
    match s.trim().to_lowercase().as_str() {
      "low" => Ok(Self::Low),
      "medium" => Ok(Self::Medium),
      "high" => Ok(Self::High),
      _ => Err(Error::InvalidPriority),
    }
  }
}

impl fmt::Display for Priority {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(match self {
      Self::Low => "low",
      Self::Medium => "medium",
      Self::High => "high",
    })
  }
}

// ─── Person ──────────────────────────────────────────────────────────────────

/// A contact. Identity is the [`Name`]; see [`Person::is_same_person`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Person {
  pub name:     Name,
  pub phone:    Phone,
  pub email:    Email,
  pub address:  Address,
  #[serde(default)]
  pub company:  Option<Company>,
  #[serde(default)]
  pub priority: Priority,
  #[serde(default)]
  pub starred:  bool,
  #[serde(default)]
  pub remark:   Option<Remark>,
  #[serde(default)]
  pub meeting:  Meeting,
  #[serde(default)]
  pub tags:     BTreeSet<Tag>,
}

impl Person {
  /// A person with only the required fields set; everything else defaults.
  pub fn new(name: Name, phone: Phone, email: Email, address: Address) -> Self {
    Self {
      name,
      phone,
      email,
      address,
      company: None,
      priority: Priority::default(),
      starred: false,
      remark: None,
      meeting: Meeting::default(),
      tags: BTreeSet::new(),
    }
  }

  /// Two records denote the same person when their names are equal. This is
  /// weaker than `==`, which compares every field.
  pub fn is_same_person(&self, other: &Person) -> bool { self.name == other.name }

  pub fn has_meeting(&self) -> bool { self.meeting.is_scheduled() }
}

impl fmt::Display for Person {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(
      f,
      "{}; Phone: {}; Email: {}; Address: {}",
      self.name, self.phone, self.email, self.address
    )?;
    if let Some(company) = &self.company {
      write!(f, "; Company: {company}")?;
    }
    write!(f, "; Priority: {}", self.priority)?;
    if self.starred {
      f.write_str("; Starred")?;
    }
    if let Some(remark) = &self.remark {
      write!(f, "; Remark: {remark}")?;
    }
    if self.meeting.is_scheduled() {
      write!(f, "; Meeting: {}", self.meeting)?;
    }
    f.write_str("; Tags: ")?;
    for tag in &self.tags {
      write!(f, "[{tag}]")?;
    }
    Ok(())
  }
}
