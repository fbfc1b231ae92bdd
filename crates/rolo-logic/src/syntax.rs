//! Argument prefixes recognised on the command line.

use std::fmt;

/// A literal marker such as `n/` that introduces a named argument.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Prefix(&'static str);

impl Prefix {
  pub const fn new(literal: &'static str) -> Self { Self(literal) }

  pub fn as_str(&self) -> &'static str { self.0 }
}

impl fmt::Display for Prefix {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result { f.write_str(self.0) }
}

pub const PREFIX_NAME: Prefix = Prefix::new("n/");
pub const PREFIX_PHONE: Prefix = Prefix::new("p/");
pub const PREFIX_EMAIL: Prefix = Prefix::new("e/");
pub const PREFIX_ADDRESS: Prefix = Prefix::new("a/");
pub const PREFIX_TAG: Prefix = Prefix::new("t/");
pub const PREFIX_REMARK: Prefix = Prefix::new("r/");
pub const PREFIX_MEETING: Prefix = Prefix::new("m/");
pub const PREFIX_TIME: Prefix = Prefix::new("time/");
