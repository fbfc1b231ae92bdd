//! `remark` — set or clear a person's remark.

use rolo_core::{
  person::{Person, Remark},
  store::{NameMatch, PersonStore},
};

use super::{CommandResult, replace, resolve};
use crate::error::CommandError;

pub const WORD: &str = "remark";

pub const USAGE: &str = "remark: Edits the remark of the person identified by name. Existing \
                         remark will be overwritten by the input; an empty remark removes \
                         it.\nParameters: NAME r/[REMARK]\nExample: remark Alex Yeoh r/Likes \
                         to swim.";

pub const ADD_SUCCESS: &str = "Added remark to Person: ";
pub const DELETE_SUCCESS: &str = "Removed remark from Person: ";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RemarkCommand {
  /// Name of the person, matched ignoring case.
  pub target: String,
  pub remark: Option<Remark>,
}

impl RemarkCommand {
  pub fn new(target: impl Into<String>, remark: Option<Remark>) -> Self {
    Self {
      target: target.into(),
      remark,
    }
  }

  pub fn execute<S: PersonStore>(self, store: &mut S) -> Result<CommandResult, CommandError> {
    let original = resolve(store, &self.target, NameMatch::IgnoreCase)?;
    let prefix = if self.remark.is_some() {
      ADD_SUCCESS
    } else {
      DELETE_SUCCESS
    };
    let edited = Person {
      remark: self.remark,
      ..original.clone()
    };

    let feedback = format!("{prefix}{edited}");
    replace(store, &original, edited)?;
    tracing::info!(person = %self.target, "updated remark");
    Ok(CommandResult::new(feedback))
  }
}
