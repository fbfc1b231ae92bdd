//! `edit` — overwrite selected fields of a person.

use rolo_core::store::{NameMatch, PersonStore};

use super::{CommandResult, replace, resolve};
use crate::{descriptor::EditPersonDescriptor, error::CommandError};

pub const WORD: &str = "edit";

pub const USAGE: &str = "edit: Edits the details of the person identified by the name used in \
                         the displayed person list. Existing values will be overwritten by the \
                         input values.\nParameters: NAME [n/NAME] [p/PHONE] [e/EMAIL] \
                         [a/ADDRESS] [t/TAG]...\nExample: edit Alex Tan n/Alex p/91234567";

pub const MESSAGE_SUCCESS: &str = "Edited Person: ";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditCommand {
  /// Name of the person to edit, matched exactly.
  pub target:     String,
  pub descriptor: EditPersonDescriptor,
}

impl EditCommand {
  pub fn new(target: impl Into<String>, descriptor: EditPersonDescriptor) -> Self {
    Self {
      target: target.into(),
      descriptor,
    }
  }

  pub fn execute<S: PersonStore>(self, store: &mut S) -> Result<CommandResult, CommandError> {
    let original = resolve(store, &self.target, NameMatch::Exact)?;
    let edited = self.descriptor.apply(&original);

    if !original.is_same_person(&edited) && store.has_person(&edited) {
      tracing::warn!(person = %self.target, to = %edited.name, "edit would duplicate a person");
      return Err(CommandError::DuplicatePerson);
    }

    let feedback = format!("{MESSAGE_SUCCESS}{edited}");
    replace(store, &original, edited)?;
    tracing::info!(person = %self.target, "edited person");
    Ok(CommandResult::new(feedback))
  }
}
