use crate::{
  command::{EditCommand, edit::USAGE},
  descriptor::EditPersonDescriptor,
  error::ParseError,
  field::{parse_address, parse_email, parse_name, parse_phone, parse_tags_for_edit},
  syntax::{PREFIX_ADDRESS, PREFIX_EMAIL, PREFIX_NAME, PREFIX_PHONE, PREFIX_TAG, Prefix},
  tokenize::{ArgMap, tokenize},
};

/// A single-valued field counts as given only when it has a value; a bare
/// `n/` is ignored.
fn given(map: &ArgMap, prefix: Prefix) -> Option<&str> {
  map.value(prefix).filter(|v| !v.is_empty())
}

/// `edit NAME [n/NAME] [p/PHONE] [e/EMAIL] [a/ADDRESS] [t/TAG]...`
pub fn parse_edit(args: &str) -> Result<EditCommand, ParseError> {
  let map = tokenize(
    args,
    &[PREFIX_NAME, PREFIX_PHONE, PREFIX_EMAIL, PREFIX_ADDRESS, PREFIX_TAG],
  );

  if map.preamble().is_empty() {
    return Err(ParseError::InvalidFormat(USAGE));
  }

  let mut builder = EditPersonDescriptor::builder();
  if let Some(raw) = given(&map, PREFIX_NAME) {
    builder = builder.name(parse_name(raw)?);
  }
  if let Some(raw) = given(&map, PREFIX_PHONE) {
    builder = builder.phone(parse_phone(raw)?);
  }
  if let Some(raw) = given(&map, PREFIX_EMAIL) {
    builder = builder.email(parse_email(raw)?);
  }
  if let Some(raw) = given(&map, PREFIX_ADDRESS) {
    builder = builder.address(parse_address(raw)?);
  }
  if let Some(tags) = parse_tags_for_edit(map.all_values(PREFIX_TAG))? {
    builder = builder.tags(&tags);
  }

  let descriptor = builder.build();
  if !descriptor.is_any_field_edited() {
    return Err(ParseError::NotEdited);
  }
  Ok(EditCommand::new(map.preamble(), descriptor))
}
