use crate::{
  command::{RemarkCommand, remark::USAGE},
  error::ParseError,
  field,
  syntax::PREFIX_REMARK,
  tokenize::tokenize,
};

/// `remark NAME r/[REMARK]`; an empty remark clears it.
pub fn parse_remark(args: &str) -> Result<RemarkCommand, ParseError> {
  let map = tokenize(args, &[PREFIX_REMARK]);

  let raw = match map.value(PREFIX_REMARK) {
    Some(raw) if !map.preamble().is_empty() => raw,
    _ => return Err(ParseError::InvalidFormat(USAGE)),
  };

  let remark = if raw.is_empty() {
    None
  } else {
    Some(field::parse_remark(raw)?)
  };
  Ok(RemarkCommand::new(map.preamble(), remark))
}

#[cfg(test)]
mod tests {
  use rolo_core::person::Remark;

  use super::*;

  #[test]
  fn sets_remark() {
    assert_eq!(
      parse_remark("Alex Yeoh r/Likes to swim.").unwrap(),
      RemarkCommand::new("Alex Yeoh", Some(Remark::new("Likes to swim.").unwrap()))
    );
  }

  #[test]
  fn empty_remark_clears() {
    assert_eq!(parse_remark("Alex r/").unwrap(), RemarkCommand::new("Alex", None));
  }

  #[test]
  fn remark_keeps_last_value() {
    let command = parse_remark("Alex r/first r/ second ").unwrap();
    assert_eq!(command, RemarkCommand::new("Alex", Some(Remark::new("second").unwrap())));
  }

  #[test]
  fn missing_prefix_or_target() {
    assert_eq!(parse_remark("Alex").unwrap_err(), ParseError::InvalidFormat(USAGE));
    assert_eq!(parse_remark("r/hello").unwrap_err(), ParseError::InvalidFormat(USAGE));
  }
}
