//! Error types for `rolo-core`.
//!
//! The `Display` text of every field variant is the user-facing constraint
//! message shown when a command supplies a malformed value.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
  #[error(
    "Names should only contain alphanumeric characters and spaces, and it \
     should not be blank"
  )]
  InvalidName,

  #[error(
    "Phone numbers should only contain numbers, and it should be at least 3 \
     digits long"
  )]
  InvalidPhone,

  #[error(
    "Emails should be of the format local-part@domain and adhere to the \
     following constraints:\n1. The local-part should only contain \
     alphanumeric characters and these special characters, excluding the \
     parentheses, (+_.-). The local-part may not start or end with any \
     special characters.\n2. This is followed by a '@' and then a domain name. \
     The domain name is made up of domain labels separated by periods.\nThe \
     domain name must:\n    - end with a domain label at least 2 characters \
     long\n    - have each domain label start and end with alphanumeric \
     characters\n    - have each domain label consist of alphanumeric \
     characters, separated only by hyphens, if any."
  )]
  InvalidEmail,

  #[error("Addresses can take any values, and it should not be blank")]
  InvalidAddress,

  #[error("Tags names should be alphanumeric")]
  InvalidTag,

  #[error("Remarks can take any values, and it should not be blank")]
  InvalidRemark,

  #[error("Company names can take any values, and it should not be blank")]
  InvalidCompany,

  #[error("Priority should be one of: low, medium, high")]
  InvalidPriority,

  /// A stored meeting string that does not follow the rendered layout.
  #[error("malformed meeting record: {0:?}")]
  MalformedMeeting(String),

  #[error("UTC offset out of range: {0} hours")]
  InvalidUtcOffset(i32),

  #[error("person not found in the address book: {0}")]
  PersonNotFound(String),

  #[error("person already exists in the address book: {0}")]
  DuplicatePerson(String),
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
