//! [`AddressBook`] — a `Vec`-backed [`PersonStore`].

use rolo_core::{
  person::Person,
  store::{PersonFilter, PersonStore},
};

use crate::error::{Error, Result};

/// All persons, unique by [`Person::is_same_person`], plus the current view
/// filter.
#[derive(Debug, Clone, Default)]
pub struct AddressBook {
  persons: Vec<Person>,
  filter:  PersonFilter,
}

impl AddressBook {
  pub fn new() -> Self { Self::default() }

  /// Build a book from `persons`, rejecting duplicate identities.
  pub fn from_persons(persons: impl IntoIterator<Item = Person>) -> Result<Self> {
    let mut book = Self::new();
    for person in persons {
      book.add_person(person)?;
    }
    Ok(book)
  }

  /// Parse a JSON array of persons.
  pub fn from_json(input: &str) -> Result<Self> {
    let persons: Vec<Person> = serde_json::from_str(input)?;
    let book = Self::from_persons(persons)?;
    tracing::debug!(count = book.persons.len(), "loaded address book seed");
    Ok(book)
  }

  pub fn add_person(&mut self, person: Person) -> Result<()> {
    if self.has_person(&person) {
      return Err(rolo_core::Error::DuplicatePerson(person.name.to_string()).into());
    }
    self.persons.push(person);
    Ok(())
  }

  /// Every stored person, ignoring the filter.
  pub fn persons(&self) -> &[Person] { &self.persons }

  pub fn filter(&self) -> PersonFilter { self.filter }

  pub fn len(&self) -> usize { self.persons.len() }

  pub fn is_empty(&self) -> bool { self.persons.is_empty() }
}

impl PersonStore for AddressBook {
  type Error = Error;

  fn filtered_persons(&self) -> Vec<&Person> {
    self
      .persons
      .iter()
      .filter(|p| self.filter.matches(p))
      .collect()
  }

  fn has_person(&self, person: &Person) -> bool {
    self.persons.iter().any(|p| p.is_same_person(person))
  }

  fn set_person(&mut self, target: &Person, edited: Person) -> Result<()> {
    let index = self
      .persons
      .iter()
      .position(|p| p == target)
      .ok_or_else(|| rolo_core::Error::PersonNotFound(target.name.to_string()))?;

    if !target.is_same_person(&edited) && self.has_person(&edited) {
      return Err(rolo_core::Error::DuplicatePerson(edited.name.to_string()).into());
    }

    tracing::debug!(from = %target.name, to = %edited.name, "replacing person");
    self.persons[index] = edited;
    Ok(())
  }

  fn update_filter(&mut self, filter: PersonFilter) { self.filter = filter; }
}
