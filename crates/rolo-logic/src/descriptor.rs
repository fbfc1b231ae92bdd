//! Sparse patches over a [`Person`].
//!
//! An [`EditPersonDescriptor`] holds one optional slot per editable field.
//! It is assembled once through [`EditPersonDescriptorBuilder`] and is
//! read-only afterwards.

use std::collections::BTreeSet;

use rolo_core::person::{Address, Email, Name, Person, Phone, Tag};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EditPersonDescriptor {
  name:    Option<Name>,
  phone:   Option<Phone>,
  email:   Option<Email>,
  address: Option<Address>,
  /// Replaces the whole tag set when present.
  tags:    Option<BTreeSet<Tag>>,
}

impl EditPersonDescriptor {
  pub fn builder() -> EditPersonDescriptorBuilder { EditPersonDescriptorBuilder::default() }

  pub fn name(&self) -> Option<&Name> { self.name.as_ref() }

  pub fn phone(&self) -> Option<&Phone> { self.phone.as_ref() }

  pub fn email(&self) -> Option<&Email> { self.email.as_ref() }

  pub fn address(&self) -> Option<&Address> { self.address.as_ref() }

  pub fn tags(&self) -> Option<&BTreeSet<Tag>> { self.tags.as_ref() }

  pub fn is_any_field_edited(&self) -> bool {
    self.name.is_some()
      || self.phone.is_some()
      || self.email.is_some()
      || self.address.is_some()
      || self.tags.is_some()
  }

  /// Overlay the present fields onto `original`.
  ///
  /// Company, priority, starred flag, remark and meeting always come from
  /// `original`.
  pub fn apply(&self, original: &Person) -> Person {
    let original = original.clone();
    Person {
      name: self.name.clone().unwrap_or(original.name),
      phone: self.phone.clone().unwrap_or(original.phone),
      email: self.email.clone().unwrap_or(original.email),
      address: self.address.clone().unwrap_or(original.address),
      tags: self.tags.clone().unwrap_or(original.tags),
      company: original.company,
      priority: original.priority,
      starred: original.starred,
      remark: original.remark,
      meeting: original.meeting,
    }
  }
}

#[derive(Debug, Clone, Default)]
pub struct EditPersonDescriptorBuilder {
  inner: EditPersonDescriptor,
}

impl EditPersonDescriptorBuilder {
  pub fn name(mut self, name: Name) -> Self {
    self.inner.name = Some(name);
    self
  }

  pub fn phone(mut self, phone: Phone) -> Self {
    self.inner.phone = Some(phone);
    self
  }

  pub fn email(mut self, email: Email) -> Self {
    self.inner.email = Some(email);
    self
  }

  pub fn address(mut self, address: Address) -> Self {
    self.inner.address = Some(address);
    self
  }

  /// Copies `tags` into a fresh set.
  pub fn tags<'a>(mut self, tags: impl IntoIterator<Item = &'a Tag>) -> Self {
    self.inner.tags = Some(tags.into_iter().cloned().collect());
    self
  }

  pub fn build(self) -> EditPersonDescriptor { self.inner }
}
