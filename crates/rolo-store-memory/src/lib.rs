//! In-memory backend for the rolo address book.
//!
//! Holds every person in a `Vec` in insertion order plus the active
//! [`PersonFilter`](rolo_core::store::PersonFilter). Nothing is written back to
//! disk; an optional JSON seed can populate the book at startup.

mod store;

pub mod error;

pub use error::{Error, Result};
pub use store::AddressBook;
