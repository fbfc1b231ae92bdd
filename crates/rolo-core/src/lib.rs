//! Core types and trait definitions for the rolo contact manager.
//!
//! This crate holds the person model, the field value objects and their
//! format rules, and the [`store::PersonStore`] contract that the command
//! interpreter reads from and writes to. It knows nothing about command
//! syntax; that lives in `rolo-logic`.

pub mod clock;
pub mod error;
pub mod meeting;
pub mod person;
pub mod store;

pub use error::{Error, Result};
