//! Test fixtures for module contacts
//!
//! Builders and ready-made persons that let tests describe only the fields
//! they care about.

pub mod person_builder;
pub mod typical_persons;

pub use person_builder::PersonBuilder;
