//! Module Contacts - contact management for university modules
//!
//! Tracks the people involved in a module (students, tutors, professors)
//! together with their contact details and tags, following type-driven
//! development principles.

pub mod config;
pub mod domain;
pub mod error;
pub mod telemetry;
#[cfg(any(test, feature = "test-support"))]
pub mod testutil;

pub use error::{Error, Result};
