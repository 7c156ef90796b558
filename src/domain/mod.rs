//! Domain types for module contacts
//!
//! This module contains the validated value objects and the `Person`
//! aggregate, following type-driven development principles: every field of a
//! person is parsed once at the boundary and is valid from then on.

pub mod module_role;
pub mod person;
pub mod sample_data;
pub mod tag;
pub mod test_data;
pub mod validation_constants;

pub use module_role::{ModuleCode, ModuleRoleMap, RoleType};
pub use person::{Address, Email, Name, Person, Phone};
pub use tag::Tag;
