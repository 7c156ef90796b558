//! Fluent builder for `Person` test fixtures
//!
//! Every field starts from a sensible default so a test only spells out the
//! fields it cares about:
//!
//! ```
//! use module_contacts::testutil::PersonBuilder;
//!
//! let person = PersonBuilder::new()
//!     .with_name("Bob Choo")?
//!     .with_tags(&["friends"])?
//!     .with_empty_address()
//!     .build();
//!
//! assert_eq!(person.name().as_ref(), "Bob Choo");
//! assert!(person.address().is_none());
//! # Ok::<(), module_contacts::Error>(())
//! ```

use std::collections::HashSet;
use tracing::trace;

use crate::domain::module_role::{ModuleCode, ModuleRoleMap, RoleType};
use crate::domain::person::{Address, Email, Name, Person, Phone};
use crate::domain::sample_data::tag_set;
use crate::domain::tag::Tag;
use crate::error::Result;

pub const DEFAULT_NAME: &str = "Amy Bee";
pub const DEFAULT_PHONE: &str = "85355255";
pub const DEFAULT_EMAIL: &str = "amy@gmail.com";
pub const DEFAULT_ADDRESS: &str = "123, Jurong West Ave 6, #08-111";
pub const DEFAULT_MODULE_CODE: &str = "CS1101S";
pub const DEFAULT_ROLE_TYPE: RoleType = RoleType::Student;

/// Builder for creating `Person` fixtures
///
/// `with_*` methods that take raw strings validate them through the value
/// object constructors and propagate any failure unchanged. A failed call
/// leaves every staged field as it was, so the builder stays usable. The
/// build methods borrow the builder, so one builder can produce several
/// persons.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PersonBuilder {
    name: Name,
    phone: Phone,
    email: Email,
    address: Option<Address>,
    tags: HashSet<Tag>,
    module_role_map: ModuleRoleMap,
}

fn default_module_role_map() -> ModuleRoleMap {
    let module_code = ModuleCode::try_new(DEFAULT_MODULE_CODE.to_string())
        .expect("Default module code is valid");
    ModuleRoleMap::single(module_code, DEFAULT_ROLE_TYPE)
}

impl PersonBuilder {
    /// Create a builder holding the default details
    pub fn new() -> Self {
        Self {
            name: Name::try_new(DEFAULT_NAME.to_string()).expect("Default name is valid"),
            phone: Phone::try_new(DEFAULT_PHONE.to_string()).expect("Default phone is valid"),
            email: Email::try_new(DEFAULT_EMAIL.to_string()).expect("Default email is valid"),
            address: Some(
                Address::try_new(DEFAULT_ADDRESS.to_string()).expect("Default address is valid"),
            ),
            tags: HashSet::new(),
            module_role_map: default_module_role_map(),
        }
    }

    /// Create a builder initialized with the data of `person`
    pub fn from_person(person: &Person) -> Self {
        Self {
            name: person.name().clone(),
            phone: person.phone().clone(),
            email: person.email().clone(),
            address: person.address().cloned(),
            tags: person.tags().clone(),
            module_role_map: person.module_role_map().clone(),
        }
    }

    /// Set the name
    pub fn with_name(&mut self, name: &str) -> Result<&mut Self> {
        self.name = Name::try_new(name.to_string())?;
        Ok(self)
    }

    /// Replace the whole tag set with the parsed `tags`
    ///
    /// An empty slice clears the tags.
    pub fn with_tags(&mut self, tags: &[&str]) -> Result<&mut Self> {
        self.tags = tag_set(tags)?;
        Ok(self)
    }

    /// Reset the module role map to the single default entry
    pub fn with_default_module_role_map(&mut self) -> &mut Self {
        self.module_role_map = default_module_role_map();
        self
    }

    /// Replace the module role map with exactly one entry
    pub fn with_module_role(&mut self, module_code: ModuleCode, role_type: RoleType) -> &mut Self {
        self.module_role_map = ModuleRoleMap::single(module_code, role_type);
        self
    }

    /// Replace the module role map by pairing `module_codes` with `role_types`
    /// positionally
    pub fn with_module_role_map(
        &mut self,
        module_codes: &[ModuleCode],
        role_types: &[RoleType],
    ) -> Result<&mut Self> {
        self.module_role_map = ModuleRoleMap::from_pairs(module_codes, role_types)?;
        Ok(self)
    }

    /// Set the address
    pub fn with_address(&mut self, address: &str) -> Result<&mut Self> {
        self.address = Some(Address::try_new(address.to_string())?);
        Ok(self)
    }

    /// Clear the address
    pub fn with_empty_address(&mut self) -> &mut Self {
        self.address = None;
        self
    }

    /// Set the phone number
    pub fn with_phone(&mut self, phone: &str) -> Result<&mut Self> {
        self.phone = Phone::try_new(phone.to_string())?;
        Ok(self)
    }

    /// Set the email
    pub fn with_email(&mut self, email: &str) -> Result<&mut Self> {
        self.email = Email::try_new(email.to_string())?;
        Ok(self)
    }

    /// Build the `Person`
    pub fn build(&self) -> Person {
        self.build_with_address(self.address.clone())
    }

    /// Build the `Person` without an address, whatever address is staged
    pub fn build_empty_address_person(&self) -> Person {
        self.build_with_address(None)
    }

    fn build_with_address(&self, address: Option<Address>) -> Person {
        trace!(name = %self.name, has_address = address.is_some(), "Building person fixture");
        Person::new(
            self.name.clone(),
            self.phone.clone(),
            self.email.clone(),
            address,
            self.tags.clone(),
            self.module_role_map.clone(),
        )
    }
}

impl Default for PersonBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl From<&Person> for PersonBuilder {
    fn from(person: &Person) -> Self {
        Self::from_person(person)
    }
}
