use nutype::nutype;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fmt;

use crate::domain::module_role::ModuleRoleMap;
use crate::domain::tag::Tag;

/// A person's name
#[nutype(
    sanitize(trim),
    validate(not_empty, regex = r"^[A-Za-z0-9][A-Za-z0-9 ]*$"),
    derive(
        Debug,
        Clone,
        PartialEq,
        Eq,
        Hash,
        PartialOrd,
        Ord,
        Serialize,
        Deserialize,
        AsRef,
        Display
    )
)]
pub struct Name(String);

/// A person's phone number
#[nutype(
    sanitize(trim),
    validate(regex = r"^[0-9]{3,}$"),
    derive(
        Debug,
        Clone,
        PartialEq,
        Eq,
        Hash,
        Serialize,
        Deserialize,
        AsRef,
        Display
    )
)]
pub struct Phone(String);

/// A person's email address
#[nutype(
    sanitize(trim),
    validate(
        regex = r"^[A-Za-z0-9]([A-Za-z0-9+_.-]*[A-Za-z0-9])?@([A-Za-z0-9]([A-Za-z0-9-]*[A-Za-z0-9])?\.)*[A-Za-z0-9][A-Za-z0-9-]*[A-Za-z0-9]$"
    ),
    derive(
        Debug,
        Clone,
        PartialEq,
        Eq,
        Hash,
        Serialize,
        Deserialize,
        AsRef,
        Display
    )
)]
pub struct Email(String);

/// A person's address
///
/// Any value is accepted as long as it does not start with whitespace.
#[nutype(
    validate(predicate = |address| address.chars().next().is_some_and(|c| !c.is_whitespace())),
    derive(
        Debug,
        Clone,
        PartialEq,
        Eq,
        Hash,
        Serialize,
        Deserialize,
        AsRef,
        Display
    )
)]
pub struct Address(String);

/// A contact in the module contact list
///
/// Persons are immutable once constructed. Two persons are equal when every
/// field is equal; [`Person::is_same_person`] is the weaker notion used to
/// detect duplicates.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Person {
    name: Name,
    phone: Phone,
    email: Email,
    address: Option<Address>,
    tags: HashSet<Tag>,
    module_role_map: ModuleRoleMap,
}

impl Person {
    pub fn new(
        name: Name,
        phone: Phone,
        email: Email,
        address: Option<Address>,
        tags: HashSet<Tag>,
        module_role_map: ModuleRoleMap,
    ) -> Self {
        Self {
            name,
            phone,
            email,
            address,
            tags,
            module_role_map,
        }
    }

    pub fn name(&self) -> &Name {
        &self.name
    }

    pub fn phone(&self) -> &Phone {
        &self.phone
    }

    pub fn email(&self) -> &Email {
        &self.email
    }

    pub fn address(&self) -> Option<&Address> {
        self.address.as_ref()
    }

    pub fn tags(&self) -> &HashSet<Tag> {
        &self.tags
    }

    pub fn module_role_map(&self) -> &ModuleRoleMap {
        &self.module_role_map
    }

    /// Returns true if both persons have the same name
    pub fn is_same_person(&self, other: &Person) -> bool {
        self.name == other.name
    }
}

impl fmt::Display for Person {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}; Phone: {}; Email: {}",
            self.name, self.phone, self.email
        )?;
        if let Some(address) = &self.address {
            write!(f, "; Address: {address}")?;
        }
        let mut tags: Vec<&str> = self.tags.iter().map(AsRef::as_ref).collect();
        tags.sort_unstable();
        write!(f, "; Tags: [{}]", tags.join(", "))?;
        write!(f, "; Modules: {}", self.module_role_map)
    }
}
