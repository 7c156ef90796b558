//! Module codes, roles and the mapping between them
//!
//! A person can be involved in several modules at once, holding exactly one
//! role in each of them.

use nutype::nutype;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashMap};
use std::fmt;
use std::str::FromStr;
use tracing::debug;

use crate::error::{Error, Result};

/// University module code, normalized to upper case (e.g. "CS1101S")
#[nutype(
    sanitize(trim, uppercase),
    validate(not_empty, regex = r"^[A-Z]{2,3}[0-9]{4}[A-Z]?$"),
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
pub struct ModuleCode(String);

/// Role a person holds within a module
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RoleType {
    Student,
    Tutor,
    Professor,
}

impl RoleType {
    pub const ALL: [RoleType; 3] = [RoleType::Student, RoleType::Tutor, RoleType::Professor];
}

impl fmt::Display for RoleType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            RoleType::Student => "Student",
            RoleType::Tutor => "Tutor",
            RoleType::Professor => "Professor",
        };
        f.write_str(label)
    }
}

impl FromStr for RoleType {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "student" => Ok(RoleType::Student),
            "tutor" => Ok(RoleType::Tutor),
            "professor" => Ok(RoleType::Professor),
            _ => Err(Error::InvalidRoleType(s.to_string())),
        }
    }
}

/// Mapping from module code to the role held in that module
///
/// Each module code maps to exactly one role. Iteration and display are
/// ordered by module code.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ModuleRoleMap {
    roles: BTreeMap<ModuleCode, RoleType>,
}

impl ModuleRoleMap {
    pub fn new(roles: HashMap<ModuleCode, RoleType>) -> Self {
        roles.into_iter().collect()
    }

    /// Creates a map holding exactly one entry
    pub fn single(module_code: ModuleCode, role_type: RoleType) -> Self {
        Self {
            roles: BTreeMap::from([(module_code, role_type)]),
        }
    }

    /// Zips two parallel lists into a map
    ///
    /// Fails when the lists differ in length. A module code that appears more
    /// than once keeps the role paired with its last occurrence.
    pub fn from_pairs(module_codes: &[ModuleCode], role_types: &[RoleType]) -> Result<Self> {
        if module_codes.len() != role_types.len() {
            debug!(
                codes = module_codes.len(),
                roles = role_types.len(),
                "Rejected module role lists of unequal length"
            );
            return Err(Error::ModuleRoleLengthMismatch {
                codes: module_codes.len(),
                roles: role_types.len(),
            });
        }

        Ok(module_codes
            .iter()
            .cloned()
            .zip(role_types.iter().copied())
            .collect())
    }

    pub fn role_of(&self, module_code: &ModuleCode) -> Option<RoleType> {
        self.roles.get(module_code).copied()
    }

    pub fn len(&self) -> usize {
        self.roles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.roles.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&ModuleCode, RoleType)> {
        self.roles.iter().map(|(code, role)| (code, *role))
    }
}

impl FromIterator<(ModuleCode, RoleType)> for ModuleRoleMap {
    fn from_iter<I: IntoIterator<Item = (ModuleCode, RoleType)>>(iter: I) -> Self {
        Self {
            roles: iter.into_iter().collect(),
        }
    }
}

impl fmt::Display for ModuleRoleMap {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let entries: Vec<String> = self
            .iter()
            .map(|(code, role)| format!("{code} ({role})"))
            .collect();
        f.write_str(&entries.join(", "))
    }
}
