//! Sample contacts used to seed an empty contact list
//!
//! Also hosts the small parsing helpers that turn raw strings into tag sets
//! and module role maps, shared by the sample data and the test fixtures.

use std::collections::HashSet;
use tracing::{debug, instrument};

use crate::domain::module_role::{ModuleCode, ModuleRoleMap, RoleType};
use crate::domain::person::{Address, Email, Name, Person, Phone};
use crate::domain::tag::Tag;
use crate::error::{Error, Result};

/// Parses every string into a [`Tag`]
///
/// The first invalid string aborts the whole conversion.
pub fn tag_set(tags: &[&str]) -> Result<HashSet<Tag>> {
    tags.iter()
        .map(|tag| Tag::try_new(tag.to_string()).map_err(Error::from))
        .collect()
}

/// Parses `(module code, role)` pairs into a [`ModuleRoleMap`]
pub fn module_role_map(entries: &[(&str, RoleType)]) -> Result<ModuleRoleMap> {
    entries
        .iter()
        .map(|(code, role)| -> Result<(ModuleCode, RoleType)> {
            Ok((ModuleCode::try_new(code.to_string())?, *role))
        })
        .collect()
}

struct SampleContact {
    name: &'static str,
    phone: &'static str,
    email: &'static str,
    address: Option<&'static str>,
    tags: &'static [&'static str],
    modules: &'static [(&'static str, RoleType)],
}

const SAMPLE_CONTACTS: &[SampleContact] = &[
    SampleContact {
        name: "Alex Yeoh",
        phone: "87438807",
        email: "alexyeoh@example.com",
        address: Some("Blk 30 Geylang Street 29, #06-40"),
        tags: &["friends"],
        modules: &[("CS1101S", RoleType::Student)],
    },
    SampleContact {
        name: "Bernice Yu",
        phone: "99272758",
        email: "berniceyu@example.com",
        address: Some("Blk 30 Lorong 3 Serangoon Gardens, #07-18"),
        tags: &["colleagues", "friends"],
        modules: &[("CS1101S", RoleType::Tutor), ("CS2103T", RoleType::Student)],
    },
    SampleContact {
        name: "Charlotte Oliveiro",
        phone: "93210283",
        email: "charlotte@example.com",
        address: Some("Blk 11 Ang Mo Kio Street 74, #11-04"),
        tags: &["neighbours"],
        modules: &[("MA1521", RoleType::Student)],
    },
    SampleContact {
        name: "David Li",
        phone: "91031282",
        email: "lidavid@example.com",
        address: Some("Blk 436 Serangoon Gardens Street 26, #16-43"),
        tags: &["family"],
        modules: &[("CS2103T", RoleType::Professor)],
    },
    SampleContact {
        name: "Irfan Ibrahim",
        phone: "92492021",
        email: "irfan@example.com",
        address: None,
        tags: &["classmates"],
        modules: &[("CS1101S", RoleType::Student), ("MA1521", RoleType::Student)],
    },
    SampleContact {
        name: "Roy Balakrishnan",
        phone: "92624417",
        email: "royb@example.com",
        address: Some("Blk 45 Aljunied Street 85, #11-31"),
        tags: &["colleagues"],
        modules: &[("CS2103T", RoleType::Tutor)],
    },
];

impl SampleContact {
    fn to_person(&self) -> Result<Person> {
        Ok(Person::new(
            Name::try_new(self.name.to_string())?,
            Phone::try_new(self.phone.to_string())?,
            Email::try_new(self.email.to_string())?,
            self.address
                .map(|address| Address::try_new(address.to_string()))
                .transpose()?,
            tag_set(self.tags)?,
            module_role_map(self.modules)?,
        ))
    }
}

/// Builds the sample contacts
#[instrument]
pub fn sample_persons() -> Result<Vec<Person>> {
    let persons = SAMPLE_CONTACTS
        .iter()
        .map(SampleContact::to_person)
        .collect::<Result<Vec<_>>>()?;
    debug!(count = persons.len(), "Built sample contacts");
    Ok(persons)
}
