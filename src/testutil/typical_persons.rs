//! Ready-made `Person` fixtures for tests
//!
//! The typical persons all have distinct names and cover the interesting
//! shapes a contact can take: tagged or not, with or without an address,
//! and enrolled in one or several modules.

use crate::domain::module_role::{ModuleCode, RoleType};
use crate::domain::person::Person;
use crate::testutil::person_builder::PersonBuilder;

fn module_code(raw: &str) -> ModuleCode {
    ModuleCode::try_new(raw.to_string()).expect("Fixture module code is valid")
}

fn fixture(builder: crate::error::Result<&mut PersonBuilder>) -> Person {
    builder.expect("Fixture details are valid").build()
}

pub fn alice() -> Person {
    fixture(
        PersonBuilder::new()
            .with_name("Alice Pauline")
            .and_then(|b| b.with_address("123, Jurong West Ave 6, #08-111"))
            .and_then(|b| b.with_email("alice@example.com"))
            .and_then(|b| b.with_phone("94351253"))
            .and_then(|b| b.with_tags(&["friends"])),
    )
}

pub fn benson() -> Person {
    fixture(
        PersonBuilder::new()
            .with_name("Benson Meier")
            .and_then(|b| b.with_address("311, Clementi Ave 2, #02-25"))
            .and_then(|b| b.with_email("johnd@example.com"))
            .and_then(|b| b.with_phone("98765432"))
            .and_then(|b| b.with_tags(&["owesMoney", "friends"]))
            .and_then(|b| {
                b.with_module_role_map(
                    &[module_code("CS1101S"), module_code("CS2103T")],
                    &[RoleType::Tutor, RoleType::Student],
                )
            }),
    )
}

pub fn carl() -> Person {
    fixture(
        PersonBuilder::new()
            .with_name("Carl Kurz")
            .and_then(|b| b.with_phone("95352563"))
            .and_then(|b| b.with_email("heinz@example.com"))
            .map(PersonBuilder::with_empty_address),
    )
}

pub fn daniel() -> Person {
    fixture(
        PersonBuilder::new()
            .with_name("Daniel Meier")
            .and_then(|b| b.with_phone("87652533"))
            .and_then(|b| b.with_email("cornelia@example.com"))
            .and_then(|b| b.with_address("10th street"))
            .and_then(|b| b.with_tags(&["friends"]))
            .map(|b| b.with_module_role(module_code("MA1521"), RoleType::Student)),
    )
}

pub fn elle() -> Person {
    fixture(
        PersonBuilder::new()
            .with_name("Elle Meyer")
            .and_then(|b| b.with_phone("94822240"))
            .and_then(|b| b.with_email("werner@example.com"))
            .and_then(|b| b.with_address("michegan ave")),
    )
}

pub fn fiona() -> Person {
    fixture(
        PersonBuilder::new()
            .with_name("Fiona Kunz")
            .and_then(|b| b.with_phone("94824270"))
            .and_then(|b| b.with_email("lydia@example.com"))
            .and_then(|b| b.with_address("little tokyo"))
            .map(|b| b.with_module_role(module_code("CS2103T"), RoleType::Professor)),
    )
}

pub fn george() -> Person {
    fixture(
        PersonBuilder::new()
            .with_name("George Best")
            .and_then(|b| b.with_phone("94824420"))
            .and_then(|b| b.with_email("anna@example.com"))
            .and_then(|b| b.with_address("4th street")),
    )
}

/// Not part of [`typical_persons`]; used to test adding a new contact
pub fn hoon() -> Person {
    fixture(
        PersonBuilder::new()
            .with_name("Hoon Meier")
            .and_then(|b| b.with_phone("84824240"))
            .and_then(|b| b.with_email("stefan@example.com"))
            .and_then(|b| b.with_address("little india")),
    )
}

/// Not part of [`typical_persons`]; used to test adding a new contact
pub fn ida() -> Person {
    fixture(
        PersonBuilder::new()
            .with_name("Ida Mueller")
            .and_then(|b| b.with_phone("84821310"))
            .and_then(|b| b.with_email("hans@example.com"))
            .and_then(|b| b.with_address("chicago ave")),
    )
}

pub fn typical_persons() -> Vec<Person> {
    vec![
        alice(),
        benson(),
        carl(),
        daniel(),
        elle(),
        fiona(),
        george(),
    ]
}
