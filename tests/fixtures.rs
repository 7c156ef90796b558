//! Scenario tests for the person fixtures through the public API

use module_contacts::domain::sample_data::{sample_persons, tag_set};
use module_contacts::domain::{ModuleCode, RoleType};
use module_contacts::testutil::person_builder::{
    DEFAULT_ADDRESS, DEFAULT_MODULE_CODE, DEFAULT_NAME, DEFAULT_ROLE_TYPE,
};
use module_contacts::testutil::typical_persons::{alice, benson, carl, hoon, typical_persons};
use module_contacts::testutil::PersonBuilder;
use module_contacts::Error;
use rstest::rstest;

#[test]
fn test_editing_a_typical_person_keeps_the_original() {
    let original = alice();
    let edited = PersonBuilder::from_person(&original)
        .with_phone("91234567")
        .unwrap()
        .with_tags(&["classmates"])
        .unwrap()
        .build();

    assert!(edited.is_same_person(&original));
    assert_ne!(edited, original);
    assert_eq!(original.tags(), &tag_set(&["friends"]).unwrap());
    assert_eq!(original.phone().as_ref(), "94351253");
}

#[test]
fn test_typical_persons_roundtrip_through_builder() {
    for person in typical_persons().into_iter().chain([hoon()]) {
        assert_eq!(PersonBuilder::from(&person).build(), person);
    }
}

#[test]
fn test_removing_address_from_typical_person() {
    let stripped = PersonBuilder::from_person(&benson()).build_empty_address_person();
    assert!(stripped.address().is_none());
    assert_eq!(stripped.module_role_map(), benson().module_role_map());
}

#[test]
fn test_readding_address_to_person_without_one() {
    let person = PersonBuilder::from_person(&carl())
        .with_address(DEFAULT_ADDRESS)
        .unwrap()
        .build();

    assert_eq!(person.address().map(AsRef::as_ref), Some(DEFAULT_ADDRESS));
}

#[test]
fn test_default_module_role_is_restored_for_typical_person() {
    let person = PersonBuilder::from_person(&benson())
        .with_default_module_role_map()
        .build();

    let code = ModuleCode::try_new(DEFAULT_MODULE_CODE.to_string()).unwrap();
    assert_eq!(person.module_role_map().len(), 1);
    assert_eq!(person.module_role_map().role_of(&code), Some(DEFAULT_ROLE_TYPE));
}

#[test]
fn test_sample_persons_are_not_default_fixture() {
    let default_person = PersonBuilder::new().build();
    let samples = sample_persons().unwrap();

    assert_eq!(default_person.name().as_ref(), DEFAULT_NAME);
    assert!(!samples.iter().any(|p| p.is_same_person(&default_person)));
}

#[rstest]
#[case::name(PersonBuilder::new().with_name("Amy *").map(|_| ()), "Names should only contain")]
#[case::phone(PersonBuilder::new().with_phone("12").map(|_| ()), "Phone numbers should only contain")]
#[case::email(PersonBuilder::new().with_email("amy").map(|_| ()), "Emails should be of the format")]
#[case::address(PersonBuilder::new().with_address("").map(|_| ()), "Addresses can take any values")]
#[case::tag(PersonBuilder::new().with_tags(&["a b"]).map(|_| ()), "Tags names should be alphanumeric")]
fn test_rejections_explain_the_constraint(
    #[case] result: Result<(), Error>,
    #[case] message_prefix: &str,
) {
    let err = result.unwrap_err();
    assert!(
        err.to_string().starts_with(message_prefix),
        "unexpected message: {err}"
    );
}

#[test]
fn test_mismatch_error_reports_both_lengths() {
    let code = ModuleCode::try_new("CS2103T".to_string()).unwrap();
    let err = PersonBuilder::new()
        .with_module_role_map(&[code], &[RoleType::Tutor, RoleType::Student])
        .unwrap_err();

    assert!(matches!(
        err,
        Error::ModuleRoleLengthMismatch { codes: 1, roles: 2 }
    ));
}
