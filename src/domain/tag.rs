use nutype::nutype;

/// A label attached to a person
#[nutype(
    sanitize(trim),
    validate(not_empty, regex = r"^[A-Za-z0-9]+$"),
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
pub struct Tag(String);
