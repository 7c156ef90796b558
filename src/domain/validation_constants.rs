//! Validation constants for domain types
//!
//! This module centralizes the validation patterns and user-facing constraint
//! messages for every value object, so the nutype definitions, the error type
//! and the tests agree on the same rules.

/// Person name validation constants
pub mod name {
    /// Alphanumeric characters and spaces, not starting with a space
    pub const VALIDATION_PATTERN: &str = r"^[A-Za-z0-9][A-Za-z0-9 ]*$";

    pub const MESSAGE_CONSTRAINTS: &str =
        "Names should only contain alphanumeric characters and spaces, and it should not be blank";
}

/// Phone number validation constants
pub mod phone {
    /// Minimum number of digits
    pub const MIN_DIGITS: usize = 3;

    pub const VALIDATION_PATTERN: &str = r"^[0-9]{3,}$";

    pub const MESSAGE_CONSTRAINTS: &str =
        "Phone numbers should only contain numbers, and it should be at least 3 digits long";
}

/// Email validation constants
pub mod email {
    /// Local part and domain, the last domain label at least two characters long
    pub const VALIDATION_PATTERN: &str = r"^[A-Za-z0-9]([A-Za-z0-9+_.-]*[A-Za-z0-9])?@([A-Za-z0-9]([A-Za-z0-9-]*[A-Za-z0-9])?\.)*[A-Za-z0-9][A-Za-z0-9-]*[A-Za-z0-9]$";

    pub const MESSAGE_CONSTRAINTS: &str = "Emails should be of the format local-part@domain. \
        The local-part should only contain alphanumeric characters and the special characters +_.-, \
        and may not start or end with a special character. \
        The domain is made up of labels separated by periods, each starting and ending with an \
        alphanumeric character, and the last label must be at least 2 characters long";
}

/// Address validation constants
pub mod address {
    pub const MESSAGE_CONSTRAINTS: &str = "Addresses can take any values, and it should not be blank";
}

/// Tag validation constants
pub mod tag {
    pub const VALIDATION_PATTERN: &str = r"^[A-Za-z0-9]+$";

    pub const MESSAGE_CONSTRAINTS: &str = "Tags names should be alphanumeric";
}

/// Module code validation constants
pub mod module_code {
    /// Two or three letter prefix, four digits, optional letter suffix (e.g. "CS1101S")
    pub const VALIDATION_PATTERN: &str = r"^[A-Z]{2,3}[0-9]{4}[A-Z]?$";

    pub const MESSAGE_CONSTRAINTS: &str = "Module codes should have a 2-3 letter prefix, \
        followed by 4 digits and an optional letter suffix";
}

/// Role type validation constants
pub mod role_type {
    pub const MESSAGE_CONSTRAINTS: &str = "Role types should be one of: student, tutor, professor";
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::module_role::ModuleCode;
    use crate::domain::person::{Email, Name, Phone};
    use crate::domain::tag::Tag;
    use crate::domain::test_data::{emails, module_codes, names, phones, tags};
    use regex::Regex;

    /// Checks that `pattern` accepts exactly the raw values the value object accepts
    fn assert_pattern_agrees(
        pattern: &str,
        raws: &[&str],
        sanitize: fn(&str) -> String,
        accepts: fn(String) -> bool,
    ) {
        let regex = Regex::new(pattern).unwrap();
        for raw in raws {
            assert_eq!(
                regex.is_match(&sanitize(raw)),
                accepts(raw.to_string()),
                "pattern {pattern} and value object disagree on {raw:?}"
            );
        }
    }

    fn trimmed(raw: &str) -> String {
        raw.trim().to_string()
    }

    #[test]
    fn test_name_pattern_matches_name_validation() {
        assert_pattern_agrees(
            name::VALIDATION_PATTERN,
            &[
                names::VALID_NAME_1,
                names::VALID_NAME_2,
                names::NUMERIC_NAME,
                names::LONG_NAME,
                names::EMPTY_NAME,
                names::WHITESPACE_NAME,
                names::SYMBOL_NAME,
                names::TRAILING_SYMBOL_NAME,
            ],
            trimmed,
            |raw| Name::try_new(raw).is_ok(),
        );
    }

    #[test]
    fn test_phone_pattern_matches_phone_validation() {
        assert_pattern_agrees(
            phone::VALIDATION_PATTERN,
            &[
                phones::VALID_PHONE_1,
                phones::VALID_PHONE_2,
                phones::SHORTEST_PHONE,
                phones::TOO_SHORT_PHONE,
                phones::ALPHA_PHONE,
                phones::SPACED_PHONE,
            ],
            trimmed,
            |raw| Phone::try_new(raw).is_ok(),
        );
    }

    #[test]
    fn test_email_pattern_matches_email_validation() {
        assert_pattern_agrees(
            email::VALIDATION_PATTERN,
            &[
                emails::VALID_EMAIL_1,
                emails::VALID_EMAIL_2,
                emails::SPECIAL_LOCAL_EMAIL,
                emails::NO_AT_EMAIL,
                emails::SHORT_LABEL_EMAIL,
                emails::LEADING_SPECIAL_EMAIL,
                emails::TRAILING_SPECIAL_EMAIL,
            ],
            trimmed,
            |raw| Email::try_new(raw).is_ok(),
        );
    }

    #[test]
    fn test_tag_pattern_matches_tag_validation() {
        assert_pattern_agrees(
            tag::VALIDATION_PATTERN,
            &[
                tags::FRIENDS_TAG,
                tags::HUSBAND_TAG,
                tags::NUMERIC_TAG,
                tags::EMPTY_TAG,
                tags::SPACED_TAG,
                tags::HYPHENATED_TAG,
            ],
            trimmed,
            |raw| Tag::try_new(raw).is_ok(),
        );
    }

    #[test]
    fn test_module_code_pattern_matches_module_code_validation() {
        assert_pattern_agrees(
            module_code::VALIDATION_PATTERN,
            &[
                module_codes::CS1101S,
                module_codes::CS2103T,
                module_codes::MA1521,
                module_codes::LOWERCASE_CODE,
                module_codes::EMPTY_CODE,
                module_codes::NO_DIGITS_CODE,
                module_codes::SHORT_DIGITS_CODE,
                module_codes::LONG_PREFIX_CODE,
            ],
            |raw| raw.trim().to_uppercase(),
            |raw| ModuleCode::try_new(raw).is_ok(),
        );
    }

    #[test]
    fn test_validation_patterns_compile() {
        for pattern in [
            name::VALIDATION_PATTERN,
            phone::VALIDATION_PATTERN,
            email::VALIDATION_PATTERN,
            tag::VALIDATION_PATTERN,
            module_code::VALIDATION_PATTERN,
        ] {
            assert!(Regex::new(pattern).is_ok(), "pattern failed to compile: {pattern}");
        }
    }

    #[test]
    fn test_phone_pattern_matches_min_digits() {
        let pattern = Regex::new(phone::VALIDATION_PATTERN).unwrap();
        assert!(pattern.is_match(&"9".repeat(phone::MIN_DIGITS)));
        assert!(!pattern.is_match(&"9".repeat(phone::MIN_DIGITS - 1)));
    }

    #[test]
    fn test_email_pattern_last_label_length() {
        let pattern = Regex::new(email::VALIDATION_PATTERN).unwrap();
        assert!(pattern.is_match("amy@gmail.com"));
        assert!(pattern.is_match("a+b_c.d-e@sub.example.org"));
        assert!(!pattern.is_match("amy@gmail.c"));
        assert!(!pattern.is_match(".amy@gmail.com"));
    }
}
