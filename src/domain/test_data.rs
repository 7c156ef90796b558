//! Test data constants for consistent testing
//!
//! This module centralizes the raw strings used throughout the test suite,
//! valid and invalid, so value-object tests and fixtures share one source.

/// Names for testing
pub mod names {
    pub const VALID_NAME_1: &str = "Amy Bee";
    pub const VALID_NAME_2: &str = "Bob Choo";
    pub const NUMERIC_NAME: &str = "12345";
    pub const LONG_NAME: &str = "David Roger Jackson Ray Jr 2nd";

    pub const EMPTY_NAME: &str = "";
    pub const WHITESPACE_NAME: &str = "   ";
    pub const SYMBOL_NAME: &str = "^";
    pub const TRAILING_SYMBOL_NAME: &str = "peter*";
}

/// Phone numbers for testing
pub mod phones {
    pub const VALID_PHONE_1: &str = "85355255";
    pub const VALID_PHONE_2: &str = "22222222";
    pub const SHORTEST_PHONE: &str = "911";

    pub const TOO_SHORT_PHONE: &str = "91";
    pub const ALPHA_PHONE: &str = "phone";
    pub const SPACED_PHONE: &str = "9312 1534";
}

/// Email addresses for testing
pub mod emails {
    pub const VALID_EMAIL_1: &str = "amy@gmail.com";
    pub const VALID_EMAIL_2: &str = "bob@example.com";
    pub const SPECIAL_LOCAL_EMAIL: &str = "a+b_c.d-e@sub.example-domain.org";

    pub const NO_AT_EMAIL: &str = "bobexample.com";
    pub const SHORT_LABEL_EMAIL: &str = "bob@example.c";
    pub const LEADING_SPECIAL_EMAIL: &str = "-bob@example.com";
    pub const TRAILING_SPECIAL_EMAIL: &str = "bob.@example.com";
}

/// Addresses for testing
pub mod addresses {
    pub const VALID_ADDRESS_1: &str = "123, Jurong West Ave 6, #08-111";
    pub const VALID_ADDRESS_2: &str = "Block 312, Amy Street 1";
    pub const SINGLE_CHAR_ADDRESS: &str = "-";

    pub const EMPTY_ADDRESS: &str = "";
    pub const LEADING_SPACE_ADDRESS: &str = " Block 312";
}

/// Tags for testing
pub mod tags {
    pub const FRIENDS_TAG: &str = "friends";
    pub const HUSBAND_TAG: &str = "husband";
    pub const NUMERIC_TAG: &str = "2024";

    pub const EMPTY_TAG: &str = "";
    pub const SPACED_TAG: &str = "best friend";
    pub const HYPHENATED_TAG: &str = "best-friend";
}

/// Module codes for testing
pub mod module_codes {
    pub const CS1101S: &str = "CS1101S";
    pub const CS2103T: &str = "CS2103T";
    pub const MA1521: &str = "MA1521";
    pub const LOWERCASE_CODE: &str = "gea1000";

    pub const EMPTY_CODE: &str = "";
    pub const NO_DIGITS_CODE: &str = "CS";
    pub const SHORT_DIGITS_CODE: &str = "CS110";
    pub const LONG_PREFIX_CODE: &str = "ABCD1234";
}

/// Regex patterns for property testing
pub mod regex_patterns {
    pub const NAME_PATTERN: &str = r"[A-Za-z][A-Za-z0-9 ]{0,29}[A-Za-z0-9]";
    pub const PHONE_PATTERN: &str = r"[0-9]{3,12}";
    pub const EMAIL_PATTERN: &str = r"[a-z]{1,10}@[a-z]{2,10}\.[a-z]{2,5}";
    pub const ADDRESS_PATTERN: &str = r"[A-Za-z0-9#][A-Za-z0-9 ,#-]{0,39}";
    pub const TAG_PATTERN: &str = r"[A-Za-z0-9]{1,12}";
    pub const MODULE_CODE_PATTERN: &str = r"[A-Z]{2,3}[0-9]{4}[A-Z]?";
}
