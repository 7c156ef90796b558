use crate::domain::module_role::ModuleCodeError;
use crate::domain::person::{AddressError, EmailError, NameError, PhoneError};
use crate::domain::tag::TagError;
use crate::domain::validation_constants::{
    address, email, module_code, name, phone, role_type, tag,
};
use thiserror::Error;

/// Module contacts error types
#[derive(Error, Debug)]
pub enum Error {
    #[error("{msg} ({0})", msg = name::MESSAGE_CONSTRAINTS)]
    InvalidName(#[from] NameError),

    #[error("{msg} ({0})", msg = phone::MESSAGE_CONSTRAINTS)]
    InvalidPhone(#[from] PhoneError),

    #[error("{msg} ({0})", msg = email::MESSAGE_CONSTRAINTS)]
    InvalidEmail(#[from] EmailError),

    #[error("{msg} ({0})", msg = address::MESSAGE_CONSTRAINTS)]
    InvalidAddress(#[from] AddressError),

    #[error("{msg} ({0})", msg = tag::MESSAGE_CONSTRAINTS)]
    InvalidTag(#[from] TagError),

    #[error("{msg} ({0})", msg = module_code::MESSAGE_CONSTRAINTS)]
    InvalidModuleCode(#[from] ModuleCodeError),

    #[error("{msg}, got '{0}'", msg = role_type::MESSAGE_CONSTRAINTS)]
    InvalidRoleType(String),

    #[error("Module codes and role types must pair up: got {codes} codes and {roles} roles")]
    ModuleRoleLengthMismatch { codes: usize, roles: usize },

    #[error("Configuration error: {0}")]
    Config(#[from] config::ConfigError),

    #[error("Logging setup error: {0}")]
    Telemetry(String),
}

pub type Result<T> = std::result::Result<T, Error>;
