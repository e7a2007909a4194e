//! Input checks applied before a record is minted.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::domain::NewUser;
use crate::error::ValidationError;

pub const MIN_AGE: i64 = 0;
pub const MAX_AGE: i64 = 150;

// local@domain, no whitespace, a single '@'.
static EMAIL_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[^\s@]+@[^\s@]+$").expect("email pattern compiles"));

/// A payload that passed every check, with the age narrowed.
#[derive(Debug, Clone)]
pub(crate) struct ValidUser {
    pub name: String,
    pub age: u32,
    pub email: Option<String>,
}

pub fn validate_name(name: &str) -> Result<(), ValidationError> {
    if name.trim().is_empty() {
        return Err(ValidationError::EmptyName);
    }
    Ok(())
}

pub fn validate_age(age: i64) -> Result<u32, ValidationError> {
    if !(MIN_AGE..=MAX_AGE).contains(&age) {
        return Err(ValidationError::InvalidAge(age));
    }
    u32::try_from(age).map_err(|_| ValidationError::InvalidAge(age))
}

pub fn validate_email(email: &str) -> Result<(), ValidationError> {
    if !EMAIL_RE.is_match(email) {
        return Err(ValidationError::InvalidEmail(email.to_string()));
    }
    Ok(())
}

/// Checks name, then age, then email; the first failure wins.
pub(crate) fn validate(user: NewUser) -> Result<ValidUser, ValidationError> {
    validate_name(&user.name)?;
    let age = validate_age(user.age)?;
    if let Some(email) = &user.email {
        validate_email(email)?;
    }
    Ok(ValidUser {
        name: user.name,
        age,
        email: user.email,
    })
}
