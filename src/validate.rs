//! Field validation for signup prompts.
//!
//! Pure validators shared by the question definitions and their tests. Each
//! returns `Ok(())` to accept or a human-readable rejection message that the
//! prompt runner shows before re-asking.

use email_address::EmailAddress;

const FULL_NAME_MIN: usize = 3;
const FULL_NAME_MAX: usize = 64;

/// Minimum password length. No maximum, no complexity rules.
const PASSWORD_MIN: usize = 12;

/// Validate a full name
/// - 3-64 characters
/// - Letters, digits, and apostrophes only
pub fn validate_full_name(input: &str) -> Result<(), String> {
    let len = input.chars().count();
    if !(FULL_NAME_MIN..=FULL_NAME_MAX).contains(&len)
        || !input.chars().all(|c| c.is_ascii_alphanumeric() || c == '\'')
    {
        return Err(format!(
            "You must provide between {FULL_NAME_MIN} and {FULL_NAME_MAX} characters [a-zA-Z0-9']"
        ));
    }
    Ok(())
}

/// Validate email address syntax
pub fn validate_email(input: &str) -> Result<(), String> {
    if !EmailAddress::is_valid(input) {
        return Err("You must provide a valid email address".to_string());
    }
    Ok(())
}

/// Validate a password: at least 12 characters, nothing else
pub fn validate_password(input: &str) -> Result<(), String> {
    if input.chars().count() < PASSWORD_MIN {
        return Err(format!(
            "You must provide a password greater than {PASSWORD_MIN} characters in length"
        ));
    }
    Ok(())
}
