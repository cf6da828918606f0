//! Client-side format checks for user-supplied credentials.
//!
//! These mirror the rules the backend enforces so that forms can reject
//! obviously malformed input without a round trip. The backend remains the
//! authority; passing these checks guarantees nothing about acceptance.

use regex::Regex;
use std::sync::LazyLock;
use thiserror::Error;

static USERNAME_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[a-zA-Z0-9]+$").expect("Failed to compile username regex")
});

static EMAIL_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("Failed to compile email regex")
});

static TOTP_CODE_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[0-9]{6}$").expect("Failed to compile TOTP code regex"));

const PASSWORD_SYMBOLS: &str = r##"!@#$%^&*()_+-=[]{};':"\|,.<>/?"##;

/// A rejected field, with the user-facing message as the display form.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Password must be at least 8 characters long")]
    PasswordTooShort,

    #[error("Password must contain at least one number")]
    PasswordMissingNumber,

    #[error("Password must contain at least one symbol")]
    PasswordMissingSymbol,

    #[error("Password must contain at least one uppercase letter")]
    PasswordMissingUppercase,

    #[error("Password must contain at least one lowercase letter")]
    PasswordMissingLowercase,

    #[error("Username must be at least 3 characters long")]
    UsernameTooShort,

    #[error("Username can only contain letters and numbers")]
    UsernameInvalidCharacters,

    #[error("Invalid email address")]
    InvalidEmail,

    #[error("Token must be 6 digits long")]
    InvalidTotpCode,
}

/// Checks length plus the number/symbol/uppercase/lowercase requirements,
/// reporting the first rule the password breaks.
pub fn validate_password(password: &str) -> Result<(), ValidationError> {
    if password.chars().count() < 8 {
        return Err(ValidationError::PasswordTooShort);
    }
    if !password.chars().any(|c| c.is_ascii_digit()) {
        return Err(ValidationError::PasswordMissingNumber);
    }
    if !password.chars().any(|c| PASSWORD_SYMBOLS.contains(c)) {
        return Err(ValidationError::PasswordMissingSymbol);
    }
    if !password.chars().any(|c| c.is_ascii_uppercase()) {
        return Err(ValidationError::PasswordMissingUppercase);
    }
    if !password.chars().any(|c| c.is_ascii_lowercase()) {
        return Err(ValidationError::PasswordMissingLowercase);
    }
    Ok(())
}

/// Usernames are at least three characters, letters and digits only.
pub fn validate_username(username: &str) -> Result<(), ValidationError> {
    if username.chars().count() < 3 {
        return Err(ValidationError::UsernameTooShort);
    }
    if !USERNAME_REGEX.is_match(username) {
        return Err(ValidationError::UsernameInvalidCharacters);
    }
    Ok(())
}

pub fn validate_email(email: &str) -> Result<(), ValidationError> {
    if !EMAIL_REGEX.is_match(email) {
        return Err(ValidationError::InvalidEmail);
    }
    Ok(())
}

/// TOTP codes are exactly six ASCII digits.
pub fn validate_totp_code(code: &str) -> Result<(), ValidationError> {
    if !TOTP_CODE_REGEX.is_match(code) {
        return Err(ValidationError::InvalidTotpCode);
    }
    Ok(())
}
