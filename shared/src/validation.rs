use once_cell::sync::Lazy;
use regex::Regex;
use validator::ValidationError;

use crate::constants::{MAX_NAME_LENGTH, MIN_PASSWORD_LENGTH};

static EMAIL_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[^@\s]+@[^@\s]+\.[^@\s.]+$").expect("email pattern compiles"));

static SPECIAL_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r#"[!@#$%^&*(),.?":{}|<>]"#).expect("special character pattern compiles"));

pub fn validate_email(email: &str) -> Result<(), ValidationError> {
    let email = email.trim();
    if email.is_empty() || !EMAIL_RE.is_match(email) {
        return Err(ValidationError::new("invalid_email_format"));
    }
    Ok(())
}

/// Only enforced on sign-up against the hosted auth service.
pub fn validate_password(password: &str) -> Result<(), ValidationError> {
    let has_minimum_length = password.chars().count() >= MIN_PASSWORD_LENGTH;
    let has_uppercase = password.chars().any(|c| c.is_ascii_uppercase());
    let has_lowercase = password.chars().any(|c| c.is_ascii_lowercase());
    let has_digit = password.chars().any(|c| c.is_ascii_digit());
    let has_special = SPECIAL_RE.is_match(password);

    if !has_minimum_length
        || !has_uppercase
        || !has_lowercase
        || !has_digit
        || !has_special {
        return Err(ValidationError::new("invalid_password"));
    }
    Ok(())
}

pub fn validate_display_name(name: &str) -> Result<(), ValidationError> {
    let name = name.trim();
    if name.is_empty() || name.chars().count() > MAX_NAME_LENGTH {
        return Err(ValidationError::new("invalid_display_name"));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_email_shapes() {
        assert!(validate_email("ada@folio.app").is_ok());
        assert!(validate_email("  first.last+tag@mail.example.co  ").is_ok());
        assert!(validate_email("").is_err());
        assert!(validate_email("no-at-sign.com").is_err());
        assert!(validate_email("two@@signs.com").is_err());
        assert!(validate_email("user@nodot").is_err());
        assert!(validate_email("spaced out@folio.app").is_err());
    }

    #[test]
    fn test_password_rules() {
        assert!(validate_password("Sup3r$ecret").is_ok());
        assert!(validate_password("short1!A").is_ok());
        assert!(validate_password("alllowercase1!").is_err());
        assert!(validate_password("NoDigits!!").is_err());
        assert!(validate_password("NoSpecial123").is_err());
    }

    #[test]
    fn test_display_name_bounds() {
        assert!(validate_display_name("Ada").is_ok());
        assert!(validate_display_name("   ").is_err());
        assert!(validate_display_name(&"x".repeat(MAX_NAME_LENGTH + 1)).is_err());
    }
}
