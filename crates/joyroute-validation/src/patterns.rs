// File: src/patterns.rs
// Purpose: Shared regexes and password content checks

use once_cell::sync::Lazy;
use regex::Regex;

/// Characters accepted as password specials
const PASSWORD_SPECIALS: &str = "@$!%*?&";

/// Case-insensitive email shape: ASCII local part, dotted domain, 2+ letter TLD
pub static EMAIL_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)^[A-Z0-9._%+-]+@[A-Z0-9.-]+\.[A-Z]{2,}$").unwrap()
});

/// Letters, digits, hyphens, and underscores only
pub static USERNAME_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[a-zA-Z0-9_-]+$").unwrap());

fn allowed_password_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || PASSWORD_SPECIALS.contains(c)
}

/// Medium password content: at least one letter and one digit, drawn from
/// letters, digits, and the special set
pub fn is_medium_password(value: &str) -> bool {
    value.chars().all(allowed_password_char)
        && value.chars().any(|c| c.is_ascii_alphabetic())
        && value.chars().any(|c| c.is_ascii_digit())
}

/// Strong password content: lowercase, uppercase, digit, and a special
/// character, drawn from the same set
pub fn is_strong_password(value: &str) -> bool {
    value.chars().all(allowed_password_char)
        && value.chars().any(|c| c.is_ascii_lowercase())
        && value.chars().any(|c| c.is_ascii_uppercase())
        && value.chars().any(|c| c.is_ascii_digit())
        && value.chars().any(|c| PASSWORD_SPECIALS.contains(c))
}
