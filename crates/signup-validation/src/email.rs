//! Email validation functions

use once_cell::sync::Lazy;
use regex::Regex;

static EMAIL_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"^[a-zA-Z0-9_%+-]+(\.[a-zA-Z0-9_%+-]+)*@[a-zA-Z0-9-]+(\.[a-zA-Z0-9-]+)*\.[a-zA-Z]{2,}$",
    )
    .expect("email pattern is a valid regex")
});

/// Validates email address format
///
/// Accepts `local@domain.tld` where the local part is dot-separated runs of
/// the usual unquoted characters (no leading, trailing or doubled dot) and the
/// domain ends in an alphabetic TLD of two or more letters.
/// An empty string is never a valid address; whether emptiness is an error is
/// the caller's decision.
pub fn is_valid_email(email: &str) -> bool {
    EMAIL_REGEX.is_match(email)
}
