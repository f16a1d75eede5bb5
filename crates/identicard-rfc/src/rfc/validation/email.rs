//! Email address validation.

use std::sync::LazyLock;

use identicard_core::constants::EMAIL_ERROR_MESSAGE;
use regex_lite::Regex;

use super::pattern::compile;

/// `local@domain.tld`: no whitespace, exactly one `@`, a dot in the domain.
static EMAIL_PATTERN: LazyLock<Regex> = LazyLock::new(|| compile(r"^[^\s@]+@[^\s@]+\.[^\s@]+$"));

/// Returns whether the value is an acceptable email address.
///
/// Empty or whitespace-only input is valid.
#[must_use]
pub fn is_valid_email(value: &str) -> bool {
    let value = value.trim_matches(is_space);
    if value.is_empty() {
        return true;
    }

    // the pattern only knows ASCII whitespace
    !value.contains(is_space) && EMAIL_PATTERN.is_match(value)
}

/// Unicode whitespace plus U+FEFF, which form fields treat as blank.
fn is_space(c: char) -> bool {
    c.is_whitespace() || c == '\u{feff}'
}

/// Returns the email error message, or `None` when the value is acceptable.
#[must_use]
pub fn get_email_error(value: &str) -> Option<&'static str> {
    if value.trim_matches(is_space).is_empty() {
        return None;
    }
    (!is_valid_email(value)).then_some(EMAIL_ERROR_MESSAGE)
}
