//! Phone number normalization.

use identicard_core::constants::TRUNK_ZERO_DIAL_CODE;

/// Joins a dial code and a local number into international digits.
///
/// The local number is trimmed and stripped of all whitespace; `None` is
/// returned when nothing is left. When the dial code's digits are `90`, one
/// leading trunk `0` is dropped from the local number. A single leading `+`
/// is removed from the dial code; the result carries no `+` of its own.
///
/// ```
/// use identicard_rfc::rfc::phone::full_phone_number;
///
/// assert_eq!(
///     full_phone_number("+90", "0555 123 45 67").as_deref(),
///     Some("905551234567")
/// );
/// assert_eq!(full_phone_number("+1", "  "), None);
/// ```
#[must_use]
pub fn full_phone_number(dial_code: &str, phone: &str) -> Option<String> {
    let mut local: String = phone
        .trim()
        .chars()
        .filter(|c| !c.is_whitespace())
        .collect();
    if local.is_empty() {
        return None;
    }

    let bare_code: String = dial_code.chars().filter(char::is_ascii_digit).collect();
    if bare_code == TRUNK_ZERO_DIAL_CODE && local.starts_with('0') {
        local.remove(0);
    }

    let code = dial_code.strip_prefix('+').unwrap_or(dial_code);
    Some(format!("{code}{local}"))
}
