//! vCard text escaping.

/// Escapes a text value for vCard serialization.
///
/// Backslash, semicolon, comma and newline become `\\`, `\;`, `\,` and
/// `\n`. Each input character is mapped once, so an escaped backslash is
/// never escaped again. Any other character, including `\r`, is copied as is.
#[must_use]
pub fn escape_text(s: &str) -> String {
    let mut result = String::with_capacity(s.len());

    for c in s.chars() {
        match c {
            '\\' => result.push_str("\\\\"),
            ';' => result.push_str("\\;"),
            ',' => result.push_str("\\,"),
            '\n' => result.push_str("\\n"),
            _ => result.push(c),
        }
    }

    result
}
