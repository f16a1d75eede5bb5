//! vCard line folding.

/// Maximum physical line length in characters, continuation space included.
pub const MAX_LINE_CHARS: usize = 75;

/// Folds a line to the maximum length.
///
/// Lines longer than 75 characters are split with `\n` followed by a single
/// space. Every physical line, including its leading space, holds at most 75
/// characters. Characters are never split.
#[must_use]
pub fn fold_line(line: &str) -> String {
    if line.chars().count() <= MAX_LINE_CHARS {
        return line.to_string();
    }

    let mut result = String::with_capacity(line.len() + line.len() / MAX_LINE_CHARS * 2);
    let mut current_len = 0;

    for c in line.chars() {
        if current_len == MAX_LINE_CHARS {
            result.push_str("\n ");
            current_len = 1; // The space
        }

        result.push(c);
        current_len += 1;
    }

    result
}
