use std::io::Write;

use identicard_core::constants::DEFAULT_DIAL_CODE;
use identicard_core::model::DIAL_CODES;

use crate::error::AppResult;

/// ## Summary
/// Lists the dial-code table, marking the default with `*`.
///
/// ## Errors
/// Returns an error if writing the output fails.
pub fn run_dial_codes(out: &mut impl Write) -> AppResult<u8> {
    for dial_code in DIAL_CODES {
        let marker = if dial_code.code == DEFAULT_DIAL_CODE { "*" } else { " " };
        writeln!(out, "{marker} {dial_code}")?;
    }
    Ok(0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn marks_default() {
        let mut out = Vec::new();
        run_dial_codes(&mut out).unwrap();
        let text = String::from_utf8(out).unwrap();

        assert_eq!(text.lines().count(), DIAL_CODES.len());
        assert!(text.lines().any(|l| l == "* +90 Turkey"));
        assert!(text.lines().any(|l| l == "  +44 United Kingdom"));
    }
}
