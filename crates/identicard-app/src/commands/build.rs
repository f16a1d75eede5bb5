use std::io::Write;

use identicard_core::model::IdentityRecord;

use super::prepare_vcard;
use crate::error::AppResult;

/// ## Summary
/// Prints the vCard text followed by a newline.
///
/// ## Errors
/// Returns an error if the record is invalid or empty, or writing fails.
pub fn run_build(record: &IdentityRecord, out: &mut impl Write) -> AppResult<u8> {
    let card = prepare_vcard(record)?;
    writeln!(out, "{card}")?;
    Ok(0)
}
