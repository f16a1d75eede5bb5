use std::io::Write;

use identicard_core::model::IdentityRecord;
use identicard_rfc::rfc::validation::validate_record;

use crate::error::AppResult;

/// ## Summary
/// Prints the validation result as a JSON object; exit code 1 if any field is invalid.
///
/// ## Errors
/// Returns an error if writing the output fails.
pub fn run_validate(record: &IdentityRecord, out: &mut impl Write) -> AppResult<u8> {
    let result = validate_record(record);

    serde_json::to_writer_pretty(&mut *out, &result).map_err(std::io::Error::from)?;
    writeln!(out)?;

    Ok(u8::from(!result.is_valid()))
}
