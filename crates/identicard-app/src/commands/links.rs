use std::io::Write;

use identicard_core::model::IdentityRecord;
use identicard_rfc::rfc::links::contact_links;

use crate::error::AppResult;

/// ## Summary
/// Prints one `label<TAB>href` line per contact link.
///
/// ## Errors
/// Returns an error if writing the output fails.
pub fn run_links(record: &IdentityRecord, out: &mut impl Write) -> AppResult<u8> {
    for link in contact_links(record) {
        writeln!(out, "{}\t{}", link.label, link.href)?;
    }
    Ok(0)
}
