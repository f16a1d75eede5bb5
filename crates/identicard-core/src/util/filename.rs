//! Download filename generation.
//!
//! ## Summary
//! Derives the `.vcf` filename offered for download from the record's name
//! fields, e.g. "Ali" + "Yılmaz" -> `Ali_Yılmaz.vcf`.

use crate::constants::{DEFAULT_FILENAME_STEM, VCARD_EXTENSION};
use crate::model::IdentityRecord;

/// Replaces every run of whitespace with a single underscore.
///
/// Examples:
/// - "Ali Can" -> "`Ali_Can`"
/// - "a \t b" -> "`a_b`"
#[must_use]
pub fn collapse_whitespace(stem: &str) -> String {
    let mut out = String::with_capacity(stem.len());
    let mut in_run = false;

    for c in stem.chars() {
        if c.is_whitespace() {
            if !in_run {
                out.push('_');
            }
            in_run = true;
        } else {
            out.push(c);
            in_run = false;
        }
    }

    out
}

/// Builds the download filename for a record.
///
/// Joins the present first and last names with `_`, collapses whitespace,
/// turns path separators into `_`, falls back to `identity` when nothing is
/// left, and appends `.vcf`. The result is always a bare file name.
#[must_use]
pub fn safe_filename(record: &IdentityRecord) -> String {
    let stem = [record.given_name(), record.family_name()]
        .into_iter()
        .flatten()
        .collect::<Vec<_>>()
        .join("_");

    let stem = collapse_whitespace(&stem).replace(['/', '\\'], "_");
    let stem = if stem.is_empty() {
        DEFAULT_FILENAME_STEM
    } else {
        stem.as_str()
    };

    format!("{stem}.{VCARD_EXTENSION}")
}
