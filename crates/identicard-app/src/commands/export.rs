use std::io::Write;

use identicard_core::model::IdentityRecord;
use identicard_core::util::filename::safe_filename;

use super::prepare_vcard;
use crate::error::AppResult;
use crate::export::{DownloadTarget, download_vcard};

/// ## Summary
/// Saves the vCard through the download target and prints the saved path.
///
/// Without an explicit `filename`, a record with a name is saved as
/// `First_Last.vcf`; otherwise the target's default name is used.
///
/// ## Errors
/// Returns an error if the record is invalid or empty, saving fails, or
/// writing the output fails.
pub fn run_export(
    record: &IdentityRecord,
    filename: Option<&str>,
    target: &impl DownloadTarget,
    out: &mut impl Write,
) -> AppResult<u8> {
    let card = prepare_vcard(record)?;

    let derived = (record.given_name().is_some() || record.family_name().is_some())
        .then(|| safe_filename(record));
    let filename = filename.or(derived.as_deref());

    let path = download_vcard(&card, filename, target)?;
    writeln!(out, "{}", path.display())?;

    Ok(0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::export::DirectoryTarget;

    #[test]
    fn name_with_slash_still_exports() {
        let dir = tempfile::tempdir().unwrap();
        let target = DirectoryTarget::new(dir.path(), "identity.vcf");
        let record = IdentityRecord {
            first_name: Some("AC/DC".into()),
            ..IdentityRecord::default()
        };

        run_export(&record, None, &target, &mut Vec::new()).unwrap();

        assert!(dir.path().join("AC_DC.vcf").exists());
    }

    #[test_log::test]
    fn saves_under_record_name() {
        let dir = tempfile::tempdir().unwrap();
        let target = DirectoryTarget::new(dir.path(), "identity.vcf");
        let record = IdentityRecord {
            first_name: Some("Mary Ann".into()),
            last_name: Some("Lee".into()),
            ..IdentityRecord::default()
        };
        let mut out = Vec::new();

        run_export(&record, None, &target, &mut out).unwrap();

        let expected = dir.path().join("Mary_Ann_Lee.vcf");
        assert!(expected.exists());
        assert_eq!(
            String::from_utf8(out).unwrap().trim_end(),
            expected.display().to_string()
        );
    }

    #[test]
    fn nameless_record_uses_default() {
        let dir = tempfile::tempdir().unwrap();
        let target = DirectoryTarget::new(dir.path(), "identity.vcf");
        let record = IdentityRecord {
            email: Some("me@example.com".into()),
            ..IdentityRecord::default()
        };

        run_export(&record, None, &target, &mut Vec::new()).unwrap();
        assert!(dir.path().join("identity.vcf").exists());
    }

    #[test]
    fn explicit_filename_wins() {
        let dir = tempfile::tempdir().unwrap();
        let target = DirectoryTarget::new(dir.path(), "identity.vcf");
        let record = IdentityRecord {
            first_name: Some("Ali".into()),
            ..IdentityRecord::default()
        };

        run_export(&record, Some("card.vcf"), &target, &mut Vec::new()).unwrap();
        assert!(dir.path().join("card.vcf").exists());
        assert!(!dir.path().join("Ali.vcf").exists());
    }
}
