//! Subcommand handlers.
//!
//! Each handler writes its result to the given writer and returns the
//! process exit code.

mod build;
mod dial_codes;
mod export;
mod links;
mod validate;

pub use build::run_build;
pub use dial_codes::run_dial_codes;
pub use export::run_export;
pub use links::run_links;
pub use validate::run_validate;

use identicard_core::model::IdentityRecord;
use identicard_rfc::rfc::validation::validate_record;
use identicard_rfc::rfc::vcard::build_vcard;

use crate::error::{AppError, AppResult};

/// ## Summary
/// Validates the record, requires at least one filled field, and builds the vCard.
///
/// ## Errors
/// Returns `AppError::ValidationFailed` if a field is malformed, or
/// `AppError::EmptyRecord` if every field is empty.
pub fn prepare_vcard(record: &IdentityRecord) -> AppResult<String> {
    let result = validate_record(record);
    if !result.is_valid() {
        return Err(AppError::ValidationFailed(result));
    }

    if !record.has_any_data() {
        return Err(AppError::EmptyRecord);
    }

    Ok(build_vcard(record))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_fields_block_the_card() {
        let record = IdentityRecord {
            first_name: Some("Ali".into()),
            email: Some("user@domain".into()),
            ..IdentityRecord::default()
        };

        let Err(AppError::ValidationFailed(result)) = prepare_vcard(&record) else {
            panic!("expected validation failure");
        };
        assert!(result.get("email").is_some());
    }

    #[test]
    fn empty_record_is_refused() {
        assert!(matches!(
            prepare_vcard(&IdentityRecord::default()),
            Err(AppError::EmptyRecord)
        ));
        assert_eq!(
            AppError::EmptyRecord.to_string(),
            "Please fill in at least one field to create your QR code."
        );
    }

    #[test]
    fn filled_record_builds() {
        let record = IdentityRecord {
            company: Some("Acme".into()),
            ..IdentityRecord::default()
        };

        let card = prepare_vcard(&record).unwrap();
        assert!(card.contains("ORG:Acme"));
        assert!(card.contains("FN:Unknown"));
    }
}
