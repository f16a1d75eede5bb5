//! ## Summary
//! Whole-record validation.
//!
//! Collects per-field error messages for the fields that carry a format:
//! email, website and every social link.

use identicard_core::model::IdentityRecord;
use serde::ser::{Serialize, SerializeMap, Serializer};

use super::email::get_email_error;
use super::url::get_url_error;

/// Field identifiers used as validation keys.
pub mod fields {
    pub const EMAIL: &str = "email";
    pub const WEBSITE: &str = "website";
}

/// ## Summary
/// An error attached to one field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldError {
    /// `email`, `website` or `social_<platform>`.
    pub field: String,
    pub message: &'static str,
}

/// ## Summary
/// Errors per field, in the order the fields were checked.
///
/// A field without an entry is acceptable. Serializes as a JSON object
/// mapping field identifier to message.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationResult {
    errors: Vec<FieldError>,
}

impl ValidationResult {
    /// Returns true if no field has an error
    #[must_use]
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    /// Returns the error message for a field, if any
    #[must_use]
    pub fn get(&self, field: &str) -> Option<&'static str> {
        self.errors
            .iter()
            .find(|e| e.field == field)
            .map(|e| e.message)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.errors.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn errors(&self) -> impl Iterator<Item = &FieldError> {
        self.errors.iter()
    }

    /// Records an error for a field, replacing an earlier one for the same field.
    pub fn insert(&mut self, field: impl Into<String>, message: &'static str) {
        let field = field.into();
        if let Some(existing) = self.errors.iter_mut().find(|e| e.field == field) {
            existing.message = message;
        } else {
            self.errors.push(FieldError { field, message });
        }
    }

    fn check(&mut self, field: impl Into<String>, error: Option<&'static str>) {
        if let Some(message) = error {
            self.insert(field, message);
        }
    }
}

impl Serialize for ValidationResult {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.errors.len()))?;
        for error in &self.errors {
            map.serialize_entry(&error.field, error.message)?;
        }
        map.end()
    }
}

/// ## Summary
/// Validates the formatted fields of a record.
///
/// Checks `email`, `website`, then each present social link in platform
/// order under `social_<platform>`. Absent fields are never errors.
#[must_use]
pub fn validate_record(record: &IdentityRecord) -> ValidationResult {
    let mut result = ValidationResult::default();

    result.check(
        fields::EMAIL,
        record.email.as_deref().and_then(get_email_error),
    );
    result.check(
        fields::WEBSITE,
        record.website.as_deref().and_then(get_url_error),
    );

    for (platform, link) in record.social.iter_present() {
        result.check(platform.field_id(), get_url_error(link));
    }

    if result.is_valid() {
        tracing::debug!("Identity record passed validation");
    } else {
        tracing::debug!(errors = result.len(), "Identity record failed validation");
    }

    result
}
