//! The identity record filled by the user.

use serde::{Deserialize, Serialize};

use super::social::SocialLinks;
use crate::constants::DEFAULT_DIAL_CODE;

/// Returns the trimmed value when the field holds something other than
/// whitespace.
///
/// Every optional field goes through this check before it contributes to
/// output, so `None`, `Some("")` and `Some("  ")` are all treated as absent.
#[must_use]
pub fn present(field: Option<&str>) -> Option<&str> {
    field.map(str::trim).filter(|v| !v.is_empty())
}

/// Personal identity fields, all optional.
///
/// Serialized with the camelCase keys used by the web form
/// (`firstName`, `phoneCountryCode`, ...).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct IdentityRecord {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub email: Option<String>,
    pub phone_country_code: Option<String>,
    pub phone: Option<String>,
    pub website: Option<String>,
    pub company: Option<String>,
    pub title: Option<String>,
    pub note: Option<String>,
    pub social: SocialLinks,
}

impl IdentityRecord {
    /// Creates an empty record.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Trimmed first name, if present.
    #[must_use]
    pub fn given_name(&self) -> Option<&str> {
        present(self.first_name.as_deref())
    }

    /// Trimmed last name, if present.
    #[must_use]
    pub fn family_name(&self) -> Option<&str> {
        present(self.last_name.as_deref())
    }

    /// Trimmed dial code, falling back to [`DEFAULT_DIAL_CODE`] when blank.
    #[must_use]
    pub fn dial_code(&self) -> &str {
        present(self.phone_country_code.as_deref()).unwrap_or(DEFAULT_DIAL_CODE)
    }

    /// Returns whether any user-entered field is present.
    ///
    /// The dial code does not count: it always has a value.
    #[must_use]
    pub fn has_any_data(&self) -> bool {
        [
            &self.first_name,
            &self.last_name,
            &self.email,
            &self.phone,
            &self.website,
            &self.company,
            &self.title,
            &self.note,
        ]
        .into_iter()
        .any(|field| present(field.as_deref()).is_some())
            || self.social.iter_present().next().is_some()
    }
}
