//! identicard - end-to-end test support.
//!
//! Re-exports the workspace crates and provides record fixtures shared by the
//! tests in `tests/`.

pub use identicard_app as app;
pub use identicard_rfc as rfc;

use identicard_core::model::IdentityRecord;

/// The web form's JSON for a fully filled record.
pub const FULL_RECORD_JSON: &str = r#"{
    "firstName": "Ali",
    "lastName": "Yılmaz",
    "email": "ali@example.com",
    "phoneCountryCode": "+90",
    "phone": "0555 123 45 67",
    "website": "example.com",
    "company": "Acme, Inc.",
    "title": "Developer",
    "note": "Line one\nLine two",
    "social": {
        "linkedin": "linkedin.com/in/ali",
        "instagram": "",
        "twitter": "",
        "github": "https://github.com/ali",
        "youtube": "",
        "facebook": "",
        "tiktok": "tiktok.com/ali"
    }
}"#;

/// The web form's JSON for an untouched form.
pub const EMPTY_RECORD_JSON: &str = r#"{
    "firstName": "",
    "lastName": "",
    "email": "",
    "phoneCountryCode": "+90",
    "phone": "",
    "website": "",
    "company": "",
    "title": "",
    "note": "",
    "social": {
        "linkedin": "",
        "instagram": "",
        "twitter": "",
        "github": "",
        "youtube": "",
        "facebook": "",
        "tiktok": ""
    }
}"#;

/// Parses one of the JSON fixtures.
///
/// # Panics
/// Panics if the JSON is not a valid record.
#[must_use]
#[expect(clippy::expect_used)]
pub fn record_from_json(json: &str) -> IdentityRecord {
    serde_json::from_str(json).expect("fixture must be a valid identity record")
}
