//! Field validators for identity records.
//!
//! Every check treats an empty or whitespace-only value as valid: all fields
//! are optional. Invalid input is reported through return values, never as
//! an error.

mod email;
mod pattern;
mod record;
mod url;

pub use email::{get_email_error, is_valid_email};
pub use record::{FieldError, ValidationResult, fields, validate_record};
pub use url::{get_url_error, is_valid_url};
