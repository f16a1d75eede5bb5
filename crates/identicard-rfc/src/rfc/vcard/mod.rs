//! vCard implementation (RFC 6350).
//!
//! Builds vCard 4.0 contact cards from identity records. Only serialization
//! is provided; incoming cards are never parsed.
//!
//! ## Usage
//!
//! ```rust
//! use identicard_core::model::IdentityRecord;
//! use identicard_rfc::rfc::vcard::build_vcard;
//!
//! let record = IdentityRecord {
//!     first_name: Some("Jane".into()),
//!     last_name: Some("Doe".into()),
//!     website: Some("example.com".into()),
//!     ..IdentityRecord::default()
//! };
//!
//! let card = build_vcard(&record);
//! assert!(card.starts_with("BEGIN:VCARD\nVERSION:4.0\n"));
//! assert!(card.contains("FN:Jane Doe"));
//! assert!(card.contains("URL:https://example.com"));
//! ```
//!
//! ## Submodules
//!
//! - [`core`] - Core types (`VCard`, `VCardProperty`, `VCardParameter`)
//! - [`build`] - Escaping, folding, serialization and identity composition

pub mod build;
pub mod core;

#[cfg(test)]
mod tests;

// Re-export commonly used types
pub use self::build::{build_vcard, escape_text, fold_line, identity_to_vcard, serialize_single};
pub use self::core::{VCard, VCardParameter, VCardProperty, VCardValue};
