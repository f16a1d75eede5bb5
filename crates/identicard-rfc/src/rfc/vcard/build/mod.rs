//! vCard serialization (RFC 6350).
//!
//! ## Usage
//!
//! ```rust
//! use identicard_rfc::rfc::vcard::{VCard, VCardProperty, serialize_single};
//!
//! let mut card = VCard::new();
//! card.add_property(VCardProperty::text("FN", "John Doe"));
//! card.add_property(VCardProperty::text("EMAIL", "john@example.com"));
//!
//! let output = serialize_single(&card);
//! assert!(output.contains("FN:John Doe"));
//! ```
//!
//! ## Features
//!
//! - Line folding at 75 characters with single-space continuation
//! - Text escaping per RFC 6350
//! - Insertion-order output, `\n` line separators
//! - Identity record composition

mod escape;
mod fold;
mod identity;
mod serializer;

pub use escape::escape_text;
pub use fold::{MAX_LINE_CHARS, fold_line};
pub use identity::{build_vcard, display_name, identity_to_vcard};
pub use serializer::{LINE_SEPARATOR, serialize_property, serialize_single};
