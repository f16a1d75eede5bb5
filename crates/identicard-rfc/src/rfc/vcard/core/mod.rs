//! Core vCard types.

mod parameter;
mod property;
mod vcard;

pub use parameter::{VCardParameter, types};
pub use property::{VCardProperty, VCardValue, names};
pub use vcard::VCard;
