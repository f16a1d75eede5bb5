//! Identity data model.
//!
//! The record is a plain value: the front end fills it, the validators and
//! the vCard builder only read it.

pub mod dial_code;
pub mod identity;
pub mod social;

pub use dial_code::{DIAL_CODES, DialCode};
pub use identity::{IdentityRecord, present};
pub use social::{SocialLinks, SocialPlatform};
