//! Clickable contact links derived from an identity record.
//!
//! These are the links shown next to the QR code: the website, a `mailto:`
//! address, a `tel:` number and every social profile.

use identicard_core::model::{IdentityRecord, SocialPlatform, present};
use serde::Serialize;

use crate::rfc::phone::full_phone_number;
use crate::rfc::uri::ensure_https;

/// What a contact link points at.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase", tag = "kind", content = "platform")]
pub enum LinkKind {
    Website,
    Email,
    Phone,
    Social(SocialPlatform),
}

impl LinkKind {
    /// Display label for the link.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Website => "Website",
            Self::Email => "Email",
            Self::Phone => "Phone",
            Self::Social(platform) => platform.label(),
        }
    }
}

/// A labelled link.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ContactLink {
    #[serde(flatten)]
    pub kind: LinkKind,
    pub label: &'static str,
    pub href: String,
}

impl ContactLink {
    fn new(kind: LinkKind, href: String) -> Self {
        Self {
            kind,
            label: kind.label(),
            href,
        }
    }
}

/// Derives the contact links of a record, website first, then email, phone
/// and social profiles in platform order.
#[must_use]
pub fn contact_links(record: &IdentityRecord) -> Vec<ContactLink> {
    let mut links = Vec::new();

    if let Some(url) = record.website.as_deref().and_then(ensure_https) {
        links.push(ContactLink::new(LinkKind::Website, url));
    }

    if let Some(email) = present(record.email.as_deref()) {
        links.push(ContactLink::new(LinkKind::Email, format!("mailto:{email}")));
    }

    let dial_code: String = record
        .dial_code()
        .chars()
        .filter(|c| !c.is_whitespace())
        .collect();
    if let Some(number) = record
        .phone
        .as_deref()
        .and_then(|phone| full_phone_number(&dial_code, phone))
    {
        links.push(ContactLink::new(LinkKind::Phone, format!("tel:+{number}")));
    }

    for (platform, link) in record.social.iter_present() {
        if let Some(url) = ensure_https(link) {
            links.push(ContactLink::new(LinkKind::Social(platform), url));
        }
    }

    links
}
