//! Identity record to vCard composition.

use identicard_core::constants::UNKNOWN_DISPLAY_NAME;
use identicard_core::model::{IdentityRecord, present};

use super::serializer::serialize_single;
use crate::rfc::phone::full_phone_number;
use crate::rfc::uri::ensure_https;
use crate::rfc::vcard::core::{VCard, VCardProperty, names, types};

/// Builds the vCard text for an identity record.
///
/// ## Summary
/// Always succeeds. An empty record yields a minimal card whose display name
/// is `Unknown`.
#[must_use]
pub fn build_vcard(record: &IdentityRecord) -> String {
    serialize_single(&identity_to_vcard(record))
}

/// Composes the vCard properties for an identity record.
///
/// Properties are added in a fixed order: N, FN, EMAIL, TEL, URL (website),
/// ORG, TITLE, NOTE, then one URL per social link in platform order. Each
/// optional property is added only when its field is present.
#[must_use]
pub fn identity_to_vcard(record: &IdentityRecord) -> VCard {
    let mut card = VCard::new();
    let family = record.family_name();
    let given = record.given_name();

    if family.is_some() || given.is_some() {
        card.add_property(VCardProperty::structured(
            names::N,
            [family.unwrap_or_default(), given.unwrap_or_default(), "", "", ""],
        ));
    }

    card.add_property(VCardProperty::text(names::FN, display_name(record)));

    if let Some(email) = present(record.email.as_deref()) {
        card.add_property(VCardProperty::text(names::EMAIL, email));
    }

    if let Some(number) = record
        .phone
        .as_deref()
        .and_then(|phone| full_phone_number(record.dial_code(), phone))
    {
        card.add_property(
            VCardProperty::text(names::TEL, format!("+{number}")).with_type(types::CELL),
        );
    }

    if let Some(url) = record.website.as_deref().and_then(ensure_https) {
        card.add_property(VCardProperty::text(names::URL, url));
    }

    for (name, field) in [
        (names::ORG, &record.company),
        (names::TITLE, &record.title),
        (names::NOTE, &record.note),
    ] {
        if let Some(value) = present(field.as_deref()) {
            card.add_property(VCardProperty::text(name, value));
        }
    }

    for (platform, link) in record.social.iter_present() {
        if let Some(url) = ensure_https(link) {
            tracing::trace!(%platform, "Adding social link");
            card.add_property(VCardProperty::text(names::URL, url));
        }
    }

    tracing::debug!(
        properties = card.properties.len(),
        "Composed vCard from identity record"
    );

    card
}

/// Display name for the FN property: given and family name joined by a
/// space, or `Unknown` when both are absent.
#[must_use]
pub fn display_name(record: &IdentityRecord) -> String {
    let name = [record.given_name(), record.family_name()]
        .into_iter()
        .flatten()
        .collect::<Vec<_>>()
        .join(" ");

    if name.is_empty() {
        UNKNOWN_DISPLAY_NAME.to_string()
    } else {
        name
    }
}
