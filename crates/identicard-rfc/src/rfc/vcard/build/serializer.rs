//! vCard serialization.

use super::escape::escape_text;
use super::fold::fold_line;
use crate::rfc::vcard::core::{VCard, VCardParameter, VCardProperty, VCardValue, names};
use identicard_core::constants::VCARD_VERSION;

/// Line separator between physical lines.
pub const LINE_SEPARATOR: &str = "\n";

/// Serializes a single vCard to a string.
///
/// ## Summary
/// Emits `BEGIN`, `VERSION`, every property in insertion order, then `END`.
/// Property lines are escaped and folded; lines are joined with `\n` and the
/// output has no trailing newline.
#[must_use]
pub fn serialize_single(card: &VCard) -> String {
    let mut lines = Vec::with_capacity(card.properties.len() + 3);

    lines.push(format!("{}:{}", names::BEGIN, names::VCARD));
    lines.push(format!("{}:{VCARD_VERSION}", names::VERSION));

    for prop in &card.properties {
        lines.push(fold_line(&serialize_property(prop)));
    }

    lines.push(format!("{}:{}", names::END, names::VCARD));

    lines.join(LINE_SEPARATOR)
}

/// Composes the unfolded content line of a property.
#[must_use]
pub fn serialize_property(prop: &VCardProperty) -> String {
    let mut line = String::new();

    line.push_str(&prop.name);

    for param in &prop.params {
        serialize_parameter(param, &mut line);
    }

    line.push(':');
    serialize_value(&prop.value, &mut line);

    line
}

fn serialize_parameter(param: &VCardParameter, output: &mut String) {
    output.push(';');
    output.push_str(&param.name);
    output.push('=');
    output.push_str(&param.values.join(","));
}

fn serialize_value(value: &VCardValue, output: &mut String) {
    match value {
        VCardValue::Text(s) => {
            output.push_str(&escape_text(s));
        }
        VCardValue::Structured(components) => {
            for (i, component) in components.iter().enumerate() {
                if i > 0 {
                    output.push(';');
                }
                output.push_str(&escape_text(component));
            }
        }
    }
}
