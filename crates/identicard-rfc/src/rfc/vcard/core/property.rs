//! vCard property types (RFC 6350).

use super::parameter::VCardParameter;

/// A property value before escaping.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum VCardValue {
    /// A single text value.
    Text(String),
    /// Semicolon-separated components (N, ADR), each escaped on its own.
    Structured(Vec<String>),
}

/// A vCard property.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VCardProperty {
    /// Property name (normalized to uppercase).
    pub name: String,
    /// Parameters in order of appearance.
    pub params: Vec<VCardParameter>,
    /// Unescaped value.
    pub value: VCardValue,
}

impl VCardProperty {
    /// Creates a property with a text value.
    #[must_use]
    pub fn text(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into().to_ascii_uppercase(),
            params: Vec::new(),
            value: VCardValue::Text(value.into()),
        }
    }

    /// Creates a property with a structured value.
    #[must_use]
    pub fn structured<I, S>(name: impl Into<String>, components: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            name: name.into().to_ascii_uppercase(),
            params: Vec::new(),
            value: VCardValue::Structured(components.into_iter().map(Into::into).collect()),
        }
    }

    /// Returns the parameter with the given name.
    #[must_use]
    pub fn get_param(&self, name: &str) -> Option<&VCardParameter> {
        self.params.iter().find(|p| p.name.eq_ignore_ascii_case(name))
    }

    /// Returns whether this property has the specified TYPE value.
    #[must_use]
    pub fn has_type(&self, type_value: &str) -> bool {
        self.get_param("TYPE")
            .is_some_and(|p| p.has_value(type_value))
    }

    /// Returns the value as text if it is a text value.
    #[must_use]
    pub fn as_text(&self) -> Option<&str> {
        match &self.value {
            VCardValue::Text(s) => Some(s),
            VCardValue::Structured(_) => None,
        }
    }

    /// Adds a TYPE parameter value.
    pub fn add_type(&mut self, type_value: impl Into<String>) {
        if let Some(param) = self.params.iter_mut().find(|p| p.name == "TYPE") {
            param.values.push(type_value.into());
        } else {
            self.params.push(VCardParameter::type_param(type_value));
        }
    }

    /// Builder form of [`Self::add_type`].
    #[must_use]
    pub fn with_type(mut self, type_value: impl Into<String>) -> Self {
        self.add_type(type_value);
        self
    }
}

/// Property names emitted by the builder.
pub mod names {
    pub const BEGIN: &str = "BEGIN";
    pub const END: &str = "END";
    pub const VERSION: &str = "VERSION";

    pub const N: &str = "N";
    pub const FN: &str = "FN";
    pub const EMAIL: &str = "EMAIL";
    pub const TEL: &str = "TEL";
    pub const URL: &str = "URL";
    pub const ORG: &str = "ORG";
    pub const TITLE: &str = "TITLE";
    pub const NOTE: &str = "NOTE";

    /// Component name used with BEGIN/END.
    pub const VCARD: &str = "VCARD";
}
