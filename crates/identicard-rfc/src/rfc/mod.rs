pub mod links;
pub mod phone;
pub mod uri;
pub mod validation;
pub mod vcard;
