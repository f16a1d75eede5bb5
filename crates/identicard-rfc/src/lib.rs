//! vCard 4.0 building and field validation for identity records.

pub mod rfc;
