//! vCard output tests for identity records.

mod identity;
