//! Shared model, configuration and utilities for identicard.
//!
//! Everything here is free of vCard knowledge: the identity record the user
//! fills, the closed set of social platforms, the dial-code table, settings
//! and filename helpers.

pub mod config;
pub mod constants;
pub mod error;
pub mod model;
pub mod util;
