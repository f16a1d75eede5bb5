//! Command-line front end for identicard.
//!
//! Fills an identity record from a JSON file and flags, validates it, and
//! turns it into a vCard that is printed (for QR rendering) or saved as a
//! `.vcf` download.

pub mod cli;
pub mod commands;
pub mod error;
pub mod export;
pub mod input;
