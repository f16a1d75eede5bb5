/// Dial code used when the record leaves the country code blank.
pub const DEFAULT_DIAL_CODE: &str = "+90";

/// Bare dial code of the country whose local numbers carry a trunk `0`.
pub const TRUNK_ZERO_DIAL_CODE: &str = "90";

/// vCard revision emitted by the builder.
pub const VCARD_VERSION: &str = "4.0";

pub const VCARD_MEDIA_TYPE: &str = "text/vcard";
pub const VCARD_MIME_TYPE: &str = const_str::concat!(VCARD_MEDIA_TYPE, ";charset=utf-8");

pub const VCARD_EXTENSION: &str = "vcf";
pub const DEFAULT_FILENAME_STEM: &str = "identity";
pub const DEFAULT_FILENAME: &str =
    const_str::concat!(DEFAULT_FILENAME_STEM, ".", VCARD_EXTENSION);

/// Display name used when neither first nor last name is given.
pub const UNKNOWN_DISPLAY_NAME: &str = "Unknown";

pub const EMAIL_ERROR_MESSAGE: &str = "Please enter a valid email address.";
pub const URL_ERROR_MESSAGE: &str = "Please enter a valid URL (e.g. https://...).";
pub const EMPTY_RECORD_MESSAGE: &str =
    "Please fill in at least one field to create your QR code.";
