//! Web address validation.

use std::sync::LazyLock;

use identicard_core::constants::URL_ERROR_MESSAGE;
use regex_lite::Regex;

use super::pattern::compile;
use crate::rfc::uri::ensure_https;

/// Optional scheme, host of letters/digits/dots/hyphens, a 2-6 letter final
/// label (dots allowed), then an optional path of word characters, dots,
/// hyphens, spaces and slashes.
static URL_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    compile(r"(?i)^(https?://)?([0-9a-z.-]+)\.([a-z.]{2,6})[/0-9a-z_ .-]*/?$")
});

/// Returns whether the value is an acceptable web address.
///
/// Empty or whitespace-only input is valid. A value without an http(s)
/// scheme is checked as if `https://` were prefixed, so bare domains such as
/// `example.com` pass.
#[must_use]
pub fn is_valid_url(value: &str) -> bool {
    ensure_https(value).is_none_or(|url| URL_PATTERN.is_match(&url))
}

/// Returns the URL error message, or `None` when the value is acceptable.
#[must_use]
pub fn get_url_error(value: &str) -> Option<&'static str> {
    if value.trim().is_empty() {
        return None;
    }
    (!is_valid_url(value)).then_some(URL_ERROR_MESSAGE)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_is_valid() {
        assert!(is_valid_url(""));
        assert!(is_valid_url("   "));
        assert_eq!(get_url_error(""), None);
        assert_eq!(get_url_error(" \t"), None);
    }

    #[test]
    fn valid_urls() {
        assert!(is_valid_url("https://example.com"));
        assert!(is_valid_url("http://sub.domain.org/path"));
        assert!(is_valid_url("https://linkedin.com/in/user"));
        assert!(is_valid_url("example.com"));
        assert!(is_valid_url("  https://x.com  "));
        assert!(is_valid_url("HTTPS://Example.COM/"));
        assert!(is_valid_url("bbc.co.uk/news"));
    }

    #[test]
    fn invalid_urls() {
        assert!(!is_valid_url("not a url"));
        assert!(!is_valid_url("htp://wrong.com"));
        assert!(!is_valid_url("localhost"));
        assert!(!is_valid_url("example.c"));
    }

    #[test]
    fn query_and_fragment_are_rejected() {
        assert!(!is_valid_url("example.com/?q=1"));
        assert!(!is_valid_url("example.com/#top"));
    }

    #[test]
    fn at_sign_in_path_is_rejected() {
        // handles such as tiktok.com/@user fall outside the path class
        assert!(!is_valid_url("tiktok.com/@ali"));
        assert!(is_valid_url("tiktok.com/ali"));
        assert_eq!(get_url_error("tiktok.com/@ali"), Some(URL_ERROR_MESSAGE));
    }

    #[test]
    fn error_message() {
        assert_eq!(get_url_error("https://example.com"), None);
        assert_eq!(get_url_error("linkedin.com/in/me"), None);
        assert_eq!(
            get_url_error("not a url"),
            Some("Please enter a valid URL (e.g. https://...).")
        );
    }
}
