//! Web address normalization.

const HTTP_PREFIX: &str = "http://";
const HTTPS_PREFIX: &str = "https://";

/// Returns whether the value starts with `http://` or `https://`, ignoring case.
#[must_use]
pub fn has_http_scheme(value: &str) -> bool {
    [HTTP_PREFIX, HTTPS_PREFIX].iter().any(|prefix| {
        value
            .get(..prefix.len())
            .is_some_and(|head| head.eq_ignore_ascii_case(prefix))
    })
}

/// Trims the value and prefixes `https://` when it has no http(s) scheme.
///
/// Returns `None` for empty or whitespace-only input.
#[must_use]
pub fn ensure_https(value: &str) -> Option<String> {
    let value = value.trim();
    if value.is_empty() {
        return None;
    }

    Some(if has_http_scheme(value) {
        value.to_string()
    } else {
        format!("{HTTPS_PREFIX}{value}")
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scheme_detection_ignores_case() {
        assert!(has_http_scheme("https://example.com"));
        assert!(has_http_scheme("HTTP://example.com"));
        assert!(!has_http_scheme("htp://example.com"));
        assert!(!has_http_scheme("example.com"));
        assert!(!has_http_scheme("ftp://example.com"));
    }

    #[test]
    fn scheme_detection_is_char_boundary_safe() {
        assert!(!has_http_scheme("şşşş"));
        assert!(!has_http_scheme(""));
    }

    #[test]
    fn ensure_https_prefixes_bare_domains() {
        assert_eq!(
            ensure_https("  example.com ").as_deref(),
            Some("https://example.com")
        );
        assert_eq!(
            ensure_https("http://example.com").as_deref(),
            Some("http://example.com")
        );
        assert_eq!(
            ensure_https("HTTPS://Example.com").as_deref(),
            Some("HTTPS://Example.com")
        );
    }

    #[test]
    fn ensure_https_skips_blank() {
        assert_eq!(ensure_https(""), None);
        assert_eq!(ensure_https("   "), None);
    }
}
