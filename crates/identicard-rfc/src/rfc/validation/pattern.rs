use regex_lite::Regex;

/// Compiles a pattern that is a string literal in this crate.
#[expect(clippy::expect_used)]
pub(super) fn compile(pattern: &str) -> Regex {
    Regex::new(pattern).expect("validator pattern must compile")
}
