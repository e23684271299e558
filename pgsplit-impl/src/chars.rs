//! Character level helpers used by the splitter.

/// Returns whether `c` is likely part of an identifier.
///
/// ASCII letters, digits, `_` and `$` qualify, as does every code point outside the ASCII
/// range. A `$` preceded by such a character is never the start of a dollar quoted string.
#[must_use]
pub fn is_identifier_continuation(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_' || c == '$' || !c.is_ascii()
}

/// Returns whether every character of `s` is Unicode whitespace.
///
/// An empty string counts as whitespace only.
#[must_use]
pub fn is_all_whitespace(s: &str) -> bool {
    s.chars().all(char::is_whitespace)
}

/// Trims Unicode whitespace from both ends of `s`.
#[must_use]
pub fn trim_whitespace(s: &str) -> &str {
    s.trim_matches(char::is_whitespace)
}
