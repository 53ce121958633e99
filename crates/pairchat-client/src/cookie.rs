//! Cookie-string parsing.
//!
//! The chat server hands out its CSRF token and session key as cookies;
//! this module pulls named values out of raw cookie strings. The `a=1; b=2`
//! form covers both `Cookie` request headers and the leading part of a
//! `Set-Cookie` value (attribute segments like `Path=/` simply never match
//! the requested name, and bare flags like `HttpOnly` are skipped).

/// A single name/value pair parsed from a cookie string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CookiePair {
    pub name: String,
    pub value: String,
}

/// Parse a cookie string into pairs, preserving order.
///
/// Values are percent-decoded; values that fail to decode are kept raw.
pub fn parse_cookie_header(header: &str) -> Vec<CookiePair> {
    let mut pairs = Vec::new();

    for segment in header.split(';') {
        let segment = segment.trim();
        if let Some((name, value)) = segment.split_once('=') {
            let value = value.trim();
            let decoded = urlencoding::decode(value)
                .unwrap_or(std::borrow::Cow::Borrowed(value))
                .into_owned();
            pairs.push(CookiePair {
                name: name.trim().to_string(),
                value: decoded,
            });
        }
    }

    pairs
}

/// Extract the first cookie named `name` from a cookie string.
///
/// Returns `None` when the name is absent or the string is empty; absence
/// is a valid, silent outcome.
pub fn cookie_value(header: &str, name: &str) -> Option<String> {
    if header.is_empty() {
        return None;
    }

    parse_cookie_header(header)
        .into_iter()
        .find(|pair| pair.name == name)
        .map(|pair| pair.value)
}
