//! Text helpers for deep-link rendering
//!
//! Coordinate formatting and the query-value percent-encoder shared by the
//! per-app templates.

use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};

use crate::core::types::NavPoint;

/// Characters left untouched by [`url_encode`].
///
/// Letters, digits and `!$&'()*+,-./:;=?@_~` pass through. This is the
/// platform's query-allowed set, which keeps reserved characters such as `:`
/// and `/` as they are. Existing deep links depend on that, so it is not
/// tightened to RFC 3986 component encoding.
const QUERY_ALLOWED: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'!')
    .remove(b'$')
    .remove(b'&')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')')
    .remove(b'*')
    .remove(b'+')
    .remove(b',')
    .remove(b'-')
    .remove(b'.')
    .remove(b'/')
    .remove(b':')
    .remove(b';')
    .remove(b'=')
    .remove(b'?')
    .remove(b'@')
    .remove(b'_')
    .remove(b'~');

/// Percent-encode a value for embedding in a deep link.
///
/// Space becomes `%20` (never `+`); non-ASCII text is encoded as UTF-8 bytes.
pub fn url_encode(value: &str) -> String {
    utf8_percent_encode(value, QUERY_ALLOWED).to_string()
}

/// Fixed six-fractional-digit rendering used for every coordinate component
pub fn format_degrees(value: f64) -> String {
    format!("{:.6}", value)
}

/// `"<lat>,<lon>"`, with `+(<name>)` appended when the point is named.
///
/// Empty when the coordinate is invalid, which map apps read as "current
/// location".
pub fn coord_string(point: &NavPoint) -> String {
    if !point.has_valid_coordinate() {
        return String::new();
    }

    let lat_lon = point.coordinate().to_lat_lon_string();
    if point.name().is_empty() {
        lat_lon
    } else {
        format!("{}+({})", lat_lon, url_encode(point.name()))
    }
}

/// Whether `c` may appear literally in a URL: RFC 3986 unreserved and
/// reserved characters, plus `%` for escapes
pub fn is_url_char(c: char) -> bool {
    c.is_ascii_alphanumeric()
        || matches!(
            c,
            '-' | '.' | '_' | '~'
                | ':' | '/' | '?' | '#' | '[' | ']' | '@'
                | '!' | '$' | '&' | '\'' | '(' | ')' | '*' | '+' | ',' | ';' | '='
                | '%'
        )
}

/// Byte offset of the first `%` not followed by two hex digits
pub fn invalid_escape(raw: &str) -> Option<usize> {
    let bytes = raw.as_bytes();
    bytes
        .iter()
        .enumerate()
        .filter(|(_, b)| **b == b'%')
        .map(|(i, _)| i)
        .find(|&i| {
            !matches!(
                bytes.get(i + 1..i + 3),
                Some([hi, lo]) if hi.is_ascii_hexdigit() && lo.is_ascii_hexdigit()
            )
        })
}
