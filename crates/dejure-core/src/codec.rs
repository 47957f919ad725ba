//! Percent-escaping with a Latin-1 fallback.
//!
//! dejure.org expects query terms as percent-escaped ISO-8859-1, and its
//! search backend answers with a mix of UTF-8 and Latin-1 escapes for
//! umlauts depending on the endpoint. [`decode`] tries UTF-8 first and
//! falls back to a byte-wise Latin-1 reading when that leaves a `%` behind.

use percent_encoding::{AsciiSet, NON_ALPHANUMERIC, percent_decode_str, percent_encode};

/// Bytes left unescaped: ASCII letters, digits and `- _ . ~`.
const UNRESERVED: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'~');

/// Percent-escape `decoded` as Latin-1 bytes with uppercase hex.
///
/// Characters outside Latin-1 become `?` first, as a Latin-1 encoder would.
pub fn encode(decoded: &str) -> String {
    if decoded.is_empty() {
        return String::new();
    }
    let latin1: Vec<u8> = decoded
        .chars()
        .map(|c| u8::try_from(c).unwrap_or(b'?'))
        .collect();
    percent_encode(&latin1, UNRESERVED).to_string()
}

/// Undo percent-escaping, accepting both UTF-8 and Latin-1 escapes.
pub fn decode(encoded: &str) -> String {
    if encoded.is_empty() {
        return String::new();
    }
    match percent_decode_str(encoded).decode_utf8() {
        Ok(utf8) if !utf8.contains('%') => utf8.into_owned(),
        _ => decode_latin1(encoded),
    }
}

/// Byte-wise decode: every valid `%XX` is one Latin-1 character, anything
/// else (including a malformed escape) is copied as-is.
fn decode_latin1(encoded: &str) -> String {
    let mut out = String::with_capacity(encoded.len());
    let mut rest = encoded;

    while let Some(c) = rest.chars().next() {
        if c == '%'
            && let Some(byte) = rest.get(1..3).and_then(hex_byte)
        {
            out.push(char::from(byte));
            rest = &rest[3..];
            continue;
        }
        out.push(c);
        rest = &rest[c.len_utf8()..];
    }

    out
}

fn hex_byte(digits: &str) -> Option<u8> {
    if digits.bytes().all(|b| b.is_ascii_hexdigit()) {
        u8::from_str_radix(digits, 16).ok()
    } else {
        None
    }
}

/// Remove the literal `<span>` / `</span>` highlight markup the search
/// backend wraps around matched terms.
pub fn strip_spans(input: &str) -> String {
    input.replace("<span>", "").replace("</span>", "")
}
