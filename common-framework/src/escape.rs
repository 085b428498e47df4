//! Percent and Unicode escaping in the manner of JavaScript's `encodeURI`,
//! `encodeURIComponent` and `escape`.
//!
//! Each function passes through its own "never escape" set and hex-escapes
//! everything else. Input is walked as UTF-16 code units: units below 256
//! become `%XX`, wider units become `%uXXXX`, so a character outside the
//! basic plane is written as its surrogate pair.
//!
//! ```text
//! escape()             - uriAlpha | decimalDigit | escapeSymbols
//! encodeURI()          - uriReserved | uriUnescaped | '#'
//! encodeURIComponent() - uriUnescaped
//! ```

use crate::char_class::CharClass;

const ENCODE_URI: CharClass = CharClass::LETTER
    .union(CharClass::DIGIT)
    .union(CharClass::NUMBER_SIGN)
    .union(CharClass::URI_RESERVED)
    .union(CharClass::URI_MARK);

const ENCODE_URI_COMPONENT: CharClass = CharClass::LETTER
    .union(CharClass::DIGIT)
    .union(CharClass::URI_MARK);

const ESCAPE: CharClass = CharClass::LETTER
    .union(CharClass::DIGIT)
    .union(CharClass::ESCAPE_SYMS);

pub fn encode_uri(uri: &str) -> String {
    encode_chars(uri, ENCODE_URI)
}

pub fn encode_uri_component(uri: &str) -> String {
    encode_chars(uri, ENCODE_URI_COMPONENT)
}

/// Like [`encode_uri_component`] but with the `escape` symbol set.
pub fn escape(uri: &str) -> String {
    encode_chars(uri, ESCAPE)
}

fn encode_chars(input: &str, keep: CharClass) -> String {
    let mut buf = String::with_capacity(input.len());
    for unit in input.encode_utf16() {
        if unit >= 256 {
            buf.push_str(&format!("%u{:04X}", unit));
        } else {
            let ch = char::from(unit as u8);
            if keep.matches(ch) {
                buf.push(ch);
            } else {
                buf.push_str(&format!("%{:02X}", unit));
            }
        }
    }
    buf
}
