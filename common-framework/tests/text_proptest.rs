use common_framework::{to_integer, Position, TextSlice};
use proptest::prelude::*;

/// Decodes `%XX` and `%uXXXX` escapes back to UTF-16 units.
#[cfg(feature = "escape")]
fn unescape(encoded: &str) -> Option<String> {
    let mut units = Vec::new();
    let mut rest = encoded;
    while let Some(ch) = rest.chars().next() {
        if let Some(hex) = rest.strip_prefix("%u") {
            units.push(u16::from_str_radix(hex.get(..4)?, 16).ok()?);
            rest = &hex[4..];
        } else if let Some(hex) = rest.strip_prefix('%') {
            units.push(u16::from_str_radix(hex.get(..2)?, 16).ok()?);
            rest = &hex[2..];
        } else {
            let mut buf = [0u16; 2];
            units.extend_from_slice(ch.encode_utf16(&mut buf));
            rest = &rest[ch.len_utf8()..];
        }
    }
    String::from_utf16(&units).ok()
}

proptest! {
    #[test]
    fn split_preserves_text(text in "\\PC{0,20}", pick in any::<prop::sample::Index>()) {
        let slice = TextSlice::from(text.as_str());
        let boundaries: Vec<usize> = text
            .char_indices()
            .map(|(i, _)| i)
            .chain(std::iter::once(text.len()))
            .collect();
        let offset = boundaries[pick.index(boundaries.len())];

        let (prefix, rest) = slice.split_at_offset(offset);
        prop_assert_eq!(format!("{}{}", prefix, rest), text.clone());
        prop_assert_eq!(prefix.end(), rest.start());
        prop_assert_eq!(rest.len(), text.len() - offset);
    }

    #[test]
    fn to_integer_matches_std_parse(digits in "[0-9]{1,18}") {
        prop_assert_eq!(to_integer(&digits), digits.parse::<u64>().unwrap());
    }

    #[test]
    fn to_integer_stops_at_first_non_digit(digits in "[0-9]{1,9}", tail in "[a-z ]{0,5}") {
        prop_assert_eq!(to_integer(&format!("{}{}", digits, tail)), digits.parse::<u64>().unwrap());
    }

    #[test]
    fn locate_counts_lines(text in "[a-c\n]{0,30}", offset in 0usize..40) {
        let position = Position::locate(&text, offset);
        let clamped = offset.min(text.len());
        let before = &text[..clamped];
        prop_assert_eq!(position.offset, clamped);
        prop_assert_eq!(position.line, before.matches('\n').count() + 1);
        let line_start = before.rfind('\n').map_or(0, |i| i + 1);
        prop_assert_eq!(position.column, clamped - line_start + 1);
    }

    #[cfg(feature = "escape")]
    #[test]
    fn escaped_text_is_ascii_and_reversible(text in "\\PC{0,20}") {
        use common_framework::escape::{encode_uri, encode_uri_component, escape};
        for encoded in [encode_uri(&text), encode_uri_component(&text), escape(&text)] {
            prop_assert!(encoded.is_ascii());
            prop_assert_eq!(unescape(&encoded), Some(text.clone()));
        }
    }
}
