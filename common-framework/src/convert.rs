/// Quick conversion of a run of ASCII digits to an unsigned integer.
///
/// Accumulates leading digits and stops at the first non-digit. There is no
/// sign handling and overflow wraps, so callers should only feed it text a
/// digit recognizer has already accepted.
pub fn to_integer(digits: &str) -> u64 {
    digits
        .bytes()
        .take_while(u8::is_ascii_digit)
        .fold(0u64, |n, b| n.wrapping_mul(10).wrapping_add(u64::from(b - b'0')))
}
