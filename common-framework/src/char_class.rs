use bitflags::bitflags;

bitflags! {
    /// Character classes known to the classification table.
    ///
    /// Classes combine with `|`, so a single lookup answers a multi-class test:
    /// `(CharClass::DIGIT | CharClass::LOWERCASE).matches(c)`.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct CharClass: u16 {
        const DIGIT = 1 << 0;
        const LOWERCASE = 1 << 1;
        const UPPERCASE = 1 << 2;
        const WHITESPACE = 1 << 3;
        /// `#`
        const NUMBER_SIGN = 1 << 4;
        /// `; / ? : @ & = + $ ,`
        const URI_RESERVED = 1 << 5;
        /// `- _ . ! ~ * ' ( )`
        const URI_MARK = 1 << 6;
        /// `@ * _ + - . /`
        const ESCAPE_SYMS = 1 << 7;
        const HEX_DIGIT = 1 << 8;

        const LETTER = Self::LOWERCASE.bits() | Self::UPPERCASE.bits();
        const ALPHANUMERIC = Self::LETTER.bits() | Self::DIGIT.bits();
    }
}

const URI_RESERVED_CHARS: &[u8] = b";/?:@&=+$,";
const URI_MARK_CHARS: &[u8] = b"-_.!~*'()";
const ESCAPE_SYMS_CHARS: &[u8] = b"@*_+-./";

static TABLE: [u16; 128] = build_table();

const fn in_set(set: &[u8], ch: u8) -> bool {
    let mut i = 0;
    while i < set.len() {
        if set[i] == ch {
            return true;
        }
        i += 1;
    }
    false
}

const fn build_table() -> [u16; 128] {
    let mut table = [0u16; 128];
    let mut i = 0;
    while i < table.len() {
        let ch = i as u8;
        let mut bits = 0;
        if ch.is_ascii_digit() {
            bits |= CharClass::DIGIT.bits();
        }
        if ch.is_ascii_lowercase() {
            bits |= CharClass::LOWERCASE.bits();
        }
        if ch.is_ascii_uppercase() {
            bits |= CharClass::UPPERCASE.bits();
        }
        if ch.is_ascii_hexdigit() {
            bits |= CharClass::HEX_DIGIT.bits();
        }
        if matches!(ch, b' ' | b'\t' | b'\n' | b'\r' | 0x0b | 0x0c) {
            bits |= CharClass::WHITESPACE.bits();
        }
        if ch == b'#' {
            bits |= CharClass::NUMBER_SIGN.bits();
        }
        if in_set(URI_RESERVED_CHARS, ch) {
            bits |= CharClass::URI_RESERVED.bits();
        }
        if in_set(URI_MARK_CHARS, ch) {
            bits |= CharClass::URI_MARK.bits();
        }
        if in_set(ESCAPE_SYMS_CHARS, ch) {
            bits |= CharClass::ESCAPE_SYMS.bits();
        }
        table[i] = bits;
        i += 1;
    }
    table
}

impl CharClass {
    /// Returns every class the character belongs to.
    /// Characters outside ASCII belong to no class.
    #[inline]
    pub fn of(ch: char) -> CharClass {
        match TABLE.get(ch as usize) {
            Some(bits) => CharClass::from_bits_retain(*bits),
            None => CharClass::empty(),
        }
    }

    /// Returns true if the character belongs to any of the classes in `self`.
    #[inline]
    pub fn matches(self, ch: char) -> bool {
        Self::of(ch).intersects(self)
    }
}

#[inline]
pub fn is_member(ch: char, classes: CharClass) -> bool {
    classes.matches(ch)
}

#[inline]
pub fn is_digit(ch: char) -> bool {
    CharClass::DIGIT.matches(ch)
}

#[inline]
pub fn is_whitespace(ch: char) -> bool {
    CharClass::WHITESPACE.matches(ch)
}
