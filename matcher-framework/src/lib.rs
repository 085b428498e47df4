//! Matcher Framework
//!
//! Recognizers answer "does this pattern match here, and how far" without
//! building values; the scanner drives them, and plain character scanning,
//! over cursors into a shared text.

pub mod error;
pub mod recognizer;
pub mod scanner;

pub use common_framework::{CharClass, Position};
pub use error::ScanError;
pub use recognizer::{
    char_class, characters, choice, digit, digits, literal, one_or_more, sequence, whitespace,
    zero_or_more, Recognizer,
};
pub use scanner::{Scanner, Stream};
