//! Common Framework
//!
//! Text utilities shared by matcher-framework and parser-framework: character
//! classification, numeric conversion, zero-copy text views and positions.

pub mod char_class;
pub mod convert;
#[cfg(feature = "escape")]
pub mod escape;
pub mod position;
pub mod text_slice;

pub use char_class::CharClass;
pub use convert::to_integer;
pub use position::Position;
pub use text_slice::TextSlice;
