//! Parser Framework
//!
//! Typed AST nodes and monadic parser combinators built on top of the
//! recognizers in matcher-framework.

pub mod node;
pub mod parser;
pub mod printer;

#[cfg(feature = "escape")]
pub use common_framework::escape;
pub use common_framework::{to_integer, CharClass, Position, TextSlice};
pub use matcher_framework::{self, Recognizer};
pub use node::{Atom, Node, NodeTag, Struct, StructBuilder, Value};
pub use parser::{matcher, unit, Parser};
pub use printer::Printer;
