use crate::node::{Node, NodeTag};
use std::fmt::{self, Write};

/// Renders a tree as nested parenthesized text for debugging and test output.
///
/// Atoms print as `(TAG value)`. Structs print their tag, then one child per
/// line indented one level deeper, then the closing parenthesis on its own
/// line at the struct's depth:
///
/// ```text
/// (Expr
///   (Var number)
///   (Op =)
/// )
/// ```
///
/// The output is not meant to be parsed back.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Printer {
    /// Spaces added per nesting level.
    pub indent: usize,
}

impl Default for Printer {
    fn default() -> Self {
        Self { indent: 2 }
    }
}

impl Printer {
    pub fn new(indent: usize) -> Self {
        Self { indent }
    }

    pub fn print<T: NodeTag>(&self, node: &Node<T>) -> String {
        Printed(self, node).to_string()
    }

    pub fn write<T: NodeTag, W: Write>(&self, node: &Node<T>, out: &mut W) -> fmt::Result {
        self.write_at(node, out, 0)
    }

    fn write_at<T: NodeTag, W: Write>(
        &self,
        node: &Node<T>,
        out: &mut W,
        depth: usize,
    ) -> fmt::Result {
        write!(out, "({}", node.tag().label())?;
        match node {
            Node::Atom(atom) => write!(out, " {}", atom.value())?,
            Node::Struct(tree) => {
                out.write_char('\n')?;
                for child in tree.children() {
                    self.pad(out, depth + 1)?;
                    self.write_at(child, out, depth + 1)?;
                    out.write_char('\n')?;
                }
                self.pad(out, depth)?;
            }
        }
        out.write_char(')')
    }

    fn pad<W: Write>(&self, out: &mut W, depth: usize) -> fmt::Result {
        write!(out, "{:width$}", "", width = depth * self.indent)
    }
}

struct Printed<'a, T>(&'a Printer, &'a Node<T>);

impl<T: NodeTag> fmt::Display for Printed<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.write(self.1, f)
    }
}
