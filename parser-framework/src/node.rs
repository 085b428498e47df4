use crate::printer::Printer;
use common_framework::TextSlice;
use std::fmt;
use std::hash::Hash;

/// The label set of one grammar's nodes.
///
/// Each grammar defines its own closed enum of tags and implements this
/// trait for it:
///
/// ```ignore
/// #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
/// enum Tag { Expr, Var, Op, Integer }
///
/// impl NodeTag for Tag {}
/// ```
pub trait NodeTag: Copy + Eq + Hash + fmt::Debug {
    /// The name the printer uses for this tag.
    ///
    /// Default implementation is the `Debug` rendering.
    fn label(&self) -> String {
        format!("{:?}", self)
    }
}

/// The payload of an [`Atom`].
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Value {
    Text(TextSlice),
    Integer(u64),
    Char(char),
}

impl Value {
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Value::Text(text) => Some(text.as_str()),
            _ => None,
        }
    }

    pub fn as_integer(&self) -> Option<u64> {
        match self {
            Value::Integer(n) => Some(*n),
            _ => None,
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Text(text) => f.write_str(text),
            Value::Integer(n) => write!(f, "{}", n),
            Value::Char(ch) => write!(f, "{}", ch),
        }
    }
}

impl From<TextSlice> for Value {
    fn from(text: TextSlice) -> Self {
        Value::Text(text)
    }
}

impl From<&str> for Value {
    fn from(text: &str) -> Self {
        Value::Text(TextSlice::from(text))
    }
}

impl From<String> for Value {
    fn from(text: String) -> Self {
        Value::Text(TextSlice::from(text))
    }
}

impl From<u64> for Value {
    fn from(n: u64) -> Self {
        Value::Integer(n)
    }
}

impl From<char> for Value {
    fn from(ch: char) -> Self {
        Value::Char(ch)
    }
}

/// A leaf: a tag plus one atomic value.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Atom<T> {
    tag: T,
    value: Value,
}

impl<T: NodeTag> Atom<T> {
    pub fn tag(&self) -> T {
        self.tag
    }

    pub fn value(&self) -> &Value {
        &self.value
    }
}

/// An interior node: a tag plus its children in grammar order.
///
/// Built once through [`StructBuilder`] or [`Node::structure`] and read-only
/// afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Struct<T> {
    tag: T,
    children: Vec<Node<T>>,
}

impl<T: NodeTag> Struct<T> {
    pub fn tag(&self) -> T {
        self.tag
    }

    pub fn children(&self) -> &[Node<T>] {
        &self.children
    }
}

/// An AST element. Equality and hashing are structural.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Node<T> {
    Atom(Atom<T>),
    Struct(Struct<T>),
}

impl<T: NodeTag> Node<T> {
    pub fn atom(tag: T, value: impl Into<Value>) -> Self {
        Node::Atom(Atom {
            tag,
            value: value.into(),
        })
    }

    pub fn structure<I>(tag: T, children: I) -> Self
    where
        I: IntoIterator<Item = Node<T>>,
    {
        Node::Struct(Struct {
            tag,
            children: children.into_iter().collect(),
        })
    }

    pub fn builder(tag: T) -> StructBuilder<T> {
        StructBuilder::new(tag)
    }

    pub fn tag(&self) -> T {
        match self {
            Node::Atom(atom) => atom.tag,
            Node::Struct(node) => node.tag,
        }
    }

    pub fn as_atom(&self) -> Option<&Atom<T>> {
        match self {
            Node::Atom(atom) => Some(atom),
            Node::Struct(_) => None,
        }
    }

    pub fn as_struct(&self) -> Option<&Struct<T>> {
        match self {
            Node::Struct(node) => Some(node),
            Node::Atom(_) => None,
        }
    }

    /// Returns the atom's value, or `None` for a struct.
    pub fn value(&self) -> Option<&Value> {
        self.as_atom().map(Atom::value)
    }

    /// Returns the struct's children; atoms have none.
    pub fn children(&self) -> &[Node<T>] {
        match self {
            Node::Struct(node) => &node.children,
            Node::Atom(_) => &[],
        }
    }
}

impl<T: NodeTag> fmt::Display for Node<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        Printer::default().write(self, f)
    }
}

/// Appends children to a struct under construction and yields the finished
/// node from [`build`](StructBuilder::build).
#[derive(Debug, Clone)]
pub struct StructBuilder<T> {
    tag: T,
    children: Vec<Node<T>>,
}

impl<T: NodeTag> StructBuilder<T> {
    pub fn new(tag: T) -> Self {
        Self {
            tag,
            children: Vec::new(),
        }
    }

    pub fn add(mut self, node: Node<T>) -> Self {
        self.children.push(node);
        self
    }

    /// Adds the node if there is one; optional productions that did not
    /// match stay out of the tree.
    pub fn add_not_null(mut self, node: Option<Node<T>>) -> Self {
        self.children.extend(node);
        self
    }

    pub fn extend<I>(mut self, nodes: I) -> Self
    where
        I: IntoIterator<Item = Node<T>>,
    {
        self.children.extend(nodes);
        self
    }

    pub fn len(&self) -> usize {
        self.children.len()
    }

    pub fn is_empty(&self) -> bool {
        self.children.is_empty()
    }

    pub fn build(self) -> Node<T> {
        Node::Struct(Struct {
            tag: self.tag,
            children: self.children,
        })
    }
}
