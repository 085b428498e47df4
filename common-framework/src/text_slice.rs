use std::hash::{Hash, Hasher};
use std::ops::Deref;
use std::sync::Arc;

/// Immutable view into a shared text buffer.
///
/// The slice keeps an `Arc<str>` alive so that it can be freely cloned and
/// moved around without worrying about lifetimes. Narrowing a slice never
/// copies text: the result is another `(buffer, start, end)` triple over the
/// same buffer. It implements `Deref<Target = str>` which allows it to be used
/// transparently as `&str` in most places.
///
/// Equality and hashing compare content, not buffer identity.
#[derive(Clone, Debug)]
pub struct TextSlice {
    buffer: Arc<str>,
    start: usize,
    end: usize,
}

impl TextSlice {
    /// Creates a new slice from the given shared buffer and byte range.
    pub fn new(buffer: Arc<str>, start: usize, end: usize) -> Self {
        debug_assert!(start <= end);
        debug_assert!(end <= buffer.len());
        Self { buffer, start, end }
    }

    /// Creates a slice that covers the entire buffer.
    pub fn from_arc(buffer: Arc<str>) -> Self {
        let end = buffer.len();
        Self {
            buffer,
            start: 0,
            end,
        }
    }

    /// Returns the length in bytes.
    pub fn len(&self) -> usize {
        self.end - self.start
    }

    /// Returns `true` if the slice is empty.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns the underlying shared buffer.
    pub fn buffer(&self) -> Arc<str> {
        Arc::clone(&self.buffer)
    }

    /// Returns the whole underlying text, not just the viewed range.
    /// Offsets from [`start`](Self::start) and [`end`](Self::end) index into it.
    pub fn source(&self) -> &str {
        &self.buffer
    }

    /// Returns the start offset.
    pub fn start(&self) -> usize {
        self.start
    }

    /// Returns the end offset.
    pub fn end(&self) -> usize {
        self.end
    }

    pub fn as_str(&self) -> &str {
        &self.buffer[self.start..self.end]
    }

    /// Splits at an absolute offset into the buffer, which must lie within
    /// `start..=end`. Returns the consumed prefix and the remainder.
    pub fn split_at_offset(&self, offset: usize) -> (TextSlice, TextSlice) {
        debug_assert!(self.start <= offset && offset <= self.end);
        (
            TextSlice::new(self.buffer(), self.start, offset),
            TextSlice::new(self.buffer(), offset, self.end),
        )
    }
}

impl std::fmt::Display for TextSlice {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Deref for TextSlice {
    type Target = str;

    fn deref(&self) -> &Self::Target {
        self.as_str()
    }
}

impl AsRef<str> for TextSlice {
    fn as_ref(&self) -> &str {
        self
    }
}

impl From<&str> for TextSlice {
    fn from(text: &str) -> Self {
        Self::from_arc(Arc::from(text))
    }
}

impl From<String> for TextSlice {
    fn from(text: String) -> Self {
        Self::from_arc(Arc::from(text))
    }
}

impl From<Arc<str>> for TextSlice {
    fn from(buffer: Arc<str>) -> Self {
        Self::from_arc(buffer)
    }
}

impl PartialEq<&str> for TextSlice {
    fn eq(&self, other: &&str) -> bool {
        self.as_str() == *other
    }
}

impl PartialEq<str> for TextSlice {
    fn eq(&self, other: &str) -> bool {
        self.as_str() == other
    }
}

impl PartialEq<TextSlice> for &str {
    fn eq(&self, other: &TextSlice) -> bool {
        *self == other.as_str()
    }
}

impl PartialEq for TextSlice {
    fn eq(&self, other: &Self) -> bool {
        self.as_str() == other.as_str()
    }
}

impl Eq for TextSlice {}

impl Hash for TextSlice {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.as_str().hash(state);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_shares_buffer() {
        let slice = TextSlice::from("hello world");
        let (head, rest) = slice.split_at_offset(5);
        assert_eq!(head, "hello");
        assert_eq!(rest, " world");
        assert!(Arc::ptr_eq(&head.buffer(), &rest.buffer()));
        assert_eq!(rest.start(), 5);
        assert_eq!(rest.source(), "hello world");
    }

    #[test]
    fn test_equality_is_by_content() {
        let a = TextSlice::from("abcabc");
        let (first, second) = a.split_at_offset(3);
        assert_eq!(first, second);
        assert_eq!(first, TextSlice::from("abc"));
        assert_ne!(first, a);
    }

    #[test]
    fn test_hash_matches_content() {
        use std::collections::HashSet;

        let mut set = HashSet::new();
        set.insert(TextSlice::from("key"));
        let (_, tail) = TextSlice::from("a key").split_at_offset(2);
        assert!(set.contains(&tail));
    }
}
