use crate::error::ScanError;
use crate::recognizer::Recognizer;
use common_framework::char_class::is_whitespace;
use common_framework::{Position, TextSlice};
use std::fmt;
use std::sync::Arc;

/// Owner of a source text, handing out any number of [`Stream`] cursors over it.
///
/// Several streams can be positioned independently over the same text: one
/// looks ahead while another records where the look-ahead landed, and no
/// substring is ever copied.
#[derive(Debug, Clone)]
pub struct Scanner {
    raw: Arc<str>,
}

impl Scanner {
    /// Creates a scanner over the input string.
    pub fn new<S: Into<String>>(input: S) -> Self {
        let owned = input.into();
        Self::with_arc(Arc::<str>::from(owned))
    }

    /// Creates a scanner from an existing shared buffer.
    pub fn with_arc(raw: Arc<str>) -> Self {
        Self { raw }
    }

    pub fn raw(&self) -> &str {
        &self.raw
    }

    pub fn len(&self) -> usize {
        self.raw.len()
    }

    pub fn is_empty(&self) -> bool {
        self.raw.is_empty()
    }

    /// Returns a stream spanning the whole text.
    pub fn stream(&self) -> Stream<'_> {
        Stream {
            raw: &self.raw,
            pos: 0,
            end: self.raw.len(),
        }
    }

    /// Returns a stream over `pos..end`.
    pub fn stream_at(&self, pos: usize, end: usize) -> Result<Stream<'_>, ScanError> {
        let mut stream = self.stream();
        stream.set(pos, end)?;
        Ok(stream)
    }

    /// Returns an owned, zero-copy view of the stream's range, suitable for
    /// handing to the parser layer.
    pub fn slice(&self, stream: &Stream<'_>) -> Result<TextSlice, ScanError> {
        if !std::ptr::eq(stream.raw, &*self.raw) {
            return Err(ScanError::ForeignStream);
        }
        Ok(TextSlice::new(self.raw.clone(), stream.pos, stream.end))
    }
}

/// A cursor range `[pos, end)` into a [`Scanner`]'s text.
///
/// A stream is two offsets and a borrowed `&str`; it never owns or copies
/// text. `0 <= pos <= end <= len` holds after every operation, and both
/// offsets always sit on character boundaries.
#[derive(Debug, Clone, Copy)]
pub struct Stream<'s> {
    raw: &'s str,
    pos: usize,
    end: usize,
}

impl<'s> Stream<'s> {
    /// Returns the whole underlying text.
    pub fn raw(&self) -> &'s str {
        self.raw
    }

    pub fn pos(&self) -> usize {
        self.pos
    }

    pub fn end(&self) -> usize {
        self.end
    }

    /// Returns the number of bytes left in the range.
    pub fn len(&self) -> usize {
        self.end - self.pos
    }

    pub fn is_empty(&self) -> bool {
        self.pos == self.end
    }

    /// Returns the text between `pos` and `end`.
    pub fn as_str(&self) -> &'s str {
        &self.raw[self.pos..self.end]
    }

    /// Returns the line and column of `pos`.
    pub fn position(&self) -> Position {
        Position::locate(self.raw, self.pos)
    }

    /// Sets the bounds of this stream.
    pub fn set(&mut self, pos: usize, end: usize) -> Result<(), ScanError> {
        let len = self.raw.len();
        if pos > end || end > len {
            return Err(ScanError::OutOfBounds { pos, end, len });
        }
        for offset in [pos, end] {
            if !self.raw.is_char_boundary(offset) {
                return Err(ScanError::NotCharBoundary(offset));
            }
        }
        self.pos = pos;
        self.end = end;
        Ok(())
    }

    /// Sets the bounds of this stream to match `other`.
    pub fn set_from(&mut self, other: &Stream<'s>) -> Result<(), ScanError> {
        self.check_same_text(other)?;
        self.pos = other.pos;
        self.end = other.end;
        Ok(())
    }

    /// Moves `pos` to the end of `other`, stepping over a span that was just
    /// recognized into it.
    pub fn jump(&mut self, other: &Stream<'s>) -> Result<(), ScanError> {
        self.check_same_text(other)?;
        if other.end > self.end {
            return Err(ScanError::OutOfBounds {
                pos: other.end,
                end: self.end,
                len: self.raw.len(),
            });
        }
        self.pos = other.end;
        Ok(())
    }

    /// Returns the next character without advancing, or `None` at the end of
    /// the range.
    pub fn peek(&self) -> Option<char> {
        self.as_str().chars().next()
    }

    /// Advances past the next character and returns it. At the end of the
    /// range this returns `None` and does not move.
    pub fn advance(&mut self) -> Option<char> {
        let ch = self.peek()?;
        self.pos += ch.len_utf8();
        Some(ch)
    }

    /// Runs `recognizer` from `pos` and, if it matches, sets `other` to the
    /// matched span. This stream does not move; follow with
    /// [`jump`](Self::jump) to step over the match.
    pub fn seek(&self, recognizer: &Recognizer, other: &mut Stream<'s>) -> bool {
        match recognizer.match_at(self.raw, self.pos, self.end) {
            Some(matched) => {
                *other = Stream {
                    raw: self.raw,
                    pos: self.pos,
                    end: matched,
                };
                true
            }
            None => false,
        }
    }

    /// Skips over any whitespace characters.
    pub fn skip_ws(&mut self) {
        while self.peek().is_some_and(is_whitespace) {
            self.advance();
        }
    }

    /// Finds the first balanced `left ... right` group at or after `pos`.
    ///
    /// Nested pairs are skipped over so that the outermost matching delimiter
    /// closes the group. On success `other` covers the group, delimiters
    /// included, and `pos` moves just past it. If the range runs out before
    /// the group closes, `pos` is left at `end` and `other` is untouched.
    /// A `right` seen before any `left` is ordinary text.
    pub fn seek_bounds(&mut self, other: &mut Stream<'s>, left: char, right: char) -> bool {
        let raw = self.raw;
        let base = self.pos;
        let mut depth = 0usize;
        let mut open = None;
        for (i, ch) in raw[base..self.end].char_indices() {
            if ch == left {
                if depth == 0 {
                    open = Some(base + i);
                }
                depth += 1;
            } else if ch == right {
                if let Some(start) = open {
                    depth -= 1;
                    if depth == 0 {
                        let close = base + i + ch.len_utf8();
                        self.pos = close;
                        *other = Stream {
                            raw,
                            pos: start,
                            end: close,
                        };
                        return true;
                    }
                }
            }
        }
        self.pos = self.end;
        false
    }

    /// Compares this stream's range with `other[start..end]` without copying
    /// either side. Out-of-range bounds compare unequal.
    pub fn equals_characters(&self, other: &str, start: usize, end: usize) -> bool {
        other
            .as_bytes()
            .get(start..end)
            .is_some_and(|bytes| bytes == self.as_str().as_bytes())
    }

    fn check_same_text(&self, other: &Stream<'s>) -> Result<(), ScanError> {
        if std::ptr::eq(self.raw, other.raw) {
            Ok(())
        } else {
            Err(ScanError::ForeignStream)
        }
    }
}

impl PartialEq for Stream<'_> {
    fn eq(&self, other: &Self) -> bool {
        self.equals_characters(other.raw, other.pos, other.end)
    }
}

impl Eq for Stream<'_> {}

impl fmt::Display for Stream<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
