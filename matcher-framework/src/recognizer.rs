use common_framework::CharClass;

/// A stateless matching rule over text.
///
/// A recognizer answers "does this pattern match at `start`, and where does the
/// match end" without building any value. Recognizers are plain data: an
/// explicit combinator tree interpreted by [`match_at`](Recognizer::match_at),
/// so the same instance can be reused indefinitely and shared across threads.
///
/// Build them with the constructor functions in this module:
///
/// ```ignore
/// let relop = choice([characters(&['=']), literal("!=")]);
/// let expr = sequence([one_or_more(char_class(CharClass::LOWERCASE)), relop, digits()]);
/// assert_eq!(expr.recognize("n!=3x"), Some(4));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Recognizer {
    /// The exact string.
    Literal(Box<str>),
    /// Any one of the listed characters.
    Characters(Box<[char]>),
    /// One character belonging to any of the classes.
    Class(CharClass),
    /// Every child, consecutively.
    Sequence(Vec<Recognizer>),
    /// The first child that matches, in order.
    Choice(Vec<Recognizer>),
    /// Greedy repetition, zero or more consuming matches.
    ZeroOrMore(Box<Recognizer>),
    /// Greedy repetition, one or more consuming matches.
    OneOrMore(Box<Recognizer>),
}

impl Recognizer {
    /// Matches against `text[start..end]`, returning the end offset of the
    /// match or `None`.
    ///
    /// Offsets are bytes. Bounds that fall outside `text`, are reversed, or
    /// split a UTF-8 character never match.
    pub fn match_at(&self, text: &str, start: usize, end: usize) -> Option<usize> {
        let window = text.get(..end)?;
        window.get(start..)?;
        self.match_window(window, start)
    }

    /// Matches from the beginning of `text`.
    pub fn recognize(&self, text: &str) -> Option<usize> {
        self.match_window(text, 0)
    }

    /// `window` is the text truncated at the caller's end bound, and `start`
    /// is a char boundary within it.
    fn match_window(&self, window: &str, start: usize) -> Option<usize> {
        match self {
            Recognizer::Literal(lit) => window[start..]
                .starts_with(&**lit)
                .then(|| start + lit.len()),
            Recognizer::Characters(set) => {
                let ch = window[start..].chars().next()?;
                set.contains(&ch).then(|| start + ch.len_utf8())
            }
            Recognizer::Class(class) => {
                let ch = window[start..].chars().next()?;
                class.matches(ch).then(|| start + ch.len_utf8())
            }
            Recognizer::Sequence(parts) => parts
                .iter()
                .try_fold(start, |pos, part| part.match_window(window, pos)),
            Recognizer::Choice(alternatives) => {
                let next = window[start..].chars().next();
                alternatives
                    .iter()
                    .filter(|alt| alt.quick_check(next) != Some(false))
                    .find_map(|alt| alt.match_window(window, start))
            }
            Recognizer::ZeroOrMore(inner) => Some(inner.repeat(window, start)),
            Recognizer::OneOrMore(inner) => {
                let end = inner.repeat(window, start);
                (end > start).then_some(end)
            }
        }
    }

    /// Applies `self` greedily from `start` and returns where the run ends.
    /// An iteration that consumes nothing ends the run, so a nullable inner
    /// recognizer cannot loop forever.
    fn repeat(&self, window: &str, start: usize) -> usize {
        let mut pos = start;
        while let Some(next) = self.match_window(window, pos) {
            if next <= pos {
                break;
            }
            pos = next;
        }
        pos
    }

    /// Returns true if this recognizer can succeed without consuming input.
    pub fn is_nullable(&self) -> bool {
        match self {
            Recognizer::Literal(lit) => lit.is_empty(),
            Recognizer::Characters(_) | Recognizer::Class(_) => false,
            Recognizer::Sequence(parts) => parts.iter().all(Recognizer::is_nullable),
            Recognizer::Choice(alternatives) => alternatives.iter().any(Recognizer::is_nullable),
            Recognizer::ZeroOrMore(_) => true,
            // A OneOrMore needs a consuming iteration.
            Recognizer::OneOrMore(_) => false,
        }
    }

    /// Quick check: returns whether this recognizer might match based on the
    /// next input character (`None` at end of input).
    ///
    /// - `Some(true)`  - The first character is accepted
    /// - `Some(false)` - This recognizer definitely won't match
    /// - `None`        - Unknown, need to try a full match
    pub fn quick_check(&self, first_char: Option<char>) -> Option<bool> {
        match self {
            Recognizer::Literal(lit) => match lit.chars().next() {
                None => Some(true),
                Some(head) => Some(first_char == Some(head)),
            },
            Recognizer::Characters(set) => Some(first_char.is_some_and(|c| set.contains(&c))),
            Recognizer::Class(class) => Some(first_char.is_some_and(|c| class.matches(c))),
            Recognizer::Sequence(parts) => match parts.first() {
                None => Some(true),
                Some(head) if head.is_nullable() => None,
                Some(head) => head.quick_check(first_char),
            },
            Recognizer::Choice(alternatives) => {
                let mut verdict = Some(false);
                for alt in alternatives {
                    match alt.quick_check(first_char) {
                        Some(true) => return Some(true),
                        Some(false) => {}
                        None => verdict = None,
                    }
                }
                verdict
            }
            Recognizer::ZeroOrMore(_) => None,
            Recognizer::OneOrMore(inner) => inner.quick_check(first_char),
        }
    }
}

pub fn literal(text: &str) -> Recognizer {
    Recognizer::Literal(text.into())
}

/// Matches any one of `chars`.
pub fn characters(chars: &[char]) -> Recognizer {
    Recognizer::Characters(chars.into())
}

pub fn char_class(class: CharClass) -> Recognizer {
    Recognizer::Class(class)
}

pub fn sequence<I>(parts: I) -> Recognizer
where
    I: IntoIterator<Item = Recognizer>,
{
    Recognizer::Sequence(parts.into_iter().collect())
}

/// Tries `alternatives` left to right and commits to the first match.
pub fn choice<I>(alternatives: I) -> Recognizer
where
    I: IntoIterator<Item = Recognizer>,
{
    Recognizer::Choice(alternatives.into_iter().collect())
}

pub fn zero_or_more(inner: Recognizer) -> Recognizer {
    Recognizer::ZeroOrMore(Box::new(inner))
}

pub fn one_or_more(inner: Recognizer) -> Recognizer {
    Recognizer::OneOrMore(Box::new(inner))
}

/// A single ASCII digit.
pub fn digit() -> Recognizer {
    char_class(CharClass::DIGIT)
}

/// One or more ASCII digits.
pub fn digits() -> Recognizer {
    one_or_more(digit())
}

/// One or more whitespace characters.
pub fn whitespace() -> Recognizer {
    one_or_more(char_class(CharClass::WHITESPACE))
}
