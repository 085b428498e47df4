use common_framework::TextSlice;
use matcher_framework::Recognizer;
use std::fmt;
use std::sync::Arc;

type ParseFn<T> = dyn Fn(&TextSlice) -> Option<(T, TextSlice)> + Send + Sync;

/// A monadic parser: from the remaining input to a value and the new
/// remainder, or `None` when the input does not match.
///
/// The remainder is a view into the same buffer as the input, so parsing
/// never copies text. Parsers are immutable handles around a shared
/// function; cloning one is a reference count bump, and a parser built once
/// can be used from any number of threads.
///
/// ```ignore
/// let space = matcher(zero_or_more(whitespace()));
/// let var = matcher(one_or_more(char_class(CharClass::LOWERCASE)))
///     .prefix(&space)
///     .map(|v| Node::atom(Tag::Var, v));
/// ```
pub struct Parser<T> {
    run: Arc<ParseFn<T>>,
}

impl<T> Clone for Parser<T> {
    fn clone(&self) -> Self {
        Self {
            run: Arc::clone(&self.run),
        }
    }
}

impl<T> fmt::Debug for Parser<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Parser").finish_non_exhaustive()
    }
}

impl<T: 'static> Parser<T> {
    /// Wraps a parse function.
    ///
    /// The function must not consume input it does not return a value for:
    /// on `None` the caller continues from its own copy of the input.
    pub fn new<F>(f: F) -> Self
    where
        F: Fn(&TextSlice) -> Option<(T, TextSlice)> + Send + Sync + 'static,
    {
        Self { run: Arc::new(f) }
    }

    pub fn parse(&self, input: &TextSlice) -> Option<(T, TextSlice)> {
        (self.run)(input)
    }

    /// Parses a string, which is first moved into a fresh shared buffer.
    pub fn parse_str(&self, input: &str) -> Option<(T, TextSlice)> {
        self.parse(&TextSlice::from(input))
    }

    /// Transforms the value on success.
    pub fn map<R, F>(&self, f: F) -> Parser<R>
    where
        R: 'static,
        F: Fn(T) -> R + Send + Sync + 'static,
    {
        let p = self.clone();
        Parser::new(move |input| p.parse(input).map(|(value, rest)| (f(value), rest)))
    }

    /// Runs the parser chosen by `f` from this parser's value on the
    /// remaining input.
    pub fn flat_map<R, F>(&self, f: F) -> Parser<R>
    where
        R: 'static,
        F: Fn(T) -> Parser<R> + Send + Sync + 'static,
    {
        let p = self.clone();
        Parser::new(move |input| {
            let (value, rest) = p.parse(input)?;
            f(value).parse(&rest)
        })
    }

    /// Requires `prefix` to match first and discards its value.
    pub fn prefix<R: 'static>(&self, prefix: &Parser<R>) -> Parser<T> {
        let p = self.clone();
        let skip = prefix.clone();
        Parser::new(move |input| {
            let (_, rest) = skip.parse(input)?;
            p.parse(&rest)
        })
    }

    /// Requires `suffix` to match afterwards and discards its value.
    pub fn suffix<R: 'static>(&self, suffix: &Parser<R>) -> Parser<T> {
        let p = self.clone();
        let skip = suffix.clone();
        Parser::new(move |input| {
            let (value, rest) = p.parse(input)?;
            let (_, rest) = skip.parse(&rest)?;
            Some((value, rest))
        })
    }

    /// Tries this parser, then `alt` on the original input.
    pub fn or(&self, alt: &Parser<T>) -> Parser<T> {
        let p = self.clone();
        let alt = alt.clone();
        Parser::new(move |input| p.parse(input).or_else(|| alt.parse(input)))
    }

    /// Tries this parser, else succeeds with `default` without consuming.
    pub fn or_default(&self, default: T) -> Parser<T>
    where
        T: Clone + Send + Sync,
    {
        let p = self.clone();
        Parser::new(move |input| {
            p.parse(input)
                .or_else(|| Some((default.clone(), input.clone())))
        })
    }

    /// Collects as many matches as possible, in order. Always succeeds.
    pub fn zero_or_more(&self) -> Parser<Vec<T>> {
        let p = self.clone();
        Parser::new(move |input| Some(p.repeat(input, Vec::new())))
    }

    /// Collects as many matches as possible, in order. Needs at least one.
    pub fn one_or_more(&self) -> Parser<Vec<T>> {
        let p = self.clone();
        Parser::new(move |input| {
            let (items, rest) = p.repeat(input, Vec::new());
            (!items.is_empty()).then_some((items, rest))
        })
    }

    /// Parses one or more elements separated by `delimiter`, keeping only
    /// the elements.
    pub fn separated<R: 'static>(&self, delimiter: &Parser<R>) -> Parser<Vec<T>> {
        let p = self.clone();
        let tail = self.prefix(delimiter);
        Parser::new(move |input| {
            let (first, rest) = p.parse(input)?;
            Some(tail.repeat(&rest, vec![first]))
        })
    }

    /// Applies the parser until it fails or stops consuming input. A match
    /// that consumes nothing is dropped and ends the loop.
    fn repeat(&self, input: &TextSlice, mut items: Vec<T>) -> (Vec<T>, TextSlice) {
        let mut rest = input.clone();
        while let Some((item, next)) = self.parse(&rest) {
            if next.len() >= rest.len() {
                break;
            }
            items.push(item);
            rest = next;
        }
        (items, rest)
    }
}

/// Lifts a recognizer into a parser whose value is the matched text.
pub fn matcher(recognizer: Recognizer) -> Parser<TextSlice> {
    Parser::new(move |input| {
        let end = recognizer.match_at(input.source(), input.start(), input.end())?;
        Some(input.split_at_offset(end))
    })
}

/// The parser that always succeeds with `value` and consumes nothing.
pub fn unit<T>(value: T) -> Parser<T>
where
    T: Clone + Send + Sync + 'static,
{
    Parser::new(move |input| Some((value.clone(), input.clone())))
}
