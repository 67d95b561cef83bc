use std::borrow::Cow;

use regex::Regex;

use super::locations::Location;
use crate::error::Error;

/// Cursor into the source text. Whitespace is never skipped implicitly.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct ParserInput<'a> {
    source: &'a str,
    offset: usize,
}

impl<'a> ParserInput<'a> {
    pub(crate) fn new(source: &'a str) -> Self {
        Self { source, offset: 0 }
    }
    pub(crate) fn rest(&self) -> &'a str {
        &self.source[self.offset..]
    }
    pub(crate) fn is_empty(&self) -> bool {
        self.offset >= self.source.len()
    }
    pub(crate) fn location(&self) -> Location {
        Location::of_offset(self.source, self.offset)
    }
    fn advance(self, len: usize) -> Self {
        Self {
            source: self.source,
            offset: self.offset + len,
        }
    }
}

/// What was expected, and where it was not found.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Failure<'a> {
    expected: Cow<'static, str>,
    at: ParserInput<'a>,
}

impl<'a> Failure<'a> {
    pub(crate) fn new(expected: impl Into<Cow<'static, str>>, at: ParserInput<'a>) -> Self {
        Self {
            expected: expected.into(),
            at,
        }
    }
}

impl std::fmt::Display for Failure<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {} expected but ", self.at.location(), self.expected)?;
        if self.at.is_empty() {
            write!(f, "end of source found")
        } else {
            write!(f, "`{}' found", self.at.rest())
        }
    }
}

impl From<Failure<'_>> for Error {
    fn from(failure: Failure<'_>) -> Self {
        Error::ParseFailure(failure.to_string())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum ParseResult<'a, Output> {
    Ok((Output, ParserInput<'a>)),
    Err(Failure<'a>),
}

impl<'a, T> ParseResult<'a, T> {
    /// Tries `op` when `self` failed. The failure of the last alternative
    /// tried is the one that survives.
    pub(super) fn or_else<O>(self, op: O) -> Self
    where
        O: FnOnce() -> Self,
    {
        match self {
            Self::Ok(inner) => Self::Ok(inner),
            Self::Err(_) => op(),
        }
    }
    pub(super) fn map<U, F>(self, op: F) -> ParseResult<'a, U>
    where
        F: FnOnce((T, ParserInput<'a>)) -> (U, ParserInput<'a>),
    {
        match self {
            Self::Ok(inner) => ParseResult::Ok(op(inner)),
            Self::Err(failure) => ParseResult::Err(failure),
        }
    }
    pub(super) fn and_then<U, F>(self, op: F) -> ParseResult<'a, U>
    where
        F: FnOnce((T, ParserInput<'a>)) -> ParseResult<'a, U>,
    {
        match self {
            Self::Ok(inner) => op(inner),
            Self::Err(failure) => ParseResult::Err(failure),
        }
    }
}

pub(super) trait Parser<'a, Output> {
    fn parse(&self, input: ParserInput<'a>) -> ParseResult<'a, Output>;
    fn map<F, MappedOutput>(self, map_fn: F) -> BoxedParser<'a, MappedOutput>
    where
        Self: Sized + 'a,
        Output: 'a,
        MappedOutput: 'a,
        F: Fn(Output) -> MappedOutput + 'a,
    {
        BoxedParser::new(map(self, map_fn))
    }
    fn try_map<F, MappedOutput>(self, map_fn: F) -> BoxedParser<'a, MappedOutput>
    where
        Self: Sized + 'a,
        Output: 'a,
        MappedOutput: 'a,
        F: Fn(Output) -> Result<MappedOutput, String> + 'a,
    {
        BoxedParser::new(try_map(self, map_fn))
    }
    fn or(self, parser: impl Parser<'a, Output> + 'a) -> BoxedParser<'a, Output>
    where
        Self: Sized + 'a,
        Output: 'a,
    {
        let alternative = move |input| self.parse(input).or_else(|| parser.parse(input));
        BoxedParser::new(alternative)
    }
}

impl<'a, F, Output> Parser<'a, Output> for F
where
    F: Fn(ParserInput<'a>) -> ParseResult<'a, Output>,
{
    fn parse(&self, input: ParserInput<'a>) -> ParseResult<'a, Output> {
        self(input)
    }
}

pub(super) struct BoxedParser<'a, Output> {
    parser: Box<dyn Parser<'a, Output> + 'a>,
}

impl<'a, Output> BoxedParser<'a, Output> {
    fn new(parser: impl Parser<'a, Output> + 'a) -> Self {
        Self {
            parser: Box::new(parser),
        }
    }
}

impl<'a, Output> Parser<'a, Output> for BoxedParser<'a, Output> {
    fn parse(&self, input: ParserInput<'a>) -> ParseResult<'a, Output> {
        self.parser.parse(input)
    }
}

pub(super) fn pair<'a, R1, R2>(
    parser1: impl Parser<'a, R1>,
    parser2: impl Parser<'a, R2>,
) -> impl Parser<'a, (R1, R2)> {
    move |input| {
        parser1.parse(input).and_then(|(result1, next_input)| {
            parser2
                .parse(next_input)
                .map(|(result2, rest)| ((result1, result2), rest))
        })
    }
}

pub(super) fn map<'a, F, A, B>(
    parser: impl Parser<'a, A>,
    map_fn: F,
) -> impl Fn(ParserInput<'a>) -> ParseResult<'a, B>
where
    F: Fn(A) -> B,
{
    move |input| {
        parser
            .parse(input)
            .map(|(result, rest)| (map_fn(result), rest))
    }
}

/// Like [`map`], but a rejected output fails at the position the parser
/// started from, with the returned message as the expectation.
pub(super) fn try_map<'a, F, A, B>(
    parser: impl Parser<'a, A>,
    map_fn: F,
) -> impl Fn(ParserInput<'a>) -> ParseResult<'a, B>
where
    F: Fn(A) -> Result<B, String>,
{
    move |input| {
        parser
            .parse(input)
            .and_then(|(result, rest)| match map_fn(result) {
                Ok(mapped) => ParseResult::Ok((mapped, rest)),
                Err(expected) => ParseResult::Err(Failure::new(expected, input)),
            })
    }
}

pub(super) fn left<'a, A, B>(
    left_parser: impl Parser<'a, A>,
    right_parser: impl Parser<'a, B>,
) -> impl Parser<'a, A> {
    map(pair(left_parser, right_parser), |(left, _right)| left)
}

pub(super) fn right<'a, A, B>(
    left_parser: impl Parser<'a, A>,
    right_parser: impl Parser<'a, B>,
) -> impl Parser<'a, B> {
    map(pair(left_parser, right_parser), |(_left, right)| right)
}

pub(super) fn maybe<'a, R>(parser: impl Parser<'a, R>) -> impl Parser<'a, Option<R>> {
    move |input| match parser.parse(input) {
        ParseResult::Ok((value, rest)) => ParseResult::Ok((Some(value), rest)),
        ParseResult::Err(_) => ParseResult::Ok((None, input)),
    }
}

/// One or more `parser`s separated by `sep`. A separator that is not
/// followed by another element is left unconsumed.
pub(super) fn sep_by<'a, R, S>(
    parser: impl Parser<'a, R>,
    sep: impl Parser<'a, S>,
) -> impl Parser<'a, Vec<R>> {
    move |input| {
        parser.parse(input).and_then(|(first, rest)| {
            let mut result = vec![first];
            let mut tmp_input = rest;
            while let ParseResult::Ok((next, rest)) =
                sep.parse(tmp_input).and_then(|(_, s)| parser.parse(s))
            {
                tmp_input = rest;
                result.push(next);
            }
            ParseResult::Ok((result, tmp_input))
        })
    }
}

/// Matches the literal `expected` at the cursor.
pub(super) fn literal<'a>(expected: &'static str) -> impl Parser<'a, ()> {
    move |input: ParserInput<'a>| {
        if input.rest().starts_with(expected) {
            ParseResult::Ok(((), input.advance(expected.len())))
        } else {
            ParseResult::Err(Failure::new(format!("`{expected}'"), input))
        }
    }
}

/// Matches `regex`, which must be anchored with `^`, and yields the lexeme.
pub(super) fn pattern<'a>(
    regex: &'static Regex,
    expected: &'static str,
) -> impl Parser<'a, &'a str> {
    move |input: ParserInput<'a>| match regex.find(input.rest()) {
        Some(m) => ParseResult::Ok((m.as_str(), input.advance(m.end()))),
        None => ParseResult::Err(Failure::new(expected, input)),
    }
}

pub(super) fn end_of_input(input: ParserInput) -> ParseResult<()> {
    if input.is_empty() {
        ParseResult::Ok(((), input))
    } else {
        ParseResult::Err(Failure::new("end of input", input))
    }
}
