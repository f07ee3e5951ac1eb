//! Grammar-agnostic combinators.
//!
//! Every function here takes parsers and returns a new parser. None of them
//! panic: malformed input always produces a [`ParseFailure`] that an
//! enclosing [`alternation`], [`optional`] or [`many`] can absorb.

use regex::Regex;

use super::{Cursor, ParseFailure, ParseOutcome, Parser, Success};

/// Consumes exactly `expected` at the cursor.
pub fn literal<'a>(expected: &'static str) -> impl Parser<'a, &'a str> + Copy {
    move |cursor: Cursor<'a>| -> ParseOutcome<'a, &'a str> {
        if cursor.rest().starts_with(expected) {
            let next = cursor.advance(expected.len());
            Ok(Success::new(next, cursor.slice_to(next)))
        } else {
            Err(ParseFailure::new(
                cursor,
                format!("could not find {expected:?} at {}", cursor.offset()),
            ))
        }
    }
}

/// Consumes the match of `regex` when it begins exactly at the cursor.
///
/// Patterns are expected to be written with a leading `^`; a match found
/// further along the input is still rejected.
pub fn pattern<'a>(regex: &'static Regex) -> impl Parser<'a, &'a str> + Copy {
    move |cursor: Cursor<'a>| -> ParseOutcome<'a, &'a str> {
        match regex.find(cursor.rest()) {
            Some(found) if found.start() == 0 => {
                Ok(Success::new(cursor.advance(found.end()), found.as_str()))
            }
            _ => Err(ParseFailure::new(
                cursor,
                format!("could not match /{}/", regex.as_str()),
            )),
        }
    }
}

/// Replaces a successful value via `f`; failures pass through unchanged.
pub fn map<'a, A, B>(parser: impl Parser<'a, A>, f: impl Fn(A) -> B) -> impl Parser<'a, B> {
    move |cursor: Cursor<'a>| -> ParseOutcome<'a, B> {
        parser.parse(cursor).map(|success| success.map(&f))
    }
}

/// A tuple of parsers tried in order from the same cursor.
pub trait Alternatives<'a, V> {
    fn choose(&self, cursor: Cursor<'a>) -> ParseOutcome<'a, V>;
}

/// A tuple of parsers run one after another, their text concatenated.
pub trait Sequence<'a, Values> {
    fn concat(&self, cursor: Cursor<'a>) -> ParseOutcome<'a, String>;
}

macro_rules! impl_alternatives {
    ($first:ident $first_idx:tt $(, $rest:ident $idx:tt)+) => {
        impl<'a, V, $first, $($rest),+> Alternatives<'a, V> for ($first, $($rest),+)
        where
            $first: Parser<'a, V>,
            $($rest: Parser<'a, V>),+
        {
            fn choose(&self, cursor: Cursor<'a>) -> ParseOutcome<'a, V> {
                let mut outcome = self.$first_idx.parse(cursor);
                $(
                    if outcome.is_err() {
                        outcome = self.$idx.parse(cursor);
                    }
                )+
                outcome
            }
        }
    };
}

impl_alternatives!(P0 0, P1 1);
impl_alternatives!(P0 0, P1 1, P2 2);
impl_alternatives!(P0 0, P1 1, P2 2, P3 3);
impl_alternatives!(P0 0, P1 1, P2 2, P3 3, P4 4);
impl_alternatives!(P0 0, P1 1, P2 2, P3 3, P4 4, P5 5);
impl_alternatives!(P0 0, P1 1, P2 2, P3 3, P4 4, P5 5, P6 6);
impl_alternatives!(P0 0, P1 1, P2 2, P3 3, P4 4, P5 5, P6 6, P7 7);

macro_rules! impl_sequence {
    ($($parser:ident $value:ident $idx:tt),+) => {
        impl<'a, $($parser, $value),+> Sequence<'a, ($($value,)+)> for ($($parser,)+)
        where
            $($parser: Parser<'a, $value>, $value: AsRef<str>),+
        {
            fn concat(&self, cursor: Cursor<'a>) -> ParseOutcome<'a, String> {
                let mut text = String::new();
                let mut cursor = cursor;
                $(
                    let Success { cursor: next, value } = self.$idx.parse(cursor)?;
                    text.push_str(value.as_ref());
                    cursor = next;
                )+
                Ok(Success::new(cursor, text))
            }
        }
    };
}

impl_sequence!(P0 V0 0, P1 V1 1);
impl_sequence!(P0 V0 0, P1 V1 1, P2 V2 2);
impl_sequence!(P0 V0 0, P1 V1 1, P2 V2 2, P3 V3 3);
impl_sequence!(P0 V0 0, P1 V1 1, P2 V2 2, P3 V3 3, P4 V4 4);

/// Tries each alternative from the original cursor; the first success wins.
///
/// When every alternative fails, the last failure is returned.
pub fn alternation<'a, V>(alternatives: impl Alternatives<'a, V>) -> impl Parser<'a, V> {
    move |cursor: Cursor<'a>| -> ParseOutcome<'a, V> { alternatives.choose(cursor) }
}

/// Runs parsers left to right, concatenating their textual values.
pub fn sequence<'a, Values>(parsers: impl Sequence<'a, Values>) -> impl Parser<'a, String> {
    move |cursor: Cursor<'a>| -> ParseOutcome<'a, String> { parsers.concat(cursor) }
}

fn repeat<'a, V>(
    parser: &impl Parser<'a, V>,
    mut cursor: Cursor<'a>,
    values: &mut Vec<V>,
) -> Cursor<'a> {
    while let Ok(Success { cursor: next, value }) = parser.parse(cursor) {
        // A zero-width success would repeat forever.
        if next.offset() == cursor.offset() {
            break;
        }
        values.push(value);
        cursor = next;
    }
    cursor
}

/// Zero or more repetitions. Always succeeds.
pub fn many<'a, V>(parser: impl Parser<'a, V>) -> impl Parser<'a, Vec<V>> {
    move |cursor: Cursor<'a>| -> ParseOutcome<'a, Vec<V>> {
        let mut values = Vec::new();
        let cursor = repeat(&parser, cursor, &mut values);
        Ok(Success::new(cursor, values))
    }
}

/// One or more repetitions. Zero matches is a plain failure with no value.
pub fn some<'a, V>(parser: impl Parser<'a, V>) -> impl Parser<'a, Vec<V>> {
    move |cursor: Cursor<'a>| -> ParseOutcome<'a, Vec<V>> {
        let first = parser.parse(cursor)?;
        let mut values = vec![first.value];
        let cursor = repeat(&parser, first.cursor, &mut values);
        Ok(Success::new(cursor, values))
    }
}

/// Always succeeds; `None` and an unmoved cursor when `parser` fails.
pub fn optional<'a, V>(parser: impl Parser<'a, V>) -> impl Parser<'a, Option<V>> {
    move |cursor: Cursor<'a>| -> ParseOutcome<'a, Option<V>> {
        Ok(match parser.parse(cursor) {
            Ok(success) => success.map(Some),
            Err(_) => Success::new(cursor, None),
        })
    }
}

/// `left`, `inner`, `right` in order, keeping only `inner`'s value.
pub fn region<'a, L, V, R>(
    left: impl Parser<'a, L>,
    inner: impl Parser<'a, V>,
    right: impl Parser<'a, R>,
) -> impl Parser<'a, V> {
    move |cursor: Cursor<'a>| -> ParseOutcome<'a, V> {
        let opened = left.parse(cursor)?;
        let Success { cursor, value } = inner.parse(opened.cursor)?;
        let closed = right.parse(cursor)?;
        Ok(Success::new(closed.cursor, value))
    }
}

/// A [`region`] whose closing delimiter is the same literal as the opening one.
pub fn enclosed<'a, V>(delimiter: &'static str, inner: impl Parser<'a, V>) -> impl Parser<'a, V> {
    region(literal(delimiter), inner, literal(delimiter))
}

/// Runs `prefix` then `parser`, discarding the prefix value.
pub fn preceded<'a, P, V>(
    prefix: impl Parser<'a, P>,
    parser: impl Parser<'a, V>,
) -> impl Parser<'a, V> {
    move |cursor: Cursor<'a>| -> ParseOutcome<'a, V> {
        let skipped = prefix.parse(cursor)?;
        parser.parse(skipped.cursor)
    }
}

/// Succeeds only if `parser` leaves no input behind.
///
/// On leftover input the failure offset points at the first unconsumed byte.
pub fn all_consuming<'a, V>(parser: impl Parser<'a, V>) -> impl Parser<'a, V> {
    move |cursor: Cursor<'a>| -> ParseOutcome<'a, V> {
        let success = parser.parse(cursor)?;
        if success.cursor.is_at_end() {
            Ok(success)
        } else {
            Err(ParseFailure::new(success.cursor, "unconsumed input"))
        }
    }
}
