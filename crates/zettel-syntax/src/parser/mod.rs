//! # Parser - Backtracking Combinators
//!
//! This module holds the grammar-agnostic half of the crate: a tiny
//! parser-combinator library that the zettel grammar is written in.
//!
//! ## The Parser Model
//!
//! A parser is a pure function from a [`Cursor`] to a [`ParseOutcome`]:
//!
//! ```text
//! Cursor { text, offset } → Ok(Success { cursor, value })
//!                         → Err(ParseFailure { offset, reason })
//! ```
//!
//! Parsers hold no state between calls. Because cursors are `Copy` values,
//! trying an alternative from the *same* starting point is just calling the
//! next parser with the cursor we already have. That is the whole
//! backtracking story: there is nothing to undo.
//!
//! ## Writing Parsers
//!
//! Anything that implements `Fn(Cursor<'a>) -> ParseOutcome<'a, V>` is a
//! [`Parser`], so grammar rules are plain functions:
//!
//! ```
//! use zettel_syntax::parser::{Cursor, ParseOutcome, build, literal, parse};
//!
//! fn greeting(cursor: Cursor<'_>) -> ParseOutcome<'_, &str> {
//!     build(cursor, |seq| {
//!         seq.next(literal("hello "))?;
//!         let name = seq.next(literal("world"))?;
//!         Ok(name)
//!     })
//! }
//!
//! let success = parse("hello world", greeting).unwrap();
//! assert_eq!(success.value, "world");
//! ```
//!
//! ## Module Structure
//!
//! - [`combinators`] - `literal`, `pattern`, `map`, `sequence`, `alternation`,
//!   `many`, `some`, `optional`, `region` and friends
//! - [`builder`] - the [`Sequencer`] used to write multi-step rules

pub mod builder;
pub mod combinators;

pub use crate::cursor::Cursor;
pub use builder::{Sequencer, build};
pub use combinators::{
    Alternatives, Sequence, all_consuming, alternation, enclosed, literal, many, map, optional,
    pattern, preceded, region, sequence, some,
};

/// A successful parse: the value produced and the cursor after it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Success<'a, V> {
    pub cursor: Cursor<'a>,
    pub value: V,
}

impl<'a, V> Success<'a, V> {
    pub fn new(cursor: Cursor<'a>, value: V) -> Self {
        Self { cursor, value }
    }

    /// Replaces the value, keeping the cursor.
    pub fn map<U>(self, f: impl FnOnce(V) -> U) -> Success<'a, U> {
        Success {
            cursor: self.cursor,
            value: f(self.value),
        }
    }
}

/// The single error kind at the parser boundary.
///
/// `offset` is where the failing attempt started, not how far it got.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{reason} (at offset {offset})")]
pub struct ParseFailure {
    pub offset: usize,
    pub reason: String,
}

impl ParseFailure {
    pub fn new(cursor: Cursor<'_>, reason: impl Into<String>) -> Self {
        Self {
            offset: cursor.offset(),
            reason: reason.into(),
        }
    }
}

/// The pass/fail envelope every parsing step produces.
pub type ParseOutcome<'a, V> = Result<Success<'a, V>, ParseFailure>;

/// A parser producing values of type `V`.
pub trait Parser<'a, V> {
    fn parse(&self, cursor: Cursor<'a>) -> ParseOutcome<'a, V>;
}

impl<'a, V, F> Parser<'a, V> for F
where
    F: Fn(Cursor<'a>) -> ParseOutcome<'a, V>,
{
    fn parse(&self, cursor: Cursor<'a>) -> ParseOutcome<'a, V> {
        self(cursor)
    }
}

/// Runs `parser` over `text` from offset 0.
pub fn parse<'a, V>(text: &'a str, parser: impl Parser<'a, V>) -> ParseOutcome<'a, V> {
    parser.parse(Cursor::new(text))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_functions_are_parsers() {
        fn always_one(cursor: Cursor<'_>) -> ParseOutcome<'_, u8> {
            Ok(Success::new(cursor, 1))
        }
        let success = parse("anything", always_one).unwrap();
        assert_eq!(success.value, 1);
        assert_eq!(success.cursor.offset(), 0);
    }

    #[test]
    fn failure_display_names_offset() {
        let failure = ParseFailure::new(Cursor::new("abc").advance(2), "expected x");
        assert_eq!(failure.to_string(), "expected x (at offset 2)");
    }
}
