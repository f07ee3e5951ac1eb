//! Cursor threading for multi-step grammar rules.
//!
//! A rule written with [`build`] reads like straight-line code:
//!
//! ```ignore
//! build(cursor, |seq| {
//!     let text = seq.next(link_text)?;
//!     let target = seq.next(optional(link_target))?;
//!     Ok(Link { display_text: text.into(), target: target.map(Into::into) })
//! })
//! ```
//!
//! Each `next` runs a parser from where the previous step stopped. The `?`
//! short-circuits the whole rule on the first failing step, surfacing that
//! step's failure. Nothing is mutated outside the closure: the sequencer is a
//! fold over parser steps whose accumulator is the current cursor.

use super::{Cursor, ParseFailure, ParseOutcome, Parser, Success};

/// Accumulator threaded through a [`build`] closure.
#[derive(Debug)]
pub struct Sequencer<'a> {
    cursor: Cursor<'a>,
}

impl<'a> Sequencer<'a> {
    /// Runs `parser` from the current position, advancing on success.
    pub fn next<V>(&mut self, parser: impl Parser<'a, V>) -> Result<V, ParseFailure> {
        let Success { cursor, value } = parser.parse(self.cursor)?;
        self.cursor = cursor;
        Ok(value)
    }

    /// The position after the last successful step.
    pub fn cursor(&self) -> Cursor<'a> {
        self.cursor
    }
}

/// Runs a multi-step rule starting at `cursor`.
///
/// The closure's `Ok` value becomes the parser's value, paired with the
/// cursor after the final step.
pub fn build<'a, V>(
    cursor: Cursor<'a>,
    rule: impl FnOnce(&mut Sequencer<'a>) -> Result<V, ParseFailure>,
) -> ParseOutcome<'a, V> {
    let mut seq = Sequencer { cursor };
    let value = rule(&mut seq)?;
    Ok(Success::new(seq.cursor, value))
}
