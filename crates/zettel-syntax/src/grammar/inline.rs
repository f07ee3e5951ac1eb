//! Inline grammar rules: spans, text runs and links.
//!
//! ## Span Precedence
//!
//! | Order | Rule | Delimiters |
//! |-------|------|------------|
//! | 1 | operator | ` -> ` etc. |
//! | 2 | bold | `*...*` |
//! | 3 | struck | `~~...~~` |
//! | 4 | code | ```` ```...``` ```` then `` `...` `` |
//! | 5 | quote | `"..."` |
//! | 6 | block math | `$$...$$` |
//! | 7 | inline math | `$...$` |
//! | 8 | plain text | none |
//! | 9 | catch-all | one stray special character |
//!
//! An unterminated delimiter never fails the run: the delimited rules all
//! fail, and the catch-all takes the opening character as plain text.

use crate::lexer::{self, not};
use crate::node::{Link, Span, SpanKind, TextRun};
use crate::parser::{
    Cursor, ParseOutcome, Parser, alternation, build, enclosed, literal, map, optional, region,
    some,
};

fn span_of<'a>(kind: SpanKind, parser: impl Parser<'a, &'a str>) -> impl Parser<'a, Span> {
    map(parser, move |text: &str| Span::new(kind, text))
}

pub fn operator(cursor: Cursor<'_>) -> ParseOutcome<'_, Span> {
    span_of(SpanKind::Operator, lexer::operator).parse(cursor)
}

pub fn bold(cursor: Cursor<'_>) -> ParseOutcome<'_, Span> {
    span_of(SpanKind::Bold, enclosed("*", not::star)).parse(cursor)
}

pub fn struck(cursor: Cursor<'_>) -> ParseOutcome<'_, Span> {
    span_of(SpanKind::Struck, enclosed("~~", not::tilde)).parse(cursor)
}

/// Fenced (```` ``` ````, may span lines) or single back-tick code.
pub fn code(cursor: Cursor<'_>) -> ParseOutcome<'_, Span> {
    let fenced = enclosed("```", not::backtick);
    let single = enclosed("`", not::backtick_line);
    span_of(SpanKind::Code, alternation((fenced, single))).parse(cursor)
}

pub fn quote(cursor: Cursor<'_>) -> ParseOutcome<'_, Span> {
    span_of(SpanKind::Quote, enclosed("\"", not::quote)).parse(cursor)
}

pub fn block_math(cursor: Cursor<'_>) -> ParseOutcome<'_, Span> {
    span_of(SpanKind::BlockMath, enclosed("$$", not::dollar)).parse(cursor)
}

pub fn inline_math(cursor: Cursor<'_>) -> ParseOutcome<'_, Span> {
    span_of(SpanKind::InlineMath, enclosed("$", not::dollar_line)).parse(cursor)
}

pub fn plain_text(cursor: Cursor<'_>) -> ParseOutcome<'_, Span> {
    span_of(SpanKind::PlainText, lexer::plain_text).parse(cursor)
}

pub fn catch_all(cursor: Cursor<'_>) -> ParseOutcome<'_, Span> {
    span_of(SpanKind::PlainText, lexer::catch_all).parse(cursor)
}

/// Any delimited or operator span.
pub fn styled(cursor: Cursor<'_>) -> ParseOutcome<'_, Span> {
    alternation((
        operator,
        bold,
        struck,
        code,
        quote,
        block_math,
        inline_math,
    ))
    .parse(cursor)
}

pub fn span(cursor: Cursor<'_>) -> ParseOutcome<'_, Span> {
    alternation((styled, plain_text, catch_all)).parse(cursor)
}

/// One or more spans, flattened.
pub fn text_run(cursor: Cursor<'_>) -> ParseOutcome<'_, TextRun> {
    map(some(span), |spans: Vec<Span>| TextRun::new(flatten(spans))).parse(cursor)
}

/// Merges adjacent plain text spans, preserving order and text.
///
/// Splitting at spaces and the one-character catch-all fragment what reads
/// as a single run of text; this stitches it back together.
pub fn flatten(spans: Vec<Span>) -> Vec<Span> {
    let mut merged: Vec<Span> = Vec::with_capacity(spans.len());
    for span in spans {
        match merged.last_mut() {
            Some(last) if last.kind == SpanKind::PlainText && span.kind == SpanKind::PlainText => {
                last.text.push_str(&span.text);
            }
            _ => merged.push(span),
        }
    }
    merged
}

fn link_text(cursor: Cursor<'_>) -> ParseOutcome<'_, &str> {
    region(literal("["), not::closing_bracket, literal("]")).parse(cursor)
}

fn link_target(cursor: Cursor<'_>) -> ParseOutcome<'_, &str> {
    region(literal("("), not::closing_paren, literal(")")).parse(cursor)
}

/// `[text](target)`, `[text]`, or a bare URL (optionally followed by a target).
pub fn link(cursor: Cursor<'_>) -> ParseOutcome<'_, Link> {
    build(cursor, |seq| {
        let display_text = seq.next(alternation((link_text, lexer::bare_url)))?;
        let target = seq.next(optional(link_target))?;
        Ok(Link {
            display_text: display_text.to_string(),
            target: target.map(str::to_string),
        })
    })
}
