//! # Lexer - Token Recognizers for the Zettel Notation
//!
//! There is no separate token stream: the grammar runs directly over the
//! text, and this module provides the fixed set of pattern-based
//! recognizers it is built from. Each recognizer is a plain function, so it
//! can be handed straight to any combinator.
//!
//! ## Recognizers
//!
//! | Recognizer | Matches |
//! |------------|---------|
//! | [`space`] / [`spaces`] | one space / a (possibly empty) run of spaces |
//! | [`newlines`] | one or more `\n` |
//! | [`rest_of_line`] | everything up to the next `\n` |
//! | [`indent`] | leading spaces, measured by the line rule |
//! | [`tag_markers`] | `@`, `@@`, ... |
//! | [`comment_prefix`] | `> ` |
//! | [`operator`] | ` -> `, ` <=> `, ` vs. ` and friends |
//! | [`unordered_marker`] | one of `- + ! * ¿ ? ✘ ★ ✓` before a space or line end |
//! | [`labeled_marker`] | dotted labels like `a.`, `1.2.`, `a.b.c.` |
//!
//! ## Delimiter Exclusions
//!
//! Delimited spans (quotes, code, math, bold, strike) use a character class
//! that excludes their own closing delimiter as the inner parser. That is
//! what keeps a region's body from swallowing the region's end.
//!
//! ## Plain Text and the Catch-All
//!
//! [`plain_text`] stops at every character that could open a span *and* at
//! spaces, so an operator gets a chance to match at each space. Whatever
//! plain text refuses is picked up one character at a time by
//! [`catch_all`]. Together they accept every character except `\n`.

use std::sync::LazyLock;

use regex::Regex;

use crate::parser::{
    Cursor, ParseFailure, ParseOutcome, Parser, Success, literal, map, pattern, sequence, some,
};

/// Operator symbols. Order matters only for readability: the trailing space
/// in the pattern forces backtracking from `:` to `:=` where needed.
pub const OPERATORS: &[&str] = &[
    ":", ":=", "<->", "<-", "->", "~>", "<=>", "=>", "!=", "==", "+", "vs.",
];

/// Unordered list glyphs.
pub const LIST_GLYPHS: &[char] = &['-', '+', '!', '*', '¿', '?', '✘', '★', '✓'];

/// The tag marker character.
pub const TAG_MARKER: char = '@';

/// Characters that may open a span, plus space. Plain text never contains them.
pub const SPECIAL_CHARS: &str = "$~`\"* ";

fn compile(source: &str) -> Regex {
    Regex::new(source).expect("Invalid lexer regex")
}

static SPACES: LazyLock<Regex> = LazyLock::new(|| compile("^ *"));
static NEWLINES: LazyLock<Regex> = LazyLock::new(|| compile("^\n+"));
static REST_OF_LINE: LazyLock<Regex> = LazyLock::new(|| compile("^[^\n]*"));
static TAG_MARKERS: LazyLock<Regex> = LazyLock::new(|| compile("^@+"));
static ALPHANUMERIC: LazyLock<Regex> = LazyLock::new(|| compile("^[A-Za-z0-9]+"));
static OPERATOR: LazyLock<Regex> = LazyLock::new(|| {
    let symbols: Vec<String> = OPERATORS.iter().map(|op| regex::escape(op)).collect();
    compile(&format!("^ ({}) ", symbols.join("|")))
});
static UNORDERED_MARKER: LazyLock<Regex> = LazyLock::new(|| {
    let glyphs: String = LIST_GLYPHS.iter().collect();
    compile(&format!("^[{}]", regex::escape(&glyphs)))
});
static PLAIN_TEXT: LazyLock<Regex> =
    LazyLock::new(|| compile(&format!("^[^{}\n]+", regex::escape(SPECIAL_CHARS))));
static CATCH_ALL: LazyLock<Regex> =
    LazyLock::new(|| compile(&format!("^[{}]", regex::escape(SPECIAL_CHARS))));

static NOT_QUOTE: LazyLock<Regex> = LazyLock::new(|| compile("^[^\"\n]+"));
static NOT_BACKTICK: LazyLock<Regex> = LazyLock::new(|| compile("^[^`]+"));
static NOT_BACKTICK_LINE: LazyLock<Regex> = LazyLock::new(|| compile("^[^`\n]+"));
static NOT_DOLLAR: LazyLock<Regex> = LazyLock::new(|| compile("^[^$]+"));
static NOT_DOLLAR_LINE: LazyLock<Regex> = LazyLock::new(|| compile("^[^$\n]+"));
static NOT_STAR: LazyLock<Regex> = LazyLock::new(|| compile("^[^*\n]+"));
static NOT_TILDE: LazyLock<Regex> = LazyLock::new(|| compile("^[^~\n]+"));

static LINK_TEXT: LazyLock<Regex> = LazyLock::new(|| compile("^[^\\]\n]*"));
static LINK_TARGET: LazyLock<Regex> = LazyLock::new(|| compile("^[^)\n]*"));
static BARE_URL: LazyLock<Regex> = LazyLock::new(|| compile("^http\\S*"));

pub fn space(cursor: Cursor<'_>) -> ParseOutcome<'_, &str> {
    literal(" ").parse(cursor)
}

pub fn spaces(cursor: Cursor<'_>) -> ParseOutcome<'_, &str> {
    pattern(&SPACES).parse(cursor)
}

pub fn newlines(cursor: Cursor<'_>) -> ParseOutcome<'_, &str> {
    pattern(&NEWLINES).parse(cursor)
}

/// The remainder of the current line, possibly empty.
pub fn rest_of_line(cursor: Cursor<'_>) -> ParseOutcome<'_, &str> {
    pattern(&REST_OF_LINE).parse(cursor)
}

/// Leading spaces of a line. Never fails; may be empty.
pub fn indent(cursor: Cursor<'_>) -> ParseOutcome<'_, &str> {
    pattern(&SPACES).parse(cursor)
}

pub fn tag_markers(cursor: Cursor<'_>) -> ParseOutcome<'_, &str> {
    pattern(&TAG_MARKERS).parse(cursor)
}

pub fn comment_prefix(cursor: Cursor<'_>) -> ParseOutcome<'_, &str> {
    literal("> ").parse(cursor)
}

pub fn alphanumeric(cursor: Cursor<'_>) -> ParseOutcome<'_, &str> {
    pattern(&ALPHANUMERIC).parse(cursor)
}

/// An operator symbol with one space on each side.
///
/// Consumes the leading space and the symbol but not the trailing space,
/// so the text after the operator keeps it. The value is the bare symbol.
pub fn operator(cursor: Cursor<'_>) -> ParseOutcome<'_, &str> {
    match OPERATOR.captures(cursor.rest()) {
        Some(captures) => match (captures.get(0), captures.get(1)) {
            (Some(whole), Some(symbol)) => Ok(Success::new(
                cursor.advance(whole.end() - 1),
                symbol.as_str(),
            )),
            _ => Err(ParseFailure::new(cursor, "could not match operator")),
        },
        None => Err(ParseFailure::new(cursor, "could not match operator")),
    }
}

/// A list glyph, only when a space or the end of the line follows it.
///
/// `*bold*` at the start of a line is a styled span, not a list item.
pub fn unordered_marker(cursor: Cursor<'_>) -> ParseOutcome<'_, &str> {
    let success = pattern(&UNORDERED_MARKER).parse(cursor)?;
    match success.cursor.rest().chars().next() {
        None | Some(' ') | Some('\n') => Ok(success),
        Some(_) => Err(ParseFailure::new(
            cursor,
            "list glyph must be followed by a space",
        )),
    }
}

/// `alphanumeric "." (labeled_marker | ε)`, matched iteratively.
///
/// Every segment consumes at least two bytes, so the repetition always
/// terminates and never grows the stack.
pub fn labeled_marker(cursor: Cursor<'_>) -> ParseOutcome<'_, String> {
    map(
        some(sequence((alphanumeric, literal(".")))),
        |segments: Vec<String>| segments.concat(),
    )
    .parse(cursor)
}

pub fn plain_text(cursor: Cursor<'_>) -> ParseOutcome<'_, &str> {
    pattern(&PLAIN_TEXT).parse(cursor)
}

/// Exactly one special character that no span rule claimed.
pub fn catch_all(cursor: Cursor<'_>) -> ParseOutcome<'_, &str> {
    pattern(&CATCH_ALL).parse(cursor)
}

/// Character classes that exclude a region's own closing delimiter.
pub mod not {
    use super::*;

    pub fn quote(cursor: Cursor<'_>) -> ParseOutcome<'_, &str> {
        pattern(&NOT_QUOTE).parse(cursor)
    }

    /// Body of a fenced code span; may cross lines.
    pub fn backtick(cursor: Cursor<'_>) -> ParseOutcome<'_, &str> {
        pattern(&NOT_BACKTICK).parse(cursor)
    }

    pub fn backtick_line(cursor: Cursor<'_>) -> ParseOutcome<'_, &str> {
        pattern(&NOT_BACKTICK_LINE).parse(cursor)
    }

    /// Body of block math; may cross lines.
    pub fn dollar(cursor: Cursor<'_>) -> ParseOutcome<'_, &str> {
        pattern(&NOT_DOLLAR).parse(cursor)
    }

    pub fn dollar_line(cursor: Cursor<'_>) -> ParseOutcome<'_, &str> {
        pattern(&NOT_DOLLAR_LINE).parse(cursor)
    }

    pub fn star(cursor: Cursor<'_>) -> ParseOutcome<'_, &str> {
        pattern(&NOT_STAR).parse(cursor)
    }

    pub fn tilde(cursor: Cursor<'_>) -> ParseOutcome<'_, &str> {
        pattern(&NOT_TILDE).parse(cursor)
    }

    pub fn closing_bracket(cursor: Cursor<'_>) -> ParseOutcome<'_, &str> {
        pattern(&LINK_TEXT).parse(cursor)
    }

    pub fn closing_paren(cursor: Cursor<'_>) -> ParseOutcome<'_, &str> {
        pattern(&LINK_TARGET).parse(cursor)
    }
}

/// A URL-shaped token: `http` up to the next whitespace.
pub fn bare_url(cursor: Cursor<'_>) -> ParseOutcome<'_, &str> {
    pattern(&BARE_URL).parse(cursor)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::parse;
    use rstest::rstest;

    #[test]
    fn spaces_may_be_empty() {
        assert_eq!(parse("   x", spaces).unwrap().value, "   ");
        assert_eq!(parse("x", spaces).unwrap().value, "");
    }

    #[test]
    fn newlines_need_one() {
        assert_eq!(parse("\n\n\nx", newlines).unwrap().value, "\n\n\n");
        assert!(parse("x", newlines).is_err());
    }

    #[test]
    fn rest_of_line_stops_at_newline() {
        assert_eq!(parse("asdf sdfs\nnext", rest_of_line).unwrap().value, "asdf sdfs");
    }

    #[rstest]
    #[case("@", "@")]
    #[case("@@tag", "@@")]
    #[case("@@@hello", "@@@")]
    fn tag_markers_count(#[case] input: &str, #[case] expected: &str) {
        assert_eq!(parse(input, tag_markers).unwrap().value, expected);
    }

    #[rstest]
    #[case(" -> x", "->", 3)]
    #[case(" := x", ":=", 3)]
    #[case(" : x", ":", 2)]
    #[case(" <=> x", "<=>", 4)]
    #[case(" vs. x", "vs.", 4)]
    #[case(" + x", "+", 2)]
    fn operator_leaves_trailing_space(
        #[case] input: &str,
        #[case] symbol: &str,
        #[case] offset: usize,
    ) {
        let success = parse(input, operator).unwrap();
        assert_eq!(success.value, symbol);
        assert_eq!(success.cursor.offset(), offset);
        assert_eq!(success.cursor.rest(), " x");
    }

    #[rstest]
    #[case("-> ")]
    #[case(" ->x")]
    #[case(" vsx ")]
    fn operator_needs_surrounding_spaces(#[case] input: &str) {
        assert!(parse(input, operator).is_err());
    }

    #[rstest]
    #[case("- item")]
    #[case("★ star")]
    #[case("✓ done")]
    #[case("¿ question")]
    fn unordered_marker_glyphs(#[case] input: &str) {
        let success = parse(input, unordered_marker).unwrap();
        assert_eq!(success.cursor.rest(), &input[success.value.len()..]);
        assert_eq!(success.value.chars().count(), 1);
    }

    #[rstest]
    #[case("-")]
    #[case("*\nnext")]
    fn unordered_marker_at_end_of_line(#[case] input: &str) {
        assert!(parse(input, unordered_marker).is_ok());
    }

    #[rstest]
    #[case("*bold*")]
    #[case("-x")]
    #[case("?why")]
    fn unordered_marker_needs_a_following_space(#[case] input: &str) {
        assert!(parse(input, unordered_marker).is_err());
    }

    #[rstest]
    #[case("ab.", "ab.")]
    #[case("ab.cd.", "ab.cd.")]
    #[case("ab.cd.ef. text", "ab.cd.ef.")]
    #[case("a.b.c. text", "a.b.c.")]
    #[case("1.2.x", "1.2.")]
    fn labeled_marker_takes_full_label(#[case] input: &str, #[case] expected: &str) {
        assert_eq!(parse(input, labeled_marker).unwrap().value, expected);
    }

    #[test]
    fn labeled_marker_needs_a_dot() {
        assert!(parse("abc text", labeled_marker).is_err());
    }

    #[test]
    fn labeled_marker_handles_long_chains() {
        let input = "a.".repeat(10_000);
        let success = parse(&input, labeled_marker).unwrap();
        assert_eq!(success.value.len(), input.len());
    }

    #[test]
    fn plain_text_stops_at_specials() {
        assert_eq!(parse("asdf $tex$", plain_text).unwrap().value, "asdf");
        assert_eq!(parse("ab\"c", plain_text).unwrap().value, "ab");
        assert!(parse(" x", plain_text).is_err());
    }

    #[rstest]
    #[case("$")]
    #[case("~")]
    #[case("`")]
    #[case("\"")]
    #[case("*")]
    #[case(" ")]
    fn catch_all_takes_one_special(#[case] input: &str) {
        let success = parse(input, catch_all).unwrap();
        assert_eq!(success.value, input);
    }

    #[test]
    fn catch_all_rejects_newline() {
        assert!(parse("\n", catch_all).is_err());
    }

    #[test]
    fn exclusions_stop_at_delimiter() {
        assert_eq!(parse("quote\" rest", not::quote).unwrap().value, "quote");
        assert_eq!(parse("x^2$ rest", not::dollar_line).unwrap().value, "x^2");
        assert_eq!(parse("a\nb$$", not::dollar).unwrap().value, "a\nb");
        assert_eq!(parse("bold*", not::star).unwrap().value, "bold");
        assert_eq!(parse("gone~~", not::tilde).unwrap().value, "gone");
    }

    #[test]
    fn bare_url_runs_to_whitespace() {
        assert_eq!(
            parse("http://example.com rest", bare_url).unwrap().value,
            "http://example.com"
        );
        assert!(parse("ftp://x", bare_url).is_err());
    }
}
