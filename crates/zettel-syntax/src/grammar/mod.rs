//! # Grammar Rules
//!
//! The zettel notation, written in the combinators from [`crate::parser`].
//! Every rule is a plain function `fn(Cursor) -> ParseOutcome<T>`, built in
//! dependency order:
//!
//! ```text
//! lexer primitives → spans → text runs, links → comment, list item
//!                  → line, tag → document
//! ```
//!
//! ## Module Structure
//!
//! - [`inline`] - spans, text runs, flattening and links
//! - [`line`] - tags, comments, list items and indented lines
//!
//! ## The Document Rule
//!
//! ```text
//! document = many(line | tag | blank_run | text_run)
//! ```
//!
//! The order matters: a structured line is preferred over a tag, and a
//! bare text run only claims what nothing else will. Between them the four
//! alternatives accept every character, so a document never dead-ends.
//!
//! ## Leniency
//!
//! Rules fail cheaply and let an enclosing alternation try the next form.
//! Stray delimiters, unknown markers and unterminated regions all degrade
//! to plain text rather than failing the document.

pub mod inline;
pub mod line;

use crate::lexer;
use crate::node::{BlankRun, Node};
use crate::parser::{
    Cursor, ParseFailure, ParseOutcome, Parser, all_consuming, alternation, many, map, parse,
};

/// One or more newlines. The count is the number of newlines minus one.
pub fn blank_run(cursor: Cursor<'_>) -> ParseOutcome<'_, BlankRun> {
    map(lexer::newlines, |newlines: &str| BlankRun {
        count: newlines.len().saturating_sub(1),
    })
    .parse(cursor)
}

/// Any single document-level node.
pub fn node(cursor: Cursor<'_>) -> ParseOutcome<'_, Node> {
    alternation((
        map(line::line, Node::Line),
        map(line::tag, Node::Tag),
        map(blank_run, Node::Blank),
        map(inline::text_run, Node::Text),
    ))
    .parse(cursor)
}

/// Zero or more nodes. Always succeeds; may stop short of the end.
pub fn document(cursor: Cursor<'_>) -> ParseOutcome<'_, Vec<Node>> {
    many(node).parse(cursor)
}

/// Parses a whole zettel body into its flat node sequence.
///
/// Succeeds only if the entire input is consumed. Empty input yields an
/// empty sequence.
pub fn parse_document(text: &str) -> Result<Vec<Node>, ParseFailure> {
    match parse(text, all_consuming(document)) {
        Ok(success) => Ok(success.value),
        Err(failure) => {
            log::debug!("document parse failed: {failure}");
            Err(failure)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::node::{Inline, Line, LineContent, ListItem, Span, SpanKind, Tag, TextRun};
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    #[test]
    fn empty_input_is_empty_document() {
        assert_eq!(parse_document("").unwrap(), vec![]);
    }

    #[rstest]
    #[case("\n", 0)]
    #[case("\n\n", 1)]
    #[case("\n\n\n", 2)]
    fn blank_run_counts(#[case] input: &str, #[case] count: usize) {
        assert_eq!(parse(input, blank_run).unwrap().value, BlankRun { count });
    }

    #[test]
    fn three_newlines_between_lines() {
        let nodes = parse_document("- one\n\n\n- two").unwrap();
        assert_eq!(nodes.len(), 3);
        assert_eq!(nodes[1], Node::Blank(BlankRun { count: 2 }));
    }

    #[test]
    fn prose_becomes_text_node() {
        let nodes = parse_document("just \"some\" words").unwrap();
        assert_eq!(
            nodes,
            vec![Node::Text(TextRun::new(vec![
                Span::plain("just "),
                Span::new(SpanKind::Quote, "some"),
                Span::plain(" words"),
            ]))]
        );
    }

    #[test]
    fn whitespace_only_line_is_text() {
        let nodes = parse_document("- a\n   \n- b").unwrap();
        assert_eq!(nodes[2], Node::Text(TextRun::new(vec![Span::plain("   ")])));
    }

    #[test]
    fn tag_then_list() {
        let nodes = parse_document("@topic\n- item").unwrap();
        assert_eq!(
            nodes,
            vec![
                Node::Tag(Tag {
                    depth: 1,
                    text: Inline::Text(TextRun::new(vec![Span::plain("topic")])),
                }),
                Node::Blank(BlankRun { count: 0 }),
                Node::Line(Line {
                    indent: 0,
                    content: LineContent::ListItem(ListItem {
                        marker: "-".into(),
                        content: Some(Inline::Text(TextRun::new(vec![Span::plain("item")]))),
                    }),
                }),
            ]
        );
    }

    #[rstest]
    #[case("\"unclosed")]
    #[case("$")]
    #[case("~~")]
    #[case("```")]
    #[case("[half")]
    #[case("@")]
    #[case("    ")]
    #[case("*\n*\n")]
    fn malformed_input_is_consumed(#[case] input: &str) {
        assert!(parse_document(input).is_ok());
    }

    #[test]
    fn document_rule_stops_without_failing() {
        let success = parse("- a\n", document).unwrap();
        assert!(success.cursor.is_at_end());
        assert_eq!(success.value.len(), 2);
    }
}
