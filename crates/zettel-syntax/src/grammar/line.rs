//! Line-level grammar rules: tags, comments, list items and indented lines.
//!
//! Every rule here stops before the line's terminating `\n`; newlines belong
//! to the document rule's blank runs.

use super::inline::{link, text_run};
use crate::lexer;
use crate::node::{Comment, Inline, Line, LineContent, ListItem, Tag};
use crate::parser::{Cursor, ParseOutcome, Parser, alternation, build, map, optional, preceded};

/// `> ` followed by the rest of the line. The comment text may be empty.
pub fn comment(cursor: Cursor<'_>) -> ParseOutcome<'_, Comment> {
    build(cursor, |seq| {
        seq.next(lexer::comment_prefix)?;
        let text = seq.next(lexer::rest_of_line)?;
        Ok(Comment {
            text: text.to_string(),
        })
    })
}

/// A link, or failing that a text run.
pub fn inline(cursor: Cursor<'_>) -> ParseOutcome<'_, Inline> {
    alternation((map(link, Inline::Link), map(text_run, Inline::Text))).parse(cursor)
}

fn list_marker(cursor: Cursor<'_>) -> ParseOutcome<'_, String> {
    alternation((
        map(lexer::unordered_marker, str::to_string),
        lexer::labeled_marker,
    ))
    .parse(cursor)
}

/// A marker, then optionally one space and inline content.
pub fn list_item(cursor: Cursor<'_>) -> ParseOutcome<'_, ListItem> {
    build(cursor, |seq| {
        let marker = seq.next(list_marker)?;
        let content = seq.next(optional(preceded(lexer::space, inline)))?;
        Ok(ListItem { marker, content })
    })
}

fn line_content(cursor: Cursor<'_>) -> ParseOutcome<'_, LineContent> {
    alternation((
        map(link, LineContent::Link),
        map(comment, LineContent::Comment),
        map(list_item, LineContent::ListItem),
    ))
    .parse(cursor)
}

/// Leading spaces, then a link, comment or list item.
///
/// A line holding only spaces is not a `Line`: the indent matches but no
/// content does, so the whole rule fails.
pub fn line(cursor: Cursor<'_>) -> ParseOutcome<'_, Line> {
    build(cursor, |seq| {
        let indent = seq.next(lexer::indent)?.len();
        let content = seq.next(line_content)?;
        Ok(Line { indent, content })
    })
}

/// Tag markers (their count is the depth), then a link or text run.
pub fn tag(cursor: Cursor<'_>) -> ParseOutcome<'_, Tag> {
    build(cursor, |seq| {
        let depth = seq.next(lexer::tag_markers)?.chars().count();
        let text = seq.next(inline)?;
        Ok(Tag { depth, text })
    })
}
