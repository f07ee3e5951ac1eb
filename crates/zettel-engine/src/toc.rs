//! Table of contents for a zettel.
//!
//! A line counts as a section header when the node two positions later is a
//! line indented exactly four spaces deeper. The offset is two because the
//! newline between them parses as its own blank-run node. Any other node in
//! between, such as a line of prose, hides the header.

use serde::Serialize;
use zettel_syntax::{LineContent, Node};

/// Headers go no deeper than this indent.
pub const MAX_HEADER_INDENT: usize = 4;

/// Indent step that marks a line as having children.
pub const INDENT_STEP: usize = 4;

/// A header line: its node index, indent and visible title.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TocEntry {
    pub index: usize,
    pub indent: usize,
    pub title: String,
}

pub fn build(nodes: &[Node]) -> Vec<TocEntry> {
    nodes
        .iter()
        .enumerate()
        .filter_map(|(index, node)| {
            let Node::Line(line) = node else {
                return None;
            };
            let title = match &line.content {
                LineContent::Comment(_) => return None,
                LineContent::Link(link) => link.display_text.clone(),
                LineContent::ListItem(item) => item
                    .content
                    .as_ref()
                    .map(|content| content.text())
                    .unwrap_or_default(),
            };
            if line.indent > MAX_HEADER_INDENT {
                return None;
            }
            match nodes.get(index + 2) {
                Some(Node::Line(next)) if next.indent == line.indent + INDENT_STEP => {
                    Some(TocEntry {
                        index,
                        indent: line.indent,
                        title,
                    })
                }
                _ => None,
            }
        })
        .collect()
}
