use serde::Serialize;
use zettel_syntax::{Node, ParseFailure, parse_document};

use super::ZettelFile;

/// Longest preview shown for a zettel in listings, in characters.
pub const PREVIEW_LENGTH: usize = 35;

/// A tag line's depth and visible text
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TagLabel {
    pub depth: usize,
    pub text: String,
}

/// A zettel's raw body together with its parsed nodes.
///
/// A body that fails to parse keeps its text; `nodes` is then empty and
/// `parse_error` says why, so callers can fall back to showing the raw body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Zettel {
    pub file: ZettelFile,
    pub body: String,
    pub nodes: Vec<Node>,
    pub parse_error: Option<ParseFailure>,
}

impl Zettel {
    pub fn parse(file: ZettelFile, body: String) -> Self {
        match parse_document(&body) {
            Ok(nodes) => Self {
                file,
                body,
                nodes,
                parse_error: None,
            },
            Err(failure) => {
                log::warn!("{}: {failure}", file.display_path());
                Self {
                    file,
                    body,
                    nodes: Vec::new(),
                    parse_error: Some(failure),
                }
            }
        }
    }

    pub fn is_parsed(&self) -> bool {
        self.parse_error.is_none()
    }

    /// Every tag node, in document order
    pub fn tags(&self) -> Vec<TagLabel> {
        self.nodes
            .iter()
            .filter_map(|node| match node {
                Node::Tag(tag) => Some(TagLabel {
                    depth: tag.depth,
                    text: tag.text.text(),
                }),
                _ => None,
            })
            .collect()
    }

    /// Tag texts joined by spaces, cut to [`PREVIEW_LENGTH`] characters.
    pub fn preview(&self) -> String {
        let joined = self
            .tags()
            .into_iter()
            .map(|tag| tag.text)
            .collect::<Vec<_>>()
            .join(" ");
        joined.chars().take(PREVIEW_LENGTH).collect()
    }
}
