//! # Node Model
//!
//! The parser's output alphabet. A parsed zettel is one flat `Vec<Node>` in
//! source order. Nesting stops at a single level (`TextRun::spans`,
//! `Tag::text`, `Line::content`); list hierarchy is left to consumers, who
//! rebuild it from [`Line::indent`].

use serde::Serialize;

/// One document-level element.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Node {
    Tag(Tag),
    Line(Line),
    /// A paragraph line that matched none of the structured forms.
    Text(TextRun),
    /// A run of newlines. `count` is the number of newlines minus one.
    Blank(BlankRun),
}

/// A label line such as `@@topic`. `depth` counts the markers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Tag {
    pub depth: usize,
    pub text: Inline,
}

/// An indented structured line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Line {
    /// Count of leading spaces.
    pub indent: usize,
    pub content: LineContent,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum LineContent {
    Link(Link),
    Comment(Comment),
    ListItem(ListItem),
}

/// Content that may follow a tag marker or a list marker.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Inline {
    Text(TextRun),
    Link(Link),
}

impl Inline {
    /// The visible text: span text for runs, display text for links.
    pub fn text(&self) -> String {
        match self {
            Inline::Text(run) => run.plain_text(),
            Inline::Link(link) => link.display_text.clone(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ListItem {
    /// A glyph such as `-` or a dotted label such as `a.b.c.`.
    pub marker: String,
    pub content: Option<Inline>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Link {
    pub display_text: String,
    pub target: Option<String>,
}

impl Link {
    /// True for links written as a bare `http...` token.
    pub fn is_bare_url(&self) -> bool {
        self.display_text.starts_with("http")
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Comment {
    pub text: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct TextRun {
    pub spans: Vec<Span>,
}

impl TextRun {
    pub fn new(spans: Vec<Span>) -> Self {
        Self { spans }
    }

    /// Concatenated text of every span, delimiters excluded.
    pub fn plain_text(&self) -> String {
        self.spans.iter().map(|span| span.text.as_str()).collect()
    }
}

/// The smallest unit of inline content.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Span {
    pub kind: SpanKind,
    pub text: String,
}

impl Span {
    pub fn new(kind: SpanKind, text: impl Into<String>) -> Self {
        Self {
            kind,
            text: text.into(),
        }
    }

    pub fn plain(text: impl Into<String>) -> Self {
        Self::new(SpanKind::PlainText, text)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SpanKind {
    PlainText,
    Quote,
    Code,
    InlineMath,
    BlockMath,
    Bold,
    Struck,
    Operator,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct BlankRun {
    pub count: usize,
}
