//! # zettel-syntax
//!
//! A backtracking parser-combinator library, and the grammar of the zettel
//! outline notation written in it.
//!
//! ## The Notation
//!
//! ```text
//! @@topic                    ← tag, depth 2
//! - first point              ← list line, indent 0
//!     a.b. nested -> detail  ← labeled marker, indent 4, an operator span
//!     > an aside             ← comment line
//! [docs](https://docs.rs)    ← link line
//! plain "quoted" $x^2$ prose ← bare text run
//! ```
//!
//! ## Architecture Overview
//!
//! ```text
//! Source Text → Cursor → Lexer primitives → Grammar rules → Vec<Node>
//!                        (regex, LazyLock)  (combinators)
//! ```
//!
//! ### 1. Parser ([`parser`] module)
//!
//! Grammar-agnostic combinators over an immutable, `Copy` [`Cursor`]. Every
//! parser returns a [`ParseOutcome`]; alternation backtracks by reusing the
//! cursor it started from.
//!
//! ### 2. Lexer ([`lexer`] module)
//!
//! The fixed set of notation-specific token recognizers: whitespace, tag and
//! list markers, operators, and the delimiter exclusions that keep a
//! region's body from swallowing its closing delimiter.
//!
//! ### 3. Grammar ([`grammar`] module)
//!
//! Spans, text runs, links, lines, tags and the document rule. The result
//! is a *flat* node sequence: list hierarchy is not built here, it is
//! recovered from each [`Line`]'s indent by consumers.
//!
//! ## Module Structure
//!
//! ```text
//! zettel-syntax/
//! ├── lib.rs           # This file - public API
//! ├── cursor.rs        # Immutable position in the text
//! ├── node.rs          # The node model the grammar produces
//! ├── lexer.rs         # Regex-backed token recognizers
//! ├── unparse.rs       # Node sequence back to text
//! ├── parser/
//! │   ├── mod.rs       # Parser trait, Success, ParseFailure, parse()
//! │   ├── combinators.rs
//! │   └── builder.rs   # Sequencer for multi-step rules
//! └── grammar/
//!     ├── mod.rs       # Document rule, parse_document()
//!     ├── line.rs      # Tags, comments, list items, lines
//!     └── inline.rs    # Spans, text runs, links, flattening
//! ```
//!
//! ## Quick Start
//!
//! ```
//! use zettel_syntax::{Node, parse_document};
//!
//! let nodes = parse_document("@@@hello\n    - item").unwrap();
//!
//! match &nodes[0] {
//!     Node::Tag(tag) => assert_eq!(tag.depth, 3),
//!     other => panic!("expected a tag, got {other:?}"),
//! }
//! match &nodes[2] {
//!     Node::Line(line) => assert_eq!(line.indent, 4),
//!     other => panic!("expected a line, got {other:?}"),
//! }
//! ```
//!
//! ## Failure
//!
//! There is one error type, [`ParseFailure`], carrying a reason and the
//! offset where the failing attempt began. Real documents essentially always
//! parse: unknown constructs degrade to plain text.

pub mod cursor;
pub mod grammar;
pub mod lexer;
pub mod node;
pub mod parser;
pub mod unparse;

pub use cursor::Cursor;
pub use grammar::inline::flatten;
pub use grammar::parse_document;
pub use node::{
    BlankRun, Comment, Inline, Line, LineContent, Link, ListItem, Node, Span, SpanKind, Tag,
    TextRun,
};
pub use parser::{ParseFailure, ParseOutcome, Parser, Success};
pub use unparse::unparse;
