//! Walks a node sequence back to zettel text.
//!
//! The output is order-consistent with the source rather than byte-identical:
//! flattening and the choice between equivalent link spellings are not
//! recorded in the nodes.

use crate::node::{Inline, Line, LineContent, Link, Node, Span, SpanKind, TextRun};

/// Emits each node's literal contribution, in order.
pub fn unparse(nodes: &[Node]) -> String {
    let mut out = String::new();
    for node in nodes {
        push_node(&mut out, node);
    }
    out
}

fn push_node(out: &mut String, node: &Node) {
    match node {
        Node::Tag(tag) => {
            out.extend(std::iter::repeat_n('@', tag.depth));
            push_inline(out, &tag.text);
        }
        Node::Line(line) => push_line(out, line),
        Node::Text(run) => push_run(out, run),
        Node::Blank(blank) => out.extend(std::iter::repeat_n('\n', blank.count + 1)),
    }
}

fn push_line(out: &mut String, line: &Line) {
    out.extend(std::iter::repeat_n(' ', line.indent));
    match &line.content {
        LineContent::Link(link) => push_link(out, link),
        LineContent::Comment(comment) => {
            out.push_str("> ");
            out.push_str(&comment.text);
        }
        LineContent::ListItem(item) => {
            out.push_str(&item.marker);
            if let Some(content) = &item.content {
                out.push(' ');
                push_inline(out, content);
            }
        }
    }
}

fn push_inline(out: &mut String, inline: &Inline) {
    match inline {
        Inline::Text(run) => push_run(out, run),
        Inline::Link(link) => push_link(out, link),
    }
}

fn push_link(out: &mut String, link: &Link) {
    match (&link.target, link.is_bare_url()) {
        (Some(target), _) => {
            out.push('[');
            out.push_str(&link.display_text);
            out.push_str("](");
            out.push_str(target);
            out.push(')');
        }
        (None, true) => out.push_str(&link.display_text),
        (None, false) => {
            out.push('[');
            out.push_str(&link.display_text);
            out.push(']');
        }
    }
}

fn push_run(out: &mut String, run: &TextRun) {
    for span in &run.spans {
        push_span(out, span);
    }
}

fn push_span(out: &mut String, span: &Span) {
    let text = span.text.as_str();
    match span.kind {
        SpanKind::PlainText => out.push_str(text),
        SpanKind::Operator => {
            out.push(' ');
            out.push_str(text);
        }
        SpanKind::Quote => push_delimited(out, "\"", text),
        SpanKind::Code if text.contains('\n') => push_delimited(out, "```", text),
        SpanKind::Code => push_delimited(out, "`", text),
        SpanKind::InlineMath => push_delimited(out, "$", text),
        SpanKind::BlockMath => push_delimited(out, "$$", text),
        SpanKind::Bold => push_delimited(out, "*", text),
        SpanKind::Struck => push_delimited(out, "~~", text),
    }
}

fn push_delimited(out: &mut String, delimiter: &str, text: &str) {
    out.push_str(delimiter);
    out.push_str(text);
    out.push_str(delimiter);
}
