//! HTML rendering of parsed zettels.
//!
//! Every node, line content, inline and span variant is matched explicitly,
//! so adding a variant to the node model fails to compile here until it has
//! a rendering.

use html_escape::{encode_double_quoted_attribute, encode_text};
use zettel_syntax::{Inline, Line, LineContent, Link, ListItem, Node, Span, SpanKind, TextRun};

use crate::models::Zettel;

/// Renders a node sequence. Line elements get their node index as `id`, so
/// table-of-contents entries can link to them.
pub fn render(nodes: &[Node]) -> String {
    let mut out = String::new();
    for (index, node) in nodes.iter().enumerate() {
        push_node(&mut out, index, node);
    }
    out
}

/// Renders a zettel, or its escaped raw body when it failed to parse.
pub fn render_zettel(zettel: &Zettel) -> String {
    if zettel.is_parsed() {
        render(&zettel.nodes)
    } else {
        format!("<pre class=\"z-raw\">{}</pre>", encode_text(&zettel.body))
    }
}

/// The `href` and `target` attributes for a link.
///
/// Display text starting with `http` is the address itself; otherwise the
/// target is used, and a link with neither points at `#`.
pub fn link_destination(link: &Link) -> (&str, &'static str) {
    let href = if link.display_text.starts_with("http") {
        link.display_text.as_str()
    } else {
        link.target.as_deref().unwrap_or("#")
    };
    let target = if href.starts_with('#') {
        "_self"
    } else {
        "_blank"
    };
    (href, target)
}

fn push_node(out: &mut String, index: usize, node: &Node) {
    match node {
        Node::Tag(tag) => {
            out.push_str("<div class=\"z-tag\">");
            out.push_str(&"@".repeat(tag.depth));
            push_inline(out, &tag.text);
            out.push_str("</div>");
        }
        Node::Line(line) => push_line(out, index, line),
        Node::Text(run) => push_run(out, run),
        Node::Blank(blank) => out.push_str(&"<br>".repeat(blank.count)),
    }
}

fn push_line(out: &mut String, index: usize, line: &Line) {
    out.push_str(&format!("<div id=\"{index}\" class=\"z-line\">"));
    out.push_str(&" ".repeat(line.indent));
    match &line.content {
        LineContent::Link(link) => push_link(out, link),
        LineContent::Comment(comment) => {
            out.push_str("<span class=\"z-comment\">&gt; ");
            out.push_str(&encode_text(&comment.text));
            out.push_str("</span>");
        }
        LineContent::ListItem(item) => push_list_item(out, item),
    }
    out.push_str("</div>");
}

fn push_list_item(out: &mut String, item: &ListItem) {
    out.push_str("<span class=\"z-list\"><span class=\"z-listitem\">");
    out.push_str(&encode_text(&item.marker));
    out.push_str("</span>");
    if let Some(content) = &item.content {
        out.push(' ');
        push_inline(out, content);
    }
    out.push_str("</span>");
}

fn push_inline(out: &mut String, inline: &Inline) {
    match inline {
        Inline::Text(run) => push_run(out, run),
        Inline::Link(link) => push_link(out, link),
    }
}

fn push_link(out: &mut String, link: &Link) {
    let (href, target) = link_destination(link);
    out.push_str(&format!(
        "<a href=\"{}\" target=\"{target}\" class=\"z-link\">{}</a>",
        encode_double_quoted_attribute(href),
        encode_text(&link.display_text)
    ));
}

fn push_run(out: &mut String, run: &TextRun) {
    for span in &run.spans {
        push_span(out, span);
    }
}

fn push_span(out: &mut String, span: &Span) {
    let text = encode_text(&span.text);
    let (open, close) = match span.kind {
        SpanKind::PlainText => ("", ""),
        SpanKind::Operator => ("<span class=\"z-operator\"> ", " </span>"),
        SpanKind::Quote => ("<q class=\"z-quote\">", "</q>"),
        SpanKind::Code => ("<code>", "</code>"),
        SpanKind::InlineMath => ("<span class=\"z-math\">", "</span>"),
        SpanKind::BlockMath => ("<div class=\"z-math-block\">", "</div>"),
        SpanKind::Bold => ("<span class=\"z-bold\">", "</span>"),
        SpanKind::Struck => ("<span class=\"z-striked\">", "</span>"),
    };
    out.push_str(open);
    out.push_str(&text);
    out.push_str(close);
}
