use serde::Serialize;
use zettel_syntax::Node;

/// A line node and the lines nested under it
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OutlineItem {
    /// Position of the line in the node sequence
    pub index: usize,
    pub indent: usize,
    pub children: Vec<OutlineItem>,
}

impl OutlineItem {
    fn new(index: usize, indent: usize) -> Self {
        Self {
            index,
            indent,
            children: Vec::new(),
        }
    }
}

/// Rebuild the indentation hierarchy of a zettel's lines.
///
/// Each line becomes a child of the nearest preceding line with a smaller
/// indent. Nodes other than lines are skipped.
pub fn build_outline(nodes: &[Node]) -> Vec<OutlineItem> {
    let mut roots = Vec::new();
    // Open items, each strictly more indented than the one below it.
    let mut stack: Vec<OutlineItem> = Vec::new();

    for (index, node) in nodes.iter().enumerate() {
        let Node::Line(line) = node else {
            continue;
        };
        close_until(&mut stack, &mut roots, line.indent);
        stack.push(OutlineItem::new(index, line.indent));
    }
    close_until(&mut stack, &mut roots, 0);

    roots
}

/// Pops every open item indented at least `indent`, attaching each to its
/// parent below it on the stack, or to `roots` when none remains.
fn close_until(stack: &mut Vec<OutlineItem>, roots: &mut Vec<OutlineItem>, indent: usize) {
    while let Some(item) = stack.pop() {
        if item.indent < indent {
            stack.push(item);
            break;
        }
        match stack.last_mut() {
            Some(parent) => parent.children.push(item),
            None => roots.push(item),
        }
    }
}
