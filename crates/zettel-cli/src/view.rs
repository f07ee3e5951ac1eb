//! Terminal rendering of parsed zettels and the viewer layout.

use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Paragraph, Wrap},
};
use zettel_engine::{Zettel, toc};
use zettel_syntax::{Inline, LineContent, Link, Node, SpanKind, TextRun};

use crate::app::{App, Mode};

/// Collects styled spans into terminal lines, breaking on embedded newlines.
#[derive(Default)]
struct LineBuilder {
    lines: Vec<Line<'static>>,
    current: Vec<Span<'static>>,
}

impl LineBuilder {
    fn push(&mut self, text: &str, style: Style) {
        let mut parts = text.split('\n');
        if let Some(first) = parts.next()
            && !first.is_empty()
        {
            self.current.push(Span::styled(first.to_string(), style));
        }
        for part in parts {
            self.break_line();
            if !part.is_empty() {
                self.current.push(Span::styled(part.to_string(), style));
            }
        }
    }

    fn break_line(&mut self) {
        self.lines.push(Line::from(std::mem::take(&mut self.current)));
    }

    fn finish(mut self) -> Vec<Line<'static>> {
        if !self.current.is_empty() {
            self.break_line();
        }
        self.lines
    }
}

fn span_style(kind: SpanKind) -> Style {
    let style = Style::default();
    match kind {
        SpanKind::PlainText => style,
        SpanKind::Quote => style.add_modifier(Modifier::ITALIC),
        SpanKind::Code => style.fg(Color::Green),
        SpanKind::InlineMath | SpanKind::BlockMath => style.fg(Color::Magenta),
        SpanKind::Bold => style.add_modifier(Modifier::BOLD),
        SpanKind::Struck => style.add_modifier(Modifier::CROSSED_OUT),
        SpanKind::Operator => style.fg(Color::Cyan),
    }
}

fn link_style() -> Style {
    Style::default()
        .fg(Color::Blue)
        .add_modifier(Modifier::UNDERLINED)
}

fn push_run(out: &mut LineBuilder, run: &TextRun, base: Style) {
    for span in &run.spans {
        // The operator rule consumes the space before the symbol
        if span.kind == SpanKind::Operator {
            out.push(" ", base);
        }
        out.push(&span.text, base.patch(span_style(span.kind)));
    }
}

fn push_link(out: &mut LineBuilder, link: &Link, base: Style) {
    out.push(&link.display_text, base.patch(link_style()));
}

fn push_inline(out: &mut LineBuilder, inline: &Inline, base: Style) {
    match inline {
        Inline::Text(run) => push_run(out, run, base),
        Inline::Link(link) => push_link(out, link, base),
    }
}

/// Styled terminal lines for a node sequence.
pub fn render_nodes(nodes: &[Node]) -> Vec<Line<'static>> {
    let mut out = LineBuilder::default();
    for node in nodes {
        match node {
            Node::Tag(tag) => {
                let style = Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD);
                out.push(&"@".repeat(tag.depth), style);
                push_inline(&mut out, &tag.text, style);
            }
            Node::Line(line) => {
                out.push(&" ".repeat(line.indent), Style::default());
                match &line.content {
                    LineContent::Link(link) => push_link(&mut out, link, Style::default()),
                    LineContent::Comment(comment) => out.push(
                        &format!("> {}", comment.text),
                        Style::default()
                            .fg(Color::DarkGray)
                            .add_modifier(Modifier::ITALIC),
                    ),
                    LineContent::ListItem(item) => {
                        out.push(&item.marker, Style::default().fg(Color::Cyan));
                        if let Some(content) = &item.content {
                            out.push(" ", Style::default());
                            push_inline(&mut out, content, Style::default());
                        }
                    }
                }
            }
            Node::Text(run) => push_run(&mut out, run, Style::default()),
            Node::Blank(blank) => {
                out.break_line();
                for _ in 0..blank.count {
                    out.break_line();
                }
            }
        }
    }
    out.finish()
}

/// Styled lines for a zettel, or its raw body when it failed to parse.
pub fn render_zettel(zettel: &Zettel) -> Vec<Line<'static>> {
    match &zettel.parse_error {
        None => render_nodes(&zettel.nodes),
        Some(failure) => {
            let mut lines = vec![
                Line::styled(
                    format!("Could not parse: {failure}"),
                    Style::default().fg(Color::Red),
                ),
                Line::default(),
            ];
            lines.extend(zettel.body.lines().map(|line| Line::raw(line.to_string())));
            lines
        }
    }
}

fn contents_lines(zettel: &Zettel) -> Vec<Line<'static>> {
    toc::build(&zettel.nodes)
        .into_iter()
        .map(|entry| Line::raw(format!("{}{}", " ".repeat(entry.indent / 2), entry.title)))
        .collect()
}

pub fn ui(f: &mut Frame, app: &mut App) {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(0), Constraint::Length(3)])
        .split(f.area());

    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .margin(1)
        .constraints([Constraint::Percentage(30), Constraint::Percentage(70)])
        .split(rows[0]);

    let sidebar = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(3), Constraint::Min(0)])
        .split(chunks[0]);

    // Query box
    let query_style = match app.mode {
        Mode::Search => Style::default().fg(Color::Yellow),
        Mode::Browse => Style::default(),
    };
    let title = if app.unique { "Search (unique)" } else { "Search" };
    let query = Paragraph::new(app.query.clone())
        .style(query_style)
        .block(Block::default().borders(Borders::ALL).title(title));
    f.render_widget(query, sidebar[0]);

    // Match list
    let items: Vec<ListItem> = app
        .matches
        .iter()
        .map(|&index| {
            let zettel = &app.zettels[index];
            let preview = zettel.preview();
            let label = if preview.is_empty() {
                zettel.file.display_path().to_string()
            } else {
                preview
            };
            ListItem::new(Line::raw(label))
        })
        .collect();
    let list = List::new(items)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(format!("Zettels ({})", app.matches.len())),
        )
        .highlight_style(Style::default().bg(Color::Yellow).fg(Color::Black));
    f.render_stateful_widget(list, sidebar[1], &mut app.list_state);

    // Content, with the table of contents above it when there is one
    match app.selected_zettel() {
        Some(zettel) => {
            let contents = contents_lines(zettel);
            let panes = if contents.is_empty() {
                Layout::default()
                    .constraints([Constraint::Length(0), Constraint::Min(0)])
                    .split(chunks[1])
            } else {
                Layout::default()
                    .direction(Direction::Vertical)
                    .constraints([
                        Constraint::Length(contents.len() as u16 + 2),
                        Constraint::Min(0),
                    ])
                    .split(chunks[1])
            };
            if !contents.is_empty() {
                let toc = Paragraph::new(contents)
                    .block(Block::default().borders(Borders::ALL).title("Contents"));
                f.render_widget(toc, panes[0]);
            }
            let content = Paragraph::new(render_zettel(zettel))
                .block(
                    Block::default()
                        .borders(Borders::ALL)
                        .title(zettel.file.display_path().to_string()),
                )
                .wrap(Wrap { trim: false });
            f.render_widget(content, panes[1]);
        }
        None => {
            let empty = Paragraph::new("No zettel matches the query")
                .block(Block::default().borders(Borders::ALL).title("Content"));
            f.render_widget(empty, chunks[1]);
        }
    }

    let help_text = match (&app.status, app.mode) {
        (Some(status), _) => Line::raw(status.clone()),
        (None, Mode::Search) => Line::raw("type to filter | !term: exclude | Enter/Esc: done"),
        (None, Mode::Browse) => Line::from(vec![
            Span::raw("q: Quit | "),
            Span::raw("↑/k: Previous | "),
            Span::raw("↓/j: Next | "),
            Span::raw("/: Search | u: Unique | n: New | r: Reload"),
        ]),
    };
    f.render_widget(Paragraph::new(vec![help_text]), rows[1]);
}
