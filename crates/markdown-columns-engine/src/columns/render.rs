use crate::models::{Column, Node};

use super::normalize::{Line, split_lines};
use super::tags::{Tag, parse_tag};

/// Column under construction.
struct ColumnBuilder {
    width: u32,
    children: Vec<Node>,
    /// Source paragraph of the last kept node, while that node is a plain
    /// paragraph that later lines of the same source may fold into.
    open_source: Option<usize>,
}

impl ColumnBuilder {
    fn new(width: u32) -> Self {
        Self {
            width,
            children: Vec::new(),
            open_source: None,
        }
    }

    fn push_line(&mut self, line: Line) {
        let Line { source, node } = line;
        match node {
            Node::Paragraph(children) => {
                if self.open_source == Some(source)
                    && let Some(Node::Paragraph(last)) = self.children.last_mut()
                {
                    last.push(Node::Break);
                    last.extend(children);
                } else {
                    self.children.push(Node::Paragraph(children));
                    self.open_source = Some(source);
                }
            }
            other => {
                self.children.push(other);
                self.open_source = None;
            }
        }
    }

    fn build(self, wrap: bool) -> Node {
        Node::Column(Column {
            width: self.width,
            wrap,
            children: self.children,
        })
    }
}

/// Lays out the content of a complete block as columns.
///
/// `[begin]` and `[end]` lines are dropped, every `[col]` line starts a new
/// column, and lines that were split out of the same paragraph are joined
/// again with a line break when they end up in the same column. Returns one
/// [`Node::Column`] per column, left to right.
pub fn render_block(children: Vec<Node>, wrap: bool) -> Vec<Node> {
    let mut columns = vec![ColumnBuilder::new(1)];

    for line in split_lines(children) {
        let tag = line.tag().map(|tag| match tag {
            Tag::Begin { width } => Marker::Begin(width),
            Tag::Col { width } => Marker::Col(width),
            Tag::End { .. } => Marker::End,
        });

        let Some(current) = columns.last_mut() else {
            continue;
        };
        match tag {
            Some(Marker::Begin(width)) => {
                current.width = width;
                current.open_source = None;
            }
            Some(Marker::End) => current.open_source = None,
            Some(Marker::Col(width)) => columns.push(ColumnBuilder::new(width)),
            None => current.push_line(line),
        }
    }

    columns.into_iter().map(|col| col.build(wrap)).collect()
}

/// A tag with its borrowed config dropped, so the line can be moved.
enum Marker {
    Begin(u32),
    Col(u32),
    End,
}

/// Widths of the columns of a block, in order, from its plain text.
pub fn column_widths(text: &str) -> Vec<u32> {
    text.lines()
        .filter_map(|line| match parse_tag(line) {
            Some(Tag::Begin { width } | Tag::Col { width }) => Some(width),
            _ => None,
        })
        .collect()
}
