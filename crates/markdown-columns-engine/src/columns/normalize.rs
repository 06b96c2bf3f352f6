//! Splits paragraphs at their line breaks so every logical line can be
//! addressed on its own.
//!
//! Hosts often render several source lines as one paragraph with `<br>`
//! between them. Tags are line-anchored, so the block renderer needs each
//! line as a separate paragraph. [`Line::source`] keeps track of the
//! paragraph a line was cut from so lines can be folded back together later.

use crate::models::Node;

use super::tags::{Tag, parse_tag};

/// One logical line of block content.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Line {
    /// Index of the top-level node this line was split from.
    pub source: usize,
    /// A single-line paragraph, or a non-paragraph node left as is.
    pub node: Node,
}

impl Line {
    /// The marker this line starts with, if it is a paragraph.
    ///
    /// Looks through leading inline markup, so `**[col]**` still counts.
    pub fn tag(&self) -> Option<Tag<'_>> {
        match &self.node {
            Node::Paragraph(children) => leading_text(children).and_then(parse_tag),
            _ => None,
        }
    }

    pub fn is_paragraph(&self) -> bool {
        matches!(self.node, Node::Paragraph(_))
    }
}

fn leading_text(nodes: &[Node]) -> Option<&str> {
    match nodes.first()? {
        Node::Text(text) => Some(text.as_str()),
        Node::Element(el) => leading_text(&el.children),
        _ => None,
    }
}

/// Splits every paragraph in `nodes` at its line breaks.
///
/// Paragraphs without a break and non-paragraph nodes come through unchanged.
pub fn split_lines(nodes: Vec<Node>) -> Vec<Line> {
    let mut lines = Vec::with_capacity(nodes.len());

    for (source, node) in nodes.into_iter().enumerate() {
        match node {
            Node::Paragraph(children) if children.iter().any(Node::contains_break) => {
                lines.extend(split_segments(children).into_iter().map(|segment| Line {
                    source,
                    node: Node::Paragraph(strip_leading_newlines(segment)),
                }));
            }
            node => lines.push(Line { source, node }),
        }
    }

    lines
}

/// [`split_lines`] without the provenance.
pub fn normalize(nodes: Vec<Node>) -> Vec<Node> {
    split_lines(nodes).into_iter().map(|line| line.node).collect()
}

/// Cuts inline content at each break, duplicating any inline element that
/// straddles a break so each segment keeps its formatting.
fn split_segments(nodes: Vec<Node>) -> Vec<Vec<Node>> {
    let mut segments: Vec<Vec<Node>> = vec![Vec::new()];

    for node in nodes {
        match node {
            Node::Break => segments.push(Vec::new()),
            Node::Element(mut el) if el.children.iter().any(Node::contains_break) => {
                let parts = split_segments(std::mem::take(&mut el.children));
                for (i, part) in parts.into_iter().enumerate() {
                    if i > 0 {
                        segments.push(Vec::new());
                    }
                    if !part.is_empty() {
                        push_node(&mut segments, Node::Element(el.with_children(part)));
                    }
                }
            }
            other => push_node(&mut segments, other),
        }
    }

    segments
}

fn push_node(segments: &mut [Vec<Node>], node: Node) {
    if let Some(last) = segments.last_mut() {
        last.push(node);
    }
}

fn strip_leading_newlines(mut segment: Vec<Node>) -> Vec<Node> {
    if let Some(Node::Text(text)) = segment.first_mut() {
        let stripped = text.trim_start_matches(['\n', '\r']).to_string();
        if stripped.is_empty() {
            segment.remove(0);
        } else {
            *text = stripped;
        }
    }
    segment
}
