//! HTML serialization of fragments and nodes.

use crate::columns::WRAP_CLASS;
use crate::models::{Column, Element, Fragment, Node};

/// Styles for the classes the column transform emits.
pub const STYLESHEET: &str = "\
.columns-parent {
  display: flex;
  gap: 1.5em;
}
.columns-parent-rtl {
  flex-direction: row-reverse;
}
.columns-parent > div {
  min-width: 0;
}
.columns-parent:has(> .columns-wrap) {
  flex-wrap: wrap;
}
.columns-wrap {
  min-width: 15em;
}
";

/// Elements without a closing tag.
const VOID_ELEMENTS: &[&str] = &["br", "hr", "img", "input"];

/// Serializes a fragment as a `<div>` carrying its classes.
///
/// Empty fragments produce an empty string.
pub fn fragment_to_html(fragment: &Fragment) -> String {
    if fragment.is_empty() {
        return String::new();
    }

    let mut out = String::new();
    out.push_str("<div");
    if !fragment.classes.is_empty() {
        push_attr(&mut out, "class", &fragment.classes.join(" "));
    }
    out.push('>');
    write_nodes(&fragment.children, &mut out);
    out.push_str("</div>");
    out
}

/// Serializes a sequence of fragments, one per line, skipping empty ones.
pub fn fragments_to_html<'a>(fragments: impl IntoIterator<Item = &'a Fragment>) -> String {
    let mut out = String::new();
    for fragment in fragments {
        let html = fragment_to_html(fragment);
        if !html.is_empty() {
            out.push_str(&html);
            out.push('\n');
        }
    }
    out
}

pub fn nodes_to_html(nodes: &[Node]) -> String {
    let mut out = String::new();
    write_nodes(nodes, &mut out);
    out
}

/// Wraps a rendered body in a complete HTML page with [`STYLESHEET`].
pub fn standalone_page(title: &str, body: &str) -> String {
    format!(
        "<!DOCTYPE html>\n<html>\n<head>\n<meta charset=\"utf-8\">\n<title>{}</title>\n<style>\n{}</style>\n</head>\n<body>\n{}</body>\n</html>\n",
        html_escape::encode_text(title),
        STYLESHEET,
        body
    )
}

fn write_nodes(nodes: &[Node], out: &mut String) {
    for node in nodes {
        write_node(node, out);
    }
}

fn write_node(node: &Node, out: &mut String) {
    match node {
        Node::Text(text) => out.push_str(&html_escape::encode_text(text)),
        Node::Break => out.push_str("<br>"),
        Node::Html(raw) => out.push_str(raw),
        Node::Paragraph(children) => {
            out.push_str("<p>");
            write_nodes(children, out);
            out.push_str("</p>");
        }
        Node::Element(el) => write_element(el, out),
        Node::Column(col) => write_column(col, out),
    }
}

fn write_element(el: &Element, out: &mut String) {
    out.push('<');
    out.push_str(&el.name);
    for (key, value) in &el.attrs {
        push_attr(out, key, value);
    }
    out.push('>');

    if VOID_ELEMENTS.contains(&el.name.as_str()) {
        return;
    }
    write_nodes(&el.children, out);
    out.push_str("</");
    out.push_str(&el.name);
    out.push('>');
}

fn write_column(col: &Column, out: &mut String) {
    out.push_str("<div");
    if col.wrap {
        push_attr(out, "class", WRAP_CLASS);
    }
    push_attr(out, "style", &format!("flex:{}", col.width));
    out.push('>');
    write_nodes(&col.children, out);
    out.push_str("</div>");
}

fn push_attr(out: &mut String, key: &str, value: &str) {
    out.push(' ');
    out.push_str(key);
    out.push_str("=\"");
    out.push_str(&html_escape::encode_double_quoted_attribute(value));
    out.push('"');
}
