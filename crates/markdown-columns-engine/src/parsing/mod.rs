//! Markdown host: turns markdown text into the fragments the column
//! transform consumes.
//!
//! Reading-view renderers hand post-processors one fragment per top-level
//! block (paragraph, heading, list, code block, ...). This module reproduces
//! that split with pulldown-cmark so whole documents can be rendered
//! outside such a host.

use pulldown_cmark::{CodeBlockKind, Event, HeadingLevel, Options, Parser, Tag};

use crate::models::{Element, Fragment, Node};

/// Parse markdown into one [`Fragment`] per top-level block.
///
/// Soft line breaks inside a paragraph become [`Node::Break`], the way
/// note-taking apps render them, so a paragraph written over several source
/// lines keeps one logical line per source line.
pub fn parse_fragments(markdown: &str) -> Vec<Fragment> {
    let options = Options::ENABLE_TABLES
        | Options::ENABLE_STRIKETHROUGH
        | Options::ENABLE_TASKLISTS
        | Options::ENABLE_FOOTNOTES;
    let parser = Parser::new_ext(markdown, options);
    let mut processor = FragmentProcessor::new();

    for event in parser {
        processor.process_event(event);
    }

    processor.finalize()
}

/// What a still-open container turns into once its end event arrives.
enum OpenKind {
    Paragraph,
    Element(Element),
    CodeBlock { language: Option<String> },
    Image { src: String, title: String },
    HtmlBlock,
}

struct Open {
    kind: OpenKind,
    children: Vec<Node>,
}

impl Open {
    fn close(self) -> Node {
        let children = self.children;
        match self.kind {
            OpenKind::Paragraph => Node::Paragraph(children),
            OpenKind::Element(el) => Node::Element(Element { children, ..el }),
            OpenKind::CodeBlock { language } => {
                let mut code = Element::new("code", children);
                if let Some(language) = language {
                    code = code.with_attr("class", format!("language-{language}"));
                }
                Node::element("pre", vec![code.into()])
            }
            OpenKind::Image { src, title } => {
                let alt: String = children.iter().map(Node::plain_text).collect();
                let mut img = Element::new("img", vec![])
                    .with_attr("src", src)
                    .with_attr("alt", alt);
                if !title.is_empty() {
                    img = img.with_attr("title", title);
                }
                img.into()
            }
            OpenKind::HtmlBlock => Node::Html(
                children
                    .into_iter()
                    .filter_map(|child| match child {
                        Node::Html(raw) | Node::Text(raw) => Some(raw),
                        _ => None,
                    })
                    .collect(),
            ),
        }
    }
}

/// Builds nodes from the pulldown-cmark event stream.
///
/// Every `Start` pushes an [`Open`] container and the matching `End` pops it,
/// so nesting in the event stream maps directly onto nesting in the tree.
/// When the stack empties, the finished node becomes a fragment of its own.
struct FragmentProcessor {
    stack: Vec<Open>,
    fragments: Vec<Fragment>,
}

impl FragmentProcessor {
    fn new() -> Self {
        Self {
            stack: Vec::new(),
            fragments: Vec::new(),
        }
    }

    fn process_event(&mut self, event: Event) {
        match event {
            Event::Start(tag) => {
                let kind = open_kind(tag);
                self.stack.push(Open {
                    kind,
                    children: Vec::new(),
                });
            }
            Event::End(_) => {
                if let Some(open) = self.stack.pop() {
                    self.emit(open.close());
                }
            }
            Event::Text(text) => self.emit(Node::Text(text.into_string())),
            Event::Code(code) => self.emit(Node::element("code", vec![Node::text(code.into_string())])),
            Event::Html(html) | Event::InlineHtml(html) => self.emit(Node::Html(html.into_string())),
            Event::SoftBreak | Event::HardBreak => self.emit(Node::Break),
            Event::Rule => self.emit(Node::element("hr", vec![])),
            Event::TaskListMarker(checked) => {
                let mut input = Element::new("input", vec![])
                    .with_attr("type", "checkbox")
                    .with_attr("disabled", "");
                if checked {
                    input = input.with_attr("checked", "");
                }
                self.emit(input.into());
            }
            Event::FootnoteReference(label) => {
                let label = label.into_string();
                let link = Element::new("a", vec![Node::text(label.as_str())])
                    .with_attr("href", format!("#fn-{label}"));
                self.emit(Node::element("sup", vec![link.into()]));
            }
            other => log::trace!("Ignoring markdown event {other:?}"),
        }
    }

    /// Adds a finished node to the innermost open container, or starts a new
    /// fragment when nothing is open. Adjacent text is merged.
    fn emit(&mut self, node: Node) {
        let Some(open) = self.stack.last_mut() else {
            self.fragments.push(Fragment::new(vec![node]));
            return;
        };

        if let Node::Text(text) = &node
            && let Some(Node::Text(last)) = open.children.last_mut()
        {
            last.push_str(text);
            return;
        }
        open.children.push(node);
    }

    fn finalize(mut self) -> Vec<Fragment> {
        // Unbalanced input should not happen, but keep whatever was built.
        while let Some(open) = self.stack.pop() {
            self.emit(open.close());
        }
        self.fragments
    }
}

fn open_kind(tag: Tag) -> OpenKind {
    let element = |name: &str| OpenKind::Element(Element::new(name, vec![]));

    match tag {
        Tag::Paragraph => OpenKind::Paragraph,
        Tag::Heading { level, .. } => element(heading_name(level)),
        Tag::BlockQuote(_) => element("blockquote"),
        Tag::CodeBlock(kind) => OpenKind::CodeBlock {
            language: match kind {
                CodeBlockKind::Fenced(lang) if !lang.is_empty() => Some(lang.into_string()),
                _ => None,
            },
        },
        Tag::HtmlBlock => OpenKind::HtmlBlock,
        Tag::List(Some(start)) => {
            let mut ol = Element::new("ol", vec![]);
            if start != 1 {
                ol = ol.with_attr("start", start.to_string());
            }
            OpenKind::Element(ol)
        }
        Tag::List(None) => element("ul"),
        Tag::Item => element("li"),
        Tag::FootnoteDefinition(label) => OpenKind::Element(
            Element::new("div", vec![])
                .with_attr("class", "footnote-definition")
                .with_attr("id", format!("fn-{}", label.into_string())),
        ),
        Tag::Table(_) => element("table"),
        Tag::TableHead => element("thead"),
        Tag::TableRow => element("tr"),
        Tag::TableCell => element("td"),
        Tag::Emphasis => element("em"),
        Tag::Strong => element("strong"),
        Tag::Strikethrough => element("del"),
        Tag::Link {
            dest_url, title, ..
        } => {
            let mut a = Element::new("a", vec![]).with_attr("href", dest_url.into_string());
            if !title.is_empty() {
                a = a.with_attr("title", title.into_string());
            }
            OpenKind::Element(a)
        }
        Tag::Image {
            dest_url, title, ..
        } => OpenKind::Image {
            src: dest_url.into_string(),
            title: title.into_string(),
        },
        _ => element("div"),
    }
}

fn heading_name(level: HeadingLevel) -> &'static str {
    match level {
        HeadingLevel::H1 => "h1",
        HeadingLevel::H2 => "h2",
        HeadingLevel::H3 => "h3",
        HeadingLevel::H4 => "h4",
        HeadingLevel::H5 => "h5",
        HeadingLevel::H6 => "h6",
    }
}
