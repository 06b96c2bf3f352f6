/// A node of rendered content.
///
/// This is the intermediate tree the column transform works on. The host
/// builds it from its own renderer output and serializes it back afterwards
/// (see [`crate::html`]).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Node {
    /// Plain text.
    Text(String),
    /// A line break inside a paragraph.
    Break,
    /// A paragraph and its inline content.
    Paragraph(Vec<Node>),
    /// Any other markup: headings, lists, emphasis, links, images, code...
    Element(Element),
    /// Raw HTML passed through verbatim. Contributes no plain text.
    Html(String),
    /// One column of a rendered column block.
    Column(Column),
}

/// A generic markup element.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Element {
    pub name: String,
    pub attrs: Vec<(String, String)>,
    pub children: Vec<Node>,
}

/// A column produced by the block renderer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Column {
    /// Flex-grow ratio relative to the sibling columns of the same block.
    pub width: u32,
    /// Whether the column may flow onto a new line when space runs out.
    pub wrap: bool,
    pub children: Vec<Node>,
}

/// Elements that start a new line in the plain-text view.
const BLOCK_ELEMENTS: &[&str] = &[
    "blockquote",
    "div",
    "h1",
    "h2",
    "h3",
    "h4",
    "h5",
    "h6",
    "hr",
    "li",
    "ol",
    "pre",
    "table",
    "tbody",
    "thead",
    "tr",
    "ul",
];

impl Node {
    pub fn text(text: impl Into<String>) -> Self {
        Node::Text(text.into())
    }

    pub fn paragraph(children: Vec<Node>) -> Self {
        Node::Paragraph(children)
    }

    pub fn element(name: impl Into<String>, children: Vec<Node>) -> Self {
        Node::Element(Element::new(name, children))
    }

    /// True for nodes that are laid out as their own line(s).
    pub fn is_block(&self) -> bool {
        match self {
            Node::Paragraph(_) | Node::Column(_) => true,
            Node::Element(el) => el.is_block(),
            Node::Text(_) | Node::Break | Node::Html(_) => false,
        }
    }

    /// Whether a line break occurs anywhere below this node.
    pub fn contains_break(&self) -> bool {
        match self {
            Node::Break => true,
            Node::Paragraph(children) => children.iter().any(Node::contains_break),
            Node::Element(el) => el.children.iter().any(Node::contains_break),
            Node::Column(col) => col.children.iter().any(Node::contains_break),
            Node::Text(_) | Node::Html(_) => false,
        }
    }

    /// Plain-text rendering of this node, similar to a browser's `innerText`.
    pub fn plain_text(&self) -> String {
        let mut out = String::new();
        self.write_plain_text(&mut out);
        out
    }

    pub(crate) fn write_plain_text(&self, out: &mut String) {
        match self {
            Node::Text(text) => out.push_str(text),
            Node::Break => out.push('\n'),
            Node::Html(_) => {}
            Node::Paragraph(children) => write_block(children, out),
            Node::Column(col) => write_block(&col.children, out),
            Node::Element(el) if el.is_block() => write_block(&el.children, out),
            Node::Element(el) => {
                for child in &el.children {
                    child.write_plain_text(out);
                }
            }
        }
    }
}

fn write_block(children: &[Node], out: &mut String) {
    start_line(out);
    for child in children {
        child.write_plain_text(out);
    }
    start_line(out);
}

fn start_line(out: &mut String) {
    if !out.is_empty() && !out.ends_with('\n') {
        out.push('\n');
    }
}

impl Element {
    pub fn new(name: impl Into<String>, children: Vec<Node>) -> Self {
        Self {
            name: name.into(),
            attrs: Vec::new(),
            children,
        }
    }

    pub fn with_attr(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.attrs.push((key.into(), value.into()));
        self
    }

    pub fn attr(&self, key: &str) -> Option<&str> {
        self.attrs
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    pub fn is_block(&self) -> bool {
        BLOCK_ELEMENTS.contains(&self.name.as_str())
    }

    /// Copy of this element with the same name and attributes but new children.
    pub(crate) fn with_children(&self, children: Vec<Node>) -> Self {
        Self {
            name: self.name.clone(),
            attrs: self.attrs.clone(),
            children,
        }
    }
}

impl From<Element> for Node {
    fn from(el: Element) -> Self {
        Node::Element(el)
    }
}

impl From<Column> for Node {
    fn from(col: Column) -> Self {
        Node::Column(col)
    }
}
