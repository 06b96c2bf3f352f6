use super::Node;

/// One unit of rendered content handed to the column transform by the host.
///
/// Hosts typically produce one fragment per top-level markdown block. The
/// transform may rewrite `children` in place and may add `classes` to the
/// element enclosing the fragment.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Fragment {
    /// CSS classes of the enclosing element.
    pub classes: Vec<String>,
    /// Structured content.
    pub children: Vec<Node>,
}

impl Fragment {
    pub fn new(children: Vec<Node>) -> Self {
        Self {
            classes: Vec::new(),
            children,
        }
    }

    /// An empty fragment produces no output.
    pub fn is_empty(&self) -> bool {
        self.children.is_empty()
    }

    /// Plain-text content, one logical line per `\n`-separated line.
    pub fn plain_text(&self) -> String {
        let mut out = String::new();
        for child in &self.children {
            if child.is_block() && !out.is_empty() && !out.ends_with('\n') {
                out.push('\n');
            }
            child.write_plain_text(&mut out);
        }
        out
    }

    /// Adds a class unless it is already present.
    pub fn add_class(&mut self, class: &str) {
        if !self.has_class(class) {
            self.classes.push(class.to_string());
        }
    }

    pub fn has_class(&self, class: &str) -> bool {
        self.classes.iter().any(|c| c == class)
    }

    /// Moves the content out, leaving this fragment empty.
    pub fn take_children(&mut self) -> Vec<Node> {
        std::mem::take(&mut self.children)
    }
}
