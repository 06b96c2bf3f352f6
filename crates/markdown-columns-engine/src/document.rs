use crate::columns::{ColumnSession, Host};
use crate::html::fragments_to_html;
use crate::models::Fragment;
use crate::parsing::parse_fragments;

/// The fragments of a document after one full render pass.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RenderedDocument {
    pub fragments: Vec<Fragment>,
}

impl RenderedDocument {
    /// Fragments that still carry content.
    pub fn visible(&self) -> impl Iterator<Item = &Fragment> {
        self.fragments.iter().filter(|f| !f.is_empty())
    }

    pub fn to_html(&self) -> String {
        fragments_to_html(&self.fragments)
    }
}

/// Runs a full render pass of `markdown` through `session`.
///
/// The session is reset first, every fragment is processed in document
/// order, and an unclosed block at the end is appended as plain content.
pub fn render_markdown<H: Host + ?Sized>(
    session: &mut ColumnSession,
    markdown: &str,
    host: &H,
) -> RenderedDocument {
    session.reset();

    let mut fragments = parse_fragments(markdown);
    for fragment in &mut fragments {
        session.process(fragment, host);
    }
    if let Some(rest) = session.finish() {
        fragments.push(rest);
    }

    log::debug!("Rendered {} fragment(s)", fragments.len());
    RenderedDocument { fragments }
}

/// [`render_markdown`] with a fresh session, straight to HTML.
pub fn render_markdown_to_html<H: Host + ?Sized>(markdown: &str, host: &H) -> String {
    render_markdown(&mut ColumnSession::new(), markdown, host).to_html()
}
