use crate::models::{Fragment, Node};

use super::classify::{FragmentAction, FragmentClassifier};
use super::host::Host;
use super::render::{column_widths, render_block};
use super::tags::BlockConfig;
use super::{PARENT_CLASS, RTL_CLASS};

/// Stitches column blocks back together across fragments.
///
/// A host's renderer hands over a document in pieces, and a single
/// `[begin] ... [end]` block may be spread over several of them. The session
/// holds the pieces of an open block until the fragment containing its
/// `[end]` arrives, then renders the whole block into that fragment.
///
/// One session serves one render pass. Call [`ColumnSession::reset`] before
/// processing the first fragment of a new pass.
#[derive(Debug, Default)]
pub struct ColumnSession {
    pending: Vec<Fragment>,
}

impl ColumnSession {
    pub fn new() -> Self {
        Self::default()
    }

    /// Drops any half-collected block.
    pub fn reset(&mut self) {
        if !self.pending.is_empty() {
            log::debug!("Discarding {} pending fragment(s)", self.pending.len());
        }
        self.pending.clear();
    }

    /// Whether a block is open and waiting for its `[end]`.
    pub fn is_pending(&self) -> bool {
        !self.pending.is_empty()
    }

    pub fn pending_len(&self) -> usize {
        self.pending.len()
    }

    /// Processes the next fragment of the document.
    ///
    /// Content held from earlier fragments is moved in front of this
    /// fragment's content first. Then, depending on the merged text:
    /// - an open block moves all of it into the session, leaving `fragment`
    ///   empty,
    /// - a complete block is rendered into `fragment` as columns,
    /// - anything else leaves the merged content as it is.
    pub fn process<H: Host + ?Sized>(&mut self, fragment: &mut Fragment, host: &H) -> FragmentAction {
        self.merge_pending_into(fragment);

        let text = fragment.plain_text();
        let action = FragmentClassifier.classify(&text);
        log::trace!("Fragment classified as {action:?}");

        match action {
            FragmentAction::Accumulate => {
                self.pending.push(Fragment::new(fragment.take_children()));
            }
            FragmentAction::Render => self.render(fragment, &text, host),
            FragmentAction::PassThrough => {}
        }

        action
    }

    /// Ends the document.
    ///
    /// A block that never saw its `[end]` is handed back as a plain fragment
    /// so its content is not lost; the tags in it stay literal text.
    pub fn finish(&mut self) -> Option<Fragment> {
        if self.pending.is_empty() {
            return None;
        }
        log::warn!("Column block was never closed with [end]; emitting it unchanged");

        let mut fragment = Fragment::default();
        self.merge_pending_into(&mut fragment);
        Some(fragment)
    }

    fn merge_pending_into(&mut self, fragment: &mut Fragment) {
        if self.pending.is_empty() {
            return;
        }
        log::trace!("Merging {} pending fragment(s)", self.pending.len());

        let mut merged: Vec<Node> = self
            .pending
            .drain(..)
            .flat_map(|queued| queued.children)
            .collect();
        merged.append(&mut fragment.children);
        fragment.children = merged;
    }

    fn render<H: Host + ?Sized>(&self, fragment: &mut Fragment, text: &str, host: &H) {
        let config = BlockConfig::from_text(text);
        let settings = host.settings();
        let layout = host.layout_enabled();

        if layout {
            fragment.add_class(PARENT_CLASS);
            if config.resolve_rtl(&settings) {
                fragment.add_class(RTL_CLASS);
            }
        }
        let wrap = layout && config.resolve_wrap(&settings);

        log::debug!(
            "Rendering column block: widths {:?}, config {:?}, wrap {wrap}",
            column_widths(text),
            config.as_str()
        );
        let children = fragment.take_children();
        fragment.children = render_block(children, wrap);
    }
}
