use super::tags::{Tag, parse_tag};

/// What the session should do with a fragment.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FragmentAction {
    /// A block is open but not closed yet: hold the content for the next fragment.
    Accumulate,
    /// A complete block: lay it out as columns.
    Render,
    /// No block, or a malformed one: leave the content as it is.
    PassThrough,
}

/// Decides a [`FragmentAction`] from a fragment's plain text.
pub struct FragmentClassifier;

impl FragmentClassifier {
    /// Scans `text` line by line for block markers.
    ///
    /// A repeated `[begin]` or `[end]` stops the scan and yields
    /// [`FragmentAction::PassThrough`].
    pub fn classify(&self, text: &str) -> FragmentAction {
        let mut seen_begin = false;
        let mut seen_end = false;

        for line in text.lines() {
            match parse_tag(line) {
                Some(Tag::Begin { .. }) => {
                    if seen_begin {
                        return FragmentAction::PassThrough;
                    }
                    seen_begin = true;
                }
                Some(Tag::End { .. }) => {
                    if seen_end {
                        return FragmentAction::PassThrough;
                    }
                    seen_end = true;
                }
                Some(Tag::Col { .. }) | None => {}
            }
        }

        match (seen_begin, seen_end) {
            (true, true) => FragmentAction::Render,
            (true, false) => FragmentAction::Accumulate,
            (false, _) => FragmentAction::PassThrough,
        }
    }
}
