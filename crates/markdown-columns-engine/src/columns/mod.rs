//! # Column Blocks
//!
//! Turns `[begin] ... [col] ... [end]` regions of rendered markdown into
//! side-by-side columns.
//!
//! ```text
//! [begin]2
//! Left column, twice as wide.
//! [col]
//! Right column.
//! [end] wrap rtl
//! ```
//!
//! ## Modules
//!
//! - **`tags`**: marker grammar, width hints and [`BlockConfig`]
//! - **`normalize`**: splits paragraphs at line breaks into logical lines
//! - **`classify`**: [`FragmentClassifier`] decides accumulate / render / pass-through
//! - **`render`**: [`render_block`] lays out a complete block as columns
//! - **`session`**: [`ColumnSession`] stitches blocks across fragments
//! - **`host`**: the [`Host`] interface for settings and platform
//!
//! ## Key Invariants
//!
//! - Malformed input never fails; it renders unchanged
//! - A rendered block lives in exactly one fragment; fragments merged into it are left empty
//! - Column count is the number of `[col]` markers plus one

pub mod classify;
pub mod host;
pub mod normalize;
pub mod render;
pub mod session;
pub mod tags;

pub use classify::{FragmentAction, FragmentClassifier};
pub use host::{Host, Platform, RenderEnv};
pub use normalize::{Line, normalize, split_lines};
pub use render::{column_widths, render_block};
pub use session::ColumnSession;
pub use tags::{BlockConfig, Tag, parse_tag, parse_width};

/// Class of a fragment laid out as a column block.
pub const PARENT_CLASS: &str = "columns-parent";
/// Class of a column block arranged right to left.
pub const RTL_CLASS: &str = "columns-parent-rtl";
/// Class of a column that may wrap onto a new line.
pub const WRAP_CLASS: &str = "columns-wrap";
