pub mod columns;
pub mod document;
pub mod html;
pub mod io;
pub mod models;
pub mod parsing;

// Re-export key types for easier usage
pub use columns::{ColumnSession, FragmentAction, Host, Platform, RenderEnv};
pub use document::{RenderedDocument, render_markdown, render_markdown_to_html};
pub use io::*;
pub use markdown_columns_config::Settings;
pub use models::{Column, Element, Fragment, Node};
