pub mod fragment;
pub mod node;

pub use fragment::Fragment;
pub use node::{Column, Element, Node};
