//! Grammar of the `[begin]`, `[col]` and `[end]` markers.

use std::sync::OnceLock;

use markdown_columns_config::Settings;
use regex::Regex;

pub const BEGIN: &str = "[begin]";
pub const COL: &str = "[col]";
pub const END: &str = "[end]";

/// A column marker found at the start of a logical line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tag<'a> {
    /// `[begin]<width>`: opens a block and its first column.
    Begin { width: u32 },
    /// `[col]<width>`: starts the next column.
    Col { width: u32 },
    /// `[end]<config>`: closes the block.
    End { config: &'a str },
}

/// Recognizes a marker at the very start of `line`.
///
/// Matching is case-sensitive and anchored; a marker anywhere else in the
/// line is plain text.
pub fn parse_tag(line: &str) -> Option<Tag<'_>> {
    if let Some(rest) = line.strip_prefix(BEGIN) {
        Some(Tag::Begin {
            width: parse_width(rest),
        })
    } else if let Some(rest) = line.strip_prefix(COL) {
        Some(Tag::Col {
            width: parse_width(rest),
        })
    } else {
        line.strip_prefix(END).map(|rest| Tag::End { config: rest })
    }
}

/// Parses the leading integer of a width hint.
///
/// Anything that does not start with a positive integer yields `1`.
pub fn parse_width(hint: &str) -> u32 {
    static WIDTH_REGEX: OnceLock<Regex> = OnceLock::new();
    let regex =
        WIDTH_REGEX.get_or_init(|| Regex::new(r"^\s*([+-]?\d+)").expect("Invalid width regex"));

    regex
        .captures(hint)
        .and_then(|caps| caps[1].trim_start_matches('+').parse::<u32>().ok())
        .filter(|width| *width > 0)
        .unwrap_or(1)
}

/// Options written after the `[end]` marker of a block.
///
/// Keywords are matched by substring, so unknown words are ignored.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BlockConfig(String);

impl BlockConfig {
    pub fn new(text: impl Into<String>) -> Self {
        Self(text.into().trim().to_string())
    }

    /// Takes the config from the first `[end]` line of `text`.
    pub fn from_text(text: &str) -> Self {
        text.lines()
            .find_map(|line| match parse_tag(line) {
                Some(Tag::End { config }) => Some(Self::new(config)),
                _ => None,
            })
            .unwrap_or_default()
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn wrap(&self) -> bool {
        self.0.contains("wrap")
    }

    pub fn rtl(&self) -> bool {
        self.0.contains("rtl")
    }

    pub fn ltr(&self) -> bool {
        self.0.contains("ltr")
    }

    /// Right-to-left unless the block asks for `ltr` explicitly.
    pub fn resolve_rtl(&self, settings: &Settings) -> bool {
        !self.ltr() && (settings.rtl_by_default || self.rtl())
    }

    pub fn resolve_wrap(&self, settings: &Settings) -> bool {
        settings.wrap_by_default || self.wrap()
    }
}
