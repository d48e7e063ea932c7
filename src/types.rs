//! Shared types used across the extraction → grouping → rendering pipeline.
//!
//! These are plain value types: records are built once per parse, consumed by
//! the grouping engine, and discarded after rendering. Nothing persists across
//! invocations.

use serde::Serialize;

/// Position of an image in a before/after comparison.
///
/// Derived from the trailing word of the alt text (`"card before.png"` →
/// `Before`). Anything without a recognized suffix is `Standalone`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Timing {
    Before,
    After,
    Standalone,
}

/// One extracted image declaration, normalized for grouping.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ImageRecord {
    /// Display name: order prefix stripped, timing suffix stripped,
    /// underscores converted to spaces, trimmed. May be empty.
    pub alt: String,
    /// Image source (URL or path), verbatim from the input.
    pub src: String,
    /// Grouping key. Always equal to `alt`; kept as its own field so the
    /// grouping code reads as keyed-by-category rather than keyed-by-title.
    pub category: String,
    pub timing: Timing,
    /// Sort key from the numeric prefix of the alt text. 0 when absent.
    pub order: u32,
}

/// A before/after pair (possibly incomplete) sharing one category.
///
/// Either slot may be empty; an incomplete pair renders with an empty cell.
/// `order` is the minimum order across every record that contributed to the
/// group, so a pair sorts where its earliest member appeared.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Group {
    pub before: Option<ImageRecord>,
    pub after: Option<ImageRecord>,
    pub order: u32,
}
