//! Image extraction from pasted HTML or Markdown snippets.
//!
//! Two input grammars, picked by sniffing the trimmed input's prefix:
//!
//! - **Tag syntax** (`<img ...>`): every `<img`-to-`>` span is scanned for
//!   double-quoted `alt="..."` and `src="..."` attributes. Attribute names
//!   match case-insensitively; single-quoted or unquoted values are not
//!   recognized. A tag missing either attribute (or with an empty value) is
//!   silently skipped.
//! - **Link syntax** (`![label](target)`): CommonMark-style image links.
//!   The label runs to the first unescaped `]`; the target body is read with
//!   balanced paren-depth tracking so URLs containing `(`/`)` survive. A
//!   target wrapped in `<...>` is unwrapped; anything after the first
//!   whitespace inside the parens (a title) is discarded. Entries with an
//!   empty label or target are skipped.
//!
//! Malformed entries never abort the pass — they degrade by omission, and an
//! empty result is a normal output the caller must handle.
//!
//! Each extracted alt/label goes through [`crate::filename::parse_alt`], and
//! the final record list is stably sorted by ascending order so ties keep
//! their document position.

use crate::filename::parse_alt;
use crate::types::ImageRecord;

/// What kind of clipboard payload we are looking at.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputKind {
    /// Starts with `<img` — HTML tag syntax.
    TagImages,
    /// Starts with `![` — Markdown link syntax.
    LinkImages,
    /// Anything else — a PR title draft.
    Title,
}

/// Classify a raw clipboard string by its trimmed prefix.
pub fn classify(raw: &str) -> InputKind {
    let trimmed = raw.trim_start();
    if trimmed.starts_with("<img") {
        InputKind::TagImages
    } else if trimmed.starts_with("![") {
        InputKind::LinkImages
    } else {
        InputKind::Title
    }
}

/// Extract records from a raw snippet, dispatching on [`classify`].
/// Title-mode input has no images and yields an empty list.
pub fn extract_records(input: &str) -> Vec<ImageRecord> {
    match classify(input) {
        InputKind::TagImages => extract_tag_images(input),
        InputKind::LinkImages => extract_link_images(input),
        InputKind::Title => Vec::new(),
    }
}

/// Extract records from `<img ...>` tags, sorted by ascending order.
pub fn extract_tag_images(input: &str) -> Vec<ImageRecord> {
    let mut records = Vec::new();
    let mut pos = 0;
    while let Some(offset) = find_ignore_ascii_case(&input[pos..], "<img") {
        let tag_start = pos + offset;
        let Some(close) = input[tag_start..].find('>') else {
            break;
        };
        let tag = &input[tag_start..tag_start + close];
        if let Some(record) = record_from_tag(tag) {
            records.push(record);
        }
        pos = tag_start + close + 1;
    }
    sort_by_order(&mut records);
    records
}

/// Extract records from `![label](target)` links, sorted by ascending order.
pub fn extract_link_images(input: &str) -> Vec<ImageRecord> {
    let mut records = Vec::new();
    let mut pos = 0;
    while let Some(offset) = input[pos..].find("![") {
        let marker = pos + offset;
        match scan_link(input, marker) {
            Some((record, resume)) => {
                if let Some(record) = record {
                    records.push(record);
                }
                pos = resume;
            }
            // Malformed occurrence: step past the marker and keep scanning.
            None => pos = marker + 2,
        }
    }
    sort_by_order(&mut records);
    records
}

/// Stable ascending sort by order — ties keep document position.
fn sort_by_order(records: &mut [ImageRecord]) {
    records.sort_by_key(|r| r.order);
}

fn build_record(alt_raw: &str, src: &str) -> ImageRecord {
    let parsed = parse_alt(alt_raw);
    ImageRecord {
        alt: parsed.name.clone(),
        src: src.to_string(),
        category: parsed.name,
        timing: parsed.timing,
        order: parsed.order,
    }
}

// ---------------------------------------------------------------------------
// Tag syntax
// ---------------------------------------------------------------------------

/// Build a record from one tag body (the text between `<img` and `>`).
/// Returns `None` when either attribute is missing or empty.
fn record_from_tag(tag: &str) -> Option<ImageRecord> {
    let alt = attribute_value(tag, "alt=\"")?;
    let src = attribute_value(tag, "src=\"")?;
    if alt.is_empty() || src.is_empty() {
        return None;
    }
    Some(build_record(alt, src))
}

/// First occurrence of a double-quoted attribute, matched literally and
/// case-insensitively on the name.
fn attribute_value<'a>(tag: &'a str, marker: &str) -> Option<&'a str> {
    let start = find_ignore_ascii_case(tag, marker)? + marker.len();
    let end = tag[start..].find('"')?;
    Some(&tag[start..start + end])
}

/// Byte-wise case-insensitive substring search for an ASCII needle.
fn find_ignore_ascii_case(haystack: &str, needle: &str) -> Option<usize> {
    let h = haystack.as_bytes();
    let n = needle.as_bytes();
    if n.is_empty() || h.len() < n.len() {
        return None;
    }
    (0..=h.len() - n.len()).find(|&i| h[i..i + n.len()].eq_ignore_ascii_case(n))
}

// ---------------------------------------------------------------------------
// Link syntax
// ---------------------------------------------------------------------------

/// Scan one `![` occurrence starting at `marker`.
///
/// Returns `None` when the occurrence is malformed (unterminated label, no
/// `(` after the label, unbalanced parens, unterminated `<...>` target) —
/// the caller resumes just past the marker. Returns `Some((record, resume))`
/// for a syntactically complete link; `record` is still `None` when label or
/// target is empty.
fn scan_link(input: &str, marker: usize) -> Option<(Option<ImageRecord>, usize)> {
    let bytes = input.as_bytes();
    let label_start = marker + 2;

    // Label: up to the first `]` not preceded by a backslash.
    let mut i = label_start;
    let label_end = loop {
        match *bytes.get(i)? {
            b'\\' => i += 2,
            b']' => break i,
            _ => i += 1,
        }
    };

    // Whitespace is allowed between `]` and `(`.
    let mut j = label_end + 1;
    while bytes.get(j).is_some_and(|b| b.is_ascii_whitespace()) {
        j += 1;
    }
    if bytes.get(j) != Some(&b'(') {
        return None;
    }

    // Target body: balanced paren tracking, so nested `(`/`)` in a URL do
    // not terminate the body early.
    let body_start = j + 1;
    let mut depth = 1usize;
    let mut k = body_start;
    let body_end = loop {
        match *bytes.get(k)? {
            b'(' => depth += 1,
            b')' => {
                depth -= 1;
                if depth == 0 {
                    break k;
                }
            }
            _ => {}
        }
        k += 1;
    };

    let body = &input[body_start..body_end];
    let source = if let Some(wrapped) = body.strip_prefix('<') {
        let close = wrapped.find('>')?;
        &wrapped[..close]
    } else {
        // A title after the first whitespace run is discarded.
        let end = body
            .find(|c: char| c.is_ascii_whitespace())
            .unwrap_or(body.len());
        &body[..end]
    };

    let label = &input[label_start..label_end];
    let record = if label.is_empty() || source.is_empty() {
        None
    } else {
        Some(build_record(label, source))
    };
    Some((record, body_end + 1))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Timing;

    // =========================================================================
    // Classification
    // =========================================================================

    #[test]
    fn classify_by_trimmed_prefix() {
        assert_eq!(classify("  <img src=\"u\">"), InputKind::TagImages);
        assert_eq!(classify("\n![a](u)"), InputKind::LinkImages);
        assert_eq!(classify("mb 80 fix it"), InputKind::Title);
        // Sniffing is prefix-only: a tag not at the start is not image input.
        assert_eq!(classify("<div><img src=\"u\"></div>"), InputKind::Title);
    }

    // =========================================================================
    // Tag syntax
    // =========================================================================

    #[test]
    fn tag_extracts_alt_and_src() {
        let records = extract_tag_images(r#"<img alt="1. Feature_1_before" src="U">"#);
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].alt, "Feature 1");
        assert_eq!(records[0].src, "U");
        assert_eq!(records[0].timing, Timing::Before);
        assert_eq!(records[0].order, 1);
    }

    #[test]
    fn tag_attribute_names_match_case_insensitively() {
        let records = extract_tag_images(r#"<IMG ALT="pic" SRC="u.png">"#);
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].src, "u.png");
    }

    #[test]
    fn tag_missing_alt_is_skipped() {
        let records = extract_tag_images(r#"<img src="u"><img alt="ok" src="v">"#);
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].src, "v");
    }

    #[test]
    fn tag_empty_attribute_is_skipped() {
        assert!(extract_tag_images(r#"<img alt="" src="u">"#).is_empty());
        assert!(extract_tag_images(r#"<img alt="a" src="">"#).is_empty());
    }

    #[test]
    fn tag_single_quoted_attributes_are_not_recognized() {
        assert!(extract_tag_images("<img alt='a' src='u'>").is_empty());
    }

    #[test]
    fn tag_src_is_verbatim() {
        let records =
            extract_tag_images(r#"<img alt="a" src="https://x.test/a_(b).png?w=1&h=2">"#);
        assert_eq!(records[0].src, "https://x.test/a_(b).png?w=1&h=2");
    }

    #[test]
    fn tags_sort_by_order_with_stable_ties() {
        let input = r#"
            <img alt="3 C" src="c">
            <img alt="1. A" src="a">
            <img alt="4 D" src="d">
            <img alt="2. B" src="b">
            <img alt="tie two" src="t2">
            <img alt="tie one" src="t1">
        "#;
        let srcs: Vec<_> = extract_tag_images(input)
            .into_iter()
            .map(|r| r.src)
            .collect();
        // Order-0 ties keep document position, numbered entries sort by order.
        assert_eq!(srcs, vec!["t2", "t1", "a", "b", "c", "d"]);
    }

    // =========================================================================
    // Link syntax
    // =========================================================================

    #[test]
    fn link_extracts_label_and_target() {
        let records = extract_link_images("![1. Feature_1_before](U)");
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].alt, "Feature 1");
        assert_eq!(records[0].src, "U");
        assert_eq!(records[0].timing, Timing::Before);
        assert_eq!(records[0].order, 1);
    }

    #[test]
    fn link_and_tag_modes_agree() {
        let from_tag = extract_tag_images(r#"<img alt="1. Feature_1_before" src="U">"#);
        let from_link = extract_link_images("![1. Feature_1_before](U)");
        assert_eq!(from_tag, from_link);
    }

    #[test]
    fn link_target_keeps_internal_parens() {
        let records = extract_link_images("![X after](https://example.com/a_(b).png)");
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].src, "https://example.com/a_(b).png");
        assert_eq!(records[0].timing, Timing::After);
    }

    #[test]
    fn link_angle_wrapped_target() {
        let records = extract_link_images("![a](<https://x.test/has space.png>)");
        assert_eq!(records[0].src, "https://x.test/has space.png");
    }

    #[test]
    fn link_title_after_whitespace_is_discarded() {
        let records = extract_link_images(r#"![a](u.png "the title")"#);
        assert_eq!(records[0].src, "u.png");
    }

    #[test]
    fn link_escaped_bracket_does_not_end_label() {
        let records = extract_link_images(r"![a\]b](u)");
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].src, "u");
    }

    #[test]
    fn link_without_parens_is_skipped_but_scan_continues() {
        let records = extract_link_images("![orphan] text ![ok](u)");
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].src, "u");
    }

    #[test]
    fn link_unbalanced_parens_is_skipped() {
        assert!(extract_link_images("![a](u(b").is_empty());
    }

    #[test]
    fn link_empty_label_or_target_is_skipped() {
        assert!(extract_link_images("![](u)").is_empty());
        assert!(extract_link_images("![a]()").is_empty());
    }

    #[test]
    fn links_sort_by_order() {
        let input = "![2 b](B)\n![1. a](A)";
        let srcs: Vec<_> = extract_link_images(input)
            .into_iter()
            .map(|r| r.src)
            .collect();
        assert_eq!(srcs, vec!["A", "B"]);
    }
}
