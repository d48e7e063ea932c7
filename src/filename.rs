//! Alt-text/filename parsing for the `NN. name before/after` convention.
//!
//! Screenshot alt texts follow a loose pattern: an optional numeric order
//! prefix, a name with underscores or spaces, and an optional trailing timing
//! word marking the image as the "before" or "after" half of a comparison:
//!
//! - `1. Feature_1_before` → order=1, timing=Before, name="Feature 1"
//! - `2 Settings after.png` → order=2, timing=After, name="Settings"
//! - `Overview` → order=0, timing=Standalone, name="Overview"
//!
//! This module is the single place that grammar lives. Parsing is three
//! anchored steps, in order:
//!
//! 1. **Order prefix** (start-anchored): a run of digits, optionally followed
//!    by a single `.`, optionally followed by whitespace. Absent → order 0.
//! 2. **Underscore normalization**: every `_` becomes a space. This runs
//!    before timing detection so `category_before` is recognized.
//! 3. **Timing suffix** (end-anchored): the word `before` or `after`
//!    (ASCII case-insensitive), optionally followed by a `.` and an
//!    alphanumeric extension token, optionally followed by trailing
//!    whitespace. The word must sit at the start of the string or after
//!    whitespace, so `xbefore.png` is not a timing suffix.
//!
//! What remains after stripping the matched prefix and suffix, trimmed, is
//! the normalized name. It may legitimately be empty (input `"before"`), and
//! callers must tolerate an empty category.

use crate::types::Timing;

/// Result of parsing one alt-text string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedAlt {
    /// Sort key from the numeric prefix. 0 when no prefix is present.
    pub order: u32,
    pub timing: Timing,
    /// Display name with prefix/suffix stripped and underscores as spaces.
    pub name: String,
}

/// Parse an alt-text/filename string into order, timing, and normalized name.
pub fn parse_alt(raw: &str) -> ParsedAlt {
    let (order, rest) = split_order_prefix(raw);
    let normalized = rest.replace('_', " ");
    let (timing, name) = split_timing_suffix(&normalized);
    ParsedAlt {
        order,
        timing,
        name: name.trim().to_string(),
    }
}

/// Strip a leading `<digits>[.][whitespace]` prefix, returning the parsed
/// order and the remainder. No digits → order 0 and the input untouched.
fn split_order_prefix(raw: &str) -> (u32, &str) {
    let digits_end = raw
        .as_bytes()
        .iter()
        .take_while(|b| b.is_ascii_digit())
        .count();
    if digits_end == 0 {
        return (0, raw);
    }

    // A run long enough to overflow still sorts after everything sane.
    let order = raw[..digits_end].parse::<u32>().unwrap_or(u32::MAX);

    let mut rest = &raw[digits_end..];
    if let Some(stripped) = rest.strip_prefix('.') {
        rest = stripped;
    }
    (order, rest.trim_start())
}

/// End-anchored timing detection. Returns the timing and the string with the
/// matched trailing span removed (untouched when nothing matched).
fn split_timing_suffix(s: &str) -> (Timing, &str) {
    // Walk backward: trailing whitespace, then an optional `.ext` token,
    // then the timing word itself.
    let content = s.trim_end();
    let word_end = strip_extension(content);
    let head = &content[..word_end];

    for (word, timing) in [("before", Timing::Before), ("after", Timing::After)] {
        if !ends_with_ignore_ascii_case(head, word) {
            continue;
        }
        let word_start = head.len() - word.len();
        // The word must begin the string or follow whitespace.
        let boundary = head[..word_start]
            .chars()
            .next_back()
            .is_none_or(char::is_whitespace);
        if boundary {
            return (timing, &s[..word_start]);
        }
    }
    (Timing::Standalone, s)
}

/// If `content` ends with `.<alphanumeric token>`, return the index just
/// before the `.`; otherwise return `content.len()`.
fn strip_extension(content: &str) -> usize {
    let bytes = content.as_bytes();
    let mut i = content.len();
    while i > 0 && bytes[i - 1].is_ascii_alphanumeric() {
        i -= 1;
    }
    if i < content.len() && i > 0 && bytes[i - 1] == b'.' {
        i - 1
    } else {
        content.len()
    }
}

fn ends_with_ignore_ascii_case(s: &str, suffix: &str) -> bool {
    let Some(start) = s.len().checked_sub(suffix.len()) else {
        return false;
    };
    // Not a char boundary means a multibyte char overlaps the suffix span,
    // which cannot be an ASCII timing word.
    s.is_char_boundary(start) && s[start..].eq_ignore_ascii_case(suffix)
}

#[cfg(test)]
mod tests {
    use super::*;

    // =========================================================================
    // Order prefix
    // =========================================================================

    #[test]
    fn dot_prefix_sets_order_and_strips() {
        let p = parse_alt("1. Feature");
        assert_eq!(p.order, 1);
        assert_eq!(p.name, "Feature");
        assert_eq!(p.timing, Timing::Standalone);
    }

    #[test]
    fn space_prefix_sets_order_and_strips() {
        let p = parse_alt("12 Feature");
        assert_eq!(p.order, 12);
        assert_eq!(p.name, "Feature");
    }

    #[test]
    fn bare_digits_prefix() {
        let p = parse_alt("3Settings");
        assert_eq!(p.order, 3);
        assert_eq!(p.name, "Settings");
    }

    #[test]
    fn no_digits_means_order_zero() {
        let p = parse_alt("Overview page");
        assert_eq!(p.order, 0);
        assert_eq!(p.name, "Overview page");
    }

    #[test]
    fn digits_only_input() {
        let p = parse_alt("7");
        assert_eq!(p.order, 7);
        assert_eq!(p.name, "");
        assert_eq!(p.timing, Timing::Standalone);
    }

    // =========================================================================
    // Underscore normalization and timing suffix
    // =========================================================================

    #[test]
    fn underscores_become_spaces_before_timing_check() {
        let p = parse_alt("category_before");
        assert_eq!(p.timing, Timing::Before);
        assert_eq!(p.name, "category");
    }

    #[test]
    fn timing_is_case_insensitive_and_extension_tolerant() {
        let p = parse_alt("OTFB card before.png");
        assert_eq!(p.timing, Timing::Before);
        assert_eq!(p.name, "OTFB card");

        let p = parse_alt("OTFB card after.JPG");
        assert_eq!(p.timing, Timing::After);
        assert_eq!(p.name, "OTFB card");
    }

    #[test]
    fn uppercase_timing_word() {
        let p = parse_alt("card BEFORE");
        assert_eq!(p.timing, Timing::Before);
        assert_eq!(p.name, "card");
    }

    #[test]
    fn timing_word_alone_yields_empty_name() {
        let p = parse_alt("before");
        assert_eq!(p.timing, Timing::Before);
        assert_eq!(p.name, "");
    }

    #[test]
    fn timing_must_be_a_whole_word() {
        let p = parse_alt("xbefore.png");
        assert_eq!(p.timing, Timing::Standalone);
        assert_eq!(p.name, "xbefore.png");
    }

    #[test]
    fn trailing_whitespace_after_extension_is_fine() {
        let p = parse_alt("card after.png  ");
        assert_eq!(p.timing, Timing::After);
        assert_eq!(p.name, "card");
    }

    #[test]
    fn no_timing_word_is_standalone() {
        let p = parse_alt("2. Dashboard_overview");
        assert_eq!(p.order, 2);
        assert_eq!(p.timing, Timing::Standalone);
        assert_eq!(p.name, "Dashboard overview");
    }

    #[test]
    fn full_convention_combined() {
        let p = parse_alt("1. Feature_1_before");
        assert_eq!(p.order, 1);
        assert_eq!(p.timing, Timing::Before);
        assert_eq!(p.name, "Feature 1");
    }

    #[test]
    fn extension_without_timing_word_is_kept() {
        let p = parse_alt("diagram.png");
        assert_eq!(p.timing, Timing::Standalone);
        assert_eq!(p.name, "diagram.png");
    }
}
