//! PR title draft formatting.
//!
//! Turns a free-text draft into the canonical bracketed form:
//!
//! - `"mb 80 fix the sidebar"` → `"[MB-80] Fix the sidebar"`
//! - `"MB-95-preferred-times/remove-minimum-constraint"` → `"[MB-95] Remove minimum constraint"`
//! - `"no ticket tweak copy"` → `"[no-ticket] Tweak copy"`
//! - `"mb 80 part 2 fix the sidebar"` → `"[MB-80] [PART-2] Fix the sidebar"`
//!
//! Input is either a branch-style slug (`ABC-123-feature-words` or
//! `ABC-123-branch/feature-words`) or plain words. Slug shapes are tried
//! first; otherwise the draft splits on whitespace. The first two words
//! become the ticket id, a trailing `part <n>` pair (the last occurrence)
//! becomes a `[PART-n]` suffix, and whatever remains is the feature name
//! with only its first character uppercased — internal capitalization is
//! preserved verbatim.
//!
//! This is a total function: it never fails, and returns an empty string
//! only when the input is empty after trimming.

/// Format a free-text title draft. Returns `""` for blank input.
pub fn format_title(raw: &str) -> String {
    let trimmed = raw.trim();
    let mut words = split_words(trimmed);
    if words.is_empty() {
        return String::new();
    }

    let ticket = resolve_ticket_id(&mut words);
    if words.is_empty() {
        return ticket;
    }

    let part = extract_part_suffix(&mut words);
    let feature = capitalize_first(&words.join(" "));

    match part {
        Some(part) if feature.is_empty() => format!("{ticket} {part}"),
        Some(part) => format!("{ticket} {part} {feature}"),
        None => format!("{ticket} {feature}"),
    }
}

/// Split a draft into logical words, recognizing branch-slug shapes first.
///
/// - slash-slug: `ABC-123[-branch-label]/rest` — label discarded, `rest`
///   exploded on `-`/`_` runs.
/// - hyphen-slug: `ABC-123-rest` — `rest` exploded the same way.
/// - otherwise: plain whitespace split.
fn split_words(trimmed: &str) -> Vec<String> {
    if let Some((prefix, number, rest)) = match_slash_slug(trimmed)
        .or_else(|| match_hyphen_slug(trimmed))
    {
        let mut words = vec![prefix.to_string(), number.to_string()];
        words.extend(explode_slug(rest));
        return words;
    }
    trimmed.split_whitespace().map(String::from).collect()
}

/// `<letters>-<digits>[-<anything-without-slash>]/<rest>`, anchored.
fn match_slash_slug(s: &str) -> Option<(&str, &str, &str)> {
    let (head, rest) = s.split_once('/')?;
    let (prefix, number, tail) = match_ticket_head(head)?;
    // After the digits, the head must end or continue with a dashed label.
    if tail.is_empty() || tail.starts_with('-') {
        Some((prefix, number, rest))
    } else {
        None
    }
}

/// `<letters>-<digits>-<rest>`, anchored, `rest` non-empty.
fn match_hyphen_slug(s: &str) -> Option<(&str, &str, &str)> {
    let (prefix, number, tail) = match_ticket_head(s)?;
    let rest = tail.strip_prefix('-')?;
    if rest.is_empty() {
        return None;
    }
    Some((prefix, number, rest))
}

/// Match `<letters>-<digits>` at the start, returning the two captures and
/// whatever follows the digits.
fn match_ticket_head(s: &str) -> Option<(&str, &str, &str)> {
    let letters_end = s
        .as_bytes()
        .iter()
        .take_while(|b| b.is_ascii_alphabetic())
        .count();
    if letters_end == 0 {
        return None;
    }
    let after_letters = &s[letters_end..];
    let digits = after_letters.strip_prefix('-')?;
    let digits_end = digits
        .as_bytes()
        .iter()
        .take_while(|b| b.is_ascii_digit())
        .count();
    if digits_end == 0 {
        return None;
    }
    Some((
        &s[..letters_end],
        &digits[..digits_end],
        &digits[digits_end..],
    ))
}

/// Explode a slug remainder into words: runs of `-`/`_` become spaces,
/// empty tokens dropped.
fn explode_slug(rest: &str) -> Vec<String> {
    rest.replace(['-', '_'], " ")
        .split_whitespace()
        .map(String::from)
        .collect()
}

/// Consume leading words into a bracketed ticket id.
fn resolve_ticket_id(words: &mut Vec<String>) -> String {
    if words.len() >= 2
        && words[0].eq_ignore_ascii_case("no")
        && words[1].eq_ignore_ascii_case("ticket")
    {
        words.drain(..2);
        return "[no-ticket]".to_string();
    }
    if words[0].eq_ignore_ascii_case("noticket") {
        words.remove(0);
        return "[no-ticket]".to_string();
    }
    if words.len() >= 2 {
        let id = format!(
            "[{}-{}]",
            words[0].to_ascii_uppercase(),
            words[1].to_ascii_uppercase()
        );
        words.drain(..2);
        return id;
    }
    let id = format!("[{}]", words[0].to_ascii_uppercase());
    words.clear();
    id
}

/// Find the last `part <digits>` pair and remove it, returning the suffix.
///
/// Scans pair positions from the end backward so `"part 1 of it part 2"`
/// yields `[PART-2]` and leaves `"part 1 of it"` intact.
fn extract_part_suffix(words: &mut Vec<String>) -> Option<String> {
    let i = (0..words.len().saturating_sub(1))
        .rev()
        .find(|&i| words[i].eq_ignore_ascii_case("part") && is_all_digits(&words[i + 1]))?;
    let suffix = format!("[PART-{}]", words[i + 1]);
    words.drain(i..i + 2);
    Some(suffix)
}

fn is_all_digits(s: &str) -> bool {
    !s.is_empty() && s.bytes().all(|b| b.is_ascii_digit())
}

/// Uppercase only the first character; everything else stays verbatim.
fn capitalize_first(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_ascii_uppercase().to_string() + chars.as_str(),
        None => String::new(),
    }
}
