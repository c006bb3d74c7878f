//! Group tag parsing
//!
//! Tags are `[...]` spans whose interior holds no `]`. The escapes `\[` and
//! `\]` are masked with private-use sentinels before matching so they never
//! delimit a tag, and come back as literal brackets afterwards.

use crate::checklist::document;
use crate::checklist::line;
use once_cell::sync::Lazy;
use regex::Regex;
use std::collections::BTreeSet;

const ESCAPED_OPEN: &str = "\\[";
const ESCAPED_CLOSE: &str = "\\]";
const OPEN_SENTINEL: &str = "\u{E000}";
const CLOSE_SENTINEL: &str = "\u{E001}";

static TAG_REGEX: Lazy<Regex> = Lazy::new(|| Regex::new(r"\[([^\]]+)\]").unwrap());

/// A tag together with one space in front of it, for display stripping
static SPACED_TAG_REGEX: Lazy<Regex> = Lazy::new(|| Regex::new(r" ?\[[^\]]+\]").unwrap());

fn mask_escapes(text: &str) -> String {
    text.replace(ESCAPED_OPEN, OPEN_SENTINEL)
        .replace(ESCAPED_CLOSE, CLOSE_SENTINEL)
}

fn restore_literals(text: &str) -> String {
    text.replace(OPEN_SENTINEL, "[").replace(CLOSE_SENTINEL, "]")
}

/// Group names tagged on a line, left to right. Duplicates are kept.
pub fn extract_group_tags(line: &str) -> Vec<String> {
    let masked = mask_escapes(line);
    TAG_REGEX
        .captures_iter(&masked)
        .map(|caps| restore_literals(&caps[1]))
        .collect()
}

/// Whether `name` is among the tags of `line`. Names are case-sensitive.
pub fn has_group_tag(line: &str, name: &str) -> bool {
    extract_group_tags(line).iter().any(|tag| tag == name)
}

/// The line without its tags, with escaped brackets shown as literal ones.
pub fn strip_group_tags(line: &str) -> String {
    let masked = mask_escapes(line);
    let stripped = SPACED_TAG_REGEX.replace_all(&masked, "");
    restore_literals(&stripped).trim().to_string()
}

/// Every group name in the document, deduplicated and sorted.
///
/// Captions are skipped; toggle comments count, so a group whose lines are
/// all switched off is still listed.
pub fn collect_all_groups(document: &str) -> Vec<String> {
    document::lines(document)
        .into_iter()
        .filter(|l| line::classify(l).carries_phrase())
        .flat_map(extract_group_tags)
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect()
}
