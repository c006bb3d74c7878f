//! Document helpers and the entry view
//!
//! All document-level operations split on `\n` and join with `\n`, so a
//! document that is not edited comes back byte for byte, trailing newline
//! included.
//!
//! [`entries`] is the read model a presentation layer draws: one [`Entry`] per
//! phrase or toggle comment line, with its display text, weight, groups, and
//! the captions written above it.

use crate::checklist::groups::{self, GroupStatus};
use crate::checklist::line::{self, LineKind};
use crate::checklist::transform;
use crate::checklist::weight;
use serde::Serialize;

pub const LINE_BREAK: char = '\n';

pub fn lines(document: &str) -> Vec<&str> {
    document.split(LINE_BREAK).collect()
}

pub fn join<S: AsRef<str>>(lines: &[S]) -> String {
    lines
        .iter()
        .map(|l| l.as_ref())
        .collect::<Vec<&str>>()
        .join("\n")
}

/// Rewrite a single line of the document. An index past the last line leaves
/// the document unchanged.
pub fn map_line<F>(document: &str, index: usize, f: F) -> String
where
    F: FnOnce(&str) -> String,
{
    let mut rows: Vec<String> = lines(document).into_iter().map(str::to_string).collect();
    match rows.get_mut(index) {
        Some(target) => {
            let updated = f(target.as_str());
            *target = updated;
            join(&rows)
        }
        None => {
            log::debug!(
                "line index {} out of range (document has {} lines)",
                index,
                rows.len()
            );
            document.to_string()
        }
    }
}

/// One drawable row of the checklist
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Entry {
    /// Line index in the document, usable with the line operations
    pub index: usize,
    pub kind: LineKind,
    pub active: bool,
    /// Phrase text with markup stripped
    pub text: String,
    pub weight: f64,
    /// Empty for the default weight
    pub weight_label: String,
    pub groups: Vec<String>,
    /// Captions written above this line since the previous entry
    pub captions: Vec<String>,
}

/// The portion of a line whose weight counts: the toggle comment body, or the
/// text before an inline comment.
fn weighted_portion(raw: &str) -> &str {
    let body = line::strip_toggle_marker(raw);
    line::split_inline_comment(body).map_or(body, |(before, _)| before)
}

pub fn entries(document: &str) -> Vec<Entry> {
    let mut entries = Vec::new();
    let mut pending_captions = Vec::new();

    for (index, raw) in lines(document).into_iter().enumerate() {
        let kind = line::classify(raw);
        match kind {
            LineKind::Empty => {}
            LineKind::DescriptionComment => {
                pending_captions.push(line::strip_description_marker(raw));
            }
            LineKind::ToggleComment | LineKind::Phrase => {
                let portion = weighted_portion(raw);
                entries.push(Entry {
                    index,
                    kind,
                    active: kind == LineKind::Phrase,
                    text: transform::display_text(raw),
                    weight: weight::parse_weight(portion),
                    weight_label: weight::format_weight_label(portion),
                    groups: groups::extract_group_tags(raw),
                    captions: std::mem::take(&mut pending_captions),
                });
            }
        }
    }

    entries
}

/// A group name with its current status
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GroupSummary {
    pub name: String,
    pub status: GroupStatus,
}

/// Every group of the document in sorted order, with its status.
pub fn group_summaries(document: &str) -> Vec<GroupSummary> {
    groups::collect_all_groups(document)
        .into_iter()
        .map(|name| GroupSummary {
            status: groups::group_status(document, &name),
            name,
        })
        .collect()
}
