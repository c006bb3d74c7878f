//! Group status aggregation
//!
//! The status of a group is derived from every phrase or toggle comment line
//! tagged with it:
//! - `all` when each of those lines is active
//! - `none` when none of them is (or when the group has no lines)
//! - `partial` otherwise

use crate::checklist::document;
use crate::checklist::groups::tags::has_group_tag;
use crate::checklist::line::{self, LineKind};
use serde::Serialize;
use std::fmt;

/// Activation state of a group across the document
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum GroupStatus {
    None,
    Partial,
    All,
}

impl fmt::Display for GroupStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GroupStatus::None => write!(f, "none"),
            GroupStatus::Partial => write!(f, "partial"),
            GroupStatus::All => write!(f, "all"),
        }
    }
}

/// Kind of every line tagged with `name`
fn tagged_kinds<'a>(document: &'a str, name: &'a str) -> impl Iterator<Item = LineKind> + 'a {
    document::lines(document)
        .into_iter()
        .map(|l| (line::classify(l), l))
        .filter(move |(kind, l)| kind.carries_phrase() && has_group_tag(l, name))
        .map(|(kind, _)| kind)
}

pub fn group_status(document: &str, name: &str) -> GroupStatus {
    let (total, active) = tagged_kinds(document, name)
        .fold((0usize, 0usize), |(total, active), kind| {
            (total + 1, active + usize::from(kind == LineKind::Phrase))
        });

    if total == 0 || active == 0 {
        GroupStatus::None
    } else if active == total {
        GroupStatus::All
    } else {
        GroupStatus::Partial
    }
}

/// Switch a whole group off when it is fully active, otherwise switch every
/// tagged line on.
///
/// Lines already in the target state are left untouched.
pub fn toggle_group(document: &str, name: &str) -> String {
    let status = group_status(document, name);
    let activate = status != GroupStatus::All;
    log::debug!(
        "toggling group {:?} ({}) {}",
        name,
        status,
        if activate { "on" } else { "off" }
    );

    let lines: Vec<String> = document::lines(document)
        .into_iter()
        .map(|l| {
            let kind = line::classify(l);
            if !kind.carries_phrase() || !has_group_tag(l, name) {
                return l.to_string();
            }
            match (activate, kind) {
                (true, LineKind::ToggleComment) | (false, LineKind::Phrase) => line::toggle(l),
                _ => l.to_string(),
            }
        })
        .collect();

    document::join(&lines)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_follows_tagged_lines() {
        assert_eq!(group_status("a [G]\nb [G]", "G"), GroupStatus::All);
        assert_eq!(group_status("// a [G]\n// b [G]", "G"), GroupStatus::None);
        assert_eq!(group_status("a [G]\n// b [G]", "G"), GroupStatus::Partial);
        assert_eq!(group_status("a [G]", "Missing"), GroupStatus::None);
    }

    #[test]
    fn captions_do_not_count() {
        assert_eq!(group_status("# about [G]\na [G]", "G"), GroupStatus::All);
    }

    #[test]
    fn names_are_case_sensitive() {
        assert_eq!(group_status("a [g]\n// b [G]", "G"), GroupStatus::None);
    }

    #[test]
    fn toggle_from_all_switches_everything_off() {
        let doc = "a [G]\nb [G]\nc";
        assert_eq!(toggle_group(doc, "G"), "// a [G]\n// b [G]\nc");
    }

    #[test]
    fn toggle_from_partial_switches_everything_on() {
        assert_eq!(toggle_group("x [A]\n// y [A]", "A"), "x [A]\ny [A]");
    }

    #[test]
    fn toggle_of_unknown_group_is_a_no_op() {
        let doc = "a [G]\n\n# caption";
        assert_eq!(toggle_group(doc, "H"), doc);
    }

    #[test]
    fn status_displays_lowercase() {
        assert_eq!(GroupStatus::Partial.to_string(), "partial");
    }
}
