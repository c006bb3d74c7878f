//! Line-indexed document operations
//!
//! Each operation takes the full document plus a line index and returns the
//! new document. An index past the end is a no-op. Nothing here fails: a
//! malformed weight reads as `1.0`, an unmatched bracket is plain text.

use crate::checklist::document;
use crate::checklist::groups;
use crate::checklist::line::{self, LineKind};
use crate::checklist::weight;

/// Switch the line at `index` between active and deactivated.
pub fn toggle_line(document: &str, index: usize) -> String {
    document::map_line(document, index, line::toggle)
}

/// Step the weight of the line at `index` by `delta`.
///
/// The `//` marker of a deactivated line and any inline comment on the line
/// are kept verbatim; only the phrase in between is rewritten. Empty lines,
/// captions and toggle comments without a body are left alone.
pub fn adjust_line_weight(document: &str, index: usize, delta: f64) -> String {
    document::map_line(document, index, |raw| adjust_line(raw, delta))
}

fn adjust_line(raw: &str, delta: f64) -> String {
    match line::classify(raw) {
        LineKind::Empty | LineKind::DescriptionComment => {
            log::debug!("no weight to adjust on {:?}", raw);
            raw.to_string()
        }
        LineKind::ToggleComment => {
            let Some((marker, body)) = line::split_toggle_marker(raw) else {
                return raw.to_string();
            };
            if body.trim().is_empty() {
                log::debug!("toggle comment {:?} has no phrase body", raw);
                return raw.to_string();
            }
            format!("{}{}", marker, adjust_phrase(body, delta))
        }
        LineKind::Phrase => adjust_phrase(raw, delta),
    }
}

/// Adjust a phrase, keeping its indentation and any inline comment.
fn adjust_phrase(text: &str, delta: f64) -> String {
    let content_start = text.len() - text.trim_start().len();
    let (indent, rest) = text.split_at(content_start);

    match line::split_inline_comment(rest) {
        Some((before, comment)) => {
            let phrase = before.trim_end();
            if phrase.is_empty() {
                return text.to_string();
            }
            let gap = &before[phrase.len()..];
            format!(
                "{}{}{}{}",
                indent,
                weight::adjust_weight(phrase, delta),
                gap,
                comment
            )
        }
        None => format!("{}{}", indent, weight::adjust_weight(rest, delta)),
    }
}

/// Human-readable phrase text.
///
/// Drops the toggle marker, every weight wrapper, the group tags and one
/// trailing comma.
pub fn display_text(raw: &str) -> String {
    let body = line::strip_toggle_marker(raw).trim();
    let unweighted = weight::strip_weight(body);
    let untagged = groups::strip_group_tags(&unweighted);
    line::strip_trailing_comma(&untagged).trim().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toggles_the_indexed_line() {
        let doc = "apple\n// banana\ncherry";
        assert_eq!(toggle_line(doc, 1), "apple\nbanana\ncherry");
        assert_eq!(toggle_line(doc, 0), "// apple\n// banana\ncherry");
        assert_eq!(toggle_line(doc, 3), doc);
    }

    #[test]
    fn adjusts_inside_toggle_comment() {
        assert_eq!(adjust_line_weight("// cat", 0, 0.1), "// (cat:1.1)");
        assert_eq!(adjust_line_weight("  //  (cat:1.2)", 0, -0.2), "  //  cat");
    }

    #[test]
    fn keeps_inline_comment_verbatim() {
        assert_eq!(
            adjust_line_weight("cat  // keep (me:1.9)", 0, 0.1),
            "(cat:1.1)  // keep (me:1.9)"
        );
    }

    #[test]
    fn empty_toggle_body_is_a_no_op() {
        assert_eq!(adjust_line_weight("//", 0, 0.1), "//");
        assert_eq!(adjust_line_weight("  //   ", 0, 0.1), "  //   ");
    }

    #[test]
    fn captions_and_blank_lines_keep_their_text() {
        let doc = "# caption\n\ncat";
        assert_eq!(adjust_line_weight(doc, 0, 0.1), doc);
        assert_eq!(adjust_line_weight(doc, 1, 0.1), doc);
        assert_eq!(adjust_line_weight(doc, 2, 0.1), "# caption\n\n(cat:1.1)");
    }

    #[test]
    fn keeps_indentation() {
        assert_eq!(adjust_line_weight("    cat,", 0, 0.5), "    (cat:1.5)");
    }

    #[test]
    fn display_text_strips_markup() {
        assert_eq!(display_text("// (cat:1.5) [Animals],"), "cat");
        assert_eq!(display_text("(a:1.2) and (b:0.8)"), "a and b");
        assert_eq!(display_text(r"\[framed\] photo [G]"), "[framed] photo");
        assert_eq!(display_text("plain"), "plain");
    }
}
