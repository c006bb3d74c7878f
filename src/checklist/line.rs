//! Line Classification
//!
//! Every line of a checklist falls into exactly one [`LineKind`]. Classification
//! only looks at the trimmed start of the line, in this order:
//! 1. Empty (whitespace only)
//! 2. Description comment (`#`)
//! 3. Toggle comment (`//`)
//! 4. Phrase (anything else)

use once_cell::sync::Lazy;
use regex::Regex;
use serde::Serialize;

/// Marker that deactivates a phrase line.
pub const TOGGLE_MARKER: &str = "//";

/// Marker that turns a line into a caption.
pub const DESCRIPTION_MARKER: char = '#';

/// Leading whitespace, the toggle marker and the whitespace after it
static TOGGLE_PREFIX_REGEX: Lazy<Regex> = Lazy::new(|| Regex::new(r"^\s*//\s*").unwrap());

/// The caption marker and the whitespace after it, on a trimmed line
static DESCRIPTION_PREFIX_REGEX: Lazy<Regex> = Lazy::new(|| Regex::new(r"^#\s*").unwrap());

/// The category of a single checklist line
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum LineKind {
    /// Only whitespace
    Empty,
    /// `#` caption attached to the next phrase line
    DescriptionComment,
    /// A phrase switched off with `//`
    ToggleComment,
    /// An active phrase
    Phrase,
}

impl LineKind {
    /// Phrase and toggle comment lines are the ones that carry a phrase payload.
    pub fn carries_phrase(self) -> bool {
        matches!(self, LineKind::Phrase | LineKind::ToggleComment)
    }
}

/// Classify a raw line.
pub fn classify(line: &str) -> LineKind {
    if is_empty(line) {
        LineKind::Empty
    } else if is_description_comment(line) {
        LineKind::DescriptionComment
    } else if is_toggled(line) {
        LineKind::ToggleComment
    } else {
        LineKind::Phrase
    }
}

pub fn is_empty(line: &str) -> bool {
    line.trim().is_empty()
}

pub fn is_description_comment(line: &str) -> bool {
    line.trim_start().starts_with(DESCRIPTION_MARKER)
}

pub fn is_toggled(line: &str) -> bool {
    line.trim_start().starts_with(TOGGLE_MARKER)
}

/// Flip a line between active and deactivated.
///
/// A toggled line loses its leading whitespace, the `//` and the whitespace
/// after it. Any other line gets `// ` prepended.
pub fn toggle(line: &str) -> String {
    match split_toggle_marker(line) {
        Some((_, body)) => body.to_string(),
        None => format!("{} {}", TOGGLE_MARKER, line),
    }
}

/// Split a toggle comment into its marker prefix (including surrounding
/// whitespace) and the phrase body. Returns `None` for lines that are not
/// toggled.
pub fn split_toggle_marker(line: &str) -> Option<(&str, &str)> {
    TOGGLE_PREFIX_REGEX
        .find(line)
        .map(|m| (&line[..m.end()], &line[m.end()..]))
}

/// The line content without its toggle marker. Lines that are not toggled are
/// returned unchanged.
pub fn strip_toggle_marker(line: &str) -> &str {
    split_toggle_marker(line).map_or(line, |(_, body)| body)
}

/// Caption text of a description comment.
pub fn strip_description_marker(line: &str) -> String {
    DESCRIPTION_PREFIX_REGEX
        .replace(line.trim(), "")
        .into_owned()
}

/// Drop one cosmetic trailing comma along with the whitespace around it.
/// Text without a trailing comma is returned as is.
pub fn strip_trailing_comma(text: &str) -> &str {
    match text.trim_end().strip_suffix(',') {
        Some(rest) => rest.trim_end(),
        None => text,
    }
}

/// Split an active line at its first inline `//` comment.
///
/// Returns the text before the comment and the comment itself (starting at
/// `//`), or `None` when the line has no inline comment.
pub fn split_inline_comment(line: &str) -> Option<(&str, &str)> {
    line.find(TOGGLE_MARKER)
        .map(|pos| (&line[..pos], &line[pos..]))
}
