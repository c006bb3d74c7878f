//! Preview rendering
//!
//! Flattens the active phrases of a document into one string:
//! 1. Drop empty lines, toggle comments and captions
//! 2. Cut inline `//` comments, dropping lines left empty
//! 3. Join the rest with the separator (plus a line break when
//!    `separator_newline` is set)
//! 4. Optionally append one more separator and a final line break
//! 5. Optionally put a prefix line in front
//!
//! An empty separator concatenates phrases with nothing between them and never
//! emits a separator line break or a trailing separator.

use crate::checklist::document;
use crate::checklist::line;
use serde::Deserialize;

/// Join rules for [`render_preview`]
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct PreviewOptions {
    pub separator: String,
    /// Append `\n` to the whole output
    pub add_newline: bool,
    /// Follow every separator with `\n`
    pub separator_newline: bool,
    /// Append one separator after the last phrase
    pub trailing_separator: bool,
    /// Line emitted before the phrases
    pub prefix: Option<String>,
}

impl Default for PreviewOptions {
    fn default() -> Self {
        Self {
            separator: ", ".to_string(),
            add_newline: false,
            separator_newline: false,
            trailing_separator: false,
            prefix: None,
        }
    }
}

impl PreviewOptions {
    /// Options with the given separator and every flag off.
    pub fn with_separator(separator: impl Into<String>) -> Self {
        Self {
            separator: separator.into(),
            ..Self::default()
        }
    }

    fn effective_separator(&self) -> String {
        if self.separator_newline {
            format!("{}\n", self.separator)
        } else {
            self.separator.clone()
        }
    }
}

/// The part of a line that reaches the preview, if any.
fn preview_phrase(raw: &str) -> Option<&str> {
    let trimmed = raw.trim();
    if trimmed.is_empty()
        || trimmed.starts_with(line::TOGGLE_MARKER)
        || trimmed.starts_with(line::DESCRIPTION_MARKER)
    {
        return None;
    }

    match line::split_inline_comment(raw) {
        Some((before, _)) => {
            let kept = before.trim_end();
            (!kept.trim().is_empty()).then_some(kept)
        }
        None => Some(raw),
    }
}

pub fn render_preview(document_text: &str, options: &PreviewOptions) -> String {
    let phrases: Vec<&str> = document::lines(document_text)
        .into_iter()
        .filter_map(preview_phrase)
        .collect();

    let mut output = if options.separator.is_empty() {
        phrases.concat()
    } else {
        let separator = options.effective_separator();
        let mut joined = phrases.join(separator.as_str());
        if options.trailing_separator && !phrases.is_empty() {
            joined.push_str(&separator);
        }
        joined
    };

    if options.add_newline {
        output.push('\n');
    }

    match options.prefix.as_deref() {
        Some(prefix) if !prefix.is_empty() => format!("{}\n{}", prefix, output),
        _ => output,
    }
}
