//! Checklist engine
//!
//! A checklist document is one string with `\n` line breaks. Each line is
//! classified on every read; nothing derived from the text is stored.
//!
//! | Marker                       | Meaning                                     |
//! |------------------------------|---------------------------------------------|
//! | leading `//` (after trim)    | deactivated phrase (toggle comment)         |
//! | leading `#` (after trim)     | caption for the next phrase line            |
//! | `[Name]`                     | line belongs to group `Name`                |
//! | `\[`, `\]`                   | literal brackets, never group delimiters    |
//! | `(body:weight)`              | `body` carries a non-default weight         |
//! | trailing `,`                 | cosmetic, dropped for display               |
//! | inline `//` on an active line| trailing comment, kept through weight edits |
//!
//! Layering, leaf first:
//! - [`line`]: classification and the toggle marker
//! - [`weight`]: the `(body:weight)` codec and the clamped step policy
//! - [`groups`]: tag parsing and group status aggregation
//! - [`transform`]: line-indexed document operations and display text
//! - [`preview`]: flattening active lines into one string
//! - [`document`]: split/join convention and the per-row entry view
//! - [`session`]: transient per-view editor state for presentation layers

pub mod document;
pub mod error;
pub mod groups;
pub mod line;
pub mod preview;
pub mod session;
pub mod transform;
pub mod weight;

pub use document::{entries, group_summaries, Entry, GroupSummary};
pub use error::{Error, Result};
pub use line::LineKind;
