//! # promptlist
//!
//! An engine for prompt checklists: plain-text documents where every line is a
//! prompt phrase that can be switched on and off, weighted, and grouped under
//! `[Tag]` names for bulk toggling. The active phrases flatten into a single
//! preview string.
//!
//! The engine is a set of pure functions over document text, see the
//! [checklist module](checklist). Callers own the text: every operation takes
//! the current document and returns a new one.
//!
//! ```text
//! # soft lighting helps
//! (portrait:1.2) [Subject]
//! // watercolor [Style]
//! oil painting [Style] // try this first
//! ```

pub mod checklist;
pub mod config;

pub use checklist::groups::{collect_all_groups, group_status, toggle_group, GroupStatus};
pub use checklist::preview::{render_preview, PreviewOptions};
pub use checklist::transform::{adjust_line_weight, display_text, toggle_line};
