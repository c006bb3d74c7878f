//! Groups
//!
//! A group is a `[Name]` tag shared by any number of lines. Groups have no
//! storage of their own: names and statuses are recomputed from the document
//! text on every call.

pub mod status;
pub mod tags;

pub use status::{group_status, toggle_group, GroupStatus};
pub use tags::{collect_all_groups, extract_group_tags, has_group_tag, strip_group_tags};
