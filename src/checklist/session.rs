//! Editor sessions
//!
//! Transient UI state for one view of a document: edit mode, scroll position
//! and the clickable regions drawn in the last frame. The state lives here,
//! keyed by view, and is handed to drawing and hit-testing code explicitly.
//! The document text itself stays with the caller.

use crate::checklist::groups;
use crate::checklist::transform;
use std::collections::HashMap;

/// Identity of one view onto a document
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ViewId(pub u64);

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Rect {
    pub fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Left and top edges are inside, right and bottom edges are not.
    pub fn contains(&self, x: f32, y: f32) -> bool {
        x >= self.x && x < self.x + self.width && y >= self.y && y < self.y + self.height
    }
}

/// What a click on a region does
#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    ToggleLine(usize),
    AdjustWeight { index: usize, delta: f64 },
    ToggleGroup(String),
    ToggleEditing,
}

impl Action {
    /// Apply the action to the document text.
    pub fn apply(&self, document: &str) -> String {
        match self {
            Action::ToggleLine(index) => transform::toggle_line(document, *index),
            Action::AdjustWeight { index, delta } => {
                transform::adjust_line_weight(document, *index, *delta)
            }
            Action::ToggleGroup(name) => groups::toggle_group(document, name),
            Action::ToggleEditing => document.to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct HitRegion {
    pub rect: Rect,
    pub action: Action,
}

#[derive(Debug, Clone, Default)]
pub struct EditorSession {
    pub editing: bool,
    pub scroll_offset: usize,
    content_key: Option<String>,
    regions: Vec<HitRegion>,
}

impl EditorSession {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record the text being shown. A change of content resets the scroll
    /// position and drops the regions of the previous frame.
    ///
    /// Returns whether the content changed.
    pub fn sync_content(&mut self, document: &str) -> bool {
        if self.content_key.as_deref() == Some(document) {
            return false;
        }
        self.content_key = Some(document.to_string());
        self.scroll_offset = 0;
        self.regions.clear();
        true
    }

    pub fn register_region(&mut self, rect: Rect, action: Action) {
        self.regions.push(HitRegion { rect, action });
    }

    pub fn clear_regions(&mut self) {
        self.regions.clear();
    }

    pub fn regions(&self) -> &[HitRegion] {
        &self.regions
    }

    /// The action under a point. Regions registered later are drawn on top
    /// and win.
    pub fn hit_test(&self, x: f32, y: f32) -> Option<&Action> {
        self.regions
            .iter()
            .rev()
            .find(|region| region.rect.contains(x, y))
            .map(|region| &region.action)
    }

    /// Apply an action and return the new document text.
    pub fn dispatch(&mut self, action: &Action, document: &str) -> String {
        if matches!(action, Action::ToggleEditing) {
            self.editing = !self.editing;
            self.regions.clear();
        }
        let updated = action.apply(document);
        self.sync_content(&updated);
        updated
    }
}

/// Sessions of every open view
#[derive(Debug, Default)]
pub struct SessionRegistry {
    sessions: HashMap<ViewId, EditorSession>,
}

impl SessionRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get_or_create(&mut self, view: ViewId) -> &mut EditorSession {
        self.sessions.entry(view).or_default()
    }

    pub fn get(&self, view: ViewId) -> Option<&EditorSession> {
        self.sessions.get(&view)
    }

    pub fn remove(&mut self, view: ViewId) -> Option<EditorSession> {
        self.sessions.remove(&view)
    }

    pub fn len(&self) -> usize {
        self.sessions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sessions.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rect_edges() {
        let rect = Rect::new(10.0, 10.0, 20.0, 10.0);
        assert!(rect.contains(10.0, 10.0));
        assert!(rect.contains(29.9, 19.9));
        assert!(!rect.contains(30.0, 15.0));
        assert!(!rect.contains(15.0, 20.0));
    }

    #[test]
    fn topmost_region_wins() {
        let mut session = EditorSession::new();
        session.register_region(Rect::new(0.0, 0.0, 100.0, 20.0), Action::ToggleLine(0));
        session.register_region(
            Rect::new(80.0, 0.0, 20.0, 20.0),
            Action::AdjustWeight {
                index: 0,
                delta: 0.1,
            },
        );

        assert_eq!(session.hit_test(10.0, 5.0), Some(&Action::ToggleLine(0)));
        assert_eq!(
            session.hit_test(90.0, 5.0),
            Some(&Action::AdjustWeight {
                index: 0,
                delta: 0.1
            })
        );
        assert_eq!(session.hit_test(10.0, 30.0), None);
    }

    #[test]
    fn content_change_resets_scroll_and_regions() {
        let mut session = EditorSession::new();
        assert!(session.sync_content("a\nb"));
        session.scroll_offset = 3;
        session.register_region(Rect::new(0.0, 0.0, 1.0, 1.0), Action::ToggleLine(1));

        assert!(!session.sync_content("a\nb"));
        assert_eq!(session.scroll_offset, 3);
        assert_eq!(session.regions().len(), 1);

        assert!(session.sync_content("a\n// b"));
        assert_eq!(session.scroll_offset, 0);
        assert!(session.regions().is_empty());
    }

    #[test]
    fn dispatch_applies_engine_operations() {
        let mut session = EditorSession::new();
        let doc = "x [A]\n// y [A]";

        let doc = session.dispatch(&Action::ToggleGroup("A".to_string()), doc);
        assert_eq!(doc, "x [A]\ny [A]");

        let doc = session.dispatch(&Action::ToggleLine(0), &doc);
        assert_eq!(doc, "// x [A]\ny [A]");

        let unchanged = session.dispatch(&Action::ToggleEditing, &doc);
        assert_eq!(unchanged, doc);
        assert!(session.editing);
    }

    #[test]
    fn registry_keeps_sessions_apart() {
        let mut registry = SessionRegistry::new();
        registry.get_or_create(ViewId(1)).editing = true;
        registry.get_or_create(ViewId(2));

        assert_eq!(registry.len(), 2);
        assert!(registry.get(ViewId(1)).map_or(false, |s| s.editing));
        assert!(!registry.get(ViewId(2)).map_or(true, |s| s.editing));

        registry.remove(ViewId(1));
        assert!(registry.get(ViewId(1)).is_none());
    }
}
