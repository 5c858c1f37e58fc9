//! Editor session: the caller-owned state handle.
//!
//! Owns the current snapshot, the selected node, and the undo history, and
//! wires the two together: every successful structural edit records the
//! pre-edit snapshot, label edits bypass history entirely. Two views over
//! one model share a reference to the same session; there is no ambient
//! singleton.

use tracing::{debug, instrument};

use crate::application::error::{ApplicationError, ApplicationResult};
use crate::config::Settings;
use crate::domain::drop::{resolve_drop_target, DropTarget, InsertMode, NodeRect};
use crate::domain::{EditResult, History, NodeId, Outline};
use crate::infrastructure::OutlineStore;

pub struct EditorSession {
    outline: Outline,
    selected: Option<NodeId>,
    history: History,
}

impl Default for EditorSession {
    fn default() -> Self {
        Self::new()
    }
}

impl EditorSession {
    /// Empty forest, history capacity from default settings.
    pub fn new() -> Self {
        Self::with_settings(Outline::new(), &Settings::default())
    }

    pub fn with_settings(outline: Outline, settings: &Settings) -> Self {
        Self::with_capacity(outline, settings.history_capacity)
    }

    pub fn with_capacity(outline: Outline, capacity: usize) -> Self {
        Self {
            outline,
            selected: None,
            history: History::new(capacity),
        }
    }

    /// The current snapshot.
    pub fn outline(&self) -> &Outline {
        &self.outline
    }

    /// Currently selected node, if any.
    pub fn selected(&self) -> Option<NodeId> {
        self.selected
    }

    /// Select a node; ids absent from the current snapshot clear the
    /// selection.
    pub fn select(&mut self, id: Option<NodeId>) {
        self.selected = id.filter(|&id| self.outline.contains(id));
    }

    // ----- structural edits (history-captured) -----

    pub fn indent(&mut self, id: NodeId) -> ApplicationResult<()> {
        self.structural(|o| o.indent(id))
    }

    pub fn outdent(&mut self, id: NodeId) -> ApplicationResult<()> {
        self.structural(|o| o.outdent(id))
    }

    pub fn delete(&mut self, id: NodeId) -> ApplicationResult<()> {
        self.structural(|o| o.delete(id))
    }

    pub fn move_node(
        &mut self,
        id: NodeId,
        new_parent: NodeId,
        insert_order: Option<f64>,
    ) -> ApplicationResult<()> {
        self.structural(|o| o.move_node(id, new_parent, insert_order))
    }

    pub fn move_before(&mut self, id: NodeId, target: NodeId) -> ApplicationResult<()> {
        self.structural(|o| o.move_before(id, target))
    }

    pub fn move_after(&mut self, id: NodeId, target: NodeId) -> ApplicationResult<()> {
        self.structural(|o| o.move_after(id, target))
    }

    pub fn move_as_first_child(&mut self, id: NodeId, target: NodeId) -> ApplicationResult<()> {
        self.structural(|o| o.move_as_first_child(id, target))
    }

    /// Insert a sibling after `after` and select it. Unknown anchors append
    /// at top level rather than failing.
    #[instrument(level = "debug", skip(self, text))]
    pub fn insert_after(&mut self, after: NodeId, text: impl Into<String>) -> NodeId {
        let (next, id) = self.outline.insert_after(after, text);
        self.history.record(self.outline.clone());
        self.adopt(next);
        self.selected = Some(id);
        id
    }

    /// Append a child under `parent` and select it.
    #[instrument(level = "debug", skip(self, text))]
    pub fn append_child(
        &mut self,
        parent: NodeId,
        text: impl Into<String>,
    ) -> ApplicationResult<NodeId> {
        let (next, id) = self.outline.append_child(parent, text)?;
        self.history.record(self.outline.clone());
        self.adopt(next);
        self.selected = Some(id);
        Ok(id)
    }

    /// Label-only edit; never enters history.
    pub fn set_text(&mut self, id: NodeId, text: impl Into<String>) -> ApplicationResult<()> {
        let next = self.outline.set_text(id, text)?;
        self.adopt(next);
        Ok(())
    }

    // ----- drag gestures -----

    /// Classify a drag gesture against the layout collaborator's boxes.
    pub fn resolve_drop(&self, dragged: &NodeRect, candidates: &[NodeRect]) -> Option<DropTarget> {
        resolve_drop_target(dragged, candidates)
    }

    /// Apply a resolved gesture to `id`. "No target" promotes the node to
    /// top level, appended last.
    #[instrument(level = "debug", skip(self))]
    pub fn apply_drop(&mut self, id: NodeId, drop: Option<DropTarget>) -> ApplicationResult<()> {
        match drop {
            Some(DropTarget {
                target,
                mode: InsertMode::Before,
            }) => self.move_before(id, target),
            Some(DropTarget {
                target,
                mode: InsertMode::After,
            }) => self.move_after(id, target),
            Some(DropTarget {
                target,
                mode: InsertMode::Child,
            }) => self.move_as_first_child(id, target),
            None => {
                let root = self.outline.root();
                self.move_node(id, root, None)
            }
        }
    }

    // ----- history -----

    pub fn can_undo(&self) -> bool {
        self.history.can_undo()
    }

    pub fn can_redo(&self) -> bool {
        self.history.can_redo()
    }

    /// Step back one structural edit. Returns false when history is empty.
    pub fn undo(&mut self) -> bool {
        match self.history.undo(self.outline.clone()) {
            Some(snapshot) => {
                self.adopt(snapshot);
                true
            }
            None => false,
        }
    }

    /// Step forward again. Returns false when there is nothing to redo.
    pub fn redo(&mut self) -> bool {
        match self.history.redo(self.outline.clone()) {
            Some(snapshot) => {
                self.adopt(snapshot);
                true
            }
            None => false,
        }
    }

    // ----- persistence -----

    /// Replace the session contents from a store. History is discarded;
    /// returns false when the store holds nothing yet.
    pub fn load_from(&mut self, store: &dyn OutlineStore) -> ApplicationResult<bool> {
        let loaded = store.load().map_err(|e| ApplicationError::Store {
            context: "load outline".to_string(),
            source: e,
        })?;
        match loaded {
            Some(outline) => {
                debug!("loaded {} nodes", outline.len());
                self.history = History::new(self.history.capacity());
                self.adopt(outline);
                Ok(true)
            }
            None => Ok(false),
        }
    }

    pub fn save_to(&self, store: &dyn OutlineStore) -> ApplicationResult<()> {
        store.save(&self.outline).map_err(|e| ApplicationError::Store {
            context: "save outline".to_string(),
            source: e,
        })
    }

    /// Run one structural edit: capture history only when it succeeds.
    fn structural<F>(&mut self, edit: F) -> ApplicationResult<()>
    where
        F: FnOnce(&Outline) -> EditResult<Outline>,
    {
        let next = edit(&self.outline)?;
        self.history.record(self.outline.clone());
        self.adopt(next);
        Ok(())
    }

    /// Adopt a snapshot as current, dropping a selection that no longer
    /// resolves in it.
    fn adopt(&mut self, next: Outline) {
        if let Some(id) = self.selected {
            if !next.contains(id) {
                self.selected = None;
            }
        }
        self.outline = next;
    }
}
