//! Structural edits.
//!
//! Each edit takes the current snapshot by reference and returns a new one
//! (or an [`EditError`]). Fractional `order` values splice a node between
//! its new siblings; every sibling group an edit touches is renormalized to
//! dense integers before the snapshot is returned, so the ordering
//! invariants hold at every snapshot boundary.

use tracing::instrument;

use crate::domain::error::{EditError, EditResult};
use crate::domain::outline::{Node, NodeId, Outline};

impl Outline {
    /// Reparent `id` under its immediately preceding sibling, appended after
    /// that sibling's existing children.
    ///
    /// Fails with `NoEffect` when `id` is the first of its siblings (there
    /// is no previous sibling to become its parent).
    #[instrument(level = "debug", skip(self))]
    pub fn indent(&self, id: NodeId) -> EditResult<Outline> {
        let parent = self.visible_parent(id)?;
        let siblings = self.children(parent);
        let pos = siblings
            .iter()
            .position(|&s| s == id)
            .ok_or(EditError::NotFound(id))?;
        if pos == 0 {
            return Err(EditError::NoEffect);
        }
        let new_parent = siblings[pos - 1];
        let order = self.next_child_order(new_parent);

        let mut next = self.clone();
        next.reattach(id, new_parent, order)?;
        next.renormalize(parent);
        next.renormalize(new_parent);
        Ok(next)
    }

    /// Reparent `id` to its grandparent, positioned immediately after its
    /// former parent.
    ///
    /// Fails with `NoEffect` when the parent is the sentinel (already
    /// top-level).
    #[instrument(level = "debug", skip(self))]
    pub fn outdent(&self, id: NodeId) -> EditResult<Outline> {
        let parent = self.visible_parent(id)?;
        let parent_node = self.node(parent).ok_or(EditError::NotFound(parent))?;
        let Some(grandparent) = parent_node.parent else {
            return Err(EditError::NoEffect);
        };
        let order = parent_node.order + 0.5;

        let mut next = self.clone();
        next.reattach(id, grandparent, order)?;
        next.renormalize(parent);
        next.renormalize(grandparent);
        Ok(next)
    }

    /// Insert a fresh node as the sibling immediately following `after`.
    ///
    /// An unknown (or sentinel) anchor degrades to appending a top-level
    /// node instead of failing; callers that know the parent should use
    /// [`Outline::append_child`]. Returns the new snapshot and the new id.
    #[instrument(level = "debug", skip(self, text))]
    pub fn insert_after(&self, after: NodeId, text: impl Into<String>) -> (Outline, NodeId) {
        let mut next = self.clone();
        let (parent, order) = match self.node(after) {
            Some(anchor) if after != self.root() => {
                let parent = anchor.parent.unwrap_or(self.root());
                (parent, anchor.order + 0.5)
            }
            _ => (self.root(), self.next_child_order(self.root())),
        };
        let id = next.insert_raw(Node {
            text: text.into(),
            parent: Some(parent),
            order,
        });
        next.renormalize(parent);
        (next, id)
    }

    /// Append a fresh node as the last child of `parent`.
    #[instrument(level = "debug", skip(self, text))]
    pub fn append_child(
        &self,
        parent: NodeId,
        text: impl Into<String>,
    ) -> EditResult<(Outline, NodeId)> {
        if !self.contains(parent) {
            return Err(EditError::NotFound(parent));
        }
        let order = self.next_child_order(parent);
        let mut next = self.clone();
        let id = next.insert_raw(Node {
            text: text.into(),
            parent: Some(parent),
            order,
        });
        next.renormalize(parent);
        Ok((next, id))
    }

    /// Remove `id`; its direct children are promoted to the former parent,
    /// inserted contiguously where the node used to sit with their relative
    /// order retained.
    #[instrument(level = "debug", skip(self))]
    pub fn delete(&self, id: NodeId) -> EditResult<Outline> {
        let parent = self.visible_parent(id)?;
        let deleted_order = self.node(id).ok_or(EditError::NotFound(id))?.order;
        let kids = self.children(id);

        let mut next = self.clone();
        // Slot the promoted children strictly between the deleted node's
        // order and its successor's.
        let step = 1.0 / (kids.len() as f64 + 1.0);
        for (i, kid) in kids.iter().enumerate() {
            if let Some(node) = next.node_mut(*kid) {
                node.parent = Some(parent);
                node.order = deleted_order + (i as f64 + 1.0) * step;
            }
        }
        next.remove_raw(id);
        next.renormalize(parent);
        Ok(next)
    }

    /// Reparent `id` under `new_parent` with `order = insert_order` if
    /// given, else appended last.
    ///
    /// Fails with `WouldCycle` when the target equals the node or lies in
    /// its subtree.
    #[instrument(level = "debug", skip(self))]
    pub fn move_node(
        &self,
        id: NodeId,
        new_parent: NodeId,
        insert_order: Option<f64>,
    ) -> EditResult<Outline> {
        let old_parent = self.visible_parent(id)?;
        if !self.contains(new_parent) {
            return Err(EditError::NotFound(new_parent));
        }
        if id == new_parent || self.descendant_ids(id).contains(&new_parent) {
            return Err(EditError::WouldCycle {
                node: id,
                target: new_parent,
            });
        }
        let order = insert_order.unwrap_or_else(|| self.next_child_order(new_parent));

        let mut next = self.clone();
        next.reattach(id, new_parent, order)?;
        next.renormalize(old_parent);
        next.renormalize(new_parent);
        Ok(next)
    }

    /// Move `id` to the position immediately before `target`.
    pub fn move_before(&self, id: NodeId, target: NodeId) -> EditResult<Outline> {
        let (parent, order) = self.anchor(target)?;
        self.move_node(id, parent, Some(order - 0.5))
    }

    /// Move `id` to the position immediately after `target`.
    pub fn move_after(&self, id: NodeId, target: NodeId) -> EditResult<Outline> {
        let (parent, order) = self.anchor(target)?;
        self.move_node(id, parent, Some(order + 0.5))
    }

    /// Move `id` before any existing child of `target`.
    pub fn move_as_first_child(&self, id: NodeId, target: NodeId) -> EditResult<Outline> {
        self.move_node(id, target, Some(-0.5))
    }

    /// Replace a node's label. Not a structural edit: excluded from history
    /// capture by the session layer.
    #[instrument(level = "trace", skip(self, text))]
    pub fn set_text(&self, id: NodeId, text: impl Into<String>) -> EditResult<Outline> {
        self.visible_parent(id)?;
        let mut next = self.clone();
        if let Some(node) = next.node_mut(id) {
            node.text = text.into();
        }
        Ok(next)
    }

    /// Parent of a visible node; rejects the sentinel and unknown ids.
    fn visible_parent(&self, id: NodeId) -> EditResult<NodeId> {
        let node = self.node(id).ok_or(EditError::NotFound(id))?;
        node.parent.ok_or(EditError::SentinelRoot)
    }

    /// Sibling anchor for `move_before`/`move_after`: the target's parent
    /// and current order.
    fn anchor(&self, target: NodeId) -> EditResult<(NodeId, f64)> {
        let node = self.node(target).ok_or(EditError::NotFound(target))?;
        let parent = node.parent.ok_or(EditError::SentinelRoot)?;
        Ok((parent, node.order))
    }

    /// `max existing child order + 1`, or 0 for a childless parent.
    fn next_child_order(&self, parent: NodeId) -> f64 {
        self.children(parent)
            .last()
            .and_then(|&last| self.node(last))
            .map(|n| n.order + 1.0)
            .unwrap_or(0.0)
    }

    fn reattach(&mut self, id: NodeId, parent: NodeId, order: f64) -> EditResult<()> {
        let node = self.node_mut(id).ok_or(EditError::NotFound(id))?;
        node.parent = Some(parent);
        node.order = order;
        Ok(())
    }
}
