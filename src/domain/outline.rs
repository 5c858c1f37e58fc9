//! Arena-backed outline forest.
//!
//! All nodes live in a generational arena; the arena index (slot plus
//! generation) is the node's identifier. A freed slot is only handed out
//! again under a bumped generation, so identifiers are never reused. A
//! hidden sentinel node acts as the common parent of all top-level nodes,
//! which keeps every visible node's `parent` non-`None`.

use std::collections::HashSet;

use generational_arena::{Arena, Index};
use tracing::instrument;

/// Identifier of one outline node. Stable for the node's lifetime.
pub type NodeId = Index;

/// Payload of one outline entry.
#[derive(Debug, Clone, PartialEq)]
pub struct Node {
    /// Display label. The sentinel's label is empty and never shown.
    pub text: String,
    /// Parent node, `None` only for the sentinel root.
    pub parent: Option<NodeId>,
    /// Sibling placement hint; dense integers between edits, fractional
    /// mid-splice.
    pub order: f64,
}

/// One immutable snapshot of the whole forest.
///
/// Structural edits never mutate a snapshot in place; they clone it, apply
/// the change, re-establish the invariants, and return the new value. See
/// the edit methods in `ops`.
#[derive(Debug, Clone)]
pub struct Outline {
    arena: Arena<Node>,
    root: NodeId,
}

impl Default for Outline {
    fn default() -> Self {
        Self::new()
    }
}

impl Outline {
    /// Create an empty forest containing only the sentinel root.
    pub fn new() -> Self {
        let mut arena = Arena::new();
        let root = arena.insert(Node {
            text: String::new(),
            parent: None,
            order: 0.0,
        });
        Self { arena, root }
    }

    /// The sentinel root. Hidden, never deletable.
    pub fn root(&self) -> NodeId {
        self.root
    }

    /// Number of visible nodes (the sentinel is not counted).
    pub fn len(&self) -> usize {
        self.arena.len() - 1
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn contains(&self, id: NodeId) -> bool {
        self.arena.get(id).is_some()
    }

    pub fn node(&self, id: NodeId) -> Option<&Node> {
        self.arena.get(id)
    }

    /// Label of a node, if it exists.
    pub fn text(&self, id: NodeId) -> Option<&str> {
        self.arena.get(id).map(|n| n.text.as_str())
    }

    /// Children of `parent` sorted ascending by `order`. Empty if none.
    ///
    /// Equal orders (possible mid-splice) sort stably by arena slot, so the
    /// result is deterministic.
    #[instrument(level = "trace", skip(self))]
    pub fn children(&self, parent: NodeId) -> Vec<NodeId> {
        let mut kids: Vec<(NodeId, f64)> = self
            .arena
            .iter()
            .filter(|(_, node)| node.parent == Some(parent))
            .map(|(id, node)| (id, node.order))
            .collect();
        kids.sort_by(|a, b| a.1.total_cmp(&b.1));
        kids.into_iter().map(|(id, _)| id).collect()
    }

    /// All ids transitively below `id`, excluding `id` itself.
    ///
    /// Used exclusively for cycle prevention in `move_node`.
    #[instrument(level = "trace", skip(self))]
    pub fn descendant_ids(&self, id: NodeId) -> HashSet<NodeId> {
        let mut out = HashSet::new();
        let mut stack = self.children(id);
        while let Some(current) = stack.pop() {
            if out.insert(current) {
                stack.extend(self.children(current));
            }
        }
        out
    }

    /// Depth-first pre-order over the visible forest: each parent
    /// immediately before its children, siblings in `order`.
    ///
    /// This is the canonical display order shared by the text view and
    /// line-addressed navigation.
    #[instrument(level = "trace", skip(self))]
    pub fn flattened(&self) -> Vec<NodeId> {
        let mut out = Vec::with_capacity(self.len());
        let mut stack: Vec<NodeId> = Vec::new();
        // Push children in reverse order for left-to-right traversal
        for &child in self.children(self.root).iter().rev() {
            stack.push(child);
        }
        while let Some(current) = stack.pop() {
            out.push(current);
            for &child in self.children(current).iter().rev() {
                stack.push(child);
            }
        }
        out
    }

    /// Ancestor hops to the sentinel; its direct children have depth 0.
    /// Returns 0 for an unknown id.
    pub fn depth(&self, id: NodeId) -> usize {
        let mut hops = 0usize;
        let mut current = id;
        while let Some(parent) = self.arena.get(current).and_then(|n| n.parent) {
            hops += 1;
            current = parent;
        }
        hops.saturating_sub(1)
    }

    /// Reassign `0..n-1` to the children of `parent`, preserving their
    /// relative order. Never touches other sibling groups. Unknown ids
    /// yield an unchanged copy.
    pub fn normalize_orders(&self, parent: NodeId) -> Outline {
        let mut next = self.clone();
        next.renormalize(parent);
        next
    }

    pub(crate) fn insert_raw(&mut self, node: Node) -> NodeId {
        self.arena.insert(node)
    }

    pub(crate) fn remove_raw(&mut self, id: NodeId) -> Option<Node> {
        self.arena.remove(id)
    }

    pub(crate) fn node_mut(&mut self, id: NodeId) -> Option<&mut Node> {
        self.arena.get_mut(id)
    }

    pub(crate) fn renormalize(&mut self, parent: NodeId) {
        for (i, id) in self.children(parent).into_iter().enumerate() {
            if let Some(node) = self.arena.get_mut(id) {
                node.order = i as f64;
            }
        }
    }
}
