//! Drop-target resolution for drag gestures.
//!
//! Given the dragged node's rectangle and the rectangles of all other
//! visible nodes (supplied by the layout collaborator), classify the
//! gesture as insert-before / insert-after / become-first-child of some
//! target, or as "no target" (the caller promotes the node to top level).
//!
//! The classification is column-based: a node dragged into the visual
//! column occupied by an existing node is being reordered as that node's
//! sibling; a node dragged clear of every column is being attached beneath
//! the nearest node to its left, mirroring how left-to-right tree diagrams
//! place parents left of children. No fixed pixel thresholds are involved.

use tracing::instrument;

use crate::domain::outline::{NodeId, Outline};

/// Rendered height of one node box, shared with the layout collaborator.
pub const NODE_HEIGHT: f64 = 30.0;

const CHAR_WIDTH: f64 = 8.0;
const LABEL_PADDING: f64 = 14.0;

/// Approximate rendered width of a node box from its label.
pub fn approx_label_width(label: &str) -> f64 {
    LABEL_PADDING + CHAR_WIDTH * label.chars().count() as f64
}

/// On-screen box of one node, as produced by the layout collaborator.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NodeRect {
    pub id: NodeId,
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
}

impl NodeRect {
    pub fn new(id: NodeId, left: f64, top: f64, width: f64) -> Self {
        Self {
            id,
            left,
            top,
            width,
            height: NODE_HEIGHT,
        }
    }

    /// Box with width approximated from the node's label.
    pub fn from_label(id: NodeId, left: f64, top: f64, label: &str) -> Self {
        Self::new(id, left, top, approx_label_width(label))
    }

    pub fn right(&self) -> f64 {
        self.left + self.width
    }

    pub fn center_y(&self) -> f64 {
        self.top + self.height / 2.0
    }

    /// Horizontal ranges overlap: the candidate sits in the dragged node's
    /// column.
    fn same_column_as(&self, dragged: &NodeRect) -> bool {
        self.right() >= dragged.left && self.left <= dragged.right()
    }

    /// The candidate's right edge is strictly left of the dragged node's
    /// left edge.
    fn left_of(&self, dragged: &NodeRect) -> bool {
        self.right() < dragged.left
    }
}

/// Structural intent of a completed drag gesture.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InsertMode {
    Before,
    After,
    Child,
}

/// A resolved gesture: which node to restructure around, and how.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DropTarget {
    pub target: NodeId,
    pub mode: InsertMode,
}

/// Layout collaborator seam: assigns an on-screen box to every visible
/// node of a snapshot. The engine consumes the boxes and never computes
/// coordinates itself.
pub trait NodeLayout {
    fn layout(&self, outline: &Outline) -> Vec<NodeRect>;
}

/// Classify a drag gesture against the candidate boxes.
///
/// Same-column candidates take precedence over left-nodes; among either
/// pool the nearest vertical center wins, ties broken by the nearest left
/// edge, then by id. Candidates strictly right of the dragged span belong
/// to neither pool and are ignored. Returns `None` when no candidate
/// qualifies (drag to empty space).
#[instrument(level = "debug", skip(candidates))]
pub fn resolve_drop_target(dragged: &NodeRect, candidates: &[NodeRect]) -> Option<DropTarget> {
    let pool = || candidates.iter().filter(|c| c.id != dragged.id);

    if let Some(hit) = nearest(dragged, pool().filter(|c| c.same_column_as(dragged))) {
        // The diagram's vertical axis grows upward: a dragged box whose
        // center-y exceeds the target's sits above it.
        let mode = if dragged.center_y() > hit.center_y() {
            InsertMode::Before
        } else {
            InsertMode::After
        };
        return Some(DropTarget {
            target: hit.id,
            mode,
        });
    }

    nearest(dragged, pool().filter(|c| c.left_of(dragged))).map(|hit| DropTarget {
        target: hit.id,
        mode: InsertMode::Child,
    })
}

fn nearest<'a>(
    dragged: &NodeRect,
    pool: impl Iterator<Item = &'a NodeRect>,
) -> Option<&'a NodeRect> {
    pool.min_by(|a, b| {
        let dy_a = (dragged.center_y() - a.center_y()).abs();
        let dy_b = (dragged.center_y() - b.center_y()).abs();
        let dx_a = (dragged.left - a.left).abs();
        let dx_b = (dragged.left - b.left).abs();
        dy_a.total_cmp(&dy_b)
            .then(dx_a.total_cmp(&dx_b))
            .then(a.id.into_raw_parts().cmp(&b.id.into_raw_parts()))
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rect(slot: usize, left: f64, top: f64, width: f64) -> NodeRect {
        NodeRect::new(NodeId::from_raw_parts(slot, 0), left, top, width)
    }

    #[test]
    fn given_same_column_candidate_above_when_resolving_then_mode_is_before() {
        let dragged = rect(1, 100.0, 100.0, 80.0);
        let candidate = rect(2, 100.0, 50.0, 80.0);

        let hit = resolve_drop_target(&dragged, &[candidate]).unwrap();
        assert_eq!(hit.target, candidate.id);
        assert_eq!(hit.mode, InsertMode::Before);
    }

    #[test]
    fn given_only_left_candidate_when_resolving_then_mode_is_child() {
        let dragged = rect(1, 100.0, 100.0, 80.0);
        let candidate = rect(2, 0.0, 100.0, 80.0);

        let hit = resolve_drop_target(&dragged, &[candidate]).unwrap();
        assert_eq!(hit.target, candidate.id);
        assert_eq!(hit.mode, InsertMode::Child);
    }

    #[test]
    fn given_no_candidates_when_resolving_then_no_target() {
        let dragged = rect(1, 100.0, 100.0, 80.0);
        assert_eq!(resolve_drop_target(&dragged, &[]), None);
    }

    #[test]
    fn given_candidate_right_of_dragged_when_resolving_then_no_target() {
        let dragged = rect(1, 100.0, 100.0, 80.0);
        // Left edge past the dragged right edge: neither pool applies.
        let candidate = rect(2, 200.0, 100.0, 80.0);
        assert_eq!(resolve_drop_target(&dragged, &[candidate]), None);
    }

    #[test]
    fn given_vertical_tie_when_resolving_then_nearer_left_edge_wins() {
        let dragged = rect(1, 100.0, 100.0, 80.0);
        let far = rect(2, 160.0, 40.0, 80.0);
        let near = rect(3, 110.0, 160.0, 80.0);

        let hit = resolve_drop_target(&dragged, &[far, near]).unwrap();
        assert_eq!(hit.target, near.id);
        assert_eq!(hit.mode, InsertMode::After);
    }

    #[test]
    fn given_wider_label_when_approximating_then_width_grows() {
        assert!(approx_label_width("long node label") > approx_label_width("ok"));
    }
}
