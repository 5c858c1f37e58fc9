//! Drop-target classification tests

use treeline::{
    parse, resolve_drop_target, InsertMode, NodeId, NodeLayout, NodeRect, Outline, NODE_HEIGHT,
};

fn rect(slot: usize, left: f64, top: f64, width: f64) -> NodeRect {
    NodeRect::new(NodeId::from_raw_parts(slot, 0), left, top, width)
}

// ============================================================
// Column classification
// ============================================================

#[test]
fn given_same_column_candidate_above_dragged_then_insert_before() {
    // Dragged box at (100, 100) with right edge 180; candidate shares the
    // column and sits higher.
    let dragged = rect(1, 100.0, 100.0, 80.0);
    let candidate = rect(2, 100.0, 50.0, 80.0);

    let hit = resolve_drop_target(&dragged, &[candidate]).unwrap();
    assert_eq!(hit.target, candidate.id);
    assert_eq!(hit.mode, InsertMode::Before);
}

#[test]
fn given_same_column_candidate_below_dragged_then_insert_after() {
    let dragged = rect(1, 100.0, 100.0, 80.0);
    let candidate = rect(2, 100.0, 180.0, 80.0);

    let hit = resolve_drop_target(&dragged, &[candidate]).unwrap();
    assert_eq!(hit.mode, InsertMode::After);
}

#[test]
fn given_candidate_fully_left_of_dragged_then_become_child() {
    // Candidate right edge 80 is strictly left of the dragged left edge 100.
    let dragged = rect(1, 100.0, 100.0, 80.0);
    let candidate = rect(2, 0.0, 100.0, 80.0);

    let hit = resolve_drop_target(&dragged, &[candidate]).unwrap();
    assert_eq!(hit.target, candidate.id);
    assert_eq!(hit.mode, InsertMode::Child);
}

#[test]
fn given_both_pools_populated_then_same_column_wins() {
    let dragged = rect(1, 100.0, 100.0, 80.0);
    let left = rect(2, 0.0, 100.0, 80.0);
    let sibling = rect(3, 110.0, 300.0, 80.0);

    let hit = resolve_drop_target(&dragged, &[left, sibling]).unwrap();
    assert_eq!(hit.target, sibling.id);
    assert_eq!(hit.mode, InsertMode::After);
}

#[test]
fn given_several_same_column_candidates_then_nearest_vertical_center_wins() {
    let dragged = rect(1, 100.0, 100.0, 80.0);
    let near = rect(2, 100.0, 140.0, 80.0);
    let far = rect(3, 100.0, 400.0, 80.0);

    let hit = resolve_drop_target(&dragged, &[far, near]).unwrap();
    assert_eq!(hit.target, near.id);
}

#[test]
fn given_empty_candidate_set_then_no_target() {
    let dragged = rect(1, 100.0, 100.0, 80.0);
    assert!(resolve_drop_target(&dragged, &[]).is_none());
}

#[test]
fn given_only_candidates_right_of_dragged_then_no_target() {
    let dragged = rect(1, 100.0, 100.0, 80.0);
    let right = rect(2, 300.0, 100.0, 80.0);
    assert!(resolve_drop_target(&dragged, &[right]).is_none());
}

#[test]
fn given_dragged_rect_among_candidates_then_it_never_targets_itself() {
    let dragged = rect(1, 100.0, 100.0, 80.0);
    let other = rect(2, 100.0, 160.0, 80.0);

    let hit = resolve_drop_target(&dragged, &[dragged, other]).unwrap();
    assert_eq!(hit.target, other.id);
}

// ============================================================
// Layout collaborator seam
// ============================================================

/// Indented-column layout: x from depth, y from display order. Stands in
/// for the real diagram layout in these tests.
struct ColumnLayout {
    row_gap: f64,
    indent: f64,
}

impl NodeLayout for ColumnLayout {
    fn layout(&self, outline: &Outline) -> Vec<NodeRect> {
        outline
            .flattened()
            .into_iter()
            .enumerate()
            .map(|(row, id)| {
                NodeRect::from_label(
                    id,
                    outline.depth(id) as f64 * self.indent,
                    row as f64 * self.row_gap,
                    outline.text(id).unwrap_or_default(),
                )
            })
            .collect()
    }
}

#[test]
fn given_layout_boxes_when_dragging_over_sibling_row_then_sibling_reorder() {
    let outline = parse("Alpha\nBeta\nGamma\n");
    let layout = ColumnLayout {
        row_gap: NODE_HEIGHT + 10.0,
        indent: 160.0,
    };
    let rects = layout.layout(&outline);

    // Drag Gamma onto Alpha's row, center-y slightly past Alpha's.
    let gamma = rects[2];
    let dragged = NodeRect::new(gamma.id, rects[0].left, rects[0].top + 8.0, gamma.width);
    let candidates: Vec<NodeRect> = rects[..2].to_vec();

    let hit = resolve_drop_target(&dragged, &candidates).unwrap();
    assert_eq!(hit.target, rects[0].id);
    assert_eq!(hit.mode, InsertMode::Before);
}

#[test]
fn given_layout_boxes_when_dragging_right_of_parent_then_become_child() {
    let outline = parse("Alpha\nBeta\n");
    let layout = ColumnLayout {
        row_gap: NODE_HEIGHT + 10.0,
        indent: 160.0,
    };
    let rects = layout.layout(&outline);

    // Drag Beta into the column right of Alpha's box.
    let beta = rects[1];
    let dragged = NodeRect::new(beta.id, rects[0].right() + 20.0, rects[0].top, beta.width);
    let candidates = vec![rects[0]];

    let hit = resolve_drop_target(&dragged, &candidates).unwrap();
    assert_eq!(hit.target, rects[0].id);
    assert_eq!(hit.mode, InsertMode::Child);
}
