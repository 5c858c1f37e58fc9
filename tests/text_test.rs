//! Outline notation round-trip tests

use rstest::rstest;
use treeline::{format, parse, NodeId, Outline};

const SCENARIO: &str = "Root 1
 Child 1.1
  Child 1.1.1
 Child 1.2
Root 2
";

fn id_of(outline: &Outline, text: &str) -> NodeId {
    outline
        .flattened()
        .into_iter()
        .find(|&id| outline.text(id) == Some(text))
        .expect("parsed node should exist")
}

#[test]
fn given_space_indented_text_when_parsing_then_hierarchy_matches() {
    let outline = parse(SCENARIO);

    assert_eq!(outline.len(), 5);

    let root1 = id_of(&outline, "Root 1");
    let root2 = id_of(&outline, "Root 2");
    let child11 = id_of(&outline, "Child 1.1");
    let child12 = id_of(&outline, "Child 1.2");
    let grandchild = id_of(&outline, "Child 1.1.1");

    assert_eq!(outline.children(outline.root()), vec![root1, root2]);
    assert_eq!(outline.children(root1), vec![child11, child12]);
    assert_eq!(outline.children(child11), vec![grandchild]);
    assert!(outline.children(grandchild).is_empty());
}

#[test]
fn given_parsed_scenario_when_formatting_then_line_sequence_reproduced() {
    assert_eq!(format(&parse(SCENARIO)), SCENARIO);
}

#[test]
fn given_tab_indented_text_when_parsing_then_unit_is_detected() {
    let outline = parse("Root\n\tChild\n\t\tGrandchild\n");

    let root = id_of(&outline, "Root");
    let child = id_of(&outline, "Child");
    let grandchild = id_of(&outline, "Grandchild");

    assert_eq!(outline.node(child).unwrap().parent, Some(root));
    assert_eq!(outline.node(grandchild).unwrap().parent, Some(child));
}

#[test]
fn given_tab_indented_input_when_round_tripping_then_single_space_indents() {
    let formatted = format(&parse("Root\n\tChild\n"));
    assert_eq!(formatted, "Root\n Child\n");
}

#[rstest]
#[case("A\nB\nC\n", 3)]
#[case("A\n\n\nB\n", 2)]
#[case("  \n\t\n", 0)]
#[case("", 0)]
fn given_blank_lines_when_parsing_then_skipped(#[case] input: &str, #[case] expected: usize) {
    assert_eq!(parse(input).len(), expected);
}

#[test]
fn given_empty_input_when_parsing_then_sentinel_only() {
    let outline = parse("");
    assert!(outline.is_empty());
    assert!(outline.flattened().is_empty());
    assert_eq!(format(&outline), "");
}

#[test]
fn given_indentation_jump_when_parsing_then_child_of_previous_line() {
    // Depth leaps from 0 to 3; the line still nests under the nearest
    // shallower ancestor.
    let outline = parse("Root\n   Deep\n");

    let root = id_of(&outline, "Root");
    let deep = id_of(&outline, "Deep");
    assert_eq!(outline.node(deep).unwrap().parent, Some(root));

    // Formatting re-emits the implied depth, not the original indentation.
    assert_eq!(format(&outline), "Root\n Deep\n");
}

#[test]
fn given_dedent_to_midlevel_when_parsing_then_attaches_to_correct_ancestor() {
    let outline = parse("A\n B\n  C\n D\n");

    let a = id_of(&outline, "A");
    let d = id_of(&outline, "D");
    assert_eq!(outline.node(d).unwrap().parent, Some(a));
}

#[test]
fn given_sibling_lines_when_parsing_then_orders_follow_input() {
    let outline = parse("A\nB\nC\n");
    let texts: Vec<_> = outline
        .children(outline.root())
        .into_iter()
        .map(|id| outline.text(id).unwrap_or_default().to_string())
        .collect();
    assert_eq!(texts, vec!["A", "B", "C"]);
}

#[test]
fn given_formatted_output_when_reparsing_then_structure_is_stable() {
    let outline = parse("Root\n\tChild\n\t\tGrandchild\n\tSibling\n");
    let once = format(&outline);
    let twice = format(&parse(&once));
    assert_eq!(once, twice);
}
