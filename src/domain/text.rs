//! Outline text notation.
//!
//! One non-blank line per node, depth expressed by leading indentation.
//! The indentation unit (tab or space) is detected from the first indented
//! line of the input; `format` always emits a single space per depth level.
//! There is no escaping: a line is exactly one node's full text, so
//! embedded newlines are not representable.

use itertools::Itertools;
use tracing::instrument;

use crate::domain::outline::{Node, NodeId, Outline};

/// Build an outline from indentation-delimited text.
///
/// Parsing is permissive: blank lines are skipped and inconsistent
/// indentation resolves to whatever depth the detected unit implies. Empty
/// input yields the sentinel-only outline.
#[instrument(level = "debug", skip(input))]
pub fn parse(input: &str) -> Outline {
    let mut outline = Outline::new();
    let mut unit: Option<char> = None;
    // Ancestor chain: (depth, id) pairs, deepest last.
    let mut stack: Vec<(usize, NodeId)> = Vec::new();

    for raw in input.lines() {
        let text = raw.trim();
        if text.is_empty() {
            continue;
        }
        if unit.is_none() {
            if let Some(first) = raw.chars().next() {
                if first == ' ' || first == '\t' {
                    unit = Some(first);
                }
            }
        }
        let depth = match unit {
            Some(u) => raw.chars().take_while(|&ch| ch == u).count(),
            None => 0,
        };

        while stack.last().is_some_and(|&(d, _)| d >= depth) {
            stack.pop();
        }
        let parent = stack.last().map_or(outline.root(), |&(_, id)| id);
        let order = outline.children(parent).len() as f64;
        let id = outline.insert_raw(Node {
            text: text.to_string(),
            parent: Some(parent),
            order,
        });
        stack.push((depth, id));
    }

    outline
}

/// Render an outline in display order, one line per node, a single space
/// per depth level. Ends with a newline unless the outline is empty.
#[instrument(level = "debug", skip(outline))]
pub fn format(outline: &Outline) -> String {
    let ids = outline.flattened();
    if ids.is_empty() {
        return String::new();
    }
    let mut out = ids
        .iter()
        .map(|&id| {
            let indent = " ".repeat(outline.depth(id));
            format!("{}{}", indent, outline.text(id).unwrap_or_default())
        })
        .join("\n");
    out.push('\n');
    out
}
