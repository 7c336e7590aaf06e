//! Plain-text view of a tree, one node per line

use domedit_tree::Node;
use std::fmt::Write;

/// Render `tree` as an indented outline
///
/// ```text
///   <div> #root
///     <div> #1
/// *     <h1> #2 "Welcome"
/// ```
///
/// Two spaces per level, the selected node marked with `*`, and text
/// content shown in quotes.
pub fn outline(tree: &Node, selected: Option<&str>) -> String {
    let mut out = String::new();
    write_node(&mut out, tree, 0, selected);
    out
}

fn write_node(out: &mut String, node: &Node, level: usize, selected: Option<&str>) {
    let marker = if selected.is_some_and(|id| node.id == *id) { '*' } else { ' ' };
    let _ = write!(out, "{} {:indent$}<{}> #{}", marker, "", node.tag, node.id, indent = level * 2);
    if let Some(text) = node.text_content() {
        let _ = write!(out, " {:?}", text);
    }
    out.push('\n');

    for child in &node.children {
        write_node(out, child, level + 1, selected);
    }
}
