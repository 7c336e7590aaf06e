//! Starter page shown in a fresh editor

use domedit_tree::{Node, Tree, TEXT_CONTENT_ATTR};

/// Centered welcome card plus a button row
pub fn starter_tree() -> Tree {
    let heading = Node::new("2", "h1")
        .with_attr(TEXT_CONTENT_ATTR, "Welcome to the Editor")
        .with_style("color", "#FFFFFF")
        .with_style("fontSize", "2rem")
        .with_style("fontWeight", "bold")
        .with_style("textAlign", "center")
        .with_style("padding", "1rem");

    let intro = Node::new("3", "p")
        .with_attr(
            TEXT_CONTENT_ATTR,
            "Select an element on the left to start editing its styles.",
        )
        .with_style("color", "#A0AEC0")
        .with_style("textAlign", "center")
        .with_style("marginTop", "0.5rem");

    let card = Node::new("1", "div")
        .with_child(heading)
        .with_child(intro)
        .with_style("padding", "2rem")
        .with_style("backgroundColor", "rgba(31, 41, 55, 1)")
        .with_style("borderRadius", "0.5rem")
        .with_style("margin", "2rem");

    let button = Node::new("5", "button")
        .with_attr(TEXT_CONTENT_ATTR, "Click Me!")
        .with_style("backgroundColor", "#4F46E5")
        .with_style("color", "white")
        .with_style("padding", "0.75rem 1.5rem")
        .with_style("borderRadius", "0.375rem")
        .with_style("border", "none")
        .with_style("cursor", "pointer");

    let actions = Node::new("4", "div")
        .with_child(button)
        .with_style("display", "flex")
        .with_style("justifyContent", "center")
        .with_style("padding", "1rem");

    Node::root("div")
        .with_child(card)
        .with_child(actions)
        .with_style("fontFamily", "sans-serif")
        .with_style("backgroundColor", "#111827")
        .with_style("minHeight", "100vh")
        .with_style("padding", "2rem")
        .with_style("display", "flex")
        .with_style("flexDirection", "column")
        .with_style("alignItems", "center")
        .into_tree()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_starter_shape() {
        let tree = starter_tree();
        let ids: Vec<_> = tree.ids().iter().map(|id| id.to_string()).collect();

        assert_eq!(ids, vec!["root", "1", "2", "3", "4", "5"]);
        assert_eq!(tree.children[1].children[0].text_content(), Some("Click Me!"));
    }

    #[test]
    fn test_starter_ids_unique() {
        let tree = starter_tree();
        let unique: HashSet<_> = tree.ids().into_iter().collect();
        assert_eq!(unique.len(), tree.node_count());
    }
}
