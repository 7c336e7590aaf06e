//! Behavioural properties of the tree engine
//!
//! This tests:
//! - Search over every id of a realistic tree
//! - No-op updates
//! - Wrap / unwrap / duplicate / delete postconditions
//! - Root protection
//! - Wrap followed by unwrap composition

use domedit_tree::*;
use std::collections::HashSet;
use std::sync::Arc;

fn page() -> Tree {
    Node::root("div")
        .with_style("display", "flex")
        .with_child(
            Node::new("1", "div")
                .with_style("padding", "2rem")
                .with_child(
                    Node::new("2", "h1")
                        .with_attr("textContent", "Welcome")
                        .with_style("color", "#FFFFFF"),
                )
                .with_child(Node::new("3", "p").with_attr("textContent", "Select an element")),
        )
        .with_child(
            Node::new("4", "div").with_child(
                Node::new("5", "button")
                    .with_attr("textContent", "Click Me!")
                    .with_style("cursor", "pointer"),
            ),
        )
        .with_child(Node::new("6", "footer"))
        .into_tree()
}

fn id_set(node: &Node) -> HashSet<NodeId> {
    node.ids().into_iter().collect()
}

/// Same shape and content, ids ignored
fn same_content(a: &Node, b: &Node) -> bool {
    a.tag == b.tag
        && a.attributes == b.attributes
        && a.styles == b.styles
        && a.children.len() == b.children.len()
        && a.children.iter().zip(&b.children).all(|(x, y)| same_content(x, y))
}

fn child_ids(node: &Node) -> Vec<&str> {
    node.children.iter().map(|c| c.id.as_str()).collect()
}

#[test]
fn test_find_node_returns_matching_id() {
    let tree = page();
    for id in tree.ids() {
        assert_eq!(find_node_by_id(&tree, id.as_str()).unwrap().id, id);
    }
    assert!(find_node_by_id(&tree, "7").is_none());
}

#[test]
fn test_find_parent_for_every_non_root_node() {
    let tree = page();
    for id in tree.ids().into_iter().filter(|id| !id.is_root()) {
        let parent = find_parent_by_id(&tree, id.as_str()).unwrap();
        assert!(parent.child_index(id.as_str()).is_some());
    }
}

#[test]
fn test_identity_update_everywhere() {
    let tree = page();
    for id in tree.ids().iter().map(NodeId::as_str).chain(["absent"]) {
        assert_eq!(update_node_in_tree(&tree, id, Node::clone), tree);
    }
}

#[test]
fn test_update_leaves_input_untouched() {
    let tree = page();
    let before = (*tree).clone();

    let _ = merge_styles(&tree, "5", [("color", "red")]);
    let _ = delete_node_in_tree(&tree, "1");
    let _ = wrap_node_in_tree(&tree, "3", "section", &mut RandomIds);

    assert_eq!(*tree, before);
}

#[test]
fn test_wrap_postconditions() {
    let tree = page();
    let mut ids = SequentialIds::new("page.html");

    let Wrapped { tree: wrapped, wrapper_id } =
        wrap_node_in_tree(&tree, "3", "section", &mut ids).unwrap();

    assert!(!id_set(&tree).contains(&wrapper_id));

    let parent = find_node_by_id(&wrapped, "1").unwrap();
    assert_eq!(child_ids(parent), vec!["2", wrapper_id.as_str()]);

    let wrapper = &parent.children[1];
    assert_eq!(wrapper.tag, "section");
    assert_eq!(wrapper.children.len(), 1);
    assert_eq!(*wrapper.children[0], *find_node_by_id(&tree, "3").unwrap());

    // Everything else is where it was
    assert_eq!(child_ids(&wrapped), child_ids(&tree));
    assert!(Arc::ptr_eq(&wrapped.children[1], &tree.children[1]));
    assert_eq!(wrapped.node_count(), tree.node_count() + 1);
}

#[test]
fn test_wrap_direct_child_of_root() {
    let tree = page();
    let wrapped = wrap_node_in_tree(&tree, "4", "main", &mut RandomIds).unwrap();

    assert_eq!(wrapped.tree.children[1].id, wrapped.wrapper_id);
    assert_eq!(wrapped.tree.children[1].children[0].id, "4");
}

#[test]
fn test_unwrap_postconditions() {
    let tree = page();
    let unwrapped = unwrap_node_in_tree(&tree, "2").unwrap();

    // Node "1" is gone, its children sit at its former index
    assert!(find_node_by_id(&unwrapped, "1").is_none());
    assert_eq!(child_ids(&unwrapped), vec!["2", "3", "4", "6"]);
    assert_eq!(*unwrapped.children[0], *tree.children[0].children[0]);
    assert_eq!(*unwrapped.children[1], *tree.children[0].children[1]);

    // The returned tree is still rooted at the root
    assert_eq!(unwrapped.id, ROOT_ID);
    assert!(find_node_by_id(&unwrapped, unwrapped.id.as_str()).is_some());
}

#[test]
fn test_unwrap_sibling_target_removes_same_parent() {
    let tree = page();
    let via_first = unwrap_node_in_tree(&tree, "2").unwrap();
    let via_second = unwrap_node_in_tree(&tree, "3").unwrap();
    assert_eq!(via_first, via_second);
}

#[test]
fn test_unwrap_errors() {
    let tree = page();

    assert_eq!(unwrap_node_in_tree(&tree, "root"), Err(TreeError::RootNode("root".into())));
    assert_eq!(unwrap_node_in_tree(&tree, "4"), Err(TreeError::ParentIsRoot("4".into())));
    assert_eq!(unwrap_node_in_tree(&tree, "zz"), Err(TreeError::NodeNotFound("zz".into())));
    assert!(unwrap_node_in_tree(&tree, "4").unwrap_err().is_not_found());
}

#[test]
fn test_wrap_then_unwrap_same_id_restores_content() {
    let tree = page();

    for id in ["2", "3", "4", "5", "6"] {
        let wrapped = wrap_node_in_tree(&tree, id, "span", &mut RandomIds).unwrap();
        let restored = unwrap_node_in_tree(&wrapped.tree, id).unwrap();

        // Unwrap removes the parent of `id`, which is exactly the wrapper
        assert_eq!(restored, tree, "wrap/unwrap of {id}");
        assert!(find_node_by_id(&restored, wrapped.wrapper_id.as_str()).is_none());
    }
}

#[test]
fn test_wrap_then_unwrap_wrapper_is_not_a_round_trip() {
    let tree = page();

    // Wrapper under "1": unwrapping the wrapper removes "1" instead
    let wrapped = wrap_node_in_tree(&tree, "3", "span", &mut RandomIds).unwrap();
    let result = unwrap_node_in_tree(&wrapped.tree, wrapped.wrapper_id.as_str()).unwrap();

    assert_ne!(result, tree);
    assert!(find_node_by_id(&result, "1").is_none());
    assert_eq!(child_ids(&result), vec!["2", wrapped.wrapper_id.as_str(), "4", "6"]);

    // Wrapper directly under the root: unwrapping it is impossible
    let wrapped = wrap_node_in_tree(&tree, "4", "span", &mut RandomIds).unwrap();
    assert_eq!(
        unwrap_node_in_tree(&wrapped.tree, wrapped.wrapper_id.as_str()),
        Err(TreeError::ParentIsRoot(wrapped.wrapper_id.to_string()))
    );
}

#[test]
fn test_duplicate_postconditions() {
    let tree = page();
    let mut ids = SequentialIds::new("page.html");

    let Duplicated { tree: copied, copy_id } = duplicate_node_in_tree(&tree, "1", &mut ids).unwrap();

    assert_eq!(child_ids(&copied), vec!["1", copy_id.as_str(), "4", "6"]);

    let original = &copied.children[0];
    let copy = &copied.children[1];
    assert_eq!(**original, *tree.children[0]);
    assert!(same_content(original, copy));

    let old_ids = id_set(&tree);
    let copy_ids = id_set(copy);
    assert_eq!(copy_ids.len(), copy.node_count());
    assert!(copy_ids.is_disjoint(&old_ids));

    // Every id in the new tree is unique
    assert_eq!(id_set(&copied).len(), copied.node_count());
}

#[test]
fn test_duplicate_last_child_appends() {
    let tree = page();
    let copied = copy_node_in_tree(&tree, "6", &mut RandomIds);

    assert_eq!(copied.children.len(), 4);
    assert_eq!(copied.children[2].id, "6");
    assert_eq!(copied.children[3].tag, "footer");
}

#[test]
fn test_duplicate_twice_stays_unique() {
    let tree = page();
    let mut ids = SequentialIds::new("page.html");

    let once = copy_node_in_tree(&tree, "4", &mut ids);
    let twice = copy_node_in_tree(&once, "4", &mut ids);

    assert_eq!(twice.node_count(), tree.node_count() + 4);
    assert_eq!(id_set(&twice).len(), twice.node_count());
}

#[test]
fn test_delete_postconditions() {
    let tree = page();
    let deleted = delete_node_in_tree(&tree, "4");

    assert!(find_node_by_id(&deleted, "4").is_none());
    assert!(find_node_by_id(&deleted, "5").is_none());
    assert_eq!(child_ids(&deleted), vec!["1", "6"]);
    assert!(Arc::ptr_eq(&deleted.children[0], &tree.children[0]));
}

#[test]
fn test_delete_nested() {
    let tree = page();
    let deleted = remove_node_in_tree(&tree, "2").unwrap();

    assert_eq!(child_ids(&deleted.children[0]), vec!["3"]);
    assert_eq!(remove_node_in_tree(&tree, "x"), Err(TreeError::NodeNotFound("x".into())));
}

#[test]
fn test_root_protection() {
    let tree = page();

    assert!(wrap_node_in_tree(&tree, "root", "div", &mut RandomIds).is_err());
    assert!(unwrap_node_in_tree(&tree, "root").is_err());
    assert_eq!(copy_node_in_tree(&tree, "root", &mut RandomIds), tree);
    assert_eq!(delete_node_in_tree(&tree, "root"), tree);
}

#[test]
fn test_root_tag_is_not_privileged() {
    let tree = Node::root("span")
        .with_child(Node::new("a", "div").with_child(Node::new("b", "div")))
        .into_tree();

    let unwrapped = unwrap_node_in_tree(&tree, "b").unwrap();
    assert_eq!(unwrapped.tag, "span");
    assert_eq!(child_ids(&unwrapped), vec!["b"]);
}
