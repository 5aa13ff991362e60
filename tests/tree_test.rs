//! Tests for the arena-backed sitemap tree and its rename operations.

use uxforge::domain::{DomainError, NodeKind, NodeRef, SiteNode, SiteTree};

// Home [page]
// ├── About [page]
// └── Products [category]
//     └── Item [feature]
fn sample() -> SiteNode {
    SiteNode::with_children(
        "Home",
        NodeKind::Page,
        vec![
            SiteNode::leaf("About", NodeKind::Page),
            SiteNode::with_children(
                "Products",
                NodeKind::Category,
                vec![SiteNode::leaf("Item", NodeKind::Feature)],
            ),
        ],
    )
}

#[test]
fn given_sample_tree_when_measuring_then_two_leaves_and_depth_two() {
    let tree = SiteTree::from_node(&sample());
    assert_eq!(tree.len(), 4);
    assert_eq!(tree.leaf_count(), 2);
    assert_eq!(tree.max_depth(), 2);
}

#[test]
fn given_unique_target_when_renaming_then_only_that_node_changes() {
    let tree = SiteTree::from_node(&sample());
    let snapshot = tree.to_node().unwrap();

    let renamed = tree.rename_first(&NodeRef::new("Item", NodeKind::Feature), "Widget");

    // The original is untouched; the clone differs only in the one label.
    assert_eq!(tree.to_node().unwrap(), snapshot);
    let new_root = renamed.to_node().unwrap();
    assert_eq!(new_root.children[1].children[0].name, "Widget");
    assert_eq!(new_root.children[1].children[0].kind, NodeKind::Feature);
    assert_eq!(new_root.children[0], snapshot.children[0]);

    // Same shape, same metrics.
    assert_eq!(renamed.leaf_count(), tree.leaf_count());
    assert_eq!(renamed.max_depth(), tree.max_depth());
}

#[test]
fn given_duplicate_names_when_renaming_then_only_first_preorder_match_changes() {
    let root = SiteNode::with_children(
        "Root",
        NodeKind::Page,
        vec![
            SiteNode::leaf("A", NodeKind::Page),
            SiteNode::leaf("A", NodeKind::Page),
        ],
    );
    let tree = SiteTree::from_node(&root);

    let renamed = tree.rename_first(&NodeRef::new("A", NodeKind::Page), "B");

    let new_root = renamed.to_node().unwrap();
    assert_eq!(new_root.children[0].name, "B");
    assert_eq!(new_root.children[1].name, "A");
}

#[test]
fn given_kind_mismatch_when_renaming_then_name_alone_does_not_match() {
    let tree = SiteTree::from_node(&sample());

    // "Item" exists, but as a feature, not a page.
    let renamed = tree.rename_first(&NodeRef::new("Item", NodeKind::Page), "Widget");

    assert_eq!(renamed.to_node(), tree.to_node());
}

#[test]
fn given_missing_target_when_renaming_then_equal_tree_returned_without_error() {
    let tree = SiteTree::from_node(&sample());

    let renamed = tree.rename_first(&NodeRef::new("Nope", NodeKind::Category), "X");

    assert_eq!(renamed.to_node(), tree.to_node());
    assert_eq!(renamed.len(), tree.len());
}

#[test]
fn given_stable_handle_when_renaming_then_copy_on_write_and_handle_survives() {
    let tree = SiteTree::from_node(&sample());
    let about = tree
        .find_first(&NodeRef::new("About", NodeKind::Page))
        .unwrap();

    let renamed = tree.rename(about, "Team").unwrap();

    // The handle resolves in both snapshots, each seeing its own label.
    assert_eq!(renamed.get_node(about).unwrap().data.name, "Team");
    assert_eq!(tree.get_node(about).unwrap().data.name, "About");
}

#[test]
fn given_foreign_handle_when_renaming_then_node_not_found() {
    let big = SiteTree::from_node(&sample());
    let deep = big
        .find_first(&NodeRef::new("Item", NodeKind::Feature))
        .unwrap();

    let small = SiteTree::from_node(&SiteNode::leaf("Home", NodeKind::Page));
    let result = small.rename(deep, "X");

    assert!(matches!(result, Err(DomainError::NodeNotFound(_))));
    assert_eq!(small.len(), 1);
}
