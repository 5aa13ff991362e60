//! Tests for the sitemap layout engine's geometric contract.

use uxforge::config::{LayoutSettings, Margin};
use uxforge::domain::{NodeKind, NodeRef, SiteNode, SiteTree};
use uxforge::layout::{DisplayMode, LayoutEngine};

fn engine() -> LayoutEngine {
    LayoutEngine::new(LayoutSettings::default())
}

// Home [page]
// ├── About [page]
// └── Products [category]
//     └── Item [feature]
fn sample() -> SiteTree {
    SiteTree::from_node(&SiteNode::with_children(
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
    ))
}

/// Root with `n` leaf children.
fn wide(n: usize) -> SiteTree {
    let children = (0..n)
        .map(|i| SiteNode::leaf(format!("Leaf {i}"), NodeKind::Page))
        .collect();
    SiteTree::from_node(&SiteNode::with_children("Root", NodeKind::Page, children))
}

/// Single path of `depth` edges.
fn chain(depth: usize) -> SiteTree {
    let mut node = SiteNode::leaf("Tip", NodeKind::Feature);
    for i in (0..depth).rev() {
        node = SiteNode::with_children(format!("Level {i}"), NodeKind::Category, vec![node]);
    }
    SiteTree::from_node(&node)
}

#[test]
fn given_sample_tree_when_computing_then_one_layout_node_per_tree_node() {
    let tree = sample();
    let layout = engine().compute(&tree, DisplayMode::Normal);

    assert_eq!(layout.nodes.len(), tree.len());
    assert_eq!(layout.edges.len(), tree.len() - 1);
    let leaf_flags = layout.nodes.iter().filter(|n| n.is_leaf).count();
    assert_eq!(leaf_flags, tree.leaf_count());
}

#[test]
fn given_sample_tree_when_sizing_then_minimums_win() {
    // 2 leaves, depth 2: both raw extents fall below the floors.
    let (width, height) = engine().canvas_size(&sample());
    assert_eq!(width, 1200.0);
    assert_eq!(height, 800.0);
}

#[test]
fn given_more_leaves_when_sizing_then_height_never_shrinks() {
    let e = engine();
    let small = e.compute(&wide(5), DisplayMode::Normal);
    let large = e.compute(&wide(30), DisplayMode::Normal);

    assert!(large.height >= small.height);
    assert_eq!(small.height, 800.0);
    assert_eq!(large.height, 2400.0);
}

#[test]
fn given_deeper_tree_when_sizing_then_width_never_shrinks() {
    let e = engine();
    let shallow = e.compute(&chain(2), DisplayMode::Normal);
    let deep = e.compute(&chain(6), DisplayMode::Normal);

    assert!(deep.width >= shallow.width);
    assert_eq!(shallow.width, 1200.0);
    assert_eq!(deep.width, 2400.0);
}

#[test]
fn given_single_node_tree_when_computing_then_centered_at_margin() {
    let tree = SiteTree::from_node(&SiteNode::leaf("Home", NodeKind::Page));
    let layout = engine().compute(&tree, DisplayMode::Normal);

    assert_eq!(layout.width, 1000.0);
    assert_eq!(layout.height, 800.0);
    assert_eq!(layout.nodes.len(), 1);
    assert!(layout.edges.is_empty());

    let node = &layout.nodes[0];
    assert_eq!(node.depth, 0);
    assert!(node.is_leaf);
    assert_eq!(node.leaf_rank, Some(0));
    // Depth 0 collapses onto the left margin; the lone leaf centers vertically.
    assert_eq!(node.pos.x, 120.0);
    assert_eq!(node.pos.y, 20.0 + (800.0 - 40.0) / 2.0);
}

#[test]
fn given_empty_tree_when_computing_then_empty_layout_at_minimum_canvas() {
    let tree = SiteTree::new();
    let layout = engine().compute(&tree, DisplayMode::Normal);

    assert!(layout.nodes.is_empty());
    assert!(layout.edges.is_empty());
    assert_eq!(layout.width, 1000.0);
    assert_eq!(layout.height, 800.0);
}

#[test]
fn given_same_inputs_when_computing_twice_then_identical_geometry() {
    let tree = sample();
    let e = engine();

    let first = e.compute(&tree, DisplayMode::Expanded);
    let second = e.compute(&tree, DisplayMode::Expanded);

    assert_eq!(first, second);
}

#[test]
fn given_renamed_tree_when_computing_then_geometry_unchanged() {
    let tree = sample();
    let renamed = tree.rename_first(&NodeRef::new("Item", NodeKind::Feature), "Widget");
    let e = engine();

    let before = e.compute(&tree, DisplayMode::Normal);
    let after = e.compute(&renamed, DisplayMode::Normal);

    // Labels carry no geometric weight, and handles survive the clone.
    assert_eq!(before, after);
}

#[test]
fn given_two_leaves_when_computing_then_parent_sits_at_their_midpoint() {
    let tree = wide(2);
    let layout = engine().compute(&tree, DisplayMode::Normal);

    let root = layout.nodes.iter().find(|n| n.depth == 0).unwrap();
    let leaves: Vec<_> = layout.nodes.iter().filter(|n| n.is_leaf).collect();
    assert_eq!(leaves.len(), 2);
    assert_eq!(root.pos.y, (leaves[0].pos.y + leaves[1].pos.y) / 2.0);
}

#[test]
fn given_siblings_and_cousins_when_computing_then_gaps_keep_their_ratio() {
    // Root
    // ├── P: a, b   (siblings, gap 1.5)
    // └── Q: c      (cousin of b, gap 2.0)
    let tree = SiteTree::from_node(&SiteNode::with_children(
        "Root",
        NodeKind::Page,
        vec![
            SiteNode::with_children(
                "P",
                NodeKind::Category,
                vec![
                    SiteNode::leaf("a", NodeKind::Feature),
                    SiteNode::leaf("b", NodeKind::Feature),
                ],
            ),
            SiteNode::with_children(
                "Q",
                NodeKind::Category,
                vec![SiteNode::leaf("c", NodeKind::Feature)],
            ),
        ],
    ));
    let layout = engine().compute(&tree, DisplayMode::Normal);

    let mut leaf_ys: Vec<f64> = layout
        .nodes
        .iter()
        .filter(|n| n.is_leaf)
        .map(|n| n.pos.y)
        .collect();
    leaf_ys.sort_by(|x, y| x.partial_cmp(y).unwrap());
    let [ya, yb, yc] = leaf_ys[..] else {
        panic!("expected three leaves")
    };

    let sibling_gap = yb - ya;
    let cousin_gap = yc - yb;
    assert!((sibling_gap / cousin_gap - 1.5 / 2.0).abs() < 1e-9);
}

#[test]
fn given_custom_margins_when_computing_then_positions_shift_with_them() {
    let settings = LayoutSettings {
        margin: Margin {
            top: 0.0,
            right: 0.0,
            bottom: 0.0,
            left: 0.0,
        },
        ..LayoutSettings::default()
    };
    let layout = LayoutEngine::new(settings).compute(&chain(2), DisplayMode::Normal);

    let root = layout.nodes.iter().find(|n| n.depth == 0).unwrap();
    let tip = layout.nodes.iter().find(|n| n.depth == 2).unwrap();
    assert_eq!(root.pos.x, 0.0);
    assert_eq!(tip.pos.x, layout.width);
}

#[test]
fn given_edges_when_computing_then_curves_join_parent_and_child() {
    let tree = sample();
    let layout = engine().compute(&tree, DisplayMode::Normal);

    for edge in &layout.edges {
        let parent = layout.nodes.iter().find(|n| n.id == edge.parent).unwrap();
        let child = layout.nodes.iter().find(|n| n.id == edge.child).unwrap();
        assert_eq!(edge.curve.p0, parent.pos);
        assert_eq!(edge.curve.p3, child.pos);
        // Control points pinch the curve at the horizontal midpoint.
        let mid_x = (parent.pos.x + child.pos.x) / 2.0;
        assert_eq!(edge.curve.p1.x, mid_x);
        assert_eq!(edge.curve.p2.x, mid_x);
    }
}
