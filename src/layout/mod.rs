//! Tree layout engine: projects a `SiteTree` into drawable 2-D geometry.
//!
//! Horizontal tree orientation: depth runs left-to-right, leaves stack
//! top-to-bottom in their original child-array order. Layout state is a pure
//! function of (tree, settings); it is recomputed wholesale on every change
//! rather than patched incrementally.

use std::collections::HashMap;

use generational_arena::Index;
use itertools::Itertools;
use kurbo::{CubicBez, Point};
use tracing::{debug, instrument};

use crate::config::LayoutSettings;
use crate::domain::SiteTree;

/// How the diagram is being viewed.
///
/// Never affects geometry; the SVG renderer widens its outer padding in
/// expanded mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DisplayMode {
    #[default]
    Normal,
    Expanded,
}

/// Ephemeral geometric projection of one tree node.
#[derive(Debug, Clone, PartialEq)]
pub struct LayoutNode {
    /// Stable handle of the source node
    pub id: Index,
    /// Final drawing position, margins included
    pub pos: Point,
    /// Edges from the root
    pub depth: usize,
    pub is_leaf: bool,
    /// Rank among leaves in pre-order, None for internal nodes
    pub leaf_rank: Option<usize>,
}

/// Parent→child connector with its drawable curve.
#[derive(Debug, Clone, PartialEq)]
pub struct LayoutEdge {
    pub parent: Index,
    pub child: Index,
    /// Horizontal cubic link: control points sit at the midpoint x of the
    /// two endpoints
    pub curve: CubicBez,
}

/// Drawable geometry for one tree snapshot.
#[derive(Debug, Clone, PartialEq)]
pub struct Layout {
    /// One entry per tree node, in pre-order
    pub nodes: Vec<LayoutNode>,
    /// One entry per parent→child edge
    pub edges: Vec<LayoutEdge>,
    /// Full canvas width in pixels
    pub width: f64,
    /// Full canvas height in pixels
    pub height: f64,
    /// Mode the layout was computed for
    pub mode: DisplayMode,
}

/// Stateless layout engine carrying only spacing settings.
#[derive(Debug, Clone, Default)]
pub struct LayoutEngine {
    settings: LayoutSettings,
}

impl LayoutEngine {
    pub fn new(settings: LayoutSettings) -> Self {
        Self { settings }
    }

    /// Canvas extents for a tree: leaf count drives height, depth drives
    /// width, both floored at the configured minimums.
    pub fn canvas_size(&self, tree: &SiteTree) -> (f64, f64) {
        let s = &self.settings;
        let width = s
            .min_width
            .max((tree.max_depth() + 2) as f64 * s.level_width);
        let height = s.min_height.max(tree.leaf_count() as f64 * s.row_height);
        (width, height)
    }

    /// Compute node positions, edge curves and canvas extents.
    ///
    /// Pure: the tree is not touched, and the same (tree, mode) pair always
    /// yields identical geometry. An empty tree yields an empty layout at the
    /// minimum canvas size.
    #[instrument(level = "debug", skip(self, tree))]
    pub fn compute(&self, tree: &SiteTree, mode: DisplayMode) -> Layout {
        let s = &self.settings;
        let (width, height) = self.canvas_size(tree);

        let Some(_root) = tree.root() else {
            return Layout {
                nodes: Vec::new(),
                edges: Vec::new(),
                width,
                height,
                mode,
            };
        };

        let max_depth = tree.max_depth();
        let usable_w = width - s.margin.left - s.margin.right;
        let usable_h = height - s.margin.top - s.margin.bottom;
        debug!(
            width,
            height,
            max_depth,
            leaf_count = tree.leaf_count(),
            "computing layout"
        );

        // Depth per node, derived from parent depth in pre-order.
        let mut depths: HashMap<Index, usize> = HashMap::new();
        for (idx, node) in tree.iter() {
            let d = node
                .parent
                .and_then(|p| depths.get(&p))
                .map_or(0, |pd| pd + 1);
            depths.insert(idx, d);
        }

        // Breadth slots: leaves in pre-order take increasing slot coordinates,
        // with a smaller gap between same-parent neighbors so sibling groups
        // read as clusters.
        let leaves = tree.leaves();
        let mut slots: HashMap<Index, f64> = HashMap::new();
        let mut cursor = 0.0;
        if let Some(&first) = leaves.first() {
            slots.insert(first, 0.0);
        }
        for (&a, &b) in leaves.iter().tuple_windows() {
            let same_parent = tree.get_node(a).and_then(|n| n.parent)
                == tree.get_node(b).and_then(|n| n.parent);
            cursor += if same_parent {
                s.sibling_gap
            } else {
                s.cousin_gap
            };
            slots.insert(b, cursor);
        }
        let max_slot = cursor;

        // Internal nodes sit at the midpoint of their first and last child's
        // breadth. Post-order guarantees child slots exist before the parent.
        for (idx, node) in tree.iter_postorder() {
            if let (Some(&first), Some(&last)) = (
                node.children.first().and_then(|c| slots.get(c)),
                node.children.last().and_then(|c| slots.get(c)),
            ) {
                slots.insert(idx, (first + last) / 2.0);
            }
        }

        let leaf_ranks: HashMap<Index, usize> =
            leaves.iter().enumerate().map(|(i, &idx)| (idx, i)).collect();

        let position = |idx: Index| -> Point {
            let depth = depths.get(&idx).copied().unwrap_or(0);
            let x = if max_depth == 0 {
                0.0
            } else {
                depth as f64 / max_depth as f64 * usable_w
            };
            let slot = slots.get(&idx).copied().unwrap_or(0.0);
            let y = if max_slot == 0.0 {
                // Lone leaf column: center vertically.
                usable_h / 2.0
            } else {
                slot / max_slot * usable_h
            };
            Point::new(s.margin.left + x, s.margin.top + y)
        };

        let mut nodes = Vec::with_capacity(tree.len());
        let mut edges = Vec::new();
        for (idx, node) in tree.iter() {
            let pos = position(idx);
            nodes.push(LayoutNode {
                id: idx,
                pos,
                depth: depths.get(&idx).copied().unwrap_or(0),
                is_leaf: node.children.is_empty(),
                leaf_rank: leaf_ranks.get(&idx).copied(),
            });
            if let Some(parent_idx) = node.parent {
                let p = position(parent_idx);
                let mid_x = (p.x + pos.x) / 2.0;
                edges.push(LayoutEdge {
                    parent: parent_idx,
                    child: idx,
                    curve: CubicBez::new(
                        p,
                        Point::new(mid_x, p.y),
                        Point::new(mid_x, pos.y),
                        pos,
                    ),
                });
            }
        }

        Layout {
            nodes,
            edges,
            width,
            height,
            mode,
        }
    }
}
