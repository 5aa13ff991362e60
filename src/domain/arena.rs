//! Arena-backed sitemap tree with stable node handles.

use std::fmt;

use generational_arena::{Arena, Index};
use tracing::instrument;

use crate::domain::error::DomainError;
use crate::domain::node::{NodeKind, NodeRef, SiteNode};

/// Data payload for tree nodes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NodeData {
    /// Display label
    pub name: String,
    /// Categorical tag, advisory only
    pub kind: NodeKind,
}

impl fmt::Display for NodeData {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} [{}]", self.name, self.kind)
    }
}

/// Tree node in the arena-based hierarchy structure.
#[derive(Debug, Clone)]
pub struct TreeNode {
    /// Label and kind for this node
    pub data: NodeData,
    /// Index of parent node in the arena, None for the root
    pub parent: Option<Index>,
    /// Indices of child nodes, in original child-array order
    pub children: Vec<Index>,
}

/// Arena-based sitemap tree.
///
/// Node identity is the arena `Index` assigned at construction time. Edits are
/// copy-on-write: `rename`/`rename_first` clone the whole arena, mutate the
/// clone and return it, so a caller holding the previous tree never observes a
/// mutation in place. Indices carry over to the clone unchanged, which keeps
/// handles resolved against one snapshot valid in trees derived from it.
#[derive(Debug, Clone)]
pub struct SiteTree {
    /// Arena storage for all tree nodes
    arena: Arena<TreeNode>,
    /// Index of the root node, None for empty trees
    root: Option<Index>,
}

impl Default for SiteTree {
    fn default() -> Self {
        Self::new()
    }
}

impl SiteTree {
    pub fn new() -> Self {
        Self {
            arena: Arena::new(),
            root: None,
        }
    }

    /// Build a tree wholesale from a wire-shape root, preserving child order.
    #[instrument(level = "debug", skip(node))]
    pub fn from_node(node: &SiteNode) -> Self {
        let mut tree = Self::new();
        tree.insert_subtree(node, None);
        tree
    }

    fn insert_subtree(&mut self, node: &SiteNode, parent: Option<Index>) -> Index {
        let idx = self.insert_node(
            NodeData {
                name: node.name.clone(),
                kind: node.kind,
            },
            parent,
        );
        for child in &node.children {
            self.insert_subtree(child, Some(idx));
        }
        idx
    }

    /// Project the tree back into the wire shape. None for an empty tree.
    pub fn to_node(&self) -> Option<SiteNode> {
        self.root.map(|root| self.subtree_to_node(root))
    }

    fn subtree_to_node(&self, idx: Index) -> SiteNode {
        let node = &self.arena[idx];
        SiteNode {
            name: node.data.name.clone(),
            kind: node.data.kind,
            children: node
                .children
                .iter()
                .map(|&child| self.subtree_to_node(child))
                .collect(),
        }
    }

    #[instrument(level = "trace", skip(self))]
    pub fn insert_node(&mut self, data: NodeData, parent: Option<Index>) -> Index {
        let node = TreeNode {
            data,
            parent,
            children: Vec::new(),
        };
        let node_idx = self.arena.insert(node);

        if let Some(parent_idx) = parent {
            if let Some(parent) = self.arena.get_mut(parent_idx) {
                parent.children.push(node_idx);
            }
        } else {
            self.root = Some(node_idx);
        }

        node_idx
    }

    pub fn get_node(&self, idx: Index) -> Option<&TreeNode> {
        self.arena.get(idx)
    }

    pub fn get_node_mut(&mut self, idx: Index) -> Option<&mut TreeNode> {
        self.arena.get_mut(idx)
    }

    pub fn root(&self) -> Option<Index> {
        self.root
    }

    pub fn len(&self) -> usize {
        self.arena.len()
    }

    pub fn is_empty(&self) -> bool {
        self.arena.is_empty()
    }

    /// Pre-order iterator: node before children, children in array order.
    pub fn iter(&self) -> TreeIterator<'_> {
        TreeIterator::new(self)
    }

    /// Post-order iterator: children before node.
    pub fn iter_postorder(&self) -> PostOrderIterator<'_> {
        PostOrderIterator::new(self)
    }

    /// Length of the longest root-to-leaf path, in edges (root depth = 0).
    #[instrument(level = "debug", skip(self))]
    pub fn max_depth(&self) -> usize {
        if let Some(root) = self.root {
            self.calculate_depth(root)
        } else {
            0
        }
    }

    fn calculate_depth(&self, node_idx: Index) -> usize {
        match self.get_node(node_idx) {
            Some(node) if !node.children.is_empty() => {
                1 + node
                    .children
                    .iter()
                    .map(|&child| self.calculate_depth(child))
                    .max()
                    .unwrap_or(0)
            }
            _ => 0,
        }
    }

    /// Number of edges from the root to the given node.
    pub fn depth_of(&self, idx: Index) -> Option<usize> {
        let mut depth = 0;
        let mut current = self.get_node(idx)?;
        while let Some(parent_idx) = current.parent {
            current = self.get_node(parent_idx)?;
            depth += 1;
        }
        Some(depth)
    }

    /// Leaf indices in pre-order. A node with no children is always a leaf,
    /// including a childless root.
    pub fn leaves(&self) -> Vec<Index> {
        self.iter()
            .filter(|(_, node)| node.children.is_empty())
            .map(|(idx, _)| idx)
            .collect()
    }

    pub fn leaf_count(&self) -> usize {
        self.iter()
            .filter(|(_, node)| node.children.is_empty())
            .count()
    }

    /// First pre-order node whose (name, kind) equals the target.
    pub fn find_first(&self, target: &NodeRef) -> Option<Index> {
        self.iter()
            .find(|(_, node)| node.data.name == target.name && node.data.kind == target.kind)
            .map(|(idx, _)| idx)
    }

    /// Rename the node with the given stable handle, copy-on-write.
    ///
    /// Returns the new tree; `self` is left untouched. A stale or foreign
    /// index is an error.
    #[instrument(level = "debug", skip(self, new_name))]
    pub fn rename(&self, idx: Index, new_name: impl Into<String>) -> Result<Self, DomainError> {
        let mut next = self.clone();
        match next.get_node_mut(idx) {
            Some(node) => {
                node.data.name = new_name.into();
                Ok(next)
            }
            None => Err(DomainError::NodeNotFound(idx)),
        }
    }

    /// Legacy identity-based rename, copy-on-write.
    ///
    /// The first pre-order node matching (target.name, target.kind) gets the
    /// new name; later duplicates are left untouched. A miss is not an error:
    /// the clone is returned unchanged.
    #[instrument(level = "debug", skip(self, new_name))]
    pub fn rename_first(&self, target: &NodeRef, new_name: impl Into<String>) -> Self {
        let mut next = self.clone();
        if let Some(idx) = next.find_first(target) {
            if let Some(node) = next.get_node_mut(idx) {
                node.data.name = new_name.into();
            }
        }
        next
    }
}

pub struct TreeIterator<'a> {
    tree: &'a SiteTree,
    stack: Vec<Index>,
}

impl<'a> TreeIterator<'a> {
    fn new(tree: &'a SiteTree) -> Self {
        let mut stack = Vec::new();
        if let Some(root) = tree.root() {
            stack.push(root);
        }
        Self { tree, stack }
    }
}

impl<'a> Iterator for TreeIterator<'a> {
    type Item = (Index, &'a TreeNode);

    fn next(&mut self) -> Option<Self::Item> {
        if let Some(current_idx) = self.stack.pop() {
            if let Some(node) = self.tree.get_node(current_idx) {
                // Push children in reverse order for left-to-right traversal
                for &child in node.children.iter().rev() {
                    self.stack.push(child);
                }
                return Some((current_idx, node));
            }
        }
        None
    }
}

pub struct PostOrderIterator<'a> {
    tree: &'a SiteTree,
    stack: Vec<(Index, bool)>,
}

impl<'a> PostOrderIterator<'a> {
    fn new(tree: &'a SiteTree) -> Self {
        let mut stack = Vec::new();
        if let Some(root) = tree.root() {
            stack.push((root, false));
        }
        Self { tree, stack }
    }
}

impl<'a> Iterator for PostOrderIterator<'a> {
    type Item = (Index, &'a TreeNode);

    fn next(&mut self) -> Option<Self::Item> {
        while let Some((current_idx, visited)) = self.stack.pop() {
            if let Some(node) = self.tree.get_node(current_idx) {
                if !visited {
                    self.stack.push((current_idx, true));
                    for &child in node.children.iter().rev() {
                        self.stack.push((child, false));
                    }
                } else {
                    return Some((current_idx, node));
                }
            }
        }
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::node::SiteNode;

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
    fn given_wire_node_when_building_tree_then_round_trips_with_order_preserved() {
        let node = sample();
        let tree = SiteTree::from_node(&node);
        assert_eq!(tree.len(), 4);
        assert_eq!(tree.to_node().unwrap(), node);
    }

    #[test]
    fn given_tree_when_iterating_preorder_then_visits_parent_before_children() {
        let tree = SiteTree::from_node(&sample());
        let names: Vec<&str> = tree.iter().map(|(_, n)| n.data.name.as_str()).collect();
        assert_eq!(names, vec!["Home", "About", "Products", "Item"]);
    }

    #[test]
    fn given_tree_when_iterating_postorder_then_visits_children_before_parent() {
        let tree = SiteTree::from_node(&sample());
        let names: Vec<&str> = tree
            .iter_postorder()
            .map(|(_, n)| n.data.name.as_str())
            .collect();
        assert_eq!(names, vec!["About", "Item", "Products", "Home"]);
    }

    #[test]
    fn given_single_node_when_measuring_then_one_leaf_at_depth_zero() {
        let tree = SiteTree::from_node(&SiteNode::leaf("Home", NodeKind::Page));
        assert_eq!(tree.leaf_count(), 1);
        assert_eq!(tree.max_depth(), 0);
        assert_eq!(tree.depth_of(tree.root().unwrap()), Some(0));
    }
}
