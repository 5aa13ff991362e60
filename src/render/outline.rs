//! Terminal outline rendering via termtree.

use generational_arena::Index;
use termtree::Tree;

use crate::domain::SiteTree;

/// Conversion into a printable termtree outline.
pub trait ToOutline {
    /// None for an empty tree.
    fn to_outline(&self) -> Option<Tree<String>>;
}

impl ToOutline for SiteTree {
    fn to_outline(&self) -> Option<Tree<String>> {
        self.root().map(|root| subtree_outline(self, root))
    }
}

fn subtree_outline(tree: &SiteTree, idx: Index) -> Tree<String> {
    let (label, children) = match tree.get_node(idx) {
        Some(node) => (node.data.to_string(), node.children.as_slice()),
        None => return Tree::new(String::new()),
    };
    let leaves: Vec<_> = children
        .iter()
        .map(|&child| subtree_outline(tree, child))
        .collect();
    Tree::new(label).with_leaves(leaves)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{NodeKind, SiteNode};

    #[test]
    fn given_tree_when_rendering_outline_then_labels_carry_kind_tags() {
        let tree = SiteTree::from_node(&SiteNode::with_children(
            "Home",
            NodeKind::Page,
            vec![SiteNode::leaf("About", NodeKind::Page)],
        ));
        let rendered = tree.to_outline().unwrap().to_string();
        assert!(rendered.contains("Home [page]"));
        assert!(rendered.contains("About [page]"));
    }

    #[test]
    fn given_empty_tree_when_rendering_outline_then_none() {
        assert!(SiteTree::new().to_outline().is_none());
    }
}
