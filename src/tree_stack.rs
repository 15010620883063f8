use tracing::instrument;

use crate::arena::{BinaryTree, Node, NodeId};

/*
Depth-first traversal with an explicit stack instead of recursion.

Each stack entry carries a `visited` flag: the first time a node is popped its
children are pushed (right before left, so left is handled first) and the node
goes back on the stack marked as visited. The second pop yields it, which gives
post-order: left subtree, right subtree, node.
 */

impl<T> BinaryTree<T> {
    /// Applies `visit` to every value reachable from the root, post-order.
    #[instrument(level = "trace", skip_all)]
    pub fn dfs<F>(&self, mut visit: F)
    where
        F: FnMut(&T),
    {
        for (_, node) in self.iter_dfs() {
            visit(node.value());
        }
    }

    pub fn iter_dfs(&self) -> PostOrderIterator<'_, T> {
        PostOrderIterator::new(self)
    }

    /// Values of all leaves reachable from the root, in post-order.
    #[instrument(level = "debug", skip(self))]
    pub fn leaf_values(&self) -> Vec<&T> {
        self.iter_dfs()
            .filter(|(_, node)| node.is_leaf())
            .map(|(_, node)| node.value())
            .collect()
    }
}

pub struct PostOrderIterator<'a, T> {
    tree: &'a BinaryTree<T>,
    stack: Vec<(NodeId, bool)>,
}

impl<'a, T> PostOrderIterator<'a, T> {
    fn new(tree: &'a BinaryTree<T>) -> Self {
        Self {
            tree,
            stack: vec![(tree.root(), false)],
        }
    }
}

impl<'a, T> Iterator for PostOrderIterator<'a, T> {
    type Item = (NodeId, &'a Node<T>);

    fn next(&mut self) -> Option<Self::Item> {
        while let Some((current_idx, visited)) = self.stack.pop() {
            if let Some(node) = self.tree.node(current_idx) {
                if visited {
                    return Some((current_idx, node));
                }
                self.stack.push((current_idx, true));
                if let Some(right) = node.right() {
                    self.stack.push((right, false));
                }
                if let Some(left) = node.left() {
                    self.stack.push((left, false));
                }
            }
        }
        None
    }
}
