use std::collections::VecDeque;

use tracing::instrument;

use crate::arena::{BinaryTree, Node, NodeId};

impl<T> BinaryTree<T> {
    /// Applies `visit` to every value reachable from the root, level by level,
    /// left child before right child.
    #[instrument(level = "trace", skip_all)]
    pub fn bfs<F>(&self, mut visit: F)
    where
        F: FnMut(&T),
    {
        for (_, node) in self.iter_bfs() {
            visit(node.value());
        }
    }

    pub fn iter_bfs(&self) -> LevelOrderIterator<'_, T> {
        LevelOrderIterator::new(self)
    }

    /// Calculates the depth of the tree using a breadth-first traversal.
    /// Each element in the queue is a pair (node, depth).
    #[instrument(level = "debug", skip(self))]
    pub fn depth(&self) -> usize {
        let mut max_depth = 0;
        let mut queue = VecDeque::new();
        queue.push_back((self.root(), 1));

        while let Some((idx, depth)) = queue.pop_front() {
            max_depth = max_depth.max(depth);
            if let Some(node) = self.node(idx) {
                for child in node.left().into_iter().chain(node.right()) {
                    queue.push_back((child, depth + 1));
                }
            }
        }

        max_depth
    }
}

pub struct LevelOrderIterator<'a, T> {
    tree: &'a BinaryTree<T>,
    queue: VecDeque<NodeId>,
}

impl<'a, T> LevelOrderIterator<'a, T> {
    fn new(tree: &'a BinaryTree<T>) -> Self {
        Self {
            tree,
            queue: VecDeque::from([tree.root()]),
        }
    }
}

impl<'a, T> Iterator for LevelOrderIterator<'a, T> {
    type Item = (NodeId, &'a Node<T>);

    fn next(&mut self) -> Option<Self::Item> {
        while let Some(current_idx) = self.queue.pop_front() {
            if let Some(node) = self.tree.node(current_idx) {
                if let Some(left) = node.left() {
                    self.queue.push_back(left);
                }
                if let Some(right) = node.right() {
                    self.queue.push_back(right);
                }
                return Some((current_idx, node));
            }
        }
        None
    }
}
