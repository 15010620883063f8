use generational_arena::{Arena, Index};
use std::fmt;
use tracing::{debug, instrument};

use crate::errors::{TreeError, TreeResult};

/// Stable handle to a node stored in a [`BinaryTree`].
///
/// Ids are only meaningful for the tree that created them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(Index);

impl NodeId {
    /// Arena slot of the node, stable for the lifetime of the tree.
    pub fn slot(&self) -> usize {
        self.0.into_raw_parts().0
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.slot())
    }
}

/// Tree node in the arena: a value plus parent and child links.
#[derive(Debug, Clone)]
pub struct Node<T> {
    value: T,
    /// Non-owning back-reference, None for the root and detached nodes
    parent: Option<NodeId>,
    left: Option<NodeId>,
    right: Option<NodeId>,
}

impl<T> Node<T> {
    pub fn new(value: T) -> Self {
        Self {
            value,
            parent: None,
            left: None,
            right: None,
        }
    }

    pub fn value(&self) -> &T {
        &self.value
    }

    pub fn value_mut(&mut self) -> &mut T {
        &mut self.value
    }

    pub fn set_value(&mut self, value: T) {
        self.value = value;
    }

    pub fn parent(&self) -> Option<NodeId> {
        self.parent
    }

    pub fn left(&self) -> Option<NodeId> {
        self.left
    }

    pub fn right(&self) -> Option<NodeId> {
        self.right
    }

    pub fn is_leaf(&self) -> bool {
        self.left.is_none() && self.right.is_none()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Side {
    Left,
    Right,
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Side::Left => write!(f, "left"),
            Side::Right => write!(f, "right"),
        }
    }
}

/// Arena-based binary tree.
///
/// The arena owns every node; links between nodes are [`NodeId`]s, so the
/// parent back-reference never owns anything. A tree always has a root.
/// Nodes created with [`BinaryTree::new_node`] start detached and join the
/// tree through [`BinaryTree::set_left`] / [`BinaryTree::set_right`].
#[derive(Debug, Clone)]
pub struct BinaryTree<T> {
    arena: Arena<Node<T>>,
    root: NodeId,
}

impl<T> BinaryTree<T> {
    pub fn new(root_value: T) -> Self {
        let mut arena = Arena::new();
        let root = NodeId(arena.insert(Node::new(root_value)));
        Self { arena, root }
    }

    pub fn root(&self) -> NodeId {
        self.root
    }

    pub fn root_node(&self) -> &Node<T> {
        // the root is inserted at construction and nothing is ever removed
        &self.arena[self.root.0]
    }

    /// Creates a detached node: no parent, no children.
    #[instrument(level = "trace", skip_all)]
    pub fn new_node(&mut self, value: T) -> NodeId {
        NodeId(self.arena.insert(Node::new(value)))
    }

    pub fn node(&self, id: NodeId) -> Option<&Node<T>> {
        self.arena.get(id.0)
    }

    pub fn node_mut(&mut self, id: NodeId) -> Option<&mut Node<T>> {
        self.arena.get_mut(id.0)
    }

    pub fn contains(&self, id: NodeId) -> bool {
        self.arena.contains(id.0)
    }

    /// Number of nodes in the arena, attached or not.
    pub fn len(&self) -> usize {
        self.arena.len()
    }

    pub fn is_empty(&self) -> bool {
        self.arena.is_empty()
    }

    pub fn value(&self, id: NodeId) -> Option<&T> {
        self.node(id).map(Node::value)
    }

    #[instrument(level = "trace", skip(self, value))]
    pub fn set_value(&mut self, id: NodeId, value: T) -> TreeResult<()> {
        self.get_mut_checked(id)?.set_value(value);
        Ok(())
    }

    pub fn parent(&self, id: NodeId) -> Option<NodeId> {
        self.node(id).and_then(Node::parent)
    }

    pub fn left(&self, id: NodeId) -> Option<NodeId> {
        self.node(id).and_then(Node::left)
    }

    pub fn right(&self, id: NodeId) -> Option<NodeId> {
        self.node(id).and_then(Node::right)
    }

    /// Attaches `child` as the left child of `parent`.
    ///
    /// Fails with [`TreeError::InvalidState`] when `child` already has a
    /// parent, is the root, or would close a cycle. A child already in the
    /// slot is detached and stays in the arena.
    #[instrument(level = "trace", skip(self))]
    pub fn set_left(&mut self, parent: NodeId, child: NodeId) -> TreeResult<()> {
        self.attach(parent, child, Side::Left)
    }

    /// Attaches `child` as the right child of `parent`. See [`BinaryTree::set_left`].
    #[instrument(level = "trace", skip(self))]
    pub fn set_right(&mut self, parent: NodeId, child: NodeId) -> TreeResult<()> {
        self.attach(parent, child, Side::Right)
    }

    fn attach(&mut self, parent: NodeId, child: NodeId, side: Side) -> TreeResult<()> {
        self.check_attachable(parent, child).inspect_err(|e| {
            debug!(%parent, %child, %side, "rejected attachment: {}", e);
        })?;

        let parent_node = self.get_mut_checked(parent)?;
        let slot = match side {
            Side::Left => &mut parent_node.left,
            Side::Right => &mut parent_node.right,
        };
        let displaced = slot.replace(child);

        if let Some(old) = displaced {
            debug!(%parent, %old, %side, "detaching replaced child");
            self.get_mut_checked(old)?.parent = None;
        }
        self.get_mut_checked(child)?.parent = Some(parent);
        Ok(())
    }

    /// Precondition for attaching; leaves the tree untouched.
    fn check_attachable(&self, parent: NodeId, child: NodeId) -> TreeResult<()> {
        if !self.contains(parent) {
            return Err(TreeError::NodeNotFound(parent));
        }
        let child_node = self.node(child).ok_or(TreeError::NodeNotFound(child))?;

        if let Some(existing) = child_node.parent {
            return Err(TreeError::invalid_state(
                child,
                format!("node already has a parent ({existing})"),
            ));
        }
        if child == self.root {
            return Err(TreeError::invalid_state(
                child,
                "the root cannot be attached as a child",
            ));
        }
        if child == parent {
            return Err(TreeError::invalid_state(
                child,
                "a node cannot be its own child",
            ));
        }
        // a leaf has no descendants, so only subtrees need the upward walk
        if !child_node.is_leaf() && self.is_ancestor(child, parent) {
            return Err(TreeError::invalid_state(
                child,
                format!("node is an ancestor of {parent}"),
            ));
        }
        Ok(())
    }

    /// Walks the parent links upward from `node`.
    fn is_ancestor(&self, candidate: NodeId, node: NodeId) -> bool {
        let mut current = self.parent(node);
        while let Some(id) = current {
            if id == candidate {
                return true;
            }
            current = self.parent(id);
        }
        false
    }

    fn get_mut_checked(&mut self, id: NodeId) -> TreeResult<&mut Node<T>> {
        self.arena.get_mut(id.0).ok_or(TreeError::NodeNotFound(id))
    }
}
