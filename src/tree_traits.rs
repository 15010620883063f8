use std::fmt;

use termtree::Tree;
use tracing::instrument;

use crate::arena::{BinaryTree, NodeId};
use crate::config::RenderSettings;

/// Conversion into a printable `termtree` rendering.
pub trait TreeNodeConvert {
    fn to_tree_string(&self) -> Tree<String> {
        self.render(&RenderSettings::default())
    }

    fn render(&self, settings: &RenderSettings) -> Tree<String>;
}

/*
Rendering without recursion.

Post-order hands out every child before its parent, so finished subtrees are
kept on a stack: when a node comes up, its right subtree (if any) is on top
and its left subtree (if any) right below it.
 */
impl<T: fmt::Display> TreeNodeConvert for BinaryTree<T> {
    #[instrument(level = "debug", skip_all)]
    fn render(&self, settings: &RenderSettings) -> Tree<String> {
        let root = self.root();
        let mut finished: Vec<Tree<String>> = Vec::new();

        for (idx, node) in self.iter_dfs() {
            let right = node.right().and_then(|_| finished.pop());
            let left = node.left().and_then(|_| finished.pop());

            let prefix = match node.parent() {
                _ if idx == root => "",
                Some(parent) if self.left(parent) == Some(idx) => settings.left_prefix.as_str(),
                _ => settings.right_prefix.as_str(),
            };
            let mut current = Tree::new(label(idx, node.value(), prefix, settings));

            match (left, &settings.empty_slot) {
                (Some(left), _) => {
                    current.push(left);
                }
                (None, Some(marker)) if right.is_some() => {
                    current.push(Tree::new(format!("{}{}", settings.left_prefix, marker)));
                }
                _ => {}
            }
            if let Some(right) = right {
                current.push(right);
            }
            finished.push(current);
        }

        // the root is always the last node in post-order
        finished
            .pop()
            .unwrap_or_else(|| Tree::new(String::new()))
    }
}

fn label<T: fmt::Display>(idx: NodeId, value: &T, prefix: &str, settings: &RenderSettings) -> String {
    if settings.show_ids {
        format!("{prefix}{value} {idx}")
    } else {
        format!("{prefix}{value}")
    }
}

impl<T: fmt::Display> fmt::Display for BinaryTree<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_tree_string())
    }
}
