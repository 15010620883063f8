//! Arena-backed binary tree with parent links.
//!
//! ```
//! use bintree::BinaryTree;
//!
//! let mut tree = BinaryTree::new(1);
//! let root = tree.root();
//! let two = tree.new_node(2);
//! let three = tree.new_node(3);
//! tree.set_left(root, two)?;
//! tree.set_right(root, three)?;
//!
//! let mut post_order = Vec::new();
//! tree.dfs(|v| post_order.push(*v));
//! assert_eq!(post_order, vec![2, 3, 1]);
//!
//! let mut level_order = Vec::new();
//! tree.bfs(|v| level_order.push(*v));
//! assert_eq!(level_order, vec![1, 2, 3]);
//! # Ok::<(), bintree::TreeError>(())
//! ```

pub mod arena;
pub mod config;
pub mod errors;
pub mod tree_queue;
pub mod tree_stack;
pub mod tree_traits;
pub mod util;

pub use arena::{BinaryTree, Node, NodeId};
pub use config::{RenderSettings, Settings};
pub use errors::{TreeError, TreeResult};
pub use tree_queue::LevelOrderIterator;
pub use tree_stack::PostOrderIterator;
pub use tree_traits::TreeNodeConvert;
