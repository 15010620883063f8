//! Tests for node linkage and the attachment guard

use rstest::{fixture, rstest};

use bintree::util::testing;
use bintree::{BinaryTree, NodeId, TreeError};

#[ctor::ctor]
fn init() {
    testing::init_test_setup();
}

struct Sample {
    tree: BinaryTree<i32>,
    root: NodeId,
    two: NodeId,
    three: NodeId,
    four: NodeId,
}

//      1
//     / \
//    2   3
//   /
//  4
#[fixture]
fn sample() -> Sample {
    let mut tree = BinaryTree::new(1);
    let root = tree.root();
    let two = tree.new_node(2);
    let three = tree.new_node(3);
    let four = tree.new_node(4);
    tree.set_left(root, two).unwrap();
    tree.set_right(root, three).unwrap();
    tree.set_left(two, four).unwrap();
    Sample {
        tree,
        root,
        two,
        three,
        four,
    }
}

// ============================================================
// Parent links
// ============================================================

#[rstest]
fn given_any_tree_when_asking_root_parent_then_none(sample: Sample) {
    assert_eq!(sample.tree.parent(sample.root), None);
    assert_eq!(sample.tree.root_node().parent(), None);
}

#[rstest]
fn given_attached_children_when_asking_parent_then_attaching_node(sample: Sample) {
    let Sample {
        tree,
        root,
        two,
        three,
        four,
    } = sample;
    assert_eq!(tree.parent(two), Some(root));
    assert_eq!(tree.parent(three), Some(root));
    assert_eq!(tree.parent(four), Some(two));
    assert_eq!(tree.node(four).and_then(|n| n.parent()), Some(two));
}

#[rstest]
fn given_leaf_when_asking_children_then_none(sample: Sample) {
    let node = sample.tree.node(sample.four).unwrap();
    assert_eq!(node.left(), None);
    assert_eq!(node.right(), None);
    assert!(node.is_leaf());
}

// ============================================================
// Re-parenting is rejected
// ============================================================

#[test]
fn given_x_under_a_when_attaching_x_under_b_then_invalid_state() {
    let mut tree = BinaryTree::new("root");
    let a = tree.new_node("A");
    let b = tree.new_node("B");
    let x = tree.new_node("X");
    tree.set_left(a, x).unwrap();

    let result = tree.set_right(b, x);

    assert!(
        matches!(result, Err(TreeError::InvalidState { node, .. }) if node == x),
        "expected InvalidState, got {:?}",
        result
    );
    assert_eq!(tree.right(b), None);
    assert_eq!(tree.left(b), None);
    assert_eq!(tree.parent(x), Some(a));
    assert_eq!(tree.left(a), Some(x));
}

#[rstest]
#[case::same_slot_same_parent(true, true)]
#[case::other_slot_same_parent(true, false)]
#[case::left_of_sibling(false, true)]
#[case::right_of_sibling(false, false)]
fn given_parented_node_when_attaching_again_then_nothing_changes(
    sample: Sample,
    #[case] same_parent: bool,
    #[case] left: bool,
) {
    let Sample {
        mut tree,
        root,
        two,
        three,
        four,
    } = sample;
    let target = if same_parent { two } else { three };
    let before = (tree.left(target), tree.right(target));

    let result = if left {
        tree.set_left(target, four)
    } else {
        tree.set_right(target, four)
    };

    assert!(result.unwrap_err().is_invalid_state());
    assert_eq!((tree.left(target), tree.right(target)), before);
    assert_eq!(tree.parent(four), Some(two));
    assert_eq!(tree.left(root), Some(two));
}

#[rstest]
fn given_root_when_attaching_as_child_then_invalid_state(sample: Sample) {
    let mut tree = sample.tree;
    let err = tree.set_right(sample.four, sample.root).unwrap_err();
    assert!(err.is_invalid_state());
    assert!(err.to_string().contains("root"));
    assert_eq!(tree.right(sample.four), None);
}

#[test]
fn given_detached_subtree_when_attaching_its_root_below_itself_then_invalid_state() {
    let mut tree = BinaryTree::new(0);
    let a = tree.new_node(1);
    let b = tree.new_node(2);
    let c = tree.new_node(3);
    tree.set_left(a, b).unwrap();
    tree.set_right(b, c).unwrap();

    let err = tree.set_left(c, a).unwrap_err();

    assert!(err.is_invalid_state());
    assert_eq!(tree.left(c), None);
    assert_eq!(tree.parent(a), None);
}

// ============================================================
// Overwriting a child slot
// ============================================================

#[rstest]
fn given_occupied_slot_when_setting_new_child_then_previous_is_detached(sample: Sample) {
    let Sample {
        mut tree,
        root,
        three,
        ..
    } = sample;
    let five = tree.new_node(5);

    tree.set_right(root, five).unwrap();

    assert_eq!(tree.right(root), Some(five));
    assert_eq!(tree.parent(five), Some(root));
    assert_eq!(tree.parent(three), None);

    let mut seen = Vec::new();
    tree.bfs(|v| seen.push(*v));
    assert_eq!(seen, vec![1, 2, 5, 4]);
}

#[rstest]
fn given_detached_child_when_reattaching_elsewhere_then_succeeds(sample: Sample) {
    let Sample {
        mut tree,
        root,
        three,
        four,
        ..
    } = sample;
    let five = tree.new_node(5);
    tree.set_right(root, five).unwrap();

    tree.set_right(four, three).unwrap();

    assert_eq!(tree.parent(three), Some(four));
    let mut seen = Vec::new();
    tree.dfs(|v| seen.push(*v));
    assert_eq!(seen, vec![3, 4, 2, 5, 1]);
}

// ============================================================
// Values and ids
// ============================================================

#[rstest]
fn given_node_when_setting_value_then_only_value_changes(sample: Sample) {
    let Sample {
        mut tree,
        root,
        two,
        four,
        ..
    } = sample;

    tree.set_value(two, 20).unwrap();

    assert_eq!(tree.value(two), Some(&20));
    assert_eq!(tree.parent(two), Some(root));
    assert_eq!(tree.left(two), Some(four));
}

#[test]
fn given_id_from_other_tree_when_used_then_node_not_found() {
    let mut other = BinaryTree::new('o');
    other.new_node('p');
    let foreign = other.new_node('q');

    let mut tree = BinaryTree::new('t');
    let root = tree.root();

    assert_eq!(
        tree.set_left(root, foreign),
        Err(TreeError::NodeNotFound(foreign))
    );
    assert_eq!(
        tree.set_left(foreign, root),
        Err(TreeError::NodeNotFound(foreign))
    );
    assert_eq!(
        tree.set_value(foreign, 'x'),
        Err(TreeError::NodeNotFound(foreign))
    );
    assert_eq!(tree.left(root), None);
}

#[test]
fn given_unattached_nodes_when_counting_then_len_includes_them() {
    let mut tree = BinaryTree::new(());
    tree.new_node(());
    tree.new_node(());
    assert_eq!(tree.len(), 3);
    assert!(!tree.is_empty());
    assert_eq!(tree.iter_bfs().count(), 1);
}
