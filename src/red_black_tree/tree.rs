use crate::error::{Error, Result};
use crate::red_black_tree::node::{self, Color, Node};
use std::cmp::Ordering;

pub type Tree = Option<Box<Node>>;

pub fn is_red(tree: &Tree) -> bool {
    match tree {
        None => false,
        Some(ref node) => node.is_red(),
    }
}

fn min_key(node: &Node) -> i32 {
    let mut curr = node;
    while let Some(ref left_node) = curr.left {
        curr = left_node;
    }
    curr.key
}

fn remove_min(mut node: Box<Node>) -> Tree {
    if node.left.is_none() {
        return None;
    }

    if node.is_left_left_black() {
        node = node::move_red_left(node);
    }

    if let Some(left) = node.left.take() {
        node.left = remove_min(left);
    }
    Some(node::fix_up(node))
}

pub fn fix_root(tree: &mut Tree) {
    if let Some(ref mut node) = tree {
        if !is_red(&node.left) && !is_red(&node.right) {
            node.color = Color::Red;
        }
    }
}

pub fn paint_root_black(tree: &mut Tree) {
    if let Some(ref mut node) = tree {
        node.color = Color::Black;
    }
}

/// Inserts `key` below `tree` and returns the new subtree root along with whether the key was
/// absent beforehand.
pub fn insert(tree: Tree, key: i32) -> (Box<Node>, bool) {
    let mut node = match tree {
        Some(node) => node,
        None => return (Box::new(Node::new(key)), true),
    };

    let inserted = match key.cmp(&node.key) {
        Ordering::Less => {
            let (left, inserted) = insert(node.left.take(), key);
            node.left = Some(left);
            inserted
        },
        Ordering::Greater => {
            let (right, inserted) = insert(node.right.take(), key);
            node.right = Some(right);
            inserted
        },
        Ordering::Equal => return (node, false),
    };

    (node::fix_up(node), inserted)
}

// precondition: `key` exists in the tree
pub fn remove(mut node: Box<Node>, key: i32) -> Tree {
    if key < node.key {
        if node.is_left_left_black() {
            node = node::move_red_left(node);
        }

        if let Some(left) = node.left.take() {
            node.left = remove(left, key);
        }
    } else {
        if is_red(&node.left) {
            node = node::rotate_right(node);
        }

        if key == node.key && node.right.is_none() {
            return None;
        }

        if node.is_right_left_black() {
            node = node::move_red_right(node);
        }

        if let Some(right) = node.right.take() {
            if key == node.key {
                node.key = min_key(&right);
                node.right = remove_min(right);
            } else {
                node.right = remove(right, key);
            }
        }
    }

    Some(node::fix_up(node))
}

pub fn contains(tree: &Tree, key: i32) -> bool {
    let mut curr = tree;
    while let Some(ref node) = curr {
        curr = match key.cmp(&node.key) {
            Ordering::Less => &node.left,
            Ordering::Greater => &node.right,
            Ordering::Equal => return true,
        };
    }
    false
}

pub fn min(tree: &Tree) -> Option<i32> {
    tree.as_ref().map(|node| min_key(node))
}

pub fn max(tree: &Tree) -> Option<i32> {
    tree.as_ref().map(|node| {
        let mut curr = node;
        while let Some(ref right_node) = curr.right {
            curr = right_node;
        }
        curr.key
    })
}

pub fn black_height(tree: &Tree) -> usize {
    let mut ret = 0;
    let mut curr = tree;
    while let Some(ref node) = curr {
        if !node.is_red() {
            ret += 1;
        }
        curr = &node.left;
    }
    ret
}

pub fn in_order<F>(tree: &Tree, f: &mut F)
where
    F: FnMut(i32),
{
    if let Some(ref node) = tree {
        in_order(&node.left, f);
        f(node.key);
        in_order(&node.right, f);
    }
}

pub fn pre_order<F>(tree: &Tree, f: &mut F)
where
    F: FnMut(i32),
{
    if let Some(ref node) = tree {
        f(node.key);
        pre_order(&node.left, f);
        pre_order(&node.right, f);
    }
}

/// Releases every node of `tree` in post-order and returns how many were released.
pub fn destroy(tree: &mut Tree) -> usize {
    match tree.take() {
        Some(mut node) => {
            let released = destroy(&mut node.left) + destroy(&mut node.right);
            drop(node);
            released + 1
        },
        None => 0,
    }
}

/// Checks ordering and the left-leaning red black invariants, returning the black height of
/// `tree`.
pub fn validate(
    tree: &Tree,
    lower: Option<i32>,
    upper: Option<i32>,
    from_red: bool,
) -> Result<usize> {
    let node = match tree {
        Some(ref node) => node,
        None => return Ok(0),
    };

    let below = lower.map_or(false, |lower| node.key <= lower);
    let above = upper.map_or(false, |upper| node.key >= upper);
    if below || above {
        return Err(Error::OutOfOrder { key: node.key });
    }

    if from_red && node.is_red() {
        return Err(Error::ConsecutiveReds { key: node.key });
    }

    if is_red(&node.right) {
        return Err(Error::RightLeaningRed { key: node.key });
    }

    let left = validate(&node.left, lower, Some(node.key), node.is_red())?;
    let right = validate(&node.right, Some(node.key), upper, node.is_red())?;
    if left != right {
        return Err(Error::UnbalancedBlacks {
            key: node.key,
            left,
            right,
        });
    }

    if node.is_red() {
        Ok(left)
    } else {
        Ok(left + 1)
    }
}
