use crate::avl_tree::node::Node;
use crate::error::{Error, Result};
use std::cmp::{self, Ordering};

pub type Tree = Option<Box<Node>>;

pub fn height(tree: &Tree) -> i32 {
    match tree {
        None => -1,
        Some(ref node) => node.height,
    }
}

fn rotate_left(mut node: Box<Node>) -> Box<Node> {
    let mut child = match node.right.take() {
        Some(child) => child,
        None => unreachable!(),
    };
    node.right = child.left.take();
    node.update();
    child.left = Some(node);
    child.update();
    child
}

fn rotate_right(mut node: Box<Node>) -> Box<Node> {
    let mut child = match node.left.take() {
        Some(child) => child,
        None => unreachable!(),
    };
    node.left = child.right.take();
    node.update();
    child.right = Some(node);
    child.update();
    child
}

fn rebalance(mut node: Box<Node>) -> Box<Node> {
    node.update();

    if node.balance() == -2 {
        if let Some(child) = node.right.take() {
            if child.balance() <= 0 {
                node.right = Some(child);
            } else {
                node.right = Some(rotate_right(child));
            }
        }
        node = rotate_left(node);
    } else if node.balance() == 2 {
        if let Some(child) = node.left.take() {
            if child.balance() >= 0 {
                node.left = Some(child);
            } else {
                node.left = Some(rotate_left(child));
            }
        }
        node = rotate_right(node);
    }

    node
}

// precondition: the subtree is non-empty
fn remove_max(mut node: Box<Node>) -> (Tree, i32) {
    match node.right.take() {
        Some(child) => {
            let (right, key) = remove_max(child);
            node.right = right;
            (Some(rebalance(node)), key)
        },
        None => (node.left.take(), node.key),
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

    (rebalance(node), inserted)
}

/// Removes `key` from below `tree` and returns the new subtree root along with whether the key
/// was present.
pub fn remove(tree: Tree, key: i32) -> (Tree, bool) {
    let mut node = match tree {
        Some(node) => node,
        None => return (None, false),
    };

    let removed = match key.cmp(&node.key) {
        Ordering::Less => {
            let (left, removed) = remove(node.left.take(), key);
            node.left = left;
            removed
        },
        Ordering::Greater => {
            let (right, removed) = remove(node.right.take(), key);
            node.right = right;
            removed
        },
        Ordering::Equal => {
            match (node.left.take(), node.right.take()) {
                (None, right) => return (right, true),
                (left, None) => return (left, true),
                (Some(left), right) => {
                    let (left, predecessor) = remove_max(left);
                    node.key = predecessor;
                    node.left = left;
                    node.right = right;
                },
            }
            true
        },
    };

    (Some(rebalance(node)), removed)
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
    tree.as_ref().map(|node| {
        let mut curr = node;
        while let Some(ref left_node) = curr.left {
            curr = left_node;
        }
        curr.key
    })
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

pub fn in_order(tree: &Tree, keys: &mut Vec<i32>) {
    if let Some(ref node) = tree {
        in_order(&node.left, keys);
        keys.push(node.key);
        in_order(&node.right, keys);
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

/// Checks ordering, cached heights and balance factors, returning the true height of `tree`.
pub fn validate(tree: &Tree, lower: Option<i32>, upper: Option<i32>) -> Result<i32> {
    let node = match tree {
        Some(ref node) => node,
        None => return Ok(-1),
    };

    let below = lower.map_or(false, |lower| node.key <= lower);
    let above = upper.map_or(false, |upper| node.key >= upper);
    if below || above {
        return Err(Error::OutOfOrder { key: node.key });
    }

    let left_height = validate(&node.left, lower, Some(node.key))?;
    let right_height = validate(&node.right, Some(node.key), upper)?;
    let actual = cmp::max(left_height, right_height) + 1;

    if node.height != actual {
        return Err(Error::StaleHeight {
            key: node.key,
            cached: node.height,
            actual,
        });
    }

    let balance = left_height - right_height;
    if balance.abs() > 1 {
        return Err(Error::Unbalanced { key: node.key, balance });
    }

    Ok(actual)
}
