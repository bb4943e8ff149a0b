use crate::avl_tree::tree;
use std::cmp;

/// A struct representing an internal node of an avl tree.
pub struct Node {
    pub key: i32,
    pub height: i32,
    pub left: tree::Tree,
    pub right: tree::Tree,
}

impl Node {
    pub fn new(key: i32) -> Self {
        Node {
            key,
            height: 0,
            left: None,
            right: None,
        }
    }

    pub fn update(&mut self) {
        let Node { ref mut height, ref left, ref right, .. } = self;
        *height = cmp::max(tree::height(left), tree::height(right)) + 1;
    }

    pub fn balance(&self) -> i32 {
        tree::height(&self.left) - tree::height(&self.right)
    }
}
