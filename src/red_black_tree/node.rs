use crate::red_black_tree::tree;

/// An enum representing the color of the link from a node to its parent.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Color {
    Red,
    Black,
}

impl Color {
    pub fn flip(self) -> Color {
        match self {
            Color::Red => Color::Black,
            Color::Black => Color::Red,
        }
    }
}

/// A struct representing an internal node of a left-leaning red black tree.
pub struct Node {
    pub key: i32,
    pub color: Color,
    pub left: tree::Tree,
    pub right: tree::Tree,
}

impl Node {
    pub fn new(key: i32) -> Self {
        Node {
            key,
            color: Color::Red,
            left: None,
            right: None,
        }
    }

    pub fn is_red(&self) -> bool {
        self.color == Color::Red
    }

    pub fn flip_colors(&mut self) {
        self.color = self.color.flip();
        if let Some(ref mut child) = self.left {
            child.color = child.color.flip();
        }
        if let Some(ref mut child) = self.right {
            child.color = child.color.flip();
        }
    }

    // Whether both the left link and the left link of the left child are red.
    pub fn is_left_left_red(&self) -> bool {
        match self.left {
            Some(ref child) => child.is_red() && tree::is_red(&child.left),
            None => false,
        }
    }

    // Whether both the left link and the left link of the left child are black.
    pub fn is_left_left_black(&self) -> bool {
        match self.left {
            Some(ref child) => !child.is_red() && !tree::is_red(&child.left),
            None => true,
        }
    }

    // Whether both the right link and the left link of the right child are black.
    pub fn is_right_left_black(&self) -> bool {
        match self.right {
            Some(ref child) => !child.is_red() && !tree::is_red(&child.left),
            None => true,
        }
    }
}

pub fn rotate_left(mut node: Box<Node>) -> Box<Node> {
    let mut child = node
        .right
        .take()
        .expect("Expected right child node to be `Some`.");
    node.right = child.left.take();
    child.color = node.color;
    node.color = Color::Red;
    child.left = Some(node);
    child
}

pub fn rotate_right(mut node: Box<Node>) -> Box<Node> {
    let mut child = node
        .left
        .take()
        .expect("Expected left child node to be `Some`.");
    node.left = child.right.take();
    child.color = node.color;
    node.color = Color::Red;
    child.right = Some(node);
    child
}

/// Restores the left-leaning invariants on the way back up from an insertion or a deletion.
pub fn fix_up(mut node: Box<Node>) -> Box<Node> {
    if tree::is_red(&node.right) && !tree::is_red(&node.left) {
        node = rotate_left(node);
    }

    if node.is_left_left_red() {
        node = rotate_right(node);
    }

    if tree::is_red(&node.left) && tree::is_red(&node.right) {
        node.flip_colors();
    }

    node
}

/// Pushes a red link into the left subtree before descending into it.
pub fn move_red_left(mut node: Box<Node>) -> Box<Node> {
    node.flip_colors();
    let should_rotate = match node.right {
        Some(ref child) => tree::is_red(&child.left),
        None => false,
    };
    if should_rotate {
        if let Some(child) = node.right.take() {
            node.right = Some(rotate_right(child));
        }
        node = rotate_left(node);
        node.flip_colors();
    }
    node
}

/// Pushes a red link into the right subtree before descending into it.
pub fn move_red_right(mut node: Box<Node>) -> Box<Node> {
    node.flip_colors();
    let should_rotate = match node.left {
        Some(ref child) => tree::is_red(&child.left),
        None => false,
    };
    if should_rotate {
        node = rotate_right(node);
        node.flip_colors();
    }
    node
}
