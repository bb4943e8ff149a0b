//! Self-balancing binary search tree that uses a color bit on every link to keep the tree
//! approximately balanced. Red links always lean left.

mod node;
mod set;
mod tree;

pub use self::set::LlrbSet;
