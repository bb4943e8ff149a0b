//! An ordered set of integers backed by one of two interchangeable self-balancing binary search
//! trees: an avl tree or a left-leaning red black tree.
//!
//! # Examples
//! ```
//! use balanced_set::{Backend, Set};
//!
//! let mut set = Set::new(Backend::Avl);
//! set.insert(30);
//! set.insert(20);
//! set.insert(10);
//!
//! assert!(set.contains(20));
//! assert_eq!(set.traverse(), vec![10, 20, 30]);
//! ```

#[macro_use]
extern crate log;
extern crate serde;
#[macro_use]
extern crate serde_derive;

mod error;
pub mod avl_tree;
pub mod driver;
pub mod red_black_tree;
pub mod set;

pub use crate::error::{Error, Result};
pub use crate::set::{Backend, Set};
