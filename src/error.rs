use crate::set::Backend;
use std::error;
use std::fmt;
use std::result;

/// An enum representing the ways an operation on a set can fail.
///
/// `AlreadyPresent` and `NotFound` are ordinary outcomes of `insert` and `remove`. The invariant
/// variants are only produced by `validate` and indicate a corrupted tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    AlreadyPresent(i32),
    NotFound(i32),
    UnknownBackend(String),
    BackendMismatch { left: Backend, right: Backend },
    MalformedInput(String),
    OutOfOrder { key: i32 },
    Unbalanced { key: i32, balance: i32 },
    StaleHeight { key: i32, cached: i32, actual: i32 },
    ConsecutiveReds { key: i32 },
    RightLeaningRed { key: i32 },
    UnbalancedBlacks { key: i32, left: usize, right: usize },
    RedRoot { key: i32 },
}

impl error::Error for Error {}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Error::AlreadyPresent(key) => write!(f, "key {} is already present", key),
            Error::NotFound(key) => write!(f, "key {} was not found", key),
            Error::UnknownBackend(tag) => write!(f, "unknown backend `{}`", tag),
            Error::BackendMismatch { left, right } => {
                write!(f, "cannot combine a {} set with a {} set", left, right)
            },
            Error::MalformedInput(reason) => write!(f, "malformed input: {}", reason),
            Error::OutOfOrder { key } => write!(f, "key {} breaks the search tree order", key),
            Error::Unbalanced { key, balance } => {
                write!(f, "node {} has balance factor {}", key, balance)
            },
            Error::StaleHeight { key, cached, actual } => write!(
                f,
                "node {} caches height {} but has height {}",
                key, cached, actual,
            ),
            Error::ConsecutiveReds { key } => write!(f, "node {} has two red links in a row", key),
            Error::RightLeaningRed { key } => write!(f, "node {} has a red right link", key),
            Error::UnbalancedBlacks { key, left, right } => write!(
                f,
                "node {} has black height {} on the left and {} on the right",
                key, left, right,
            ),
            Error::RedRoot { key } => write!(f, "root {} is red", key),
        }
    }
}

pub type Result<T> = result::Result<T, Error>;
