//! Ordered integer set that dispatches to one of the two balanced tree backends.

use crate::avl_tree::AvlSet;
use crate::error::{Error, Result};
use crate::red_black_tree::LlrbSet;
use std::fmt;
use std::str::FromStr;

/// An enum naming the balancing algorithm behind a `Set`.
///
/// The numeric tags `0` and `1` are the ones used by the console driver.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Backend {
    Avl,
    Llrb,
}

impl Backend {
    /// Returns the backend for a numeric tag.
    ///
    /// # Examples
    /// ```
    /// use balanced_set::{Backend, Error};
    ///
    /// assert_eq!(Backend::from_tag(0), Ok(Backend::Avl));
    /// assert_eq!(Backend::from_tag(1), Ok(Backend::Llrb));
    /// assert_eq!(Backend::from_tag(2), Err(Error::UnknownBackend(String::from("2"))));
    /// ```
    pub fn from_tag(tag: u8) -> Result<Self> {
        match tag {
            0 => Ok(Backend::Avl),
            1 => Ok(Backend::Llrb),
            _ => Err(Error::UnknownBackend(tag.to_string())),
        }
    }

    pub fn tag(self) -> u8 {
        match self {
            Backend::Avl => 0,
            Backend::Llrb => 1,
        }
    }
}

impl FromStr for Backend {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "avl" | "0" => Ok(Backend::Avl),
            "llrb" | "1" => Ok(Backend::Llrb),
            other => Err(Error::UnknownBackend(other.to_string())),
        }
    }
}

impl fmt::Display for Backend {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Backend::Avl => write!(f, "avl"),
            Backend::Llrb => write!(f, "llrb"),
        }
    }
}

/// An ordered set of integers backed by either an avl tree or a left-leaning red black tree.
///
/// The backend is chosen at construction and never changes. Two sets can only be combined with
/// `union` or `intersection` if they share a backend.
///
/// # Examples
/// ```
/// use balanced_set::{Backend, Set};
///
/// let mut a = Set::new(Backend::Llrb);
/// let mut b = Set::new(Backend::Llrb);
/// for key in 1..5 {
///     a.insert(key);
///     b.insert(key + 2);
/// }
///
/// assert_eq!(a.union(&b).unwrap().traverse(), vec![1, 2, 3, 4, 5, 6]);
/// assert_eq!(a.intersection(&b).unwrap().traverse(), vec![3, 4]);
/// assert!(a.union(&Set::new(Backend::Avl)).is_err());
/// ```
#[derive(Clone)]
pub enum Set {
    Avl(AvlSet),
    Llrb(LlrbSet),
}

impl Set {
    /// Constructs a new, empty `Set` using the given backend.
    pub fn new(backend: Backend) -> Self {
        debug!("creating {} set", backend);
        match backend {
            Backend::Avl => Set::Avl(AvlSet::new()),
            Backend::Llrb => Set::Llrb(LlrbSet::new()),
        }
    }

    /// Constructs a new, empty `Set` from a numeric backend tag. Returns an error if the tag
    /// names no backend.
    ///
    /// # Examples
    /// ```
    /// use balanced_set::{Backend, Set};
    ///
    /// assert_eq!(Set::from_tag(1).unwrap().backend(), Backend::Llrb);
    /// assert!(Set::from_tag(7).is_err());
    /// ```
    pub fn from_tag(tag: u8) -> Result<Self> {
        match Backend::from_tag(tag) {
            Ok(backend) => Ok(Set::new(backend)),
            Err(err) => {
                debug!("refusing to create a set: {}", err);
                Err(err)
            },
        }
    }

    /// Constructs a `Set` using the given backend containing every key of `keys`.
    pub fn from_keys<I>(backend: Backend, keys: I) -> Self
    where
        I: IntoIterator<Item = i32>,
    {
        let mut ret = Set::new(backend);
        for key in keys {
            ret.insert(key);
        }
        ret
    }

    pub fn backend(&self) -> Backend {
        match self {
            Set::Avl(_) => Backend::Avl,
            Set::Llrb(_) => Backend::Llrb,
        }
    }

    /// Inserts a key into the set. Returns `Error::AlreadyPresent` if the key already exists, in
    /// which case the set is untouched.
    ///
    /// # Examples
    /// ```
    /// use balanced_set::{Backend, Error, Set};
    ///
    /// let mut set = Set::new(Backend::Avl);
    /// assert_eq!(set.try_insert(1), Ok(()));
    /// assert_eq!(set.try_insert(1), Err(Error::AlreadyPresent(1)));
    /// ```
    pub fn try_insert(&mut self, key: i32) -> Result<()> {
        let inserted = match self {
            Set::Avl(set) => set.insert(key),
            Set::Llrb(set) => set.insert(key),
        };
        if inserted {
            Ok(())
        } else {
            Err(Error::AlreadyPresent(key))
        }
    }

    /// Inserts a key into the set. Returns `true` if the key was newly added.
    pub fn insert(&mut self, key: i32) -> bool {
        self.try_insert(key).is_ok()
    }

    /// Removes a key from the set. Returns `Error::NotFound` if the key does not exist.
    ///
    /// # Examples
    /// ```
    /// use balanced_set::{Backend, Error, Set};
    ///
    /// let mut set = Set::new(Backend::Llrb);
    /// set.insert(1);
    /// assert_eq!(set.try_remove(1), Ok(()));
    /// assert_eq!(set.try_remove(1), Err(Error::NotFound(1)));
    /// ```
    pub fn try_remove(&mut self, key: i32) -> Result<()> {
        let removed = match self {
            Set::Avl(set) => set.remove(key),
            Set::Llrb(set) => set.remove(key),
        };
        if removed {
            Ok(())
        } else {
            Err(Error::NotFound(key))
        }
    }

    /// Removes a key from the set. Returns `true` if the key was present.
    pub fn remove(&mut self, key: i32) -> bool {
        self.try_remove(key).is_ok()
    }

    /// Checks if a key exists in the set.
    pub fn contains(&self, key: i32) -> bool {
        match self {
            Set::Avl(set) => set.contains(key),
            Set::Llrb(set) => set.contains(key),
        }
    }

    /// Returns the number of elements in the set.
    pub fn len(&self) -> usize {
        match self {
            Set::Avl(set) => set.len(),
            Set::Llrb(set) => set.len(),
        }
    }

    /// Returns `true` if the set is empty.
    pub fn is_empty(&self) -> bool {
        match self {
            Set::Avl(set) => set.is_empty(),
            Set::Llrb(set) => set.is_empty(),
        }
    }

    /// Returns every key of the set in ascending order.
    pub fn traverse(&self) -> Vec<i32> {
        match self {
            Set::Avl(set) => set.traverse(),
            Set::Llrb(set) => set.traverse(),
        }
    }

    /// Releases every node of the set in post-order and returns how many nodes were released. The
    /// set keeps its backend and is empty afterwards.
    pub fn destroy(&mut self) -> usize {
        match self {
            Set::Avl(set) => set.destroy(),
            Set::Llrb(set) => set.destroy(),
        }
    }

    /// Returns a new set, with the same backend, containing every key of `self` and `other`.
    /// Returns `Error::BackendMismatch` if the backends differ; neither operand is modified.
    pub fn union(&self, other: &Set) -> Result<Set> {
        let ret = match (self, other) {
            (Set::Avl(left), Set::Avl(right)) => Set::Avl(left.union(right)),
            (Set::Llrb(left), Set::Llrb(right)) => Set::Llrb(left.union(right)),
            _ => return Err(self.mismatch(other)),
        };
        debug!(
            "union of {} sets with {} and {} keys has {} keys",
            ret.backend(),
            self.len(),
            other.len(),
            ret.len(),
        );
        Ok(ret)
    }

    /// Returns a new set, with the same backend, containing the keys of `self` that are also in
    /// `other`. Returns `Error::BackendMismatch` if the backends differ; neither operand is
    /// modified.
    pub fn intersection(&self, other: &Set) -> Result<Set> {
        let ret = match (self, other) {
            (Set::Avl(left), Set::Avl(right)) => Set::Avl(left.intersection(right)),
            (Set::Llrb(left), Set::Llrb(right)) => Set::Llrb(left.intersection(right)),
            _ => return Err(self.mismatch(other)),
        };
        debug!(
            "intersection of {} sets with {} and {} keys has {} keys",
            ret.backend(),
            self.len(),
            other.len(),
            ret.len(),
        );
        Ok(ret)
    }

    /// Checks the ordering and balance invariants of the underlying tree.
    pub fn validate(&self) -> Result<()> {
        match self {
            Set::Avl(set) => set.validate(),
            Set::Llrb(set) => set.validate(),
        }
    }

    fn mismatch(&self, other: &Set) -> Error {
        let err = Error::BackendMismatch {
            left: self.backend(),
            right: other.backend(),
        };
        debug!("refusing to combine sets: {}", err);
        err
    }
}

impl fmt::Display for Set {
    /// Writes the keys in ascending order separated by single spaces, or `Arvore vazia.` if the
    /// set is empty.
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let keys = self.traverse();
        if keys.is_empty() {
            return write!(f, "Arvore vazia.");
        }
        for (index, key) in keys.iter().enumerate() {
            if index > 0 {
                write!(f, " ")?;
            }
            write!(f, "{}", key)?;
        }
        Ok(())
    }
}

/// Inserts `key` into the set behind `handle`. Returns `false` if the handle is absent or the
/// key was already present.
///
/// # Examples
/// ```
/// use balanced_set::{set, Backend, Set};
///
/// let mut handle = Some(Set::new(Backend::Llrb));
/// assert!(set::insert(handle.as_mut(), 1));
/// assert!(!set::insert(handle.as_mut(), 1));
/// assert!(!set::insert(None, 1));
/// ```
pub fn insert(handle: Option<&mut Set>, key: i32) -> bool {
    handle.map_or(false, |set| set.insert(key))
}

/// Removes `key` from the set behind `handle`. Returns `false` if the handle is absent or the
/// key was not present.
pub fn remove(handle: Option<&mut Set>, key: i32) -> bool {
    handle.map_or(false, |set| set.remove(key))
}

/// Checks if the set behind `handle` contains `key`. An absent handle contains nothing.
pub fn contains(handle: Option<&Set>, key: i32) -> bool {
    handle.map_or(false, |set| set.contains(key))
}

/// Returns the keys of the set behind `handle` in ascending order, or nothing if the handle is
/// absent.
pub fn traverse(handle: Option<&Set>) -> Vec<i32> {
    handle.map_or_else(Vec::new, Set::traverse)
}

/// Releases the set behind `handle`, if any, and leaves `None` in its place. Returns how many
/// nodes were released.
///
/// # Examples
/// ```
/// use balanced_set::{set, Backend, Set};
///
/// let mut handle = Some(Set::from_keys(Backend::Avl, vec![1, 2, 3]));
/// assert_eq!(set::destroy(&mut handle), 3);
/// assert!(handle.is_none());
/// assert_eq!(set::destroy(&mut handle), 0);
/// ```
pub fn destroy(handle: &mut Option<Set>) -> usize {
    match handle.take() {
        Some(mut set) => {
            let released = set.destroy();
            debug!("destroyed {} set, released {} nodes", set.backend(), released);
            released
        },
        None => 0,
    }
}

/// Union over possibly absent sets. Returns `None` if either set is absent or the backends
/// differ.
pub fn union(left: Option<&Set>, right: Option<&Set>) -> Option<Set> {
    match (left, right) {
        (Some(left), Some(right)) => left.union(right).ok(),
        _ => None,
    }
}

/// Intersection over possibly absent sets. Returns `None` if either set is absent or the
/// backends differ.
pub fn intersection(left: Option<&Set>, right: Option<&Set>) -> Option<Set> {
    match (left, right) {
        (Some(left), Some(right)) => left.intersection(right).ok(),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::{contains, destroy, insert, intersection, remove, traverse, union, Backend, Set};
    use crate::error::Error;
    use serde_test::{assert_tokens, Token};

    const BACKENDS: [Backend; 2] = [Backend::Avl, Backend::Llrb];

    #[test]
    fn test_backend_from_tag() {
        assert_eq!(Backend::from_tag(0), Ok(Backend::Avl));
        assert_eq!(Backend::from_tag(1), Ok(Backend::Llrb));
        assert_eq!(Backend::from_tag(2), Err(Error::UnknownBackend(String::from("2"))));
        assert_eq!(Backend::Llrb.tag(), 1);
    }

    #[test]
    fn test_backend_from_str() {
        assert_eq!("avl".parse::<Backend>(), Ok(Backend::Avl));
        assert_eq!(" LLRB ".parse::<Backend>(), Ok(Backend::Llrb));
        assert_eq!("1".parse::<Backend>(), Ok(Backend::Llrb));
        assert_eq!(
            "splay".parse::<Backend>(),
            Err(Error::UnknownBackend(String::from("splay"))),
        );
    }

    #[test]
    fn test_backend_serde() {
        assert_tokens(
            &Backend::Avl,
            &[Token::UnitVariant {
                name: "Backend",
                variant: "avl",
            }],
        );
        assert_tokens(
            &Backend::Llrb,
            &[Token::UnitVariant {
                name: "Backend",
                variant: "llrb",
            }],
        );
    }

    #[test]
    fn test_from_tag_unknown() {
        assert!(Set::from_tag(2).is_err());
    }

    #[test]
    fn test_backend_is_fixed() {
        for backend in &BACKENDS {
            let mut set = Set::new(*backend);
            set.insert(1);
            set.remove(1);
            set.destroy();
            assert_eq!(set.backend(), *backend);
        }
    }

    #[test]
    fn test_insert_and_remove() {
        for backend in &BACKENDS {
            let mut set = Set::from_keys(*backend, vec![5, 3, 8]);
            assert_eq!(set.try_insert(3), Err(Error::AlreadyPresent(3)));
            assert!(set.remove(3));
            assert!(!set.contains(3));
            assert_eq!(set.traverse(), vec![5, 8]);
            assert_eq!(set.try_remove(3), Err(Error::NotFound(3)));
            assert!(set.validate().is_ok());
        }
    }

    #[test]
    fn test_intersection_scenario() {
        for backend in &BACKENDS {
            let a = Set::from_keys(*backend, vec![1, 2, 3, 4]);
            let b = Set::from_keys(*backend, vec![3, 4, 5, 6]);
            let ret = a.intersection(&b).unwrap();
            assert_eq!(ret.traverse(), vec![3, 4]);
            assert_eq!(ret.backend(), *backend);
        }
    }

    #[test]
    fn test_mismatched_backends() {
        let a = Set::from_keys(Backend::Avl, vec![1, 2]);
        let b = Set::from_keys(Backend::Llrb, vec![2, 3]);
        let err = Error::BackendMismatch {
            left: Backend::Avl,
            right: Backend::Llrb,
        };
        assert_eq!(a.union(&b).err(), Some(err.clone()));
        assert_eq!(a.intersection(&b).err(), Some(err));
        assert_eq!(a.traverse(), vec![1, 2]);
        assert_eq!(b.traverse(), vec![2, 3]);
    }

    #[test]
    fn test_absent_operands() {
        let a = Set::from_keys(Backend::Avl, vec![1, 2]);
        assert!(union(Some(&a), None).is_none());
        assert!(intersection(None, Some(&a)).is_none());
        assert_eq!(union(Some(&a), Some(&a)).unwrap().traverse(), vec![1, 2]);
    }

    #[test]
    fn test_absent_handles() {
        let mut handle: Option<Set> = None;
        assert!(!insert(handle.as_mut(), 1));
        assert!(!remove(handle.as_mut(), 1));
        assert!(!contains(handle.as_ref(), 1));
        assert!(traverse(handle.as_ref()).is_empty());
        assert!(handle.is_none());

        for backend in &BACKENDS {
            let mut handle = Some(Set::new(*backend));
            assert!(insert(handle.as_mut(), 2));
            assert!(insert(handle.as_mut(), 1));
            assert!(!insert(handle.as_mut(), 2));
            assert!(contains(handle.as_ref(), 1));
            assert_eq!(traverse(handle.as_ref()), vec![1, 2]);
            assert!(remove(handle.as_mut(), 1));
            assert!(!remove(handle.as_mut(), 1));
            assert!(!contains(handle.as_ref(), 1));
            assert_eq!(traverse(handle.as_ref()), vec![2]);
        }
    }

    #[test]
    fn test_destroy() {
        let mut handle = Some(Set::from_keys(Backend::Llrb, vec![1, 2, 3, 4]));
        assert_eq!(destroy(&mut handle), 4);
        assert!(handle.is_none());
        assert_eq!(destroy(&mut handle), 0);
    }

    #[test]
    fn test_display() {
        for backend in &BACKENDS {
            let mut set = Set::from_keys(*backend, vec![3, 1, 2]);
            assert_eq!(set.to_string(), "1 2 3");
            set.destroy();
            assert_eq!(set.to_string(), "Arvore vazia.");
        }
    }
}
