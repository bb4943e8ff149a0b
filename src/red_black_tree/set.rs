use crate::error::{Error, Result};
use crate::red_black_tree::tree;

/// An ordered set of integers implemented using a left-leaning red black tree.
///
/// A left-leaning red black tree is a red black tree where every red link leans left. It is a
/// one-to-one encoding of a 2-3 tree: each red link glues a key to its parent to form a 3-node.
///
/// # Examples
/// ```
/// use balanced_set::red_black_tree::LlrbSet;
///
/// let mut set = LlrbSet::new();
/// set.insert(0);
/// set.insert(3);
///
/// assert_eq!(set.len(), 2);
/// assert_eq!(set.max(), Some(3));
///
/// assert!(set.remove(0));
/// assert!(!set.remove(1));
/// ```
pub struct LlrbSet {
    root: tree::Tree,
    len: usize,
}

impl LlrbSet {
    /// Constructs a new, empty `LlrbSet`.
    ///
    /// # Examples
    /// ```
    /// use balanced_set::red_black_tree::LlrbSet;
    ///
    /// let set = LlrbSet::new();
    /// assert!(set.is_empty());
    /// ```
    pub fn new() -> Self {
        LlrbSet {
            root: None,
            len: 0,
        }
    }

    /// Inserts a key into the set. Returns `false` and leaves the set untouched if the key is
    /// already present.
    ///
    /// # Examples
    /// ```
    /// use balanced_set::red_black_tree::LlrbSet;
    ///
    /// let mut set = LlrbSet::new();
    /// assert!(set.insert(1));
    /// assert!(!set.insert(1));
    /// ```
    pub fn insert(&mut self, key: i32) -> bool {
        let (root, inserted) = tree::insert(self.root.take(), key);
        self.root = Some(root);
        tree::paint_root_black(&mut self.root);
        if inserted {
            self.len += 1;
        }
        inserted
    }

    /// Removes a key from the set. Returns `true` if the key was present.
    ///
    /// A node with two children takes the smallest key of its right subtree.
    ///
    /// # Examples
    /// ```
    /// use balanced_set::red_black_tree::LlrbSet;
    ///
    /// let mut set = LlrbSet::new();
    /// set.insert(1);
    /// assert!(set.remove(1));
    /// assert!(!set.remove(1));
    /// ```
    pub fn remove(&mut self, key: i32) -> bool {
        if !self.contains(key) {
            return false;
        }

        tree::fix_root(&mut self.root);
        self.root = match self.root.take() {
            Some(node) => tree::remove(node, key),
            None => None,
        };
        tree::paint_root_black(&mut self.root);
        self.len -= 1;
        true
    }

    /// Checks if a key exists in the set.
    ///
    /// # Examples
    /// ```
    /// use balanced_set::red_black_tree::LlrbSet;
    ///
    /// let mut set = LlrbSet::new();
    /// set.insert(1);
    /// assert!(!set.contains(0));
    /// assert!(set.contains(1));
    /// ```
    pub fn contains(&self, key: i32) -> bool {
        tree::contains(&self.root, key)
    }

    /// Returns the number of elements in the set.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns `true` if the set is empty.
    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    /// Clears the set, removing all values.
    pub fn clear(&mut self) {
        self.destroy();
    }

    /// Releases every node of the set in post-order and returns how many nodes were released.
    /// The set is empty afterwards.
    pub fn destroy(&mut self) -> usize {
        self.len = 0;
        tree::destroy(&mut self.root)
    }

    /// Returns the minimum key of the set. Returns `None` if the set is empty.
    pub fn min(&self) -> Option<i32> {
        tree::min(&self.root)
    }

    /// Returns the maximum key of the set. Returns `None` if the set is empty.
    pub fn max(&self) -> Option<i32> {
        tree::max(&self.root)
    }

    /// Returns the number of black links on any path from the root to an empty subtree.
    pub fn black_height(&self) -> usize {
        tree::black_height(&self.root)
    }

    /// Returns the key stored at the root of the tree.
    pub fn root_key(&self) -> Option<i32> {
        self.root.as_ref().map(|node| node.key)
    }

    /// Returns `true` if the root is colored red. This never holds between operations.
    pub fn root_is_red(&self) -> bool {
        tree::is_red(&self.root)
    }

    /// Returns every key of the set in ascending order.
    ///
    /// # Examples
    /// ```
    /// use balanced_set::red_black_tree::LlrbSet;
    ///
    /// let mut set = LlrbSet::new();
    /// set.insert(3);
    /// set.insert(1);
    /// set.insert(2);
    /// assert_eq!(set.traverse(), vec![1, 2, 3]);
    /// ```
    pub fn traverse(&self) -> Vec<i32> {
        let mut keys = Vec::with_capacity(self.len);
        tree::in_order(&self.root, &mut |key| keys.push(key));
        keys
    }

    /// Returns a new set containing every key of `self` and `other`.
    pub fn union(&self, other: &LlrbSet) -> LlrbSet {
        let mut ret = LlrbSet::new();
        tree::in_order(&self.root, &mut |key| {
            ret.insert(key);
        });
        tree::in_order(&other.root, &mut |key| {
            ret.insert(key);
        });
        ret
    }

    /// Returns a new set containing the keys of `self` that are also in `other`.
    ///
    /// # Examples
    /// ```
    /// use balanced_set::red_black_tree::LlrbSet;
    ///
    /// let mut a = LlrbSet::new();
    /// a.insert(1);
    /// a.insert(2);
    /// let mut b = LlrbSet::new();
    /// b.insert(2);
    /// b.insert(3);
    /// assert_eq!(a.intersection(&b).traverse(), vec![2]);
    /// ```
    pub fn intersection(&self, other: &LlrbSet) -> LlrbSet {
        let mut ret = LlrbSet::new();
        tree::pre_order(&self.root, &mut |key| {
            if other.contains(key) {
                trace!("key {} is in both llrb sets", key);
                ret.insert(key);
            }
        });
        ret
    }

    /// Checks that the keys are strictly increasing in-order, that no red link leans right or
    /// follows another red link, that every path has the same number of black links and that the
    /// root is black.
    pub fn validate(&self) -> Result<()> {
        if let Some(ref node) = self.root {
            if node.is_red() {
                return Err(Error::RedRoot { key: node.key });
            }
        }
        tree::validate(&self.root, None, None, false).map(|_| ())
    }
}

impl Clone for LlrbSet {
    /// Rebuilds the set by inserting every key in pre-order, so the clone shares no nodes with
    /// the original.
    fn clone(&self) -> Self {
        let mut ret = LlrbSet::new();
        tree::pre_order(&self.root, &mut |key| {
            ret.insert(key);
        });
        ret
    }
}

impl Default for LlrbSet {
    fn default() -> Self {
        Self::new()
    }
}
