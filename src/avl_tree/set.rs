use crate::avl_tree::tree;
use crate::error::Result;

/// An ordered set of integers implemented using an avl tree.
///
/// An avl tree is a self-balancing binary search tree that maintains the invariant that the
/// heights of two child subtrees of any node differ by at most one.
///
/// # Examples
/// ```
/// use balanced_set::avl_tree::AvlSet;
///
/// let mut set = AvlSet::new();
/// set.insert(0);
/// set.insert(3);
///
/// assert_eq!(set.len(), 2);
/// assert_eq!(set.min(), Some(0));
///
/// assert!(set.remove(0));
/// assert!(!set.remove(1));
/// ```
pub struct AvlSet {
    root: tree::Tree,
    len: usize,
}

impl AvlSet {
    /// Constructs a new, empty `AvlSet`.
    ///
    /// # Examples
    /// ```
    /// use balanced_set::avl_tree::AvlSet;
    ///
    /// let set = AvlSet::new();
    /// assert!(set.is_empty());
    /// ```
    pub fn new() -> Self {
        AvlSet {
            root: None,
            len: 0,
        }
    }

    /// Inserts a key into the set. Returns `false` and leaves the set untouched if the key is
    /// already present.
    ///
    /// # Examples
    /// ```
    /// use balanced_set::avl_tree::AvlSet;
    ///
    /// let mut set = AvlSet::new();
    /// assert!(set.insert(1));
    /// assert!(!set.insert(1));
    /// ```
    pub fn insert(&mut self, key: i32) -> bool {
        let (root, inserted) = tree::insert(self.root.take(), key);
        self.root = Some(root);
        if inserted {
            self.len += 1;
        }
        inserted
    }

    /// Removes a key from the set. Returns `true` if the key was present.
    ///
    /// A node with two children takes the largest key of its left subtree.
    ///
    /// # Examples
    /// ```
    /// use balanced_set::avl_tree::AvlSet;
    ///
    /// let mut set = AvlSet::new();
    /// set.insert(1);
    /// assert!(set.remove(1));
    /// assert!(!set.remove(1));
    /// ```
    pub fn remove(&mut self, key: i32) -> bool {
        let (root, removed) = tree::remove(self.root.take(), key);
        self.root = root;
        if removed {
            self.len -= 1;
        }
        removed
    }

    /// Checks if a key exists in the set.
    ///
    /// # Examples
    /// ```
    /// use balanced_set::avl_tree::AvlSet;
    ///
    /// let mut set = AvlSet::new();
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
    ///
    /// # Examples
    /// ```
    /// use balanced_set::avl_tree::AvlSet;
    ///
    /// let mut set = AvlSet::new();
    /// set.insert(1);
    /// set.insert(2);
    /// assert_eq!(set.destroy(), 2);
    /// assert!(set.is_empty());
    /// ```
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

    /// Returns the height of the tree, where an empty tree has height `-1` and a single node has
    /// height `0`.
    pub fn height(&self) -> i32 {
        tree::height(&self.root)
    }

    /// Returns the key stored at the root of the tree.
    ///
    /// # Examples
    /// ```
    /// use balanced_set::avl_tree::AvlSet;
    ///
    /// let mut set = AvlSet::new();
    /// set.insert(30);
    /// set.insert(20);
    /// set.insert(10);
    /// assert_eq!(set.root_key(), Some(20));
    /// ```
    pub fn root_key(&self) -> Option<i32> {
        self.root.as_ref().map(|node| node.key)
    }

    /// Returns every key of the set in ascending order.
    ///
    /// # Examples
    /// ```
    /// use balanced_set::avl_tree::AvlSet;
    ///
    /// let mut set = AvlSet::new();
    /// set.insert(3);
    /// set.insert(1);
    /// set.insert(2);
    /// assert_eq!(set.traverse(), vec![1, 2, 3]);
    /// ```
    pub fn traverse(&self) -> Vec<i32> {
        let mut keys = Vec::with_capacity(self.len);
        tree::in_order(&self.root, &mut keys);
        keys
    }

    /// Returns a new set containing every key of `self` and `other`.
    ///
    /// # Examples
    /// ```
    /// use balanced_set::avl_tree::AvlSet;
    ///
    /// let mut a = AvlSet::new();
    /// a.insert(1);
    /// a.insert(2);
    /// let mut b = AvlSet::new();
    /// b.insert(2);
    /// b.insert(3);
    /// assert_eq!(a.union(&b).traverse(), vec![1, 2, 3]);
    /// ```
    pub fn union(&self, other: &AvlSet) -> AvlSet {
        let mut ret = AvlSet::new();
        tree::pre_order(&self.root, &mut |key| {
            ret.insert(key);
        });
        tree::pre_order(&other.root, &mut |key| {
            ret.insert(key);
        });
        ret
    }

    /// Returns a new set containing the keys of `self` that are also in `other`.
    ///
    /// # Examples
    /// ```
    /// use balanced_set::avl_tree::AvlSet;
    ///
    /// let mut a = AvlSet::new();
    /// a.insert(1);
    /// a.insert(2);
    /// let mut b = AvlSet::new();
    /// b.insert(2);
    /// b.insert(3);
    /// assert_eq!(a.intersection(&b).traverse(), vec![2]);
    /// ```
    pub fn intersection(&self, other: &AvlSet) -> AvlSet {
        let mut ret = AvlSet::new();
        tree::pre_order(&self.root, &mut |key| {
            if other.contains(key) {
                trace!("key {} is in both avl sets", key);
                ret.insert(key);
            }
        });
        ret
    }

    /// Checks that the keys are strictly increasing in-order, that every cached height is
    /// accurate and that every balance factor is within `[-1, 1]`.
    pub fn validate(&self) -> Result<()> {
        tree::validate(&self.root, None, None).map(|_| ())
    }
}

impl Clone for AvlSet {
    /// Rebuilds the set by inserting every key in pre-order, so the clone shares no nodes with
    /// the original.
    fn clone(&self) -> Self {
        let mut ret = AvlSet::new();
        tree::pre_order(&self.root, &mut |key| {
            ret.insert(key);
        });
        ret
    }
}

impl Default for AvlSet {
    fn default() -> Self {
        Self::new()
    }
}
