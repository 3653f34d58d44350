//! A set of ordered keys stored in a Binary Search Tree that can rebuild itself
//! when it gets lopsided.
//!
//! The tree does not rotate. Instead every node carries a balance factor that
//! is nudged each time an insert passes through it: `+1` for going left, `-1`
//! for going right. When a set is created with a positive threshold and any
//! balance factor reaches that magnitude, the whole tree is torn down into a
//! sorted list of keys and rebuilt with the median of each span at the top.
//!
//! # Examples
//!
//! ```
//! use bstset::{Error, OrderedSet};
//!
//! // A threshold of 0 means "never rebalance".
//! let mut plain = OrderedSet::with_threshold(0);
//! // Anything positive turns rebalancing on.
//! let mut balanced = OrderedSet::with_threshold(2);
//!
//! for key in 0..10 {
//!     plain.insert(key).unwrap();
//!     balanced.insert(key).unwrap();
//! }
//!
//! // Sorted input makes a chain out of a plain tree...
//! assert_eq!(plain.height(), 10);
//! // ...but not out of a balanced one.
//! assert!(balanced.height() <= 4);
//!
//! // Keys can only be added once.
//! assert_eq!(balanced.insert(3), Err(Error::DuplicateKey));
//! assert_eq!(balanced.len(), 10);
//!
//! // Ranges include the lower bound and exclude the upper one.
//! assert_eq!(balanced.range(&2, &5).unwrap(), [&2, &3, &4]);
//! ```

use std::cmp::Ordering;
use std::fmt;

use log::{debug, trace};

use crate::display::{TreeDisplay, Walk};
use crate::error::{Error, Result};
use crate::iter::{IntoIter, Iter};
use crate::node::{Link, Node};

/// An ordered set of unique keys. See the [module documentation][self] for an
/// overview.
pub struct OrderedSet<K> {
    root: Link<K>,
    len: usize,

    /// `<= 0` never rebalances, `> 0` rebuilds the tree once any balance factor
    /// reaches this magnitude.
    threshold: isize,

    /// Set by an insert that pushed a balance factor to the threshold. Only
    /// ever `true` between that insert's descent and the rebuild it triggers.
    needs_rebalance: bool,
}

impl<K> Default for OrderedSet<K> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K> Drop for OrderedSet<K> {
    fn drop(&mut self) {
        self.dismantle();
    }
}

impl<K> fmt::Debug for OrderedSet<K>
where
    K: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.iter()).finish()
    }
}

impl<K> OrderedSet<K> {
    /// Generates a new, empty set that never rebalances.
    pub fn new() -> Self {
        Self::with_threshold(0)
    }

    /// Generates a new, empty set. If `threshold` is positive the set rebuilds
    /// itself whenever an insert pushes some node's balance factor to
    /// `threshold` or beyond; otherwise it behaves as a plain BST.
    pub fn with_threshold(threshold: isize) -> Self {
        Self {
            root: None,
            len: 0,
            threshold,
            needs_rebalance: false,
        }
    }

    /// The threshold this set was created with.
    pub fn threshold(&self) -> isize {
        self.threshold
    }

    /// Whether inserts may trigger a rebuild.
    pub fn is_balancing(&self) -> bool {
        self.threshold > 0
    }

    /// How many keys are stored.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Whether no keys are stored.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// The number of levels in the tree, `0` when the set is empty.
    pub fn height(&self) -> usize {
        let mut height = 0;
        let mut pending: Vec<&Node<K>> = self.root.as_deref().into_iter().collect();
        while let Some(node) = pending.pop() {
            height = height.max(node.height);
            pending.extend(node.left());
            pending.extend(node.right());
        }
        height
    }

    /// Iterates over the keys in ascending order.
    ///
    /// The order is captured when the iterator is made, and the set cannot be
    /// changed while the iterator is alive.
    pub fn iter(&self) -> Iter<'_, K> {
        Iter::new(self.root.as_deref(), self.len)
    }

    /// Removes every key.
    ///
    /// # Examples
    ///
    /// ```
    /// use bstset::OrderedSet;
    ///
    /// let mut set = OrderedSet::new();
    /// set.insert("a").unwrap();
    /// set.clear();
    ///
    /// assert!(set.is_empty());
    /// assert!(!set.contains(&"a"));
    /// ```
    pub fn clear(&mut self) {
        self.dismantle();
        self.len = 0;
        self.needs_rebalance = false;
    }

    /// Pre-order walk of at most the top `max_levels` levels of the tree,
    /// reporting each node's key, height and balance factor.
    pub fn walk(&self, max_levels: usize) -> Walk<'_, K> {
        Walk::new(self.root.as_deref(), max_levels)
    }

    /// Something that prints the top `max_levels` levels of the tree, one node
    /// per line.
    ///
    /// # Examples
    ///
    /// ```
    /// use bstset::OrderedSet;
    ///
    /// let mut set = OrderedSet::new();
    /// for key in [2, 1, 3] {
    ///     set.insert(key).unwrap();
    /// }
    ///
    /// let printed = set.display(2).to_string();
    /// assert!(printed.ends_with("2[1]{0}\n|--1[2]{0}\n|--3[2]{0}\n"));
    /// ```
    pub fn display(&self, max_levels: usize) -> TreeDisplay<'_, K> {
        TreeDisplay::new(self.root.as_deref(), max_levels, self.is_balancing())
    }

    /// Drops every node without recursing, however deep the tree is.
    fn dismantle(&mut self) {
        let mut pending: Vec<Box<Node<K>>> = self.root.take().into_iter().collect();
        while let Some(mut node) = pending.pop() {
            pending.extend(node.left.take());
            pending.extend(node.right.take());
        }
    }
}

impl<K> OrderedSet<K>
where
    K: Ord,
{
    /// Adds `key` to the set.
    ///
    /// Every node passed on the way down has its balance factor moved towards
    /// the side taken. If that leaves one of them at or past the threshold the
    /// tree is rebuilt before this returns.
    ///
    /// # Errors
    ///
    /// [`Error::DuplicateKey`] if an equal key is already stored. The set is
    /// untouched in that case.
    ///
    /// # Examples
    ///
    /// ```
    /// use bstset::{Error, OrderedSet};
    ///
    /// let mut set = OrderedSet::new();
    ///
    /// assert_eq!(set.insert(5), Ok(()));
    /// assert_eq!(set.insert(5), Err(Error::DuplicateKey));
    /// assert_eq!(set.len(), 1);
    /// ```
    pub fn insert(&mut self, key: K) -> Result<()> {
        // Check first so a duplicate never leaves half the path adjusted.
        if self.contains(&key) {
            return Err(Error::DuplicateKey);
        }

        let threshold = self.threshold;
        let mut tripped = false;
        let mut parent_height = 0;
        let mut link = &mut self.root;
        while let Some(node) = link {
            if cfg!(debug_assertions) {
                assert_eq!(node.height, parent_height + 1);
                if let Some(left) = node.left() {
                    assert!(left.key < node.key);
                }
                if let Some(right) = node.right() {
                    assert!(right.key > node.key);
                }
            }
            parent_height = node.height;
            let go_left = key < node.key;
            node.balance_factor += if go_left { 1 } else { -1 };
            tripped |= threshold > 0 && node_tripped(node.balance_factor, threshold);
            link = if go_left {
                &mut node.left
            } else {
                &mut node.right
            };
        }
        *link = Some(Node::leaf(key, parent_height + 1));
        self.len += 1;
        trace!("inserted key at height {}", parent_height + 1);

        if tripped {
            debug!(
                "insert pushed a balance factor to the threshold of {}",
                threshold
            );
            self.needs_rebalance = true;
        }
        if self.needs_rebalance {
            self.rebalance();
        }
        Ok(())
    }

    /// Whether an equal key is stored.
    ///
    /// # Examples
    ///
    /// ```
    /// use bstset::OrderedSet;
    ///
    /// let mut set = OrderedSet::new();
    /// set.insert(1).unwrap();
    ///
    /// assert!(set.contains(&1));
    /// assert!(!set.contains(&42));
    /// ```
    pub fn contains(&self, key: &K) -> bool {
        let mut current = self.root.as_deref();
        while let Some(node) = current {
            current = match key.cmp(&node.key) {
                Ordering::Less => node.left(),
                Ordering::Equal => return true,
                Ordering::Greater => node.right(),
            };
        }
        false
    }

    /// All keys `k` with `min <= k < max`, smallest first.
    ///
    /// Subtrees that cannot hold such a key are skipped: a left subtree is only
    /// entered when its parent is above `min`, and the walk stops at the first
    /// key that reaches `max`.
    ///
    /// # Errors
    ///
    /// [`Error::InvalidArgument`] if `min > max`. Equal bounds are fine and
    /// describe an empty range.
    ///
    /// # Examples
    ///
    /// ```
    /// use bstset::OrderedSet;
    ///
    /// let mut set = OrderedSet::new();
    /// for key in [0, 2, 4, 6, 8, 1, 3, 5, 7, 9] {
    ///     set.insert(key).unwrap();
    /// }
    ///
    /// assert_eq!(set.range(&2, &8).unwrap(), [&2, &3, &4, &5, &6, &7]);
    /// assert!(set.range(&4, &4).unwrap().is_empty());
    /// assert!(set.range(&8, &2).is_err());
    /// ```
    pub fn range(&self, min: &K, max: &K) -> Result<Vec<&K>> {
        if min > max {
            return Err(Error::InvalidArgument(
                "range lower bound is greater than its upper bound",
            ));
        }

        let mut keys = Vec::new();
        let mut pending = Vec::new();
        let mut current = self.root.as_deref();
        loop {
            while let Some(node) = current {
                pending.push(node);
                // Everything to the left is smaller than `node.key`.
                current = if node.key > *min { node.left() } else { None };
            }
            let Some(node) = pending.pop() else {
                break;
            };
            if node.key >= *max {
                break;
            }
            if node.key >= *min {
                keys.push(&node.key);
            }
            current = node.right();
        }

        Ok(keys)
    }

    /// Rebuilds the tree so it is as short as possible. The keys are pulled out
    /// in order and the median of each span is made the root of that span's
    /// subtree.
    ///
    /// Afterwards every balance factor is `1` (left child only), `-1` (right
    /// child only) or `0`. Inserts in balanced sets call this on their own; in
    /// plain sets it only happens when called directly.
    ///
    /// # Examples
    ///
    /// ```
    /// use bstset::OrderedSet;
    ///
    /// let mut set = OrderedSet::new();
    /// for key in 0..7 {
    ///     set.insert(key).unwrap();
    /// }
    /// assert_eq!(set.height(), 7);
    ///
    /// set.rebalance();
    /// assert_eq!(set.height(), 3);
    /// assert!(set.iter().copied().eq(0..7));
    /// ```
    pub fn rebalance(&mut self) {
        let mut keys = IntoIter::new(self.root.take(), self.len);
        self.root = Node::build_balanced(&mut keys, self.len, 1);
        self.needs_rebalance = false;
        debug!(
            "rebuilt tree of {} keys to height {}",
            self.len,
            self.height()
        );
    }

    /// Asserts the tree is ordered, `len` is right and (for balanced sets) no
    /// node is at the threshold.
    #[cfg(test)]
    fn check_invariants(&self) {
        let mut count = 0;
        let mut previous: Option<&K> = None;
        for key in self.iter() {
            if let Some(previous) = previous {
                assert!(previous < key);
            }
            previous = Some(key);
            count += 1;
        }
        assert_eq!(count, self.len);

        // A rebuild of two or more keys leaves single child nodes at +-1, so a
        // threshold of 1 can never be satisfied.
        if self.threshold > 1 {
            assert!(self
                .walk(usize::MAX)
                .all(|node| !node_tripped(node.balance_factor, self.threshold)));
        }
    }
}

fn node_tripped(balance_factor: isize, threshold: isize) -> bool {
    balance_factor.abs() >= threshold
}

impl<K> IntoIterator for OrderedSet<K> {
    type Item = K;
    type IntoIter = IntoIter<K>;

    fn into_iter(mut self) -> Self::IntoIter {
        IntoIter::new(self.root.take(), self.len)
    }
}

impl<'a, K> IntoIterator for &'a OrderedSet<K> {
    type Item = &'a K;
    type IntoIter = Iter<'a, K>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
