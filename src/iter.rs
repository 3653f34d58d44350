//! In-order iterators over an [`OrderedSet`][crate::OrderedSet].
//!
//! Both iterators walk the whole tree once when they are created and then hand
//! out keys from that snapshot, smallest first. The walk keeps its own stack of
//! pending nodes rather than recursing, so a set built from sorted input in
//! plain mode (one long chain) can be traversed no matter how tall it gets.

use std::iter::FusedIterator;
use std::vec;

use crate::error::{Error, Result};
use crate::node::{Link, Node};

/// A borrowing iterator over the keys of a set in ascending order.
///
/// # Examples
///
/// ```
/// use bstset::OrderedSet;
///
/// let mut set = OrderedSet::new();
/// for key in [3, 1, 2] {
///     set.insert(key).unwrap();
/// }
///
/// let mut iter = set.iter();
/// assert!(iter.has_next());
/// assert_eq!(iter.collect::<Vec<_>>(), [&1, &2, &3]);
/// ```
pub struct Iter<'a, K> {
    keys: vec::IntoIter<&'a K>,
}

impl<'a, K> Iter<'a, K> {
    pub(crate) fn new(root: Option<&'a Node<K>>, len: usize) -> Self {
        let mut keys = Vec::with_capacity(len);
        let mut pending = Vec::new();
        let mut current = root;

        loop {
            // Push the left spine, then unwind one node and move to its right.
            while let Some(node) = current {
                pending.push(node);
                current = node.left();
            }
            let Some(node) = pending.pop() else {
                break;
            };
            keys.push(&node.key);
            current = node.right();
        }

        Self {
            keys: keys.into_iter(),
        }
    }

    /// Whether another key is waiting to be returned.
    pub fn has_next(&self) -> bool {
        self.keys.len() > 0
    }

    /// Like [`Iterator::next`] but reports exhaustion as
    /// [`Error::EndOfSequence`].
    ///
    /// # Examples
    ///
    /// ```
    /// use bstset::{Error, OrderedSet};
    ///
    /// let mut set = OrderedSet::new();
    /// set.insert(7).unwrap();
    ///
    /// let mut iter = set.iter();
    /// assert_eq!(iter.try_next(), Ok(&7));
    /// assert_eq!(iter.try_next(), Err(Error::EndOfSequence));
    /// ```
    pub fn try_next(&mut self) -> Result<&'a K> {
        self.keys.next().ok_or(Error::EndOfSequence)
    }
}

impl<'a, K> Iterator for Iter<'a, K> {
    type Item = &'a K;

    fn next(&mut self) -> Option<Self::Item> {
        self.keys.next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.keys.size_hint()
    }
}

impl<K> ExactSizeIterator for Iter<'_, K> {}
impl<K> FusedIterator for Iter<'_, K> {}

/// An owning iterator over the keys of a set in ascending order. The nodes are
/// taken apart as the snapshot is built, so the tree is gone once this exists.
pub struct IntoIter<K> {
    keys: vec::IntoIter<K>,
}

impl<K> IntoIter<K> {
    pub(crate) fn new(root: Link<K>, len: usize) -> Self {
        let mut keys = Vec::with_capacity(len);
        let mut pending: Vec<Box<Node<K>>> = Vec::new();
        let mut current = root;

        loop {
            while let Some(mut node) = current {
                current = node.left.take();
                pending.push(node);
            }
            let Some(mut node) = pending.pop() else {
                break;
            };
            current = node.right.take();
            // Both children have been detached so dropping the box here never
            // recurses.
            keys.push(node.key);
        }

        Self {
            keys: keys.into_iter(),
        }
    }

    /// Whether another key is waiting to be returned.
    pub fn has_next(&self) -> bool {
        self.keys.len() > 0
    }

    /// Like [`Iterator::next`] but reports exhaustion as
    /// [`Error::EndOfSequence`].
    pub fn try_next(&mut self) -> Result<K> {
        self.keys.next().ok_or(Error::EndOfSequence)
    }
}

impl<K> Iterator for IntoIter<K> {
    type Item = K;

    fn next(&mut self) -> Option<Self::Item> {
        self.keys.next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.keys.size_hint()
    }
}

impl<K> ExactSizeIterator for IntoIter<K> {}
impl<K> FusedIterator for IntoIter<K> {}
