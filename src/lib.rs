//! This crate exposes an ordered set built on a Binary Search Tree (BST) that
//! can optionally rebuild itself when it becomes lopsided.
//!
//! ## Binary Search Tree
//!
//! A Binary Search Tree is a data structure supporting operations to
//! insert and find stored records. BSTs are typically defined
//! recursively using the notion of a `Node`. A `Node` stores a key and will
//! sometimes have child `Node`s. The most important invariants of a BST are:
//!
//! 1. For every `Node` in a BST, all the `Node`s in its left subtree have a
//!    key less than its own key.
//! 2. For every `Node` in a BST, all the `Node`s in its right subtree have a
//!    key greater than its own key.
//!
//! > Note that some `Node`s have no children. These `Node`s are called "leaf nodes".
//!
//! Searching for keys in the tree takes `O(height)` (where `height` is the
//! longest path from the root `Node` to a leaf `Node`). BSTs also naturally
//! support sorted iteration by visiting the left subtree, then the subtree
//! root, then the right subtree.
//!
//! ## Rebuilding instead of rotating
//!
//! Inserting sorted keys into a BST produces a chain with a height equal to
//! the number of keys. Rather than rotating nodes locally like an AVL tree,
//! an [`OrderedSet`] created with a positive threshold watches a per-node
//! balance factor and, once any of them reaches the threshold, rebuilds the
//! entire tree from its sorted keys. See the [`set`] module for details.

#![deny(missing_docs, clippy::clone_on_ref_ptr)]

pub mod display;
pub mod error;
pub mod iter;
mod node;
pub mod set;

pub use display::{NodeInfo, TreeDisplay, Walk};
pub use error::{Error, Result};
pub use iter::{IntoIter, Iter};
pub use set::OrderedSet;
