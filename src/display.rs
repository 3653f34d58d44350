//! Read-only inspection of a tree's shape, for people rather than programs.
//!
//! Nothing here takes part in keeping the set ordered or balanced; it only
//! reports the heights and balance factors the set has recorded.

use std::fmt;

use crate::node::Node;

/// What [`Walk`] reports about each node it visits.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NodeInfo<'a, K> {
    /// The node's key.
    pub key: &'a K,
    /// The node's recorded distance from the root (the root is 1).
    pub height: usize,
    /// The node's recorded balance factor. Positive leans left.
    pub balance_factor: isize,
    /// How many levels below the root the walk found this node (the root is 0).
    pub depth: usize,
}

/// A depth-limited, pre-order walk of a tree: each node, then its left
/// subtree, then its right subtree. Nodes `max_levels` or more levels below the
/// root are skipped.
///
/// # Examples
///
/// ```
/// use bstset::OrderedSet;
///
/// let mut set = OrderedSet::new();
/// for key in [2, 1, 3, 4] {
///     set.insert(key).unwrap();
/// }
///
/// let keys: Vec<_> = set.walk(2).map(|node| *node.key).collect();
/// assert_eq!(keys, [2, 1, 3]);
/// ```
pub struct Walk<'a, K> {
    pending: Vec<(&'a Node<K>, usize)>,
    max_levels: usize,
}

impl<'a, K> Walk<'a, K> {
    pub(crate) fn new(root: Option<&'a Node<K>>, max_levels: usize) -> Self {
        let pending = match root {
            Some(root) if max_levels > 0 => vec![(root, 0)],
            _ => Vec::new(),
        };
        Self {
            pending,
            max_levels,
        }
    }
}

impl<'a, K> Iterator for Walk<'a, K> {
    type Item = NodeInfo<'a, K>;

    fn next(&mut self) -> Option<Self::Item> {
        let (node, depth) = self.pending.pop()?;
        if depth + 1 < self.max_levels {
            // Right first so the left subtree comes off the stack first.
            self.pending.extend(node.right().map(|n| (n, depth + 1)));
            self.pending.extend(node.left().map(|n| (n, depth + 1)));
        }
        Some(NodeInfo {
            key: &node.key,
            height: node.height,
            balance_factor: node.balance_factor,
            depth,
        })
    }
}

/// Prints the top levels of a tree one node per line as
/// `key[height]{balance_factor}`, indented with one `|--` per level, under a
/// header naming the kind of set.
pub struct TreeDisplay<'a, K> {
    root: Option<&'a Node<K>>,
    max_levels: usize,
    balancing: bool,
}

impl<'a, K> TreeDisplay<'a, K> {
    pub(crate) fn new(root: Option<&'a Node<K>>, max_levels: usize, balancing: bool) -> Self {
        Self {
            root,
            max_levels,
            balancing,
        }
    }
}

impl<K> fmt::Display for TreeDisplay<'_, K>
where
    K: fmt::Display,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = if self.balancing {
            "BSTreeBSet"
        } else {
            "BSTreeSet"
        };
        let title = format!("{} Display", name);
        writeln!(f, "{}{:-<49}", "-".repeat(27), title)?;

        for node in Walk::new(self.root, self.max_levels) {
            writeln!(
                f,
                "{}{}[{}]{{{}}}",
                "|--".repeat(node.depth),
                node.key,
                node.height,
                node.balance_factor
            )?;
        }
        Ok(())
    }
}
