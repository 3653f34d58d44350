//! The storage unit of the tree. A `Node` owns its children outright so the
//! whole set is a plain tree of `Box`es with no parent pointers.

/// An owned, possibly empty, subtree.
pub(crate) type Link<K> = Option<Box<Node<K>>>;

pub(crate) struct Node<K> {
    pub(crate) key: K,
    pub(crate) left: Link<K>,
    pub(crate) right: Link<K>,

    /// How far this node is from the root. The root has a height of 1.
    pub(crate) height: usize,

    /// Positive when the node leans left, negative when it leans right. While
    /// inserting this counts descents through the node; after a rebuild it only
    /// records which single child (if any) the node has.
    pub(crate) balance_factor: isize,
}

impl<K> Node<K> {
    /// Construct a childless `Node` sitting `height` levels down the tree.
    pub(crate) fn leaf(key: K, height: usize) -> Box<Self> {
        Box::new(Self {
            key,
            left: None,
            right: None,
            height,
            balance_factor: 0,
        })
    }

    pub(crate) fn left(&self) -> Option<&Self> {
        self.left.as_deref()
    }

    pub(crate) fn right(&self) -> Option<&Self> {
        self.right.as_deref()
    }

    /// Builds a minimum height subtree out of the next `len` keys of `keys`,
    /// which must be ascending. The median of the span becomes the subtree
    /// root, picking the lower of the two middles for even spans, and each half
    /// is built the same way one level further down.
    ///
    /// Keys are pulled in order: the left half is built before the median is
    /// taken, so nothing has to be cloned or indexed.
    pub(crate) fn build_balanced<I>(keys: &mut I, len: usize, height: usize) -> Link<K>
    where
        I: Iterator<Item = K>,
    {
        if len == 0 {
            return None;
        }

        // `floor((first + last) / 2)` relative to the start of the span.
        let mid = (len - 1) / 2;
        let left = Self::build_balanced(keys, mid, height + 1);
        let key = keys.next()?;
        let right = Self::build_balanced(keys, len - mid - 1, height + 1);

        let balance_factor = match (&left, &right) {
            (Some(_), None) => 1,
            (None, Some(_)) => -1,
            _ => 0,
        };

        Some(Box::new(Self {
            key,
            left,
            right,
            height,
            balance_factor,
        }))
    }
}
