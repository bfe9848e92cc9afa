/// Owning child slot. `None` is the empty subtree.
pub(crate) type Link<K> = Option<Box<Node<K>>>;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Node<K> {
    pub(crate) key: K,
    pub(crate) left: Link<K>,
    pub(crate) right: Link<K>,
    pub(crate) height: i32,
}

/// Cached height of a slot, -1 when empty.
#[inline]
pub(crate) fn height<K>(link: &Link<K>) -> i32 {
    link.as_ref().map_or(-1, |n| n.height)
}

/// Balance factor of a slot, 0 when empty.
#[inline]
pub(crate) fn balance_factor<K>(link: &Link<K>) -> i32 {
    link.as_ref().map_or(0, |n| n.balance_factor())
}

impl<K> Node<K> {
    pub(crate) fn new_leaf(key: K) -> Box<Self> {
        Box::new(Self {
            key,
            left: None,
            right: None,
            height: 0,
        })
    }

    #[inline]
    pub fn key(&self) -> &K {
        &self.key
    }

    #[inline]
    pub fn left(&self) -> Option<&Node<K>> {
        self.left.as_deref()
    }

    #[inline]
    pub fn right(&self) -> Option<&Node<K>> {
        self.right.as_deref()
    }

    /// Cached height of the subtree rooted here. A leaf has height 0.
    #[inline]
    pub fn height(&self) -> i32 {
        self.height
    }

    /// Left height minus right height, read from the children's caches.
    #[inline]
    pub fn balance_factor(&self) -> i32 {
        height(&self.left) - height(&self.right)
    }

    #[inline]
    pub fn is_leaf(&self) -> bool {
        self.left.is_none() && self.right.is_none()
    }

    /// Must run after any change to `left` or `right`, before the parent
    /// reads this node's height.
    #[inline]
    pub(crate) fn update_height(&mut self) {
        self.height = 1 + height(&self.left).max(height(&self.right));
    }
}
