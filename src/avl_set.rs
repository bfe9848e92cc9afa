use crate::avl_base::{
    avl::AvlTree, avl_traits::AvlParams, iter::AvlIterator, DefaultAvlConfig,
};

pub struct AvlSet<T: AvlParams> {
    _tree: AvlTree<T>,
}

impl<T: AvlParams> AvlSet<T> {
    pub fn new() -> Self {
        Self {
            _tree: AvlTree::new(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self._tree.is_empty()
    }

    pub fn len(&self) -> usize {
        self._tree.len()
    }

    pub fn contains(&self, key: &T::KeyType) -> bool {
        self._tree.contains(key)
    }

    /// Returns `false` and leaves the set alone if the key is already present.
    pub fn insert(&mut self, key: T::KeyType) -> bool {
        self._tree.insert(key).is_ok()
    }

    /// Returns `false` if the key was not present.
    pub fn remove(&mut self, key: &T::KeyType) -> bool {
        self._tree.remove(key).is_ok()
    }

    pub fn first(&self) -> Option<&T::KeyType> {
        self._tree.min()
    }

    pub fn last(&self) -> Option<&T::KeyType> {
        self._tree.max()
    }

    pub fn clear(&mut self) {
        self._tree.clear();
    }

    pub fn iter(&self) -> AvlIterator<'_, T::KeyType> {
        self._tree.iter()
    }

    pub fn as_tree(&self) -> &AvlTree<T> {
        &self._tree
    }
}

impl<T: AvlParams> Default for AvlSet<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: AvlParams> std::fmt::Debug for AvlSet<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_set().entries(self.iter()).finish()
    }
}

impl<T: AvlParams> Extend<T::KeyType> for AvlSet<T> {
    fn extend<I: IntoIterator<Item = T::KeyType>>(&mut self, iter: I) {
        for key in iter {
            self.insert(key);
        }
    }
}

impl<T: AvlParams> FromIterator<T::KeyType> for AvlSet<T> {
    fn from_iter<I: IntoIterator<Item = T::KeyType>>(iter: I) -> Self {
        let mut set = Self::new();
        set.extend(iter);
        set
    }
}

impl<'a, T: AvlParams> IntoIterator for &'a AvlSet<T> {
    type Item = &'a T::KeyType;
    type IntoIter = AvlIterator<'a, T::KeyType>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

pub type DefaultAvlSet<K> = AvlSet<DefaultAvlConfig<K>>;
