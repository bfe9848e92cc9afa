use std::fmt::{self, Debug, Display};

use super::{
    avl_traits::{AvlParams, KeyComparator},
    error::AvlError,
    iter::{AvlIterator, LevelOrderIterator},
    node::{height, Link, Node},
    rotation::balance,
    tree_stats::TreeStats,
};

pub struct AvlTree<T: AvlParams> {
    root_: Link<T::KeyType>,
    stats_: TreeStats,
    key_less: T::KeyCompareType,
}

/// Convenient Key Comparison Functions Generated From key_less
impl<T: AvlParams> AvlTree<T> {
    pub fn key_comp(&self) -> &T::KeyCompareType {
        &self.key_less
    }

    fn key_less(&self, a: &T::KeyType, b: &T::KeyType) -> bool {
        self.key_less.less(a, b)
    }
}

impl<T: AvlParams> AvlTree<T> {
    pub fn new() -> Self {
        Self {
            root_: None,
            stats_: TreeStats::new(),
            key_less: T::KeyCompareType::new(),
        }
    }

    pub fn clear(&mut self) {
        log::debug!("AvlTree::clear on tree size {}", self.len());
        self.root_ = None;
        self.stats_.size = 0;
    }
}

impl<T: AvlParams> Default for AvlTree<T> {
    fn default() -> Self {
        Self::new()
    }
}

/// Access Functions to the item count and shape
impl<T: AvlParams> AvlTree<T> {
    pub fn len(&self) -> usize {
        self.stats_.size
    }

    pub fn is_empty(&self) -> bool {
        self.root_.is_none()
    }

    /// Height of the whole tree: -1 when empty, 0 for a single node.
    pub fn height(&self) -> i32 {
        height(&self.root_)
    }

    pub fn root(&self) -> Option<&Node<T::KeyType>> {
        self.root_.as_deref()
    }

    pub fn get_stats(&self) -> &TreeStats {
        &self.stats_
    }

    pub fn reset_rotations(&mut self) {
        self.stats_.reset_rotations();
    }
}

/// Lookup
impl<T: AvlParams> AvlTree<T> {
    fn find(&self, key: &T::KeyType) -> Option<&Node<T::KeyType>> {
        let mut curr = self.root_.as_deref();
        while let Some(node) = curr {
            if self.key_less(key, &node.key) {
                curr = node.left();
            } else if self.key_less(&node.key, key) {
                curr = node.right();
            } else {
                return Some(node);
            }
        }
        None
    }

    pub fn contains(&self, key: &T::KeyType) -> bool {
        self.find(key).is_some()
    }

    /// The stored key equal to `key`, if any.
    pub fn get(&self, key: &T::KeyType) -> Option<&T::KeyType> {
        self.find(key).map(|n| n.key())
    }

    pub fn min(&self) -> Option<&T::KeyType> {
        let mut node = self.root_.as_deref()?;
        while let Some(left) = node.left() {
            node = left;
        }
        Some(node.key())
    }

    pub fn max(&self) -> Option<&T::KeyType> {
        let mut node = self.root_.as_deref()?;
        while let Some(right) = node.right() {
            node = right;
        }
        Some(node.key())
    }

    /// Keys in ascending order.
    pub fn iter(&self) -> AvlIterator<'_, T::KeyType> {
        AvlIterator::new(self.root_.as_deref(), self.len())
    }

    /// Keys in breadth-first order, starting at the root.
    pub fn level_order(&self) -> LevelOrderIterator<'_, T::KeyType> {
        LevelOrderIterator::new(self.root_.as_deref())
    }
}

/// Insert
impl<T: AvlParams> AvlTree<T> {
    pub fn insert(&mut self, key: T::KeyType) -> Result<(), AvlError> {
        log::debug!("AvlTree::insert({:?}) on tree size {}", key, self.len());
        if self.contains(&key) {
            log::debug!("Key {:?} already exists, insert rejected.", key);
            return Err(AvlError::DuplicateKey);
        }

        Self::insert_descend(&self.key_less, &mut self.stats_, &mut self.root_, key);
        self.stats_.size += 1;

        if T::SELF_VERIFY {
            self.verify();
        }
        Ok(())
    }

    fn insert_descend(
        key_less: &T::KeyCompareType,
        stats: &mut TreeStats,
        slot: &mut Link<T::KeyType>,
        key: T::KeyType,
    ) {
        let node = match slot.as_mut() {
            Some(node) => node,
            None => {
                log::trace!("insert_descend: new leaf {:?}", key);
                *slot = Some(Node::new_leaf(key));
                return;
            }
        };

        if key_less.less(&key, &node.key) {
            Self::insert_descend(key_less, stats, &mut node.left, key);
        } else {
            debug_assert!(
                key_less.less(&node.key, &key),
                "duplicate key {:?} reached insert_descend",
                key
            );
            Self::insert_descend(key_less, stats, &mut node.right, key);
        }

        stats.record(balance(slot));
    }
}

/// Erase
impl<T: AvlParams> AvlTree<T> {
    pub fn remove(&mut self, key: &T::KeyType) -> Result<(), AvlError> {
        log::debug!("AvlTree::remove({:?}) on tree size {}", key, self.len());
        if !self.contains(key) {
            log::debug!("Could not find key {:?} to remove.", key);
            return Err(AvlError::KeyNotFound);
        }

        Self::remove_descend(&self.key_less, &mut self.stats_, &mut self.root_, key);
        self.stats_.size -= 1;

        if T::SELF_VERIFY {
            self.verify();
        }
        Ok(())
    }

    fn remove_descend(
        key_less: &T::KeyCompareType,
        stats: &mut TreeStats,
        slot: &mut Link<T::KeyType>,
        key: &T::KeyType,
    ) {
        let node = match slot.as_mut() {
            Some(node) => node,
            None => unreachable!("key {:?} vanished during remove_descend", key),
        };

        if key_less.less(key, &node.key) {
            Self::remove_descend(key_less, stats, &mut node.left, key);
        } else if key_less.less(&node.key, key) {
            Self::remove_descend(key_less, stats, &mut node.right, key);
        } else if node.left.is_some() && node.right.is_some() {
            // The node stays; it takes over the successor's key.
            if let Some(successor) = Self::take_min(stats, &mut node.right) {
                log::trace!(
                    "remove_descend: {:?} replaced by successor {:?}",
                    node.key,
                    successor.key
                );
                node.key = successor.key;
            }
        } else if let Some(mut removed) = slot.take() {
            log::trace!("remove_descend: unlinking {:?}", removed.key);
            *slot = removed.left.take().or_else(|| removed.right.take());
        }

        stats.record(balance(slot));
    }

    /// Unlink the leftmost node under `slot`, splicing its right child into
    /// its place, and rebalance every slot on the way back up.
    fn take_min(
        stats: &mut TreeStats,
        slot: &mut Link<T::KeyType>,
    ) -> Option<Box<Node<T::KeyType>>> {
        let node = slot.as_mut()?;
        let min = if node.left.is_some() {
            Self::take_min(stats, &mut node.left)
        } else {
            let mut min = slot.take()?;
            *slot = min.right.take();
            Some(min)
        };

        stats.record(balance(slot));
        min
    }
}

/// Self verification
impl<T: AvlParams> AvlTree<T> {
    /// Walk the whole tree and panic on the first broken invariant: key
    /// order, cached heights, balance factors or the stored size.
    pub fn verify(&self) {
        let (_, count) = self.verify_node(self.root_.as_deref(), None, None);
        assert_eq!(
            count, self.stats_.size,
            "stored size {} disagrees with {} reachable nodes",
            self.stats_.size, count
        );
    }

    fn verify_node<'a>(
        &self,
        node: Option<&'a Node<T::KeyType>>,
        lower: Option<&'a T::KeyType>,
        upper: Option<&'a T::KeyType>,
    ) -> (i32, usize) {
        let n = match node {
            Some(n) => n,
            None => return (-1, 0),
        };

        if let Some(lo) = lower {
            assert!(
                self.key_less(lo, &n.key),
                "key {:?} is not above its lower bound {:?}",
                n.key,
                lo
            );
        }
        if let Some(hi) = upper {
            assert!(
                self.key_less(&n.key, hi),
                "key {:?} is not below its upper bound {:?}",
                n.key,
                hi
            );
        }

        let (lh, lcount) = self.verify_node(n.left(), lower, Some(&n.key));
        let (rh, rcount) = self.verify_node(n.right(), Some(&n.key), upper);
        let h = 1 + lh.max(rh);

        assert_eq!(n.height, h, "cached height of {:?} is stale", n.key);
        assert!(
            (lh - rh).abs() <= 1,
            "node {:?} is out of balance: left {} right {}",
            n.key,
            lh,
            rh
        );

        (h, lcount + rcount + 1)
    }
}

/// Debug
impl<T: AvlParams> AvlTree<T> {
    fn print_node(
        f: &mut fmt::Formatter<'_>,
        node: &Node<T::KeyType>,
        side: &str,
        depth: usize,
    ) -> fmt::Result {
        for _ in 0..depth {
            write!(f, "  ")?;
        }
        writeln!(
            f,
            "{} {:?} height {} balance {}",
            side,
            node.key,
            node.height,
            node.balance_factor()
        )?;

        if let Some(left) = node.left() {
            Self::print_node(f, left, "L", depth + 1)?;
        }
        if let Some(right) = node.right() {
            Self::print_node(f, right, "R", depth + 1)?;
        }

        Ok(())
    }
}

impl<T: AvlParams> Debug for AvlTree<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(root) = self.root() {
            Self::print_node(f, root, "*", 0)?;
        }
        write!(f, "{:?}", self.stats_)
    }
}

/// Display: level-order dump
impl<T: AvlParams> Display for AvlTree<T>
where
    T::KeyType: Display,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, key) in self.level_order().enumerate() {
            if i > 0 {
                write!(f, "  ")?;
            }
            write!(f, "{}", key)?;
        }
        Ok(())
    }
}

impl<T: AvlParams> Clone for AvlTree<T>
where
    T::KeyType: Clone,
{
    fn clone(&self) -> Self {
        Self {
            root_: self.root_.clone(),
            stats_: self.stats_.clone(),
            key_less: self.key_less.clone(),
        }
    }
}

/// Structural equality: same keys in the same shape with the same heights.
impl<T: AvlParams> PartialEq for AvlTree<T>
where
    T::KeyType: PartialEq,
{
    fn eq(&self, other: &Self) -> bool {
        self.root_ == other.root_
    }
}

impl<T: AvlParams> Eq for AvlTree<T> where T::KeyType: Eq {}
