pub mod avl;
pub mod avl_traits;
pub mod error;
pub mod iter;
pub mod node;
mod rotation;
pub mod tree_stats;

use self::{
    avl::AvlTree,
    avl_traits::{KeyComparator, _AvlTree},
};
use std::{fmt::Debug, marker::PhantomData};

pub use self::rotation::BalanceResultFlags;

#[derive(Debug)]
pub struct DefaultKeyComparator<T> {
    _t: PhantomData<T>,
}

impl<T> Clone for DefaultKeyComparator<T> {
    fn clone(&self) -> Self {
        Self { _t: PhantomData }
    }
}

impl<T> KeyComparator<T> for DefaultKeyComparator<T>
where
    T: Ord + Debug,
{
    fn new() -> Self {
        Self { _t: PhantomData }
    }
    fn less(&self, lhs: &T, rhs: &T) -> bool {
        lhs < rhs
    }
}

pub type DefaultAvlConfig<K> = _AvlTree<K, DefaultKeyComparator<K>, false>;
pub type VerifiedAvlConfig<K> = _AvlTree<K, DefaultKeyComparator<K>, true>;
pub type DefaultAvlTree<K> = AvlTree<DefaultAvlConfig<K>>;
pub type VerifiedAvlTree<K> = AvlTree<VerifiedAvlConfig<K>>;
