use std::fmt::Debug;
use std::marker::PhantomData;

// Traits bound
pub trait KeyComparator<T>: Clone + Debug {
    fn new() -> Self;
    fn less(&self, lhs: &T, rhs: &T) -> bool;
}

pub trait AvlParams: Clone + Debug {
    type KeyType: Debug;
    type KeyCompareType: KeyComparator<Self::KeyType>;
    /// Run a full invariant check after every successful insert or remove.
    const SELF_VERIFY: bool;
}

pub struct _AvlTree<TKey: Debug, TCompare, const VERIFY: bool> {
    _phantom_key: PhantomData<TKey>,
    _phantom_compare: PhantomData<TCompare>,
}

impl<TKey: Debug, TCompare, const VERIFY: bool> Clone for _AvlTree<TKey, TCompare, VERIFY> {
    fn clone(&self) -> Self {
        Self {
            _phantom_key: PhantomData,
            _phantom_compare: PhantomData,
        }
    }
}

impl<TKey: Debug, TCompare, const VERIFY: bool> Debug for _AvlTree<TKey, TCompare, VERIFY> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("_AvlTree")
            .field("self_verify", &VERIFY)
            .finish()
    }
}

impl<TKey: Debug, TCompare: KeyComparator<TKey>, const VERIFY: bool> AvlParams
    for _AvlTree<TKey, TCompare, VERIFY>
{
    type KeyType = TKey;
    type KeyCompareType = TCompare;
    const SELF_VERIFY: bool = VERIFY;
}

#[cfg(test)]
#[test]
fn test_avl_traits() {
    use super::{DefaultAvlConfig, DefaultKeyComparator, VerifiedAvlConfig};

    assert!(!DefaultAvlConfig::<u64>::SELF_VERIFY);
    assert!(VerifiedAvlConfig::<u64>::SELF_VERIFY);

    let cmp = DefaultKeyComparator::<u64>::new();
    assert!(cmp.less(&1, &2));
    assert!(!cmp.less(&2, &2));
    assert!(!cmp.less(&3, &2));
}
