use std::fmt::Debug;

use bitmask_enum::bitmask;

use super::node::{balance_factor, Link};

// What a single balance step did to the slot it was given.
#[bitmask(u8)]
pub enum BalanceResultFlags {
    Ok = 0,
    RotateLeft = 1,
    RotateRight = 2,
    Double = 4,
}

/// Right rotation around the node in `slot`; its left child becomes the
/// subtree root. Panics if the slot or the left child is empty.
pub(crate) fn rotate_right<K: Debug>(slot: &mut Link<K>) {
    let mut node = slot.take().expect("rotate_right on an empty slot");
    let mut pivot = node
        .left
        .take()
        .expect("rotate_right requires a left child");

    log::debug!("rotate_right: {:?} over {:?}", pivot.key, node.key);

    node.left = pivot.right.take();
    node.update_height();
    pivot.right = Some(node);
    pivot.update_height();

    *slot = Some(pivot);
}

/// Mirror of `rotate_right`, pivoting on the right child.
pub(crate) fn rotate_left<K: Debug>(slot: &mut Link<K>) {
    let mut node = slot.take().expect("rotate_left on an empty slot");
    let mut pivot = node
        .right
        .take()
        .expect("rotate_left requires a right child");

    log::debug!("rotate_left: {:?} over {:?}", pivot.key, node.key);

    node.right = pivot.left.take();
    node.update_height();
    pivot.left = Some(node);
    pivot.update_height();

    *slot = Some(pivot);
}

/// Refresh the height of the node in `slot` and restore its balance with at
/// most one single or double rotation. Children must already be balanced
/// with correct cached heights.
pub(crate) fn balance<K: Debug>(slot: &mut Link<K>) -> BalanceResultFlags {
    let node = match slot.as_mut() {
        Some(node) => node,
        None => return BalanceResultFlags::Ok,
    };

    node.update_height();
    let factor = node.balance_factor();
    debug_assert!(
        factor.abs() <= 2,
        "balance factor {} at {:?} is out of reach for a single step",
        factor,
        node.key
    );

    if factor > 1 {
        if balance_factor(&node.left) >= 0 {
            rotate_right(slot);
            BalanceResultFlags::RotateRight
        } else {
            rotate_left(&mut node.left);
            rotate_right(slot);
            BalanceResultFlags::RotateLeft
                | BalanceResultFlags::RotateRight
                | BalanceResultFlags::Double
        }
    } else if factor < -1 {
        if balance_factor(&node.right) <= 0 {
            rotate_left(slot);
            BalanceResultFlags::RotateLeft
        } else {
            rotate_right(&mut node.right);
            rotate_left(slot);
            BalanceResultFlags::RotateRight
                | BalanceResultFlags::RotateLeft
                | BalanceResultFlags::Double
        }
    } else {
        BalanceResultFlags::Ok
    }
}
