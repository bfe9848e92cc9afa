use std::{collections::VecDeque, iter::FusedIterator};

use super::node::Node;

/// In-order iterator, ascending by key.
#[derive(Clone, Debug)]
pub struct AvlIterator<'a, K> {
    stack: Vec<&'a Node<K>>,
    remaining: usize,
}

impl<'a, K> AvlIterator<'a, K> {
    pub(crate) fn new(root: Option<&'a Node<K>>, size: usize) -> Self {
        let mut it = Self {
            stack: Vec::new(),
            remaining: size,
        };
        it.push_left_spine(root);
        it
    }

    fn push_left_spine(&mut self, mut node: Option<&'a Node<K>>) {
        while let Some(n) = node {
            self.stack.push(n);
            node = n.left();
        }
    }
}

impl<'a, K> Iterator for AvlIterator<'a, K> {
    type Item = &'a K;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.stack.pop()?;
        self.push_left_spine(node.right());
        self.remaining -= 1;
        Some(node.key())
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<'a, K> ExactSizeIterator for AvlIterator<'a, K> {}
impl<'a, K> FusedIterator for AvlIterator<'a, K> {}

/// Breadth-first iterator: root first, then each level left to right.
#[derive(Clone, Debug)]
pub struct LevelOrderIterator<'a, K> {
    queue: VecDeque<&'a Node<K>>,
}

impl<'a, K> LevelOrderIterator<'a, K> {
    pub(crate) fn new(root: Option<&'a Node<K>>) -> Self {
        Self {
            queue: root.into_iter().collect(),
        }
    }
}

impl<'a, K> Iterator for LevelOrderIterator<'a, K> {
    type Item = &'a K;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.queue.pop_front()?;
        self.queue.extend(node.left());
        self.queue.extend(node.right());
        Some(node.key())
    }
}

impl<'a, K> FusedIterator for LevelOrderIterator<'a, K> {}
