use std::iter::FusedIterator;
use std::fmt::{Debug, Formatter, Result as FmtResult};

use chunk_pool::ChunkPool;
use oorandom::Rand32;

use crate::{comparator::Ascending, list::SkipList, node::{Link, Node}};


/// An iterator over the values of a [`SkipList`], in sorted order.
///
/// Created by [`SkipList::iter`]. Iteration follows the bottom layer of the list, which holds
/// every value. To start over, get a new iterator from the list.
pub struct Iter<'a, T> {
    pool:      &'a ChunkPool<Node<T>>,
    cursor:    Link,
    remaining: usize,
}

impl<'a, T> Iter<'a, T> {
    #[inline]
    #[must_use]
    pub(crate) const fn new(pool: &'a ChunkPool<Node<T>>, first: Link, len: usize) -> Self {
        Self {
            pool,
            cursor:    first,
            remaining: len,
        }
    }
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        let pool: &'a ChunkPool<Node<T>> = self.pool;
        let node = &pool[self.cursor?];

        self.cursor = node.next(0);
        self.remaining -= 1;
        Some(node.value())
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<T> ExactSizeIterator for Iter<'_, T> {}

impl<T> FusedIterator for Iter<'_, T> {}

impl<T> Clone for Iter<'_, T> {
    #[inline]
    fn clone(&self) -> Self {
        Self {
            pool:      self.pool,
            cursor:    self.cursor,
            remaining: self.remaining,
        }
    }
}

impl<T> Debug for Iter<'_, T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.debug_struct("Iter")
            .field("cursor",    &self.cursor)
            .field("remaining", &self.remaining)
            .finish_non_exhaustive()
    }
}

/// An iterator which moves the values out of a [`SkipList`], in sorted order.
///
/// Created by [`SkipList::into_iter`](IntoIterator::into_iter).
pub struct IntoIter<T, Cmp = Ascending, R = Rand32, const MAX_LAYERS: usize = 20> {
    list: SkipList<T, Cmp, R, MAX_LAYERS>,
}

impl<T, Cmp, R, const MAX_LAYERS: usize> IntoIter<T, Cmp, R, MAX_LAYERS> {
    #[inline]
    #[must_use]
    pub(crate) const fn new(list: SkipList<T, Cmp, R, MAX_LAYERS>) -> Self {
        Self { list }
    }

    /// Recover the list holding the values which have not been iterated over yet.
    #[inline]
    #[must_use]
    pub fn into_list(self) -> SkipList<T, Cmp, R, MAX_LAYERS> {
        self.list
    }
}

impl<T, Cmp, R, const MAX_LAYERS: usize> Iterator for IntoIter<T, Cmp, R, MAX_LAYERS> {
    type Item = T;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        self.list.pop_first()
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.list.len(), Some(self.list.len()))
    }
}

impl<T, Cmp, R, const MAX_LAYERS: usize> ExactSizeIterator for IntoIter<T, Cmp, R, MAX_LAYERS> {}

impl<T, Cmp, R, const MAX_LAYERS: usize> FusedIterator for IntoIter<T, Cmp, R, MAX_LAYERS> {}

impl<T: Debug, Cmp, R, const MAX_LAYERS: usize> Debug for IntoIter<T, Cmp, R, MAX_LAYERS> {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.debug_tuple("IntoIter").field(&self.list).finish()
    }
}
