use chunk_pool::{ChunkId, ChunkPool, PoolConfig, PoolStats};
use oorandom::Rand32;
use tracing::Level as LogLevel;

use crate::{
    comparator::{Ascending, Comparator},
    error::InsertError,
    iter::{IntoIter, Iter},
    layers::{Prng32, SeedablePrng32, random_layer_count},
    node::{Link, Node},
};


/// The default maximum number of layers of a [`SkipList`].
///
/// With this many layers, a list can hold on the order of a million values before its upper
/// layers become too sparse to keep searches logarithmic.
pub const DEFAULT_MAX_LAYERS: usize = 20;

/// The seed used by constructors which are not given one.
pub const DEFAULT_SEED: u64 = 0x_9e37_79b9_7f4a_7c15;


/// A sorted multiset stored in a skiplist, with every node allocated in a [`ChunkPool`].
///
/// Values are ordered by `Cmp`, a [`Comparator`] ([`Ascending`] by default). Values which compare
/// equal may all be inserted; the order among them is unspecified.
///
/// Each node occupies a random number of layers, between `1` and `MAX_LAYERS` (which must be at
/// least `1`). The random source `R` can be any [`Prng32`]; seeding it makes the shape of the
/// list, though never its order, reproducible.
///
/// Nodes are kept in a pool private to each list. Cloning a list copies every value into a new
/// pool, and moving a list (including with [`mem::take`]) moves the pool along with it.
///
/// [`mem::take`]: std::mem::take
pub struct SkipList<T, Cmp = Ascending, R = Rand32, const MAX_LAYERS: usize = 20> {
    cmp:        Cmp,
    prng:       R,
    pool:       ChunkPool<Node<T>>,
    /// The first node on each layer.
    head:       [Link; MAX_LAYERS],
    /// At least the number of layers with any node on them. Never exceeds `MAX_LAYERS`.
    ///
    /// This is not lowered when nodes are removed; it only determines the layer at which
    /// searches start.
    layer_hint: usize,
    len:        usize,
}

// ================================
//  Construction
// ================================

impl<T, Cmp, R, const MAX_LAYERS: usize> SkipList<T, Cmp, R, MAX_LAYERS> {
    const HAS_A_LAYER: () = assert!(MAX_LAYERS >= 1, "a skiplist needs at least one layer");

    /// Create an empty list which orders its values with `cmp` and uses `prng` to choose the
    /// layers of new nodes. Its pool uses the given `config`.
    #[must_use]
    pub fn with_config(cmp: Cmp, prng: R, config: PoolConfig) -> Self {
        // Fails to compile if `MAX_LAYERS` is `0`.
        let () = Self::HAS_A_LAYER;

        Self {
            cmp,
            prng,
            pool:       ChunkPool::new(config),
            head:       [None; MAX_LAYERS],
            layer_hint: 0,
            len:        0,
        }
    }

    /// Create an empty list which orders its values with `cmp` and uses `prng` to choose the
    /// layers of new nodes.
    #[inline]
    #[must_use]
    pub fn with_prng(cmp: Cmp, prng: R) -> Self {
        Self::with_config(cmp, prng, PoolConfig::default())
    }
}

impl<T, Cmp, R: SeedablePrng32, const MAX_LAYERS: usize> SkipList<T, Cmp, R, MAX_LAYERS> {
    /// Create an empty list which orders its values with `cmp`, seeded with [`DEFAULT_SEED`].
    #[inline]
    #[must_use]
    pub fn with_comparator(cmp: Cmp) -> Self {
        Self::with_comparator_seeded(cmp, DEFAULT_SEED)
    }

    #[inline]
    #[must_use]
    pub fn with_comparator_seeded(cmp: Cmp, seed: u64) -> Self {
        Self::with_prng(cmp, R::new_seeded(seed))
    }

    /// Create a list holding `values`, inserted one at a time in the given order.
    #[must_use]
    pub fn from_values<I>(cmp: Cmp, values: I) -> Self
    where
        Cmp: Comparator<T>,
        I:   IntoIterator<Item = T>,
    {
        let mut list = Self::with_comparator(cmp);
        list.extend(values);
        list
    }
}

impl<T, Cmp: Default, R: SeedablePrng32, const MAX_LAYERS: usize> SkipList<T, Cmp, R, MAX_LAYERS> {
    /// Create an empty list with the default comparator, seeded with [`DEFAULT_SEED`].
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::with_comparator(Cmp::default())
    }

    #[inline]
    #[must_use]
    pub fn new_seeded(seed: u64) -> Self {
        Self::with_comparator_seeded(Cmp::default(), seed)
    }
}

// ================================
//  Queries which do not compare
// ================================

impl<T, Cmp, R, const MAX_LAYERS: usize> SkipList<T, Cmp, R, MAX_LAYERS> {
    /// The number of values in the list.
    #[inline]
    #[must_use]
    pub const fn len(&self) -> usize {
        self.len
    }

    #[inline]
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// The layer at which searches start.
    ///
    /// This is at least the number of layers which any node currently occupies, but may be more,
    /// since removing values does not lower it. It is only reset by [`clear`].
    ///
    /// [`clear`]: SkipList::clear
    #[inline]
    #[must_use]
    pub const fn layer_hint(&self) -> usize {
        self.layer_hint
    }

    #[inline]
    #[must_use]
    pub const fn comparator(&self) -> &Cmp {
        &self.cmp
    }

    /// Statistics of the pool holding this list's nodes.
    #[inline]
    #[must_use]
    pub fn pool_stats(&self) -> PoolStats {
        self.pool.stats()
    }

    /// Iterate over the values in sorted order.
    #[inline]
    #[must_use]
    pub fn iter(&self) -> Iter<'_, T> {
        Iter::new(&self.pool, self.head_link(0), self.len)
    }

    /// The first value in sorted order, if the list is nonempty.
    #[inline]
    #[must_use]
    pub fn first(&self) -> Option<&T> {
        self.head_link(0).map(|id| self.pool[id].value())
    }

    /// The last value in sorted order, if the list is nonempty.
    #[must_use]
    pub fn last(&self) -> Option<&T> {
        let mut current = None;

        for level in (0..self.layer_hint).rev() {
            while let Some(next) = self.next_of(current, level) {
                current = Some(next);
            }
        }

        current.map(|id| self.pool[id].value())
    }

    /// Remove and return the first value in sorted order.
    pub fn pop_first(&mut self) -> Option<T> {
        let first = self.head_link(0)?;
        // Every layer of the first node is linked straight from the head.
        Some(self.unlink(first, &[None; MAX_LAYERS]))
    }

    /// Remove every value. The pool keeps its blocks for reuse.
    pub fn clear(&mut self) {
        if self.len != 0 {
            tracing::event!(LogLevel::TRACE, len = self.len, "clearing a skiplist");
        }

        let mut cursor = self.head_link(0);
        while let Some(id) = cursor {
            cursor = self.pool.deallocate(id).next(0);
        }

        self.head = [None; MAX_LAYERS];
        self.layer_hint = 0;
        self.len = 0;
    }
}

// ================================
//  Linking utilities
// ================================

impl<T, Cmp, R, const MAX_LAYERS: usize> SkipList<T, Cmp, R, MAX_LAYERS> {
    #[inline]
    fn head_link(&self, level: usize) -> Link {
        self.head.get(level).copied().flatten()
    }

    /// The successor on `level` of `link`, where `None` stands for the head.
    #[inline]
    fn next_of(&self, link: Link, level: usize) -> Link {
        match link {
            Some(id) => self.pool[id].next(level),
            None     => self.head_link(level),
        }
    }

    /// Set the successor on `level` of `link`, where `None` stands for the head.
    ///
    /// # Panics
    /// Panics if the node referenced by `link` is not on `level`, or `level >= MAX_LAYERS`.
    fn set_next_of(&mut self, link: Link, level: usize, next: Link) {
        match link {
            Some(id) => self.pool[id].set_next(level, next),
            #[expect(clippy::indexing_slicing, reason = "callers only use levels below the max")]
            None     => self.head[level] = next,
        }
    }

    /// Link the already-allocated node `id` in after `prev[level]` on each of its layers.
    ///
    /// `prev[level]` must be the last node on `level` which should come before the new node, or
    /// `None` if the new node should be first on that level.
    fn splice(&mut self, id: ChunkId, prev: &[Link; MAX_LAYERS]) {
        let layer_count = self.pool[id].layer_count();

        for (level, &prev_link) in prev.iter().enumerate().take(layer_count) {
            let next = self.next_of(prev_link, level);
            self.pool[id].set_next(level, next);
            self.set_next_of(prev_link, level, Some(id));
        }

        if layer_count > self.layer_hint {
            tracing::event!(LogLevel::TRACE, layer_count, "skiplist reached a new layer");
            self.layer_hint = layer_count;
        }
        self.len += 1;
    }

    /// Unlink `target` from every layer on which `prev[level]` links to it, and free its node.
    fn unlink(&mut self, target: ChunkId, prev: &[Link; MAX_LAYERS]) -> T {
        let layer_count = self.pool[target].layer_count();

        for (level, &prev_link) in prev.iter().enumerate().take(layer_count) {
            if self.next_of(prev_link, level) == Some(target) {
                let next = self.pool[target].next(level);
                self.set_next_of(prev_link, level, next);
            }
        }

        self.len -= 1;
        self.pool.deallocate(target).into_value()
    }
}

impl<T, Cmp, R: Prng32, const MAX_LAYERS: usize> SkipList<T, Cmp, R, MAX_LAYERS> {
    /// Allocate a node for `value` with a random number of layers.
    fn new_node(&mut self, value: T) -> ChunkId {
        let layer_count = random_layer_count(&mut self.prng, MAX_LAYERS);
        self.pool.allocate(Node::new(value, layer_count))
    }

    /// Append `value` after every other value, without comparing anything.
    ///
    /// `tails[level]` must be the last node on each level (or `None` for the head); it is updated
    /// to include the new node.
    fn push_last(&mut self, value: T, tails: &mut [Link; MAX_LAYERS]) {
        let id = self.new_node(value);
        self.splice(id, tails);

        let layer_count = self.pool[id].layer_count();
        for tail in tails.iter_mut().take(layer_count) {
            *tail = Some(id);
        }
    }
}

// ================================
//  Searching
// ================================

impl<T, Cmp: Comparator<T>, R, const MAX_LAYERS: usize> SkipList<T, Cmp, R, MAX_LAYERS> {
    /// Return `Some(id)` if `link` refers to a node which sorts strictly before `value`.
    #[inline]
    fn before(&self, link: Link, value: &T) -> Option<ChunkId> {
        let id = link?;

        if self.cmp.cmp(self.pool[id].value(), value).is_lt() {
            Some(id)
        } else {
            None
        }
    }

    /// For each level, the last node sorting strictly before `value` (or `None` for the head).
    ///
    /// Levels at or above the layer hint are always `None`.
    fn find_predecessors(&self, value: &T) -> [Link; MAX_LAYERS] {
        let mut prev = [None; MAX_LAYERS];
        let mut current = None;

        for level in (0..self.layer_hint).rev() {
            while let Some(next) = self.before(self.next_of(current, level), value) {
                current = Some(next);
            }

            #[expect(clippy::indexing_slicing, reason = "level < layer_hint <= MAX_LAYERS")]
            #[expect(clippy::semicolon_outside_block, reason = "block needed for lint scope")]
            {
                prev[level] = current;
            }
        }

        prev
    }

    /// The first node which does not sort strictly before `value`.
    fn find_not_before(&self, value: &T) -> Link {
        let mut current = None;

        for level in (0..self.layer_hint).rev() {
            while let Some(next) = self.before(self.next_of(current, level), value) {
                current = Some(next);
            }
        }

        self.next_of(current, 0)
    }

    /// Get the first value equivalent to `value`, if there is one.
    #[must_use]
    pub fn get(&self, value: &T) -> Option<&T> {
        let found = self.pool[self.find_not_before(value)?].value();

        if self.cmp.cmp(found, value).is_eq() {
            Some(found)
        } else {
            None
        }
    }

    /// Check whether a value equivalent to `value` (comparing as equal) is in the list.
    #[inline]
    #[must_use]
    pub fn find(&self, value: &T) -> bool {
        self.get(value).is_some()
    }

    /// Remove one value equivalent to `value` and return it. If there is none, the list is not
    /// changed.
    pub fn take(&mut self, value: &T) -> Option<T> {
        let prev = self.find_predecessors(value);

        #[expect(clippy::indexing_slicing, reason = "MAX_LAYERS >= 1")]
        let target = self.next_of(prev[0], 0)?;

        if self.cmp.cmp(self.pool[target].value(), value).is_eq() {
            Some(self.unlink(target, &prev))
        } else {
            None
        }
    }

    /// Remove one value equivalent to `value`, returning whether there was one.
    ///
    /// Removing an absent value is not an error; the list is left unchanged.
    #[inline]
    pub fn remove(&mut self, value: &T) -> bool {
        self.take(value).is_some()
    }
}

// ================================
//  Inserting
// ================================

impl<T, Cmp: Comparator<T>, R: Prng32, const MAX_LAYERS: usize> SkipList<T, Cmp, R, MAX_LAYERS> {
    /// Insert `value`, even if an equivalent value is already in the list.
    ///
    /// # Panics
    /// Panics if the pool needs another block and the system allocator cannot provide it.
    pub fn insert(&mut self, value: T) {
        let prev = self.find_predecessors(&value);
        let id = self.new_node(value);
        self.splice(id, &prev);
    }

    /// Insert the value returned by `init_value`, constructing it only once the list is ready to
    /// store it.
    #[inline]
    pub fn insert_with<F: FnOnce() -> T>(&mut self, init_value: F) {
        self.insert(init_value());
    }

    /// Insert `value`, reporting allocation failure instead of panicking.
    ///
    /// # Errors
    /// If the pool could not allocate another block, the list is unchanged and the value is
    /// returned inside the error.
    pub fn try_insert(&mut self, value: T) -> Result<(), InsertError<T>> {
        if let Err(source) = self.pool.try_reserve() {
            return Err(InsertError { value, source });
        }

        self.insert(value);
        Ok(())
    }

    /// Replace the contents of the list with `values`, inserted in the given order.
    pub fn assign<I: IntoIterator<Item = T>>(&mut self, values: I) {
        self.clear();
        self.extend(values);
    }
}

// ================================
//  Trait impls
// ================================

impl<T, Cmp, R, const MAX_LAYERS: usize> Default for SkipList<T, Cmp, R, MAX_LAYERS>
where
    Cmp: Default,
    R:   SeedablePrng32,
{
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

/// Copies every value into a new list with its own pool.
///
/// The new list's random source starts from the current state of the original's, but the new
/// nodes' layers are chosen independently of the original nodes' layers.
impl<T, Cmp, R, const MAX_LAYERS: usize> Clone for SkipList<T, Cmp, R, MAX_LAYERS>
where
    T:   Clone,
    Cmp: Clone,
    R:   Prng32 + Clone,
{
    fn clone(&self) -> Self {
        let mut new_list = Self::with_config(
            self.cmp.clone(),
            self.prng.clone(),
            self.pool.config(),
        );
        let mut tails = [None; MAX_LAYERS];

        for value in self {
            new_list.push_last(value.clone(), &mut tails);
        }

        new_list
    }
}

impl<T, Cmp, R, const MAX_LAYERS: usize> Extend<T> for SkipList<T, Cmp, R, MAX_LAYERS>
where
    Cmp: Comparator<T>,
    R:   Prng32,
{
    fn extend<I: IntoIterator<Item = T>>(&mut self, values: I) {
        for value in values {
            self.insert(value);
        }
    }
}

impl<T, Cmp, R, const MAX_LAYERS: usize> FromIterator<T> for SkipList<T, Cmp, R, MAX_LAYERS>
where
    Cmp: Comparator<T> + Default,
    R:   SeedablePrng32,
{
    fn from_iter<I: IntoIterator<Item = T>>(values: I) -> Self {
        Self::from_values(Cmp::default(), values)
    }
}

/// Lists are equal if they hold equal values in the same order.
impl<T: PartialEq, Cmp, R, const MAX_LAYERS: usize> PartialEq for SkipList<T, Cmp, R, MAX_LAYERS> {
    fn eq(&self, other: &Self) -> bool {
        self.len == other.len && self.iter().eq(other.iter())
    }
}

impl<T: Eq, Cmp, R, const MAX_LAYERS: usize> Eq for SkipList<T, Cmp, R, MAX_LAYERS> {}

impl<'a, T, Cmp, R, const MAX_LAYERS: usize> IntoIterator for &'a SkipList<T, Cmp, R, MAX_LAYERS> {
    type Item     = &'a T;
    type IntoIter = Iter<'a, T>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<T, Cmp, R, const MAX_LAYERS: usize> IntoIterator for SkipList<T, Cmp, R, MAX_LAYERS> {
    type Item     = T;
    type IntoIter = IntoIter<T, Cmp, R, MAX_LAYERS>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        IntoIter::new(self)
    }
}
