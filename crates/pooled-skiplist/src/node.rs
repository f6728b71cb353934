use chunk_pool::ChunkId;


/// A successor reference: a node's handle in the pool, or `None` at the end of a layer.
///
/// In predecessor arrays, `None` instead stands for the head of the list.
pub(crate) type Link = Option<ChunkId>;


/// A value of the skiplist together with its successor on each of its layers.
///
/// The number of layers is chosen when the node is created and never changes.
#[derive(Debug)]
pub(crate) struct Node<T> {
    value:      T,
    /// `successors[level]` is the next node on `level`. The slice is never empty.
    successors: Box<[Link]>,
}

impl<T> Node<T> {
    /// # Panics
    /// May panic in debug builds if `layer_count` is `0`.
    #[must_use]
    pub(crate) fn new(value: T, layer_count: usize) -> Self {
        debug_assert_ne!(layer_count, 0, "every node is at least on layer 0");

        Self {
            value,
            successors: vec![None; layer_count].into_boxed_slice(),
        }
    }

    #[inline]
    #[must_use]
    pub(crate) const fn value(&self) -> &T {
        &self.value
    }

    #[inline]
    #[must_use]
    pub(crate) fn into_value(self) -> T {
        self.value
    }

    #[inline]
    #[must_use]
    pub(crate) fn layer_count(&self) -> usize {
        self.successors.len()
    }

    /// The next node on `level`, or `None` if this is the last node on that level or if this
    /// node is not on that level.
    #[inline]
    #[must_use]
    pub(crate) fn next(&self, level: usize) -> Link {
        self.successors.get(level).copied().flatten()
    }

    /// # Panics
    /// Panics if this node is not on `level`.
    #[inline]
    pub(crate) fn set_next(&mut self, level: usize, link: Link) {
        #[expect(clippy::indexing_slicing, reason = "callers only splice nodes on their layers")]
        #[expect(clippy::semicolon_outside_block, reason = "block needed for lint scope")]
        {
            self.successors[level] = link;
        }
    }
}
