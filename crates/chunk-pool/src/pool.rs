use std::{mem, ops::{Index, IndexMut}};
use std::fmt::{Debug, Formatter, Result as FmtResult};

use tracing::Level as LogLevel;

use crate::{config::PoolConfig, error::PoolError};


/// A handle to one chunk of a [`ChunkPool`].
///
/// Handles are plain indices: they stay the same when the pool is moved, and a handle whose chunk
/// was deallocated may be handed out again by a later allocation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ChunkId(usize);

impl ChunkId {
    /// The position of the chunk across every block of its pool.
    #[inline]
    #[must_use]
    pub const fn index(self) -> usize {
        self.0
    }
}

/// One chunk of a block. A vacant chunk stores the link of the free list.
#[derive(Debug)]
enum Slot<T> {
    Vacant { next_free: Option<ChunkId> },
    Occupied(T),
}

/// A snapshot of how much of a [`ChunkPool`] is in use.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PoolStats {
    /// The number of blocks requested from the system allocator.
    pub blocks:      usize,
    /// The number of chunks across every block.
    pub capacity:    usize,
    /// The number of chunks currently holding a value.
    pub live_chunks: usize,
    /// The size in bytes of a single chunk.
    pub chunk_size:  usize,
}

/// A pool of fixed-size chunks, each able to hold one `T`.
///
/// Chunks are carved out of blocks of [`PoolConfig::chunks_per_block`] chunks. A new block is
/// only requested from the system allocator once every chunk of every existing block is in use,
/// so [`allocate`] and [`deallocate`] are amortized O(1). Blocks are released only when the pool
/// is dropped or [`reset`].
///
/// The pool cannot be cloned; it is the sole owner of its memory. Moving it moves every block
/// along with the free list, and [`mem::take`] leaves an empty pool behind.
///
/// [`allocate`]: ChunkPool::allocate
/// [`deallocate`]: ChunkPool::deallocate
/// [`reset`]: ChunkPool::reset
pub struct ChunkPool<T> {
    /// Invariant: every block has exactly `chunks_per_block` slots.
    blocks:           Vec<Box<[Slot<T>]>>,
    /// The first vacant chunk, which links to the rest of the free list.
    free_head:        Option<ChunkId>,
    live_chunks:      usize,
    chunks_per_block: usize,
}

impl<T> ChunkPool<T> {
    /// Create an empty pool. No memory is requested until the first allocation.
    #[inline]
    #[must_use]
    pub const fn new(config: PoolConfig) -> Self {
        Self {
            blocks:           Vec::new(),
            free_head:        None,
            live_chunks:      0,
            chunks_per_block: config.chunks_per_block(),
        }
    }

    /// The configuration this pool was created with.
    #[inline]
    #[must_use]
    pub const fn config(&self) -> PoolConfig {
        PoolConfig::new(self.chunks_per_block)
    }

    /// The size in bytes of a single chunk.
    ///
    /// A chunk holds either a `T` or the link to the next free chunk, so this is never smaller
    /// than the free-list link.
    #[inline]
    #[must_use]
    pub const fn chunk_size(&self) -> usize {
        size_of::<Slot<T>>()
    }

    /// The number of chunks in each block.
    #[inline]
    #[must_use]
    pub const fn chunks_per_block(&self) -> usize {
        self.chunks_per_block
    }

    /// The number of blocks requested from the system allocator so far.
    #[inline]
    #[must_use]
    pub fn block_count(&self) -> usize {
        self.blocks.len()
    }

    /// The number of chunks across every block, whether in use or free.
    #[inline]
    #[must_use]
    pub fn capacity(&self) -> usize {
        self.blocks.len() * self.chunks_per_block
    }

    /// The number of chunks currently holding a value.
    #[inline]
    #[must_use]
    pub const fn live_chunks(&self) -> usize {
        self.live_chunks
    }

    /// The number of chunks which can be allocated without requesting another block.
    #[inline]
    #[must_use]
    pub fn free_chunks(&self) -> usize {
        self.capacity() - self.live_chunks
    }

    #[must_use]
    pub fn stats(&self) -> PoolStats {
        PoolStats {
            blocks:      self.block_count(),
            capacity:    self.capacity(),
            live_chunks: self.live_chunks,
            chunk_size:  self.chunk_size(),
        }
    }

    /// Make sure at least one chunk is free, requesting a new block if necessary.
    ///
    /// After this returns `Ok`, the next call to [`allocate`] does not touch the system
    /// allocator.
    ///
    /// # Errors
    /// Returns [`PoolError::BlockAllocation`] if a new block was needed but the system allocator
    /// could not provide it. The pool is left unchanged in that case.
    ///
    /// [`allocate`]: ChunkPool::allocate
    pub fn try_reserve(&mut self) -> Result<(), PoolError> {
        if self.free_head.is_some() {
            return Ok(());
        }

        self.try_grow().map_err(|source| {
            let err = PoolError::BlockAllocation {
                chunks:     self.chunks_per_block,
                chunk_size: self.chunk_size(),
                source,
            };
            tracing::event!(LogLevel::DEBUG, "chunk pool could not grow: {err}");
            err
        })
    }

    /// Store `value` in a free chunk and return the chunk's handle.
    ///
    /// # Panics
    /// Panics if a new block was needed and could not be allocated. Use [`try_reserve`] first to
    /// handle that case.
    ///
    /// [`try_reserve`]: ChunkPool::try_reserve
    #[expect(clippy::panic, reason = "allocation failure is fatal, as with `Box::new`")]
    pub fn allocate(&mut self, value: T) -> ChunkId {
        if let Err(err) = self.try_reserve() {
            panic!("{err}");
        }

        #[expect(clippy::unwrap_used, reason = "`try_reserve` succeeded, so a chunk is free")]
        let id = self.free_head.unwrap();
        let slot = self.slot_mut(id);

        let next_free = match slot {
            Slot::Vacant { next_free } => *next_free,
            #[expect(clippy::unreachable, reason = "only vacant chunks are on the free list")]
            Slot::Occupied(_) => unreachable!("an occupied chunk was on the free list"),
        };
        *slot = Slot::Occupied(value);

        self.free_head = next_free;
        self.live_chunks += 1;
        id
    }

    /// Move the value out of an occupied chunk, and put the chunk back on the free list.
    ///
    /// The chunk is the first one reused by the next [`allocate`] call.
    ///
    /// # Panics
    /// Panics if `id` did not come from this pool, or if its chunk is already free.
    ///
    /// [`allocate`]: ChunkPool::allocate
    #[expect(clippy::panic, reason = "a double free is a contract violation")]
    pub fn deallocate(&mut self, id: ChunkId) -> T {
        let free_head = self.free_head;
        let slot = self.slot_mut(id);

        match mem::replace(slot, Slot::Vacant { next_free: free_head }) {
            Slot::Occupied(value) => {
                self.free_head = Some(id);
                self.live_chunks -= 1;
                value
            }
            vacant @ Slot::Vacant { .. } => {
                *slot = vacant;
                panic!("chunk {} was deallocated while already free", id.0);
            }
        }
    }

    /// Get the value in the chunk `id`, if that chunk is occupied.
    #[must_use]
    pub fn get(&self, id: ChunkId) -> Option<&T> {
        match self.blocks.get(id.0 / self.chunks_per_block)?.get(id.0 % self.chunks_per_block)? {
            Slot::Occupied(value) => Some(value),
            Slot::Vacant { .. } => None,
        }
    }

    /// Get the value in the chunk `id`, if that chunk is occupied.
    #[must_use]
    pub fn get_mut(&mut self, id: ChunkId) -> Option<&mut T> {
        let chunks_per_block = self.chunks_per_block;
        let block = self.blocks.get_mut(id.0 / chunks_per_block)?;
        match block.get_mut(id.0 % chunks_per_block)? {
            Slot::Occupied(value) => Some(value),
            Slot::Vacant { .. } => None,
        }
    }

    /// Drop every value still in the pool and release every block.
    pub fn reset(&mut self) {
        if !self.blocks.is_empty() {
            tracing::event!(
                LogLevel::TRACE,
                blocks = self.blocks.len(),
                live_chunks = self.live_chunks,
                "releasing every block of a chunk pool",
            );
        }

        self.blocks = Vec::new();
        self.free_head = None;
        self.live_chunks = 0;
    }

    /// Request one more block and put all of its chunks on the free list, in order.
    fn try_grow(&mut self) -> Result<(), std::collections::TryReserveError> {
        let chunks_per_block = self.chunks_per_block;
        let first_id = self.capacity();

        self.blocks.try_reserve(1)?;
        let mut block = Vec::new();
        block.try_reserve_exact(chunks_per_block)?;

        let free_head = self.free_head;
        block.extend((1..=chunks_per_block).map(|offset| {
            let next_free = if offset < chunks_per_block {
                Some(ChunkId(first_id + offset))
            } else {
                free_head
            };
            Slot::Vacant { next_free }
        }));

        self.blocks.push(block.into_boxed_slice());
        self.free_head = Some(ChunkId(first_id));

        tracing::event!(
            LogLevel::TRACE,
            blocks = self.blocks.len(),
            chunks_per_block,
            "chunk pool requested a new block",
        );
        Ok(())
    }

    /// # Panics
    /// Panics if `id` is out of range for this pool.
    #[expect(clippy::panic, reason = "a foreign handle is a contract violation")]
    fn slot_mut(&mut self, id: ChunkId) -> &mut Slot<T> {
        let chunks_per_block = self.chunks_per_block;
        let slot = self.blocks
            .get_mut(id.0 / chunks_per_block)
            .and_then(|block| block.get_mut(id.0 % chunks_per_block));

        if let Some(slot) = slot {
            slot
        } else {
            panic!("chunk {} does not belong to this pool", id.0);
        }
    }
}

impl<T> Default for ChunkPool<T> {
    #[inline]
    fn default() -> Self {
        Self::new(PoolConfig::default())
    }
}

impl<T> Debug for ChunkPool<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.debug_struct("ChunkPool")
            .field("blocks",           &self.blocks.len())
            .field("chunks_per_block", &self.chunks_per_block)
            .field("live_chunks",      &self.live_chunks)
            .field("free_head",        &self.free_head)
            .finish_non_exhaustive()
    }
}

/// # Panics
/// Indexing panics if the chunk is free or did not come from this pool.
impl<T> Index<ChunkId> for ChunkPool<T> {
    type Output = T;

    #[expect(clippy::panic, reason = "indexing a free chunk is a contract violation")]
    fn index(&self, id: ChunkId) -> &Self::Output {
        if let Some(value) = self.get(id) {
            value
        } else {
            panic!("chunk {} is not in use", id.0);
        }
    }
}

impl<T> IndexMut<ChunkId> for ChunkPool<T> {
    #[expect(clippy::panic, reason = "indexing a free chunk is a contract violation")]
    fn index_mut(&mut self, id: ChunkId) -> &mut Self::Output {
        if let Some(value) = self.get_mut(id) {
            value
        } else {
            panic!("chunk {} is not in use", id.0);
        }
    }
}
