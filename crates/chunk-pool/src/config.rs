/// Settings of a [`ChunkPool`], fixed when the pool is constructed.
///
/// [`ChunkPool`]: crate::ChunkPool
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PoolConfig {
    chunks_per_block: usize,
}

impl PoolConfig {
    /// The number of chunks in each block of a pool created with [`PoolConfig::default`].
    pub const DEFAULT_CHUNKS_PER_BLOCK: usize = 64;

    /// Configure a pool whose blocks each hold `chunks_per_block` chunks.
    ///
    /// A block must hold at least one chunk, so `0` is raised to `1`.
    #[inline]
    #[must_use]
    pub const fn new(chunks_per_block: usize) -> Self {
        Self {
            chunks_per_block: if chunks_per_block == 0 { 1 } else { chunks_per_block },
        }
    }

    /// The number of chunks in each block. Always at least `1`.
    #[inline]
    #[must_use]
    pub const fn chunks_per_block(self) -> usize {
        self.chunks_per_block
    }
}

impl Default for PoolConfig {
    #[inline]
    fn default() -> Self {
        Self::new(Self::DEFAULT_CHUNKS_PER_BLOCK)
    }
}
