use std::collections::TryReserveError;

use thiserror::Error;


/// Errors reported by the fallible methods of a [`ChunkPool`].
///
/// [`ChunkPool`]: crate::ChunkPool
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PoolError {
    /// The system allocator could not provide memory for a new block.
    #[error("failed to allocate a new block of {chunks} chunks ({chunk_size} bytes each): {source}")]
    BlockAllocation {
        chunks:     usize,
        chunk_size: usize,
        #[source]
        source:     TryReserveError,
    },
}
