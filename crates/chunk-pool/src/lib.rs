//! A typed pool which hands out fixed-size chunks, carved out of larger blocks that are
//! requested from the system allocator only when every existing chunk is in use.
//!
//! Chunks are referred to by [`ChunkId`] handles rather than addresses, so a pool can be moved
//! freely while values are stored in it.

mod config;
mod error;
mod pool;


pub use self::{
    config::PoolConfig,
    error::PoolError,
    pool::{ChunkId, ChunkPool, PoolStats},
};
