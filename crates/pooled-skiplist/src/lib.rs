//! A generic, single-threaded [skiplist] whose nodes are stored in a [`chunk_pool::ChunkPool`].
//!
//! [`SkipList`] keeps its values sorted by a [`Comparator`] and allows duplicates, so it acts as
//! an ordered multiset. Searching, inserting and removing take expected O(log n) time.
//!
//! [skiplist]: https://en.wikipedia.org/wiki/Skip_list

mod comparator;
mod error;
mod layers;
mod node;

mod list;
mod iter;
mod display;


pub use chunk_pool::{PoolConfig, PoolStats};
pub use oorandom::Rand32;

pub use self::{
    comparator::{Ascending, Comparator, Descending},
    error::InsertError,
    iter::{IntoIter, Iter},
    layers::{Prng32, SeedablePrng32},
    list::{DEFAULT_MAX_LAYERS, DEFAULT_SEED, SkipList},
};
