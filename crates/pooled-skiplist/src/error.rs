use chunk_pool::PoolError;
use thiserror::Error;


/// A value could not be inserted into a [`SkipList`], because the pool backing its nodes could
/// not allocate another block.
///
/// The list is unchanged, and the value is handed back.
///
/// [`SkipList`]: crate::SkipList
#[derive(Error, Debug)]
#[error("could not allocate a skiplist node: {source}")]
pub struct InsertError<T> {
    pub value:  T,
    #[source]
    pub source: PoolError,
}

impl<T> InsertError<T> {
    /// Recover the value which was not inserted.
    #[inline]
    #[must_use]
    pub fn into_value(self) -> T {
        self.value
    }
}
