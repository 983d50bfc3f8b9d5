//! Method-style access to the adaptors

use fpkit_error::FpResult;

use crate::chunk::{Chunks, chunk};
use crate::group::{GroupByKey, group_by_key};

/// Extension methods available on every iterator.
///
/// ```rust
/// use fpkit_iter::LazyExt;
///
/// let runs: Vec<_> = "aaabcc".chars().group_by_key(|c| *c).map(|(c, g)| (c, g.len())).collect();
/// assert_eq!(runs, vec![('a', 3), ('b', 1), ('c', 2)]);
/// ```
pub trait LazyExt: Iterator + Sized {
    /// See [`chunk`].
    fn chunked(self, size: usize) -> FpResult<Chunks<Self>> {
        chunk(self, size)
    }

    /// See [`group_by_key`]; the input must already be ordered by the key.
    fn group_by_key<K, F>(self, key_fn: F) -> GroupByKey<Self, K, F>
    where
        F: FnMut(&Self::Item) -> K,
        K: PartialEq,
    {
        group_by_key(self, key_fn)
    }
}

impl<I: Iterator> LazyExt for I {}
