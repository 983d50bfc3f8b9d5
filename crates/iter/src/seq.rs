//! Element-wise adaptors

use std::iter::{Filter, Map};

/// Lazily applies `f` to each element of `source`, in order.
pub fn map_seq<I, B, F>(f: F, source: I) -> Map<I::IntoIter, F>
where
    I: IntoIterator,
    F: FnMut(I::Item) -> B,
{
    source.into_iter().map(f)
}

/// Lazily keeps the elements of `source` for which `predicate` holds.
///
/// Rejected elements are skipped while producing the next output; nothing
/// past the returned element is pulled.
pub fn filter_seq<I, P>(predicate: P, source: I) -> Filter<I::IntoIter, P>
where
    I: IntoIterator,
    P: FnMut(&I::Item) -> bool,
{
    source.into_iter().filter(predicate)
}
