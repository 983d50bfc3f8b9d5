//! Fixed-size grouping

use std::iter::FusedIterator;

use fpkit_error::{FpError, FpResult};

/// Lazily groups `source` into vectors of `size` elements; the final group
/// holds whatever is left and may be shorter.
///
/// Fails with [`FpError::InvalidArgument`] when `size` is zero. The check
/// happens here, before any element is pulled.
pub fn chunk<I>(source: I, size: usize) -> FpResult<Chunks<I::IntoIter>>
where
    I: IntoIterator,
{
    if size == 0 {
        return Err(FpError::invalid_argument("size", "chunk size must be positive"));
    }
    Ok(Chunks {
        iter: source.into_iter(),
        size,
    })
}

/// Iterator returned by [`chunk`].
#[derive(Debug, Clone)]
#[must_use = "iterators are lazy and do nothing unless consumed"]
pub struct Chunks<I> {
    iter: I,
    size: usize,
}

impl<I> Chunks<I> {
    /// The configured group size.
    pub fn size(&self) -> usize {
        self.size
    }
}

impl<I: Iterator> Iterator for Chunks<I> {
    type Item = Vec<I::Item>;

    fn next(&mut self) -> Option<Self::Item> {
        let first = self.iter.next()?;
        // Reserve no more than the source claims to hold.
        let capacity = self.size.min(self.iter.size_hint().0.saturating_add(1));
        let mut group = Vec::with_capacity(capacity);
        group.push(first);
        group.extend(self.iter.by_ref().take(self.size - 1));
        Some(group)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let (lo, hi) = self.iter.size_hint();
        (lo.div_ceil(self.size), hi.map(|h| h.div_ceil(self.size)))
    }
}

impl<I: FusedIterator> FusedIterator for Chunks<I> {}
