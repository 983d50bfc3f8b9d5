//! Adjacent grouping by key
//!
//! [`group_by_key`] expects its input to be ordered by the key already. It
//! never sorts: it only merges runs of *adjacent* items whose keys compare
//! equal. On unordered input a key therefore shows up once per run:
//!
//! ```rust
//! use fpkit_iter::group_by_key;
//!
//! let groups: Vec<_> = group_by_key(["ant", "bee", "asp"], |s| s.as_bytes()[0]).collect();
//! assert_eq!(
//!     groups,
//!     vec![(b'a', vec!["ant"]), (b'b', vec!["bee"]), (b'a', vec!["asp"])],
//! );
//! ```
//!
//! Sort (or otherwise order) the source by the same key first when one
//! group per key is wanted.

use std::fmt;
use std::iter::FusedIterator;

/// Lazily yields `(key, items)` for each run of adjacent items with equal
/// keys.
///
/// Holds the group under construction plus one lookahead item.
pub fn group_by_key<I, K, F>(source: I, key_fn: F) -> GroupByKey<I::IntoIter, K, F>
where
    I: IntoIterator,
    F: FnMut(&I::Item) -> K,
    K: PartialEq,
{
    GroupByKey {
        iter: source.into_iter(),
        key_fn,
        pending: None,
    }
}

/// Iterator returned by [`group_by_key`].
#[must_use = "iterators are lazy and do nothing unless consumed"]
pub struct GroupByKey<I: Iterator, K, F> {
    iter: I,
    key_fn: F,
    // First item of the next group, already keyed.
    pending: Option<(K, I::Item)>,
}

impl<I, K, F> Iterator for GroupByKey<I, K, F>
where
    I: Iterator,
    F: FnMut(&I::Item) -> K,
    K: PartialEq,
{
    type Item = (K, Vec<I::Item>);

    fn next(&mut self) -> Option<Self::Item> {
        let (key, first) = match self.pending.take() {
            Some(pending) => pending,
            None => {
                let item = self.iter.next()?;
                ((self.key_fn)(&item), item)
            }
        };

        let mut group = vec![first];
        for item in self.iter.by_ref() {
            let next_key = (self.key_fn)(&item);
            if next_key == key {
                group.push(item);
            } else {
                self.pending = Some((next_key, item));
                break;
            }
        }
        Some((key, group))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let (lo, hi) = self.iter.size_hint();
        let buffered = usize::from(self.pending.is_some());
        let lower = usize::from(lo.saturating_add(buffered) > 0);
        (lower, hi.and_then(|h| h.checked_add(buffered)))
    }
}

impl<I, K, F> FusedIterator for GroupByKey<I, K, F>
where
    I: FusedIterator,
    F: FnMut(&I::Item) -> K,
    K: PartialEq,
{
}

impl<I, K, F> fmt::Debug for GroupByKey<I, K, F>
where
    I: Iterator + fmt::Debug,
    I::Item: fmt::Debug,
    K: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GroupByKey")
            .field("iter", &self.iter)
            .field("pending", &self.pending)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn sorted_input_gives_one_group_per_key() {
        let groups: Vec<_> = group_by_key([1, 1, 2, 3, 3, 3], |x| *x).collect();
        assert_eq!(groups, vec![(1, vec![1, 1]), (2, vec![2]), (3, vec![3, 3, 3])]);
    }

    #[test]
    fn unsorted_input_repeats_keys() {
        let groups: Vec<_> = group_by_key([1, 2, 1, 1, 2], |x| x % 2).collect();
        let keys: Vec<_> = groups.iter().map(|(k, _)| *k).collect();
        assert_eq!(keys, vec![1, 0, 1, 0]);
        assert_eq!(groups[2], (1, vec![1, 1]));
    }

    #[test]
    fn empty_source_has_no_groups() {
        let mut groups = group_by_key(Vec::<i32>::new(), |x| *x);
        assert_eq!(groups.size_hint(), (0, Some(0)));
        assert_eq!(groups.next(), None);
        assert_eq!(groups.next(), None);
    }

    #[test]
    fn size_hint_counts_lookahead() {
        let mut groups = group_by_key([1, 2], |x| *x);
        assert_eq!(groups.size_hint(), (1, Some(2)));
        assert_eq!(groups.next(), Some((1, vec![1])));
        assert_eq!(groups.size_hint(), (1, Some(1)));
    }
}
