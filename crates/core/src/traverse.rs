//! Sequence/traverse helpers for `Maybe` and `Outcome`
//!
//! All four helpers keep order and stop pulling from the source at the first
//! `Empty` / `Err`.
//!
//! ```rust
//! use fpkit_core::prelude::*;
//!
//! assert_eq!(traverse_maybe([1, 2, 3], |x| Maybe::Some(x * 2)), Maybe::Some(vec![2, 4, 6]));
//! assert_eq!(
//!     traverse_outcome([1, 2, 3], |x| if x == 2 { Outcome::Err("boom") } else { Outcome::Ok(x) }),
//!     Outcome::Err("boom"),
//! );
//! ```

use crate::maybe::Maybe;
use crate::outcome::Outcome;

/// `[Maybe<A>]` → `Maybe<Vec<A>>`; `Empty` if any element is `Empty`.
pub fn sequence_maybe<A, I>(items: I) -> Maybe<Vec<A>>
where
    I: IntoIterator<Item = Maybe<A>>,
{
    traverse_maybe(items, |m| m)
}

/// Maps with `f` and collects; `Empty` on the first `Empty`.
pub fn traverse_maybe<A, B, I, F>(items: I, mut f: F) -> Maybe<Vec<B>>
where
    I: IntoIterator<Item = A>,
    F: FnMut(A) -> Maybe<B>,
{
    let iter = items.into_iter();
    let mut out = Vec::with_capacity(iter.size_hint().0);
    for item in iter {
        match f(item) {
            Maybe::Some(b) => out.push(b),
            Maybe::Empty => return Maybe::Empty,
        }
    }
    Maybe::Some(out)
}

/// `[Outcome<A, E>]` → `Outcome<Vec<A>, E>`; the first `Err` wins.
pub fn sequence_outcome<A, E, I>(items: I) -> Outcome<Vec<A>, E>
where
    I: IntoIterator<Item = Outcome<A, E>>,
{
    traverse_outcome(items, |o| o)
}

/// Maps with `f` and collects; returns the first `Err`.
pub fn traverse_outcome<A, B, E, I, F>(items: I, mut f: F) -> Outcome<Vec<B>, E>
where
    I: IntoIterator<Item = A>,
    F: FnMut(A) -> Outcome<B, E>,
{
    let iter = items.into_iter();
    let mut out = Vec::with_capacity(iter.size_hint().0);
    for item in iter {
        match f(item) {
            Outcome::Ok(b) => out.push(b),
            Outcome::Err(e) => return Outcome::Err(e),
        }
    }
    Outcome::Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn sequence_maybe_cases() {
        assert_eq!(sequence_maybe([Maybe::Some(1), Maybe::Some(2)]), Maybe::Some(vec![1, 2]));
        assert_eq!(sequence_maybe([Maybe::Some(1), Maybe::Empty]), Maybe::Empty);
        assert_eq!(sequence_maybe(Vec::<Maybe<i32>>::new()), Maybe::Some(vec![]));
    }

    #[test]
    fn traverse_outcome_stops_consuming() {
        let mut seen = Vec::new();
        let out = traverse_outcome(1..=5, |x| {
            seen.push(x);
            if x == 3 { Outcome::Err(x) } else { Outcome::Ok(x) }
        });
        assert_eq!(out, Outcome::Err(3));
        assert_eq!(seen, vec![1, 2, 3]);
    }

    #[test]
    fn sequence_outcome_cases() {
        assert_eq!(
            sequence_outcome([Outcome::<_, &str>::Ok(1), Outcome::Ok(2)]),
            Outcome::Ok(vec![1, 2])
        );
        assert_eq!(
            sequence_outcome([Outcome::Ok(1), Outcome::Err("e"), Outcome::Err("f")]),
            Outcome::Err("e")
        );
    }
}
