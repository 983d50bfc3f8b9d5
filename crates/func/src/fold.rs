//! Folds over any iterable

use fpkit_core::Maybe;

/// Left fold: `foldl(f, z, [a, b])` is `f(f(z, a), b)`.
pub fn foldl<A, B, I, F>(f: F, init: B, items: I) -> B
where
    I: IntoIterator<Item = A>,
    F: FnMut(B, A) -> B,
{
    items.into_iter().fold(init, f)
}

/// Right fold: `foldr(f, z, [a, b])` is `f(a, f(b, z))`.
pub fn foldr<A, B, I, F>(mut f: F, init: B, items: I) -> B
where
    I: IntoIterator<Item = A>,
    I::IntoIter: DoubleEndedIterator,
    F: FnMut(A, B) -> B,
{
    items.into_iter().rev().fold(init, |acc, x| f(x, acc))
}

/// Folds with the first element as the seed; `Empty` for an empty source.
pub fn reduce<A, I, F>(f: F, items: I) -> Maybe<A>
where
    I: IntoIterator<Item = A>,
    F: FnMut(A, A) -> A,
{
    items.into_iter().reduce(f).into()
}
