//! `Either<L, R>` - one of two equally valid alternatives
//!
//! Unlike [`Outcome`](crate::outcome::Outcome), neither side means failure.

use std::fmt;

use crate::maybe::Maybe;

/// A value that is either [`Either::Left`] or [`Either::Right`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Either<L, R> {
    /// Left alternative.
    Left(L),
    /// Right alternative.
    Right(R),
}

impl<L, R> Either<L, R> {
    /// Returns `true` for `Left`.
    pub fn is_left(&self) -> bool {
        matches!(self, Self::Left(_))
    }

    /// Returns `true` for `Right`.
    pub fn is_right(&self) -> bool {
        matches!(self, Self::Right(_))
    }

    /// Transforms the left value; a right value passes through.
    pub fn map_left<L2, F>(self, f: F) -> Either<L2, R>
    where
        F: FnOnce(L) -> L2,
    {
        match self {
            Self::Left(l) => Either::Left(f(l)),
            Self::Right(r) => Either::Right(r),
        }
    }

    /// Transforms the right value; a left value passes through.
    pub fn map_right<R2, F>(self, f: F) -> Either<L, R2>
    where
        F: FnOnce(R) -> R2,
    {
        match self {
            Self::Left(l) => Either::Left(l),
            Self::Right(r) => Either::Right(f(r)),
        }
    }

    /// Transforms whichever side is present.
    pub fn bimap<L2, R2, F, G>(self, f: F, g: G) -> Either<L2, R2>
    where
        F: FnOnce(L) -> L2,
        G: FnOnce(R) -> R2,
    {
        match self {
            Self::Left(l) => Either::Left(f(l)),
            Self::Right(r) => Either::Right(g(r)),
        }
    }

    /// Collapses both sides into one value.
    pub fn fold<T, F, G>(self, on_left: F, on_right: G) -> T
    where
        F: FnOnce(L) -> T,
        G: FnOnce(R) -> T,
    {
        match self {
            Self::Left(l) => on_left(l),
            Self::Right(r) => on_right(r),
        }
    }

    /// Flips `Left` and `Right`.
    pub fn swap(self) -> Either<R, L> {
        match self {
            Self::Left(l) => Either::Right(l),
            Self::Right(r) => Either::Left(r),
        }
    }

    /// The left value, if this is `Left`.
    pub fn left(self) -> Maybe<L> {
        match self {
            Self::Left(l) => Maybe::Some(l),
            Self::Right(_) => Maybe::Empty,
        }
    }

    /// The right value, if this is `Right`.
    pub fn right(self) -> Maybe<R> {
        match self {
            Self::Left(_) => Maybe::Empty,
            Self::Right(r) => Maybe::Some(r),
        }
    }
}

impl<L: fmt::Display, R: fmt::Display> fmt::Display for Either<L, R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Left(l) => write!(f, "Left({l})"),
            Self::Right(r) => write!(f, "Right({r})"),
        }
    }
}
