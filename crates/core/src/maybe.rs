//! `Maybe<T>` - optional presence of a value
//!
//! [`Maybe`] has two variants, [`Maybe::Some`] and [`Maybe::Empty`]. Absence
//! is ordinary data: no operation in this module panics, and closures passed
//! to a combinator are never invoked on `Empty`.
//!
//! # Examples
//!
//! ```rust
//! use fpkit_core::maybe::{Maybe, from_nullable};
//!
//! assert_eq!(Maybe::Some(2).map(|x| x + 1).unwrap_or(0), 3);
//! assert_eq!(Maybe::<i32>::Empty.map(|x| x + 1).unwrap_or(0), 0);
//!
//! let shout = from_nullable(Some("x"))
//!     .bind(|s| Maybe::Some(s.to_uppercase()))
//!     .unwrap_or_else(|| "-".to_owned());
//! assert_eq!(shout, "X");
//! ```

use std::fmt;
use std::future::Future;

use crate::outcome::Outcome;

/// A value that is either present ([`Maybe::Some`]) or absent ([`Maybe::Empty`]).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Maybe<T> {
    /// A present value.
    Some(T),
    /// No value.
    Empty,
}

/// Converts a nullable value: `None` becomes `Empty`, anything else `Some`.
pub fn from_nullable<T>(value: Option<T>) -> Maybe<T> {
    Maybe::from(value)
}

impl<T> Maybe<T> {
    // ========================================================================
    // QUERIES
    // ========================================================================

    /// Returns `true` if this is `Some`.
    pub fn is_some(&self) -> bool {
        matches!(self, Self::Some(_))
    }

    /// Returns `true` if this is `Empty`.
    pub fn is_empty(&self) -> bool {
        !self.is_some()
    }

    /// Borrows the contained value.
    pub fn as_ref(&self) -> Maybe<&T> {
        match self {
            Self::Some(v) => Maybe::Some(v),
            Self::Empty => Maybe::Empty,
        }
    }

    /// Mutably borrows the contained value.
    pub fn as_mut(&mut self) -> Maybe<&mut T> {
        match self {
            Self::Some(v) => Maybe::Some(v),
            Self::Empty => Maybe::Empty,
        }
    }

    // ========================================================================
    // COMBINATORS
    // ========================================================================

    /// Applies `f` to the contained value.
    ///
    /// `Some(v)` becomes `Some(f(v))`; `Empty` stays `Empty` and `f` is not
    /// called.
    pub fn map<U, F>(self, f: F) -> Maybe<U>
    where
        F: FnOnce(T) -> U,
    {
        match self {
            Self::Some(v) => Maybe::Some(f(v)),
            Self::Empty => Maybe::Empty,
        }
    }

    /// Chains a computation that may itself produce no value.
    ///
    /// Also known as `flat_map` / `and_then`.
    ///
    /// ```rust
    /// use fpkit_core::maybe::Maybe;
    ///
    /// let parse = |s: &str| match s.parse::<i32>() {
    ///     Ok(n) => Maybe::Some(n),
    ///     Err(_) => Maybe::Empty,
    /// };
    /// assert_eq!(Maybe::Some("7").bind(parse), Maybe::Some(7));
    /// assert_eq!(Maybe::Some("x").bind(parse), Maybe::Empty);
    /// ```
    pub fn bind<U, F>(self, f: F) -> Maybe<U>
    where
        F: FnOnce(T) -> Maybe<U>,
    {
        match self {
            Self::Some(v) => f(v),
            Self::Empty => Maybe::Empty,
        }
    }

    /// Pairs two values; `Some` only if both sides are `Some`.
    pub fn zip<U>(self, other: Maybe<U>) -> Maybe<(T, U)> {
        match (self, other) {
            (Self::Some(a), Maybe::Some(b)) => Maybe::Some((a, b)),
            _ => Maybe::Empty,
        }
    }

    /// Returns `self` if `Some`, otherwise evaluates `f`.
    pub fn or_else<F>(self, f: F) -> Self
    where
        F: FnOnce() -> Self,
    {
        match self {
            Self::Some(_) => self,
            Self::Empty => f(),
        }
    }

    /// Returns `self` if `Some`, otherwise `other`.
    pub fn or(self, other: Self) -> Self {
        self.or_else(|| other)
    }

    /// Keeps the value only if `predicate` holds for it.
    pub fn filter<P>(self, predicate: P) -> Self
    where
        P: FnOnce(&T) -> bool,
    {
        match self {
            Self::Some(v) if predicate(&v) => Self::Some(v),
            _ => Self::Empty,
        }
    }

    /// Collapses both variants into one value.
    pub fn fold<U, S, N>(self, on_some: S, on_empty: N) -> U
    where
        S: FnOnce(T) -> U,
        N: FnOnce() -> U,
    {
        match self {
            Self::Some(v) => on_some(v),
            Self::Empty => on_empty(),
        }
    }

    // ========================================================================
    // EXTRACTION
    // ========================================================================

    /// Returns the contained value or `default`.
    pub fn unwrap_or(self, default: T) -> T {
        match self {
            Self::Some(v) => v,
            Self::Empty => default,
        }
    }

    /// Returns the contained value or computes one.
    pub fn unwrap_or_else<F>(self, f: F) -> T
    where
        F: FnOnce() -> T,
    {
        match self {
            Self::Some(v) => v,
            Self::Empty => f(),
        }
    }

    /// Returns the contained value or `T::default()`.
    pub fn unwrap_or_default(self) -> T
    where
        T: Default,
    {
        self.unwrap_or_else(T::default)
    }

    /// Turns absence into the given error.
    pub fn ok_or<E>(self, err: E) -> Outcome<T, E> {
        match self {
            Self::Some(v) => Outcome::Ok(v),
            Self::Empty => Outcome::Err(err),
        }
    }

    /// Turns absence into a lazily built error.
    pub fn ok_or_else<E, F>(self, err: F) -> Outcome<T, E>
    where
        F: FnOnce() -> E,
    {
        match self {
            Self::Some(v) => Outcome::Ok(v),
            Self::Empty => Outcome::Err(err()),
        }
    }

    /// Converts into the standard library `Option`.
    pub fn into_option(self) -> Option<T> {
        self.into()
    }

    /// Iterates over zero or one borrowed element.
    pub fn iter(&self) -> std::option::IntoIter<&T> {
        self.as_ref().into_option().into_iter()
    }

    // ========================================================================
    // ASYNC
    // ========================================================================

    /// Like [`Maybe::map`] with an async continuation.
    ///
    /// On `Empty` the continuation future is never created.
    pub async fn map_async<U, F, Fut>(self, f: F) -> Maybe<U>
    where
        F: FnOnce(T) -> Fut,
        Fut: Future<Output = U>,
    {
        match self {
            Self::Some(v) => Maybe::Some(f(v).await),
            Self::Empty => Maybe::Empty,
        }
    }

    /// Like [`Maybe::bind`] with an async continuation.
    pub async fn bind_async<U, F, Fut>(self, f: F) -> Maybe<U>
    where
        F: FnOnce(T) -> Fut,
        Fut: Future<Output = Maybe<U>>,
    {
        match self {
            Self::Some(v) => f(v).await,
            Self::Empty => Maybe::Empty,
        }
    }
}

impl<T> Default for Maybe<T> {
    fn default() -> Self {
        Self::Empty
    }
}

impl<T> From<Option<T>> for Maybe<T> {
    fn from(value: Option<T>) -> Self {
        match value {
            Some(v) => Self::Some(v),
            None => Self::Empty,
        }
    }
}

impl<T> From<Maybe<T>> for Option<T> {
    fn from(value: Maybe<T>) -> Self {
        match value {
            Maybe::Some(v) => Some(v),
            Maybe::Empty => None,
        }
    }
}

impl<T: fmt::Display> fmt::Display for Maybe<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Some(v) => write!(f, "Some({v})"),
            Self::Empty => f.write_str("Empty"),
        }
    }
}

impl<T> IntoIterator for Maybe<T> {
    type Item = T;
    type IntoIter = std::option::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.into_option().into_iter()
    }
}

impl<'a, T> IntoIterator for &'a Maybe<T> {
    type Item = &'a T;
    type IntoIter = std::option::IntoIter<&'a T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Collects `Some` values; the first `Empty` makes the whole result `Empty`.
impl<A, V> FromIterator<Maybe<A>> for Maybe<V>
where
    V: FromIterator<A>,
{
    fn from_iter<I: IntoIterator<Item = Maybe<A>>>(iter: I) -> Self {
        iter.into_iter()
            .map(Maybe::into_option)
            .collect::<Option<V>>()
            .into()
    }
}

// ============================================================================
// TESTS
// ============================================================================
