//! `Outcome<T, E>` - success or failure as a value
//!
//! [`Outcome`] is either [`Outcome::Ok`] with a payload or [`Outcome::Err`]
//! with an error. Chains built with [`Outcome::bind`] stop at the first
//! `Err`: later continuations are never called and that first error is the
//! result of the whole chain.
//!
//! [`Outcome::capture`] is the one place where a panic is turned into a
//! value. Code outside the pure core (file access, network calls) should be
//! wrapped with it, or already return `Result`, before entering a chain.
//!
//! # Examples
//!
//! ```rust
//! use fpkit_core::outcome::Outcome;
//!
//! let parsed: Outcome<i32, String> = Outcome::Ok("7")
//!     .bind(|s| Outcome::from(s.parse::<i32>().map_err(|e| e.to_string())))
//!     .map(|n| n * 2);
//! assert_eq!(parsed, Outcome::Ok(14));
//!
//! let message = Outcome::<i32, &str>::Err("boom")
//!     .map_err(str::to_uppercase)
//!     .match_with(|n| n.to_string(), |e| e);
//! assert_eq!(message, "BOOM");
//! ```

use std::fmt;
use std::future::Future;
use std::panic::{self, AssertUnwindSafe};

use fpkit_error::CapturedPanic;

use crate::maybe::Maybe;

/// A computation that either succeeded ([`Outcome::Ok`]) or failed ([`Outcome::Err`]).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[must_use = "this `Outcome` may be an `Err` variant, which should be handled"]
pub enum Outcome<T, E> {
    /// Success payload.
    Ok(T),
    /// Failure payload.
    Err(E),
}

impl<T> Outcome<T, CapturedPanic> {
    /// Runs `f`, turning an unwinding panic into `Err(CapturedPanic)`.
    ///
    /// A normal return becomes `Ok(value)`. Panics compiled with
    /// `panic = "abort"` cannot be caught and still abort the process.
    ///
    /// ```rust
    /// use fpkit_core::outcome::Outcome;
    ///
    /// let ok = Outcome::capture(|| 2 + 2);
    /// assert_eq!(ok, Outcome::Ok(4));
    ///
    /// let err = Outcome::capture(|| -> i32 { panic!("disk on fire") });
    /// assert_eq!(err.err().map(|p| p.message().to_owned()).unwrap_or_default(), "disk on fire");
    /// ```
    pub fn capture<F>(f: F) -> Self
    where
        F: FnOnce() -> T,
    {
        // `f` is consumed, so nothing it touched is observed after an unwind.
        match panic::catch_unwind(AssertUnwindSafe(f)) {
            Ok(value) => Self::Ok(value),
            Err(payload) => Self::Err(CapturedPanic::from_payload(payload)),
        }
    }
}

impl<T, E> Outcome<T, E> {
    // ========================================================================
    // QUERIES
    // ========================================================================

    /// Returns `true` if this is `Ok`.
    pub fn is_ok(&self) -> bool {
        matches!(self, Self::Ok(_))
    }

    /// Returns `true` if this is `Err`.
    pub fn is_err(&self) -> bool {
        !self.is_ok()
    }

    /// Borrows both payloads.
    pub fn as_ref(&self) -> Outcome<&T, &E> {
        match self {
            Self::Ok(v) => Outcome::Ok(v),
            Self::Err(e) => Outcome::Err(e),
        }
    }

    // ========================================================================
    // COMBINATORS
    // ========================================================================

    /// Transforms the success value; errors pass through untouched.
    pub fn map<U, F>(self, f: F) -> Outcome<U, E>
    where
        F: FnOnce(T) -> U,
    {
        match self {
            Self::Ok(v) => Outcome::Ok(f(v)),
            Self::Err(e) => Outcome::Err(e),
        }
    }

    /// Transforms the error value; successes pass through untouched.
    pub fn map_err<F2, F>(self, f: F) -> Outcome<T, F2>
    where
        F: FnOnce(E) -> F2,
    {
        match self {
            Self::Ok(v) => Outcome::Ok(v),
            Self::Err(e) => Outcome::Err(f(e)),
        }
    }

    /// Chains a fallible step. Short-circuits on `Err`.
    pub fn bind<U, F>(self, f: F) -> Outcome<U, E>
    where
        F: FnOnce(T) -> Outcome<U, E>,
    {
        match self {
            Self::Ok(v) => f(v),
            Self::Err(e) => Outcome::Err(e),
        }
    }

    /// Alias for [`Outcome::bind`].
    pub fn and_then<U, F>(self, f: F) -> Outcome<U, E>
    where
        F: FnOnce(T) -> Outcome<U, E>,
    {
        self.bind(f)
    }

    /// Recovers from an error with another fallible step.
    pub fn or_else<F2, F>(self, f: F) -> Outcome<T, F2>
    where
        F: FnOnce(E) -> Outcome<T, F2>,
    {
        match self {
            Self::Ok(v) => Outcome::Ok(v),
            Self::Err(e) => f(e),
        }
    }

    /// Applies exactly one of the handlers and returns its output.
    pub fn match_with<U, O, R>(self, on_ok: O, on_err: R) -> U
    where
        O: FnOnce(T) -> U,
        R: FnOnce(E) -> U,
    {
        match self {
            Self::Ok(v) => on_ok(v),
            Self::Err(e) => on_err(e),
        }
    }

    // ========================================================================
    // EXTRACTION
    // ========================================================================

    /// Returns the success value or `default`.
    pub fn unwrap_or(self, default: T) -> T {
        match self {
            Self::Ok(v) => v,
            Self::Err(_) => default,
        }
    }

    /// Returns the success value or computes one from the error.
    pub fn unwrap_or_else<F>(self, f: F) -> T
    where
        F: FnOnce(E) -> T,
    {
        match self {
            Self::Ok(v) => v,
            Self::Err(e) => f(e),
        }
    }

    /// Returns the success value or `T::default()`.
    pub fn unwrap_or_default(self) -> T
    where
        T: Default,
    {
        self.unwrap_or_else(|_| T::default())
    }

    /// The success value, discarding the error.
    pub fn ok(self) -> Maybe<T> {
        match self {
            Self::Ok(v) => Maybe::Some(v),
            Self::Err(_) => Maybe::Empty,
        }
    }

    /// The error value, discarding the success.
    pub fn err(self) -> Maybe<E> {
        match self {
            Self::Ok(_) => Maybe::Empty,
            Self::Err(e) => Maybe::Some(e),
        }
    }

    /// Converts into the standard library `Result`, e.g. to use `?`.
    pub fn into_result(self) -> Result<T, E> {
        self.into()
    }

    /// Iterates over the success value, if any.
    pub fn iter(&self) -> std::option::IntoIter<&T> {
        match self {
            Self::Ok(v) => Some(v).into_iter(),
            Self::Err(_) => None.into_iter(),
        }
    }

    // ========================================================================
    // ASYNC
    // ========================================================================

    /// Like [`Outcome::map`] with an async continuation.
    pub async fn map_async<U, F, Fut>(self, f: F) -> Outcome<U, E>
    where
        F: FnOnce(T) -> Fut,
        Fut: Future<Output = U>,
    {
        match self {
            Self::Ok(v) => Outcome::Ok(f(v).await),
            Self::Err(e) => Outcome::Err(e),
        }
    }

    /// Like [`Outcome::bind`] with an async continuation.
    pub async fn bind_async<U, F, Fut>(self, f: F) -> Outcome<U, E>
    where
        F: FnOnce(T) -> Fut,
        Fut: Future<Output = Outcome<U, E>>,
    {
        match self {
            Self::Ok(v) => f(v).await,
            Self::Err(e) => Outcome::Err(e),
        }
    }
}

impl<T, E> From<Result<T, E>> for Outcome<T, E> {
    fn from(value: Result<T, E>) -> Self {
        match value {
            Ok(v) => Self::Ok(v),
            Err(e) => Self::Err(e),
        }
    }
}

impl<T, E> From<Outcome<T, E>> for Result<T, E> {
    fn from(value: Outcome<T, E>) -> Self {
        match value {
            Outcome::Ok(v) => Ok(v),
            Outcome::Err(e) => Err(e),
        }
    }
}

impl<T: fmt::Display, E: fmt::Display> fmt::Display for Outcome<T, E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Ok(v) => write!(f, "Ok({v})"),
            Self::Err(e) => write!(f, "Err({e})"),
        }
    }
}

/// Collects `Ok` values; stops at the first `Err` and returns it.
impl<A, E, V> FromIterator<Outcome<A, E>> for Outcome<V, E>
where
    V: FromIterator<A>,
{
    fn from_iter<I: IntoIterator<Item = Outcome<A, E>>>(iter: I) -> Self {
        iter.into_iter()
            .map(Outcome::into_result)
            .collect::<Result<V, E>>()
            .into()
    }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::rstest;
    use std::cell::Cell;

    fn parse(s: &str) -> Outcome<i32, String> {
        s.parse::<i32>().map_err(|e| e.to_string()).into()
    }

    #[test]
    fn bind_stops_at_first_error() {
        let later = Cell::new(0);
        let out = Outcome::<i32, String>::Ok(1)
            .bind(|_| Outcome::Err("first".to_owned()))
            .bind(|x: i32| {
                later.set(later.get() + 1);
                Outcome::Ok(x)
            })
            .map_err(|e| format!("{e}!"));
        assert_eq!(out, Outcome::Err("first!".to_owned()));
        assert_eq!(later.get(), 0);
    }

    #[rstest]
    #[case("12", Outcome::Ok(24))]
    #[case("x", Outcome::Err("invalid digit found in string".to_owned()))]
    fn parse_then_double(#[case] input: &str, #[case] expected: Outcome<i32, String>) {
        assert_eq!(parse(input).map(|n| n * 2), expected);
    }

    #[test]
    fn match_with_picks_one_handler() {
        let ok = Outcome::<i32, &str>::Ok(3).match_with(|v| v * 2, |_| -1);
        let err = Outcome::<i32, &str>::Err("e").match_with(|v| v * 2, |e| e.len() as i32);
        assert_eq!((ok, err), (6, 1));
    }

    #[test]
    fn unwrap_or_variants() {
        assert_eq!(Outcome::<i32, &str>::Ok(1).unwrap_or(0), 1);
        assert_eq!(Outcome::<i32, &str>::Err("e").unwrap_or(0), 0);
        assert_eq!(Outcome::<i32, &str>::Err("abc").unwrap_or_else(|e| e.len() as i32), 3);
        assert_eq!(Outcome::<i32, &str>::Err("e").unwrap_or_default(), 0);
    }

    #[test]
    fn or_else_recovers() {
        let out: Outcome<i32, ()> = Outcome::<i32, &str>::Err("e").or_else(|_| Outcome::Ok(5));
        assert_eq!(out, Outcome::Ok(5));
    }

    #[test]
    fn capture_converts_panics() {
        assert_eq!(Outcome::capture(|| "fine"), Outcome::Ok("fine"));

        let caught = Outcome::capture(|| -> u8 { panic!("nope") });
        match caught {
            Outcome::Err(p) => assert_eq!(p.message(), "nope"),
            Outcome::Ok(_) => panic!("expected a captured panic"),
        }
    }

    #[test]
    fn std_result_round_trip() {
        let r: Result<i32, &str> = Outcome::Ok(1).into();
        assert_eq!(r, Ok(1));
        assert_eq!(Outcome::from(Err::<i32, _>("e")), Outcome::Err("e"));
    }

    #[test]
    fn collect_returns_first_error() {
        let all: Outcome<Vec<i32>, &str> =
            vec![Outcome::Ok(1), Outcome::Ok(2)].into_iter().collect();
        assert_eq!(all, Outcome::Ok(vec![1, 2]));

        let failed: Outcome<Vec<i32>, &str> =
            vec![Outcome::Ok(1), Outcome::Err("a"), Outcome::Err("b")].into_iter().collect();
        assert_eq!(failed, Outcome::Err("a"));
    }

    #[test]
    fn ok_and_err_projections() {
        assert_eq!(Outcome::<i32, &str>::Ok(1).ok(), Maybe::Some(1));
        assert_eq!(Outcome::<i32, &str>::Ok(1).err(), Maybe::Empty);
        assert_eq!(Outcome::<i32, &str>::Err("e").err(), Maybe::Some("e"));
        assert_eq!(Outcome::<i32, &str>::Err("e").iter().count(), 0);
    }

    #[test]
    fn display() {
        assert_eq!(Outcome::<i32, &str>::Ok(1).to_string(), "Ok(1)");
        assert_eq!(Outcome::<i32, &str>::Err("bad").to_string(), "Err(bad)");
    }

    #[tokio::test]
    async fn async_combinators() {
        let inc = |x: i32| async move { x + 1 };
        assert_eq!(Outcome::<i32, &str>::Ok(2).map_async(inc).await, Outcome::Ok(3));
        assert_eq!(Outcome::<i32, &str>::Err("e").map_async(inc).await, Outcome::Err("e"));

        let checked = |x: i32| async move { Outcome::<i32, &str>::Ok(x + 1) };
        assert_eq!(Outcome::<i32, &str>::Ok(2).bind_async(checked).await, Outcome::Ok(3));
        assert_eq!(Outcome::<i32, &str>::Err("e").bind_async(checked).await, Outcome::Err("e"));
    }
}
