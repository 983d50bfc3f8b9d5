//! `Writer<W, A>` - a value with an accumulated log
//!
//! The log type must be a [`Monoid`]: it has an identity ([`Monoid::empty`])
//! and an associative [`Monoid::combine`]. [`Writer::bind`] combines the
//! log of the first step with the log of the second, in that order.
//!
//! ```rust
//! use fpkit_core::writer::{Writer, tell};
//!
//! let w = Writer::<Vec<String>, i32>::unit(5)
//!     .bind(|x| tell(vec![format!("got {x}")]).map(move |()| x * 2));
//! assert_eq!(w.run(), (10, vec!["got 5".to_owned()]));
//! ```

/// A type with an identity element and an associative combine.
pub trait Monoid: Sized {
    /// The identity: `empty().combine(x) == x == x.combine(empty())`.
    fn empty() -> Self;

    /// Associative combination of two values.
    fn combine(self, other: Self) -> Self;

    /// Folds every item together, starting from [`Monoid::empty`].
    fn concat_all<I>(items: I) -> Self
    where
        I: IntoIterator<Item = Self>,
    {
        items.into_iter().fold(Self::empty(), Self::combine)
    }
}

impl Monoid for String {
    fn empty() -> Self {
        Self::new()
    }

    fn combine(mut self, other: Self) -> Self {
        self.push_str(&other);
        self
    }
}

impl<T> Monoid for Vec<T> {
    fn empty() -> Self {
        Self::new()
    }

    fn combine(mut self, other: Self) -> Self {
        self.extend(other);
        self
    }
}

impl Monoid for () {
    fn empty() -> Self {}

    fn combine(self, (): Self) -> Self {}
}

/// A value `A` produced alongside a log `W`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Writer<W, A> {
    value: A,
    log: W,
}

impl<W: Monoid, A> Writer<W, A> {
    /// A value with an empty log.
    pub fn unit(value: A) -> Self {
        Self::new(value, W::empty())
    }

    /// A value with the given log.
    pub fn new(value: A, log: W) -> Self {
        Self { value, log }
    }

    /// The value.
    pub fn value(&self) -> &A {
        &self.value
    }

    /// The log so far.
    pub fn log(&self) -> &W {
        &self.log
    }

    /// Returns `(value, log)`.
    pub fn run(self) -> (A, W) {
        (self.value, self.log)
    }

    /// Transforms the value; the log is unchanged.
    pub fn map<B, F>(self, f: F) -> Writer<W, B>
    where
        F: FnOnce(A) -> B,
    {
        Writer::new(f(self.value), self.log)
    }

    /// Chains a logging step; logs are combined left then right.
    pub fn bind<B, F>(self, f: F) -> Writer<W, B>
    where
        F: FnOnce(A) -> Writer<W, B>,
    {
        let next = f(self.value);
        Writer::new(next.value, self.log.combine(next.log))
    }

    /// Pairs the value with a copy of the log accumulated so far.
    pub fn listen(self) -> Writer<W, (A, W)>
    where
        W: Clone,
    {
        let log = self.log.clone();
        Writer::new((self.value, log), self.log)
    }

    /// Rewrites the log; the value is unchanged.
    pub fn censor<F>(self, f: F) -> Self
    where
        F: FnOnce(W) -> W,
    {
        Self::new(self.value, f(self.log))
    }
}

/// Appends to the log without producing a value.
pub fn tell<W: Monoid>(log: W) -> Writer<W, ()> {
    Writer::new((), log)
}
