//! `Reader<R, A>` - computations over a read-only environment
//!
//! A `Reader` wraps `Fn(&R) -> A`. [`Reader::bind`] threads the same
//! environment into the next step, so configuration or dependencies never
//! have to be passed by hand.
//!
//! ```rust
//! use fpkit_core::reader::{Reader, ask, local};
//!
//! let r = ask::<i32>().map(|env| env + 1);
//! assert_eq!(r.run(&5), 6);
//!
//! let sum = ask::<i32>().bind(|x| ask::<i32>().map(move |env| x + env));
//! assert_eq!(sum.run(&3), 6);
//!
//! assert_eq!(local(|env: &i32| env * 2, ask()).run(&4), 8);
//! ```

use std::fmt;

/// A computation that needs an environment `R` to produce an `A`.
pub struct Reader<'a, R, A> {
    run: Box<dyn Fn(&R) -> A + 'a>,
}

impl<'a, R: 'a, A: 'a> Reader<'a, R, A> {
    /// Wraps a function of the environment.
    pub fn new<F>(f: F) -> Self
    where
        F: Fn(&R) -> A + 'a,
    {
        Self { run: Box::new(f) }
    }

    /// A reader that ignores the environment.
    pub fn pure(value: A) -> Self
    where
        A: Clone,
    {
        Self::new(move |_| value.clone())
    }

    /// Runs the computation against `env`.
    pub fn run(&self, env: &R) -> A {
        (self.run)(env)
    }

    /// Transforms the result.
    pub fn map<B: 'a, F>(self, f: F) -> Reader<'a, R, B>
    where
        F: Fn(A) -> B + 'a,
    {
        Reader::new(move |env| f(self.run(env)))
    }

    /// Chains a reader-producing step; both see the same environment.
    pub fn bind<B: 'a, F>(self, f: F) -> Reader<'a, R, B>
    where
        F: Fn(A) -> Reader<'a, R, B> + 'a,
    {
        Reader::new(move |env| f(self.run(env)).run(env))
    }
}

/// The environment itself.
pub fn ask<'a, R: Clone + 'a>() -> Reader<'a, R, R> {
    Reader::new(R::clone)
}

/// A projection of the environment.
pub fn asks<'a, R: 'a, A: 'a, F>(f: F) -> Reader<'a, R, A>
where
    F: Fn(&R) -> A + 'a,
{
    Reader::new(f)
}

/// Runs `reader` in an environment modified by `f`.
pub fn local<'a, R: 'a, A: 'a, F>(f: F, reader: Reader<'a, R, A>) -> Reader<'a, R, A>
where
    F: Fn(&R) -> R + 'a,
{
    Reader::new(move |env| reader.run(&f(env)))
}

impl<R, A> fmt::Debug for Reader<'_, R, A> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Reader").finish_non_exhaustive()
    }
}
