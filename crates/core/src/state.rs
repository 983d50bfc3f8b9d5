//! `State<S, A>` - pure stateful computations
//!
//! A `State` wraps `Fn(S) -> (A, S)`: it receives the current state and
//! returns a value together with the next state. Nothing is mutated; the
//! state is threaded through [`State::bind`].
//!
//! ```rust
//! use fpkit_core::state::{get, modify, put};
//!
//! assert_eq!(get::<i32>().map(|x| x + 1).run(5), (6, 5));
//! assert_eq!(put(10).bind(|()| get()).run(0), (10, 10));
//! assert_eq!(modify(|x: i32| x * 2).run(3), ((), 6));
//! ```

use std::fmt;

/// A computation that reads and writes a state `S` while producing an `A`.
pub struct State<'a, S, A> {
    run: Box<dyn Fn(S) -> (A, S) + 'a>,
}

impl<'a, S: 'a, A: 'a> State<'a, S, A> {
    /// Wraps a state transition.
    pub fn new<F>(f: F) -> Self
    where
        F: Fn(S) -> (A, S) + 'a,
    {
        Self { run: Box::new(f) }
    }

    /// Produces `value` and leaves the state unchanged.
    pub fn pure(value: A) -> Self
    where
        A: Clone,
    {
        Self::new(move |s| (value.clone(), s))
    }

    /// Runs from `initial`, returning `(value, final_state)`.
    pub fn run(&self, initial: S) -> (A, S) {
        (self.run)(initial)
    }

    /// Runs and keeps only the value.
    pub fn eval(&self, initial: S) -> A {
        self.run(initial).0
    }

    /// Runs and keeps only the final state.
    pub fn exec(&self, initial: S) -> S {
        self.run(initial).1
    }

    /// Transforms the value; the state transition is unchanged.
    pub fn map<B: 'a, F>(self, f: F) -> State<'a, S, B>
    where
        F: Fn(A) -> B + 'a,
    {
        State::new(move |s| {
            let (a, s) = self.run(s);
            (f(a), s)
        })
    }

    /// Chains a state-producing step, feeding it the intermediate state.
    pub fn bind<B: 'a, F>(self, f: F) -> State<'a, S, B>
    where
        F: Fn(A) -> State<'a, S, B> + 'a,
    {
        State::new(move |s| {
            let (a, s) = self.run(s);
            f(a).run(s)
        })
    }
}

/// The current state as the value.
pub fn get<'a, S: Clone + 'a>() -> State<'a, S, S> {
    State::new(|s: S| (s.clone(), s))
}

/// Replaces the state.
pub fn put<'a, S: Clone + 'a>(state: S) -> State<'a, S, ()> {
    State::new(move |_| ((), state.clone()))
}

/// Updates the state with `f`.
pub fn modify<'a, S: 'a, F>(f: F) -> State<'a, S, ()>
where
    F: Fn(S) -> S + 'a,
{
    State::new(move |s| ((), f(s)))
}

/// A projection of the current state; the state is unchanged.
pub fn gets<'a, S: 'a, A: 'a, F>(f: F) -> State<'a, S, A>
where
    F: Fn(&S) -> A + 'a,
{
    State::new(move |s| (f(&s), s))
}

impl<S, A> fmt::Debug for State<'_, S, A> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("State").finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    // Hands out sequential ids and remembers how many were issued.
    fn next_id<'a>() -> State<'a, u32, String> {
        get::<u32>().bind(|n| put(n + 1).map(move |()| format!("id-{n}")))
    }

    #[test]
    fn state_threads_through_bind() {
        let two = next_id().bind(|first| next_id().map(move |second| (first.clone(), second)));
        let ((a, b), counter) = two.run(7);
        assert_eq!((a.as_str(), b.as_str(), counter), ("id-7", "id-8", 9));
    }

    #[test]
    fn get_then_modify() {
        let s = get::<i32>().bind(|x| modify(move |_| x + 1));
        assert_eq!(s.run(2), ((), 3));
    }

    #[test]
    fn eval_exec_gets() {
        let len = gets(|s: &String| s.len());
        assert_eq!(len.eval("abc".to_owned()), 3);
        assert_eq!(modify(|s: String| s + "!").exec("hi".to_owned()), "hi!");
        assert_eq!(State::<i32, char>::pure('x').run(1), ('x', 1));
    }
}
