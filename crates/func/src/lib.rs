//! # fpkit-func
//!
//! Function composition helpers.
//!
//! ## Key Components
//!
//! - **[`pipe!`]** / **[`Pipe`]**: thread a value left to right through a
//!   list of functions
//! - **[`compose`]** / **[`compose!`]**: build a function right to left
//! - **[`curry2`]**, **[`curry3`]**: turn a multi-argument function into a
//!   chain of single-argument ones
//! - **[`Thunk`]**, **[`once`]**: computations evaluated at most once
//! - **[`foldl`]**, **[`foldr`]**, **[`reduce`]**: folds over any iterable
//! - **[`async_pipe!`]**: `pipe!` for async steps
//!
//! ## Usage
//!
//! ```rust
//! use fpkit_func::{compose, curry2, pipe};
//!
//! let inc = |x: i32| x + 1;
//! let double = |x: i32| x * 2;
//!
//! assert_eq!(pipe!(3, inc, double), 8);
//! assert_eq!(compose(inc, double)(3), 7);
//! assert_eq!(curry2(|a: i32, b: i32| a - b)(10)(4), 6);
//! ```

pub mod compose;
pub mod curry;
pub mod fold;
pub mod memo;
pub mod util;

pub use compose::{Pipe, compose};
pub use curry::{Curried, curry2, curry3, flip};
pub use fold::{foldl, foldr, reduce};
pub use memo::{Thunk, once, thunk};
pub use util::{constant, identity, tap, try_catch};

/// Passes a value through each function in turn: `pipe!(x, f, g)` is `g(f(x))`.
///
/// `pipe!(x)` is `x`.
///
/// ```rust
/// use fpkit_func::pipe;
///
/// let shout = pipe!("hi", str::to_uppercase, |s: String| s + "!");
/// assert_eq!(shout, "HI!");
/// ```
#[macro_export]
macro_rules! pipe {
    ($value:expr $(,)?) => {
        $value
    };
    ($value:expr, $f:expr $(, $rest:expr)* $(,)?) => {
        $crate::pipe!(($f)($value) $(, $rest)*)
    };
}

/// Composes functions right to left: `compose!(f, g, h)(x)` is `f(g(h(x)))`.
///
/// ```rust
/// use fpkit_func::compose;
///
/// let f = compose!(|x: i32| x - 1, |x: i32| x * 10, |x: i32| x + 2);
/// assert_eq!(f(1), 29);
/// ```
#[macro_export]
macro_rules! compose {
    ($f:expr $(,)?) => {
        $f
    };
    ($f:expr, $($rest:expr),+ $(,)?) => {
        $crate::compose($f, $crate::compose!($($rest),+))
    };
}

/// Async `pipe!`: awaits each step before feeding its output to the next.
///
/// Expands to a future; nothing runs until it is awaited.
///
/// ```rust
/// use fpkit_func::async_pipe;
///
/// async fn fetch(id: u32) -> String { format!("user-{id}") }
/// async fn shout(s: String) -> String { s.to_uppercase() }
///
/// # let rt = tokio::runtime::Builder::new_current_thread().build().unwrap();
/// # rt.block_on(async {
/// assert_eq!(async_pipe!(7, fetch, shout).await, "USER-7");
/// # });
/// ```
#[macro_export]
macro_rules! async_pipe {
    ($value:expr $(, $f:expr)* $(,)?) => {
        async move {
            let value = $value;
            $( let value = ($f)(value).await; )*
            value
        }
    };
}
