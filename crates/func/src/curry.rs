//! Currying and argument flipping
//!
//! Curried functions hand out boxed closures: each stage may be called any
//! number of times, so captured arguments are cloned per call.

use std::rc::Rc;

/// A boxed single-argument function, one stage of a curried chain.
pub type Curried<'a, A, R> = Box<dyn Fn(A) -> R + 'a>;

/// `curry2(f)(a)(b)` is `f(a, b)`.
///
/// ```rust
/// use fpkit_func::curry2;
///
/// let add = curry2(|a: i32, b: i32| a + b);
/// let add5 = add(5);
/// assert_eq!((add5(1), add5(2)), (6, 7));
/// ```
pub fn curry2<'a, A, B, R, F>(f: F) -> impl Fn(A) -> Curried<'a, B, R>
where
    F: Fn(A, B) -> R + 'a,
    A: Clone + 'a,
    B: 'a,
    R: 'a,
{
    let f = Rc::new(f);
    move |a| -> Curried<'a, B, R> {
        let f = Rc::clone(&f);
        Box::new(move |b| f(a.clone(), b))
    }
}

/// `curry3(f)(a)(b)(c)` is `f(a, b, c)`.
pub fn curry3<'a, A, B, C, R, F>(f: F) -> impl Fn(A) -> Curried<'a, B, Curried<'a, C, R>>
where
    F: Fn(A, B, C) -> R + 'a,
    A: Clone + 'a,
    B: Clone + 'a,
    C: 'a,
    R: 'a,
{
    let f = Rc::new(f);
    move |a| -> Curried<'a, B, Curried<'a, C, R>> {
        let f = Rc::clone(&f);
        Box::new(move |b| -> Curried<'a, C, R> {
            let f = Rc::clone(&f);
            let a = a.clone();
            Box::new(move |c| f(a.clone(), b.clone(), c))
        })
    }
}

/// Swaps the two arguments: `flip(f)(b, a)` is `f(a, b)`.
pub fn flip<A, B, R, F>(f: F) -> impl Fn(B, A) -> R
where
    F: Fn(A, B) -> R,
{
    move |b, a| f(a, b)
}
