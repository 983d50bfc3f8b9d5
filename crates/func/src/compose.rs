//! Composition: [`compose`] and the [`Pipe`] extension trait

/// `compose(f, g)(x)` is `f(g(x))`.
pub fn compose<A, B, C, F, G>(f: F, g: G) -> impl Fn(A) -> C
where
    F: Fn(B) -> C,
    G: Fn(A) -> B,
{
    move |x| f(g(x))
}

/// Method-call piping for any value.
///
/// ```rust
/// use fpkit_func::Pipe;
///
/// let len = "hello".pipe(str::len).pipe(|n| n * 2);
/// assert_eq!(len, 10);
/// ```
pub trait Pipe: Sized {
    /// Applies `f` to `self`.
    fn pipe<R, F>(self, f: F) -> R
    where
        F: FnOnce(Self) -> R,
    {
        f(self)
    }

    /// Runs `f` on a borrow of `self` and returns `self` unchanged.
    fn tap<F>(self, f: F) -> Self
    where
        F: FnOnce(&Self),
    {
        f(&self);
        self
    }
}

impl<T> Pipe for T {}
