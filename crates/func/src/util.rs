//! Small building blocks

use fpkit_core::{CapturedPanic, Outcome};

/// Returns its argument.
pub fn identity<T>(x: T) -> T {
    x
}

/// A function that ignores its argument and always returns `value`.
pub fn constant<T, A>(value: T) -> impl Fn(A) -> T
where
    T: Clone,
{
    move |_| value.clone()
}

/// Wraps `f` as a side effect: the returned function runs `f(&x)` and
/// returns `x`.
pub fn tap<T, F>(f: F) -> impl Fn(T) -> T
where
    F: Fn(&T),
{
    move |x| {
        f(&x);
        x
    }
}

/// Wraps `f` so that a panic becomes `Outcome::Err(CapturedPanic)`.
///
/// ```rust
/// use fpkit_func::try_catch;
///
/// let parse = try_catch(|s: &str| s.parse::<i32>().expect("digits only"));
/// assert!(parse("12").is_ok());
/// assert!(parse("twelve").is_err());
/// ```
pub fn try_catch<A, T, F>(f: F) -> impl Fn(A) -> Outcome<T, CapturedPanic>
where
    F: Fn(A) -> T,
{
    move |a| Outcome::capture(|| f(a))
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::cell::RefCell;

    #[test]
    fn identity_and_constant() {
        assert_eq!(identity("x"), "x");
        let zero = constant::<i32, &str>(0);
        assert_eq!((zero("a"), zero("b")), (0, 0));
    }

    #[test]
    fn tap_returns_input() {
        let log = RefCell::new(Vec::new());
        let logged = tap(|x: &i32| log.borrow_mut().push(*x));
        assert_eq!(logged(5) + logged(6), 11);
        assert_eq!(*log.borrow(), vec![5, 6]);
    }

    #[test]
    fn try_catch_preserves_message() {
        let checked = try_catch(|n: u32| {
            assert!(n < 10, "too large: {n}");
            n
        });
        assert_eq!(checked(3), Outcome::Ok(3));
        match checked(12) {
            Outcome::Err(p) => assert_eq!(p.message(), "too large: 12"),
            Outcome::Ok(v) => panic!("expected a captured panic, got {v}"),
        }
    }
}
