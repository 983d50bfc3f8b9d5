//! Reusable sets of checks

use std::fmt;

use fpkit_core::{NonEmptyList, Outcome};

use crate::accumulate::validate_all;

/// A boxed check over `V` failing with `E`.
pub type Check<'a, V, E> = Box<dyn Fn(&V) -> Outcome<(), E> + 'a>;

/// An ordered list of checks that can be run against many values.
///
/// ```rust
/// use fpkit_core::Outcome;
/// use fpkit_validator::{Validation, ensure};
///
/// #[derive(Debug, PartialEq)]
/// struct Signup { name: String, age: u8 }
///
/// let rules = Validation::new()
///     .check(ensure(|s: &Signup| !s.name.is_empty(), "name is required"))
///     .check(ensure(|s: &Signup| s.age >= 18, "must be an adult"));
///
/// let ok = Signup { name: "ada".into(), age: 36 };
/// assert!(rules.validate(ok).is_ok());
///
/// let bad = Signup { name: String::new(), age: 9 };
/// match rules.validate(bad) {
///     Outcome::Err(errors) => assert_eq!(errors.len(), 2),
///     Outcome::Ok(_) => unreachable!(),
/// }
/// ```
pub struct Validation<'a, V, E> {
    checks: Vec<Check<'a, V, E>>,
}

impl<'a, V, E> Validation<'a, V, E> {
    /// An empty set; validates everything.
    pub fn new() -> Self {
        Self { checks: Vec::new() }
    }

    /// Appends a check. Whatever a passing check returns is discarded.
    pub fn check<T, F>(mut self, f: F) -> Self
    where
        F: Fn(&V) -> Outcome<T, E> + 'a,
    {
        self.checks.push(Box::new(move |value: &V| f(value).map(|_| ())));
        self
    }

    /// Number of checks.
    pub fn len(&self) -> usize {
        self.checks.len()
    }

    /// Whether there are no checks.
    pub fn is_empty(&self) -> bool {
        self.checks.is_empty()
    }

    /// Runs every check against `value`; see [`validate_all`].
    pub fn validate(&self, value: V) -> Outcome<V, NonEmptyList<E>> {
        validate_all(value, &self.checks)
    }
}

impl<V, E> Default for Validation<'_, V, E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<V, E> fmt::Debug for Validation<'_, V, E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Validation")
            .field("checks", &self.checks.len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ensure;
    use pretty_assertions::assert_eq;

    fn password_rules<'a>() -> Validation<'a, String, String> {
        Validation::new()
            .check(ensure(|p: &String| p.len() >= 8, "too short".to_owned()))
            .check(|p: &String| {
                if p.chars().any(|c| c.is_ascii_digit()) {
                    Outcome::Ok(p.len())
                } else {
                    Outcome::Err("needs a digit".to_owned())
                }
            })
            .check(ensure(|p: &String| p != "password1", "too common".to_owned()))
    }

    #[test]
    fn reusable_across_values() {
        let rules = password_rules();
        assert_eq!(rules.len(), 3);
        assert!(!rules.is_empty());

        assert_eq!(rules.validate("hunter22xx".to_owned()), Outcome::Ok("hunter22xx".to_owned()));
        assert_eq!(
            rules.validate("abc".to_owned()).err().map(NonEmptyList::into_vec),
            fpkit_core::Maybe::Some(vec!["too short".to_owned(), "needs a digit".to_owned()])
        );
        assert_eq!(
            rules.validate("password1".to_owned()).err().map(NonEmptyList::into_vec),
            fpkit_core::Maybe::Some(vec!["too common".to_owned()])
        );
    }

    #[test]
    fn empty_validation_accepts_anything() {
        let rules = Validation::<i32, ()>::default();
        assert!(rules.is_empty());
        assert_eq!(rules.validate(5), Outcome::Ok(5));
        assert_eq!(format!("{rules:?}"), "Validation { checks: 0 }");
    }
}
