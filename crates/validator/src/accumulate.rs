//! Running checks and collecting their errors

use fpkit_core::{Maybe, NonEmptyList, Outcome};

/// Runs every check against `value`, in order, and collects the failures.
///
/// Each check sees the original `value` and runs exactly once; a failing
/// check never stops the ones after it. Whatever a passing check returns
/// is discarded.
///
/// Returns `Ok(value)` when every check passes, otherwise every error in
/// declaration order.
pub fn validate_all<V, T, E, I, F>(value: V, checks: I) -> Outcome<V, NonEmptyList<E>>
where
    I: IntoIterator<Item = F>,
    F: Fn(&V) -> Outcome<T, E>,
{
    let mut ran = 0_usize;
    let mut errors = Vec::new();
    for check in checks {
        ran += 1;
        if let Outcome::Err(e) = check(&value) {
            errors.push(e);
        }
    }

    tracing::debug!(checks = ran, failures = errors.len(), "validation finished");

    match NonEmptyList::from_vec(errors) {
        Maybe::Some(errors) => Outcome::Err(errors),
        Maybe::Empty => Outcome::Ok(value),
    }
}

/// A check that fails with a clone of `error` when `predicate` is false.
pub fn ensure<V, E, P>(predicate: P, error: E) -> impl Fn(&V) -> Outcome<(), E>
where
    V: ?Sized,
    E: Clone,
    P: Fn(&V) -> bool,
{
    move |value| {
        if predicate(value) {
            Outcome::Ok(())
        } else {
            Outcome::Err(error.clone())
        }
    }
}
