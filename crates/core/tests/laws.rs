//! Property-based law checks for `Maybe` and `Outcome`.

use fpkit_core::prelude::*;
use proptest::prelude::*;

fn maybe_of(n: Option<i64>) -> Maybe<i64> {
    from_nullable(n)
}

fn outcome_of(r: Result<i64, String>) -> Outcome<i64, String> {
    Outcome::from(r)
}

fn half(n: i64) -> Maybe<i64> {
    if n % 2 == 0 { Maybe::Some(n / 2) } else { Maybe::Empty }
}

fn checked_inc(n: i64) -> Outcome<i64, String> {
    n.checked_add(1)
        .map_or_else(|| Outcome::Err("overflow".to_owned()), Outcome::Ok)
}

fn checked_double(n: i64) -> Outcome<i64, String> {
    n.checked_mul(2)
        .map_or_else(|| Outcome::Err("overflow".to_owned()), Outcome::Ok)
}

// ============================================================================
// MAYBE
// ============================================================================

proptest! {
    #[test]
    fn maybe_map_then_unwrap(v in any::<i32>(), d in any::<i64>()) {
        let f = |x: i32| i64::from(x) * 3;
        prop_assert_eq!(Maybe::Some(v).map(f).unwrap_or(d), f(v));
        prop_assert_eq!(Maybe::<i32>::Empty.map(f).unwrap_or(d), d);
    }

    #[test]
    fn maybe_left_identity(v in any::<i64>()) {
        prop_assert_eq!(Maybe::Some(v).bind(half), half(v));
    }

    #[test]
    fn maybe_right_identity(n in proptest::option::of(any::<i64>())) {
        prop_assert_eq!(maybe_of(n).bind(Maybe::Some), maybe_of(n));
    }

    #[test]
    fn maybe_associativity(n in proptest::option::of(any::<i64>())) {
        let lhs = maybe_of(n).bind(half).bind(half);
        let rhs = maybe_of(n).bind(|x| half(x).bind(half));
        prop_assert_eq!(lhs, rhs);
    }

    #[test]
    fn maybe_zip_is_some_iff_both(
        a in proptest::option::of(any::<u8>()),
        b in proptest::option::of(any::<u8>()),
    ) {
        let zipped = from_nullable(a).zip(from_nullable(b));
        prop_assert_eq!(zipped.is_some(), a.is_some() && b.is_some());
    }
}

// ============================================================================
// OUTCOME
// ============================================================================

proptest! {
    #[test]
    fn outcome_bind_ok_is_identity(r in any::<Result<i64, String>>()) {
        prop_assert_eq!(outcome_of(r.clone()).bind(Outcome::Ok), outcome_of(r));
    }

    #[test]
    fn outcome_left_identity(v in any::<i64>()) {
        prop_assert_eq!(Outcome::<i64, String>::Ok(v).bind(checked_inc), checked_inc(v));
    }

    #[test]
    fn outcome_associativity(r in any::<Result<i64, String>>()) {
        let lhs = outcome_of(r.clone()).bind(checked_inc).bind(checked_double);
        let rhs = outcome_of(r).bind(|x| checked_inc(x).bind(checked_double));
        prop_assert_eq!(lhs, rhs);
    }

    #[test]
    fn outcome_map_err_leaves_ok(v in any::<i64>()) {
        let mapped = Outcome::<i64, String>::Ok(v).map_err(|e| e.len());
        prop_assert_eq!(mapped, Outcome::Ok(v));
    }

    #[test]
    fn outcome_err_passes_map(e in ".{0,12}") {
        let mapped = Outcome::<i64, String>::Err(e.clone()).map(|x| x + 1);
        prop_assert_eq!(mapped, Outcome::Err(e));
    }
}
