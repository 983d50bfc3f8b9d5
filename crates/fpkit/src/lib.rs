//! # fpkit
//!
//! A small functional-programming toolkit.
//!
//! This crate re-exports the fpkit family; depend on it alone and
//! `use fpkit::prelude::*;`.
//!
//! | Module | Contents |
//! |--------|----------|
//! | [`adt`] | `Maybe`, `Outcome`, `Either`, `NonEmptyList`, `Reader`, `State`, `Writer` |
//! | [`func`] | `pipe!`, `compose`, `curry2`/`curry3`, `Thunk`, `once`, folds |
//! | [`iter`] | `map_seq`, `filter_seq`, `chunk`, `group_by_key` |
//! | [`validator`] | `validate_all`, `Validation`, `ensure` |
//! | [`gather`] | `gather_results`, `gather_results_accumulate` and cancellable variants |
//!
//! ## Usage
//!
//! ```rust
//! use fpkit::prelude::*;
//!
//! let parsed = pipe!(
//!     "7,x,9",
//!     |s: &str| s.split(',').map(|p| from_nullable(p.parse::<i32>().ok())).collect::<Vec<_>>(),
//!     sequence_maybe,
//! );
//! assert_eq!(parsed, Maybe::Empty);
//!
//! let checks = Validation::new()
//!     .check(ensure(|n: &i32| *n > 0, "must be positive"))
//!     .check(ensure(|n: &i32| n % 2 == 0, "must be even"));
//! assert!(checks.validate(4).is_ok());
//! ```

pub use fpkit_core as adt;
pub use fpkit_error as error;
pub use fpkit_func as func;
pub use fpkit_gather as gather;
pub use fpkit_iter as iter;
pub use fpkit_validator as validator;

pub use fpkit_error::{CapturedPanic, ConfigError, FpError, FpResult};

/// Everything needed for day-to-day use.
pub mod prelude {
    // ========================================================================
    // ADTs
    // ========================================================================

    pub use fpkit_core::prelude::*;

    // ========================================================================
    // ERRORS
    // ========================================================================

    pub use fpkit_error::{FpError, FpResult};

    // ========================================================================
    // COMPOSITION
    // ========================================================================

    pub use fpkit_func::{
        Pipe, Thunk, async_pipe, compose, constant, curry2, curry3, flip, foldl, foldr, identity,
        once, pipe, reduce, tap, try_catch,
    };

    // ========================================================================
    // SEQUENCES
    // ========================================================================

    pub use fpkit_iter::{LazyExt, chunk, filter_seq, group_by_key, map_seq};

    // ========================================================================
    // VALIDATION
    // ========================================================================

    pub use fpkit_validator::{Validation, ensure, validate_all};

    // ========================================================================
    // ASYNC GATHERING
    // ========================================================================

    pub use fpkit_gather::{
        AccumulateError, CancellationToken, Gather, GatherConfig, GatherError,
        gather_results, gather_results_accumulate, gather_results_accumulate_until,
        gather_results_until,
    };
}
