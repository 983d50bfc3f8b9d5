//! # fpkit-core
//!
//! Algebraic data types for the fpkit toolkit.
//!
//! ## Key Components
//!
//! - **[`Maybe`]**: optional presence of a value (`Some` / `Empty`)
//! - **[`Outcome`]**: success or failure (`Ok` / `Err`), plus
//!   [`Outcome::capture`], the single panic-to-value boundary
//! - **[`Either`]**: one of two neutral alternatives
//! - **[`NonEmptyList`]**: ordered list with at least one element, used for
//!   accumulated errors
//! - **Traverse**: [`sequence_maybe`], [`traverse_maybe`],
//!   [`sequence_outcome`], [`traverse_outcome`]
//! - **[`Reader`]**, **[`State`]**, **[`Writer`]**: environment, state and
//!   log threading
//!
//! ## Usage
//!
//! ```rust
//! use fpkit_core::prelude::*;
//!
//! let total = from_nullable(Some("21"))
//!     .ok_or("missing")
//!     .bind(|s| Outcome::from(s.parse::<i32>().map_err(|_| "not a number")))
//!     .map(|n| n * 2)
//!     .unwrap_or(0);
//! assert_eq!(total, 42);
//! ```
//!
//! Every value in this crate is immutable once built; combinators consume
//! their receiver and return a new value.

pub mod either;
pub mod maybe;
pub mod nonempty;
pub mod outcome;
pub mod reader;
pub mod state;
pub mod traverse;
pub mod writer;

pub use either::Either;
pub use maybe::{Maybe, from_nullable};
pub use nonempty::NonEmptyList;
pub use outcome::Outcome;
pub use reader::Reader;
pub use state::State;
pub use traverse::{sequence_maybe, sequence_outcome, traverse_maybe, traverse_outcome};
pub use writer::{Monoid, Writer};

pub use fpkit_error::CapturedPanic;

/// Common imports for working with the fpkit data types.
pub mod prelude {
    pub use super::{
        CapturedPanic, Either, Maybe, Monoid, NonEmptyList, Outcome, Reader, State, Writer,
        from_nullable, sequence_maybe, sequence_outcome, traverse_maybe, traverse_outcome,
    };
}
