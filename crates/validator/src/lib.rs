//! # fpkit-validator
//!
//! Error-accumulating validation.
//!
//! Where [`Outcome::bind`](fpkit_core::Outcome::bind) stops at the first
//! failure, validation here runs *every* check against the same original
//! value and reports all failures together.
//!
//! ## Key Components
//!
//! - **[`validate_all`]**: run a list of checks, collect every error
//! - **[`Validation`]**: a reusable, named-by-type set of checks
//! - **[`ensure`]**: build a check from a predicate and an error value
//!
//! ## Usage
//!
//! ```rust
//! use fpkit_core::prelude::*;
//! use fpkit_validator::{ensure, validate_all};
//!
//! let required = ensure(|s: &String| !s.is_empty(), "required");
//! let short = ensure(|s: &String| s.len() <= 8, "too long");
//! let plain = ensure(|s: &String| s.chars().all(char::is_alphanumeric), "invalid characters");
//! let checks: [&dyn Fn(&String) -> Outcome<(), &'static str>; 3] = [&required, &short, &plain];
//!
//! assert_eq!(validate_all("ada".to_owned(), checks), Outcome::Ok("ada".to_owned()));
//!
//! let errors = validate_all("not valid!".to_owned(), checks).err().map(NonEmptyList::into_vec);
//! assert_eq!(errors, Maybe::Some(vec!["too long", "invalid characters"]));
//! ```

pub mod accumulate;
pub mod builder;

pub use accumulate::{ensure, validate_all};
pub use builder::{Check, Validation};

/// Common imports for validation.
pub mod prelude {
    pub use super::{Check, Validation, ensure, validate_all};
}
