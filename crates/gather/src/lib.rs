//! # fpkit-gather
//!
//! Concurrent gathering of futures that resolve to [`Outcome`](fpkit_core::Outcome).
//!
//! ## Key Components
//!
//! - **[`gather_results`]**: fail fast on the first error *to complete*
//! - **[`gather_results_accumulate`]**: wait for everything, report every
//!   error
//! - **[`gather_results_until`]**, **[`gather_results_accumulate_until`]**:
//!   the same, stopped by a [`CancellationToken`]
//! - **[`Gather`]** / **[`GatherConfig`]**: the same four operations under a
//!   bounded in-flight window
//!
//! Successful values always come back in submission order, whatever order
//! the tasks finished in.
//!
//! ## Usage
//!
//! ```rust
//! use fpkit_core::Outcome;
//! use fpkit_gather::gather_results_accumulate;
//!
//! async fn parse(s: &str) -> Outcome<i32, String> {
//!     Outcome::from(s.parse::<i32>().map_err(|_| format!("bad input: {s}")))
//! }
//!
//! # tokio::runtime::Builder::new_current_thread().build().unwrap().block_on(async {
//! let out = gather_results_accumulate(["1", "x", "3", "y"].map(parse)).await;
//! let errors = out.err().map(|e| e.into_vec());
//! let expected = vec!["bad input: x".to_owned(), "bad input: y".to_owned()];
//! assert_eq!(errors, fpkit_core::Maybe::Some(expected));
//! # });
//! ```

pub mod config;
mod drive;
pub mod error;
pub mod gather;

pub use config::GatherConfig;
pub use error::{AccumulateError, GatherError, Partial};
pub use gather::{
    Gather, gather_results, gather_results_accumulate, gather_results_accumulate_until,
    gather_results_until,
};

pub use tokio_util::sync::CancellationToken;
