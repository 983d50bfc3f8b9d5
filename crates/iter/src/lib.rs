//! # fpkit-iter
//!
//! Lazy, pull-based sequence helpers.
//!
//! Every adaptor here pulls from its source one element at a time, only when
//! the consumer asks for the next output. Nothing is collected up front, so
//! infinite sources are fine as long as the consumer stops.
//!
//! ## Key Components
//!
//! - **[`map_seq`]**, **[`filter_seq`]**: element-wise transform and filter
//! - **[`chunk`]**: fixed-size groups, the last one possibly shorter
//! - **[`group_by_key`]**: merges *adjacent* items with equal keys
//! - **[`LazyExt`]**: the same adaptors as iterator methods
//!
//! ## Usage
//!
//! ```rust
//! use fpkit_iter::{chunk, filter_seq, map_seq};
//!
//! let evens = filter_seq(|n: &u64| n % 2 == 0, map_seq(|n| n * 3, 1..));
//! let first: Vec<u64> = evens.take(3).collect();
//! assert_eq!(first, vec![6, 12, 18]);
//!
//! let groups: Vec<Vec<i32>> = chunk([1, 2, 3, 4, 5], 2).unwrap().collect();
//! assert_eq!(groups, vec![vec![1, 2], vec![3, 4], vec![5]]);
//! ```

pub mod chunk;
pub mod ext;
pub mod group;
pub mod seq;

pub use chunk::{Chunks, chunk};
pub use ext::LazyExt;
pub use group::{GroupByKey, group_by_key};
pub use seq::{filter_seq, map_seq};

pub use fpkit_error::{FpError, FpResult};
