//! Bounded top-k selection.
//!
//! [`select`] returns the `k` largest elements of a collection in one pass,
//! keeping at most `k` of them in a fixed-capacity min-heap
//! ([`BoundedMinHeap`]). The remaining modules back the `topk` command-line
//! tool: input parsing, configuration, reporting, and a sort-based reference
//! used to check results.

pub mod bounded_heap;
pub mod config;
pub mod error;
pub mod input;
pub mod oracle;
pub mod output;
pub mod selector;
pub mod types;

pub use bounded_heap::{Admission, BoundedMinHeap};
pub use error::{Error, Result};
pub use selector::{select, select_slice, select_with_stats, SelectionStats, TopKSelector};
