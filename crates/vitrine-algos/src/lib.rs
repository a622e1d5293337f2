//! Reference trace generators for the Vitrine sorting trace engine.
//!
//! Five classic comparison sorts, each reframed as a producer of the
//! deterministic, fully-ordered step sequence its run goes through:
//!
//! 1. [`bubble_sort`] — adjacent exchange, stable
//! 2. [`selection_sort`] — minimum selection
//! 3. [`insertion_sort`] — shift and insert, stable
//! 4. [`merge_sort`] — divide and merge, stable, **writes back**
//! 5. [`quick_sort`] — Lomuto partition
//!
//! Every generator is a pure, total function over any finite `i32`
//! sequence; the merge generator alone overwrites its input slice with
//! the sorted result. Uniform dynamic dispatch goes through the
//! [`registry`](crate::registry) module.

#![forbid(unsafe_code)]
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

pub mod bubble;
pub mod insertion;
pub mod merge;
pub mod quick;
pub mod registry;
pub mod selection;

pub use bubble::{bubble_sort, BubbleSort};
pub use insertion::{insertion_sort, InsertionSort};
pub use merge::{merge_sort, MergeSort};
pub use quick::{quick_sort, QuickSort};
pub use registry::{all_generators, generate, generator_for};
pub use selection::{selection_sort, SelectionSort};
