//! Core types and traits for the Vitrine sorting trace engine.
//!
//! This is the leaf crate with zero internal dependencies. It defines
//! the fundamental abstractions used throughout the Vitrine workspace:
//! the [`Step`] snapshot record, the [`Trace`] it accumulates into, the
//! [`AlgorithmKind`] taxonomy, input-boundary error types, and the
//! [`TraceGenerator`] trait implemented by every sorting algorithm.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod algorithm;
pub mod error;
pub mod step;
pub mod trace;
pub mod traits;

pub use algorithm::AlgorithmKind;
pub use error::InputError;
pub use step::{IndexSet, Step, StepCursors};
pub use trace::{Trace, TraceRecorder};
pub use traits::TraceGenerator;

/// Maximum number of values a sort input may carry.
///
/// Enforced at the input boundary (`vitrine-input`), never inside a
/// generator: a bar-chart consumer cannot legibly render more than this
/// many bars, and trace lengths stay trivially small below it.
pub const MAX_SEQUENCE_LEN: usize = 15;
