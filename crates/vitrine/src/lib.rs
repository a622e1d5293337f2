//! Vitrine: a step-trace engine for visualizing classic sorting
//! algorithms.
//!
//! This is the top-level facade crate that re-exports the public API
//! from all Vitrine sub-crates. For most users, adding `vitrine` as a
//! single dependency is sufficient.
//!
//! Each of the five classic comparison sorts is reframed not as "sort
//! this array" but as "produce the deterministic, fully-ordered
//! sequence of inspectable states a sort of this array goes through" —
//! a [`Trace`](types::Trace) of [`Step`](types::Step)s a consumer can
//! play, scrub, or index at will, with a human-readable annotation at
//! every state.
//!
//! # Quick start
//!
//! ```rust
//! use vitrine::prelude::*;
//!
//! // A reproducible random array, then a traced bubble sort.
//! let values = seeded_sequence(8, 42);
//! let trace = bubble_sort(&values);
//!
//! // The final step always carries the sorted array.
//! let last = trace.last().unwrap();
//! assert!(last.array.windows(2).all(|w| w[0] <= w[1]));
//!
//! // Drive playback however the surface likes; the cursor only
//! // holds state.
//! let mut cursor = TraceCursor::new(trace);
//! cursor.toggle();
//! while cursor.tick() {
//!     let step = cursor.current().unwrap();
//!     assert!(!step.explanation.is_empty());
//! }
//! assert!(cursor.at_end());
//! ```
//!
//! # Modules
//!
//! Each module corresponds to a sub-crate. Use them for types not in
//! the prelude:
//!
//! | Module | Sub-crate | Contents |
//! |--------|-----------|----------|
//! | [`types`] | `vitrine-core` | `Step`, `Trace`, recorder, kinds, errors, the generator trait |
//! | [`algos`] | `vitrine-algos` | The five trace generators and the registry |
//! | [`replay`] | `vitrine-replay` | Playback cursor, hashing, divergence detection |
//! | [`input`] | `vitrine-input` | Sequence parsing and random generation |

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

/// Core step, trace, and algorithm types (`vitrine-core`).
///
/// Contains the [`types::Step`] record, the [`types::Trace`] sequence
/// and its recorder, the [`types::AlgorithmKind`] taxonomy, and the
/// [`types::TraceGenerator`] trait.
pub use vitrine_core as types;

/// The five trace generators and their registry (`vitrine-algos`).
///
/// Free functions per algorithm ([`algos::bubble_sort`] through
/// [`algos::quick_sort`]) plus kind-based dispatch via
/// [`algos::generate`].
pub use vitrine_algos as algos;

/// Trace playback and verification (`vitrine-replay`).
///
/// Drive a finished trace with [`replay::TraceCursor`], fingerprint it
/// with [`replay::trace_hash`], and check determinism with
/// [`replay::verify_trace`].
pub use vitrine_replay as replay;

/// Input parsing and random sequence generation (`vitrine-input`).
///
/// The validated boundary in front of the generators:
/// [`input::parse_sequence`] and [`input::seeded_sequence`].
pub use vitrine_input as input;

/// Common imports for typical Vitrine usage.
///
/// ```rust
/// use vitrine::prelude::*;
/// ```
pub mod prelude {
    // Core types
    pub use vitrine_core::{
        AlgorithmKind, IndexSet, InputError, Step, StepCursors, Trace, TraceGenerator,
        TraceRecorder, MAX_SEQUENCE_LEN,
    };

    // Generators
    pub use vitrine_algos::{
        bubble_sort, generate, generator_for, insertion_sort, merge_sort, quick_sort,
        selection_sort,
    };

    // Playback and verification
    pub use vitrine_replay::{compare_traces, trace_hash, verify_trace, TraceCursor};

    // Input boundary
    pub use vitrine_input::{parse_sequence, random_sequence, seeded_sequence};
}
