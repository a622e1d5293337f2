//! Trace playback, hashing, and determinism verification for Vitrine.
//!
//! A finished [`Trace`](vitrine_core::Trace) is a stable, randomly
//! indexable, read-only sequence; this crate is everything a consumer
//! does with one after generation:
//!
//! # Architecture
//!
//! - [`TraceCursor`] owns a trace and the playback state a front-end
//!   renders from (current step, play/pause, speed)
//! - [`step_hash`] and [`trace_hash`] give fast FNV-1a fingerprints
//!   for equality checks
//! - [`compare_traces`] and [`verify_trace`] pinpoint the first
//!   divergence between a recorded trace and a regenerated one
//!
//! Playback is timer-free by design: the cursor holds state and the
//! embedding decides when to call [`TraceCursor::tick`], so the same
//! machine drives a GUI, a terminal, or a test.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod compare;
pub mod cursor;
pub mod hash;

pub use compare::{compare_traces, verify_trace, DivergenceReport, StepDivergence};
pub use cursor::{TraceCursor, SPEED_DEFAULT, SPEED_MAX, SPEED_MIN, SPEED_STEP};
pub use hash::{step_hash, trace_hash};
