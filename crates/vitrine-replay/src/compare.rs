//! Trace comparison and regeneration-based verification.
//!
//! Provides hash-first comparison (fast path) with per-field fallback
//! on mismatch, plus a regenerate-and-compare driver for checking that
//! a stored trace still matches what the generator produces today.

use vitrine_core::{Step, Trace};

use crate::hash::trace_hash;

/// A single field-level difference between two versions of one step.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum StepDivergence {
    /// The snapshots disagree at one position.
    Array {
        /// Index within the snapshot where the values differ.
        position: usize,
        /// Value in the recorded trace.
        recorded: i32,
        /// Value in the regenerated trace.
        regenerated: i32,
    },
    /// The snapshots have different lengths.
    ArrayLength {
        /// Length in the recorded trace.
        recorded: usize,
        /// Length in the regenerated trace.
        regenerated: usize,
    },
    /// The explanation text differs.
    Explanation,
    /// The `comparing` index sets differ.
    Comparing,
    /// The `swapped` index sets differ.
    Swapped,
    /// The cursor annotations differ.
    Cursors,
    /// One trace ends before the other.
    TraceLength {
        /// Step count of the recorded trace.
        recorded: usize,
        /// Step count of the regenerated trace.
        regenerated: usize,
    },
}

/// Report of all differences found at the first diverging step.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DivergenceReport {
    /// Index of the first step at which the traces diverge.
    pub step_index: usize,
    /// All field-level differences at that step.
    pub divergences: Vec<StepDivergence>,
}

/// Collect every field-level difference between two versions of a step.
fn diff_step(recorded: &Step, regenerated: &Step) -> Vec<StepDivergence> {
    let mut divergences = Vec::new();

    if recorded.array.len() != regenerated.array.len() {
        divergences.push(StepDivergence::ArrayLength {
            recorded: recorded.array.len(),
            regenerated: regenerated.array.len(),
        });
    } else {
        for (position, (&rec, &reg)) in recorded
            .array
            .iter()
            .zip(regenerated.array.iter())
            .enumerate()
        {
            if rec != reg {
                divergences.push(StepDivergence::Array {
                    position,
                    recorded: rec,
                    regenerated: reg,
                });
            }
        }
    }

    if recorded.explanation != regenerated.explanation {
        divergences.push(StepDivergence::Explanation);
    }
    if recorded.comparing != regenerated.comparing {
        divergences.push(StepDivergence::Comparing);
    }
    if recorded.swapped != regenerated.swapped {
        divergences.push(StepDivergence::Swapped);
    }
    if (recorded.i, recorded.j) != (regenerated.i, regenerated.j) {
        divergences.push(StepDivergence::Cursors);
    }

    divergences
}

/// Compare two traces step by step.
///
/// Fast path: compute both trace hashes and compare. If they match,
/// returns `None`. On mismatch, walks the steps in order and reports
/// every field-level difference at the first step that disagrees; if
/// all shared steps agree, reports the length mismatch at the index
/// where the shorter trace ends.
pub fn compare_traces(recorded: &Trace, regenerated: &Trace) -> Option<DivergenceReport> {
    if trace_hash(recorded) == trace_hash(regenerated) {
        return None;
    }

    for (step_index, (rec, reg)) in recorded.iter().zip(regenerated.iter()).enumerate() {
        let divergences = diff_step(rec, reg);
        if !divergences.is_empty() {
            return Some(DivergenceReport {
                step_index,
                divergences,
            });
        }
    }

    if recorded.len() != regenerated.len() {
        return Some(DivergenceReport {
            step_index: recorded.len().min(regenerated.len()),
            divergences: vec![StepDivergence::TraceLength {
                recorded: recorded.len(),
                regenerated: regenerated.len(),
            }],
        });
    }

    None
}

/// Regenerate a trace for `input` and compare it against `recorded`.
///
/// The `regenerate` closure receives a private copy of `input` and
/// returns the freshly generated trace; the closure-based seam keeps
/// this crate independent of any particular generator while the caller
/// decides which algorithm to re-run. Returns `None` when the recorded
/// trace is reproduced byte for byte.
pub fn verify_trace(
    input: &[i32],
    recorded: &Trace,
    regenerate: impl FnOnce(&mut [i32]) -> Trace,
) -> Option<DivergenceReport> {
    let mut values = input.to_vec();
    let regenerated = regenerate(&mut values);
    compare_traces(recorded, &regenerated)
}
