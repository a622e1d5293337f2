//! Canonical inputs and reusable trace-invariant assertions.
//!
//! Two standard ingredients for generator testing:
//!
//! - [`canonical_inputs`] — the edge-case menu (empty, singleton,
//!   sorted, reversed, duplicates, negatives) every suite should cover.
//! - [`assert_trace_invariants`] — the full shared contract: non-empty
//!   trace, per-step permutation and index validity, sorted quiescent
//!   final step.

use vitrine_core::{Step, Trace};

/// The standard edge-case input menu.
///
/// Covers empty and singleton sequences, already-sorted and reversed
/// runs, duplicate-heavy and all-equal sequences, negative values, and
/// a 15-value sequence at the input cap.
pub fn canonical_inputs() -> Vec<Vec<i32>> {
    vec![
        vec![],
        vec![42],
        vec![1, 2, 3, 4, 5],
        vec![5, 4, 3, 2, 1],
        vec![5, 1, 4, 2],
        vec![3, 1, 2],
        vec![3, 3],
        vec![7, 7, 7, 7],
        vec![5, 2, 5, 1, 5],
        vec![-3, 0, -7, 4],
        vec![90, 13, 55, 2, 78, 41, 66, 9, 30, 84, 17, 50, 23, 71, 6],
    ]
}

/// Assert that `actual` holds exactly the same multiset of values as
/// `expected`.
pub fn assert_is_permutation(expected: &[i32], actual: &[i32]) {
    let mut a = expected.to_vec();
    let mut b = actual.to_vec();
    a.sort_unstable();
    b.sort_unstable();
    assert_eq!(
        a, b,
        "value multiset changed: expected a permutation of {expected:?}, got {actual:?}"
    );
}

/// Assert that `values` is sorted ascending.
pub fn assert_sorted_ascending(values: &[i32]) {
    assert!(
        values.windows(2).all(|w| w[0] <= w[1]),
        "not ascending: {values:?}"
    );
}

/// Assert the full shared generator contract for one trace.
///
/// Checks, for a trace generated from `input`:
///
/// - the trace holds at least one step;
/// - every step's snapshot preserves the input length and never
///   contains a value the input does not (shift-based and merge-based
///   generators emit transient duplicate states mid-move, so the
///   per-step multiset check belongs to
///   [`assert_all_steps_are_permutations`], which only the swap-based
///   generators satisfy);
/// - every index in every `comparing`/`swapped` set is in bounds for
///   its snapshot;
/// - the final step's snapshot is a permutation of `input`, sorted
///   ascending, with empty index sets and no cursors.
pub fn assert_trace_invariants(input: &[i32], trace: &Trace) {
    assert!(!trace.is_empty(), "a trace is never shorter than one step");

    for (idx, step) in trace.iter().enumerate() {
        assert_eq!(
            step.array.len(),
            input.len(),
            "step {idx}: snapshot length changed"
        );
        for &value in &step.array {
            assert!(
                input.contains(&value),
                "step {idx}: value {value} was never in the input {input:?}"
            );
        }
        assert_step_indices_in_bounds(idx, step);
    }

    let last = trace.last().unwrap();
    assert_is_permutation(input, &last.array);
    assert_sorted_ascending(&last.array);
    assert!(
        last.is_quiescent(),
        "final step must have empty index sets"
    );
    assert_eq!(
        (last.i, last.j),
        (None, None),
        "final step carries no cursors"
    );
}

/// Assert that every snapshot in the trace is a full permutation of
/// `input`.
///
/// Holds for the swap-based generators (bubble, selection, quick),
/// whose only mutation is exchanging two positions. Shift-based
/// insertion and merge's interleave writes pass through transient
/// duplicate states and deliberately do not satisfy this.
pub fn assert_all_steps_are_permutations(input: &[i32], trace: &Trace) {
    for step in trace {
        assert_is_permutation(input, &step.array);
    }
}

fn assert_step_indices_in_bounds(idx: usize, step: &Step) {
    let len = step.array.len();
    for &pos in step.comparing.iter().chain(step.swapped.iter()) {
        assert!(
            pos < len,
            "step {idx}: index {pos} out of bounds for snapshot of length {len}"
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use vitrine_core::{StepCursors, TraceRecorder};

    #[test]
    fn permutation_accepts_reordering_and_rejects_substitution() {
        assert_is_permutation(&[3, 1, 2], &[1, 2, 3]);

        let result = std::panic::catch_unwind(|| assert_is_permutation(&[1, 2], &[1, 1]));
        assert!(result.is_err());
    }

    #[test]
    fn invariants_accept_a_minimal_valid_trace() {
        let mut rec = TraceRecorder::new();
        rec.emit(&[1, 2], "• Array is now sorted!", &[], &[], StepCursors::none());
        assert_trace_invariants(&[2, 1], &rec.finish());
    }

    #[test]
    fn invariants_reject_an_unsorted_final_step() {
        let mut rec = TraceRecorder::new();
        rec.emit(&[2, 1], "done", &[], &[], StepCursors::none());
        let trace = rec.finish();

        let result = std::panic::catch_unwind(|| assert_trace_invariants(&[2, 1], &trace));
        assert!(result.is_err());
    }

    #[test]
    fn canonical_menu_respects_the_input_cap() {
        for input in canonical_inputs() {
            assert!(input.len() <= vitrine_core::MAX_SEQUENCE_LEN);
        }
    }
}
