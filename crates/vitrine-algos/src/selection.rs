//! Selection sort trace generator.
//!
//! Each outer pass fixes position `i` and scans `i+1..n` for the
//! minimum. The pass opens with a step marking `i` as the current
//! minimum candidate, every scan position emits a comparison step, and
//! each improvement emits a "new minimum" step. The closing swap step
//! is emitted only when the minimum actually moved — a pass whose
//! minimum is already in place records no mutation at all.

use vitrine_core::{AlgorithmKind, StepCursors, Trace, TraceGenerator, TraceRecorder};

/// Minimum-selection sort as a trace producer.
#[derive(Clone, Copy, Debug, Default)]
pub struct SelectionSort;

impl TraceGenerator for SelectionSort {
    fn kind(&self) -> AlgorithmKind {
        AlgorithmKind::Selection
    }

    fn generate(&self, values: &mut [i32]) -> Trace {
        selection_sort(values)
    }
}

/// Trace a selection sort of `values`.
///
/// The caller's slice is copied; it is never mutated.
pub fn selection_sort(values: &[i32]) -> Trace {
    let mut working = values.to_vec();
    let n = working.len();
    let mut rec = TraceRecorder::new();

    for i in 0..n.saturating_sub(1) {
        let mut min_idx = i;

        rec.emit(
            &working,
            format!(
                "• Starting new pass:\n• Current position: {i}\n• Looking for minimum element"
            ),
            &[i],
            &[],
            StepCursors::outer(i),
        );

        for j in (i + 1)..n {
            rec.emit(
                &working,
                format!(
                    "• Comparing elements:\n• Current minimum ({}) at position {min_idx}\n• Comparing with {} at position {j}",
                    working[min_idx], working[j],
                ),
                &[min_idx, j],
                &[],
                StepCursors::both(i, j),
            );

            if working[j] < working[min_idx] {
                min_idx = j;
                rec.emit(
                    &working,
                    format!(
                        "• Found new minimum:\n• New minimum: {}\n• Position: {min_idx}",
                        working[min_idx],
                    ),
                    &[min_idx],
                    &[],
                    StepCursors::both(i, j),
                );
            }
        }

        if min_idx != i {
            working.swap(i, min_idx);
            rec.emit(
                &working,
                format!(
                    "• Swapping elements:\n• Moved {} to position {i}\n• Moved {} to position {min_idx}",
                    working[i], working[min_idx],
                ),
                &[],
                &[i, min_idx],
                StepCursors::outer(i),
            );
        }
    }

    rec.emit(&working, "• Array is now sorted!", &[], &[], StepCursors::none());
    rec.finish()
}
