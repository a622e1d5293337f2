//! Bubble sort trace generator.
//!
//! Standard two-pass adjacent exchange: the outer pass index `i` runs
//! `0..n-1`, the inner scan `j` runs `0..n-i-1`. Every adjacent pair
//! inspected emits a comparison step before the decision; an
//! out-of-order pair is swapped and emits a second step reflecting the
//! new array.
//!
//! Equal adjacent elements are never swapped (`>`, not `>=`), so the
//! sort is stable and a run over equal values records comparisons only.

use vitrine_core::{AlgorithmKind, StepCursors, Trace, TraceGenerator, TraceRecorder};

/// Adjacent-pair exchange sort as a trace producer.
#[derive(Clone, Copy, Debug, Default)]
pub struct BubbleSort;

impl TraceGenerator for BubbleSort {
    fn kind(&self) -> AlgorithmKind {
        AlgorithmKind::Bubble
    }

    fn generate(&self, values: &mut [i32]) -> Trace {
        bubble_sort(values)
    }
}

/// Trace a bubble sort of `values`.
///
/// The caller's slice is copied; it is never mutated. Empty and
/// single-element inputs yield a one-step trace.
///
/// # Examples
///
/// ```
/// use vitrine_algos::bubble_sort;
///
/// let trace = bubble_sort(&[2, 1]);
/// assert_eq!(trace.last().unwrap().array, vec![1, 2]);
/// ```
pub fn bubble_sort(values: &[i32]) -> Trace {
    let mut working = values.to_vec();
    let n = working.len();
    let mut rec = TraceRecorder::new();

    for i in 0..n.saturating_sub(1) {
        for j in 0..n - i - 1 {
            rec.emit(
                &working,
                format!(
                    "• Comparing adjacent elements:\n• Position {j}: {}\n• Position {}: {}",
                    working[j],
                    j + 1,
                    working[j + 1],
                ),
                &[j, j + 1],
                &[],
                StepCursors::both(i, j),
            );

            if working[j] > working[j + 1] {
                working.swap(j, j + 1);
                rec.emit(
                    &working,
                    format!(
                        "• Swapping elements:\n• Moved {} to position {j}\n• Moved {} to position {}",
                        working[j],
                        working[j + 1],
                        j + 1,
                    ),
                    &[],
                    &[j, j + 1],
                    StepCursors::both(i, j),
                );
            }
        }
    }

    rec.emit(&working, "• Array is now sorted!", &[], &[], StepCursors::none());
    rec.finish()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sorts_and_ends_quiescent() {
        let trace = bubble_sort(&[5, 1, 4, 2]);
        let last = trace.last().unwrap();
        assert_eq!(last.array, vec![1, 2, 4, 5]);
        assert!(last.is_quiescent());
        assert_eq!(last.explanation, "• Array is now sorted!");
    }

    #[test]
    fn empty_and_singleton_yield_one_step() {
        for input in [&[][..], &[7][..]] {
            let trace = bubble_sort(input);
            assert_eq!(trace.len(), 1);
            assert!(trace[0].is_quiescent());
            assert_eq!(trace[0].array, input.to_vec());
        }
    }

    #[test]
    fn equal_elements_are_never_swapped() {
        let trace = bubble_sort(&[3, 3]);
        assert_eq!(trace.len(), 2, "one comparison plus the completion step");
        assert_eq!(trace[0].comparing.as_slice(), &[0, 1]);
        assert!(trace.iter().all(|step| step.swapped.is_empty()));
    }

    #[test]
    fn swap_steps_follow_their_comparison() {
        let trace = bubble_sort(&[2, 1]);
        // compare, swap, done
        assert_eq!(trace.len(), 3);
        assert_eq!(trace[0].comparing.as_slice(), &[0, 1]);
        assert!(trace[0].swapped.is_empty());
        assert_eq!(trace[1].swapped.as_slice(), &[0, 1]);
        assert!(trace[1].comparing.is_empty());
        assert_eq!(trace[1].array, vec![1, 2]);
    }

    #[test]
    fn reversed_input_emits_full_quadratic_trace() {
        // [3,2,1]: three comparisons, three swaps, one completion step.
        let trace = bubble_sort(&[3, 2, 1]);
        assert_eq!(trace.len(), 7);
    }

    #[test]
    fn cursors_track_both_loops() {
        let trace = bubble_sort(&[3, 2, 1]);
        let first = &trace[0];
        assert_eq!((first.i, first.j), (Some(0), Some(0)));
        // Completion step carries no cursors.
        let last = trace.last().unwrap();
        assert_eq!((last.i, last.j), (None, None));
    }

    #[test]
    fn caller_slice_is_untouched() {
        let mut input = [4, 3, 2, 1];
        let _ = BubbleSort.generate(&mut input);
        assert_eq!(input, [4, 3, 2, 1]);
    }
}
