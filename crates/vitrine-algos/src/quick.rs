//! Quick sort trace generator.
//!
//! Recursive Lomuto partitioning: the pivot is the range's last
//! element. Each partition opens with a step marking the pivot, every
//! scan position emits a comparison step against it, and each exchange
//! that visibly moves an element emits a swap step. The closing
//! pivot-placement step is emitted unconditionally — even when the
//! pivot is already in its final position — which is the one recorded
//! no-op in this generator.
//!
//! The boundary pointer starts one slot before the range; until an
//! element at or below the pivot is found there is no valid boundary
//! position, and comparison steps omit the outer cursor for exactly
//! that span.

use vitrine_core::{AlgorithmKind, StepCursors, Trace, TraceGenerator, TraceRecorder};

/// Recursive Lomuto-partition sort as a trace producer.
#[derive(Clone, Copy, Debug, Default)]
pub struct QuickSort;

impl TraceGenerator for QuickSort {
    fn kind(&self) -> AlgorithmKind {
        AlgorithmKind::Quick
    }

    fn generate(&self, values: &mut [i32]) -> Trace {
        quick_sort(values)
    }
}

/// Trace a quick sort of `values`.
///
/// The caller's slice is copied; it is never mutated.
///
/// # Examples
///
/// ```
/// use vitrine_algos::quick_sort;
///
/// let trace = quick_sort(&[3, 1, 2]);
/// assert_eq!(trace.last().unwrap().array, vec![1, 2, 3]);
/// ```
pub fn quick_sort(values: &[i32]) -> Trace {
    let mut run = QuickRun {
        working: values.to_vec(),
        rec: TraceRecorder::new(),
    };

    if !run.working.is_empty() {
        let high = run.working.len() - 1;
        run.sort_range(0, high);
    }

    run.rec.emit(
        &run.working,
        "• Array is now sorted!",
        &[],
        &[],
        StepCursors::none(),
    );
    run.rec.finish()
}

/// Shared recursion state, mirroring the merge generator's layout.
struct QuickRun {
    working: Vec<i32>,
    rec: TraceRecorder,
}

impl QuickRun {
    fn sort_range(&mut self, low: usize, high: usize) {
        if low < high {
            let pivot_idx = self.partition(low, high);
            if pivot_idx > 0 {
                self.sort_range(low, pivot_idx - 1);
            }
            self.sort_range(pivot_idx + 1, high);
        }
    }

    /// Partition `[low, high]` around `working[high]`, returning the
    /// pivot's final index.
    fn partition(&mut self, low: usize, high: usize) -> usize {
        let pivot = self.working[high];

        self.rec.emit(
            &self.working,
            format!("• Starting partition:\n• Pivot: {pivot}\n• Range: {low} to {high}"),
            &[high],
            &[],
            StepCursors::none(),
        );

        // Position of the last element known to be <= pivot; `None`
        // until one is found (the boundary sits before the range).
        let mut boundary: Option<usize> = None;

        for j in low..high {
            let cursors = match boundary {
                Some(b) => StepCursors::both(b, j),
                None => StepCursors::inner(j),
            };
            self.rec.emit(
                &self.working,
                format!(
                    "• Comparing with pivot:\n• Current element: {}\n• Pivot: {pivot}",
                    self.working[j],
                ),
                &[j, high],
                &[],
                cursors,
            );

            if self.working[j] <= pivot {
                let dest = boundary.map_or(low, |b| b + 1);
                self.working.swap(dest, j);
                boundary = Some(dest);

                if dest != j {
                    self.rec.emit(
                        &self.working,
                        format!(
                            "• Swapping elements:\n• Moved {} to position {dest}\n• Moved {} to position {j}",
                            self.working[dest], self.working[j],
                        ),
                        &[],
                        &[dest, j],
                        StepCursors::both(dest, j),
                    );
                }
            }
        }

        let pivot_idx = boundary.map_or(low, |b| b + 1);
        self.working.swap(pivot_idx, high);
        self.rec.emit(
            &self.working,
            format!("• Placing pivot:\n• Moved pivot {pivot} to position {pivot_idx}"),
            &[],
            &[pivot_idx, high],
            StepCursors::outer(pivot_idx),
        );

        pivot_idx
    }
}
