//! Merge sort trace generator.
//!
//! Recursive divide-and-conquer over inclusive index ranges. Each
//! split emits a step naming both half-ranges; each merge copies the
//! halves into private buffers, emits a step describing them, then
//! interleaves the fronts back into the working array one write per
//! step. Ties go to the left buffer (`<=`), preserving stability.
//!
//! This is the one generator with write-back semantics: after the
//! recursion completes, the caller's buffer is overwritten in place
//! with the sorted working array.
//!
//! After an interleave write, the step's `comparing` set names the
//! just-consumed source positions rather than the pair about to be
//! compared — and before the opposite buffer has been consumed from at
//! all, its entry still points at the boundary of the other half. Both
//! indices stay inside the merged range; the lone unrepresentable case
//! (no left element consumed yet) drops that entry rather than emit an
//! out-of-bounds index.

use vitrine_core::{AlgorithmKind, StepCursors, Trace, TraceGenerator, TraceRecorder};

/// Recursive divide-and-merge sort as a trace producer.
#[derive(Clone, Copy, Debug, Default)]
pub struct MergeSort;

impl TraceGenerator for MergeSort {
    fn kind(&self) -> AlgorithmKind {
        AlgorithmKind::Merge
    }

    fn generate(&self, values: &mut [i32]) -> Trace {
        merge_sort(values)
    }
}

/// Trace a merge sort of `values`, writing the sorted result back.
///
/// Unlike the other four generators, the caller's slice holds the
/// sorted sequence when this returns.
///
/// # Examples
///
/// ```
/// use vitrine_algos::merge_sort;
///
/// let mut values = [3, 1, 2];
/// let trace = merge_sort(&mut values);
/// assert_eq!(values, [1, 2, 3]);
/// assert_eq!(trace.last().unwrap().array, vec![1, 2, 3]);
/// ```
pub fn merge_sort(values: &mut [i32]) -> Trace {
    let mut run = MergeRun {
        working: values.to_vec(),
        rec: TraceRecorder::new(),
    };

    if !values.is_empty() {
        run.sort_range(0, values.len() - 1);
    }

    values.copy_from_slice(&run.working);
    run.rec.emit(
        values,
        "• Array is now fully sorted!",
        &[],
        &[],
        StepCursors::none(),
    );
    run.rec.finish()
}

/// Shared recursion state: the working array and the trace under
/// construction, threaded through `sort_range`/`merge` so step order
/// follows the textbook recursion order.
struct MergeRun {
    working: Vec<i32>,
    rec: TraceRecorder,
}

impl MergeRun {
    fn sort_range(&mut self, start: usize, end: usize) {
        if start < end {
            let mid = (start + end) / 2;

            self.rec.emit(
                &self.working,
                format!(
                    "• Splitting array into two subarrays:\n• Left half: indices {start} to {mid}\n• Right half: indices {} to {end}",
                    mid + 1,
                ),
                &[start, end],
                &[],
                StepCursors::none(),
            );

            self.sort_range(start, mid);
            self.sort_range(mid + 1, end);
            self.merge(start, mid, end);
        }
    }

    fn merge(&mut self, start: usize, mid: usize, end: usize) {
        let left = self.working[start..=mid].to_vec();
        let right = self.working[mid + 1..=end].to_vec();
        let mut i = 0;
        let mut j = 0;
        let mut k = start;

        self.rec.emit(
            &self.working,
            format!(
                "• Merging two sorted subarrays:\n• Left subarray: [{}]\n• Right subarray: [{}]",
                join_values(&left),
                join_values(&right),
            ),
            &[start, end],
            &[],
            StepCursors::none(),
        );

        while i < left.len() && j < right.len() {
            let mut explanation = format!(
                "• Comparing elements:\n• Left: {} at position {}\n• Right: {} at position {}",
                left[i],
                start + i,
                right[j],
                mid + 1 + j,
            );

            if left[i] <= right[j] {
                self.working[k] = left[i];
                explanation.push_str(&format!(
                    "\n• {} is smaller or equal, placing it at position {k}",
                    left[i],
                ));
                i += 1;
            } else {
                self.working[k] = right[j];
                explanation.push_str(&format!(
                    "\n• {} is smaller, placing it at position {k}",
                    right[j],
                ));
                j += 1;
            }

            // Just-consumed source positions (see module docs); the
            // left entry is dropped while no left element has been
            // consumed, since `start - 1` is not a valid position.
            let mut comparing = Vec::with_capacity(2);
            if i > 0 {
                comparing.push(start + i - 1);
            }
            comparing.push(mid + j);
            self.rec.emit(&self.working, explanation, &comparing, &[k], StepCursors::none());
            k += 1;
        }

        while i < left.len() {
            self.working[k] = left[i];
            self.rec.emit(
                &self.working,
                format!(
                    "• Copying remaining elements from left subarray:\n• Placing {} at position {k}",
                    left[i],
                ),
                &[],
                &[k],
                StepCursors::none(),
            );
            i += 1;
            k += 1;
        }

        while j < right.len() {
            self.working[k] = right[j];
            self.rec.emit(
                &self.working,
                format!(
                    "• Copying remaining elements from right subarray:\n• Placing {} at position {k}",
                    right[j],
                ),
                &[],
                &[k],
                StepCursors::none(),
            );
            j += 1;
            k += 1;
        }

        let merged_range: Vec<usize> = (start..=end).collect();
        self.rec.emit(
            &self.working,
            format!(
                "• Completed merging subarrays:\n• Range: indices {start} to {end}\n• Result: [{}]",
                join_values(&self.working[start..=end]),
            ),
            &[],
            &merged_range,
            StepCursors::none(),
        );
    }
}

fn join_values(values: &[i32]) -> String {
    values
        .iter()
        .map(|v| v.to_string())
        .collect::<Vec<_>>()
        .join(", ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sorts_and_ends_quiescent() {
        let mut values = [38, 27, 43, 3, 9, 82, 10];
        let trace = merge_sort(&mut values);
        let last = trace.last().unwrap();
        assert_eq!(last.array, vec![3, 9, 10, 27, 38, 43, 82]);
        assert!(last.is_quiescent());
        assert_eq!(last.explanation, "• Array is now fully sorted!");
    }

    #[test]
    fn writes_back_into_the_caller_buffer() {
        let mut values = [5, 1, 4];
        let _ = merge_sort(&mut values);
        assert_eq!(values, [1, 4, 5]);
    }

    #[test]
    fn empty_and_singleton_yield_one_step() {
        for input in [vec![], vec![6]] {
            let mut values = input.clone();
            let trace = merge_sort(&mut values);
            assert_eq!(trace.len(), 1);
            assert!(trace[0].is_quiescent());
            assert_eq!(values, input);
        }
    }

    #[test]
    fn split_steps_precede_merge_steps() {
        let mut values = [2, 1];
        let trace = merge_sort(&mut values);
        // split [0,1], begin merge, one interleave write, one drain,
        // range completion, final.
        assert_eq!(trace.len(), 6);
        assert!(trace[0].explanation.starts_with("• Splitting"));
        assert_eq!(trace[0].comparing.as_slice(), &[0, 1]);
        assert!(trace[1].explanation.starts_with("• Merging"));
    }

    #[test]
    fn interleave_write_records_write_position() {
        let mut values = [2, 1];
        let trace = merge_sort(&mut values);
        let write = &trace[2];
        // Right front (1) wins: written at position 0, and with no left
        // element consumed the comparing set holds the right source only.
        assert_eq!(write.swapped.as_slice(), &[0]);
        assert_eq!(write.comparing.as_slice(), &[1]);
        assert_eq!(write.array, vec![1, 1]);
    }

    #[test]
    fn ties_prefer_the_left_buffer() {
        let mut values = [3, 3];
        let trace = merge_sort(&mut values);
        let write = &trace[2];
        assert!(
            write.explanation.contains("smaller or equal"),
            "left front must win the tie: {}",
            write.explanation,
        );
    }

    #[test]
    fn completion_step_covers_the_merged_range() {
        let mut values = [4, 3, 2, 1];
        let trace = merge_sort(&mut values);
        let full_range = trace
            .iter()
            .rev()
            .find(|step| step.explanation.starts_with("• Completed merging"))
            .unwrap();
        assert_eq!(full_range.swapped.as_slice(), &[0, 1, 2, 3]);
    }

    #[test]
    fn merge_steps_carry_no_cursors() {
        let mut values = [3, 1, 2];
        let trace = merge_sort(&mut values);
        assert!(trace.iter().all(|step| step.i.is_none() && step.j.is_none()));
    }
}
