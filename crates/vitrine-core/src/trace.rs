//! The [`Trace`] sequence and the [`TraceRecorder`] that builds it.

use std::ops::Index;

use crate::step::{IndexSet, Step, StepCursors};

/// The complete, ordered sequence of [`Step`]s from one sort invocation.
///
/// Append-only while a generator runs (via [`TraceRecorder`]), then
/// sealed: a finished trace is immutable and randomly indexable, so a
/// playback layer can render the state at any point, forward or
/// backward, with no recomputation.
///
/// A trace produced by a generator is never empty — its final step
/// always carries the fully sorted array, empty index sets, and a
/// completion message.
///
/// # Examples
///
/// ```
/// use vitrine_core::{StepCursors, TraceRecorder};
///
/// let mut rec = TraceRecorder::new();
/// rec.emit(&[2, 1], "• Comparing adjacent elements", &[0, 1], &[], StepCursors::both(0, 0));
/// rec.emit(&[1, 2], "• Array is now sorted!", &[], &[], StepCursors::none());
///
/// let trace = rec.finish();
/// assert_eq!(trace.len(), 2);
/// assert_eq!(trace[1].array, vec![1, 2]);
/// assert!(trace.last().unwrap().is_quiescent());
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Trace {
    steps: Vec<Step>,
}

impl Trace {
    /// Number of steps in the trace.
    pub fn len(&self) -> usize {
        self.steps.len()
    }

    /// Whether the trace holds no steps.
    ///
    /// Only true for a recorder finished without emitting; every
    /// generator-produced trace has at least the completion step.
    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    /// The step at `index`, or `None` past the end.
    pub fn get(&self, index: usize) -> Option<&Step> {
        self.steps.get(index)
    }

    /// The final step, carrying the sorted array.
    pub fn last(&self) -> Option<&Step> {
        self.steps.last()
    }

    /// All steps as a slice.
    pub fn steps(&self) -> &[Step] {
        &self.steps
    }

    /// Iterate over the steps in emission order.
    pub fn iter(&self) -> std::slice::Iter<'_, Step> {
        self.steps.iter()
    }

    /// Consume the trace, returning the owned step sequence.
    pub fn into_steps(self) -> Vec<Step> {
        self.steps
    }
}

impl Index<usize> for Trace {
    type Output = Step;

    fn index(&self, index: usize) -> &Step {
        &self.steps[index]
    }
}

impl<'a> IntoIterator for &'a Trace {
    type Item = &'a Step;
    type IntoIter = std::slice::Iter<'a, Step>;

    fn into_iter(self) -> Self::IntoIter {
        self.steps.iter()
    }
}

/// Append-only builder a generator emits [`Step`]s through.
///
/// Implements the shared emission contract: every call snapshots the
/// working array in full, attaches the explanation and index metadata,
/// and appends one immutable step. Emission is pure data construction
/// with no failure path; callers guarantee that every index they pass
/// is within the array's bounds (checked in debug builds).
#[derive(Debug, Default)]
pub struct TraceRecorder {
    steps: Vec<Step>,
}

impl TraceRecorder {
    /// Create an empty recorder.
    pub fn new() -> Self {
        Self { steps: Vec::new() }
    }

    /// Create a recorder with room for `capacity` steps.
    ///
    /// Generators that know their input size can pre-size the buffer;
    /// a bubble sort over `n` values emits at most `n * (n - 1) + 1`
    /// steps, so capacities stay small.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            steps: Vec::with_capacity(capacity),
        }
    }

    /// Append one step: snapshot `array` and record the operation.
    ///
    /// `comparing` and `swapped` list the positions involved in the
    /// operation just performed (or about to be performed, for
    /// pre-decision comparison steps); `cursors` carries whichever loop
    /// indices are meaningful for the emitting algorithm at this point.
    pub fn emit(
        &mut self,
        array: &[i32],
        explanation: impl Into<String>,
        comparing: &[usize],
        swapped: &[usize],
        cursors: StepCursors,
    ) {
        debug_assert!(
            comparing.iter().chain(swapped).all(|&idx| idx < array.len()),
            "step indices must lie within the snapshot bounds"
        );
        self.steps.push(Step {
            array: array.to_vec(),
            explanation: explanation.into(),
            comparing: IndexSet::from_slice(comparing),
            swapped: IndexSet::from_slice(swapped),
            i: cursors.i,
            j: cursors.j,
        });
    }

    /// Number of steps emitted so far.
    pub fn steps_emitted(&self) -> usize {
        self.steps.len()
    }

    /// Seal the recorder into an immutable [`Trace`].
    pub fn finish(self) -> Trace {
        Trace { steps: self.steps }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn emit_snapshots_current_array_state() {
        let mut working = vec![2, 1];
        let mut rec = TraceRecorder::new();

        rec.emit(&working, "before", &[0, 1], &[], StepCursors::none());
        working.swap(0, 1);
        rec.emit(&working, "after", &[], &[0, 1], StepCursors::none());

        let trace = rec.finish();
        assert_eq!(trace[0].array, vec![2, 1]);
        assert_eq!(trace[1].array, vec![1, 2]);
    }

    #[test]
    fn finished_trace_is_randomly_indexable() {
        let mut rec = TraceRecorder::with_capacity(3);
        for n in 0..3 {
            rec.emit(&[n], format!("step {n}"), &[], &[], StepCursors::none());
        }
        let trace = rec.finish();

        assert_eq!(trace.len(), 3);
        assert_eq!(trace.get(1).unwrap().explanation, "step 1");
        assert_eq!(trace[2].array, vec![2]);
        assert!(trace.get(3).is_none());
        assert_eq!(trace.last().unwrap().array, vec![2]);
    }

    #[test]
    fn iteration_preserves_emission_order() {
        let mut rec = TraceRecorder::new();
        rec.emit(&[1], "a", &[], &[], StepCursors::none());
        rec.emit(&[2], "b", &[], &[], StepCursors::none());
        let trace = rec.finish();

        let order: Vec<&str> = trace.iter().map(|s| s.explanation.as_str()).collect();
        assert_eq!(order, ["a", "b"]);

        let by_ref: Vec<&str> = (&trace).into_iter().map(|s| s.explanation.as_str()).collect();
        assert_eq!(by_ref, order);
    }

    #[test]
    fn empty_array_snapshot_is_allowed() {
        let mut rec = TraceRecorder::new();
        rec.emit(&[], "• Array is now sorted!", &[], &[], StepCursors::none());
        let trace = rec.finish();

        assert_eq!(trace.len(), 1);
        assert!(trace[0].array.is_empty());
        assert!(trace[0].is_quiescent());
    }

    #[test]
    fn steps_emitted_counts_appends() {
        let mut rec = TraceRecorder::new();
        assert_eq!(rec.steps_emitted(), 0);
        rec.emit(&[1], "x", &[], &[], StepCursors::none());
        assert_eq!(rec.steps_emitted(), 1);
    }

    #[test]
    #[should_panic(expected = "within the snapshot bounds")]
    #[cfg(debug_assertions)]
    fn out_of_bounds_index_panics_in_debug() {
        let mut rec = TraceRecorder::new();
        rec.emit(&[1, 2], "bad", &[2], &[], StepCursors::none());
    }

    mod properties {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            /// Whatever is emitted comes back verbatim, in order.
            #[test]
            fn emitted_snapshots_round_trip(
                snapshots in prop::collection::vec(
                    prop::collection::vec(any::<i32>(), 0..=15),
                    0..=20,
                ),
            ) {
                let mut rec = TraceRecorder::new();
                for snapshot in &snapshots {
                    rec.emit(snapshot, "step", &[], &[], StepCursors::none());
                }
                let trace = rec.finish();

                prop_assert_eq!(trace.len(), snapshots.len());
                for (step, snapshot) in trace.iter().zip(&snapshots) {
                    prop_assert_eq!(&step.array, snapshot);
                }
            }

            /// `get` agrees with `Index` everywhere in bounds and is
            /// `None` everywhere past the end.
            #[test]
            fn get_and_index_agree(len in 0usize..=20, probe in 0usize..=40) {
                let mut rec = TraceRecorder::new();
                for n in 0..len {
                    rec.emit(&[n as i32], "step", &[], &[], StepCursors::none());
                }
                let trace = rec.finish();

                if probe < len {
                    prop_assert_eq!(trace.get(probe), Some(&trace[probe]));
                } else {
                    prop_assert!(trace.get(probe).is_none());
                }
            }
        }
    }
}
