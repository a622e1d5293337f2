//! Insertion sort trace generator.
//!
//! Outer index `i` walks `1..n`, lifting `key = array[i]` out and
//! opening the pass with a step marking position `i`. Strictly greater
//! elements to the left shift rightward one at a time, each shift
//! emitting its own step; the pass closes with a placement step at the
//! key's landing position. A key that is already in place (no shifts)
//! records no placement — equal elements never move past one another,
//! so the sort is stable.

use vitrine_core::{AlgorithmKind, StepCursors, Trace, TraceGenerator, TraceRecorder};

/// Shift-and-insert sort as a trace producer.
#[derive(Clone, Copy, Debug, Default)]
pub struct InsertionSort;

impl TraceGenerator for InsertionSort {
    fn kind(&self) -> AlgorithmKind {
        AlgorithmKind::Insertion
    }

    fn generate(&self, values: &mut [i32]) -> Trace {
        insertion_sort(values)
    }
}

/// Trace an insertion sort of `values`.
///
/// The caller's slice is copied; it is never mutated.
pub fn insertion_sort(values: &[i32]) -> Trace {
    let mut working = values.to_vec();
    let n = working.len();
    let mut rec = TraceRecorder::new();

    for i in 1..n {
        let key = working[i];

        rec.emit(
            &working,
            format!("• Starting new insertion:\n• Current element: {key}\n• Position: {i}"),
            &[i],
            &[],
            StepCursors::both(i, i - 1),
        );

        // Landing slot for the key; shifts open it up one position at
        // a time moving leftward.
        let mut slot = i;
        while slot > 0 && working[slot - 1] > key {
            working[slot] = working[slot - 1];
            rec.emit(
                &working,
                format!(
                    "• Moving element:\n• Shifted {} right\n• From position {} to {slot}",
                    working[slot],
                    slot - 1,
                ),
                &[slot - 1, slot],
                &[slot - 1, slot],
                StepCursors::both(i, slot - 1),
            );
            slot -= 1;
        }

        if slot != i {
            working[slot] = key;
            rec.emit(
                &working,
                format!("• Inserting element:\n• Placed {key} at position {slot}"),
                &[],
                &[slot],
                StepCursors::both(i, slot),
            );
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
        let trace = insertion_sort(&[12, 11, 13, 5, 6]);
        let last = trace.last().unwrap();
        assert_eq!(last.array, vec![5, 6, 11, 12, 13]);
        assert!(last.is_quiescent());
    }

    #[test]
    fn empty_and_singleton_yield_one_step() {
        for input in [&[][..], &[4][..]] {
            let trace = insertion_sort(input);
            assert_eq!(trace.len(), 1);
            assert!(trace[0].is_quiescent());
        }
    }

    #[test]
    fn equal_elements_record_no_mutation() {
        let trace = insertion_sort(&[3, 3]);
        // Pass start and completion only: the key is already in place,
        // so neither a shift nor a placement is recorded.
        assert_eq!(trace.len(), 2);
        assert!(trace.iter().all(|step| step.swapped.is_empty()));
    }

    #[test]
    fn shift_steps_mark_source_and_destination() {
        let trace = insertion_sort(&[2, 1]);
        // start, shift, place, done
        assert_eq!(trace.len(), 4);
        let shift = &trace[1];
        assert_eq!(shift.comparing.as_slice(), &[0, 1]);
        assert_eq!(shift.swapped.as_slice(), &[0, 1]);
        assert_eq!(shift.array, vec![2, 2], "shift duplicates before the key lands");
        let place = &trace[2];
        assert_eq!(place.swapped.as_slice(), &[0]);
        assert_eq!(place.array, vec![1, 2]);
    }

    #[test]
    fn placement_lands_mid_array() {
        // [1, 3, 2]: only the 2 moves, landing at index 1.
        let trace = insertion_sort(&[1, 3, 2]);
        let place = trace
            .iter()
            .find(|step| step.explanation.starts_with("• Inserting"))
            .unwrap();
        assert_eq!(place.swapped.as_slice(), &[1]);
        assert_eq!(place.array, vec![1, 2, 3]);
        assert_eq!((place.i, place.j), (Some(2), Some(1)));
    }

    #[test]
    fn pass_start_cursors_point_at_key_and_left_neighbour() {
        let trace = insertion_sort(&[5, 4]);
        assert_eq!((trace[0].i, trace[0].j), (Some(1), Some(0)));
    }
}
