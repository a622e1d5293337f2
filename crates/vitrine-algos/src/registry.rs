//! Static generator registry and kind-based dispatch.

use indexmap::IndexMap;

use vitrine_core::{AlgorithmKind, Trace, TraceGenerator};

use crate::bubble::BubbleSort;
use crate::insertion::InsertionSort;
use crate::merge::MergeSort;
use crate::quick::QuickSort;
use crate::selection::SelectionSort;

static BUBBLE: BubbleSort = BubbleSort;
static SELECTION: SelectionSort = SelectionSort;
static INSERTION: InsertionSort = InsertionSort;
static MERGE: MergeSort = MergeSort;
static QUICK: QuickSort = QuickSort;

/// The generator implementing `kind`.
pub fn generator_for(kind: AlgorithmKind) -> &'static dyn TraceGenerator {
    match kind {
        AlgorithmKind::Bubble => &BUBBLE,
        AlgorithmKind::Selection => &SELECTION,
        AlgorithmKind::Insertion => &INSERTION,
        AlgorithmKind::Merge => &MERGE,
        AlgorithmKind::Quick => &QUICK,
    }
}

/// All generators keyed by kind, in canonical display order.
///
/// `IndexMap` keeps insertion order, so iterating matches
/// [`AlgorithmKind::ALL`] — a front-end can build its picker straight
/// from this map.
pub fn all_generators() -> IndexMap<AlgorithmKind, &'static dyn TraceGenerator> {
    AlgorithmKind::ALL
        .iter()
        .map(|&kind| (kind, generator_for(kind)))
        .collect()
}

/// Run the generator for `kind` over `values`.
///
/// Convenience dispatch for callers holding a kind rather than a
/// concrete generator. Only [`AlgorithmKind::Merge`] writes the sorted
/// result back into `values`.
///
/// # Examples
///
/// ```
/// use vitrine_algos::generate;
/// use vitrine_core::AlgorithmKind;
///
/// let mut values = [4, 2, 7];
/// let trace = generate(AlgorithmKind::Quick, &mut values);
/// assert_eq!(trace.last().unwrap().array, vec![2, 4, 7]);
/// assert_eq!(values, [4, 2, 7]);
/// ```
pub fn generate(kind: AlgorithmKind, values: &mut [i32]) -> Trace {
    generator_for(kind).generate(values)
}
