//! The [`TraceGenerator`] trait implemented by every sorting algorithm.

use crate::algorithm::AlgorithmKind;
use crate::trace::Trace;

/// A sorting algorithm reframed as a trace producer.
///
/// A generator does not merely sort: it performs the canonical
/// algorithm over a private working copy of `values` and emits one
/// [`Step`](crate::Step) at every decision point — comparison, swap,
/// placement, partition or merge boundary, and completion.
///
/// # Contract
///
/// - `generate()` MUST be deterministic: the same input always produces
///   a byte-identical trace. No randomness, no ambient state.
/// - It is total: every finite input (including empty) yields a trace
///   of at least one step, ending in the fully sorted array with empty
///   index sets.
/// - Every intermediate snapshot is a permutation of the input, and
///   every emitted index is within bounds for its snapshot.
/// - Only the merge sort generator writes the sorted result back into
///   `values`; all other implementations leave the slice untouched.
///
/// # Object safety
///
/// The trait is object-safe; the registry hands out generators as
/// `&'static dyn TraceGenerator`.
pub trait TraceGenerator: Send + Sync {
    /// Which algorithm this generator implements.
    fn kind(&self) -> AlgorithmKind;

    /// Run the algorithm over `values`, returning the full trace.
    ///
    /// The slice is mutable only to support merge sort's documented
    /// write-back; see the trait contract for aliasing guarantees.
    fn generate(&self, values: &mut [i32]) -> Trace;
}
