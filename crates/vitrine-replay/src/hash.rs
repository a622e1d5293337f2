//! Hashing utilities for step and trace comparison.
//!
//! Uses FNV-1a for fast, deterministic hashing of trace content. These
//! hashes are not cryptographically secure — they are used for fast
//! equality checks during trace verification.

use vitrine_core::{Step, Trace};

/// FNV-1a offset basis for 64-bit.
const FNV_OFFSET: u64 = 0xcbf29ce484222325;
/// FNV-1a prime for 64-bit.
const FNV_PRIME: u64 = 0x0000_0100_0000_01B3;

/// Feed a single byte into an FNV-1a hash state.
#[inline]
fn fnv1a_byte(hash: u64, byte: u8) -> u64 {
    (hash ^ byte as u64).wrapping_mul(FNV_PRIME)
}

/// Feed a byte slice into an FNV-1a hash state.
#[inline]
fn fnv1a_bytes(mut hash: u64, bytes: &[u8]) -> u64 {
    for &b in bytes {
        hash = fnv1a_byte(hash, b);
    }
    hash
}

/// Feed an i32 (as 4 LE bytes) into an FNV-1a hash state.
#[inline]
fn fnv1a_i32(hash: u64, v: i32) -> u64 {
    fnv1a_bytes(hash, &v.to_le_bytes())
}

/// Feed a u64 (as 8 LE bytes) into an FNV-1a hash state.
#[inline]
fn fnv1a_u64(hash: u64, v: u64) -> u64 {
    fnv1a_bytes(hash, &v.to_le_bytes())
}

/// Feed an optional cursor using presence-flag encoding (u8 flag plus
/// the value when present), so `None` and `Some(0)` hash differently.
#[inline]
fn fnv1a_cursor(mut hash: u64, cursor: Option<usize>) -> u64 {
    match cursor {
        None => fnv1a_byte(hash, 0),
        Some(v) => {
            hash = fnv1a_byte(hash, 1);
            fnv1a_u64(hash, v as u64)
        }
    }
}

/// Compute a hash over every field of a single step.
///
/// Folds in each variable-length field's length before its content so
/// adjacent fields cannot alias (an array value can never compensate
/// for a missing comparing index).
pub fn step_hash(step: &Step) -> u64 {
    let mut hash = FNV_OFFSET;

    hash = fnv1a_u64(hash, step.array.len() as u64);
    for &v in &step.array {
        hash = fnv1a_i32(hash, v);
    }

    hash = fnv1a_u64(hash, step.explanation.len() as u64);
    hash = fnv1a_bytes(hash, step.explanation.as_bytes());

    hash = fnv1a_u64(hash, step.comparing.len() as u64);
    for &idx in &step.comparing {
        hash = fnv1a_u64(hash, idx as u64);
    }

    hash = fnv1a_u64(hash, step.swapped.len() as u64);
    for &idx in &step.swapped {
        hash = fnv1a_u64(hash, idx as u64);
    }

    hash = fnv1a_cursor(hash, step.i);
    hash = fnv1a_cursor(hash, step.j);

    hash
}

/// Compute a hash over an entire trace.
///
/// The step index is folded in at each boundary so step order matters.
/// Returns the FNV offset basis (non-zero) for an empty trace, since
/// the hash state is initialized with it.
pub fn trace_hash(trace: &Trace) -> u64 {
    let mut hash = FNV_OFFSET;

    for (idx, step) in trace.iter().enumerate() {
        hash = fnv1a_u64(hash, idx as u64);
        hash = fnv1a_u64(hash, step_hash(step));
    }

    hash
}

#[cfg(test)]
mod tests {
    use super::*;
    use vitrine_core::{StepCursors, TraceRecorder};

    fn make_step(array: &[i32], explanation: &str) -> Step {
        let mut rec = TraceRecorder::new();
        rec.emit(array, explanation, &[], &[], StepCursors::none());
        rec.finish().into_steps().pop().unwrap()
    }

    #[test]
    fn same_step_same_hash() {
        let a = make_step(&[1, 2, 3], "x");
        let b = make_step(&[1, 2, 3], "x");
        assert_eq!(step_hash(&a), step_hash(&b));
    }

    #[test]
    fn different_values_different_hash() {
        let a = make_step(&[1, 2, 3], "x");
        let b = make_step(&[1, 2, 4], "x");
        assert_ne!(step_hash(&a), step_hash(&b));
    }

    #[test]
    fn explanation_participates_in_the_hash() {
        let a = make_step(&[1], "compare");
        let b = make_step(&[1], "swap");
        assert_ne!(step_hash(&a), step_hash(&b));
    }

    #[test]
    fn absent_cursor_differs_from_zero_cursor() {
        let mut with_cursor = make_step(&[1], "x");
        with_cursor.i = Some(0);
        let without_cursor = make_step(&[1], "x");
        assert_ne!(step_hash(&with_cursor), step_hash(&without_cursor));
    }

    #[test]
    fn index_set_membership_matters() {
        let mut comparing = make_step(&[1, 2], "x");
        comparing.comparing.push(0);
        let mut swapped = make_step(&[1, 2], "x");
        swapped.swapped.push(0);
        assert_ne!(step_hash(&comparing), step_hash(&swapped));
    }

    #[test]
    fn step_order_matters_for_trace_hash() {
        let mut ab = TraceRecorder::new();
        ab.emit(&[1], "a", &[], &[], StepCursors::none());
        ab.emit(&[1], "b", &[], &[], StepCursors::none());

        let mut ba = TraceRecorder::new();
        ba.emit(&[1], "b", &[], &[], StepCursors::none());
        ba.emit(&[1], "a", &[], &[], StepCursors::none());

        assert_ne!(trace_hash(&ab.finish()), trace_hash(&ba.finish()));
    }

    #[test]
    fn empty_trace_hash_is_fnv_offset() {
        let trace = TraceRecorder::new().finish();
        assert_eq!(
            trace_hash(&trace),
            FNV_OFFSET,
            "empty trace hash must equal the offset basis"
        );
    }
}
