//! Test utilities and shared fixtures for Vitrine development.
//!
//! Provides the canonical edge-case input menu and the trace-invariant
//! assertions every generator must satisfy, so sibling crates' test
//! suites check the same contract the same way.

#![forbid(unsafe_code)]
#![allow(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

pub mod fixtures;

pub use fixtures::{
    assert_all_steps_are_permutations, assert_is_permutation, assert_sorted_ascending,
    assert_trace_invariants, canonical_inputs,
};
