//! Input handling for the Vitrine sorting trace engine.
//!
//! The generators themselves are total functions; this crate is the
//! validated boundary in front of them. It owns the two ways a
//! sequence enters the system:
//!
//! - [`parse_sequence`] — user-typed comma-separated text, validated
//!   against the character set and the length cap
//! - [`random_sequence`] / [`seeded_sequence`] — generated arrays with
//!   values in `[1, 100]`, deterministic when seeded
//!
//! Oversized or empty input is rejected *here*, before any generator
//! runs; nothing downstream re-validates.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod parse;
pub mod random;

pub use parse::parse_sequence;
pub use random::{random_sequence, seeded_sequence, VALUE_MAX, VALUE_MIN};

// The length cap is core's constant; re-exported here because this
// crate is where it is enforced.
pub use vitrine_core::MAX_SEQUENCE_LEN;
