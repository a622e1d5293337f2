//! Random sequence generation.
//!
//! Produces arrays in the value range the bar-chart consumer renders
//! well, with one position boosted into the upper half so a generated
//! array never looks flat. Determinism matters here the same way it
//! does in the generators: [`seeded_sequence`] always produces the
//! same array for the same `(len, seed)`, so a session can be
//! reproduced exactly.

use rand::Rng;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use vitrine_core::MAX_SEQUENCE_LEN;

/// Smallest generated value.
pub const VALUE_MIN: i32 = 1;
/// Largest generated value.
pub const VALUE_MAX: i32 = 100;

/// Generate `len` random values in `[VALUE_MIN, VALUE_MAX]` from a
/// caller-owned RNG.
///
/// `len` is clamped to [`MAX_SEQUENCE_LEN`]. One uniformly-chosen
/// position is overwritten with a value in the upper half of the range
/// (`[50, 100]`) to guarantee some variation. Returns an empty vector
/// for `len == 0`.
pub fn random_sequence(len: usize, rng: &mut impl Rng) -> Vec<i32> {
    let len = len.min(MAX_SEQUENCE_LEN);
    if len == 0 {
        return Vec::new();
    }

    let mut values: Vec<i32> = (0..len)
        .map(|_| rng.random_range(VALUE_MIN..=VALUE_MAX))
        .collect();

    let boosted = rng.random_range(0..len);
    values[boosted] = rng.random_range(VALUE_MAX / 2..=VALUE_MAX);

    values
}

/// Generate `len` random values from a ChaCha8 RNG seeded with `seed`.
///
/// The same `(len, seed)` pair always yields the same sequence.
///
/// # Examples
///
/// ```
/// use vitrine_input::seeded_sequence;
///
/// let a = seeded_sequence(10, 42);
/// let b = seeded_sequence(10, 42);
/// assert_eq!(a, b);
/// assert_eq!(a.len(), 10);
/// ```
pub fn seeded_sequence(len: usize, seed: u64) -> Vec<i32> {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    random_sequence(len, &mut rng)
}
