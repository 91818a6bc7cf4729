//! Bit-level genetic operators.
//!
//! Crossover and mutation on fixed-width bitstrings stored as [`Member`]
//! integers. Every operator takes the chromosome length explicitly and draws
//! from the caller's generator, so the order of draws is fixed.
//!
//! # Crossover Operators
//!
//! - [`point_crossover`]: exchange the low `pos` bits between two parents
//! - [`random_point_crossover`]: the same with a random cut in `[1, bits-1]`
//! - [`uniform_crossover`]: per-bit coin flip where the parents differ
//!
//! # Mutation Operators
//!
//! - [`mutate`]: flip `k` distinct random bit positions
//!
//! # References
//!
//! - Holland (1975), *Adaptation in Natural and Artificial Systems*
//! - Syswerda (1989), "Uniform Crossover in Genetic Algorithms"

use super::error::GaError;
use super::types::{Member, MAX_BIT_COUNT, MIN_BIT_COUNT};
use rand::seq::index;
use rand::Rng;

// ============================================================================
// Crossover operators
// ============================================================================

/// Single-point crossover at bit position `pos` (counted from the right).
///
/// Child A keeps the high `bits - pos` bits of `a` and the low `pos` bits of
/// `b`; child B is the mirror. Crossing the two children again at the same
/// `pos` gives back the parents.
///
/// `pos` must lie in `[1, bits - 1]` and `bits` in
/// `[MIN_BIT_COUNT, MAX_BIT_COUNT]`; debug builds panic otherwise.
pub fn point_crossover(a: Member, b: Member, pos: u32, bits: u32) -> (Member, Member) {
    debug_assert!(
        (MIN_BIT_COUNT..=MAX_BIT_COUNT).contains(&bits),
        "chromosome length {bits} out of range"
    );
    debug_assert!((1..bits).contains(&pos), "cut {pos} outside [1, {bits})");
    let low = low_mask(pos);
    let high = low_mask(bits) & !low;
    ((a & high) | (b & low), (b & high) | (a & low))
}

/// Single-point crossover with a cut drawn uniformly from `[1, bits-1]`.
pub fn random_point_crossover<R: Rng>(
    a: Member,
    b: Member,
    bits: u32,
    rng: &mut R,
) -> (Member, Member) {
    let pos = rng.random_range(1..bits);
    point_crossover(a, b, pos, bits)
}

/// Uniform crossover producing a single child.
///
/// Bits on which the parents agree are copied. Each differing bit is taken
/// from `a` or `b` with equal probability, drawn from the lowest position up.
pub fn uniform_crossover<R: Rng>(a: Member, b: Member, bits: u32, rng: &mut R) -> Member {
    let mut child = a & b;
    for pos in 0..bits {
        let bit = 1 << pos;
        if (a ^ b) & bit == 0 {
            continue;
        }
        let donor = if rng.random_bool(0.5) { a } else { b };
        child |= donor & bit;
    }
    child
}

// ============================================================================
// Mutation operators
// ============================================================================

/// Flips `num_bits` distinct randomly chosen bit positions.
///
/// When `num_bits` is `None`, a count is drawn uniformly from `[1, bits]`.
/// The result is at Hamming distance exactly `num_bits` from `member`.
///
/// # Errors
///
/// [`GaError::NegativeBitCount`] for a negative count and
/// [`GaError::TooManyBits`] when the count exceeds `bits`.
pub fn mutate<R: Rng>(
    member: Member,
    num_bits: Option<i32>,
    bits: u32,
    rng: &mut R,
) -> Result<Member, GaError> {
    let k = match num_bits {
        None => rng.random_range(1..=bits),
        Some(k) if k < 0 => return Err(GaError::NegativeBitCount(k)),
        Some(k) => k as u32,
    };
    if k > bits {
        return Err(GaError::TooManyBits {
            requested: k,
            available: bits,
        });
    }

    let mut mutated = member;
    for pos in index::sample(rng, bits as usize, k as usize) {
        mutated ^= 1 << pos;
    }
    Ok(mutated)
}

// ============================================================================
// Helpers
// ============================================================================

fn low_mask(bits: u32) -> Member {
    (1 << bits) - 1
}

// ============================================================================
// Tests
// ============================================================================
