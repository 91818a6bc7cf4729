//! Core type definitions for the bitstring GA.
//!
//! A [`Member`] is a fixed-width bitstring stored as an unsigned integer.
//! The [`FitnessOracle`] trait is the contract between the engine and the
//! scoring function: the engine never checks member range itself, the oracle
//! owns its domain.

/// A candidate solution: an unsigned integer in `[0, 2^BITCOUNT)`.
///
/// Members have no identity beyond their value.
pub type Member = u32;

/// Smallest supported chromosome length. Point crossover needs a cut in `[1, BITCOUNT-1]`.
pub const MIN_BIT_COUNT: u32 = 2;

/// Largest supported chromosome length.
pub const MAX_BIT_COUNT: u32 = 31;

/// Scores members. Higher is better (maximization).
///
/// # Implementing
///
/// ```
/// use bitga::ga::FitnessOracle;
///
/// struct OneMax;
///
/// impl FitnessOracle for OneMax {
///     fn bit_count(&self) -> u32 { 8 }
///
///     fn fitness(&self, candidate: i64) -> f64 {
///         if !(0..256).contains(&candidate) {
///             return -1.0;
///         }
///         f64::from(candidate.count_ones())
///     }
/// }
///
/// assert_eq!(OneMax.fitness(0b1011), 3.0);
/// assert_eq!(OneMax.fitness(-1), -1.0);
/// ```
pub trait FitnessOracle {
    /// Chromosome length (BITCOUNT) of the members this oracle scores.
    fn bit_count(&self) -> u32;

    /// Scores a candidate.
    ///
    /// Must be deterministic and pure. The input is signed and wide so that
    /// out-of-range candidates can be expressed; for those the oracle returns
    /// its invalid-domain sentinel (a fixed low score) instead of failing.
    fn fitness(&self, candidate: i64) -> f64;

    /// Scores a member.
    fn score(&self, member: Member) -> f64 {
        self.fitness(i64::from(member))
    }
}

impl<O: FitnessOracle + ?Sized> FitnessOracle for &O {
    fn bit_count(&self) -> u32 {
        (**self).bit_count()
    }

    fn fitness(&self, candidate: i64) -> f64 {
        (**self).fitness(candidate)
    }
}

/// Number of distinct members for a chromosome length: `2^bits`.
pub fn domain_size(bits: u32) -> u32 {
    1u32 << bits
}

/// Sorts members descending by score. Equal scores keep their relative order.
pub(crate) fn sort_by_fitness<O: FitnessOracle + ?Sized>(oracle: &O, members: &mut Vec<Member>) {
    let mut scored: Vec<(Member, f64)> = members.iter().map(|&m| (m, oracle.score(m))).collect();
    scored.sort_by(|a, b| b.1.total_cmp(&a.1));
    members.clear();
    members.extend(scored.into_iter().map(|(m, _)| m));
}
