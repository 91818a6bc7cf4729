//! Seeded random source shared by every randomized GA operation.
//!
//! An engine owns exactly one [`RandomSource`] for the lifetime of a run.
//! Draws are consumed sequentially, so a fixed seed reproduces the same
//! sequence of populations.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};

/// The generator type used by the engine.
pub type RandomSource = StdRng;

/// Number of entropy bytes hashed into a seed when none is given.
const ENTROPY_BYTES: usize = 32;

/// Creates a deterministic generator from a 64-bit seed.
pub fn create_rng(seed: u64) -> RandomSource {
    StdRng::seed_from_u64(seed)
}

/// Returns the explicit seed, or derives one by hashing fresh OS entropy.
pub fn resolve_seed(explicit: Option<u64>) -> u64 {
    match explicit {
        Some(seed) => seed,
        None => {
            let mut entropy = [0u8; ENTROPY_BYTES];
            rand::rng().fill(&mut entropy);
            let mut hasher = DefaultHasher::new();
            entropy.hash(&mut hasher);
            hasher.finish()
        }
    }
}
