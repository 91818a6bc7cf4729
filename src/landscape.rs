//! Reference fitness landscape.
//!
//! A fixed piecewise-linear curve over the 10-bit domain `[0, 1024)` with
//! several local optima. Candidates outside the domain score
//! [`INVALID_FITNESS`].

use crate::ga::FitnessOracle;

/// Chromosome length of the reference landscape.
pub const BITCOUNT: u32 = 10;

/// Score returned for candidates outside `[0, 2^BITCOUNT)`.
pub const INVALID_FITNESS: f64 = -1.0;

/// The reference 10-bit piecewise landscape.
///
/// Highest peak is at 360 (score 270). Scores are never negative inside
/// the domain; the tail `[960, 1024)` scores 0.
#[derive(Debug, Clone, Copy, Default)]
pub struct PiecewiseLandscape;

impl PiecewiseLandscape {
    pub fn new() -> Self {
        Self
    }
}

impl FitnessOracle for PiecewiseLandscape {
    fn bit_count(&self) -> u32 {
        BITCOUNT
    }

    fn fitness(&self, candidate: i64) -> f64 {
        let x = candidate as f64;
        match candidate {
            0..=29 => 60.0,
            30..=89 => x + 30.0,
            90..=119 => 120.0,
            120..=209 => -0.83333 * x + 220.0,
            210..=269 => 1.75 * x - 322.5,
            270..=299 => 150.0,
            300..=359 => 2.0 * x - 450.0,
            360..=509 => -1.8 * x + 918.0,
            510..=629 => 1.5 * x - 765.0,
            630..=719 => -1.33333 * x + 1020.0,
            720..=749 => 60.0,
            750..=869 => 1.5 * x - 1065.0,
            870..=959 => -2.66667 * x + 2560.0,
            960..=1023 => 0.0,
            _ => INVALID_FITNESS,
        }
    }
}
