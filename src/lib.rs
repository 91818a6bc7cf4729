//! Seeded bitstring genetic algorithm.
//!
//! Evolves a population of fixed-width bitstrings toward higher scores:
//!
//! - **Selection**: fitness-proportional (roulette wheel without replacement)
//!   or uniform random pairing.
//! - **Crossover**: single-point and uniform.
//! - **Mutation**: flip `k` distinct bits.
//! - **Elitism**: optionally exempt the best member of each generation from
//!   mutation.
//!
//! Scoring is pluggable through [`ga::FitnessOracle`];
//! [`landscape::PiecewiseLandscape`] is the 10-bit reference curve.
//!
//! # Example
//!
//! ```
//! use bitga::ga::{GaEngine, Params};
//! use bitga::landscape::PiecewiseLandscape;
//!
//! let params = Params::default()
//!     .with_seed(7)
//!     .with_iterations(10)
//!     .with_elitism(true);
//! let mut engine = GaEngine::new(PiecewiseLandscape::new(), params).unwrap();
//! engine.initialize().unwrap();
//!
//! let last = engine.evolve().unwrap().last().unwrap().unwrap();
//! assert_eq!(last.index, 9);
//! println!("{}", engine.report());
//! ```

pub mod ga;
pub mod landscape;
pub mod random;
