//! Bitstring Genetic Algorithm.
//!
//! Evolves a fixed-size population of fixed-width bitstrings under a
//! pluggable [`FitnessOracle`], using the canonical loop: selection,
//! crossover, mutation, optional elitism. Every randomized step draws from a
//! single seeded generator owned by the engine, so a fixed seed reproduces
//! the same sequence of populations.
//!
//! # Key Types
//!
//! - [`Params`]: Algorithm parameters (probabilities, sizes, seed, strategy tag)
//! - [`GaEngine`]: Owns the population and drives the generation loop
//! - [`SelectionStrategy`]: Fitness-proportional or uniform selection
//! - [`Generation`]: Snapshot yielded after every generation
//! - [`GenerationReport`]: Display rows and min/max/mean aggregates
//!
//! # Submodules
//!
//! - [`operators`]: Point crossover, uniform crossover, and bit-flip mutation
//! - [`codec`]: Fixed-width binary string form of a member
//!
//! # References
//!
//! - Holland (1975), *Adaptation in Natural and Artificial Systems*
//! - Goldberg (1989), *Genetic Algorithms in Search, Optimization, and Machine Learning*

pub mod codec;
mod config;
mod engine;
mod error;
pub mod operators;
mod report;
mod selection;
mod types;

pub use config::Params;
pub use engine::{EngineState, Evolve, GaEngine, Generation};
pub use error::GaError;
pub use report::{EliteMarker, GenerationReport, MemberRecord};
pub use selection::SelectionStrategy;
pub use types::{domain_size, FitnessOracle, Member, MAX_BIT_COUNT, MIN_BIT_COUNT};
