//! GA configuration.
//!
//! [`Params`] holds every parameter that controls the evolutionary loop.

use super::error::GaError;
use super::selection::SelectionStrategy;

/// Configuration for the bitstring genetic algorithm.
///
/// # Defaults
///
/// ```
/// use bitga::ga::Params;
///
/// let params = Params::default();
/// assert_eq!(params.population_size, 20);
/// assert_eq!(params.iterations, 30);
/// ```
///
/// # Builder Pattern
///
/// ```
/// use bitga::ga::Params;
///
/// let params = Params::default()
///     .with_population_size(50)
///     .with_selection("uniform")
///     .with_elitism(true)
///     .with_seed(42);
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Params {
    /// Probability of crossing a pair (or drawing a uniform crossover), in `[0, 1]`.
    pub crossing: f64,

    /// Per-member, per-generation probability of mutation, in `[0, 1]`.
    pub mutation: f64,

    /// Number of generations to run.
    pub iterations: usize,

    /// Fixed number of members in the population. Must be positive.
    pub population_size: usize,

    /// Random seed for reproducibility.
    ///
    /// `None` derives a seed from OS entropy at initialization.
    pub seed: Option<u64>,

    /// Selection strategy tag: `"fitness-proportional"` or `"uniform"`.
    ///
    /// Resolved once when the engine is constructed.
    pub selection: String,

    /// Exempt the best member of each generation from mutation.
    pub elitism: bool,

    /// Emit the resolved-seed diagnostic record at initialization.
    pub trace: bool,
}

impl Default for Params {
    fn default() -> Self {
        Self {
            crossing: 0.9,
            mutation: 0.01,
            iterations: 30,
            population_size: 20,
            seed: None,
            selection: SelectionStrategy::FitnessProportional.tag().to_string(),
            elitism: false,
            trace: true,
        }
    }
}

impl Params {
    /// Sets the crossing probability.
    pub fn with_crossing(mut self, p: f64) -> Self {
        self.crossing = p.clamp(0.0, 1.0);
        self
    }

    /// Sets the mutation probability.
    pub fn with_mutation(mut self, p: f64) -> Self {
        self.mutation = p.clamp(0.0, 1.0);
        self
    }

    /// Sets the number of generations.
    pub fn with_iterations(mut self, n: usize) -> Self {
        self.iterations = n;
        self
    }

    /// Sets the population size.
    pub fn with_population_size(mut self, n: usize) -> Self {
        self.population_size = n;
        self
    }

    /// Sets the random seed for reproducibility.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Sets the selection strategy tag.
    pub fn with_selection(mut self, tag: impl Into<String>) -> Self {
        self.selection = tag.into();
        self
    }

    /// Enables or disables elitism.
    pub fn with_elitism(mut self, elitism: bool) -> Self {
        self.elitism = elitism;
        self
    }

    /// Enables or disables the seed diagnostic.
    pub fn with_trace(mut self, trace: bool) -> Self {
        self.trace = trace;
        self
    }

    /// Validates the numeric parameters.
    ///
    /// The selection tag is checked separately by
    /// [`SelectionStrategy::from_tag`].
    pub fn validate(&self) -> Result<(), GaError> {
        if !(0.0..=1.0).contains(&self.crossing) {
            return Err(GaError::InvalidParameter(format!(
                "crossing probability must be in [0, 1], got {}",
                self.crossing
            )));
        }
        if !(0.0..=1.0).contains(&self.mutation) {
            return Err(GaError::InvalidParameter(format!(
                "mutation probability must be in [0, 1], got {}",
                self.mutation
            )));
        }
        if self.population_size == 0 {
            return Err(GaError::InvalidParameter(
                "population size must be positive".into(),
            ));
        }
        Ok(())
    }
}
