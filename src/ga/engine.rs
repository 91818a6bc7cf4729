//! GA generation loop.
//!
//! [`GaEngine`] owns the population, the parameters, and the random source,
//! and advances one generation per [`step`](GaEngine::step):
//! selection + crossover → elitism exemption → mutation → re-sort.

use super::config::Params;
use super::error::GaError;
use super::operators::mutate;
use super::report::GenerationReport;
use super::selection::SelectionStrategy;
use super::types::{
    domain_size, sort_by_fitness, FitnessOracle, Member, MAX_BIT_COUNT, MIN_BIT_COUNT,
};
use crate::random::{create_rng, resolve_seed, RandomSource};
use log::{debug, info};
use rand::Rng;

/// Lifecycle of an engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EngineState {
    /// Constructed, population empty.
    Uninitialized,
    /// Seeded and populated; no generation run yet.
    Ready,
    /// `k` generations completed, more to go.
    Running(usize),
    /// All configured generations completed.
    Done,
}

/// Snapshot yielded after each completed generation.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Generation {
    /// 0-based generation index.
    pub index: usize,

    /// Population after re-sorting, descending by fitness.
    pub population: Vec<Member>,

    /// The member exempted from mutation, when elitism is enabled.
    pub elite: Option<Member>,
}

/// Drives the bitstring GA.
///
/// # Usage
///
/// ```
/// use bitga::ga::{GaEngine, Params};
/// use bitga::landscape::PiecewiseLandscape;
///
/// let params = Params::default().with_seed(42).with_iterations(5);
/// let mut engine = GaEngine::new(PiecewiseLandscape::new(), params).unwrap();
/// engine.initialize().unwrap();
///
/// for generation in engine.evolve().unwrap() {
///     let generation = generation.unwrap();
///     assert_eq!(generation.population.len(), 20);
/// }
/// ```
pub struct GaEngine<O> {
    oracle: O,
    params: Params,
    strategy: SelectionStrategy,
    state: EngineState,
    seed: Option<u64>,
    rng: Option<RandomSource>,
    population: Vec<Member>,
    elite: Option<Member>,
}

impl<O: FitnessOracle> GaEngine<O> {
    /// Creates an engine, resolving the selection strategy from its tag.
    ///
    /// # Errors
    ///
    /// [`GaError::UnknownStrategy`] for an unrecognized tag and
    /// [`GaError::InvalidParameter`] for out-of-range parameters or an
    /// unsupported oracle bit count.
    pub fn new(oracle: O, params: Params) -> Result<Self, GaError> {
        let strategy = SelectionStrategy::from_tag(&params.selection)?;
        params.validate()?;

        let bits = oracle.bit_count();
        if !(MIN_BIT_COUNT..=MAX_BIT_COUNT).contains(&bits) {
            return Err(GaError::InvalidParameter(format!(
                "bit count must be in [{MIN_BIT_COUNT}, {MAX_BIT_COUNT}], got {bits}"
            )));
        }

        Ok(Self {
            oracle,
            params,
            strategy,
            state: EngineState::Uninitialized,
            seed: None,
            rng: None,
            population: Vec::new(),
            elite: None,
        })
    }

    /// Seeds the random source and fills the population with uniform random members.
    ///
    /// Returns the resolved seed.
    pub fn initialize(&mut self) -> Result<u64, GaError> {
        if self.state != EngineState::Uninitialized {
            return Err(GaError::AlreadyInitialized);
        }

        let seed = resolve_seed(self.params.seed);
        let mut rng = create_rng(seed);
        if self.params.trace {
            info!("Using random seed {seed}");
        }

        let upper = domain_size(self.oracle.bit_count());
        self.population = (0..self.params.population_size)
            .map(|_| rng.random_range(0..upper))
            .collect();

        self.seed = Some(seed);
        self.rng = Some(rng);
        self.state = EngineState::Ready;
        Ok(seed)
    }

    /// Runs one generation.
    ///
    /// Returns `Ok(None)` once all configured generations have run. On error
    /// the population is left as it was before the step.
    pub fn step(&mut self) -> Result<Option<Generation>, GaError> {
        let index = match self.state {
            EngineState::Uninitialized => return Err(GaError::NotInitialized),
            EngineState::Done => return Ok(None),
            EngineState::Ready => 0,
            EngineState::Running(completed) => completed,
        };
        if index >= self.params.iterations {
            self.state = EngineState::Done;
            return Ok(None);
        }
        let Some(rng) = self.rng.as_mut() else {
            return Err(GaError::NotInitialized);
        };
        let bits = self.oracle.bit_count();

        // 1. Selection and crossover
        let mut selection = self.strategy.select_and_crossover(
            &self.population,
            self.params.crossing,
            &self.oracle,
            rng,
        )?;

        // 2. Elitism
        let elite_index = if self.params.elitism {
            fittest_index(&self.oracle, &selection)
        } else {
            None
        };
        let elite = elite_index.map(|i| selection[i]);

        // 3. Mutation
        for (i, member) in selection.iter_mut().enumerate() {
            if Some(i) == elite_index {
                continue;
            }
            if rng.random::<f64>() < self.params.mutation {
                *member = mutate(*member, None, bits, rng)?;
            }
        }

        // 4. Re-sort
        sort_by_fitness(&self.oracle, &mut selection);

        debug!(
            "generation {index}: best {} ({:.2})",
            selection[0],
            self.oracle.score(selection[0])
        );

        self.population = selection;
        self.elite = elite;
        self.state = if index + 1 >= self.params.iterations {
            EngineState::Done
        } else {
            EngineState::Running(index + 1)
        };

        Ok(Some(Generation {
            index,
            population: self.population.clone(),
            elite,
        }))
    }

    /// Iterates over the remaining generations.
    ///
    /// The iterator stops after the last configured generation or after the
    /// first error. An exhausted engine yields nothing; build a new one to
    /// run again.
    pub fn evolve(&mut self) -> Result<Evolve<'_, O>, GaError> {
        if self.state == EngineState::Uninitialized {
            return Err(GaError::NotInitialized);
        }
        Ok(Evolve {
            engine: self,
            failed: false,
        })
    }

    /// Report rows and aggregates for the current population.
    pub fn report(&self) -> GenerationReport {
        GenerationReport::new(
            &self.oracle,
            &self.population,
            self.elite,
            self.params.elitism,
        )
    }

    /// Current population, descending by fitness after every generation.
    pub fn population(&self) -> &[Member] {
        &self.population
    }

    /// Elite member of the last generation, if elitism is enabled.
    pub fn elite(&self) -> Option<Member> {
        self.elite
    }

    /// Seed resolved by [`initialize`](Self::initialize).
    pub fn seed(&self) -> Option<u64> {
        self.seed
    }

    pub fn state(&self) -> EngineState {
        self.state
    }

    pub fn strategy(&self) -> SelectionStrategy {
        self.strategy
    }

    pub fn params(&self) -> &Params {
        &self.params
    }

    pub fn oracle(&self) -> &O {
        &self.oracle
    }
}

/// Iterator over generations, created by [`GaEngine::evolve`].
pub struct Evolve<'a, O> {
    engine: &'a mut GaEngine<O>,
    failed: bool,
}

impl<O: FitnessOracle> Iterator for Evolve<'_, O> {
    type Item = Result<Generation, GaError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.failed {
            return None;
        }
        let next = self.engine.step().transpose();
        if matches!(next, Some(Err(_))) {
            self.failed = true;
        }
        next
    }
}

/// Index of the highest-scoring member; the first one on ties.
fn fittest_index<O: FitnessOracle + ?Sized>(oracle: &O, members: &[Member]) -> Option<usize> {
    let mut best: Option<(usize, f64)> = None;
    for (i, &member) in members.iter().enumerate() {
        let score = oracle.score(member);
        let better = match best {
            None => true,
            Some((_, top)) => score.total_cmp(&top).is_gt(),
        };
        if better {
            best = Some((i, score));
        }
    }
    best.map(|(i, _)| i)
}

// ============================================================================
// Tests
// ============================================================================
