//! Selection strategies for the GA.
//!
//! A strategy turns the current population into the next generation's
//! selection, applying crossover on the way. Mutation and elitism are left to
//! the engine.
//!
//! # References
//!
//! - Goldberg (1989), *Genetic Algorithms in Search, Optimization, and
//!   Machine Learning*, ch. 1 (roulette wheel)
//! - Syswerda (1989), "Uniform Crossover in Genetic Algorithms"

use super::error::GaError;
use super::operators::{random_point_crossover, uniform_crossover};
use super::types::{FitnessOracle, Member};
use rand::seq::index;
use rand::Rng;
use std::collections::HashSet;
use std::fmt;
use std::str::FromStr;

/// Selection strategy, resolved from its configuration tag.
///
/// Both strategies assume **maximization** (higher fitness = better).
///
/// # Examples
///
/// ```
/// use bitga::ga::SelectionStrategy;
///
/// let strategy: SelectionStrategy = "uniform".parse().unwrap();
/// assert_eq!(strategy, SelectionStrategy::Uniform);
/// assert!("tournament".parse::<SelectionStrategy>().is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SelectionStrategy {
    /// Roulette wheel without replacement, followed by pairwise point crossover.
    ///
    /// Every draw is a uniform value in `[0, 1)` walked down the wheel
    /// (members in descending fitness order) by subtracting normalized
    /// weights. A draw that lands on a slot already taken this generation is
    /// discarded and redrawn; weights are not renormalized.
    ///
    /// Fails with [`GaError::DegenerateFitness`] when the population's
    /// fitness sum is not strictly positive.
    #[default]
    FitnessProportional,

    /// Random distinct pairs, each crossed uniformly or copied through.
    ///
    /// Offspring accumulate in a set of distinct values, so identical
    /// offspring collapse into one entry. The result is trimmed to exactly
    /// the population size.
    Uniform,
}

impl SelectionStrategy {
    /// Canonical configuration tag.
    pub fn tag(self) -> &'static str {
        match self {
            SelectionStrategy::FitnessProportional => "fitness-proportional",
            SelectionStrategy::Uniform => "uniform",
        }
    }

    /// Resolves a configuration tag. Unknown tags are an error.
    pub fn from_tag(tag: &str) -> Result<Self, GaError> {
        match tag {
            "fitness-proportional" | "fitness_proportional" | "roulette" => {
                Ok(SelectionStrategy::FitnessProportional)
            }
            "uniform" => Ok(SelectionStrategy::Uniform),
            other => Err(GaError::UnknownStrategy(other.to_string())),
        }
    }

    /// Builds the next selection from `population`.
    ///
    /// The result always has the same length as `population`.
    pub fn select_and_crossover<O, R>(
        &self,
        population: &[Member],
        crossing: f64,
        oracle: &O,
        rng: &mut R,
    ) -> Result<Vec<Member>, GaError>
    where
        O: FitnessOracle + ?Sized,
        R: Rng,
    {
        match self {
            SelectionStrategy::FitnessProportional => {
                fitness_proportional(population, crossing, oracle, rng)
            }
            SelectionStrategy::Uniform => uniform(population, crossing, oracle, rng),
        }
    }
}

impl FromStr for SelectionStrategy {
    type Err = GaError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_tag(s)
    }
}

impl fmt::Display for SelectionStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

/// Upper bound on back-to-back roulette draws that land on taken slots.
const MAX_CONSECUTIVE_REDRAWS: usize = 1_000_000;

/// Roulette wheel selection without replacement, then point crossover on
/// consecutive pairs.
fn fitness_proportional<O, R>(
    population: &[Member],
    crossing: f64,
    oracle: &O,
    rng: &mut R,
) -> Result<Vec<Member>, GaError>
where
    O: FitnessOracle + ?Sized,
    R: Rng,
{
    let n = population.len();
    let bits = oracle.bit_count();

    let fits: Vec<f64> = population.iter().map(|&m| oracle.score(m)).collect();
    let total: f64 = fits.iter().sum();
    if !(total > 0.0 && total.is_finite()) {
        return Err(GaError::DegenerateFitness(total));
    }

    // Wheel: (member, normalized weight) in descending weight order.
    let mut wheel: Vec<(Member, f64)> = population
        .iter()
        .zip(&fits)
        .map(|(&m, &f)| (m, f / total))
        .collect();
    wheel.sort_by(|a, b| b.1.total_cmp(&a.1));

    // Cumulative distribution over the wheel. A draw in [0, 1) can only stop
    // on a slot that widens the distribution before it reaches 1.
    let mut reachable = vec![false; n];
    let mut cumulative = 0.0;
    for (i, &(_, w)) in wheel.iter().enumerate() {
        let next = cumulative + w;
        reachable[i] = next > cumulative && cumulative < 1.0;
        cumulative = next;
    }
    let live = reachable.iter().filter(|&&r| r).count();
    let last_live = reachable.iter().rposition(|&r| r).unwrap_or(0);

    let mut used = vec![false; n];
    let mut slots: Vec<usize> = Vec::with_capacity(n);
    let mut misses = 0;
    while slots.len() < live && misses < MAX_CONSECUTIVE_REDRAWS {
        let mut remainder: f64 = rng.random();
        let mut slot = last_live;
        for (i, &(_, w)) in wheel.iter().enumerate() {
            remainder -= w;
            if remainder <= 0.0 {
                slot = i;
                break;
            }
        }
        if used[slot] || !reachable[slot] {
            misses += 1;
            continue;
        }
        misses = 0;
        used[slot] = true;
        slots.push(slot);
    }
    slots.extend((0..n).filter(|&i| !used[i]));

    // Wheel order is descending fitness, so ordering by slot sorts the pool.
    slots.sort_unstable();
    let mut pool: Vec<Member> = slots.into_iter().map(|i| wheel[i].0).collect();

    for i in (0..n.saturating_sub(1)).step_by(2) {
        if rng.random::<f64>() < crossing {
            let (a, b) = random_point_crossover(pool[i], pool[i + 1], bits, rng);
            pool[i] = a;
            pool[i + 1] = b;
        }
    }

    Ok(pool)
}

/// Uniform selection over distinct random pairs.
fn uniform<O, R>(
    population: &[Member],
    crossing: f64,
    oracle: &O,
    rng: &mut R,
) -> Result<Vec<Member>, GaError>
where
    O: FitnessOracle + ?Sized,
    R: Rng,
{
    let n = population.len();
    if n < 2 {
        return Err(GaError::PopulationTooSmall(n));
    }
    let bits = oracle.bit_count();
    let pair_count = n * (n - 1) / 2;

    let mut drawn: HashSet<(usize, usize)> = HashSet::with_capacity(pair_count.min(4 * n));
    let mut seen: HashSet<Member> = HashSet::with_capacity(n + 1);
    let mut selection: Vec<Member> = Vec::with_capacity(n + 1);
    let mut accept = |member: Member, selection: &mut Vec<Member>| {
        if seen.insert(member) {
            selection.push(member);
        }
    };

    while selection.len() < n && drawn.len() < pair_count {
        let pair = index::sample(rng, n, 2);
        let (i, j) = (pair.index(0), pair.index(1));
        if !drawn.insert((i.min(j), i.max(j))) {
            continue;
        }

        let (a, b) = (population[i], population[j]);
        if rng.random::<f64>() < crossing {
            accept(uniform_crossover(a, b, bits, rng), &mut selection);
        } else {
            accept(a, &mut selection);
            accept(b, &mut selection);
        }
    }

    // Copying a pair through can overshoot by one.
    selection.truncate(n);

    // Pairs exhausted before enough distinct values appeared.
    let shortfall = n - selection.len();
    selection.extend(population.iter().take(shortfall));

    Ok(selection)
}
