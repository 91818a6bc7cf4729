//! Per-generation report: member rows plus population aggregates.

use super::codec::encode;
use super::types::{FitnessOracle, Member};
use std::fmt;

/// Elite column of a report row.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum EliteMarker {
    /// Member equals the generation's elite.
    Elite,
    /// Elitism is on, member is not the elite.
    NotElite,
    /// Elitism is off.
    NotApplicable,
}

impl EliteMarker {
    pub fn as_str(self) -> &'static str {
        match self {
            EliteMarker::Elite => "ELITE",
            EliteMarker::NotElite => "-",
            EliteMarker::NotApplicable => "",
        }
    }
}

/// One row of a report.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MemberRecord {
    /// Fixed-width binary form, most-significant bit first.
    pub binary: String,
    pub value: Member,
    pub fitness: f64,
    pub elite: EliteMarker,
}

/// Snapshot of a population for display.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GenerationReport {
    pub records: Vec<MemberRecord>,
    pub min: f64,
    pub max: f64,
    pub mean: f64,
    pub elitism: bool,
}

impl GenerationReport {
    /// Builds a report. Every member whose value equals `elite` is marked.
    pub fn new<O: FitnessOracle + ?Sized>(
        oracle: &O,
        population: &[Member],
        elite: Option<Member>,
        elitism: bool,
    ) -> Self {
        let bits = oracle.bit_count();
        let records: Vec<MemberRecord> = population
            .iter()
            .map(|&value| MemberRecord {
                binary: encode(value, bits),
                value,
                fitness: oracle.score(value),
                elite: match (elitism, elite) {
                    (false, _) => EliteMarker::NotApplicable,
                    (true, Some(e)) if e == value => EliteMarker::Elite,
                    (true, _) => EliteMarker::NotElite,
                },
            })
            .collect();

        let (min, max, sum) = records.iter().fold(
            (f64::INFINITY, f64::NEG_INFINITY, 0.0),
            |(lo, hi, sum), r| (lo.min(r.fitness), hi.max(r.fitness), sum + r.fitness),
        );
        let mean = if records.is_empty() {
            0.0
        } else {
            sum / records.len() as f64
        };

        Self {
            records,
            min,
            max,
            mean,
            elitism,
        }
    }
}

impl fmt::Display for GenerationReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let width = self
            .records
            .iter()
            .map(|r| r.binary.len())
            .max()
            .unwrap_or(0)
            .max(10);

        write!(f, "{:>width$} {:>4} {:>7}", "bin", "int", "fitness")?;
        if self.elitism {
            write!(f, " elite")?;
        }
        writeln!(f)?;

        for r in &self.records {
            write!(f, "{:>width$} {:>4} {:>7.2}", r.binary, r.value, r.fitness)?;
            if self.elitism {
                write!(f, " {}", r.elite.as_str())?;
            }
            writeln!(f)?;
        }

        write!(
            f,
            "min = {:.2}, max = {:.2}, avg = {:.2}",
            self.min, self.max, self.mean
        )
    }
}
