//! Error type for the GA engine.

/// Errors raised by configuration, operators, and the generation loop.
///
/// All variants are fatal for the call that produced them; nothing is
/// retried internally.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum GaError {
    #[error("unknown selection strategy {0:?}, expected fitness-proportional or uniform")]
    UnknownStrategy(String),

    #[error("invalid parameter: {0}")]
    InvalidParameter(String),

    #[error("number of bits must be non-negative, got {0}")]
    NegativeBitCount(i32),

    #[error("cannot flip {requested} distinct bits of a {available}-bit member")]
    TooManyBits { requested: u32, available: u32 },

    #[error("fitness sum must be strictly positive for proportional selection, got {0}")]
    DegenerateFitness(f64),

    #[error("uniform selection needs at least 2 members, got {0}")]
    PopulationTooSmall(usize),

    #[error("engine is not initialized; call initialize() first")]
    NotInitialized,

    #[error("engine is already initialized")]
    AlreadyInitialized,

    #[error("invalid binary string {0:?}")]
    InvalidBinary(String),
}
