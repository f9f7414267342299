//======================================================================
// src/error.rs
// Error type for sponge configuration and phase violations.
//======================================================================

use crate::consts::WIDTH_BITS;

/// Errors returned by the sponge and the self test.
#[non_exhaustive]
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// Rate and capacity do not add up to the permutation width.
    #[error("rate ({rate}) + capacity ({capacity}) must equal {} bits", WIDTH_BITS)]
    InvalidWidth { rate: usize, capacity: usize },
    /// The rate is not a whole number of bytes.
    #[error("rate ({rate} bits) is not a multiple of 8")]
    UnalignedRate { rate: usize },
    /// A zero rate can never absorb anything.
    #[error("rate must be non-zero")]
    ZeroRate,
    /// Round count outside `1..=max`.
    #[error("round count {rounds} is outside 1..={max}")]
    InvalidRounds { rounds: usize, max: usize },
    /// `absorb` was asked for more output than one rate block holds.
    #[error("requested {requested} output bytes but only {available} are available per block")]
    OutputTooLong { requested: usize, available: usize },
    /// Input was absorbed after squeezing started without a reset.
    #[error("cannot absorb after squeezing; reset the sponge first")]
    AbsorbAfterSqueeze,
    /// Output was requested before the message was padded.
    #[error("cannot squeeze before the message has been absorbed")]
    SqueezeBeforeAbsorb,
    /// A known-answer vector produced the wrong digest.
    #[error("self test `{name}` failed: expected {expected}, got {actual}")]
    SelfTest {
        name: &'static str,
        expected: String,
        actual: String,
    },
}

pub type Result<T> = core::result::Result<T, Error>;
