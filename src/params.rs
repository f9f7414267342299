//======================================================================
// src/params.rs
// Runtime sponge configuration: rate, capacity and round count.
//======================================================================

use crate::consts::{DEFAULT_CAPACITY, DEFAULT_RATE, DEFAULT_ROUNDS, MAX_ROUNDS, WIDTH_BITS};
use crate::error::{Error, Result};

/// Construction parameters of a [`Sponge`](crate::sponge::Sponge), in bits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SpongeParams {
    /// Bits absorbed and squeezed per permutation call.
    pub rate: usize,
    /// Bits withheld from absorption and output.
    pub capacity: usize,
    /// Rounds of Keccak-f[800] applied per block.
    pub rounds: usize,
}

impl SpongeParams {
    pub const fn new(rate: usize, capacity: usize, rounds: usize) -> Self {
        Self {
            rate,
            capacity,
            rounds,
        }
    }

    /// Checks the parameters describe a usable sponge over the 800-bit state.
    pub fn validate(&self) -> Result<()> {
        if self.rate.checked_add(self.capacity) != Some(WIDTH_BITS) {
            return Err(Error::InvalidWidth {
                rate: self.rate,
                capacity: self.capacity,
            });
        }
        if self.rate == 0 {
            return Err(Error::ZeroRate);
        }
        if self.rate % 8 != 0 {
            return Err(Error::UnalignedRate { rate: self.rate });
        }
        if self.rounds == 0 || self.rounds > MAX_ROUNDS {
            return Err(Error::InvalidRounds {
                rounds: self.rounds,
                max: MAX_ROUNDS,
            });
        }
        Ok(())
    }

    /// Rate in bytes.
    pub const fn rate_bytes(&self) -> usize {
        self.rate / 8
    }

    /// Index of the last byte inside the rate, where the end-of-message
    /// padding bit goes.
    pub const fn last_rate_byte(&self) -> usize {
        self.rate.div_ceil(8).saturating_sub(1)
    }
}

impl Default for SpongeParams {
    /// `keccak[r=256, c=544]` with the full 22 rounds.
    fn default() -> Self {
        Self::new(DEFAULT_RATE, DEFAULT_CAPACITY, DEFAULT_ROUNDS)
    }
}
