//======================================================================
// src/sponge.rs
// The sponge controller: reset / update / absorb / squeeze over the
// Keccak-f[800] lane state, with multi-rate padding.
//======================================================================

use crate::error::{Error, Result};
use crate::params::SpongeParams;
use crate::state::LaneState;
use log::{debug, trace};
use zeroize::{Zeroize, ZeroizeOnDrop};

/// Where a [`Sponge`] is in its absorb / squeeze life cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// Freshly constructed or reset; the state is all zero.
    Fresh,
    /// Some input went in through [`Sponge::update`] but the message is not
    /// padded yet.
    Absorbing,
    /// The padded message has been permuted; output can be read.
    Squeezing,
}

/// A byte-oriented Keccak-f[800] sponge with runtime parameters.
///
/// ```
/// use keccak32::Sponge;
///
/// let mut sponge = Sponge::new(256, 544, 22)?;
/// let digest = sponge.absorb(&[0x41, 0xfb], 32)?;
/// assert_eq!(
///     keccak32::to_hex(&digest),
///     "dccdef818ceefe1cb20af60aafbf836d889462ac1a1bceb756648b6b5cae991b"
/// );
///
/// // more output, one rate block at a time
/// let mut more = [0u8; 64];
/// sponge.squeeze(&mut more)?;
/// assert_eq!(&more[..32], &digest[..]);
/// # Ok::<(), keccak32::Error>(())
/// ```
#[derive(Clone)]
pub struct Sponge {
    state: LaneState,
    params: SpongeParams,
    rate_bytes: usize,
    last_rate_byte: usize,
    /// Next byte of the rate that input will be XORed into.
    pos: usize,
    phase: Phase,
}

impl Sponge {
    /// Creates a sponge over `rate + capacity == 800` bits with `rounds`
    /// rounds per block.
    pub fn new(rate: usize, capacity: usize, rounds: usize) -> Result<Self> {
        Self::with_params(SpongeParams::new(rate, capacity, rounds))
    }

    pub fn with_params(params: SpongeParams) -> Result<Self> {
        params.validate()?;
        debug!(
            "keccak32 sponge: rate={} capacity={} rounds={}",
            params.rate, params.capacity, params.rounds
        );
        Ok(Self::from_valid(params))
    }

    fn from_valid(params: SpongeParams) -> Self {
        Self {
            state: LaneState::new(),
            params,
            rate_bytes: params.rate_bytes(),
            last_rate_byte: params.last_rate_byte(),
            pos: 0,
            phase: Phase::Fresh,
        }
    }

    pub fn params(&self) -> SpongeParams {
        self.params
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn rate_bytes(&self) -> usize {
        self.rate_bytes
    }

    /// The raw lanes, for callers layering their own construction on top.
    pub fn state(&self) -> &LaneState {
        &self.state
    }

    /// Zeroes the state and returns to [`Phase::Fresh`]. Valid in any phase.
    pub fn reset(&mut self) {
        self.state.zeroize();
        self.pos = 0;
        self.phase = Phase::Fresh;
        debug!("keccak32 sponge reset");
    }

    /// Absorbs `input` without finishing the message.
    ///
    /// Full rate blocks are permuted as soon as they fill up. The message is
    /// padded by a later [`absorb`](Self::absorb) or
    /// [`finalize`](Self::finalize).
    pub fn update(&mut self, input: &[u8]) -> Result<()> {
        if self.phase == Phase::Squeezing {
            return Err(Error::AbsorbAfterSqueeze);
        }
        self.absorb_bytes(input);
        self.phase = Phase::Absorbing;
        Ok(())
    }

    /// Absorbs the last part of a message, pads it and permutes, then returns
    /// the first `output_len` bytes of the rate.
    ///
    /// The returned bytes are the start of the output stream; the next
    /// [`squeeze`](Self::squeeze) yields them again before moving on.
    pub fn absorb(&mut self, input: &[u8], output_len: usize) -> Result<Vec<u8>> {
        if self.phase == Phase::Squeezing {
            return Err(Error::AbsorbAfterSqueeze);
        }
        if output_len > self.rate_bytes {
            return Err(Error::OutputTooLong {
                requested: output_len,
                available: self.rate_bytes,
            });
        }
        let mut out = vec![0u8; output_len];
        self.absorb_into(input, &mut out);
        Ok(out)
    }

    /// [`absorb`](Self::absorb) without the phase and length checks; `out`
    /// must fit in one rate block.
    pub(crate) fn absorb_into(&mut self, input: &[u8], out: &mut [u8]) {
        debug_assert!(out.len() <= self.rate_bytes);
        self.absorb_bytes(input);
        self.pad_and_permute();
        self.state.copy_to(out);
    }

    /// Pads whatever has been absorbed so far and switches to squeezing.
    pub fn finalize(&mut self) -> Result<()> {
        if self.phase == Phase::Squeezing {
            return Err(Error::AbsorbAfterSqueeze);
        }
        self.pad_and_permute();
        Ok(())
    }

    /// Fills `out` from the output stream.
    ///
    /// Each rate block is copied out and followed by a permutation, so
    /// successive calls continue the same stream regardless of how the output
    /// is split. An empty `out` still permutes once, like a short read.
    pub fn squeeze(&mut self, out: &mut [u8]) -> Result<()> {
        if self.phase != Phase::Squeezing {
            return Err(Error::SqueezeBeforeAbsorb);
        }
        if out.is_empty() {
            self.permute_block();
        }
        for block in out.chunks_mut(self.rate_bytes) {
            self.state.copy_to(block);
            self.permute_block();
        }
        Ok(())
    }

    /// Like [`squeeze`](Self::squeeze) but allocates the buffer.
    pub fn squeeze_vec(&mut self, len: usize) -> Result<Vec<u8>> {
        let mut out = vec![0u8; len];
        self.squeeze(&mut out)?;
        Ok(out)
    }

    fn absorb_bytes(&mut self, mut input: &[u8]) {
        while !input.is_empty() {
            let take = usize::min(self.rate_bytes - self.pos, input.len());
            self.state.xor_bytes(self.pos, &input[..take]);
            self.pos += take;
            input = &input[take..];

            if self.pos == self.rate_bytes {
                self.permute_block();
                self.pos = 0;
            }
        }
    }

    /// A message that ended on a block boundary gets a block of padding only.
    fn pad_and_permute(&mut self) {
        self.state.pad(self.pos, self.last_rate_byte);
        self.permute_block();
        self.pos = 0;
        self.phase = Phase::Squeezing;
    }

    #[inline]
    fn permute_block(&mut self) {
        self.state.permute(self.params.rounds);
        trace!("keccak32 permuted block ({} rounds)", self.params.rounds);
    }
}

impl Default for Sponge {
    /// `keccak[r=256, c=544]`, 22 rounds.
    fn default() -> Self {
        Self::from_valid(SpongeParams::default())
    }
}

/// Wipes the lanes and returns to [`Phase::Fresh`]; the parameters are kept,
/// so the sponge stays usable.
impl Zeroize for Sponge {
    fn zeroize(&mut self) {
        self.reset();
    }
}

// LaneState zeroizes itself on drop.
impl ZeroizeOnDrop for Sponge {}

impl core::fmt::Debug for Sponge {
    // lanes are not printed
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Sponge")
            .field("params", &self.params)
            .field("phase", &self.phase)
            .finish_non_exhaustive()
    }
}
