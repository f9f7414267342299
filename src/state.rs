//======================================================================
// src/state.rs
// The 800-bit lane state and its little-endian byte view.
//======================================================================

use crate::consts::{PAD_FIRST, PAD_LAST, PAD_SINGLE, STATE_BYTES, STATE_LANES};
use crate::permutation;
use zeroize::{Zeroize, ZeroizeOnDrop};

/// 25 lanes of 32 bits, indexed `y*5 + x`.
///
/// Byte `p` of the state is byte `p % 4` (least significant first) of lane
/// `p / 4`. The byte view is computed with shifts, so it does not depend on
/// the host's endianness.
#[derive(Debug, Clone, Default, PartialEq, Eq, Zeroize, ZeroizeOnDrop)]
pub struct LaneState([u32; STATE_LANES]);

impl LaneState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn lanes(&self) -> &[u32; STATE_LANES] {
        &self.0
    }

    pub fn lanes_mut(&mut self) -> &mut [u32; STATE_LANES] {
        &mut self.0
    }

    /// Reads byte `pos` of the state.
    #[inline(always)]
    pub fn byte(&self, pos: usize) -> u8 {
        debug_assert!(pos < STATE_BYTES);
        (self.0[pos / 4] >> (8 * (pos % 4))) as u8
    }

    /// XORs `value` into byte `pos` of the state.
    #[inline(always)]
    pub fn xor_byte(&mut self, pos: usize, value: u8) {
        debug_assert!(pos < STATE_BYTES);
        self.0[pos / 4] ^= u32::from(value) << (8 * (pos % 4));
    }

    /// XORs `bytes` into the state starting at byte `offset`.
    pub fn xor_bytes(&mut self, offset: usize, bytes: &[u8]) {
        for (i, &b) in bytes.iter().enumerate() {
            self.xor_byte(offset + i, b);
        }
    }

    /// Copies `out.len()` bytes of the state, starting at byte 0, into `out`.
    pub fn copy_to(&self, out: &mut [u8]) {
        for (pos, dst) in out.iter_mut().enumerate() {
            *dst = self.byte(pos);
        }
    }

    /// Applies multi-rate padding for a message whose last block ends at
    /// byte `pos`: `0x01` at `pos` and `0x80` at `last_rate_byte`, merged
    /// into `0x81` when the two coincide.
    pub fn pad(&mut self, pos: usize, last_rate_byte: usize) {
        if pos == last_rate_byte {
            self.xor_byte(pos, PAD_SINGLE);
        } else {
            self.xor_byte(pos, PAD_FIRST);
            self.xor_byte(last_rate_byte, PAD_LAST);
        }
    }

    /// Runs `rounds` rounds of the permutation over the lanes.
    #[inline]
    pub fn permute(&mut self, rounds: usize) {
        permutation::permute(&mut self.0, rounds);
    }
}
