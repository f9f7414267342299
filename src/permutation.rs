//======================================================================
// src/permutation.rs
// Keccak-f[800] round function over 25 x 32-bit lanes.
//======================================================================

use crate::consts::{PERMUTE, RC, ROTATION, STATE_LANES};

/// Applies one round with round constant `rc`.
///
/// Theta, rho and pi are fused into a single pass over the lanes, followed by
/// chi on each row and iota on lane 0.
#[inline(always)]
pub fn round(state: &mut [u32; STATE_LANES], rc: u32) {
    // theta: column parities and the diffusion term
    let mut c = [0u32; 5];
    for x in 0..5 {
        c[x] = state[x] ^ state[x + 5] ^ state[x + 10] ^ state[x + 15] ^ state[x + 20];
    }
    let mut d = [0u32; 5];
    for x in 0..5 {
        d[x] = c[(x + 4) % 5] ^ c[(x + 1) % 5].rotate_left(1);
    }

    // theta + rho + pi
    let mut next = [0u32; STATE_LANES];
    for i in 0..STATE_LANES {
        next[PERMUTE[i]] = (state[i] ^ d[i % 5]).rotate_left(ROTATION[i]);
    }

    // chi
    for y in (0..STATE_LANES).step_by(5) {
        for x in 0..5 {
            state[y + x] = next[y + x] ^ (!next[y + (x + 1) % 5] & next[y + (x + 2) % 5]);
        }
    }

    // iota
    state[0] ^= rc;
}

/// Applies `rounds` rounds, using round constants from the start of the table.
///
/// `rounds` must be at most [`MAX_ROUNDS`](crate::consts::MAX_ROUNDS).
#[inline]
pub fn permute(state: &mut [u32; STATE_LANES], rounds: usize) {
    debug_assert!(rounds <= RC.len(), "{rounds} rounds requested, table has {}", RC.len());
    for &rc in RC.iter().take(rounds) {
        round(state, rc);
    }
}

/// The full 22-round Keccak-f[800] permutation.
#[inline]
pub fn f800(state: &mut [u32; STATE_LANES]) {
    permute(state, RC.len());
}
