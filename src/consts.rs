//======================================================================
// src/consts.rs
// Fixed tables and sizes of the Keccak-f[800] permutation and sponge.
//======================================================================

/// Number of 32-bit lanes in the state (5 x 5).
pub const STATE_LANES: usize = 25;

/// The internal state size in bytes.
pub const STATE_BYTES: usize = STATE_LANES * 4;

/// Permutation width in bits. Rate plus capacity must add up to this.
pub const WIDTH_BITS: usize = STATE_BYTES * 8;

/// Rate of the validated `keccak[r=256, c=544]` configuration, in bytes.
pub const RATE_BYTES: usize = 32;

/// Default parameters: 256-bit rate, 544-bit capacity, 22 rounds.
pub const DEFAULT_RATE: usize = RATE_BYTES * 8;
pub const DEFAULT_CAPACITY: usize = WIDTH_BITS - DEFAULT_RATE;
pub const DEFAULT_ROUNDS: usize = 22;

/// Multi-rate padding: domain byte at the first free position.
pub const PAD_FIRST: u8 = 0x01;
/// Multi-rate padding: end marker at the last rate byte.
pub const PAD_LAST: u8 = 0x80;
/// Both markers when a single padding byte is left in the block.
pub const PAD_SINGLE: u8 = PAD_FIRST | PAD_LAST;

/// Round constants (iota), low 32 bits of the Keccak-f[1600] constants.
pub const RC: [u32; 22] = [
    0x0000_0001, 0x0000_8082, 0x0000_808a, 0x8000_8000,
    0x0000_808b, 0x8000_0001, 0x8000_8081, 0x0000_8009,
    0x0000_008a, 0x0000_0088, 0x8000_8009, 0x8000_000a,
    0x8000_808b, 0x0000_008b, 0x0000_8089, 0x0000_8003,
    0x0000_8002, 0x0000_0080, 0x0000_800a, 0x8000_000a,
    0x8000_8081, 0x0000_8080,
];

/// Maximum number of rounds: one per round constant.
pub const MAX_ROUNDS: usize = RC.len();

/// Rho rotation offsets (mod 32) indexed by lane `y*5 + x`.
pub const ROTATION: [u32; STATE_LANES] = [
    0, 1, 30, 28, 27, 4, 12, 6, 23, 20, 3, 10, 11, 25, 7, 9, 13, 15, 21, 8, 18, 2, 29, 24, 14,
];

/// Pi lane relocation: lane `i` moves to `PERMUTE[i]`.
pub const PERMUTE: [usize; STATE_LANES] = [
    0, 10, 20, 5, 15, 16, 1, 11, 21, 6, 7, 17, 2, 12, 22, 23, 8, 18, 3, 13, 14, 24, 9, 19, 4,
];
