//======================================================================
// src/variant.rs
// Compile-time parameter sets for the `digest` front end.
//======================================================================

use digest::consts::{U32, U64};

/// Parameters of a fixed Keccak-f[800] hash over a 256-bit rate.
pub trait Keccak32Variant: Sized + Clone + Send + Sync + 'static {
    /// Digest size of the fixed-output hash.
    type OutputSize: digest::generic_array::ArrayLength<u8> + 'static;

    /// Rounds per permutation call.
    const ROUNDS: usize;

    /// Name reported through `AlgorithmName`.
    const ALGORITHM: &'static str;
}

/// `keccak[r=256, c=544]` truncated to 256 bits.
#[derive(Clone, Debug)]
pub struct Keccak32_256;
impl Keccak32Variant for Keccak32_256 {
    type OutputSize = U32;
    const ROUNDS: usize = 22;
    const ALGORITHM: &'static str = "Keccak32-256";
}

/// `keccak[r=256, c=544]` with 512 bits of output (two squeezed blocks).
#[derive(Clone, Debug)]
pub struct Keccak32_512;
impl Keccak32Variant for Keccak32_512 {
    type OutputSize = U64;
    const ROUNDS: usize = 22;
    const ALGORITHM: &'static str = "Keccak32-512";
}
