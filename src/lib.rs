#![cfg_attr(docsrs, feature(doc_cfg))]
#![doc = include_str!("../README.md")]

//======================================================================
// src/lib.rs
// Crate entry point. Declares the public API and wires the modules.
//======================================================================

// --- Module declarations ---
pub mod consts;
pub mod error;
pub mod hasher;
pub mod oneshot;
pub mod params;
pub mod permutation;
pub mod selftest;
pub mod sponge;
pub mod state;
pub mod variant;

use crate::variant::{Keccak32_256, Keccak32_512};

// --- Test Module ---
#[cfg(test)]
mod tests;

// --- Re-exports ---
pub use digest;

pub use error::{Error, Result};
pub use oneshot::{hash, keccak32, keccak32_utf16, to_hex};
pub use params::SpongeParams;
pub use selftest::self_test;
pub use sponge::{Phase, Sponge};
pub use state::LaneState;

// -- digest front end aliases --
pub type Keccak32_256Hasher = hasher::Keccak32Hasher<Keccak32_256>;
pub type Keccak32_256XofReader = hasher::Keccak32XofReader<Keccak32_256>;
pub type Keccak32_256Hash = hasher::Keccak32Hash<Keccak32_256>;
pub type Keccak32_512Hash = hasher::Keccak32Hash<Keccak32_512>;

// -- keccak[r=256, c=544] names --
pub type Keccak256r544 = Keccak32_256Hash;
pub type Keccak256r544Xof = Keccak32_256Hasher;
