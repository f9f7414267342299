//======================================================================
// src/oneshot.rs
// One-shot helpers over the default keccak[r=256, c=544] sponge.
//======================================================================

use crate::consts::RATE_BYTES;
use crate::sponge::Sponge;

/// Lowercase hex of a digest.
pub fn to_hex(bytes: &[u8]) -> String {
    hex::encode(bytes)
}

/// 256-bit digest of `message` with 22 rounds.
pub fn hash(message: &[u8]) -> [u8; RATE_BYTES] {
    let mut sponge = Sponge::default();
    let mut out = [0u8; RATE_BYTES];
    sponge.absorb_into(message, &mut out);
    out
}

/// Hex digest of UTF-16 code units, each serialised little-endian.
///
/// Unpaired surrogates are hashed as-is, which `&str` cannot express.
pub fn keccak32_utf16(units: &[u16]) -> String {
    let bytes: Vec<u8> = units.iter().flat_map(|u| u.to_le_bytes()).collect();
    to_hex(&hash(&bytes))
}

/// Hex digest of `text` taken as UTF-16LE.
///
/// ```
/// assert_eq!(
///     keccak32::keccak32("\u{fb41}"),
///     "dccdef818ceefe1cb20af60aafbf836d889462ac1a1bceb756648b6b5cae991b"
/// );
/// ```
pub fn keccak32(text: &str) -> String {
    let units: Vec<u16> = text.encode_utf16().collect();
    keccak32_utf16(&units)
}
