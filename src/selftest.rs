//======================================================================
// src/selftest.rs
// Known-answer vectors for keccak[r=256, c=544] and the startup self test.
//======================================================================

use crate::error::{Error, Result};
use crate::oneshot::to_hex;
use crate::sponge::Sponge;
use log::{error, info};

/// A message and the first 32 bytes squeezed from it, from
/// `ShortMsgKAT_r256c544.txt` on the Keccak NIST CD.
#[derive(Debug, Clone, Copy)]
pub struct KnownAnswer {
    pub name: &'static str,
    pub message: &'static [u8],
    pub digest: &'static str,
}

/// `Len = 2000` message.
pub const MSG_2000: [u8; 250] = [
    0xb3, 0xc5, 0xe7, 0x4b, 0x69, 0x93, 0x3c, 0x25, 0x33, 0x10, 0x6c, 0x56,
    0x3b, 0x4c, 0xa2, 0x02, 0x38, 0xf2, 0xb6, 0xe6, 0x75, 0xe8, 0x68, 0x1e,
    0x34, 0xa3, 0x89, 0x89, 0x47, 0x85, 0xbd, 0xad, 0xe5, 0x96, 0x52, 0xd4,
    0xa7, 0x3d, 0x80, 0xa5, 0xc8, 0x5b, 0xd4, 0x54, 0xfd, 0x1e, 0x9f, 0xfd,
    0xad, 0x1c, 0x38, 0x15, 0xf5, 0x03, 0x8e, 0x9e, 0xf4, 0x32, 0xaa, 0xc5,
    0xc3, 0xc4, 0xfe, 0x84, 0x0c, 0xc3, 0x70, 0xcf, 0x86, 0x58, 0x0a, 0x60,
    0x11, 0x77, 0x8b, 0xbe, 0xda, 0xf5, 0x11, 0xa5, 0x1b, 0x56, 0xd1, 0xa2,
    0xeb, 0x68, 0x39, 0x4a, 0xa2, 0x99, 0xe2, 0x6d, 0xa9, 0xad, 0xa6, 0xa2,
    0xf3, 0x9b, 0x9f, 0xaf, 0xf7, 0xfb, 0xa4, 0x57, 0x68, 0x9b, 0x9c, 0x1a,
    0x57, 0x7b, 0x2a, 0x1e, 0x50, 0x5f, 0xdf, 0x75, 0xc7, 0xa0, 0xa6, 0x4b,
    0x1d, 0xf8, 0x1b, 0x3a, 0x35, 0x60, 0x01, 0xbf, 0x0d, 0xf4, 0xe0, 0x2a,
    0x1f, 0xc5, 0x9f, 0x65, 0x1c, 0x9d, 0x58, 0x5e, 0xc6, 0x22, 0x4b, 0xb2,
    0x79, 0xc6, 0xbe, 0xba, 0x29, 0x66, 0xe8, 0x88, 0x2d, 0x68, 0x37, 0x60,
    0x81, 0xb9, 0x87, 0x46, 0x8e, 0x7a, 0xed, 0x1e, 0xf9, 0x0e, 0xbd, 0x09,
    0x0a, 0xe8, 0x25, 0x79, 0x5c, 0xdc, 0xa1, 0xb4, 0xf0, 0x9a, 0x97, 0x9c,
    0x8d, 0xfc, 0x21, 0xa4, 0x8d, 0x8a, 0x53, 0xcd, 0xbb, 0x26, 0xc4, 0xdb,
    0x54, 0x7f, 0xc0, 0x6e, 0xfe, 0x2f, 0x98, 0x50, 0xed, 0xd2, 0x68, 0x5a,
    0x46, 0x61, 0xcb, 0x49, 0x11, 0xf1, 0x65, 0xd4, 0xb6, 0x3e, 0xf2, 0x5b,
    0x87, 0xd0, 0xa9, 0x6d, 0x3d, 0xff, 0x6a, 0xb0, 0x75, 0x89, 0x99, 0xaa,
    0xd2, 0x14, 0xd0, 0x7b, 0xd4, 0xf1, 0x33, 0xa6, 0x73, 0x4f, 0xde, 0x44,
    0x5f, 0xe4, 0x74, 0x71, 0x1b, 0x69, 0xa9, 0x8f, 0x7e, 0x2b,
];

pub const KNOWN_ANSWERS: [KnownAnswer; 3] = [
    KnownAnswer {
        name: "len0",
        message: &[],
        digest: "2507dc4976767add735f22c1831fbf323cb9f94755c289a680b327adff881fcd",
    },
    KnownAnswer {
        name: "len16",
        message: &[0x41, 0xfb],
        digest: "dccdef818ceefe1cb20af60aafbf836d889462ac1a1bceb756648b6b5cae991b",
    },
    KnownAnswer {
        name: "len2000",
        message: &MSG_2000,
        digest: "558003de96acaba616a73027dfe205c8d011a90f9e12a0751e86dd1a3f115695",
    },
];

/// Hashes every known-answer message with one reused sponge and compares the
/// digests. Call it at startup; a failure means the build is broken and
/// should not be used.
pub fn self_test() -> Result<()> {
    let mut sponge = Sponge::default();
    for kat in KNOWN_ANSWERS.iter() {
        sponge.reset();
        let actual = to_hex(&sponge.absorb(kat.message, 32)?);
        if actual != kat.digest {
            error!("keccak32 self test {} failed: got {}", kat.name, actual);
            return Err(Error::SelfTest {
                name: kat.name,
                expected: kat.digest.to_owned(),
                actual,
            });
        }
    }
    info!("keccak32 self test passed ({} vectors)", KNOWN_ANSWERS.len());
    Ok(())
}
