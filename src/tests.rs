//======================================================================
// keccak32 Crate Test Suite
//======================================================================
#![cfg(test)]

use crate::selftest::{KNOWN_ANSWERS, MSG_2000};
use crate::{
    hash, keccak32, to_hex, Error, Keccak256r544, Keccak256r544Xof, Keccak32_256Hash,
    Keccak32_256Hasher, Phase, Sponge, SpongeParams,
};
use digest::{Digest, ExtendableOutput, Update, XofReader};
use hex_literal::hex;
use rand_chacha::ChaCha8Rng;
use rand_core::{RngCore, SeedableRng};

fn init_logger() {
    let _ = env_logger::builder().is_test(true).try_init();
}

fn random_message(rng: &mut ChaCha8Rng, max_len: usize) -> Vec<u8> {
    let len = (rng.next_u32() as usize) % (max_len + 1);
    let mut msg = vec![0u8; len];
    rng.fill_bytes(&mut msg);
    msg
}

//======================================================================
// Known answers (ShortMsgKAT_r256c544)
//======================================================================

#[test]
fn known_answers_through_one_reused_sponge() {
    init_logger();
    let mut sponge = Sponge::new(256, 544, 22).unwrap();
    for kat in KNOWN_ANSWERS.iter() {
        sponge.reset();
        let digest = sponge.absorb(kat.message, 32).unwrap();
        assert_eq!(to_hex(&digest), kat.digest, "{}", kat.name);
    }
}

#[test]
fn squeezed_stream_matches_kat_file() {
    let cases: [(&[u8], [u8; 64]); 3] = [
        (
            &[],
            hex!(
                "2507dc4976767add735f22c1831fbf323cb9f94755c289a680b327adff881fcd"
                "5d9b3816314c55ab80881001b833c5bd02e8ac5359b07c27acdfbb64abe87384"
            ),
        ),
        (
            &[0x41, 0xfb],
            hex!(
                "dccdef818ceefe1cb20af60aafbf836d889462ac1a1bceb756648b6b5cae991b"
                "2c7c8976ba791cb69e8254adae50fd7a0f0aadb2546a45c55f7824ebd4a48998"
            ),
        ),
        (
            &MSG_2000,
            hex!(
                "558003de96acaba616a73027dfe205c8d011a90f9e12a0751e86dd1a3f115695"
                "20b1faf0455343937697693b6095de0646111b4865eb2587eaba56a25459045a"
            ),
        ),
    ];

    for (msg, expected) in cases.iter() {
        let mut sponge = Sponge::default();
        sponge.absorb(msg, 0).unwrap();
        let mut out = [0u8; 64];
        sponge.squeeze(&mut out).unwrap();
        assert_eq!(&out, expected);
    }
}

#[test]
fn one_shot_string_hash_matches_byte_api() {
    assert_eq!(keccak32(""), KNOWN_ANSWERS[0].digest);
    assert_eq!(keccak32("\u{fb41}"), KNOWN_ANSWERS[1].digest);

    // ASCII text is the byte API over its UTF-16LE encoding
    let utf16le: Vec<u8> = "abc".encode_utf16().flat_map(|u| u.to_le_bytes()).collect();
    assert_eq!(utf16le, b"a\0b\0c\0");
    assert_eq!(keccak32("abc"), to_hex(&hash(&utf16le)));
}

//======================================================================
// Sponge properties
//======================================================================

#[test]
fn hashing_is_deterministic_across_resets() {
    let mut rng = ChaCha8Rng::from_seed([7; 32]);
    let mut sponge = Sponge::default();
    for _ in 0..32 {
        let msg = random_message(&mut rng, 200);
        sponge.reset();
        let first = sponge.absorb(&msg, 32).unwrap();
        sponge.reset();
        let second = sponge.absorb(&msg, 32).unwrap();
        assert_eq!(first, second);
    }
}

#[test]
fn reset_matches_a_fresh_instance() {
    let mut used = Sponge::default();
    used.update(b"something unrelated, long enough to cross a block boundary")
        .unwrap();
    used.reset();

    let mut fresh = Sponge::default();
    assert_eq!(used.state(), fresh.state());
    assert_eq!(
        used.absorb(&MSG_2000, 32).unwrap(),
        fresh.absorb(&MSG_2000, 32).unwrap()
    );

    // reset in the middle of squeezing too
    used.squeeze_vec(100).unwrap();
    used.reset();
    assert_eq!(used.phase(), Phase::Fresh);
    assert_eq!(to_hex(&used.absorb(&[], 32).unwrap()), KNOWN_ANSWERS[0].digest);
}

#[test]
fn padding_boundaries_give_distinct_digests() {
    let digests: Vec<[u8; 32]> = [30usize, 31, 32, 33, 63, 64, 65]
        .iter()
        .map(|&len| hash(&vec![0u8; len]))
        .collect();

    for (i, a) in digests.iter().enumerate() {
        for b in digests.iter().skip(i + 1) {
            assert_ne!(a, b);
        }
    }
}

#[test]
fn trailing_padding_bytes_are_not_confused_with_padding() {
    // a message ending in the padding pattern must not collide with the
    // shorter message it would pad to
    assert_ne!(hash(&[]), hash(&[0x01]));
    let mut spelled_out = vec![0u8; 32];
    spelled_out[0] = 0x01;
    spelled_out[31] = 0x80;
    assert_ne!(hash(&[]), hash(&spelled_out));
    assert_ne!(hash(&[0u8; 31]), hash(&[0u8; 32]));
}

#[test]
fn split_squeezes_equal_one_long_squeeze() {
    let mut a = Sponge::default();
    let mut b = Sponge::default();
    a.absorb(b"stream", 0).unwrap();
    b.absorb(b"stream", 0).unwrap();

    let mut whole = [0u8; 64];
    a.squeeze(&mut whole).unwrap();

    let mut first = [0u8; 32];
    let mut second = [0u8; 32];
    b.squeeze(&mut first).unwrap();
    b.squeeze(&mut second).unwrap();

    assert_eq!(whole[..32], first);
    assert_eq!(whole[32..], second);
    assert_ne!(first, second);
}

#[test]
fn absorb_output_is_the_first_squeezed_block() {
    let mut sponge = Sponge::default();
    let digest = sponge.absorb(b"abc", 32).unwrap();
    let mut again = [0u8; 32];
    sponge.squeeze(&mut again).unwrap();
    assert_eq!(digest, again);

    // a short read still advances by a whole block
    let mut short = [0u8; 5];
    sponge.squeeze(&mut short).unwrap();
    let mut next = [0u8; 32];
    sponge.squeeze(&mut next).unwrap();

    let mut reference = Sponge::default();
    reference.absorb(b"abc", 0).unwrap();
    let stream = reference.squeeze_vec(96).unwrap();
    assert_eq!(short, stream[32..37]);
    assert_eq!(next, stream[64..96]);
}

#[test]
fn update_then_absorb_equals_single_absorb() {
    let mut rng = ChaCha8Rng::from_seed([11; 32]);
    for _ in 0..32 {
        let msg = random_message(&mut rng, 150);
        let cut = if msg.is_empty() {
            0
        } else {
            (rng.next_u32() as usize) % msg.len()
        };

        let mut whole = Sponge::default();
        let expected = whole.absorb(&msg, 32).unwrap();

        let mut split = Sponge::default();
        for piece in msg[..cut].chunks(13) {
            split.update(piece).unwrap();
        }
        assert_eq!(split.absorb(&msg[cut..], 32).unwrap(), expected);

        let mut finalized = Sponge::default();
        finalized.update(&msg).unwrap();
        finalized.finalize().unwrap();
        assert_eq!(finalized.squeeze_vec(32).unwrap(), expected);
    }
}

//======================================================================
// Other parameter sets
//======================================================================

#[test]
fn other_rates_follow_the_same_contract() {
    let mut rng = ChaCha8Rng::from_seed([3; 32]);
    for &(rate, capacity, rounds) in &[(544, 256, 22), (8, 792, 22), (800, 0, 12), (256, 544, 1)] {
        let params = SpongeParams::new(rate, capacity, rounds);
        let mut sponge = Sponge::with_params(params).unwrap();
        assert_eq!(sponge.params(), params);
        assert_eq!(sponge.rate_bytes(), rate / 8);

        let msg = random_message(&mut rng, 300);
        let digest = sponge.absorb(&msg, rate / 8).unwrap();
        assert_eq!(digest.len(), rate / 8);

        let mut stream = vec![0u8; 3 * rate / 8];
        sponge.squeeze(&mut stream).unwrap();
        assert_eq!(stream[..rate / 8], digest[..]);

        let mut split = Sponge::with_params(params).unwrap();
        for piece in msg.chunks(7) {
            split.update(piece).unwrap();
        }
        assert_eq!(split.absorb(&[], rate / 8).unwrap(), digest);
    }
}

#[test]
fn fewer_rounds_give_a_different_hash() {
    let mut full = Sponge::new(256, 544, 22).unwrap();
    let mut reduced = Sponge::new(256, 544, 12).unwrap();
    assert_ne!(
        full.absorb(b"rounds", 32).unwrap(),
        reduced.absorb(b"rounds", 32).unwrap()
    );
}

#[test]
fn invalid_configurations_are_rejected() {
    assert_eq!(
        Sponge::new(256, 512, 22).unwrap_err(),
        Error::InvalidWidth { rate: 256, capacity: 512 }
    );
    assert_eq!(Sponge::new(0, 800, 22).unwrap_err(), Error::ZeroRate);
    assert_eq!(
        Sponge::new(260, 540, 22).unwrap_err(),
        Error::UnalignedRate { rate: 260 }
    );
    assert_eq!(
        Sponge::new(256, 544, 40).unwrap_err(),
        Error::InvalidRounds { rounds: 40, max: 22 }
    );
}

#[test]
fn error_messages_name_the_problem() {
    let err = Sponge::new(256, 512, 22).unwrap_err();
    assert_eq!(err.to_string(), "rate (256) + capacity (512) must equal 800 bits");
    assert_eq!(
        Error::AbsorbAfterSqueeze.to_string(),
        "cannot absorb after squeezing; reset the sponge first"
    );
}

//======================================================================
// digest front end
//======================================================================

#[test]
fn digest_front_end_matches_sponge() {
    let mut rng = ChaCha8Rng::from_seed([42; 32]);
    for _ in 0..32 {
        let msg = random_message(&mut rng, 130);

        let mut sponge = Sponge::default();
        sponge.absorb(&msg, 0).unwrap();
        let expected = sponge.squeeze_vec(80).unwrap();

        let fixed = Keccak32_256Hash::digest(&msg);
        assert_eq!(fixed[..], expected[..32]);

        let mut hasher = Keccak32_256Hasher::default();
        for piece in msg.chunks(9) {
            Update::update(&mut hasher, piece);
        }
        let mut reader = hasher.finalize_xof();
        let mut out = [0u8; 80];
        reader.read(&mut out[..10]);
        reader.read(&mut out[10..]);
        assert_eq!(out[..], expected[..]);
    }
}

#[test]
fn r256c544_aliases_hash_the_kat_vectors() {
    for kat in KNOWN_ANSWERS.iter() {
        let digest = Keccak256r544::digest(kat.message);
        assert_eq!(to_hex(&digest), kat.digest, "{}", kat.name);

        let mut xof = Keccak256r544Xof::default();
        Update::update(&mut xof, kat.message);
        let mut out = [0u8; 32];
        xof.finalize_xof().read(&mut out);
        assert_eq!(out[..], digest[..]);
    }
}
