//======================================================================
// src/hasher.rs
// The Keccak-f[800] sponge behind the RustCrypto `digest` traits:
// Keccak32Core holds the low-level logic, CoreWrapper supplies the
// buffering and the Update / ExtendableOutput / Digest front end.
//======================================================================

use crate::consts::RATE_BYTES;
use crate::state::LaneState;
use crate::variant::Keccak32Variant;
use core::{fmt, marker::PhantomData};
use digest::{
    block_buffer::Eager,
    core_api::{
        AlgorithmName, Block, BlockSizeUser, Buffer, BufferKindUser, CoreWrapper,
        ExtendableOutputCore, FixedOutputCore, OutputSizeUser, UpdateCore, XofReaderCore,
        XofReaderCoreWrapper,
    },
    HashMarker, Output, Reset,
};
use zeroize::ZeroizeOnDrop;

const LAST_RATE_BYTE: usize = RATE_BYTES - 1;

//======================================================================
// Keccak32Core - absorbing
//======================================================================

/// Low-level absorbing core over a 256-bit rate.
///
/// Use it through [`Keccak32Hasher`] or [`Keccak32Hash`].
#[derive(Clone)]
pub struct Keccak32Core<V: Keccak32Variant> {
    state: LaneState,
    _variant: PhantomData<V>,
}

impl<V: Keccak32Variant> Keccak32Core<V> {
    fn absorb_block(&mut self, block: &[u8]) {
        self.state.xor_bytes(0, block);
        self.state.permute(V::ROUNDS);
    }
}

impl<V: Keccak32Variant> Default for Keccak32Core<V> {
    fn default() -> Self {
        Self {
            state: LaneState::new(),
            _variant: PhantomData,
        }
    }
}

impl<V: Keccak32Variant> BlockSizeUser for Keccak32Core<V> {
    type BlockSize = digest::consts::U32;
}

impl<V: Keccak32Variant> BufferKindUser for Keccak32Core<V> {
    // Full blocks are absorbed immediately, so a message that ends on a block
    // boundary leaves an empty buffer and gets a padding-only block.
    type BufferKind = Eager;
}

impl<V: Keccak32Variant> UpdateCore for Keccak32Core<V> {
    #[inline]
    fn update_blocks(&mut self, blocks: &[Block<Self>]) {
        for block in blocks {
            self.absorb_block(block);
        }
    }
}

impl<V: Keccak32Variant> ExtendableOutputCore for Keccak32Core<V> {
    type ReaderCore = Reader<V>;

    #[inline]
    fn finalize_xof_core(&mut self, buffer: &mut Buffer<Self>) -> Self::ReaderCore {
        let tail = buffer.get_data();
        self.state.xor_bytes(0, tail);
        self.state.pad(tail.len(), LAST_RATE_BYTE);
        self.state.permute(V::ROUNDS);

        Reader {
            state: self.state.clone(),
            _variant: PhantomData,
        }
    }
}

impl<V: Keccak32Variant> Reset for Keccak32Core<V> {
    fn reset(&mut self) {
        *self = Self::default();
    }
}

impl<V: Keccak32Variant> HashMarker for Keccak32Core<V> {}

impl<V: Keccak32Variant> AlgorithmName for Keccak32Core<V> {
    fn write_alg_name(f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(V::ALGORITHM)
    }
}

impl<V: Keccak32Variant> fmt::Debug for Keccak32Core<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Keccak32Core { ... }")
    }
}

// LaneState zeroizes itself on drop.
impl<V: Keccak32Variant> ZeroizeOnDrop for Keccak32Core<V> {}

//======================================================================
// Reader - squeezing
//======================================================================

/// XOF reader. Each block is the rate of the current state, followed by a
/// permutation, so the first block is the plain 256-bit digest.
#[derive(Clone)]
pub struct Reader<V: Keccak32Variant> {
    state: LaneState,
    _variant: PhantomData<V>,
}

impl<V: Keccak32Variant> BlockSizeUser for Reader<V> {
    type BlockSize = digest::consts::U32;
}

impl<V: Keccak32Variant> XofReaderCore for Reader<V> {
    #[inline]
    fn read_block(&mut self) -> Block<Self> {
        let mut block = Block::<Self>::default();
        self.state.copy_to(&mut block);
        self.state.permute(V::ROUNDS);
        block
    }
}

impl<V: Keccak32Variant> ZeroizeOnDrop for Reader<V> {}

//======================================================================
// Fixed-size output
//======================================================================

/// Wraps [`Keccak32Core`] to give it a fixed `V::OutputSize` digest.
#[derive(Clone)]
pub struct Keccak32FixedCore<V: Keccak32Variant>(Keccak32Core<V>);

impl<V: Keccak32Variant> Default for Keccak32FixedCore<V> {
    fn default() -> Self {
        Self(Keccak32Core::default())
    }
}

impl<V: Keccak32Variant> BlockSizeUser for Keccak32FixedCore<V> {
    type BlockSize = <Keccak32Core<V> as BlockSizeUser>::BlockSize;
}

impl<V: Keccak32Variant> BufferKindUser for Keccak32FixedCore<V> {
    type BufferKind = <Keccak32Core<V> as BufferKindUser>::BufferKind;
}

impl<V: Keccak32Variant> UpdateCore for Keccak32FixedCore<V> {
    #[inline]
    fn update_blocks(&mut self, blocks: &[Block<Self>]) {
        self.0.update_blocks(blocks);
    }
}

impl<V: Keccak32Variant> OutputSizeUser for Keccak32FixedCore<V> {
    type OutputSize = V::OutputSize;
}

impl<V: Keccak32Variant> FixedOutputCore for Keccak32FixedCore<V> {
    #[inline]
    fn finalize_fixed_core(&mut self, buffer: &mut Buffer<Self>, out: &mut Output<Self>) {
        let mut reader = self.0.finalize_xof_core(buffer);
        for chunk in out.chunks_mut(RATE_BYTES) {
            let block = reader.read_block();
            chunk.copy_from_slice(&block[..chunk.len()]);
        }
    }
}

impl<V: Keccak32Variant> Reset for Keccak32FixedCore<V> {
    fn reset(&mut self) {
        self.0.reset();
    }
}

impl<V: Keccak32Variant> HashMarker for Keccak32FixedCore<V> {}

impl<V: Keccak32Variant> AlgorithmName for Keccak32FixedCore<V> {
    fn write_alg_name(f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(V::ALGORITHM)
    }
}

impl<V: Keccak32Variant> fmt::Debug for Keccak32FixedCore<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Keccak32FixedCore { ... }")
    }
}

impl<V: Keccak32Variant> ZeroizeOnDrop for Keccak32FixedCore<V> {}

//======================================================================
// High-level aliases
//======================================================================

/// Incremental hasher with extendable output (`Update` + `ExtendableOutput`).
pub type Keccak32Hasher<V> = CoreWrapper<Keccak32Core<V>>;

/// Fixed-output hash implementing [`digest::Digest`].
pub type Keccak32Hash<V> = CoreWrapper<Keccak32FixedCore<V>>;

/// Reader returned by `finalize_xof` on a [`Keccak32Hasher`].
pub type Keccak32XofReader<V> = XofReaderCoreWrapper<Reader<V>>;
