//! Streaming digest computation
//!
//! [`HashEngine`] owns a [`BlockAccumulator`] and drives a [`HashCore`]: the
//! core supplies the per-block compression function and the padding /
//! length-strengthening rule, the engine supplies the shared streaming
//! contract. `update` eagerly compresses every whole block; `finalize`
//! consumes the engine, so a drained engine cannot be finalized twice.

use wordcrypt_common::{BlockAccumulator, Encoding, WordBuffer};

pub mod md5;
pub mod ripemd160;
pub mod sha1;
pub mod sha2;
pub mod sha3;

pub use md5::Md5Core;
pub use ripemd160::Ripemd160Core;
pub use sha1::Sha1Core;
pub use sha2::{Sha224Core, Sha256Core, Sha384Core, Sha512Core};
pub use sha3::Sha3Core;

/// Per-algorithm compression and finalization rule.
///
/// A core carries only the running hash state. Buffering, byte counting and
/// block release belong to the engine's accumulator.
pub trait HashCore: Clone {
    /// Human-readable algorithm name.
    const ALGORITHM_ID: &'static str;

    /// Words per compression block. A method, not a constant: SHA-3's rate
    /// depends on the configured output width.
    fn block_words(&self) -> usize;

    /// Restores the initial hash state.
    fn reset(&mut self);

    /// Compresses one block at `offset` words into `words`.
    fn process_block(&mut self, words: &[u32], offset: usize);

    /// Applies the algorithm's padding to the accumulator's residue, drains
    /// every remaining block, and returns the digest.
    fn finalize(&mut self, acc: &mut BlockAccumulator) -> WordBuffer;
}

/// Generic streaming hash engine.
#[derive(Clone, Debug)]
pub struct HashEngine<C: HashCore> {
    core: C,
    acc: BlockAccumulator,
}

impl<C: HashCore + Default> HashEngine<C> {
    /// Creates an engine with the core's default configuration.
    pub fn new() -> Self {
        Self::with_core(C::default())
    }

    /// One-shot digest of a buffer.
    pub fn digest(data: &WordBuffer) -> WordBuffer {
        let mut engine = Self::new();
        engine.update(data);
        engine.finalize()
    }

    /// One-shot digest of a UTF-8 string.
    pub fn digest_str(message: &str) -> WordBuffer {
        let mut engine = Self::new();
        engine.update_str(message);
        engine.finalize()
    }
}

impl<C: HashCore + Default> Default for HashEngine<C> {
    fn default() -> Self {
        Self::new()
    }
}

impl<C: HashCore> HashEngine<C> {
    /// Creates an engine around an explicitly configured core.
    pub fn with_core(core: C) -> Self {
        let block_words = core.block_words();
        HashEngine {
            core,
            acc: BlockAccumulator::new(block_words),
        }
    }

    /// Restores the initial state so the engine can hash a new message.
    pub fn reset(&mut self) {
        self.core.reset();
        self.acc.reset();
    }

    /// Appends data and eagerly compresses all whole blocks.
    pub fn update(&mut self, data: &WordBuffer) -> &mut Self {
        self.acc.append(data);
        let core = &mut self.core;
        self.acc.process(false, |words, offset| {
            core.process_block(words, offset);
        });
        self
    }

    /// Appends a UTF-8 string.
    pub fn update_str(&mut self, message: &str) -> &mut Self {
        // Infallible: &str is valid UTF-8 by construction.
        let data = Encoding::Utf8.parse(message).expect("utf-8 parse of str");
        self.update(&data)
    }

    /// Pads, drains the remaining blocks, and returns the digest.
    ///
    /// Consumes the engine: finalization is single-use by construction.
    pub fn finalize(mut self) -> WordBuffer {
        self.finalize_in_place()
    }

    /// Finalizes and returns the digest of trailing data plus everything
    /// previously fed through [`update`](Self::update).
    pub fn finalize_with(mut self, data: &WordBuffer) -> WordBuffer {
        self.update(data);
        self.finalize_in_place()
    }

    /// In-place finalization for callers that re-prime the engine afterward
    /// (HMAC reuses its inner engine across messages).
    pub(crate) fn finalize_in_place(&mut self) -> WordBuffer {
        self.core.finalize(&mut self.acc)
    }
}

/// MD5 engine (RFC 1321).
pub type Md5 = HashEngine<Md5Core>;
/// SHA-1 engine (FIPS 180-4).
pub type Sha1 = HashEngine<Sha1Core>;
/// SHA-224 engine (FIPS 180-4).
pub type Sha224 = HashEngine<Sha224Core>;
/// SHA-256 engine (FIPS 180-4).
pub type Sha256 = HashEngine<Sha256Core>;
/// SHA-384 engine (FIPS 180-4).
pub type Sha384 = HashEngine<Sha384Core>;
/// SHA-512 engine (FIPS 180-4).
pub type Sha512 = HashEngine<Sha512Core>;
/// SHA-3 engine (FIPS 202), default 512-bit output width.
pub type Sha3 = HashEngine<Sha3Core>;
/// RIPEMD-160 engine.
pub type Ripemd160 = HashEngine<Ripemd160Core>;
