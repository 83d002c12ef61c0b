//! Streaming cipher engines
//!
//! [`BlockCipherEngine`] and [`StreamCipherEngine`] wrap a primitive in the
//! shared accumulator-driven streaming contract, and [`CipherFactory`] is
//! the seam the high-level serialization crate builds on: each algorithm
//! type advertises its key and IV geometry and constructs a ready engine
//! from a key plus a [`CipherConfig`].

use wordcrypt_common::{BlockAccumulator, Result, WordBuffer};

use crate::block::modes::{CipherMode, ModeRunner};
use crate::block::padding::Padding;
use crate::block::{Aes, BlockCipher, Des, TripleDes};
use crate::stream::rc4::DEFAULT_DROP_WORDS;
use crate::stream::{Rabbit, RabbitLegacy, Rc4, Rc4Drop, StreamCipher};

/// Whether an engine transforms plaintext into ciphertext or back.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Direction {
    /// Plaintext in, ciphertext out.
    Encrypt,
    /// Ciphertext in, plaintext out.
    Decrypt,
}

/// Immutable per-message cipher configuration.
///
/// Built once with the `with_*` methods and then only read; engines clone
/// what they need at construction time.
#[derive(Clone, Debug, Default)]
pub struct CipherConfig {
    iv: Option<WordBuffer>,
    mode: CipherMode,
    padding: Padding,
    drop_words: Option<usize>,
}

impl CipherConfig {
    /// Default configuration: CBC, PKCS#7, no IV.
    pub fn new() -> Self {
        CipherConfig::default()
    }

    /// Sets the initialization vector.
    pub fn with_iv(mut self, iv: WordBuffer) -> Self {
        self.iv = Some(iv);
        self
    }

    /// Sets the chaining mode (block ciphers only).
    pub fn with_mode(mut self, mode: CipherMode) -> Self {
        self.mode = mode;
        self
    }

    /// Sets the padding scheme (block ciphers only).
    pub fn with_padding(mut self, padding: Padding) -> Self {
        self.padding = padding;
        self
    }

    /// Sets the keystream words discarded by drop-variant stream ciphers.
    pub fn with_drop_words(mut self, drop_words: usize) -> Self {
        self.drop_words = Some(drop_words);
        self
    }

    /// Configured IV, if any.
    pub fn iv(&self) -> Option<&WordBuffer> {
        self.iv.as_ref()
    }

    /// Configured chaining mode.
    pub fn mode(&self) -> CipherMode {
        self.mode
    }

    /// Configured padding scheme.
    pub fn padding(&self) -> Padding {
        self.padding
    }

    /// Configured keystream drop, if any.
    pub fn drop_words(&self) -> Option<usize> {
        self.drop_words
    }
}

/// Streaming transform shared by all cipher engines.
///
/// `process` returns whatever whole blocks are ready; `finalize` consumes
/// the engine, applies padding rules and drains the tail. Chaining state is
/// per-message, so a finished engine is gone for good.
pub trait Cipher: Sized {
    /// Appends data and returns the blocks transformed so far.
    fn process(&mut self, data: &WordBuffer) -> Result<WordBuffer>;

    /// Transforms the buffered tail and returns it.
    fn finalize(self) -> Result<WordBuffer>;

    /// Convenience: process `data`, then finalize, returning both outputs
    /// concatenated.
    fn finalize_with(mut self, data: &WordBuffer) -> Result<WordBuffer> {
        let mut out = self.process(data)?;
        out.concat(&self.finalize()?);
        Ok(out)
    }
}

/// Block cipher engine: mode chaining plus padding around a [`BlockCipher`].
pub struct BlockCipherEngine<C: BlockCipher> {
    cipher: C,
    direction: Direction,
    mode: ModeRunner,
    padding: Padding,
    acc: BlockAccumulator,
}

impl<C: BlockCipher> BlockCipherEngine<C> {
    /// Wraps `cipher` for one message in the given direction.
    pub fn new(direction: Direction, cipher: C, cfg: &CipherConfig) -> Result<Self> {
        let mode = ModeRunner::new(cfg.mode(), cfg.iv(), C::BLOCK_WORDS)?;
        // Decryption holds one block back so the padded block is still
        // buffered when finalize runs.
        let acc = match direction {
            Direction::Encrypt => BlockAccumulator::new(C::BLOCK_WORDS),
            Direction::Decrypt => BlockAccumulator::with_min_buffer(C::BLOCK_WORDS, 1),
        };
        Ok(BlockCipherEngine {
            cipher,
            direction,
            mode,
            padding: cfg.padding(),
            acc,
        })
    }

    fn drain(&mut self, flush: bool) -> WordBuffer {
        let cipher = &self.cipher;
        let mode = &mut self.mode;
        let direction = self.direction;
        self.acc.process(flush, |words, offset| {
            let block = &mut words[offset..offset + C::BLOCK_WORDS];
            match direction {
                Direction::Encrypt => mode.encrypt_block(cipher, block),
                Direction::Decrypt => mode.decrypt_block(cipher, block),
            }
        })
    }
}

impl<C: BlockCipher> Cipher for BlockCipherEngine<C> {
    fn process(&mut self, data: &WordBuffer) -> Result<WordBuffer> {
        self.acc.append(data);
        Ok(self.drain(false))
    }

    fn finalize(mut self) -> Result<WordBuffer> {
        match self.direction {
            Direction::Encrypt => {
                self.padding.pad(self.acc.data_mut(), C::BLOCK_WORDS)?;
                Ok(self.drain(true))
            }
            Direction::Decrypt => {
                let mut out = self.drain(true);
                self.padding.unpad(&mut out)?;
                Ok(out)
            }
        }
    }
}

/// Stream cipher engine: XOR keystream application over buffered blocks.
pub struct StreamCipherEngine<S: StreamCipher> {
    state: S,
    acc: BlockAccumulator,
}

impl<S: StreamCipher> StreamCipherEngine<S> {
    /// Wraps a keyed keystream generator for one message.
    pub fn new(state: S) -> Self {
        StreamCipherEngine {
            state,
            acc: BlockAccumulator::new(S::BLOCK_WORDS),
        }
    }

    fn drain(&mut self, flush: bool) -> WordBuffer {
        let state = &mut self.state;
        self.acc
            .process(flush, |words, offset| state.process_block(words, offset))
    }
}

impl<S: StreamCipher> Cipher for StreamCipherEngine<S> {
    fn process(&mut self, data: &WordBuffer) -> Result<WordBuffer> {
        self.acc.append(data);
        Ok(self.drain(false))
    }

    fn finalize(mut self) -> Result<WordBuffer> {
        Ok(self.drain(true))
    }
}

/// Construction seam between algorithm types and the serialization layer.
///
/// `KEY_WORDS` and `IV_WORDS` drive password-based key derivation; `create`
/// key-schedules the primitive and wraps it in its engine.
pub trait CipherFactory {
    /// Key length in words expected from key derivation.
    const KEY_WORDS: usize;
    /// IV length in words expected from key derivation.
    const IV_WORDS: usize;
    /// Block size in words (1 for stream ciphers).
    const BLOCK_WORDS: usize;
    /// Human-readable algorithm name.
    const ALGORITHM_ID: &'static str;
    /// Engine type produced by [`create`](Self::create).
    type Cipher: Cipher;

    /// Builds a ready-to-use engine for one message.
    fn create(direction: Direction, key: &WordBuffer, cfg: &CipherConfig) -> Result<Self::Cipher>;
}

impl CipherFactory for Aes {
    const KEY_WORDS: usize = 8;
    const IV_WORDS: usize = 4;
    const BLOCK_WORDS: usize = <Aes as BlockCipher>::BLOCK_WORDS;
    const ALGORITHM_ID: &'static str = "AES";
    type Cipher = BlockCipherEngine<Aes>;

    fn create(direction: Direction, key: &WordBuffer, cfg: &CipherConfig) -> Result<Self::Cipher> {
        BlockCipherEngine::new(direction, Aes::new(key)?, cfg)
    }
}

impl CipherFactory for Des {
    const KEY_WORDS: usize = 2;
    const IV_WORDS: usize = 2;
    const BLOCK_WORDS: usize = <Des as BlockCipher>::BLOCK_WORDS;
    const ALGORITHM_ID: &'static str = "DES";
    type Cipher = BlockCipherEngine<Des>;

    fn create(direction: Direction, key: &WordBuffer, cfg: &CipherConfig) -> Result<Self::Cipher> {
        BlockCipherEngine::new(direction, Des::new(key)?, cfg)
    }
}

impl CipherFactory for TripleDes {
    const KEY_WORDS: usize = 6;
    const IV_WORDS: usize = 2;
    const BLOCK_WORDS: usize = <TripleDes as BlockCipher>::BLOCK_WORDS;
    const ALGORITHM_ID: &'static str = "3DES";
    type Cipher = BlockCipherEngine<TripleDes>;

    fn create(direction: Direction, key: &WordBuffer, cfg: &CipherConfig) -> Result<Self::Cipher> {
        BlockCipherEngine::new(direction, TripleDes::new(key)?, cfg)
    }
}

impl CipherFactory for Rc4 {
    const KEY_WORDS: usize = 8;
    const IV_WORDS: usize = 0;
    const BLOCK_WORDS: usize = <Rc4 as StreamCipher>::BLOCK_WORDS;
    const ALGORITHM_ID: &'static str = "RC4";
    type Cipher = StreamCipherEngine<Rc4>;

    fn create(_direction: Direction, key: &WordBuffer, _cfg: &CipherConfig) -> Result<Self::Cipher> {
        Ok(StreamCipherEngine::new(Rc4::new(key)?))
    }
}

impl CipherFactory for Rc4Drop {
    const KEY_WORDS: usize = 8;
    const IV_WORDS: usize = 0;
    const BLOCK_WORDS: usize = <Rc4Drop as StreamCipher>::BLOCK_WORDS;
    const ALGORITHM_ID: &'static str = "RC4-drop";
    type Cipher = StreamCipherEngine<Rc4Drop>;

    fn create(_direction: Direction, key: &WordBuffer, cfg: &CipherConfig) -> Result<Self::Cipher> {
        let drop_words = cfg.drop_words().unwrap_or(DEFAULT_DROP_WORDS);
        Ok(StreamCipherEngine::new(Rc4Drop::with_drop_words(
            key, drop_words,
        )?))
    }
}

impl CipherFactory for Rabbit {
    const KEY_WORDS: usize = 4;
    const IV_WORDS: usize = 2;
    const BLOCK_WORDS: usize = <Rabbit as StreamCipher>::BLOCK_WORDS;
    const ALGORITHM_ID: &'static str = "Rabbit";
    type Cipher = StreamCipherEngine<Rabbit>;

    fn create(_direction: Direction, key: &WordBuffer, cfg: &CipherConfig) -> Result<Self::Cipher> {
        Ok(StreamCipherEngine::new(Rabbit::new(key, cfg.iv())?))
    }
}

impl CipherFactory for RabbitLegacy {
    const KEY_WORDS: usize = 4;
    const IV_WORDS: usize = 2;
    const BLOCK_WORDS: usize = <RabbitLegacy as StreamCipher>::BLOCK_WORDS;
    const ALGORITHM_ID: &'static str = "Rabbit-legacy";
    type Cipher = StreamCipherEngine<RabbitLegacy>;

    fn create(_direction: Direction, key: &WordBuffer, cfg: &CipherConfig) -> Result<Self::Cipher> {
        Ok(StreamCipherEngine::new(RabbitLegacy::new(key, cfg.iv())?))
    }
}
