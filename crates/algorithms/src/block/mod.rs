//! Block ciphers, chaining modes and padding schemes

use wordcrypt_common::{Result, WordBuffer};

pub mod aes;
pub mod des;
pub mod modes;
pub mod padding;

pub use aes::Aes;
pub use des::{Des, TripleDes};

/// A keyed block cipher operating in place on word-aligned blocks.
///
/// Implementations hold only the expanded key schedule; chaining state lives
/// in the mode layer and buffering in the engine.
pub trait BlockCipher: Sized {
    /// Block size in 32-bit words.
    const BLOCK_WORDS: usize;

    /// Expands `key` into a schedule, validating its length.
    fn new(key: &WordBuffer) -> Result<Self>;

    /// Encrypts one block in place. `block` holds exactly
    /// [`BLOCK_WORDS`](Self::BLOCK_WORDS) big-endian words.
    fn encrypt_block(&self, block: &mut [u32]);

    /// Decrypts one block in place.
    fn decrypt_block(&self, block: &mut [u32]);
}
