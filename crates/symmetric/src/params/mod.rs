//! Cipher parameter bundles

use zeroize::Zeroize;

use wordcrypt_common::WordBuffer;
use wordcrypt_algorithms::{CipherMode, Padding};

use crate::format::Format;

/// Ciphertext plus the metadata needed to reverse it.
///
/// Immutable once built: construct with [`CipherParams::new`] and the
/// `with_*` builders, then only read. `salt` is present only for
/// password-derived operations; `iv` is absent for IV-less configurations.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CipherParams {
    ciphertext: WordBuffer,
    key: Option<WordBuffer>,
    iv: Option<WordBuffer>,
    salt: Option<WordBuffer>,
    algorithm: Option<&'static str>,
    mode: Option<CipherMode>,
    padding: Option<Padding>,
    block_words: Option<usize>,
}

impl CipherParams {
    /// Creates a bundle holding only ciphertext.
    pub fn new(ciphertext: WordBuffer) -> Self {
        CipherParams {
            ciphertext,
            ..CipherParams::default()
        }
    }

    /// Attaches the raw encryption key.
    pub fn with_key(mut self, key: WordBuffer) -> Self {
        self.key = Some(key);
        self
    }

    /// Attaches the IV used by the chaining mode.
    pub fn with_iv(mut self, iv: WordBuffer) -> Self {
        self.iv = Some(iv);
        self
    }

    /// Attaches the KDF salt.
    pub fn with_salt(mut self, salt: WordBuffer) -> Self {
        self.salt = Some(salt);
        self
    }

    /// Attaches the algorithm name.
    pub fn with_algorithm(mut self, algorithm: &'static str) -> Self {
        self.algorithm = Some(algorithm);
        self
    }

    /// Records the chaining mode that produced the ciphertext.
    pub fn with_mode(mut self, mode: CipherMode) -> Self {
        self.mode = Some(mode);
        self
    }

    /// Records the padding scheme that produced the ciphertext.
    pub fn with_padding(mut self, padding: Padding) -> Self {
        self.padding = Some(padding);
        self
    }

    /// Records the cipher block size in words.
    pub fn with_block_words(mut self, block_words: usize) -> Self {
        self.block_words = Some(block_words);
        self
    }

    /// The ciphertext.
    pub fn ciphertext(&self) -> &WordBuffer {
        &self.ciphertext
    }

    /// The raw key, when recorded.
    pub fn key(&self) -> Option<&WordBuffer> {
        self.key.as_ref()
    }

    /// The IV, when recorded.
    pub fn iv(&self) -> Option<&WordBuffer> {
        self.iv.as_ref()
    }

    /// The KDF salt, when recorded.
    pub fn salt(&self) -> Option<&WordBuffer> {
        self.salt.as_ref()
    }

    /// The algorithm name, when recorded.
    pub fn algorithm(&self) -> Option<&'static str> {
        self.algorithm
    }

    /// The chaining mode, when recorded.
    pub fn mode(&self) -> Option<CipherMode> {
        self.mode
    }

    /// The padding scheme, when recorded.
    pub fn padding(&self) -> Option<Padding> {
        self.padding
    }

    /// The cipher block size in words, when recorded.
    pub fn block_words(&self) -> Option<usize> {
        self.block_words
    }

    /// Serializes this bundle with the given transport format.
    pub fn to_string_with(&self, format: Format) -> String {
        format.stringify(self)
    }
}

impl Zeroize for CipherParams {
    fn zeroize(&mut self) {
        self.ciphertext.zeroize();
        if let Some(key) = &mut self.key {
            key.zeroize();
        }
        if let Some(iv) = &mut self.iv {
            iv.zeroize();
        }
        if let Some(salt) = &mut self.salt {
            salt.zeroize();
        }
    }
}
