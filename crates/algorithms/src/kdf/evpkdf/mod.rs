//! OpenSSL `EVP_BytesToKey` key derivation
//!
//! Each output block hashes the previous block, the password and the salt,
//! then rehashes itself for any extra iterations. MD5 with one iteration is
//! the default, matching the OpenSSL `Salted__` file format that password
//! based encryption interoperates with.

use std::marker::PhantomData;

use wordcrypt_common::WordBuffer;

use crate::hash::{HashCore, HashEngine, Md5Core};
use crate::kdf::KdfParams;

/// EVP key deriver.
#[derive(Clone, Debug)]
pub struct EvpKdf<C: HashCore + Default = Md5Core> {
    params: KdfParams,
    _core: PhantomData<C>,
}

impl<C: HashCore + Default> EvpKdf<C> {
    /// Creates a deriver with explicit parameters.
    pub fn new(params: KdfParams) -> Self {
        EvpKdf {
            params,
            _core: PhantomData,
        }
    }

    /// One-shot derivation with the default parameters.
    pub fn compute(password: &WordBuffer, salt: &WordBuffer) -> WordBuffer {
        Self::new(KdfParams::default()).derive(password, salt)
    }

    /// Derives `params.key_words` words of key material.
    pub fn derive(&self, password: &WordBuffer, salt: &WordBuffer) -> WordBuffer {
        let mut engine = HashEngine::<C>::new();
        let mut derived = WordBuffer::empty();
        let mut block = WordBuffer::empty();

        while derived.words().len() < self.params.key_words {
            if !block.is_empty() {
                engine.update(&block);
            }
            engine.update(password);
            engine.update(salt);
            block = engine.finalize_in_place();
            engine.reset();

            for _ in 1..self.params.iterations {
                engine.update(&block);
                block = engine.finalize_in_place();
                engine.reset();
            }

            derived.concat(&block);
        }

        derived.set_sig_bytes(self.params.key_words * 4);
        derived.words_mut().truncate(self.params.key_words);
        derived
    }
}

impl<C: HashCore + Default> Default for EvpKdf<C> {
    fn default() -> Self {
        Self::new(KdfParams::default())
    }
}
