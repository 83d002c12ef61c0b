//! PBKDF2 key derivation (RFC 2898)
//!
//! Generic over the HMAC hash; SHA-1 is the default pseudorandom function
//! for compatibility with the password cipher layer's historical behavior.

use std::marker::PhantomData;

use wordcrypt_common::WordBuffer;

use crate::hash::{HashCore, Sha1Core};
use crate::kdf::KdfParams;
use crate::mac::Hmac;

/// PBKDF2 deriver.
#[derive(Clone, Debug)]
pub struct Pbkdf2<C: HashCore + Default = Sha1Core> {
    params: KdfParams,
    _core: PhantomData<C>,
}

impl<C: HashCore + Default> Pbkdf2<C> {
    /// Creates a deriver with explicit parameters.
    pub fn new(params: KdfParams) -> Self {
        Pbkdf2 {
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
        let mut hmac = Hmac::<C>::new(password);
        let mut derived = WordBuffer::empty();
        // Big-endian 1-based block counter.
        let mut block_index = WordBuffer::from_words(vec![0x0000_0001]);

        while derived.words().len() < self.params.key_words {
            hmac.update(salt);
            hmac.update(&block_index);
            let mut block = hmac.finalize_in_place();
            hmac.reset();

            let mut intermediate = block.clone();
            for _ in 1..self.params.iterations {
                hmac.update(&intermediate);
                intermediate = hmac.finalize_in_place();
                hmac.reset();
                for (acc, word) in block.words_mut().iter_mut().zip(intermediate.words()) {
                    *acc ^= *word;
                }
            }

            derived.concat(&block);
            block_index.words_mut()[0] += 1;
        }

        derived.set_sig_bytes(self.params.key_words * 4);
        derived.words_mut().truncate(self.params.key_words);
        derived
    }
}

impl<C: HashCore + Default> Default for Pbkdf2<C> {
    fn default() -> Self {
        Self::new(KdfParams::default())
    }
}
