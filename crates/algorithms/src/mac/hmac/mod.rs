//! HMAC keyed hashing (RFC 2104)
//!
//! Generic over the underlying [`HashCore`]. Keys longer than the hash block
//! are pre-hashed; shorter keys are zero-extended to the block size before
//! the inner and outer pads are applied.

use subtle::ConstantTimeEq;
use zeroize::Zeroize;

use wordcrypt_common::{Encoding, WordBuffer};

use crate::hash::{HashCore, HashEngine};

const INNER_PAD: u32 = 0x3636_3636;
const OUTER_PAD: u32 = 0x5c5c_5c5c;

/// Streaming HMAC computation.
///
/// The derived pad keys are retained, so [`reset`](Hmac::reset) re-keys the
/// engine without touching the original key. Iterated callers such as PBKDF2
/// rely on that being cheap.
pub struct Hmac<C: HashCore> {
    engine: HashEngine<C>,
    inner_key: WordBuffer,
    outer_key: WordBuffer,
}

impl<C: HashCore + Default> Hmac<C> {
    /// Creates an HMAC instance keyed with `key`.
    pub fn new(key: &WordBuffer) -> Self {
        Self::with_core(C::default(), key)
    }

    /// Creates an HMAC instance keyed with a UTF-8 passphrase.
    pub fn new_str(key: &str) -> Self {
        // Infallible: &str is valid UTF-8 by construction.
        let key = Encoding::Utf8.parse(key).expect("utf-8 parse of str");
        Self::new(&key)
    }

    /// One-shot MAC of a buffer.
    pub fn mac(key: &WordBuffer, data: &WordBuffer) -> WordBuffer {
        let mut hmac = Self::new(key);
        hmac.update(data);
        hmac.finalize()
    }

    /// One-shot MAC of a UTF-8 message.
    pub fn mac_str(key: &WordBuffer, message: &str) -> WordBuffer {
        let mut hmac = Self::new(key);
        hmac.update_str(message);
        hmac.finalize()
    }
}

impl<C: HashCore> Hmac<C> {
    /// Creates an HMAC instance around an explicitly configured core.
    pub fn with_core(core: C, key: &WordBuffer) -> Self {
        let block_words = core.block_words();
        let block_bytes = block_words * 4;

        let mut key = if key.sig_bytes() > block_bytes {
            let mut engine = HashEngine::with_core(core.clone());
            engine.update(key);
            engine.finalize_in_place()
        } else {
            key.clone()
        };
        key.clamp();
        key.words_mut().resize(block_words, 0);

        let mut inner_key = key.clone();
        let mut outer_key = key;
        for word in inner_key.words_mut().iter_mut() {
            *word ^= INNER_PAD;
        }
        for word in outer_key.words_mut().iter_mut() {
            *word ^= OUTER_PAD;
        }
        inner_key.set_sig_bytes(block_bytes);
        outer_key.set_sig_bytes(block_bytes);

        let mut hmac = Hmac {
            engine: HashEngine::with_core(core),
            inner_key,
            outer_key,
        };
        hmac.reset();
        hmac
    }

    /// Restores the keyed initial state for a new message.
    pub fn reset(&mut self) {
        self.engine.reset();
        self.engine.update(&self.inner_key);
    }

    /// Appends message data.
    pub fn update(&mut self, data: &WordBuffer) -> &mut Self {
        self.engine.update(data);
        self
    }

    /// Appends a UTF-8 message fragment.
    pub fn update_str(&mut self, message: &str) -> &mut Self {
        self.engine.update_str(message);
        self
    }

    /// Completes the MAC over everything fed so far.
    pub fn finalize(mut self) -> WordBuffer {
        self.finalize_in_place()
    }

    /// Completes the MAC over trailing data plus everything fed so far.
    pub fn finalize_with(mut self, data: &WordBuffer) -> WordBuffer {
        self.update(data);
        self.finalize_in_place()
    }

    /// Completes the MAC and compares it against `expected` in constant
    /// time.
    pub fn verify(self, expected: &WordBuffer) -> bool {
        let mut mac = self.finalize();
        let ok = mac.sig_bytes() == expected.sig_bytes()
            && mac.to_bytes().ct_eq(&expected.to_bytes()).into();
        mac.zeroize();
        ok
    }

    /// Finalizes without consuming the instance. The caller must invoke
    /// [`reset`](Self::reset) before authenticating another message.
    pub(crate) fn finalize_in_place(&mut self) -> WordBuffer {
        let mut inner_hash = self.engine.finalize_in_place();
        self.engine.reset();
        self.engine.update(&self.outer_key);
        self.engine.update(&inner_hash);
        let mac = self.engine.finalize_in_place();
        inner_hash.zeroize();
        mac
    }
}

#[cfg(test)]
mod tests;
