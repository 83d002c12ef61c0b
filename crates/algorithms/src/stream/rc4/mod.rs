//! RC4 stream cipher
//!
//! The keystream generator works byte-wise internally but is exposed one
//! word at a time to fit the shared streaming model. RC4's early keystream
//! is biased; [`Rc4Drop`] discards a configurable prefix to blunt that.

use zeroize::Zeroize;

use wordcrypt_common::error::validate;
use wordcrypt_common::{Result, WordBuffer};

use crate::stream::{drop_keystream, StreamCipher};

/// Default number of keystream words an [`Rc4Drop`] instance discards
/// (768 bytes).
pub const DEFAULT_DROP_WORDS: usize = 192;

/// RC4 keystream state.
#[derive(Clone, Zeroize)]
pub struct Rc4 {
    s: [u8; 256],
    i: u8,
    j: u8,
}

impl Rc4 {
    /// Key-schedules an RC4 instance. Any key from 1 to 256 bytes works.
    pub fn new(key: &WordBuffer) -> Result<Self> {
        validate::min_length("key", key.sig_bytes(), 1)?;
        validate::max_length("key", key.sig_bytes(), 256)?;

        let mut s = [0u8; 256];
        for (i, slot) in s.iter_mut().enumerate() {
            *slot = i as u8;
        }
        let key_len = key.sig_bytes();
        let mut j = 0u8;
        for i in 0..256 {
            let key_byte = key.byte(i % key_len);
            j = j.wrapping_add(s[i]).wrapping_add(key_byte);
            s.swap(i, j as usize);
        }

        Ok(Rc4 { s, i: 0, j: 0 })
    }

    fn keystream_word(&mut self) -> u32 {
        let mut word = 0u32;
        for _ in 0..4 {
            self.i = self.i.wrapping_add(1);
            self.j = self.j.wrapping_add(self.s[self.i as usize]);
            self.s.swap(self.i as usize, self.j as usize);
            let idx = self.s[self.i as usize].wrapping_add(self.s[self.j as usize]);
            word = (word << 8) | u32::from(self.s[idx as usize]);
        }
        word
    }
}

impl StreamCipher for Rc4 {
    const BLOCK_WORDS: usize = 1;

    fn process_block(&mut self, words: &mut [u32], offset: usize) {
        words[offset] ^= self.keystream_word();
    }
}

/// RC4 with the initial keystream discarded.
#[derive(Clone, Zeroize)]
pub struct Rc4Drop {
    inner: Rc4,
}

impl Rc4Drop {
    /// Key-schedules and drops the default 192-word keystream prefix.
    pub fn new(key: &WordBuffer) -> Result<Self> {
        Self::with_drop_words(key, DEFAULT_DROP_WORDS)
    }

    /// Key-schedules and drops `drop_words` words of keystream.
    pub fn with_drop_words(key: &WordBuffer, drop_words: usize) -> Result<Self> {
        let mut inner = Rc4::new(key)?;
        drop_keystream(&mut inner, drop_words);
        Ok(Rc4Drop { inner })
    }
}

impl StreamCipher for Rc4Drop {
    const BLOCK_WORDS: usize = 1;

    fn process_block(&mut self, words: &mut [u32], offset: usize) {
        self.inner.process_block(words, offset);
    }
}

#[cfg(test)]
mod tests;
