//! Block cipher modes of operation
//!
//! Every mode is expressed as an in-place transform over one block plus a
//! chaining register seeded from the IV. The feedback modes (CFB, OFB, CTR
//! and the Gladman CTR variant) run the block cipher forward in both
//! directions; only ECB and CBC ever invoke the decryption primitive.

use wordcrypt_common::error::validate;
use wordcrypt_common::{Result, WordBuffer};

use crate::block::BlockCipher;

/// Chaining mode selector.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum CipherMode {
    /// Electronic codebook. No chaining, no IV.
    Ecb,
    /// Cipher block chaining.
    #[default]
    Cbc,
    /// Cipher feedback, full-block.
    Cfb,
    /// Output feedback.
    Ofb,
    /// Counter mode incrementing the last counter word only.
    Ctr,
    /// Counter variant with Brian Gladman's byte-serial increment over the
    /// first two counter words.
    CtrGladman,
}

impl CipherMode {
    /// Whether this mode consumes an IV.
    pub fn needs_iv(&self) -> bool {
        !matches!(self, CipherMode::Ecb)
    }
}

/// Gladman counter word step: the top byte increments, and only on its
/// overflow does the carry ripple down through the remaining bytes. Bytes
/// that are all 0xff wrap to zero without carrying further.
fn inc_word(word: u32) -> u32 {
    if (word >> 24) & 0xff == 0xff {
        let mut b1 = (word >> 16) & 0xff;
        let mut b2 = (word >> 8) & 0xff;
        let mut b3 = word & 0xff;
        if b1 == 0xff {
            b1 = 0;
            if b2 == 0xff {
                b2 = 0;
                if b3 == 0xff {
                    b3 = 0;
                } else {
                    b3 += 1;
                }
            } else {
                b2 += 1;
            }
        } else {
            b1 += 1;
        }
        (b1 << 16) | (b2 << 8) | b3
    } else {
        word.wrapping_add(0x01 << 24)
    }
}

fn inc_counter(counter: &mut [u32]) {
    counter[0] = inc_word(counter[0]);
    if counter[0] == 0 {
        counter[1] = inc_word(counter[1]);
    }
}

fn xor_block(block: &mut [u32], other: &[u32]) {
    for (word, mask) in block.iter_mut().zip(other) {
        *word ^= *mask;
    }
}

/// Per-message chaining state for one mode.
#[derive(Clone, Debug)]
pub(crate) struct ModeRunner {
    mode: CipherMode,
    // CBC/CFB previous block, OFB keystream, CTR counter. Seeded from the IV.
    prev: Vec<u32>,
}

impl ModeRunner {
    pub(crate) fn new(
        mode: CipherMode,
        iv: Option<&WordBuffer>,
        block_words: usize,
    ) -> Result<Self> {
        let prev = if mode.needs_iv() {
            let iv = iv.ok_or_else(|| {
                wordcrypt_common::Error::param("iv", "mode requires an initialization vector")
            })?;
            validate::length("iv", iv.sig_bytes(), block_words * 4)?;
            iv.words()[..block_words].to_vec()
        } else {
            Vec::new()
        };
        Ok(ModeRunner { mode, prev })
    }

    pub(crate) fn encrypt_block<C: BlockCipher>(&mut self, cipher: &C, block: &mut [u32]) {
        match self.mode {
            CipherMode::Ecb => cipher.encrypt_block(block),
            CipherMode::Cbc => {
                xor_block(block, &self.prev);
                cipher.encrypt_block(block);
                self.prev.copy_from_slice(block);
            }
            CipherMode::Cfb => {
                let mut keystream = self.prev.clone();
                cipher.encrypt_block(&mut keystream);
                xor_block(block, &keystream);
                self.prev.copy_from_slice(block);
            }
            CipherMode::Ofb => {
                cipher.encrypt_block(&mut self.prev);
                xor_block(block, &self.prev);
            }
            CipherMode::Ctr => {
                let mut keystream = self.prev.clone();
                cipher.encrypt_block(&mut keystream);
                let last = self.prev.len() - 1;
                self.prev[last] = self.prev[last].wrapping_add(1);
                xor_block(block, &keystream);
            }
            CipherMode::CtrGladman => {
                inc_counter(&mut self.prev);
                let mut keystream = self.prev.clone();
                cipher.encrypt_block(&mut keystream);
                xor_block(block, &keystream);
            }
        }
    }

    pub(crate) fn decrypt_block<C: BlockCipher>(&mut self, cipher: &C, block: &mut [u32]) {
        match self.mode {
            CipherMode::Ecb => cipher.decrypt_block(block),
            CipherMode::Cbc => {
                let ciphertext = block.to_vec();
                cipher.decrypt_block(block);
                xor_block(block, &self.prev);
                self.prev = ciphertext;
            }
            CipherMode::Cfb => {
                let ciphertext = block.to_vec();
                let mut keystream = self.prev.clone();
                cipher.encrypt_block(&mut keystream);
                xor_block(block, &keystream);
                self.prev = ciphertext;
            }
            // The remaining modes are symmetric.
            CipherMode::Ofb | CipherMode::Ctr | CipherMode::CtrGladman => {
                self.encrypt_block(cipher, block)
            }
        }
    }
}

#[cfg(test)]
mod tests;
