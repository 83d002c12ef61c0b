//! Rabbit stream cipher (RFC 4503)
//!
//! 128-bit key, optional 64-bit IV, 128-bit keystream blocks. The cipher is
//! little-endian internally; key, IV and keystream words are byte-swapped at
//! the boundary. [`RabbitLegacy`] keeps an early variant that skipped the
//! key swap, preserved because ciphertext produced by it is still around.

use zeroize::Zeroize;

use wordcrypt_common::error::validate;
use wordcrypt_common::{Result, WordBuffer};

use crate::stream::StreamCipher;

const COUNTER_STEP: [u32; 3] = [0x4d34_d34d, 0xd34d_34d3, 0x34d3_4d34];

/// Shared inner state of both Rabbit variants.
#[derive(Clone, Debug, Zeroize)]
struct RabbitState {
    x: [u32; 8],
    c: [u32; 8],
    carry: u32,
}

impl RabbitState {
    /// Builds the initial state from four key words (already in the
    /// cipher's native byte order) and mixes in the IV when present.
    fn setup(k: [u32; 4], iv: Option<[u32; 2]>) -> Self {
        let mut state = RabbitState {
            x: [
                k[0],
                (k[3] << 16) | (k[2] >> 16),
                k[1],
                (k[0] << 16) | (k[3] >> 16),
                k[2],
                (k[1] << 16) | (k[0] >> 16),
                k[3],
                (k[2] << 16) | (k[1] >> 16),
            ],
            c: [
                (k[2] << 16) | (k[2] >> 16),
                (k[0] & 0xffff_0000) | (k[1] & 0x0000_ffff),
                (k[3] << 16) | (k[3] >> 16),
                (k[1] & 0xffff_0000) | (k[2] & 0x0000_ffff),
                (k[0] << 16) | (k[0] >> 16),
                (k[2] & 0xffff_0000) | (k[3] & 0x0000_ffff),
                (k[1] << 16) | (k[1] >> 16),
                (k[3] & 0xffff_0000) | (k[0] & 0x0000_ffff),
            ],
            carry: 0,
        };

        for _ in 0..4 {
            state.next();
        }
        for i in 0..8 {
            state.c[i] ^= state.x[(i + 4) % 8];
        }

        if let Some(iv) = iv {
            let i0 = iv[0].swap_bytes();
            let i2 = iv[1].swap_bytes();
            let i1 = (i0 >> 16) | (i2 & 0xffff_0000);
            let i3 = (i2 << 16) | (i0 & 0x0000_ffff);

            state.c[0] ^= i0;
            state.c[1] ^= i1;
            state.c[2] ^= i2;
            state.c[3] ^= i3;
            state.c[4] ^= i0;
            state.c[5] ^= i1;
            state.c[6] ^= i2;
            state.c[7] ^= i3;

            for _ in 0..4 {
                state.next();
            }
        }

        state
    }

    /// One counter update plus the g-function cascade.
    fn next(&mut self) {
        let old_c = self.c;

        let mut carry = self.carry;
        for i in 0..8 {
            self.c[i] = self.c[i]
                .wrapping_add(COUNTER_STEP[i % 3])
                .wrapping_add(carry);
            carry = u32::from(self.c[i] < old_c[i]);
        }
        self.carry = carry;

        let mut g = [0u32; 8];
        for i in 0..8 {
            let gx = self.x[i].wrapping_add(self.c[i]);
            let square = u64::from(gx) * u64::from(gx);
            g[i] = (square as u32) ^ ((square >> 32) as u32);
        }

        self.x[0] = g[0]
            .wrapping_add(g[7].rotate_left(16))
            .wrapping_add(g[6].rotate_left(16));
        self.x[1] = g[1].wrapping_add(g[0].rotate_left(8)).wrapping_add(g[7]);
        self.x[2] = g[2]
            .wrapping_add(g[1].rotate_left(16))
            .wrapping_add(g[0].rotate_left(16));
        self.x[3] = g[3].wrapping_add(g[2].rotate_left(8)).wrapping_add(g[1]);
        self.x[4] = g[4]
            .wrapping_add(g[3].rotate_left(16))
            .wrapping_add(g[2].rotate_left(16));
        self.x[5] = g[5].wrapping_add(g[4].rotate_left(8)).wrapping_add(g[3]);
        self.x[6] = g[6]
            .wrapping_add(g[5].rotate_left(16))
            .wrapping_add(g[4].rotate_left(16));
        self.x[7] = g[7].wrapping_add(g[6].rotate_left(8)).wrapping_add(g[5]);
    }

    fn keystream_block(&mut self) -> [u32; 4] {
        self.next();
        let x = &self.x;
        [
            (x[0] ^ (x[5] >> 16) ^ (x[3] << 16)).swap_bytes(),
            (x[2] ^ (x[7] >> 16) ^ (x[5] << 16)).swap_bytes(),
            (x[4] ^ (x[1] >> 16) ^ (x[7] << 16)).swap_bytes(),
            (x[6] ^ (x[3] >> 16) ^ (x[1] << 16)).swap_bytes(),
        ]
    }
}

fn key_words(key: &WordBuffer, iv: Option<&WordBuffer>) -> Result<([u32; 4], Option<[u32; 2]>)> {
    validate::length("key", key.sig_bytes(), 16)?;
    let k = [
        key.words()[0],
        key.words()[1],
        key.words()[2],
        key.words()[3],
    ];
    let iv = match iv {
        Some(iv) => {
            validate::length("iv", iv.sig_bytes(), 8)?;
            Some([iv.words()[0], iv.words()[1]])
        }
        None => None,
    };
    Ok((k, iv))
}

/// Rabbit keystream state.
#[derive(Clone, Debug, Zeroize)]
pub struct Rabbit {
    state: RabbitState,
}

impl Rabbit {
    /// Sets up the cipher from a 16-byte key and an optional 8-byte IV.
    pub fn new(key: &WordBuffer, iv: Option<&WordBuffer>) -> Result<Self> {
        let (mut k, iv) = key_words(key, iv)?;
        for word in &mut k {
            *word = word.swap_bytes();
        }
        Ok(Rabbit {
            state: RabbitState::setup(k, iv),
        })
    }
}

impl StreamCipher for Rabbit {
    const BLOCK_WORDS: usize = 4;

    fn process_block(&mut self, words: &mut [u32], offset: usize) {
        let keystream = self.state.keystream_block();
        for (i, ks) in keystream.iter().enumerate() {
            words[offset + i] ^= *ks;
        }
    }
}

/// Rabbit variant that omits the key byte swap during setup.
#[derive(Clone, Debug, Zeroize)]
pub struct RabbitLegacy {
    state: RabbitState,
}

impl RabbitLegacy {
    /// Sets up the cipher from a 16-byte key and an optional 8-byte IV.
    pub fn new(key: &WordBuffer, iv: Option<&WordBuffer>) -> Result<Self> {
        let (k, iv) = key_words(key, iv)?;
        Ok(RabbitLegacy {
            state: RabbitState::setup(k, iv),
        })
    }
}

impl StreamCipher for RabbitLegacy {
    const BLOCK_WORDS: usize = 4;

    fn process_block(&mut self, words: &mut [u32], offset: usize) {
        let keystream = self.state.keystream_block();
        for (i, ks) in keystream.iter().enumerate() {
            words[offset + i] ^= *ks;
        }
    }
}

#[cfg(test)]
mod tests;
