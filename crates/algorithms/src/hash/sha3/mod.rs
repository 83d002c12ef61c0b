//! SHA-3 hash functions (FIPS 202)
//!
//! One core covers all four output widths; the sponge rate follows from the
//! configured width, so the block size is per-instance rather than constant.
//! Lanes are little-endian: 32-bit message words are byte-swapped into the
//! low and high halves of each 64-bit lane and swapped back on squeeze.

use zeroize::Zeroize;

use wordcrypt_common::error::validate;
use wordcrypt_common::{Result, WordBuffer};
use wordcrypt_common::BlockAccumulator;

use super::HashCore;

/// Iota round constants for Keccak-f[1600].
const ROUND_CONSTANTS: [u64; 24] = [
    0x0000000000000001,
    0x0000000000008082,
    0x800000000000808a,
    0x8000000080008000,
    0x000000000000808b,
    0x0000000080000001,
    0x8000000080008081,
    0x8000000000008009,
    0x000000000000008a,
    0x0000000000000088,
    0x0000000080008009,
    0x000000008000000a,
    0x000000008000808b,
    0x800000000000008b,
    0x8000000000008089,
    0x8000000000008003,
    0x8000000000008002,
    0x8000000000000080,
    0x000000000000800a,
    0x800000008000000a,
    0x8000000080008081,
    0x8000000000008080,
    0x0000000080000001,
    0x8000000080008008,
];

/// Rho rotation offsets, indexed `x + 5 * y`.
const RHO_OFFSETS: [u32; 25] = [
    0, 1, 62, 28, 27, //
    36, 44, 6, 55, 20, //
    3, 10, 43, 25, 39, //
    41, 45, 15, 21, 8, //
    18, 2, 61, 56, 14,
];

fn keccak_f(state: &mut [u64; 25]) {
    for &rc in &ROUND_CONSTANTS {
        // Theta
        let mut c = [0u64; 5];
        for (x, col) in c.iter_mut().enumerate() {
            *col = state[x] ^ state[x + 5] ^ state[x + 10] ^ state[x + 15] ^ state[x + 20];
        }
        for x in 0..5 {
            let d = c[(x + 4) % 5] ^ c[(x + 1) % 5].rotate_left(1);
            for y in 0..5 {
                state[x + 5 * y] ^= d;
            }
        }

        // Rho and pi
        let mut b = [0u64; 25];
        for x in 0..5 {
            for y in 0..5 {
                b[y + 5 * ((2 * x + 3 * y) % 5)] =
                    state[x + 5 * y].rotate_left(RHO_OFFSETS[x + 5 * y]);
            }
        }

        // Chi
        for y in 0..5 {
            for x in 0..5 {
                state[x + 5 * y] =
                    b[x + 5 * y] ^ (!b[(x + 1) % 5 + 5 * y] & b[(x + 2) % 5 + 5 * y]);
            }
        }

        // Iota
        state[0] ^= rc;
    }
}

/// Keccak sponge state configured for one of the SHA-3 output widths.
#[derive(Clone, Debug, Zeroize)]
pub struct Sha3Core {
    state: [u64; 25],
    output_bits: usize,
}

impl Sha3Core {
    /// Creates a core for the given output width.
    ///
    /// `output_bits` must be 224, 256, 384 or 512.
    pub fn with_output_bits(output_bits: usize) -> Result<Self> {
        validate::parameter(
            matches!(output_bits, 224 | 256 | 384 | 512),
            "output_bits",
            "SHA-3 output width must be 224, 256, 384 or 512 bits",
        )?;
        Ok(Sha3Core {
            state: [0u64; 25],
            output_bits,
        })
    }

    /// Configured digest width in bits.
    pub fn output_bits(&self) -> usize {
        self.output_bits
    }
}

impl Default for Sha3Core {
    fn default() -> Self {
        Sha3Core {
            state: [0u64; 25],
            output_bits: 512,
        }
    }
}

impl HashCore for Sha3Core {
    const ALGORITHM_ID: &'static str = "SHA-3";

    fn block_words(&self) -> usize {
        // Sponge rate: 1600 minus twice the capacity reserved for the width.
        (1600 - 2 * self.output_bits) / 32
    }

    fn reset(&mut self) {
        self.state = [0u64; 25];
    }

    fn process_block(&mut self, words: &[u32], offset: usize) {
        let n_lanes = self.block_words() / 2;
        for i in 0..n_lanes {
            let lo = words[offset + 2 * i].swap_bytes() as u64;
            let hi = words[offset + 2 * i + 1].swap_bytes() as u64;
            self.state[i] ^= (hi << 32) | lo;
        }
        keccak_f(&mut self.state);
    }

    fn finalize(&mut self, acc: &mut BlockAccumulator) -> WordBuffer {
        let block_words = self.block_words();
        {
            let data = acc.data_mut();
            let n_bytes_left = data.sig_bytes();
            let block_bytes = block_words * 4;

            // Domain byte 0x06 after the message, 0x80 at the end of the
            // block. They collapse to 0x86 when only one pad byte fits.
            let padded_bytes = (n_bytes_left / block_bytes + 1) * block_bytes;
            let padded_words = padded_bytes / 4;
            data.words_mut().resize(padded_words, 0);
            data.words_mut()[n_bytes_left >> 2] |= 0x06u32 << (24 - (n_bytes_left % 4) * 8);
            data.words_mut()[padded_words - 1] |= 0x80;
            data.set_sig_bytes(padded_bytes);
        }

        acc.process(true, |words, offset| self.process_block(words, offset));

        let output_bytes = self.output_bits / 8;
        let n_lanes = (output_bytes + 7) / 8;
        let mut words = Vec::with_capacity(n_lanes * 2);
        for lane in &self.state[..n_lanes] {
            words.push((*lane as u32).swap_bytes());
            words.push(((lane >> 32) as u32).swap_bytes());
        }
        WordBuffer::new(words, output_bytes)
    }
}

#[cfg(test)]
mod tests;
