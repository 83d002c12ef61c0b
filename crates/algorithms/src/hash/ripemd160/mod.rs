//! RIPEMD-160 message digest
//!
//! Two parallel five-round paths over little-endian message words, combined
//! into the chaining state after each block. Like MD5 the message words, the
//! length field and the output are all byte-swapped.

use zeroize::Zeroize;

use wordcrypt_common::{BlockAccumulator, WordBuffer};

use super::HashCore;

const BLOCK_WORDS: usize = 16;

const INIT_STATE: [u32; 5] = [
    0x6745_2301,
    0xefcd_ab89,
    0x98ba_dcfe,
    0x1032_5476,
    0xc3d2_e1f0,
];

const K_LEFT: [u32; 5] = [0x0000_0000, 0x5a82_7999, 0x6ed9_eba1, 0x8f1b_bcdc, 0xa953_fd4e];
const K_RIGHT: [u32; 5] = [0x50a2_8be6, 0x5c4d_d124, 0x6d70_3ef3, 0x7a6d_76e9, 0x0000_0000];

const R_LEFT: [usize; 80] = [
    0, 1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 11, 12, 13, 14, 15, //
    7, 4, 13, 1, 10, 6, 15, 3, 12, 0, 9, 5, 2, 14, 11, 8, //
    3, 10, 14, 4, 9, 15, 8, 1, 2, 7, 0, 6, 13, 11, 5, 12, //
    1, 9, 11, 10, 0, 8, 12, 4, 13, 3, 7, 15, 14, 5, 6, 2, //
    4, 0, 5, 9, 7, 12, 2, 10, 14, 1, 3, 8, 11, 6, 15, 13,
];

const R_RIGHT: [usize; 80] = [
    5, 14, 7, 0, 9, 2, 11, 4, 13, 6, 15, 8, 1, 10, 3, 12, //
    6, 11, 3, 7, 0, 13, 5, 10, 14, 15, 8, 12, 4, 9, 1, 2, //
    15, 5, 1, 3, 7, 14, 6, 9, 11, 8, 12, 2, 10, 0, 4, 13, //
    8, 6, 4, 1, 3, 11, 15, 0, 5, 12, 2, 13, 9, 7, 10, 14, //
    12, 15, 10, 4, 1, 5, 8, 7, 6, 2, 13, 14, 0, 3, 9, 11,
];

const S_LEFT: [u32; 80] = [
    11, 14, 15, 12, 5, 8, 7, 9, 11, 13, 14, 15, 6, 7, 9, 8, //
    7, 6, 8, 13, 11, 9, 7, 15, 7, 12, 15, 9, 11, 7, 13, 12, //
    11, 13, 6, 7, 14, 9, 13, 15, 14, 8, 13, 6, 5, 12, 7, 5, //
    11, 12, 14, 15, 14, 15, 9, 8, 9, 14, 5, 6, 8, 6, 5, 12, //
    9, 15, 5, 11, 6, 8, 13, 12, 5, 12, 13, 14, 11, 8, 5, 6,
];

const S_RIGHT: [u32; 80] = [
    8, 9, 9, 11, 13, 15, 15, 5, 7, 7, 8, 11, 14, 14, 12, 6, //
    9, 13, 15, 7, 12, 8, 9, 11, 7, 7, 12, 7, 6, 15, 13, 11, //
    9, 7, 15, 11, 8, 6, 6, 14, 12, 13, 5, 14, 13, 13, 7, 5, //
    15, 5, 8, 11, 14, 14, 6, 14, 6, 9, 12, 9, 12, 5, 15, 8, //
    8, 5, 12, 9, 12, 5, 14, 6, 8, 13, 6, 5, 15, 13, 11, 11,
];

/// Round function ladder. The right path walks it in reverse.
#[inline]
fn f(j: usize, x: u32, y: u32, z: u32) -> u32 {
    match j {
        0..=15 => x ^ y ^ z,
        16..=31 => (x & y) | (!x & z),
        32..=47 => (x | !y) ^ z,
        48..=63 => (x & z) | (y & !z),
        _ => x ^ (y | !z),
    }
}

/// RIPEMD-160 compression state.
#[derive(Clone, Debug, Zeroize)]
pub struct Ripemd160Core {
    state: [u32; 5],
}

impl Default for Ripemd160Core {
    fn default() -> Self {
        Ripemd160Core { state: INIT_STATE }
    }
}

impl HashCore for Ripemd160Core {
    const ALGORITHM_ID: &'static str = "RIPEMD-160";

    fn block_words(&self) -> usize {
        BLOCK_WORDS
    }

    fn reset(&mut self) {
        self.state = INIT_STATE;
    }

    fn process_block(&mut self, words: &[u32], offset: usize) {
        // Little-endian message schedule.
        let mut m = [0u32; 16];
        for (i, slot) in m.iter_mut().enumerate() {
            *slot = words[offset + i].swap_bytes();
        }

        let [mut a1, mut b1, mut c1, mut d1, mut e1] = self.state;
        let [mut a2, mut b2, mut c2, mut d2, mut e2] = self.state;

        for j in 0..80 {
            let round = j / 16;

            let t = a1
                .wrapping_add(f(j, b1, c1, d1))
                .wrapping_add(m[R_LEFT[j]])
                .wrapping_add(K_LEFT[round])
                .rotate_left(S_LEFT[j])
                .wrapping_add(e1);
            a1 = e1;
            e1 = d1;
            d1 = c1.rotate_left(10);
            c1 = b1;
            b1 = t;

            let t = a2
                .wrapping_add(f(79 - j, b2, c2, d2))
                .wrapping_add(m[R_RIGHT[j]])
                .wrapping_add(K_RIGHT[round])
                .rotate_left(S_RIGHT[j])
                .wrapping_add(e2);
            a2 = e2;
            e2 = d2;
            d2 = c2.rotate_left(10);
            c2 = b2;
            b2 = t;
        }

        let t = self.state[1].wrapping_add(c1).wrapping_add(d2);
        self.state[1] = self.state[2].wrapping_add(d1).wrapping_add(e2);
        self.state[2] = self.state[3].wrapping_add(e1).wrapping_add(a2);
        self.state[3] = self.state[4].wrapping_add(a1).wrapping_add(b2);
        self.state[4] = self.state[0].wrapping_add(b1).wrapping_add(c2);
        self.state[0] = t;
    }

    fn finalize(&mut self, acc: &mut BlockAccumulator) -> WordBuffer {
        let n_bits_total = acc.total_bytes().wrapping_mul(8);
        {
            let data = acc.data_mut();
            let n_bits_left = data.sig_bytes() * 8;

            let idx = n_bits_left >> 5;
            if data.words().len() <= idx {
                data.words_mut().resize(idx + 1, 0);
            }
            data.words_mut()[idx] |= 0x80u32 << (24 - n_bits_left % 32);

            let base = ((n_bits_left + 64) >> 9) << 4;
            data.words_mut().resize(base + 16, 0);
            // 64-bit bit length, little-endian words, each byte-swapped.
            data.words_mut()[base + 14] = (n_bits_total as u32).swap_bytes();
            data.words_mut()[base + 15] = ((n_bits_total >> 32) as u32).swap_bytes();

            let byte_len = data.words().len() * 4;
            data.set_sig_bytes(byte_len);
        }

        acc.process(true, |words, offset| self.process_block(words, offset));

        WordBuffer::from_words(self.state.iter().map(|w| w.swap_bytes()).collect())
    }
}

#[cfg(test)]
mod tests;
