//! MD5 message digest (RFC 1321)
//!
//! MD5 interprets its input as little-endian: every message word is
//! byte-swapped before compression, the 64-bit bit length is stored
//! byte-swapped in the last two words of the final block, and the output
//! words are byte-swapped back. These quirks are reproduced exactly.

use std::sync::OnceLock;

use zeroize::Zeroize;

use wordcrypt_common::{BlockAccumulator, WordBuffer};

use super::HashCore;

const BLOCK_WORDS: usize = 16;

const INIT_STATE: [u32; 4] = [0x6745_2301, 0xefcd_ab89, 0x98ba_dcfe, 0x1032_5476];

/// Per-round left-rotation amounts.
const S: [u32; 64] = [
    7, 12, 17, 22, 7, 12, 17, 22, 7, 12, 17, 22, 7, 12, 17, 22, //
    5, 9, 14, 20, 5, 9, 14, 20, 5, 9, 14, 20, 5, 9, 14, 20, //
    4, 11, 16, 23, 4, 11, 16, 23, 4, 11, 16, 23, 4, 11, 16, 23, //
    6, 10, 15, 21, 6, 10, 15, 21, 6, 10, 15, 21, 6, 10, 15, 21,
];

/// The sine-derived constant table, `floor(2^32 * |sin(i + 1)|)`, computed
/// once on first use and immutable thereafter.
fn t_table() -> &'static [u32; 64] {
    static T: OnceLock<[u32; 64]> = OnceLock::new();
    T.get_or_init(|| {
        let mut t = [0u32; 64];
        for (i, slot) in t.iter_mut().enumerate() {
            *slot = (((i as f64 + 1.0).sin().abs()) * 4294967296.0) as u32;
        }
        t
    })
}

/// MD5 compression state.
#[derive(Clone, Debug, Zeroize)]
pub struct Md5Core {
    state: [u32; 4],
}

impl Default for Md5Core {
    fn default() -> Self {
        Md5Core { state: INIT_STATE }
    }
}

impl HashCore for Md5Core {
    const ALGORITHM_ID: &'static str = "MD5";

    fn block_words(&self) -> usize {
        BLOCK_WORDS
    }

    fn reset(&mut self) {
        self.state = INIT_STATE;
    }

    fn process_block(&mut self, words: &[u32], offset: usize) {
        let t = t_table();

        // Little-endian message schedule.
        let mut m = [0u32; 16];
        for (i, slot) in m.iter_mut().enumerate() {
            *slot = words[offset + i].swap_bytes();
        }

        let [mut a, mut b, mut c, mut d] = self.state;

        for i in 0..64 {
            let (f, g) = match i / 16 {
                0 => ((b & c) | (!b & d), i),
                1 => ((d & b) | (!d & c), (5 * i + 1) % 16),
                2 => (b ^ c ^ d, (3 * i + 5) % 16),
                _ => (c ^ (b | !d), (7 * i) % 16),
            };
            let rotated = a
                .wrapping_add(f)
                .wrapping_add(t[i])
                .wrapping_add(m[g])
                .rotate_left(S[i]);
            let next_b = b.wrapping_add(rotated);
            a = d;
            d = c;
            c = b;
            b = next_b;
        }

        self.state[0] = self.state[0].wrapping_add(a);
        self.state[1] = self.state[1].wrapping_add(b);
        self.state[2] = self.state[2].wrapping_add(c);
        self.state[3] = self.state[3].wrapping_add(d);
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
