//! SHA-1 hash function (FIPS 180-4)
//!
//! Retained for compatibility with existing protocols (it is the default
//! PBKDF2 pseudorandom function here); SHA-1 is not collision resistant and
//! should not secure new designs.

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

/// SHA-1 compression state.
#[derive(Clone, Debug, Zeroize)]
pub struct Sha1Core {
    state: [u32; 5],
}

impl Default for Sha1Core {
    fn default() -> Self {
        Sha1Core { state: INIT_STATE }
    }
}

impl HashCore for Sha1Core {
    const ALGORITHM_ID: &'static str = "SHA-1";

    fn block_words(&self) -> usize {
        BLOCK_WORDS
    }

    fn reset(&mut self) {
        self.state = INIT_STATE;
    }

    fn process_block(&mut self, words: &[u32], offset: usize) {
        let mut w = [0u32; 80];
        w[..16].copy_from_slice(&words[offset..offset + 16]);
        for i in 16..80 {
            w[i] = (w[i - 3] ^ w[i - 8] ^ w[i - 14] ^ w[i - 16]).rotate_left(1);
        }

        let [mut a, mut b, mut c, mut d, mut e] = self.state;

        for (i, &wi) in w.iter().enumerate() {
            let (f, k) = match i / 20 {
                0 => ((b & c) | (!b & d), 0x5a82_7999),
                1 => (b ^ c ^ d, 0x6ed9_eba1),
                2 => ((b & c) | (b & d) | (c & d), 0x8f1b_bcdc),
                _ => (b ^ c ^ d, 0xca62_c1d6),
            };
            let t = a
                .rotate_left(5)
                .wrapping_add(f)
                .wrapping_add(e)
                .wrapping_add(k)
                .wrapping_add(wi);
            e = d;
            d = c;
            c = b.rotate_left(30);
            b = a;
            a = t;
        }

        self.state[0] = self.state[0].wrapping_add(a);
        self.state[1] = self.state[1].wrapping_add(b);
        self.state[2] = self.state[2].wrapping_add(c);
        self.state[3] = self.state[3].wrapping_add(d);
        self.state[4] = self.state[4].wrapping_add(e);
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
            data.words_mut()[base + 14] = (n_bits_total >> 32) as u32;
            data.words_mut()[base + 15] = n_bits_total as u32;

            let byte_len = data.words().len() * 4;
            data.set_sig_bytes(byte_len);
        }

        acc.process(true, |words, offset| self.process_block(words, offset));

        WordBuffer::from_words(self.state.to_vec())
    }
}
