//! SHA-2 hash function family (FIPS 180-4)
//!
//! SHA-224 and SHA-256 share the 32-bit compression path; SHA-384 and
//! SHA-512 share the 64-bit path. The truncated variants differ only in
//! their initial vectors and in how many output words they keep.
//!
//! The 64-bit variants carry their state as `u64` lanes but consume and emit
//! 32-bit words: each message lane is assembled from a big-endian word pair
//! and each state lane is split back into two words on output.

use zeroize::Zeroize;

use wordcrypt_common::{BlockAccumulator, WordBuffer};

use super::HashCore;

const BLOCK_WORDS_256: usize = 16;
const BLOCK_WORDS_512: usize = 32;

// SHA-256 round constants
const K256: [u32; 64] = [
    0x428a2f98, 0x71374491, 0xb5c0fbcf, 0xe9b5dba5, 0x3956c25b, 0x59f111f1, 0x923f82a4, 0xab1c5ed5,
    0xd807aa98, 0x12835b01, 0x243185be, 0x550c7dc3, 0x72be5d74, 0x80deb1fe, 0x9bdc06a7, 0xc19bf174,
    0xe49b69c1, 0xefbe4786, 0x0fc19dc6, 0x240ca1cc, 0x2de92c6f, 0x4a7484aa, 0x5cb0a9dc, 0x76f988da,
    0x983e5152, 0xa831c66d, 0xb00327c8, 0xbf597fc7, 0xc6e00bf3, 0xd5a79147, 0x06ca6351, 0x14292967,
    0x27b70a85, 0x2e1b2138, 0x4d2c6dfc, 0x53380d13, 0x650a7354, 0x766a0abb, 0x81c2c92e, 0x92722c85,
    0xa2bfe8a1, 0xa81a664b, 0xc24b8b70, 0xc76c51a3, 0xd192e819, 0xd6990624, 0xf40e3585, 0x106aa070,
    0x19a4c116, 0x1e376c08, 0x2748774c, 0x34b0bcb5, 0x391c0cb3, 0x4ed8aa4a, 0x5b9cca4f, 0x682e6ff3,
    0x748f82ee, 0x78a5636f, 0x84c87814, 0x8cc70208, 0x90befffa, 0xa4506ceb, 0xbef9a3f7, 0xc67178f2,
];

// SHA-512 round constants
const K512: [u64; 80] = [
    0x428a2f98d728ae22,
    0x7137449123ef65cd,
    0xb5c0fbcfec4d3b2f,
    0xe9b5dba58189dbbc,
    0x3956c25bf348b538,
    0x59f111f1b605d019,
    0x923f82a4af194f9b,
    0xab1c5ed5da6d8118,
    0xd807aa98a3030242,
    0x12835b0145706fbe,
    0x243185be4ee4b28c,
    0x550c7dc3d5ffb4e2,
    0x72be5d74f27b896f,
    0x80deb1fe3b1696b1,
    0x9bdc06a725c71235,
    0xc19bf174cf692694,
    0xe49b69c19ef14ad2,
    0xefbe4786384f25e3,
    0x0fc19dc68b8cd5b5,
    0x240ca1cc77ac9c65,
    0x2de92c6f592b0275,
    0x4a7484aa6ea6e483,
    0x5cb0a9dcbd41fbd4,
    0x76f988da831153b5,
    0x983e5152ee66dfab,
    0xa831c66d2db43210,
    0xb00327c898fb213f,
    0xbf597fc7beef0ee4,
    0xc6e00bf33da88fc2,
    0xd5a79147930aa725,
    0x06ca6351e003826f,
    0x142929670a0e6e70,
    0x27b70a8546d22ffc,
    0x2e1b21385c26c926,
    0x4d2c6dfc5ac42aed,
    0x53380d139d95b3df,
    0x650a73548baf63de,
    0x766a0abb3c77b2a8,
    0x81c2c92e47edaee6,
    0x92722c851482353b,
    0xa2bfe8a14cf10364,
    0xa81a664bbc423001,
    0xc24b8b70d0f89791,
    0xc76c51a30654be30,
    0xd192e819d6ef5218,
    0xd69906245565a910,
    0xf40e35855771202a,
    0x106aa07032bbd1b8,
    0x19a4c116b8d2d0c8,
    0x1e376c085141ab53,
    0x2748774cdf8eeb99,
    0x34b0bcb5e19b48a8,
    0x391c0cb3c5c95a63,
    0x4ed8aa4ae3418acb,
    0x5b9cca4f7763e373,
    0x682e6ff3d6b2b8a3,
    0x748f82ee5defb2fc,
    0x78a5636f43172f60,
    0x84c87814a1f0ab72,
    0x8cc702081a6439ec,
    0x90befffa23631e28,
    0xa4506cebde82bde9,
    0xbef9a3f7b2c67915,
    0xc67178f2e372532b,
    0xca273eceea26619c,
    0xd186b8c721c0c207,
    0xeada7dd6cde0eb1e,
    0xf57d4f7fee6ed178,
    0x06f067aa72176fba,
    0x0a637dc5a2c898a6,
    0x113f9804bef90dae,
    0x1b710b35131c471b,
    0x28db77f523047d84,
    0x32caab7b40c72493,
    0x3c9ebe0a15c9bebc,
    0x431d67c49c100d4c,
    0x4cc5d4becb3e42b6,
    0x597f299cfc657e2a,
    0x5fcb6fab3ad6faec,
    0x6c44198c4a475817,
];

const INIT_256: [u32; 8] = [
    0x6a09_e667,
    0xbb67_ae85,
    0x3c6e_f372,
    0xa54f_f53a,
    0x510e_527f,
    0x9b05_688c,
    0x1f83_d9ab,
    0x5be0_cd19,
];

const INIT_224: [u32; 8] = [
    0xc105_9ed8,
    0x367c_d507,
    0x3070_dd17,
    0xf70e_5939,
    0xffc0_0b31,
    0x6858_1511,
    0x64f9_8fa7,
    0xbefa_4fa4,
];

const INIT_512: [u64; 8] = [
    0x6a09e667f3bcc908,
    0xbb67ae8584caa73b,
    0x3c6ef372fe94f82b,
    0xa54ff53a5f1d36f1,
    0x510e527fade682d1,
    0x9b05688c2b3e6c1f,
    0x1f83d9abfb41bd6b,
    0x5be0cd19137e2179,
];

const INIT_384: [u64; 8] = [
    0xcbbb9d5dc1059ed8,
    0x629a292a367cd507,
    0x9159015a3070dd17,
    0x152fecd8f70e5939,
    0x67332667ffc00b31,
    0x8eb44a8768581511,
    0xdb0c2e0d64f98fa7,
    0x47b5481dbefa4fa4,
];

fn compress256(state: &mut [u32; 8], words: &[u32], offset: usize) {
    let mut w = [0u32; 64];
    w[..16].copy_from_slice(&words[offset..offset + 16]);
    for i in 16..64 {
        let s0 = w[i - 15].rotate_right(7) ^ w[i - 15].rotate_right(18) ^ (w[i - 15] >> 3);
        let s1 = w[i - 2].rotate_right(17) ^ w[i - 2].rotate_right(19) ^ (w[i - 2] >> 10);
        w[i] = w[i - 16]
            .wrapping_add(s0)
            .wrapping_add(w[i - 7])
            .wrapping_add(s1);
    }

    let [mut a, mut b, mut c, mut d, mut e, mut f, mut g, mut h] = *state;

    for i in 0..64 {
        let big_s1 = e.rotate_right(6) ^ e.rotate_right(11) ^ e.rotate_right(25);
        let ch = (e & f) ^ (!e & g);
        let t1 = h
            .wrapping_add(big_s1)
            .wrapping_add(ch)
            .wrapping_add(K256[i])
            .wrapping_add(w[i]);
        let big_s0 = a.rotate_right(2) ^ a.rotate_right(13) ^ a.rotate_right(22);
        let maj = (a & b) ^ (a & c) ^ (b & c);
        let t2 = big_s0.wrapping_add(maj);

        h = g;
        g = f;
        f = e;
        e = d.wrapping_add(t1);
        d = c;
        c = b;
        b = a;
        a = t1.wrapping_add(t2);
    }

    state[0] = state[0].wrapping_add(a);
    state[1] = state[1].wrapping_add(b);
    state[2] = state[2].wrapping_add(c);
    state[3] = state[3].wrapping_add(d);
    state[4] = state[4].wrapping_add(e);
    state[5] = state[5].wrapping_add(f);
    state[6] = state[6].wrapping_add(g);
    state[7] = state[7].wrapping_add(h);
}

fn compress512(state: &mut [u64; 8], words: &[u32], offset: usize) {
    let mut w = [0u64; 80];
    for (i, lane) in w[..16].iter_mut().enumerate() {
        let hi = words[offset + 2 * i] as u64;
        let lo = words[offset + 2 * i + 1] as u64;
        *lane = (hi << 32) | lo;
    }
    for i in 16..80 {
        let s0 = w[i - 15].rotate_right(1) ^ w[i - 15].rotate_right(8) ^ (w[i - 15] >> 7);
        let s1 = w[i - 2].rotate_right(19) ^ w[i - 2].rotate_right(61) ^ (w[i - 2] >> 6);
        w[i] = w[i - 16]
            .wrapping_add(s0)
            .wrapping_add(w[i - 7])
            .wrapping_add(s1);
    }

    let [mut a, mut b, mut c, mut d, mut e, mut f, mut g, mut h] = *state;

    for i in 0..80 {
        let big_s1 = e.rotate_right(14) ^ e.rotate_right(18) ^ e.rotate_right(41);
        let ch = (e & f) ^ (!e & g);
        let t1 = h
            .wrapping_add(big_s1)
            .wrapping_add(ch)
            .wrapping_add(K512[i])
            .wrapping_add(w[i]);
        let big_s0 = a.rotate_right(28) ^ a.rotate_right(34) ^ a.rotate_right(39);
        let maj = (a & b) ^ (a & c) ^ (b & c);
        let t2 = big_s0.wrapping_add(maj);

        h = g;
        g = f;
        f = e;
        e = d.wrapping_add(t1);
        d = c;
        c = b;
        b = a;
        a = t1.wrapping_add(t2);
    }

    state[0] = state[0].wrapping_add(a);
    state[1] = state[1].wrapping_add(b);
    state[2] = state[2].wrapping_add(c);
    state[3] = state[3].wrapping_add(d);
    state[4] = state[4].wrapping_add(e);
    state[5] = state[5].wrapping_add(f);
    state[6] = state[6].wrapping_add(g);
    state[7] = state[7].wrapping_add(h);
}

/// Applies big-endian Merkle-Damgard strengthening for 16-word blocks and
/// drains the accumulator through `compress`.
fn finalize256(acc: &mut BlockAccumulator, mut compress: impl FnMut(&[u32], usize)) {
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
    acc.process(true, |words, offset| compress(words, offset));
}

/// Same strengthening for 32-word blocks. The length field is nominally 128
/// bits; the byte counter is 64-bit, so the upper half is always zero.
fn finalize512(acc: &mut BlockAccumulator, mut compress: impl FnMut(&[u32], usize)) {
    let n_bits_total = acc.total_bytes().wrapping_mul(8);
    {
        let data = acc.data_mut();
        let n_bits_left = data.sig_bytes() * 8;

        let idx = n_bits_left >> 5;
        if data.words().len() <= idx {
            data.words_mut().resize(idx + 1, 0);
        }
        data.words_mut()[idx] |= 0x80u32 << (24 - n_bits_left % 32);

        let base = ((n_bits_left + 128) >> 10) << 5;
        data.words_mut().resize(base + 32, 0);
        data.words_mut()[base + 30] = (n_bits_total >> 32) as u32;
        data.words_mut()[base + 31] = n_bits_total as u32;

        let byte_len = data.words().len() * 4;
        data.set_sig_bytes(byte_len);
    }
    acc.process(true, |words, offset| compress(words, offset));
}

fn split_lanes(state: &[u64; 8], keep_words: usize) -> WordBuffer {
    let mut words = Vec::with_capacity(16);
    for lane in state {
        words.push((lane >> 32) as u32);
        words.push(*lane as u32);
    }
    words.truncate(keep_words);
    WordBuffer::from_words(words)
}

/// SHA-256 compression state.
#[derive(Clone, Debug, Zeroize)]
pub struct Sha256Core {
    state: [u32; 8],
}

impl Default for Sha256Core {
    fn default() -> Self {
        Sha256Core { state: INIT_256 }
    }
}

impl HashCore for Sha256Core {
    const ALGORITHM_ID: &'static str = "SHA-256";

    fn block_words(&self) -> usize {
        BLOCK_WORDS_256
    }

    fn reset(&mut self) {
        self.state = INIT_256;
    }

    fn process_block(&mut self, words: &[u32], offset: usize) {
        compress256(&mut self.state, words, offset);
    }

    fn finalize(&mut self, acc: &mut BlockAccumulator) -> WordBuffer {
        let state = &mut self.state;
        finalize256(acc, |words, offset| compress256(state, words, offset));
        WordBuffer::from_words(self.state.to_vec())
    }
}

/// SHA-224 compression state. SHA-256 with a different initial vector,
/// keeping the first seven output words.
#[derive(Clone, Debug, Zeroize)]
pub struct Sha224Core {
    state: [u32; 8],
}

impl Default for Sha224Core {
    fn default() -> Self {
        Sha224Core { state: INIT_224 }
    }
}

impl HashCore for Sha224Core {
    const ALGORITHM_ID: &'static str = "SHA-224";

    fn block_words(&self) -> usize {
        BLOCK_WORDS_256
    }

    fn reset(&mut self) {
        self.state = INIT_224;
    }

    fn process_block(&mut self, words: &[u32], offset: usize) {
        compress256(&mut self.state, words, offset);
    }

    fn finalize(&mut self, acc: &mut BlockAccumulator) -> WordBuffer {
        let state = &mut self.state;
        finalize256(acc, |words, offset| compress256(state, words, offset));
        WordBuffer::from_words(self.state[..7].to_vec())
    }
}

/// SHA-512 compression state.
#[derive(Clone, Debug, Zeroize)]
pub struct Sha512Core {
    state: [u64; 8],
}

impl Default for Sha512Core {
    fn default() -> Self {
        Sha512Core { state: INIT_512 }
    }
}

impl HashCore for Sha512Core {
    const ALGORITHM_ID: &'static str = "SHA-512";

    fn block_words(&self) -> usize {
        BLOCK_WORDS_512
    }

    fn reset(&mut self) {
        self.state = INIT_512;
    }

    fn process_block(&mut self, words: &[u32], offset: usize) {
        compress512(&mut self.state, words, offset);
    }

    fn finalize(&mut self, acc: &mut BlockAccumulator) -> WordBuffer {
        let state = &mut self.state;
        finalize512(acc, |words, offset| compress512(state, words, offset));
        split_lanes(&self.state, 16)
    }
}

/// SHA-384 compression state. SHA-512 with a different initial vector,
/// keeping the first twelve output words.
#[derive(Clone, Debug, Zeroize)]
pub struct Sha384Core {
    state: [u64; 8],
}

impl Default for Sha384Core {
    fn default() -> Self {
        Sha384Core { state: INIT_384 }
    }
}

impl HashCore for Sha384Core {
    const ALGORITHM_ID: &'static str = "SHA-384";

    fn block_words(&self) -> usize {
        BLOCK_WORDS_512
    }

    fn reset(&mut self) {
        self.state = INIT_384;
    }

    fn process_block(&mut self, words: &[u32], offset: usize) {
        compress512(&mut self.state, words, offset);
    }

    fn finalize(&mut self, acc: &mut BlockAccumulator) -> WordBuffer {
        let state = &mut self.state;
        finalize512(acc, |words, offset| compress512(state, words, offset));
        split_lanes(&self.state, 12)
    }
}
