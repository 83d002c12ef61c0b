//! AES block cipher (FIPS 197)
//!
//! Table-driven implementation: the S-boxes and the combined
//! SubBytes/MixColumns tables are generated from the GF(2^8) arithmetic on
//! first use and shared process-wide. Accepts 128, 192 and 256 bit keys.

use std::sync::OnceLock;

use zeroize::Zeroize;

use wordcrypt_common::{Error, Result, WordBuffer};

use crate::block::BlockCipher;

const RCON: [u32; 11] = [0x00, 0x01, 0x02, 0x04, 0x08, 0x10, 0x20, 0x40, 0x80, 0x1b, 0x36];

struct AesTables {
    sbox: [u8; 256],
    inv_sbox: [u8; 256],
    sub_mix: [[u32; 256]; 4],
    inv_sub_mix: [[u32; 256]; 4],
}

/// Walks the GF(2^8) multiplicative group to fill the S-boxes and the
/// round-transform tables in one pass.
fn tables() -> &'static AesTables {
    static TABLES: OnceLock<AesTables> = OnceLock::new();
    TABLES.get_or_init(|| {
        // Doubling table over the AES field polynomial 0x11b.
        let mut d = [0u32; 256];
        for (i, slot) in d.iter_mut().enumerate() {
            let i = i as u32;
            *slot = if i < 128 { i << 1 } else { (i << 1) ^ 0x11b };
        }

        let mut t = AesTables {
            sbox: [0; 256],
            inv_sbox: [0; 256],
            sub_mix: [[0; 256]; 4],
            inv_sub_mix: [[0; 256]; 4],
        };

        let mut x: u32 = 0;
        let mut xi: u32 = 0;
        for _ in 0..256 {
            // Affine transform of the inverse element.
            let mut sx = xi ^ (xi << 1) ^ (xi << 2) ^ (xi << 3) ^ (xi << 4);
            sx = (sx >> 8) ^ (sx & 0xff) ^ 0x63;
            t.sbox[x as usize] = sx as u8;
            t.inv_sbox[sx as usize] = x as u8;

            let x2 = d[x as usize];
            let x4 = d[x2 as usize];
            let x8 = d[x4 as usize];

            // Forward: SubBytes folded with MixColumns.
            let tw = (d[sx as usize].wrapping_mul(0x101)) ^ sx.wrapping_mul(0x0101_0100);
            t.sub_mix[0][x as usize] = tw.rotate_left(24);
            t.sub_mix[1][x as usize] = tw.rotate_left(16);
            t.sub_mix[2][x as usize] = tw.rotate_left(8);
            t.sub_mix[3][x as usize] = tw;

            // Inverse: InvSubBytes folded with InvMixColumns.
            let tw = x8.wrapping_mul(0x0101_0101)
                ^ x4.wrapping_mul(0x0001_0001)
                ^ x2.wrapping_mul(0x101)
                ^ x.wrapping_mul(0x0101_0100);
            t.inv_sub_mix[0][sx as usize] = tw.rotate_left(24);
            t.inv_sub_mix[1][sx as usize] = tw.rotate_left(16);
            t.inv_sub_mix[2][sx as usize] = tw.rotate_left(8);
            t.inv_sub_mix[3][sx as usize] = tw;

            if x == 0 {
                x = 1;
                xi = 1;
            } else {
                x = x2 ^ d[d[d[(x8 ^ x2) as usize] as usize] as usize];
                xi ^= d[d[xi as usize] as usize];
            }
        }

        t
    })
}

/// AES key schedule.
#[derive(Clone, Zeroize)]
pub struct Aes {
    key_schedule: Vec<u32>,
    inv_key_schedule: Vec<u32>,
    n_rounds: usize,
}

impl Aes {
    fn sub_word(word: u32, sbox: &[u8; 256]) -> u32 {
        (u32::from(sbox[(word >> 24) as usize]) << 24)
            | (u32::from(sbox[((word >> 16) & 0xff) as usize]) << 16)
            | (u32::from(sbox[((word >> 8) & 0xff) as usize]) << 8)
            | u32::from(sbox[(word & 0xff) as usize])
    }

    fn crypt_block(
        &self,
        block: &mut [u32],
        key_schedule: &[u32],
        sub_mix: &[[u32; 256]; 4],
        sbox: &[u8; 256],
    ) {
        let mut s0 = block[0] ^ key_schedule[0];
        let mut s1 = block[1] ^ key_schedule[1];
        let mut s2 = block[2] ^ key_schedule[2];
        let mut s3 = block[3] ^ key_schedule[3];
        let mut ks_row = 4;

        for _ in 1..self.n_rounds {
            let t0 = sub_mix[0][(s0 >> 24) as usize]
                ^ sub_mix[1][((s1 >> 16) & 0xff) as usize]
                ^ sub_mix[2][((s2 >> 8) & 0xff) as usize]
                ^ sub_mix[3][(s3 & 0xff) as usize]
                ^ key_schedule[ks_row];
            let t1 = sub_mix[0][(s1 >> 24) as usize]
                ^ sub_mix[1][((s2 >> 16) & 0xff) as usize]
                ^ sub_mix[2][((s3 >> 8) & 0xff) as usize]
                ^ sub_mix[3][(s0 & 0xff) as usize]
                ^ key_schedule[ks_row + 1];
            let t2 = sub_mix[0][(s2 >> 24) as usize]
                ^ sub_mix[1][((s3 >> 16) & 0xff) as usize]
                ^ sub_mix[2][((s0 >> 8) & 0xff) as usize]
                ^ sub_mix[3][(s1 & 0xff) as usize]
                ^ key_schedule[ks_row + 2];
            let t3 = sub_mix[0][(s3 >> 24) as usize]
                ^ sub_mix[1][((s0 >> 16) & 0xff) as usize]
                ^ sub_mix[2][((s1 >> 8) & 0xff) as usize]
                ^ sub_mix[3][(s2 & 0xff) as usize]
                ^ key_schedule[ks_row + 3];
            ks_row += 4;
            s0 = t0;
            s1 = t1;
            s2 = t2;
            s3 = t3;
        }

        // Final round: SubBytes and ShiftRows without MixColumns.
        block[0] = ((u32::from(sbox[(s0 >> 24) as usize]) << 24)
            | (u32::from(sbox[((s1 >> 16) & 0xff) as usize]) << 16)
            | (u32::from(sbox[((s2 >> 8) & 0xff) as usize]) << 8)
            | u32::from(sbox[(s3 & 0xff) as usize]))
            ^ key_schedule[ks_row];
        block[1] = ((u32::from(sbox[(s1 >> 24) as usize]) << 24)
            | (u32::from(sbox[((s2 >> 16) & 0xff) as usize]) << 16)
            | (u32::from(sbox[((s3 >> 8) & 0xff) as usize]) << 8)
            | u32::from(sbox[(s0 & 0xff) as usize]))
            ^ key_schedule[ks_row + 1];
        block[2] = ((u32::from(sbox[(s2 >> 24) as usize]) << 24)
            | (u32::from(sbox[((s3 >> 16) & 0xff) as usize]) << 16)
            | (u32::from(sbox[((s0 >> 8) & 0xff) as usize]) << 8)
            | u32::from(sbox[(s1 & 0xff) as usize]))
            ^ key_schedule[ks_row + 2];
        block[3] = ((u32::from(sbox[(s3 >> 24) as usize]) << 24)
            | (u32::from(sbox[((s0 >> 16) & 0xff) as usize]) << 16)
            | (u32::from(sbox[((s1 >> 8) & 0xff) as usize]) << 8)
            | u32::from(sbox[(s2 & 0xff) as usize]))
            ^ key_schedule[ks_row + 3];
    }
}

impl BlockCipher for Aes {
    const BLOCK_WORDS: usize = 4;

    fn new(key: &WordBuffer) -> Result<Self> {
        let key_words = key.sig_bytes() / 4;
        if !matches!(key.sig_bytes(), 16 | 24 | 32) {
            return Err(Error::param("key", "AES key must be 16, 24 or 32 bytes"));
        }

        let t = tables();
        let n_rounds = key_words + 6;
        let ks_rows = (n_rounds + 1) * 4;

        let mut key_schedule = vec![0u32; ks_rows];
        for (row, slot) in key_schedule.iter_mut().enumerate().take(key_words) {
            *slot = key.words()[row];
        }
        for row in key_words..ks_rows {
            let mut tw = key_schedule[row - 1];
            if row % key_words == 0 {
                tw = Self::sub_word(tw.rotate_left(8), &t.sbox);
                tw ^= RCON[row / key_words] << 24;
            } else if key_words > 6 && row % key_words == 4 {
                tw = Self::sub_word(tw, &t.sbox);
            }
            key_schedule[row] = key_schedule[row - key_words] ^ tw;
        }

        let mut inv_key_schedule = vec![0u32; ks_rows];
        for (inv_row, slot) in inv_key_schedule.iter_mut().enumerate() {
            let ks_row = ks_rows - inv_row;
            let tw = if inv_row % 4 != 0 {
                key_schedule[ks_row]
            } else {
                key_schedule[ks_row - 4]
            };
            *slot = if inv_row < 4 || ks_row <= 4 {
                tw
            } else {
                t.inv_sub_mix[0][t.sbox[(tw >> 24) as usize] as usize]
                    ^ t.inv_sub_mix[1][t.sbox[((tw >> 16) & 0xff) as usize] as usize]
                    ^ t.inv_sub_mix[2][t.sbox[((tw >> 8) & 0xff) as usize] as usize]
                    ^ t.inv_sub_mix[3][t.sbox[(tw & 0xff) as usize] as usize]
            };
        }

        Ok(Aes {
            key_schedule,
            inv_key_schedule,
            n_rounds,
        })
    }

    fn encrypt_block(&self, block: &mut [u32]) {
        let t = tables();
        self.crypt_block(block, &self.key_schedule, &t.sub_mix, &t.sbox);
    }

    fn decrypt_block(&self, block: &mut [u32]) {
        let t = tables();
        // The decryption network runs on a column-swapped state.
        block.swap(1, 3);
        self.crypt_block(block, &self.inv_key_schedule, &t.inv_sub_mix, &t.inv_sbox);
        block.swap(1, 3);
    }
}

#[cfg(test)]
mod tests;
