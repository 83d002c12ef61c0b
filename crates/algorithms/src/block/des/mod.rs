//! DES and Triple DES block ciphers (FIPS 46-3)
//!
//! DES survives here purely for interoperability with legacy ciphertext; a
//! 56-bit key has no security margin left. Triple DES applies the EDE
//! construction, reusing the first subkey when fewer than three are given.

use zeroize::Zeroize;

use wordcrypt_common::{Error, Result, WordBuffer};

use crate::block::BlockCipher;

// Bit selection tables use FIPS numbering: 1-based from the most
// significant bit of the input.

const IP: [u8; 64] = [
    58, 50, 42, 34, 26, 18, 10, 2, 60, 52, 44, 36, 28, 20, 12, 4, //
    62, 54, 46, 38, 30, 22, 14, 6, 64, 56, 48, 40, 32, 24, 16, 8, //
    57, 49, 41, 33, 25, 17, 9, 1, 59, 51, 43, 35, 27, 19, 11, 3, //
    61, 53, 45, 37, 29, 21, 13, 5, 63, 55, 47, 39, 31, 23, 15, 7,
];

const FP: [u8; 64] = [
    40, 8, 48, 16, 56, 24, 64, 32, 39, 7, 47, 15, 55, 23, 63, 31, //
    38, 6, 46, 14, 54, 22, 62, 30, 37, 5, 45, 13, 53, 21, 61, 29, //
    36, 4, 44, 12, 52, 20, 60, 28, 35, 3, 43, 11, 51, 19, 59, 27, //
    34, 2, 42, 10, 50, 18, 58, 26, 33, 1, 41, 9, 49, 17, 57, 25,
];

const E: [u8; 48] = [
    32, 1, 2, 3, 4, 5, 4, 5, 6, 7, 8, 9, 8, 9, 10, 11, //
    12, 13, 12, 13, 14, 15, 16, 17, 16, 17, 18, 19, 20, 21, 20, 21, //
    22, 23, 24, 25, 24, 25, 26, 27, 28, 29, 28, 29, 30, 31, 32, 1,
];

const P: [u8; 32] = [
    16, 7, 20, 21, 29, 12, 28, 17, 1, 15, 23, 26, 5, 18, 31, 10, //
    2, 8, 24, 14, 32, 27, 3, 9, 19, 13, 30, 6, 22, 11, 4, 25,
];

const PC1: [u8; 56] = [
    57, 49, 41, 33, 25, 17, 9, 1, 58, 50, 42, 34, 26, 18, //
    10, 2, 59, 51, 43, 35, 27, 19, 11, 3, 60, 52, 44, 36, //
    63, 55, 47, 39, 31, 23, 15, 7, 62, 54, 46, 38, 30, 22, //
    14, 6, 61, 53, 45, 37, 29, 21, 13, 5, 28, 20, 12, 4,
];

const PC2: [u8; 48] = [
    14, 17, 11, 24, 1, 5, 3, 28, 15, 6, 21, 10, //
    23, 19, 12, 4, 26, 8, 16, 7, 27, 20, 13, 2, //
    41, 52, 31, 37, 47, 55, 30, 40, 51, 45, 33, 48, //
    44, 49, 39, 56, 34, 53, 46, 42, 50, 36, 29, 32,
];

const SHIFTS: [u32; 16] = [1, 1, 2, 2, 2, 2, 2, 2, 1, 2, 2, 2, 2, 2, 2, 1];

const SBOX: [[u8; 64]; 8] = [
    [
        14, 4, 13, 1, 2, 15, 11, 8, 3, 10, 6, 12, 5, 9, 0, 7, //
        0, 15, 7, 4, 14, 2, 13, 1, 10, 6, 12, 11, 9, 5, 3, 8, //
        4, 1, 14, 8, 13, 6, 2, 11, 15, 12, 9, 7, 3, 10, 5, 0, //
        15, 12, 8, 2, 4, 9, 1, 7, 5, 11, 3, 14, 10, 0, 6, 13,
    ],
    [
        15, 1, 8, 14, 6, 11, 3, 4, 9, 7, 2, 13, 12, 0, 5, 10, //
        3, 13, 4, 7, 15, 2, 8, 14, 12, 0, 1, 10, 6, 9, 11, 5, //
        0, 14, 7, 11, 10, 4, 13, 1, 5, 8, 12, 6, 9, 3, 2, 15, //
        13, 8, 10, 1, 3, 15, 4, 2, 11, 6, 7, 12, 0, 5, 14, 9,
    ],
    [
        10, 0, 9, 14, 6, 3, 15, 5, 1, 13, 12, 7, 11, 4, 2, 8, //
        13, 7, 0, 9, 3, 4, 6, 10, 2, 8, 5, 14, 12, 11, 15, 1, //
        13, 6, 4, 9, 8, 15, 3, 0, 11, 1, 2, 12, 5, 10, 14, 7, //
        1, 10, 13, 0, 6, 9, 8, 7, 4, 15, 14, 3, 11, 5, 2, 12,
    ],
    [
        7, 13, 14, 3, 0, 6, 9, 10, 1, 2, 8, 5, 11, 12, 4, 15, //
        13, 8, 11, 5, 6, 15, 0, 3, 4, 7, 2, 12, 1, 10, 14, 9, //
        10, 6, 9, 0, 12, 11, 7, 13, 15, 1, 3, 14, 5, 2, 8, 4, //
        3, 15, 0, 6, 10, 1, 13, 8, 9, 4, 5, 11, 12, 7, 2, 14,
    ],
    [
        2, 12, 4, 1, 7, 10, 11, 6, 8, 5, 3, 15, 13, 0, 14, 9, //
        14, 11, 2, 12, 4, 7, 13, 1, 5, 0, 15, 10, 3, 9, 8, 6, //
        4, 2, 1, 11, 10, 13, 7, 8, 15, 9, 12, 5, 6, 3, 0, 14, //
        11, 8, 12, 7, 1, 14, 2, 13, 6, 15, 0, 9, 10, 4, 5, 3,
    ],
    [
        12, 1, 10, 15, 9, 2, 6, 8, 0, 13, 3, 4, 14, 7, 5, 11, //
        10, 15, 4, 2, 7, 12, 9, 5, 6, 1, 13, 14, 0, 11, 3, 8, //
        9, 14, 15, 5, 2, 8, 12, 3, 7, 0, 4, 10, 1, 13, 11, 6, //
        4, 3, 2, 12, 9, 5, 15, 10, 11, 14, 1, 7, 6, 0, 8, 13,
    ],
    [
        4, 11, 2, 14, 15, 0, 8, 13, 3, 12, 9, 7, 5, 10, 6, 1, //
        13, 0, 11, 7, 4, 9, 1, 10, 14, 3, 5, 12, 2, 15, 8, 6, //
        1, 4, 11, 13, 12, 3, 7, 14, 10, 15, 6, 8, 0, 5, 9, 2, //
        6, 11, 13, 8, 1, 4, 10, 7, 9, 5, 0, 15, 14, 2, 3, 12,
    ],
    [
        13, 2, 8, 4, 6, 15, 11, 1, 10, 9, 3, 14, 5, 0, 12, 7, //
        1, 15, 13, 8, 10, 3, 7, 4, 12, 5, 6, 11, 0, 14, 9, 2, //
        7, 11, 4, 1, 9, 12, 14, 2, 0, 6, 10, 13, 15, 3, 5, 8, //
        2, 1, 14, 7, 4, 10, 8, 13, 15, 12, 9, 0, 3, 5, 6, 11,
    ],
];

/// Gathers bits of `src` (a `src_bits`-wide value) in table order.
fn permute(src: u64, src_bits: u32, table: &[u8]) -> u64 {
    let mut out = 0u64;
    for &pos in table {
        out = (out << 1) | ((src >> (src_bits - u32::from(pos))) & 1);
    }
    out
}

/// The Feistel function: expand, mix the subkey, substitute, permute.
fn feistel(r: u32, subkey: u64) -> u32 {
    let x = permute(u64::from(r), 32, &E) ^ subkey;
    let mut out = 0u32;
    for (i, sbox) in SBOX.iter().enumerate() {
        let six = ((x >> (42 - 6 * i)) & 0x3f) as usize;
        let row = ((six >> 4) & 0x2) | (six & 0x1);
        let col = (six >> 1) & 0xf;
        out = (out << 4) | u32::from(sbox[row * 16 + col]);
    }
    permute(u64::from(out), 32, &P) as u32
}

/// DES key schedule.
#[derive(Clone, Zeroize)]
pub struct Des {
    subkeys: [u64; 16],
}

impl Des {
    fn from_key_words(words: &[u32]) -> Self {
        let key = (u64::from(words[0]) << 32) | u64::from(words[1]);
        let cd = permute(key, 64, &PC1);
        let mut c = (cd >> 28) & 0x0fff_ffff;
        let mut d = cd & 0x0fff_ffff;

        let mut subkeys = [0u64; 16];
        for (round, subkey) in subkeys.iter_mut().enumerate() {
            let shift = SHIFTS[round];
            c = ((c << shift) | (c >> (28 - shift))) & 0x0fff_ffff;
            d = ((d << shift) | (d >> (28 - shift))) & 0x0fff_ffff;
            *subkey = permute((c << 28) | d, 56, &PC2);
        }
        Des { subkeys }
    }

    fn crypt(&self, block: &mut [u32], reverse: bool) {
        let input = (u64::from(block[0]) << 32) | u64::from(block[1]);
        let permuted = permute(input, 64, &IP);
        let mut l = (permuted >> 32) as u32;
        let mut r = permuted as u32;

        for round in 0..16 {
            let subkey = if reverse {
                self.subkeys[15 - round]
            } else {
                self.subkeys[round]
            };
            let next_r = l ^ feistel(r, subkey);
            l = r;
            r = next_r;
        }

        // Pre-output swaps the halves back.
        let preoutput = (u64::from(r) << 32) | u64::from(l);
        let output = permute(preoutput, 64, &FP);
        block[0] = (output >> 32) as u32;
        block[1] = output as u32;
    }
}

impl BlockCipher for Des {
    const BLOCK_WORDS: usize = 2;

    fn new(key: &WordBuffer) -> Result<Self> {
        if key.sig_bytes() != 8 {
            return Err(Error::param("key", "DES key must be exactly 8 bytes"));
        }
        Ok(Des::from_key_words(key.words()))
    }

    fn encrypt_block(&self, block: &mut [u32]) {
        self.crypt(block, false);
    }

    fn decrypt_block(&self, block: &mut [u32]) {
        self.crypt(block, true);
    }
}

/// Triple DES in EDE configuration.
#[derive(Clone, Zeroize)]
pub struct TripleDes {
    des1: Des,
    des2: Des,
    des3: Des,
}

impl BlockCipher for TripleDes {
    const BLOCK_WORDS: usize = 2;

    fn new(key: &WordBuffer) -> Result<Self> {
        let key_words = key.words();
        let sig_bytes = key.sig_bytes();
        // Exactly 64, 128 or 192 bits; anything longer truncates to 192.
        if !(sig_bytes == 8 || sig_bytes == 16 || sig_bytes >= 24) {
            return Err(Error::param(
                "key",
                "Triple DES key length must be 64, 128, 192 or more bits",
            ));
        }
        let n = sig_bytes / 4;

        let des1 = Des::from_key_words(&key_words[0..2]);
        let des2 = if n < 4 {
            des1.clone()
        } else {
            Des::from_key_words(&key_words[2..4])
        };
        let des3 = if n < 6 {
            des1.clone()
        } else {
            Des::from_key_words(&key_words[4..6])
        };
        Ok(TripleDes { des1, des2, des3 })
    }

    fn encrypt_block(&self, block: &mut [u32]) {
        self.des1.encrypt_block(block);
        self.des2.decrypt_block(block);
        self.des3.encrypt_block(block);
    }

    fn decrypt_block(&self, block: &mut [u32]) {
        self.des3.decrypt_block(block);
        self.des2.encrypt_block(block);
        self.des1.decrypt_block(block);
    }
}
