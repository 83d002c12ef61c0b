use wordcrypt_common::{Result, WordBuffer};

use super::{inc_word, CipherMode, ModeRunner};
use crate::block::BlockCipher;

/// Invertible two-word toy cipher; chaining behavior is what is under test.
#[derive(Clone)]
struct ToyCipher;

impl BlockCipher for ToyCipher {
    const BLOCK_WORDS: usize = 2;

    fn new(_key: &WordBuffer) -> Result<Self> {
        Ok(ToyCipher)
    }

    fn encrypt_block(&self, block: &mut [u32]) {
        block[0] = block[0].wrapping_add(0x9e3779b9).rotate_left(5);
        block[1] ^= block[0];
    }

    fn decrypt_block(&self, block: &mut [u32]) {
        block[1] ^= block[0];
        block[0] = block[0].rotate_right(5).wrapping_sub(0x9e3779b9);
    }
}

fn iv() -> WordBuffer {
    WordBuffer::from_words(vec![0x0102_0304, 0x0506_0708])
}

fn round_trip(mode: CipherMode, blocks: &[u32]) {
    let mut enc = ModeRunner::new(mode, Some(&iv()), 2).unwrap();
    let mut dec = ModeRunner::new(mode, Some(&iv()), 2).unwrap();
    let mut data = blocks.to_vec();
    for chunk in data.chunks_mut(2) {
        enc.encrypt_block(&ToyCipher, chunk);
    }
    assert_ne!(data, blocks);
    for chunk in data.chunks_mut(2) {
        dec.decrypt_block(&ToyCipher, chunk);
    }
    assert_eq!(data, blocks);
}

#[test]
fn all_modes_round_trip() {
    let blocks = [1u32, 2, 3, 4, 5, 6, 7, 8];
    for mode in [
        CipherMode::Cbc,
        CipherMode::Cfb,
        CipherMode::Ofb,
        CipherMode::Ctr,
        CipherMode::CtrGladman,
    ] {
        round_trip(mode, &blocks);
    }

    let mut enc = ModeRunner::new(CipherMode::Ecb, None, 2).unwrap();
    let mut dec = ModeRunner::new(CipherMode::Ecb, None, 2).unwrap();
    let mut data = blocks.to_vec();
    for chunk in data.chunks_mut(2) {
        enc.encrypt_block(&ToyCipher, chunk);
    }
    for chunk in data.chunks_mut(2) {
        dec.decrypt_block(&ToyCipher, chunk);
    }
    assert_eq!(data, &blocks);
}

#[test]
fn cbc_chains_identical_plaintext_blocks() {
    let mut enc = ModeRunner::new(CipherMode::Cbc, Some(&iv()), 2).unwrap();
    let mut first = [7u32, 7];
    let mut second = [7u32, 7];
    enc.encrypt_block(&ToyCipher, &mut first);
    enc.encrypt_block(&ToyCipher, &mut second);
    assert_ne!(first, second);
}

#[test]
fn chained_modes_require_iv() {
    assert!(ModeRunner::new(CipherMode::Cbc, None, 2).is_err());
    let short_iv = WordBuffer::from_bytes(&[1, 2, 3]);
    assert!(ModeRunner::new(CipherMode::Ctr, Some(&short_iv), 2).is_err());
}

#[test]
fn gladman_increment_steps_the_top_byte() {
    assert_eq!(inc_word(0x0000_0000), 0x0100_0000);
    assert_eq!(inc_word(0x0100_0000), 0x0200_0000);
    // Top byte overflow clears it and carries into the next byte down.
    assert_eq!(inc_word(0xff00_0000), 0x0001_0000);
    assert_eq!(inc_word(0xffff_ffff), 0x0000_0000);
}

#[test]
fn gladman_counter_carries_into_second_word() {
    let mut counter = vec![0xffff_ffff, 0x0000_0000];
    super::inc_counter(&mut counter);
    assert_eq!(counter, vec![0x0000_0000, 0x0100_0000]);
}
