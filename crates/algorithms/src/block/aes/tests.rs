use wordcrypt_common::WordBuffer;

use super::Aes;
use crate::block::BlockCipher;

// FIPS 197 appendix C example vectors.

fn fips_plaintext() -> [u32; 4] {
    [0x0011_2233, 0x4455_6677, 0x8899_aabb, 0xccdd_eeff]
}

fn sequential_key(len: usize) -> WordBuffer {
    let bytes: Vec<u8> = (0..len as u8).collect();
    WordBuffer::from_bytes(&bytes)
}

#[test]
fn fips197_aes128() {
    let aes = Aes::new(&sequential_key(16)).unwrap();
    let mut block = fips_plaintext();
    aes.encrypt_block(&mut block);
    assert_eq!(block, [0x69c4_e0d8, 0x6a7b_0430, 0xd8cd_b780, 0x70b4_c55a]);
    aes.decrypt_block(&mut block);
    assert_eq!(block, fips_plaintext());
}

#[test]
fn fips197_aes192() {
    let aes = Aes::new(&sequential_key(24)).unwrap();
    let mut block = fips_plaintext();
    aes.encrypt_block(&mut block);
    assert_eq!(block, [0xdda9_7ca4, 0x864c_dfe0, 0x6eaf_70a0, 0xec0d_7191]);
    aes.decrypt_block(&mut block);
    assert_eq!(block, fips_plaintext());
}

#[test]
fn fips197_aes256() {
    let aes = Aes::new(&sequential_key(32)).unwrap();
    let mut block = fips_plaintext();
    aes.encrypt_block(&mut block);
    assert_eq!(block, [0x8ea2_b7ca, 0x5167_45bf, 0xeafc_4990, 0x4b49_6089]);
    aes.decrypt_block(&mut block);
    assert_eq!(block, fips_plaintext());
}

#[test]
fn rejects_odd_key_length() {
    assert!(Aes::new(&sequential_key(20)).is_err());
    assert!(Aes::new(&WordBuffer::empty()).is_err());
}
