use wordcrypt_common::{Encoding, WordBuffer};

use super::{Rabbit, RabbitLegacy};
use crate::stream::StreamCipher;

fn key() -> WordBuffer {
    Encoding::Hex.parse("000102030405060708090a0b0c0d0e0f").unwrap()
}

fn iv() -> WordBuffer {
    Encoding::Hex.parse("0001020304050607").unwrap()
}

fn keystream_block(cipher: &mut impl StreamCipher) -> [u32; 4] {
    let mut block = [0u32; 4];
    cipher.process_block(&mut block, 0);
    block
}

// RFC 4503 A.1 zero-key keystream block S[0], emitted in this library's
// byte order (each output word byte-swapped).
#[test]
fn zero_key_first_keystream_block() {
    let zero_key = WordBuffer::from_bytes(&[0u8; 16]);
    let mut cipher = Rabbit::new(&zero_key, None).unwrap();
    let mut block = WordBuffer::from_words(keystream_block(&mut cipher).to_vec());
    assert_eq!(block.to_string(), "02f74a1c26456bf5ecd6a536f05457b1");

    // The legacy variant only differs in key word order, so a zero key
    // collapses both onto the same keystream.
    let mut legacy = RabbitLegacy::new(&zero_key, None).unwrap();
    block = WordBuffer::from_words(keystream_block(&mut legacy).to_vec());
    assert_eq!(block.to_string(), "02f74a1c26456bf5ecd6a536f05457b1");
}

#[test]
fn deterministic_for_same_key_and_iv() {
    let mut a = Rabbit::new(&key(), Some(&iv())).unwrap();
    let mut b = Rabbit::new(&key(), Some(&iv())).unwrap();
    for _ in 0..8 {
        assert_eq!(keystream_block(&mut a), keystream_block(&mut b));
    }
}

#[test]
fn round_trip() {
    let mut enc = Rabbit::new(&key(), Some(&iv())).unwrap();
    let mut dec = Rabbit::new(&key(), Some(&iv())).unwrap();
    let plain = [0x6865_6c6c, 0x6f20_776f, 0x726c_6421, 0x0a0a_0a0a];
    let mut data = plain;
    enc.process_block(&mut data, 0);
    assert_ne!(data, plain);
    dec.process_block(&mut data, 0);
    assert_eq!(data, plain);
}

#[test]
fn iv_changes_keystream() {
    let mut with_iv = Rabbit::new(&key(), Some(&iv())).unwrap();
    let mut without_iv = Rabbit::new(&key(), None).unwrap();
    assert_ne!(
        keystream_block(&mut with_iv),
        keystream_block(&mut without_iv)
    );
}

#[test]
fn legacy_variant_produces_different_keystream() {
    let mut standard = Rabbit::new(&key(), Some(&iv())).unwrap();
    let mut legacy = RabbitLegacy::new(&key(), Some(&iv())).unwrap();
    assert_ne!(keystream_block(&mut standard), keystream_block(&mut legacy));
}

#[test]
fn legacy_round_trip() {
    let mut enc = RabbitLegacy::new(&key(), Some(&iv())).unwrap();
    let mut dec = RabbitLegacy::new(&key(), Some(&iv())).unwrap();
    let plain = [1u32, 2, 3, 4];
    let mut data = plain;
    enc.process_block(&mut data, 0);
    dec.process_block(&mut data, 0);
    assert_eq!(data, plain);
}

#[test]
fn rejects_bad_key_and_iv_lengths() {
    let short_key = Encoding::Hex.parse("00010203").unwrap();
    assert!(Rabbit::new(&short_key, None).is_err());
    let short_iv = Encoding::Hex.parse("0001").unwrap();
    assert!(Rabbit::new(&key(), Some(&short_iv)).is_err());
}
