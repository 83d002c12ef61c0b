use wordcrypt_common::{Encoding, WordBuffer};
use wordcrypt_algorithms::{Aes, CipherConfig, Rc4, TripleDes};

use crate::format::Format;

use super::{decrypt, encrypt};

fn hexbuf(s: &str) -> WordBuffer {
    Encoding::Hex.parse(s).unwrap()
}

#[test]
fn aes_cbc_round_trip_records_metadata() {
    let key = hexbuf("000102030405060708090a0b0c0d0e0f");
    let iv = hexbuf("101112131415161718191a1b1c1d1e1f");
    let cfg = CipherConfig::new().with_iv(iv.clone());
    let message = Encoding::Utf8.parse("attack at dawn").unwrap();

    let params = encrypt::<Aes>(&key, &message, &cfg).unwrap();
    assert_eq!(params.algorithm(), Some("AES"));
    assert_eq!(params.key(), Some(&key));
    assert_eq!(params.iv(), Some(&iv));
    // PKCS#7 pads the 14-byte message to one full block.
    assert_eq!(params.ciphertext().sig_bytes(), 16);

    let recovered = decrypt::<Aes>(&key, &params, &cfg).unwrap();
    assert_eq!(recovered, message);
}

#[test]
fn triple_des_round_trip() {
    let key = hexbuf("0123456789abcdef23456789abcdef01456789abcdef0123");
    let iv = hexbuf("fedcba9876543210");
    let cfg = CipherConfig::new().with_iv(iv);
    let message = Encoding::Utf8.parse("sixteen byte msg").unwrap();

    let params = encrypt::<TripleDes>(&key, &message, &cfg).unwrap();
    assert_eq!(params.algorithm(), Some("3DES"));
    // Aligned input still gains a whole padding block.
    assert_eq!(params.ciphertext().sig_bytes(), 24);

    let recovered = decrypt::<TripleDes>(&key, &params, &cfg).unwrap();
    assert_eq!(recovered, message);
}

#[test]
fn stream_cipher_needs_no_iv_and_keeps_length() {
    let key = hexbuf("0102030405060708090a0b0c0d0e0f10");
    let cfg = CipherConfig::new();
    let message = Encoding::Utf8.parse("short").unwrap();

    let params = encrypt::<Rc4>(&key, &message, &cfg).unwrap();
    assert_eq!(params.iv(), None);
    assert_eq!(params.ciphertext().sig_bytes(), 5);

    let recovered = decrypt::<Rc4>(&key, &params, &cfg).unwrap();
    assert_eq!(recovered, message);
}

#[test]
fn bundle_survives_openssl_serialization() {
    let key = hexbuf("000102030405060708090a0b0c0d0e0f");
    let iv = hexbuf("101112131415161718191a1b1c1d1e1f");
    let cfg = CipherConfig::new().with_iv(iv);
    let message = Encoding::Utf8.parse("serialize me").unwrap();

    let params = encrypt::<Aes>(&key, &message, &cfg).unwrap();
    let wire = Format::OpenSsl.stringify(&params);
    let parsed = Format::OpenSsl.parse(&wire).unwrap();

    let recovered = decrypt::<Aes>(&key, &parsed, &cfg).unwrap();
    assert_eq!(recovered, message);
}

#[test]
fn wrong_key_fails_padding_check() {
    let key = hexbuf("000102030405060708090a0b0c0d0e0f");
    let wrong = hexbuf("ffffffffffffffffffffffffffffffff");
    let iv = hexbuf("101112131415161718191a1b1c1d1e1f");
    let cfg = CipherConfig::new().with_iv(iv);
    let message = Encoding::Utf8.parse("attack at dawn").unwrap();

    let params = encrypt::<Aes>(&key, &message, &cfg).unwrap();
    let result = decrypt::<Aes>(&wrong, &params, &cfg);
    // Either a padding error or garbage that is not the message; with
    // overwhelming probability the PKCS#7 check fails outright.
    match result {
        Err(_) => {}
        Ok(out) => assert_ne!(out, message),
    }
}
