use wordcrypt_common::{Encoding, WordBuffer};
use wordcrypt_algorithms::{Aes, CipherConfig, Rabbit, Rc4};

use crate::format::Format;

use super::{decrypt, encrypt};

#[test]
fn aes_password_round_trip() {
    let cfg = CipherConfig::new();
    let message = Encoding::Utf8.parse("the quick brown fox").unwrap();

    let params = encrypt::<Aes>("correct horse", &message, &cfg).unwrap();
    assert_eq!(params.algorithm(), Some("AES"));
    assert_eq!(params.salt().map(WordBuffer::sig_bytes), Some(8));
    // 256-bit key, 128-bit IV out of one derivation.
    assert_eq!(params.key().map(WordBuffer::sig_bytes), Some(32));
    assert_eq!(params.iv().map(WordBuffer::sig_bytes), Some(16));

    let recovered = decrypt::<Aes>("correct horse", &params, &cfg).unwrap();
    assert_eq!(recovered, message);
}

#[test]
fn wrong_password_does_not_recover() {
    let cfg = CipherConfig::new();
    let message = Encoding::Utf8.parse("the quick brown fox").unwrap();

    let params = encrypt::<Aes>("right", &message, &cfg).unwrap();
    match decrypt::<Aes>("wrong", &params, &cfg) {
        Err(_) => {}
        Ok(out) => assert_ne!(out, message),
    }
}

#[test]
fn fresh_salt_per_message() {
    let cfg = CipherConfig::new();
    let message = Encoding::Utf8.parse("same input twice").unwrap();

    let a = encrypt::<Aes>("pw", &message, &cfg).unwrap();
    let b = encrypt::<Aes>("pw", &message, &cfg).unwrap();
    assert_ne!(a.salt(), b.salt());
    assert_ne!(a.ciphertext(), b.ciphertext());
}

#[test]
fn decrypt_without_salt_is_an_error() {
    let cfg = CipherConfig::new();
    let message = Encoding::Utf8.parse("needs salt").unwrap();

    let params = encrypt::<Aes>("pw", &message, &cfg).unwrap();
    let stripped = crate::params::CipherParams::new(params.ciphertext().clone());
    assert!(decrypt::<Aes>("pw", &stripped, &cfg).is_err());
}

#[test]
fn iv_less_stream_cipher_derives_key_only() {
    let cfg = CipherConfig::new();
    let message = Encoding::Utf8.parse("keystream me").unwrap();

    let params = encrypt::<Rc4>("pw", &message, &cfg).unwrap();
    assert_eq!(params.iv(), None);
    assert_eq!(params.key().map(WordBuffer::sig_bytes), Some(32));

    let recovered = decrypt::<Rc4>("pw", &params, &cfg).unwrap();
    assert_eq!(recovered, message);
}

#[test]
fn rabbit_gets_derived_iv() {
    let cfg = CipherConfig::new();
    let message = Encoding::Utf8.parse("hop hop").unwrap();

    let params = encrypt::<Rabbit>("pw", &message, &cfg).unwrap();
    assert_eq!(params.key().map(WordBuffer::sig_bytes), Some(16));
    assert_eq!(params.iv().map(WordBuffer::sig_bytes), Some(8));

    let recovered = decrypt::<Rabbit>("pw", &params, &cfg).unwrap();
    assert_eq!(recovered, message);
}

#[test]
fn salted_bundle_survives_openssl_wire_format() {
    let cfg = CipherConfig::new();
    let message = Encoding::Utf8.parse("over the wire").unwrap();

    let params = encrypt::<Aes>("pw", &message, &cfg).unwrap();
    let wire = Format::OpenSsl.stringify(&params);
    let parsed = Format::OpenSsl.parse(&wire).unwrap();

    let recovered = decrypt::<Aes>("pw", &parsed, &cfg).unwrap();
    assert_eq!(recovered, message);
}

#[test]
fn explicit_salt_is_deterministic() {
    let cfg = CipherConfig::new();
    let salt = Encoding::Hex.parse("0001020304050607").unwrap();
    let message = Encoding::Utf8.parse("repeatable").unwrap();

    let a = super::encrypt_with_salt::<Aes>("pw", &salt, &message, &cfg).unwrap();
    let b = super::encrypt_with_salt::<Aes>("pw", &salt, &message, &cfg).unwrap();
    assert_eq!(a.ciphertext(), b.ciphertext());
    assert_eq!(a.salt(), Some(&salt));

    let recovered = decrypt::<Aes>("pw", &a, &cfg).unwrap();
    assert_eq!(recovered, message);
}
