use wordcrypt_common::Encoding;

use super::{Rc4, Rc4Drop};
use crate::stream::StreamCipher;

fn encrypt(cipher: &mut impl StreamCipher, plaintext: &str) -> String {
    let mut data = Encoding::Utf8.parse(plaintext).unwrap();
    let n_words = data.words().len();
    for i in 0..n_words {
        cipher.process_block(data.words_mut(), i);
    }
    data.to_string()
}

// The canonical RC4 examples from the original Usenet posting.

#[test]
fn key_plaintext_vector() {
    let key = Encoding::Utf8.parse("Key").unwrap();
    let mut rc4 = Rc4::new(&key).unwrap();
    let out = encrypt(&mut rc4, "Plaintext");
    assert!(out.starts_with("bbf316e8d940af0ad3"));
}

#[test]
fn wiki_pedia_vector() {
    let key = Encoding::Utf8.parse("Wiki").unwrap();
    let mut rc4 = Rc4::new(&key).unwrap();
    let out = encrypt(&mut rc4, "pedia");
    assert!(out.starts_with("1021bf0420"));
}

#[test]
fn secret_attack_vector() {
    let key = Encoding::Utf8.parse("Secret").unwrap();
    let mut rc4 = Rc4::new(&key).unwrap();
    let out = encrypt(&mut rc4, "Attack at dawn");
    assert!(out.starts_with("45a01f645fc35b383552544b9bf5"));
}

#[test]
fn empty_key_rejected() {
    let key = Encoding::Utf8.parse("").unwrap();
    assert!(Rc4::new(&key).is_err());
}

#[test]
fn drop_zero_matches_plain_rc4() {
    let key = Encoding::Utf8.parse("Key").unwrap();
    let mut plain = Rc4::new(&key).unwrap();
    let mut dropped = Rc4Drop::with_drop_words(&key, 0).unwrap();
    assert_eq!(encrypt(&mut plain, "Plaintext"), encrypt(&mut dropped, "Plaintext"));
}

#[test]
fn drop_skips_early_keystream() {
    let key = Encoding::Utf8.parse("Key").unwrap();
    let mut plain = Rc4::new(&key).unwrap();
    let mut reference = Rc4::new(&key).unwrap();
    let mut scratch = [0u32; 1];
    for _ in 0..192 {
        reference.process_block(&mut scratch, 0);
    }
    let mut dropped = Rc4Drop::new(&key).unwrap();
    let a = encrypt(&mut reference, "Plaintext");
    let b = encrypt(&mut dropped, "Plaintext");
    assert_eq!(a, b);
    assert_ne!(a, encrypt(&mut plain, "Plaintext"));
}
