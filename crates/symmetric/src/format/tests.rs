use wordcrypt_common::{Encoding, WordBuffer};

use super::Format;
use crate::params::CipherParams;

#[test]
fn openssl_salted_output_has_magic_prefix() {
    let params = CipherParams::new(WordBuffer::from_bytes(&[0xde, 0xad, 0xbe, 0xef]))
        .with_salt(WordBuffer::from_bytes(&[1, 2, 3, 4, 5, 6, 7, 8]));
    let s = Format::OpenSsl.stringify(&params);
    // Base64 of "Salted__" always opens the string this way.
    assert!(s.starts_with("U2FsdGVkX1"));
}

#[test]
fn openssl_round_trip_with_salt() {
    let ciphertext = WordBuffer::from_bytes(&[0x11; 20]);
    let salt = WordBuffer::from_bytes(&[0xa0, 0xa1, 0xa2, 0xa3, 0xa4, 0xa5, 0xa6, 0xa7]);
    let params = CipherParams::new(ciphertext.clone()).with_salt(salt.clone());

    let parsed = Format::OpenSsl.parse(&Format::OpenSsl.stringify(&params)).unwrap();
    assert_eq!(parsed.ciphertext(), &ciphertext);
    assert_eq!(parsed.salt(), Some(&salt));
}

#[test]
fn openssl_round_trip_without_salt() {
    let ciphertext = WordBuffer::from_bytes(b"unsalted ciphertext bytes");
    let params = CipherParams::new(ciphertext.clone());

    let parsed = Format::OpenSsl.parse(&Format::OpenSsl.stringify(&params)).unwrap();
    assert_eq!(parsed.ciphertext(), &ciphertext);
    assert_eq!(parsed.salt(), None);
}

#[test]
fn openssl_short_payload_is_not_mistaken_for_salted() {
    // Fewer than 16 bytes cannot contain magic plus salt.
    let ciphertext = WordBuffer::from_bytes(b"Salted__");
    let s = Format::OpenSsl.stringify(&CipherParams::new(ciphertext.clone()));
    let parsed = Format::OpenSsl.parse(&s).unwrap();
    assert_eq!(parsed.ciphertext(), &ciphertext);
    assert_eq!(parsed.salt(), None);
}

#[test]
fn hex_format_carries_ciphertext_only() {
    let ciphertext = Encoding::Hex.parse("00ff17").unwrap();
    let params = CipherParams::new(ciphertext.clone())
        .with_salt(WordBuffer::from_bytes(&[9; 8]))
        .with_iv(WordBuffer::from_bytes(&[7; 16]));

    let s = Format::Hex.stringify(&params);
    assert_eq!(s, "00ff17");

    let parsed = Format::Hex.parse(&s).unwrap();
    assert_eq!(parsed.ciphertext(), &ciphertext);
    assert_eq!(parsed.salt(), None);
    assert_eq!(parsed.iv(), None);
}

#[test]
fn hex_parse_rejects_garbage() {
    assert!(Format::Hex.parse("zz").is_err());
}

#[test]
fn unsalted_openssl_is_plain_base64() {
    let params = CipherParams::new(WordBuffer::from_bytes(&[0xde, 0xad, 0xbe, 0xef]));
    assert_eq!(Format::OpenSsl.stringify(&params), "3q2+7w==");
}
