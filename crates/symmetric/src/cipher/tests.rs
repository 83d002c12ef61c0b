use wordcrypt_common::{Encoding, WordBuffer};
use wordcrypt_algorithms::{Aes, CipherConfig, CipherMode, Padding, TripleDes};

use crate::format::Format;

use super::{decrypt, decrypt_from_string, encrypt, encrypt_to_string, Credential};

fn hexbuf(s: &str) -> WordBuffer {
    Encoding::Hex.parse(s).unwrap()
}

#[test]
fn key_credential_dispatches_to_raw_key_path() {
    let key = hexbuf("000102030405060708090a0b0c0d0e0f");
    let iv = hexbuf("101112131415161718191a1b1c1d1e1f");
    let credential = Credential::from(key.clone());
    let cfg = CipherConfig::new().with_iv(iv);
    let message = Encoding::Utf8.parse("dispatch on type").unwrap();

    let params = encrypt::<Aes>(&credential, &message, &cfg).unwrap();
    // Raw-key encryption never invents a salt.
    assert_eq!(params.salt(), None);
    assert_eq!(params.key(), Some(&key));

    let recovered = decrypt::<Aes>(&credential, &params, &cfg).unwrap();
    assert_eq!(recovered, message);
}

#[test]
fn password_credential_salts_and_derives() {
    let credential = Credential::from("hunter2");
    let cfg = CipherConfig::new();
    let message = Encoding::Utf8.parse("dispatch on type").unwrap();

    let params = encrypt::<Aes>(&credential, &message, &cfg).unwrap();
    assert!(params.salt().is_some());
    assert!(params.iv().is_some());

    let recovered = decrypt::<Aes>(&credential, &params, &cfg).unwrap();
    assert_eq!(recovered, message);
}

#[test]
fn string_round_trip_openssl() {
    let credential = Credential::from("open sesame");
    let cfg = CipherConfig::new();
    let message = Encoding::Utf8.parse("wire format round trip").unwrap();

    let wire = encrypt_to_string::<Aes>(&credential, &message, &cfg, Format::OpenSsl).unwrap();
    assert!(wire.starts_with("U2FsdGVkX1"));

    let recovered =
        decrypt_from_string::<Aes>(&credential, &wire, &cfg, Format::OpenSsl).unwrap();
    assert_eq!(recovered, message);
}

#[test]
fn string_round_trip_hex_with_raw_key() {
    // Hex drops salt and IV, so it only works where nothing but the
    // ciphertext is needed on the far side.
    let key = hexbuf("0123456789abcdef23456789abcdef01456789abcdef0123");
    let iv = hexbuf("fedcba9876543210");
    let credential = Credential::from(key);
    let cfg = CipherConfig::new().with_iv(iv);
    let message = Encoding::Utf8.parse("hex transport").unwrap();

    let wire = encrypt_to_string::<TripleDes>(&credential, &message, &cfg, Format::Hex).unwrap();
    assert!(wire.chars().all(|c| c.is_ascii_hexdigit()));

    let recovered =
        decrypt_from_string::<TripleDes>(&credential, &wire, &cfg, Format::Hex).unwrap();
    assert_eq!(recovered, message);
}

#[test]
fn config_choices_flow_through() {
    let credential = Credential::from("pw");
    let cfg = CipherConfig::new()
        .with_mode(CipherMode::Ctr)
        .with_padding(Padding::None);
    // CTR with no padding keeps the exact message length.
    let message = Encoding::Utf8.parse("13 bytes long").unwrap();

    let params = encrypt::<Aes>(&credential, &message, &cfg).unwrap();
    assert_eq!(params.ciphertext().sig_bytes(), 13);

    let recovered = decrypt::<Aes>(&credential, &params, &cfg).unwrap();
    assert_eq!(recovered, message);
}

mod properties {
    use proptest::prelude::*;

    use wordcrypt_common::{Encoding, WordBuffer};
    use wordcrypt_algorithms::{Aes, CipherConfig};

    use crate::cipher::{decrypt, encrypt, Credential};

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(32))]
        #[test]
        fn arbitrary_messages_round_trip(data in proptest::collection::vec(any::<u8>(), 0..256)) {
            let key = Credential::Key(
                Encoding::Hex.parse("000102030405060708090a0b0c0d0e0f").unwrap(),
            );
            let cfg = CipherConfig::new()
                .with_iv(Encoding::Hex.parse("101112131415161718191a1b1c1d1e1f").unwrap());
            let message = WordBuffer::from_bytes(&data);

            let params = encrypt::<Aes>(&key, &message, &cfg).unwrap();
            prop_assert_eq!(params.ciphertext().sig_bytes() % 16, 0);
            let recovered = decrypt::<Aes>(&key, &params, &cfg).unwrap();
            prop_assert_eq!(recovered, message);
        }
    }
}
