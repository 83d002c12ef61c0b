use wordcrypt_common::{Encoding, WordBuffer};

use crate::hash::{Md5Core, Sha1Core, Sha256Core};
use crate::mac::Hmac;

// RFC 4231 test case 1.
#[test]
fn hmac_sha256_rfc4231_tc1() {
    let key = WordBuffer::from_bytes(&[0x0b; 20]);
    let mac = Hmac::<Sha256Core>::mac_str(&key, "Hi There");
    assert_eq!(
        mac.to_string(),
        "b0344c61d8db38535ca8afceaf0bf12b881dc200c9833da726e9376c2e32cff7"
    );
}

// RFC 4231 test case 2: key shorter than the block size.
#[test]
fn hmac_sha256_rfc4231_tc2() {
    let key = Encoding::Utf8.parse("Jefe").unwrap();
    let mac = Hmac::<Sha256Core>::mac_str(&key, "what do ya want for nothing?");
    assert_eq!(
        mac.to_string(),
        "5bdcc146bf60754e6a042426089575c75a003f089d2739839dec58b964ec3843"
    );
}

// RFC 2104 test case 1.
#[test]
fn hmac_md5_rfc2104_tc1() {
    let key = WordBuffer::from_bytes(&[0x0b; 16]);
    let mac = Hmac::<Md5Core>::mac_str(&key, "Hi There");
    assert_eq!(mac.to_string(), "9294727a3638bb1c13f48ef8158bfc9d");
}

// RFC 2202 test case 3: SHA-1 with a 20-byte key and repeated data.
#[test]
fn hmac_sha1_rfc2202_tc3() {
    let key = WordBuffer::from_bytes(&[0xaa; 20]);
    let data = WordBuffer::from_bytes(&[0xdd; 50]);
    let mac = Hmac::<Sha1Core>::mac(&key, &data);
    assert_eq!(mac.to_string(), "125d7342b9ac11cd91a39af48aa17b4f63f175d3");
}

// RFC 4231 test case 6: key longer than the block size gets pre-hashed.
#[test]
fn hmac_sha256_oversized_key() {
    let key = WordBuffer::from_bytes(&[0xaa; 131]);
    let mac = Hmac::<Sha256Core>::mac_str(&key, "Test Using Larger Than Block-Size Key - Hash Key First");
    assert_eq!(
        mac.to_string(),
        "60e431591ee0b67f0d8a26aacbf5b77f8e0bc6213728c5140546040f0ee37f54"
    );
}

#[test]
fn streaming_matches_one_shot() {
    let key = Encoding::Utf8.parse("Jefe").unwrap();
    let mut hmac = Hmac::<Sha256Core>::new(&key);
    hmac.update_str("what do ya want ");
    hmac.update_str("for nothing?");
    assert_eq!(
        hmac.finalize().to_string(),
        "5bdcc146bf60754e6a042426089575c75a003f089d2739839dec58b964ec3843"
    );
}

#[test]
fn reset_reuses_key() {
    let key = Encoding::Utf8.parse("Jefe").unwrap();
    let mut hmac = Hmac::<Sha256Core>::new(&key);
    hmac.update_str("throwaway message");
    hmac.reset();
    hmac.update_str("what do ya want for nothing?");
    assert_eq!(
        hmac.finalize().to_string(),
        "5bdcc146bf60754e6a042426089575c75a003f089d2739839dec58b964ec3843"
    );
}

#[test]
fn verify_accepts_the_right_tag_and_rejects_others() {
    let key = Encoding::Utf8.parse("Jefe").unwrap();
    let expected = Encoding::Hex
        .parse("5bdcc146bf60754e6a042426089575c75a003f089d2739839dec58b964ec3843")
        .unwrap();

    let mut hmac = Hmac::<Sha256Core>::new(&key);
    hmac.update_str("what do ya want for nothing?");
    assert!(hmac.verify(&expected));

    let mut hmac = Hmac::<Sha256Core>::new(&key);
    hmac.update_str("what do ya want for nothing!");
    assert!(!hmac.verify(&expected));

    // A truncated tag never verifies.
    let mut short = expected.clone();
    short.set_sig_bytes(16);
    short.clamp();
    let mut hmac = Hmac::<Sha256Core>::new(&key);
    hmac.update_str("what do ya want for nothing?");
    assert!(!hmac.verify(&short));
}

#[test]
fn string_keyed_constructor_matches_buffer_keyed() {
    let key = Encoding::Utf8.parse("Jefe").unwrap();
    let from_buffer = Hmac::<Sha256Core>::mac_str(&key, "msg");

    let mut hmac = Hmac::<Sha256Core>::new_str("Jefe");
    hmac.update_str("msg");
    assert_eq!(hmac.finalize(), from_buffer);
}
