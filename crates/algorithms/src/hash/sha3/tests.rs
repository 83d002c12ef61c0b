use crate::hash::{HashEngine, Sha3, Sha3Core};

fn digest_with_width(bits: usize, message: &str) -> String {
    let core = Sha3Core::with_output_bits(bits).unwrap();
    let mut engine = HashEngine::with_core(core);
    engine.update_str(message);
    engine.finalize().to_string()
}

#[test]
fn sha3_512_abc() {
    assert_eq!(
        Sha3::digest_str("abc").to_string(),
        "b751850b1a57168a5693cd924b6b096e08f621827444f70d884f5d0240d2712e\
         10e116e9192af3c91a7ec57647e3934057340b4cf408d5a56592f8274eee9f7f"
    );
}

#[test]
fn sha3_512_empty() {
    assert_eq!(
        Sha3::digest_str("").to_string(),
        "a69f73cca23a9ac5c8b567dc185a756e97c982164fe25859e0d1dcc1475c80a6\
         15b2123af1f5f94c11e3e9402c3ac558f500199d95b6d3e301758586281dcd26"
    );
}

#[test]
fn sha3_256_abc() {
    assert_eq!(
        digest_with_width(256, "abc"),
        "3a985da74fe225b2045c172d6bd390bd855f086e3e9d525b46bfe24511431532"
    );
}

#[test]
fn sha3_224_empty() {
    assert_eq!(
        digest_with_width(224, ""),
        "6b4e03423667dbb73b6e15454f0eb1abd4597f9a1b078e3f5b5a6bc7"
    );
}

#[test]
fn sha3_384_abc() {
    assert_eq!(
        digest_with_width(384, "abc"),
        "ec01498288516fc926459f58e2c6ad8df9b473cb0fc08c2596da7cf0e49be4b2\
         98d88cea927ac7f539f1edf228376d25"
    );
}

#[test]
fn rejects_unsupported_width() {
    assert!(Sha3Core::with_output_bits(300).is_err());
}

#[test]
fn streaming_crosses_rate_boundary() {
    // SHA3-512 rate is 72 bytes; 100 bytes forces an absorb mid-stream.
    let msg = "q".repeat(100);
    let mut engine = Sha3::new();
    engine.update_str(&msg[..50]);
    engine.update_str(&msg[50..]);
    assert_eq!(engine.finalize(), Sha3::digest_str(&msg));
}
