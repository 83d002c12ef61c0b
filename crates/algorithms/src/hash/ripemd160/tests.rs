use crate::hash::Ripemd160;

#[test]
fn empty() {
    assert_eq!(
        Ripemd160::digest_str("").to_string(),
        "9c1185a5c5e9fc54612808977ee8f548b2258d31"
    );
}

#[test]
fn abc() {
    assert_eq!(
        Ripemd160::digest_str("abc").to_string(),
        "8eb208f7e05d987a9b044a8e98c6b087f15a0bfc"
    );
}

#[test]
fn message_digest() {
    assert_eq!(
        Ripemd160::digest_str("message digest").to_string(),
        "5d0689ef49d2fae572b881b123a85ffa21595f36"
    );
}

#[test]
fn streaming_matches_one_shot() {
    let msg = "a".repeat(200);
    let mut engine = Ripemd160::new();
    engine.update_str(&msg[..63]);
    engine.update_str(&msg[63..]);
    assert_eq!(engine.finalize(), Ripemd160::digest_str(&msg));
}
