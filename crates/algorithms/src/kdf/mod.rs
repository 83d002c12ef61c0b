//! Password-based key derivation

pub mod evpkdf;
pub mod pbkdf2;

pub use evpkdf::EvpKdf;
pub use pbkdf2::Pbkdf2;

/// Shared derivation parameters.
///
/// `key_words` is the derived key length in 32-bit words; `iterations` is
/// the work factor. Both derivers default to a 128-bit key and a single
/// iteration, which matches the historical OpenSSL `EVP_BytesToKey`
/// behavior that the password cipher layer depends on. Real password
/// storage wants a far higher iteration count.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct KdfParams {
    /// Derived key length in words.
    pub key_words: usize,
    /// Number of hash iterations per output block.
    pub iterations: u32,
}

impl Default for KdfParams {
    fn default() -> Self {
        KdfParams {
            key_words: 4,
            iterations: 1,
        }
    }
}

impl KdfParams {
    /// Parameters for a `key_words`-word key with the default iteration
    /// count.
    pub fn with_key_words(key_words: usize) -> Self {
        KdfParams {
            key_words,
            ..KdfParams::default()
        }
    }
}
