//! Password-based encryption
//!
//! OpenSSL `enc`-compatible layering: a random 8-byte salt and the password
//! feed `EVP_BytesToKey` (MD5, one iteration), which yields the key and IV
//! in one stretch sized by the algorithm's [`CipherFactory`] geometry. The
//! salt travels inside the returned [`CipherParams`] so the peer can rerun
//! the derivation.

use wordcrypt_common::{Encoding, Error, Result, WordBuffer};
use wordcrypt_algorithms::hash::Md5Core;
use wordcrypt_algorithms::{CipherConfig, CipherFactory, EvpKdf, KdfParams};

use crate::params::CipherParams;
use crate::serializable;

const SALT_BYTES: usize = 8;

/// Derives the key for algorithm `A`, splitting off the IV when the
/// algorithm takes one. `cfg` comes back with the derived IV installed.
fn derive_key<A: CipherFactory>(
    password: &str,
    salt: &WordBuffer,
    cfg: &CipherConfig,
) -> Result<(WordBuffer, CipherConfig)> {
    let password = Encoding::Utf8.parse(password)?;
    let kdf = EvpKdf::<Md5Core>::new(KdfParams::with_key_words(A::KEY_WORDS + A::IV_WORDS));
    let mut derived = kdf.derive(&password, salt);

    let key = derived.split_off_words(A::KEY_WORDS, A::KEY_WORDS * 4);
    let mut cfg = cfg.clone();
    if A::IV_WORDS > 0 {
        // What remains of the stretch is the IV.
        cfg = cfg.with_iv(derived);
    }
    Ok((key, cfg))
}

/// Encrypts `message` under a key derived from `password` and a fresh
/// random salt.
pub fn encrypt<A: CipherFactory>(
    password: &str,
    message: &WordBuffer,
    cfg: &CipherConfig,
) -> Result<CipherParams> {
    let salt = WordBuffer::random(SALT_BYTES)?;
    encrypt_with_salt::<A>(password, &salt, message, cfg)
}

/// Encrypts with a caller-chosen salt. Reusing a salt across messages
/// reuses the derived key and IV, so this exists for deterministic
/// fixtures and interop with externally generated salts.
pub fn encrypt_with_salt<A: CipherFactory>(
    password: &str,
    salt: &WordBuffer,
    message: &WordBuffer,
    cfg: &CipherConfig,
) -> Result<CipherParams> {
    let (key, cfg) = derive_key::<A>(password, salt, cfg)?;
    let params = serializable::encrypt::<A>(&key, message, &cfg)?;
    Ok(params.with_salt(salt.clone()))
}

/// Decrypts the ciphertext in `params`, rerunning the derivation with the
/// recorded salt.
pub fn decrypt<A: CipherFactory>(
    password: &str,
    params: &CipherParams,
    cfg: &CipherConfig,
) -> Result<WordBuffer> {
    let salt = params
        .salt()
        .ok_or_else(|| Error::param("salt", "password decryption requires the KDF salt"))?;
    let (key, cfg) = derive_key::<A>(password, salt, cfg)?;
    serializable::decrypt::<A>(&key, params, &cfg)
}

#[cfg(test)]
mod tests;
