//! Raw-key encryption producing serializable parameter bundles
//!
//! The thinnest layer over the engine seam: key-schedule an algorithm
//! through its [`CipherFactory`], run the whole message through, and wrap
//! the result in a [`CipherParams`] carrying everything the peer needs
//! besides the key itself.

use wordcrypt_common::{Result, WordBuffer};
use wordcrypt_algorithms::{Cipher, CipherConfig, CipherFactory, Direction};

use crate::params::CipherParams;

/// Encrypts `message` under a raw `key`.
///
/// The returned bundle records the ciphertext, the key, the IV from `cfg`
/// when one is set, and the resolved algorithm name, chaining mode,
/// padding scheme and block size.
pub fn encrypt<A: CipherFactory>(
    key: &WordBuffer,
    message: &WordBuffer,
    cfg: &CipherConfig,
) -> Result<CipherParams> {
    let engine = A::create(Direction::Encrypt, key, cfg)?;
    let ciphertext = engine.finalize_with(message)?;

    let mut params = CipherParams::new(ciphertext)
        .with_key(key.clone())
        .with_algorithm(A::ALGORITHM_ID)
        .with_mode(cfg.mode())
        .with_padding(cfg.padding())
        .with_block_words(A::BLOCK_WORDS);
    if let Some(iv) = cfg.iv() {
        params = params.with_iv(iv.clone());
    }
    Ok(params)
}

/// Decrypts the ciphertext in `params` under a raw `key`.
pub fn decrypt<A: CipherFactory>(
    key: &WordBuffer,
    params: &CipherParams,
    cfg: &CipherConfig,
) -> Result<WordBuffer> {
    let engine = A::create(Direction::Decrypt, key, cfg)?;
    engine.finalize_with(params.ciphertext())
}

#[cfg(test)]
mod tests;
