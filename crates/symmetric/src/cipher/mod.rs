//! Unified encryption entry points
//!
//! One pair of functions covers both credential kinds: hand them a raw
//! [`WordBuffer`] key and they run the serializable path directly, hand
//! them a password and they salt and key-derive first. The `*_string`
//! variants additionally run the transport [`Format`] on the way in or out.

use zeroize::Zeroize;

use wordcrypt_common::{Result, WordBuffer};
use wordcrypt_algorithms::{CipherConfig, CipherFactory};

use crate::format::Format;
use crate::params::CipherParams;
use crate::{password, serializable};

/// The secret handed to [`encrypt`] and [`decrypt`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Credential {
    /// A raw key, used as-is.
    Key(WordBuffer),
    /// A password, stretched into key and IV with a fresh salt.
    Password(String),
}

impl From<WordBuffer> for Credential {
    fn from(key: WordBuffer) -> Self {
        Credential::Key(key)
    }
}

impl From<&str> for Credential {
    fn from(password: &str) -> Self {
        Credential::Password(password.to_owned())
    }
}

impl Zeroize for Credential {
    fn zeroize(&mut self) {
        match self {
            Credential::Key(key) => key.zeroize(),
            Credential::Password(password) => password.zeroize(),
        }
    }
}

/// Encrypts `message` with algorithm `A` under either credential kind.
pub fn encrypt<A: CipherFactory>(
    credential: &Credential,
    message: &WordBuffer,
    cfg: &CipherConfig,
) -> Result<CipherParams> {
    match credential {
        Credential::Key(key) => serializable::encrypt::<A>(key, message, cfg),
        Credential::Password(password) => password::encrypt::<A>(password, message, cfg),
    }
}

/// Decrypts the ciphertext in `params` under either credential kind.
pub fn decrypt<A: CipherFactory>(
    credential: &Credential,
    params: &CipherParams,
    cfg: &CipherConfig,
) -> Result<WordBuffer> {
    match credential {
        Credential::Key(key) => serializable::decrypt::<A>(key, params, cfg),
        Credential::Password(password) => password::decrypt::<A>(password, params, cfg),
    }
}

/// Encrypts and serializes in one step.
pub fn encrypt_to_string<A: CipherFactory>(
    credential: &Credential,
    message: &WordBuffer,
    cfg: &CipherConfig,
    format: Format,
) -> Result<String> {
    let params = encrypt::<A>(credential, message, cfg)?;
    Ok(format.stringify(&params))
}

/// Parses and decrypts in one step.
pub fn decrypt_from_string<A: CipherFactory>(
    credential: &Credential,
    input: &str,
    cfg: &CipherConfig,
    format: Format,
) -> Result<WordBuffer> {
    let params = format.parse(input)?;
    decrypt::<A>(credential, &params, cfg)
}

#[cfg(test)]
mod tests;
