//! Serialized ciphertext formats
//!
//! The OpenSSL format is wire-compatible with `openssl enc`: when a salt is
//! present the Base64 payload opens with the ASCII magic `Salted__` and an
//! 8-byte salt. The Hex format carries ciphertext only; IV and salt must
//! travel out of band.

use wordcrypt_common::{Encoding, Error, Result, WordBuffer};

use crate::params::CipherParams;

// "Salt" / "ed__" as big-endian words.
const OPENSSL_MAGIC: [u32; 2] = [0x5361_6c74, 0x6564_5f5f];

/// Transport serialization for [`CipherParams`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Format {
    /// `Base64(["Salted__" + salt]? + ciphertext)`.
    #[default]
    OpenSsl,
    /// `Hex(ciphertext)`, metadata discarded.
    Hex,
}

impl Format {
    /// Serializes `params` to a transport string.
    pub fn stringify(&self, params: &CipherParams) -> String {
        match self {
            Format::OpenSsl => {
                let mut payload = WordBuffer::empty();
                if let Some(salt) = params.salt() {
                    payload.concat(&WordBuffer::new(OPENSSL_MAGIC.to_vec(), 8));
                    payload.concat(salt);
                }
                payload.concat(params.ciphertext());
                // Infallible: Base64 encodes any byte sequence.
                Encoding::Base64
                    .stringify(&payload)
                    .expect("base64 encode of raw bytes")
            }
            Format::Hex => params.ciphertext().to_string(),
        }
    }

    /// Parses a transport string back into ciphertext (and salt, for the
    /// OpenSSL format).
    pub fn parse(&self, input: &str) -> Result<CipherParams> {
        match self {
            Format::OpenSsl => {
                let mut payload = Encoding::Base64.parse(input)?;
                let words = payload.words();
                let salted = payload.sig_bytes() >= 16
                    && words[0] == OPENSSL_MAGIC[0]
                    && words[1] == OPENSSL_MAGIC[1];
                if salted {
                    let salt = WordBuffer::from_words(words[2..4].to_vec());
                    let sig_bytes = payload.sig_bytes() - 16;
                    payload.words_mut().drain(..4);
                    payload.set_sig_bytes(sig_bytes);
                    Ok(CipherParams::new(payload).with_salt(salt))
                } else {
                    Ok(CipherParams::new(payload))
                }
            }
            Format::Hex => {
                let ciphertext = Encoding::Hex.parse(input).map_err(|_| Error::Format {
                    context: "hex ciphertext",
                    details: "input is not valid hexadecimal",
                })?;
                Ok(CipherParams::new(ciphertext))
            }
        }
    }
}

#[cfg(test)]
mod tests;
