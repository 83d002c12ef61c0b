//! # wordcrypt
//!
//! A word-buffer based symmetric cryptography toolkit: streaming digests,
//! HMAC, key derivation, block and stream ciphers with interchangeable
//! chaining modes and padding schemes, and OpenSSL-compatible serialized
//! ciphertexts.
//!
//! ## Crate structure
//!
//! This is a facade crate that re-exports functionality from the workspace
//! sub-crates:
//!
//! - `wordcrypt-common`: the [`WordBuffer`] data model, text encodings,
//!   block accumulation and the shared error type
//! - `wordcrypt-algorithms`: hashes, HMAC, KDFs, ciphers, modes and padding
//! - `wordcrypt-symmetric`: parameter bundles, transport formats and
//!   password-based encryption
//!
//! ## Example
//!
//! ```
//! use wordcrypt::prelude::*;
//!
//! # fn main() -> wordcrypt::Result<()> {
//! let secret = Credential::from("correct horse battery staple");
//! let message = Encoding::Utf8.parse("attack at dawn")?;
//!
//! let wire = symmetric::encrypt_to_string::<Aes>(
//!     &secret,
//!     &message,
//!     &CipherConfig::new(),
//!     Format::OpenSsl,
//! )?;
//! let recovered = symmetric::decrypt_from_string::<Aes>(
//!     &secret,
//!     &wire,
//!     &CipherConfig::new(),
//!     Format::OpenSsl,
//! )?;
//! assert_eq!(recovered, message);
//! # Ok(())
//! # }
//! ```

#![forbid(unsafe_code)]
#![deny(missing_docs)]

pub use wordcrypt_algorithms as algorithms;
pub use wordcrypt_common as common;
pub use wordcrypt_symmetric as symmetric;

pub use wordcrypt_common::{BlockAccumulator, Encoding, Error, Result, WordBuffer};

/// Common imports for wordcrypt users.
pub mod prelude {
    pub use crate::common::{Encoding, WordBuffer};

    pub use crate::algorithms::{
        Aes, CipherConfig, CipherFactory, CipherMode, Des, EvpKdf, HashEngine, Hmac, Md5,
        Padding, Pbkdf2, Rabbit, RabbitLegacy, Rc4, Rc4Drop, Ripemd160, Sha1, Sha224, Sha256,
        Sha3, Sha384, Sha512, TripleDes,
    };

    pub use crate::symmetric::{CipherParams, Credential, Format};

    pub use crate::symmetric;
}
