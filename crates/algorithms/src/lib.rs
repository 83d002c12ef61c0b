//! Cryptographic primitives for the wordcrypt library
//!
//! Every algorithm here is built on the shared word-buffer data model: input
//! streams through a [`BlockAccumulator`](wordcrypt_common::BlockAccumulator)
//! and the algorithm supplies only its per-block transform and its
//! finalization rule. Digests and ciphers therefore share one streaming
//! contract (`update`/`process` then a single, consuming `finalize`).
//!
//! Conformance targets: MD5 (RFC 1321), SHA-1/224/256/384/512 (FIPS 180-4),
//! SHA-3 (FIPS 202), RIPEMD-160, HMAC (RFC 2104), PBKDF2 (RFC 8018), the
//! OpenSSL `EVP_BytesToKey` legacy derivation, AES (FIPS 197), DES/TripleDES
//! (FIPS 46-3), RC4 and Rabbit (RFC 4503).
//!
//! None of the implementations claim constant-time execution; the contract
//! is bit-exact functional correctness.

#![forbid(unsafe_code)]
#![deny(missing_docs)]

// Unified error system, shared with the rest of the workspace
pub use wordcrypt_common::error::{self, validate, Error, Result};

// Hash function implementations
pub mod hash;
pub use hash::{
    HashCore, HashEngine, Md5, Ripemd160, Sha1, Sha224, Sha256, Sha384, Sha3, Sha512,
};

// MAC implementations
pub mod mac;
pub use mac::Hmac;

// KDF implementations
pub mod kdf;
pub use kdf::{EvpKdf, KdfParams, Pbkdf2};

// Block cipher implementations, modes and padding
pub mod block;
pub use block::{
    modes::CipherMode, padding::Padding, Aes, BlockCipher, Des, TripleDes,
};

// Stream cipher implementations
pub mod stream;
pub use stream::{Rabbit, RabbitLegacy, Rc4, Rc4Drop, StreamCipher};

// Streaming cipher engines and the factory seam used by the high-level crate
pub mod cipher;
pub use cipher::{
    BlockCipherEngine, Cipher, CipherConfig, CipherFactory, Direction, StreamCipherEngine,
};
