//! High-level symmetric encryption for the wordcrypt library
//!
//! Builds on the primitives in `wordcrypt-algorithms`: bundles ciphertext
//! with its decryption metadata ([`CipherParams`]), serializes that bundle
//! through interchangeable transport formats ([`Format`]), and offers a
//! single typed entry point ([`encrypt`]/[`decrypt`]) that key-derives on
//! the fly when handed a password instead of a raw key.

#![forbid(unsafe_code)]
#![deny(missing_docs)]

pub mod cipher;
pub mod format;
pub mod params;
pub mod password;
pub mod serializable;

// Re-export main types for convenience
pub use cipher::{decrypt, decrypt_from_string, encrypt, encrypt_to_string, Credential};
pub use format::Format;
pub use params::CipherParams;

// Unified error system, shared with the rest of the workspace
pub use wordcrypt_common::error::{self, validate, Error, Result};
