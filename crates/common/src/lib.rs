//! Shared data model for the wordcrypt library
//!
//! This crate provides the pieces every other wordcrypt crate builds on:
//!
//! - [`WordBuffer`]: a buffer of 32-bit big-endian words with an exact
//!   significant-byte count, appendable at byte (not word) granularity
//! - [`Encoding`]: string encoders/decoders (Hex, Latin1, UTF-8, UTF-16,
//!   Base64) between text and word buffers
//! - [`BlockAccumulator`]: the streaming engine that buffers arbitrary-length
//!   input and releases whole fixed-size blocks to a transform callback
//! - the unified [`Error`]/[`Result`] system with `validate` helpers

#![forbid(unsafe_code)]
#![deny(missing_docs)]

// Error module and re-exports
pub mod error;
pub use error::{validate, Error, Result};

// Word buffer data model
pub mod word;
pub use word::WordBuffer;

// String encoders
pub mod encoding;
pub use encoding::Encoding;

// Streaming block accumulation
pub mod accumulator;
pub use accumulator::BlockAccumulator;
