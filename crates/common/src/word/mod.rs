//! The `WordBuffer` data model
//!
//! A `WordBuffer` is an ordered sequence of 32-bit big-endian words plus an
//! exact significant-byte count. The byte count is independent of the
//! allocated word count: bytes past `sig_bytes` inside the final word are
//! garbage until [`WordBuffer::clamp`] masks them away. Appending with
//! [`WordBuffer::concat`] happens at byte granularity, not word granularity:
//! a buffer holding 5 significant bytes continues mid-word.

use std::fmt;

use zeroize::Zeroize;

use crate::error::{Error, Result};

/// Buffer of 32-bit big-endian words with an exact significant-byte count.
///
/// Invariant: `sig_bytes <= words.len() * 4`.
#[derive(Clone, Debug, Default, Zeroize)]
pub struct WordBuffer {
    words: Vec<u32>,
    sig_bytes: usize,
}

/// Equality covers the significant bytes only. Garbage bits past
/// `sig_bytes` in the final word and any extra allocated words are
/// ignored, so an unclamped buffer equals its clamped form.
impl PartialEq for WordBuffer {
    fn eq(&self, other: &Self) -> bool {
        self.sig_bytes == other.sig_bytes
            && (0..self.sig_bytes).all(|i| self.byte(i) == other.byte(i))
    }
}

impl Eq for WordBuffer {}

impl WordBuffer {
    /// Creates a buffer from raw words and a significant-byte count.
    ///
    /// `sig_bytes` is capped to the number of bytes the words can hold.
    pub fn new(words: Vec<u32>, sig_bytes: usize) -> Self {
        let cap = words.len() * 4;
        WordBuffer {
            words,
            sig_bytes: sig_bytes.min(cap),
        }
    }

    /// Creates a buffer from words, all of them fully significant.
    pub fn from_words(words: Vec<u32>) -> Self {
        let sig_bytes = words.len() * 4;
        WordBuffer { words, sig_bytes }
    }

    /// Creates an empty buffer.
    pub fn empty() -> Self {
        WordBuffer {
            words: Vec::new(),
            sig_bytes: 0,
        }
    }

    /// Packs a byte slice into big-endian words.
    pub fn from_bytes(bytes: &[u8]) -> Self {
        let mut words = vec![0u32; bytes.len().div_ceil(4)];
        for (i, &b) in bytes.iter().enumerate() {
            words[i >> 2] |= (b as u32) << (24 - (i % 4) * 8);
        }
        WordBuffer {
            words,
            sig_bytes: bytes.len(),
        }
    }

    /// Unpacks the significant bytes.
    pub fn to_bytes(&self) -> Vec<u8> {
        (0..self.sig_bytes).map(|i| self.byte(i)).collect()
    }

    /// Fills a fresh buffer with `n_bytes` from the platform CSPRNG.
    ///
    /// Fails with [`Error::RandomSource`] when no secure source is available.
    /// There is no fallback: a silent substitution of a non-cryptographic
    /// generator would be a security defect, not a recoverable condition.
    pub fn random(n_bytes: usize) -> Result<Self> {
        let mut bytes = vec![0u8; n_bytes];
        getrandom::getrandom(&mut bytes).map_err(|_| Error::RandomSource {
            details: "getrandom failed",
        })?;
        let buffer = Self::from_bytes(&bytes);
        bytes.zeroize();
        Ok(buffer)
    }

    /// Number of significant bytes.
    pub fn sig_bytes(&self) -> usize {
        self.sig_bytes
    }

    /// True when the buffer holds no significant bytes.
    pub fn is_empty(&self) -> bool {
        self.sig_bytes == 0
    }

    /// The backing words. Bytes past `sig_bytes` in the final word are
    /// garbage until [`clamp`](Self::clamp) runs.
    pub fn words(&self) -> &[u32] {
        &self.words
    }

    /// Mutable access to the backing words.
    pub fn words_mut(&mut self) -> &mut Vec<u32> {
        &mut self.words
    }

    /// Overrides the significant-byte count, capped to the allocated words.
    pub fn set_sig_bytes(&mut self, sig_bytes: usize) {
        self.sig_bytes = sig_bytes.min(self.words.len() * 4);
    }

    /// The `i`-th significant byte.
    ///
    /// Callers must keep `i < sig_bytes`; reading beyond that returns
    /// whatever garbage the final word holds.
    #[inline]
    pub fn byte(&self, i: usize) -> u8 {
        ((self.words[i >> 2] >> (24 - (i % 4) * 8)) & 0xff) as u8
    }

    /// Masks insignificant bits of the final word to zero and truncates the
    /// word sequence to `ceil(sig_bytes / 4)`.
    pub fn clamp(&mut self) {
        let full_words = self.sig_bytes.div_ceil(4);
        self.words.truncate(full_words);
        let rem = self.sig_bytes % 4;
        if rem != 0 {
            if let Some(last) = self.words.last_mut() {
                *last &= 0xffff_ffffu32 << (32 - rem * 8);
            }
        }
    }

    /// Appends another buffer's significant bytes starting exactly at the
    /// current `sig_bytes` boundary.
    ///
    /// The append is byte-granular: when `sig_bytes` is not word-aligned the
    /// incoming bytes are shifted into the partial word. Clamps `self` first
    /// so stale garbage bits never leak into the joined region.
    pub fn concat(&mut self, other: &WordBuffer) -> &mut Self {
        self.clamp();
        let this_sig = self.sig_bytes;
        let that_sig = other.sig_bytes;

        let needed_words = (this_sig + that_sig).div_ceil(4);
        if self.words.len() < needed_words {
            self.words.resize(needed_words, 0);
        }

        if this_sig % 4 == 0 {
            // Word-aligned fast path: copy whole words.
            let mut i = 0;
            while i < that_sig {
                self.words[(this_sig + i) >> 2] = other.words[i >> 2];
                i += 4;
            }
        } else {
            // Misaligned: shift every byte into place.
            for i in 0..that_sig {
                let b = other.byte(i) as u32;
                let pos = this_sig + i;
                self.words[pos >> 2] |= b << (24 - (pos % 4) * 8);
            }
        }
        self.sig_bytes = this_sig + that_sig;
        self
    }

    /// Splits the buffer at a word boundary, returning the first
    /// `n_words` words as a new buffer carrying `n_bytes` significant bytes.
    pub fn split_off_words(&mut self, n_words: usize, n_bytes: usize) -> WordBuffer {
        let taken: Vec<u32> = self.words.drain(..n_words.min(self.words.len())).collect();
        self.sig_bytes = self.sig_bytes.saturating_sub(n_bytes);
        WordBuffer::new(taken, n_bytes)
    }
}

impl From<&[u8]> for WordBuffer {
    fn from(bytes: &[u8]) -> Self {
        WordBuffer::from_bytes(bytes)
    }
}

/// Renders the significant bytes as lowercase hex, the library's default
/// textual form.
impl fmt::Display for WordBuffer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&hex::encode(self.to_bytes()))
    }
}
