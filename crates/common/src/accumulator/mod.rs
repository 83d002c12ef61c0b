//! Streaming block accumulation
//!
//! [`BlockAccumulator`] buffers arbitrary-length input and releases whole
//! processed blocks on demand. It is the single streaming engine behind
//! every hash and cipher in the library; only the per-block callback, the
//! block size, and the minimum buffered-block count differ between users.

use crate::encoding::Encoding;
use crate::word::WordBuffer;

/// Buffers word data and releases whole fixed-size blocks to a callback.
#[derive(Clone, Debug)]
pub struct BlockAccumulator {
    data: WordBuffer,
    total_bytes: u64,
    block_words: usize,
    min_buffer_blocks: usize,
}

impl BlockAccumulator {
    /// Creates an accumulator for blocks of `block_words` 32-bit words.
    pub fn new(block_words: usize) -> Self {
        Self::with_min_buffer(block_words, 0)
    }

    /// Creates an accumulator that keeps at least `min_buffer_blocks` whole
    /// blocks buffered across non-flush [`process`](Self::process) calls.
    ///
    /// Decrypting block ciphers use `1` so the final block is never released
    /// before `finalize`, guaranteeing the unpadder sees the true last block.
    pub fn with_min_buffer(block_words: usize, min_buffer_blocks: usize) -> Self {
        BlockAccumulator {
            data: WordBuffer::empty(),
            total_bytes: 0,
            block_words,
            min_buffer_blocks,
        }
    }

    /// Appends a buffer's significant bytes.
    pub fn append(&mut self, data: &WordBuffer) {
        self.total_bytes += data.sig_bytes() as u64;
        self.data.concat(data);
    }

    /// Appends a string, coerced through UTF-8.
    pub fn append_str(&mut self, s: &str) {
        // UTF-8 parsing of a &str cannot fail.
        let data = Encoding::Utf8.parse(s).expect("utf-8 parse of str");
        self.append(&data);
    }

    /// Total bytes ever appended, independent of the buffered residue.
    /// Hash length-padding reads this.
    pub fn total_bytes(&self) -> u64 {
        self.total_bytes
    }

    /// The buffered, not-yet-processed data.
    pub fn data(&self) -> &WordBuffer {
        &self.data
    }

    /// Mutable access to the buffered data. Finalization rules append their
    /// padding through this before the flushing `process` call.
    pub fn data_mut(&mut self) -> &mut WordBuffer {
        &mut self.data
    }

    /// Words per block.
    pub fn block_words(&self) -> usize {
        self.block_words
    }

    /// Restores the empty state.
    pub fn reset(&mut self) {
        self.data = WordBuffer::empty();
        self.total_bytes = 0;
    }

    /// Processes and removes every whole block that is ready.
    ///
    /// Readiness is `ceil(sig_bytes / block_bytes)` when flushing, else
    /// `floor(sig_bytes / block_bytes) - min_buffer_blocks` (never negative).
    /// The callback receives the buffered words and a word offset for each
    /// ready block and may transform the block in place; the consumed words
    /// are then split off and returned as a new buffer whose significant
    /// byte count is capped at the bytes actually buffered.
    pub fn process<F>(&mut self, flush: bool, mut f: F) -> WordBuffer
    where
        F: FnMut(&mut [u32], usize),
    {
        let sig = self.data.sig_bytes();
        let block_bytes = self.block_words * 4;

        let blocks_ready = if flush {
            sig.div_ceil(block_bytes)
        } else {
            (sig / block_bytes).saturating_sub(self.min_buffer_blocks)
        };

        let words_ready = blocks_ready * self.block_words;
        let bytes_ready = (words_ready * 4).min(sig);

        if words_ready == 0 {
            return WordBuffer::empty();
        }

        // A flushing partial block may extend past the allocated words;
        // zero-fill so the callback always sees whole blocks.
        if self.data.words().len() < words_ready {
            self.data.words_mut().resize(words_ready, 0);
        }

        let mut offset = 0;
        while offset < words_ready {
            f(self.data.words_mut(), offset);
            offset += self.block_words;
        }

        self.data.split_off_words(words_ready, bytes_ready)
    }
}
