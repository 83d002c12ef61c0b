//! Stream ciphers

pub mod rabbit;
pub mod rc4;

pub use rabbit::{Rabbit, RabbitLegacy};
pub use rc4::{Rc4, Rc4Drop};

/// Keystream generator applied in place, one block at a time.
///
/// Encryption and decryption are the same XOR, so the trait has a single
/// transform method.
pub trait StreamCipher: Sized {
    /// Words consumed per keystream step.
    const BLOCK_WORDS: usize;

    /// XORs the next keystream block into `words` at `offset`.
    fn process_block(&mut self, words: &mut [u32], offset: usize);
}

/// Discards the first `n_blocks` keystream blocks.
pub(crate) fn drop_keystream<S: StreamCipher>(cipher: &mut S, n_blocks: usize) {
    let mut scratch = vec![0u32; S::BLOCK_WORDS];
    for _ in 0..n_blocks {
        cipher.process_block(&mut scratch, 0);
    }
}
