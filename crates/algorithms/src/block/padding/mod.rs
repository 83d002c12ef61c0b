//! Block padding schemes
//!
//! All count-terminated schemes (PKCS#7, ANSI X9.23, ISO 10126) share one
//! unpad rule: the final byte is the pad length. Zero padding is ambiguous
//! when the plaintext itself ends in zero bytes; its unpad strips every
//! trailing zero, which callers must account for.

use wordcrypt_common::{Error, Result, WordBuffer};

/// Padding scheme selector.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Padding {
    /// PKCS#7: n bytes of value n.
    #[default]
    Pkcs7,
    /// ANSI X9.23: zero bytes then a count byte.
    AnsiX923,
    /// ISO 10126: random bytes then a count byte.
    Iso10126,
    /// ISO/IEC 9797-1: a 0x80 marker then zero bytes.
    Iso97971,
    /// Zero bytes up to the block boundary; nothing when already aligned.
    Zero,
    /// Leave data untouched in both directions.
    None,
}

impl Padding {
    /// Pads `data` to a multiple of `block_words` words.
    ///
    /// ISO 10126 draws its fill bytes from the system CSPRNG and fails if
    /// that source is unavailable.
    pub fn pad(&self, data: &mut WordBuffer, block_words: usize) -> Result<()> {
        let block_bytes = block_words * 4;
        match self {
            Padding::Pkcs7 => {
                let n = block_bytes - data.sig_bytes() % block_bytes;
                let word = u32::from_be_bytes([n as u8; 4]);
                let padding = WordBuffer::new(vec![word; (n + 3) / 4], n);
                data.concat(&padding);
            }
            Padding::AnsiX923 => {
                let sig_bytes = data.sig_bytes();
                let n = block_bytes - sig_bytes % block_bytes;
                let last_byte_pos = sig_bytes + n - 1;
                data.clamp();
                let target = (last_byte_pos >> 2) + 1;
                if data.words().len() < target {
                    data.words_mut().resize(target, 0);
                }
                data.words_mut()[last_byte_pos >> 2] |=
                    (n as u32) << (24 - (last_byte_pos % 4) * 8);
                data.set_sig_bytes(sig_bytes + n);
            }
            Padding::Iso10126 => {
                let n = block_bytes - data.sig_bytes() % block_bytes;
                data.concat(&WordBuffer::random(n - 1)?);
                data.concat(&WordBuffer::from_bytes(&[n as u8]));
            }
            Padding::Iso97971 => {
                data.concat(&WordBuffer::new(vec![0x8000_0000], 1));
                Padding::Zero.pad(data, block_words)?;
            }
            Padding::Zero => {
                let sig_bytes = data.sig_bytes();
                let rem = sig_bytes % block_bytes;
                if rem != 0 {
                    let padded = sig_bytes + block_bytes - rem;
                    data.clamp();
                    let target = (padded + 3) / 4;
                    if data.words().len() < target {
                        data.words_mut().resize(target, 0);
                    }
                    data.set_sig_bytes(padded);
                }
            }
            Padding::None => {}
        }
        Ok(())
    }

    /// Strips this scheme's padding from `data`.
    pub fn unpad(&self, data: &mut WordBuffer) -> Result<()> {
        match self {
            Padding::Pkcs7 | Padding::AnsiX923 | Padding::Iso10126 => {
                let sig_bytes = data.sig_bytes();
                if sig_bytes == 0 {
                    return Err(Error::param("data", "cannot unpad an empty buffer"));
                }
                let n = data.byte(sig_bytes - 1) as usize;
                if n == 0 || n > sig_bytes {
                    return Err(Error::param("data", "invalid padding length byte"));
                }
                data.set_sig_bytes(sig_bytes - n);
                data.clamp();
            }
            Padding::Iso97971 => {
                Padding::Zero.unpad(data)?;
                let sig_bytes = data.sig_bytes();
                if sig_bytes == 0 || data.byte(sig_bytes - 1) != 0x80 {
                    return Err(Error::param("data", "missing 0x80 padding marker"));
                }
                data.set_sig_bytes(sig_bytes - 1);
                data.clamp();
            }
            Padding::Zero => {
                while data.sig_bytes() > 0 && data.byte(data.sig_bytes() - 1) == 0 {
                    data.set_sig_bytes(data.sig_bytes() - 1);
                }
                data.clamp();
            }
            Padding::None => {}
        }
        Ok(())
    }
}
