//! String encoders between text and [`WordBuffer`]s
//!
//! Six encodings are supported. All of them are total on the encoding
//! direction; decoding rejects malformed input with [`Error::Decoding`].
//!
//! Base64 parsing follows the permissive historical behavior: the input is
//! read up to the first `=` and the padding plus anything after it is
//! ignored.

use base64::engine::general_purpose::{STANDARD, STANDARD_NO_PAD};
use base64::Engine;

use crate::error::{Error, Result};
use crate::word::WordBuffer;

/// A string encoding scheme.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Encoding {
    /// Lowercase hex, two characters per byte.
    Hex,
    /// Latin1: each byte is a character code.
    Latin1,
    /// UTF-8; malformed byte sequences fail to decode.
    Utf8,
    /// UTF-16 big-endian.
    Utf16Be,
    /// UTF-16 little-endian.
    Utf16Le,
    /// Base64, standard alphabet with `=` padding.
    Base64,
}

impl Encoding {
    /// Encodes a buffer's significant bytes as a string.
    ///
    /// Fails only for the UTF encodings, when the bytes are not valid text.
    pub fn stringify(self, data: &WordBuffer) -> Result<String> {
        let bytes = data.to_bytes();
        match self {
            Encoding::Hex => Ok(hex::encode(&bytes)),
            Encoding::Latin1 => Ok(bytes.iter().map(|&b| b as char).collect()),
            Encoding::Utf8 => String::from_utf8(bytes).map_err(|_| Error::Decoding {
                encoding: "UTF-8",
                details: "malformed byte sequence",
            }),
            Encoding::Utf16Be => utf16_stringify(&bytes, u16::from_be_bytes),
            Encoding::Utf16Le => utf16_stringify(&bytes, u16::from_le_bytes),
            Encoding::Base64 => Ok(STANDARD.encode(&bytes)),
        }
    }

    /// Decodes a string into a buffer.
    pub fn parse(self, s: &str) -> Result<WordBuffer> {
        match self {
            Encoding::Hex => {
                let bytes = hex::decode(s).map_err(|_| Error::Decoding {
                    encoding: "Hex",
                    details: "invalid hex digit or odd length",
                })?;
                Ok(WordBuffer::from_bytes(&bytes))
            }
            Encoding::Latin1 => {
                let bytes: Vec<u8> = s.chars().map(|c| (c as u32 & 0xff) as u8).collect();
                Ok(WordBuffer::from_bytes(&bytes))
            }
            Encoding::Utf8 => Ok(WordBuffer::from_bytes(s.as_bytes())),
            Encoding::Utf16Be => {
                let bytes: Vec<u8> = s.encode_utf16().flat_map(|u| u.to_be_bytes()).collect();
                Ok(WordBuffer::from_bytes(&bytes))
            }
            Encoding::Utf16Le => {
                let bytes: Vec<u8> = s.encode_utf16().flat_map(|u| u.to_le_bytes()).collect();
                Ok(WordBuffer::from_bytes(&bytes))
            }
            Encoding::Base64 => {
                // Read up to the first padding character; `=` and anything
                // following it is ignored.
                let end = s.find('=').unwrap_or(s.len());
                let bytes = STANDARD_NO_PAD.decode(&s[..end]).map_err(|_| Error::Decoding {
                    encoding: "Base64",
                    details: "invalid character",
                })?;
                Ok(WordBuffer::from_bytes(&bytes))
            }
        }
    }
}

fn utf16_stringify(bytes: &[u8], unit: fn([u8; 2]) -> u16) -> Result<String> {
    let units: Vec<u16> = bytes
        .chunks(2)
        .map(|c| unit([c[0], *c.get(1).unwrap_or(&0)]))
        .collect();
    String::from_utf16(&units).map_err(|_| Error::Decoding {
        encoding: "UTF-16",
        details: "unpaired surrogate",
    })
}
