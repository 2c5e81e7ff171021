//! Hex codec for I2C payloads.
//!
//! The firmware exchanges I2C data as uppercase hex strings, two digits per
//! byte. Text is mapped one character per byte (U+0000..=U+00FF).

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum HexError {
    #[error("character {0:?} does not fit in one byte")]
    NonByteChar(char),

    #[error("odd number of hex digits")]
    OddLength,

    #[error("invalid hex digit {0:?}")]
    InvalidDigit(char),
}

const DIGITS: &[u8; 16] = b"0123456789ABCDEF";

/// Encode bytes as uppercase hex: `b"123"` -> `"313233"`.
pub fn bytes_to_hex(bytes: &[u8]) -> String {
    let mut out = String::with_capacity(bytes.len() * 2);
    for &b in bytes {
        out.push(DIGITS[(b >> 4) as usize] as char);
        out.push(DIGITS[(b & 0x0F) as usize] as char);
    }
    out
}

/// Map text to bytes, one byte per character.
pub fn str_to_bytes(text: &str) -> Result<Vec<u8>, HexError> {
    text.chars()
        .map(|c| u8::try_from(u32::from(c)).map_err(|_| HexError::NonByteChar(c)))
        .collect()
}

/// Encode text as uppercase hex, one byte per character: `"123"` -> `"313233"`.
pub fn str_to_hex(text: &str) -> Result<String, HexError> {
    Ok(bytes_to_hex(&str_to_bytes(text)?))
}

/// Decode a hex string into bytes: `"303132"` -> `[0x30, 0x31, 0x32]`.
///
/// Digits may be upper or lower case; whitespace between byte pairs is skipped.
pub fn hex_to_bytes(hex: &str) -> Result<Vec<u8>, HexError> {
    let mut out = Vec::with_capacity(hex.len() / 2);
    let mut high: Option<u8> = None;

    for c in hex.chars() {
        if c.is_ascii_whitespace() && high.is_none() {
            continue;
        }
        let nibble = c
            .to_digit(16)
            .ok_or(HexError::InvalidDigit(c))? as u8;
        match high.take() {
            Some(h) => out.push((h << 4) | nibble),
            None => high = Some(nibble),
        }
    }

    if high.is_some() {
        return Err(HexError::OddLength);
    }
    Ok(out)
}

/// Decode a hex string into text, one character per byte: `"303132"` -> `"012"`.
pub fn hex_to_str(hex: &str) -> Result<String, HexError> {
    Ok(hex_to_bytes(hex)?.into_iter().map(char::from).collect())
}
