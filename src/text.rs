//! Byte-preserving text handling for names and String payloads.
//!
//! The tag format stores text as length-prefixed bytes. This crate keeps
//! those bytes exact by mapping each byte to the code point of the same
//! value. Real documents store Java modified UTF-8, so a name containing
//! non-ASCII text decodes into several Latin-1 characters; use
//! [`decode_mutf8`] to display it and [`encode_mutf8`] to build such text.

use std::borrow::Cow;

use crate::{Error, Result};

/// Maps every byte to the char with the same value.
pub fn decode_latin1(bytes: &[u8]) -> String {
    bytes.iter().map(|&b| b as char).collect()
}

/// Inverse of [`decode_latin1`].
///
/// # Errors
///
/// [`Error::UnencodableChar`] for any char above U+00FF.
pub fn encode_latin1(text: &str) -> Result<Vec<u8>> {
    text.chars()
        .map(|c| u8::try_from(c).map_err(|_| Error::UnencodableChar(c)))
        .collect()
}

/// Byte length `text` will occupy once encoded.
pub(crate) fn encoded_len(text: &str) -> usize {
    text.chars().count()
}

/// Interprets the raw bytes of a decoded string as modified UTF-8.
/// Text holding chars above U+00FF is returned unchanged.
///
/// ```
/// use nbt_inventory::text::{decode_mutf8, encode_mutf8};
///
/// let raw = encode_mutf8("Crème");
/// assert_eq!(raw.chars().count(), 6);
/// assert_eq!(decode_mutf8(&raw), "Crème");
/// ```
pub fn decode_mutf8(text: &str) -> Cow<'_, str> {
    if text.is_ascii() {
        return Cow::Borrowed(text);
    }
    // already real Unicode, not a byte-per-char string
    let Ok(bytes) = encode_latin1(text) else {
        return Cow::Borrowed(text);
    };
    Cow::Owned(simd_cesu8::mutf8::decode_lossy(&bytes).into_owned())
}

/// Encodes Unicode text as modified UTF-8 and returns it in the
/// byte-per-char form the codec reads and writes.
pub fn encode_mutf8(text: &str) -> String {
    decode_latin1(&simd_cesu8::mutf8::encode(text))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn latin1_round_trips_every_byte() {
        let bytes: Vec<u8> = (0..=255).collect();
        let text = decode_latin1(&bytes);
        assert_eq!(encode_latin1(&text).unwrap(), bytes);
    }

    #[test]
    fn wide_chars_are_rejected() {
        match encode_latin1("a€") {
            Err(Error::UnencodableChar('€')) => {}
            other => panic!("expected UnencodableChar, got {other:?}"),
        }
    }

    #[test]
    fn wide_text_is_not_reinterpreted() {
        assert_eq!(decode_mutf8("日本"), "日本");
        assert_eq!(decode_mutf8("\u{C3}\u{A9}€"), "\u{C3}\u{A9}€");
    }

    #[test]
    fn nul_uses_two_byte_form() {
        let raw = encode_mutf8("a\0");
        assert_eq!(encode_latin1(&raw).unwrap(), vec![b'a', 0xC0, 0x80]);
        assert_eq!(decode_mutf8(&raw), "a\0");
    }
}
