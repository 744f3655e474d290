//! Error types for tag decoding, encoding and save patching.
//!
//! This module contains the [`Error`] type which represents all possible errors
//! that can occur while locating, reading, rebuilding or writing a document.
//!
//! # Example
//!
//! ```
//! use nbt_inventory::{BigEndian, Cursor, Error, Result, Tag};
//!
//! fn try_parse(data: &[u8]) -> Result<()> {
//!     match Tag::read::<BigEndian>(&mut Cursor::new(data)) {
//!         Ok(_) => Ok(()),
//!         Err(Error::EndOfFile) => {
//!             println!("Data was truncated");
//!             Err(Error::EndOfFile)
//!         }
//!         Err(Error::InvalidTagType(tag)) => {
//!             println!("Unknown tag type: {:#04x}", tag);
//!             Err(Error::InvalidTagType(tag))
//!         }
//!         Err(e) => Err(e),
//!     }
//! }
//!
//! assert!(try_parse(&[0x01, 0x00]).is_err());
//! ```

use std::fmt::{self, Display};

/// Alias for a `Result` with the error type [`Error`].
pub type Result<T> = std::result::Result<T, Error>;

/// This type represents all possible errors of the codec and the save layer.
///
/// None of them is recoverable at the point of detection: the decode or
/// encode call that produced it has failed as a whole.
#[derive(Debug)]
pub enum Error {
    /// An I/O error occurred while reading or writing a save file.
    IO(std::io::Error),

    /// The input ended unexpectedly.
    ///
    /// A read asked for more bytes than remain in the buffer.
    EndOfFile,

    /// A type id outside `0..=12` was found where a variant must be resolved.
    InvalidTagType(u8),

    /// The inventory marker does not occur in the buffer.
    MarkerNotFound,

    /// A length or count field is negative, or nonzero for a list of End.
    InvalidLength(i32),

    /// A count field announces more elements than the remaining input could
    /// possibly hold.
    LengthExceedsInput(usize),

    /// Compound/List nesting went deeper than the configured limit.
    DepthLimitExceeded(usize),

    /// The region to replace is not inside the buffer.
    InvalidRegion { start: usize, end: usize, len: usize },

    /// A name or string does not fit its unsigned 16-bit length prefix.
    StringTooLong(usize),

    /// A sequence does not fit its signed 32-bit count prefix.
    ListTooLong(usize),

    /// A list element does not have the list's element type.
    TagMismatch(u8, u8),

    /// A character cannot be written back as a single byte.
    UnencodableChar(char),

    /// The inventory document is not a List tag.
    NotAList(u8),

    /// The item at this index lacks its slot, count or id.
    InvalidItem(usize),
}

impl Display for Error {
    fn fmt(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Error::IO(error) => formatter.write_str(&error.to_string()),
            Error::EndOfFile => formatter.write_str("unexpected end of input"),
            Error::InvalidTagType(tag) => {
                formatter.write_str(&format!("invalid NBT tag type: {tag:#04x}"))
            }
            Error::MarkerNotFound => formatter.write_str("inventory marker not found"),
            Error::InvalidLength(len) => formatter.write_str(&format!("invalid length: {len}")),
            Error::LengthExceedsInput(len) => {
                formatter.write_str(&format!("length {len} exceeds remaining input"))
            }
            Error::DepthLimitExceeded(depth) => {
                formatter.write_str(&format!("nesting deeper than {depth} levels"))
            }
            Error::InvalidRegion { start, end, len } => formatter.write_str(&format!(
                "region {start}..{end} is outside a buffer of {len} bytes"
            )),
            Error::StringTooLong(len) => {
                formatter.write_str(&format!("string length too long: {len}"))
            }
            Error::ListTooLong(len) => formatter.write_str(&format!("list length too long: {len}")),
            Error::TagMismatch(expected, actual) => formatter.write_str(&format!(
                "tag in list mismatch: expected {expected:#04x}, got {actual:#04x}"
            )),
            Error::UnencodableChar(c) => {
                formatter.write_str(&format!("character {c:?} does not fit in one byte"))
            }
            Error::NotAList(tag) => formatter.write_str(&format!(
                "inventory document is not a list: tag type {tag:#04x}"
            )),
            Error::InvalidItem(index) => {
                formatter.write_str(&format!("item {index} is missing a slot, count or id"))
            }
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::IO(error) => Some(error),
            _ => None,
        }
    }
}

impl From<std::io::Error> for Error {
    fn from(error: std::io::Error) -> Self {
        Error::IO(error)
    }
}
