//! Locating the inventory document inside a decompressed save buffer.

use std::ops::Range;

use zerocopy::BigEndian;

use crate::{Cursor, Error, ReadConfig, Result, Tag};

/// Header of a List tag named `Inventory`: type id 9, name length 9, name.
///
/// The match starts at the list's own type-id byte, so decoding begins at
/// the returned offset rather than after it.
pub const INVENTORY_MARKER: [u8; 12] = [
    0x09, 0x00, 0x09, b'I', b'n', b'v', b'e', b'n', b't', b'o', b'r', b'y',
];

/// Offset of the first occurrence of `marker` in `buffer`.
///
/// # Errors
///
/// [`Error::MarkerNotFound`] if the marker does not occur (or is empty).
///
/// # Example
///
/// ```
/// use nbt_inventory::{INVENTORY_MARKER, locate};
///
/// let mut buffer = vec![0xAA; 5];
/// buffer.extend_from_slice(&INVENTORY_MARKER);
/// assert_eq!(locate(&buffer, &INVENTORY_MARKER).unwrap(), 5);
/// ```
pub fn locate(buffer: &[u8], marker: &[u8]) -> Result<usize> {
    if marker.is_empty() {
        return Err(Error::MarkerNotFound);
    }
    buffer
        .windows(marker.len())
        .position(|window| window == marker)
        .ok_or(Error::MarkerNotFound)
}

/// Byte span of a decoded document within the buffer it was read from.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Region {
    pub start: usize,
    /// Cursor position right after the document's last byte.
    pub end: usize,
}

impl Region {
    /// Finds `marker` and decodes the tag starting there.
    pub fn decode(buffer: &[u8], marker: &[u8]) -> Result<(Region, Tag)> {
        Self::decode_with(buffer, marker, &ReadConfig::default())
    }

    pub fn decode_with(
        buffer: &[u8],
        marker: &[u8],
        config: &ReadConfig,
    ) -> Result<(Region, Tag)> {
        let start = locate(buffer, marker)?;
        let mut cursor = Cursor::<BigEndian>::new(buffer);
        cursor.seek(start)?;
        let tag = Tag::read_with(&mut cursor, config)?;
        let end = cursor.position();
        Ok((Region { start, end }, tag))
    }

    pub const fn len(&self) -> usize {
        self.end - self.start
    }

    pub const fn is_empty(&self) -> bool {
        self.start == self.end
    }

    pub const fn range(&self) -> Range<usize> {
        self.start..self.end
    }
}
