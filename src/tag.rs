use crate::{Error, Result};

/// One-byte type id of a tag. Every container resolves its element ids
/// through [`TagID::from_u8`].
#[repr(u8)]
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum TagID {
    End = 0,
    Byte = 1,
    Short = 2,
    Int = 3,
    Long = 4,
    Float = 5,
    Double = 6,
    ByteArray = 7,
    String = 8,
    List = 9,
    Compound = 10,
    IntArray = 11,
    LongArray = 12,
}

const TABLE: [TagID; 13] = [
    TagID::End,
    TagID::Byte,
    TagID::Short,
    TagID::Int,
    TagID::Long,
    TagID::Float,
    TagID::Double,
    TagID::ByteArray,
    TagID::String,
    TagID::List,
    TagID::Compound,
    TagID::IntArray,
    TagID::LongArray,
];

impl TagID {
    /// Resolves a raw type id.
    ///
    /// # Errors
    ///
    /// [`Error::InvalidTagType`] for any byte above 12.
    ///
    /// # Example
    ///
    /// ```
    /// use nbt_inventory::TagID;
    ///
    /// assert_eq!(TagID::from_u8(9).unwrap(), TagID::List);
    /// assert!(TagID::from_u8(13).is_err());
    /// ```
    pub fn from_u8(value: u8) -> Result<Self> {
        if (value as usize) < TABLE.len() {
            Ok(TABLE[value as usize])
        } else {
            Err(Error::InvalidTagType(value))
        }
    }

    pub const fn as_u8(self) -> u8 {
        self as u8
    }

    /// Returns `true` if this is a primitive tag type.
    ///
    /// Primitive tags are: End, Byte, Short, Int, Long, Float, Double.
    pub const fn is_primitive(self) -> bool {
        matches!(
            self,
            Self::End
                | Self::Byte
                | Self::Short
                | Self::Int
                | Self::Long
                | Self::Float
                | Self::Double
        )
    }

    /// Returns `true` for ByteArray, IntArray and LongArray.
    pub const fn is_array(self) -> bool {
        matches!(self, Self::ByteArray | Self::IntArray | Self::LongArray)
    }

    /// Returns `true` for List and Compound.
    pub const fn is_composite(self) -> bool {
        matches!(self, Self::List | Self::Compound)
    }

    /// Smallest number of payload bytes a value of this type occupies.
    pub(crate) const fn min_payload_size(self) -> usize {
        match self {
            Self::End => 0,
            Self::Byte => 1,
            Self::Short => 2,
            Self::Int | Self::Float => 4,
            Self::Long | Self::Double => 8,
            Self::ByteArray | Self::IntArray | Self::LongArray => 4,
            Self::String => 2,
            Self::List => 5,
            Self::Compound => 1,
        }
    }
}

impl TryFrom<u8> for TagID {
    type Error = Error;

    fn try_from(value: u8) -> Result<Self> {
        Self::from_u8(value)
    }
}

impl From<TagID> for u8 {
    fn from(tag: TagID) -> u8 {
        tag as u8
    }
}
