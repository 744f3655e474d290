use std::io::Write;

use zerocopy::byteorder;

use crate::{ByteOrder, Error, Result, Tag, TagID, Value, text};

impl Tag {
    /// Type id, `u16` name length and name bytes. An End tag has no name,
    /// so its header is the single id byte.
    pub fn write_header<O: ByteOrder>(&self, buf: &mut Vec<u8>) -> Result<()> {
        let tag_id = self.tag_id();
        buf.push(tag_id.as_u8());
        if tag_id != TagID::End {
            write_text::<O>(buf, &self.name)?;
        }
        Ok(())
    }

    /// Header followed by payload.
    pub fn write<O: ByteOrder>(&self, buf: &mut Vec<u8>) -> Result<()> {
        self.write_header::<O>(buf)?;
        self.value.write_payload::<O>(buf)
    }

    /// Encodes the whole tag into a fresh buffer.
    ///
    /// # Example
    ///
    /// ```
    /// use nbt_inventory::{BigEndian, Tag, Value};
    ///
    /// let bytes = Tag::new("id", Value::String("minecraft:tnt".into()))
    ///     .write_to_vec::<BigEndian>()
    ///     .unwrap();
    /// assert_eq!(&bytes[..5], &[0x08, 0x00, 0x02, b'i', b'd']);
    /// assert_eq!(&bytes[5..7], &[0x00, 13]);
    /// ```
    pub fn write_to_vec<O: ByteOrder>(&self) -> Result<Vec<u8>> {
        let mut buf = Vec::with_capacity(64);
        self.write::<O>(&mut buf)?;
        Ok(buf)
    }

    pub fn write_to_writer<O: ByteOrder, W: Write>(&self, mut writer: W) -> Result<()> {
        writer.write_all(&self.write_to_vec::<O>()?)?;
        Ok(())
    }
}

impl Value {
    /// Encodes the payload only; the inverse of [`Value::read_payload`].
    pub fn write_payload<O: ByteOrder>(&self, buf: &mut Vec<u8>) -> Result<()> {
        match self {
            Value::End => {}
            Value::Byte(v) => buf.push(*v as u8),
            Value::Short(v) => buf.extend_from_slice(&byteorder::I16::<O>::new(*v).to_bytes()),
            Value::Int(v) => buf.extend_from_slice(&byteorder::I32::<O>::new(*v).to_bytes()),
            Value::Long(v) => buf.extend_from_slice(&byteorder::I64::<O>::new(*v).to_bytes()),
            Value::Float(v) => buf.extend_from_slice(&byteorder::F32::<O>::new(*v).to_bytes()),
            Value::Double(v) => buf.extend_from_slice(&byteorder::F64::<O>::new(*v).to_bytes()),
            Value::ByteArray(values) => {
                write_count::<O>(buf, values.len())?;
                buf.extend(values.iter().map(|v| *v as u8));
            }
            Value::String(v) => write_text::<O>(buf, v)?,
            Value::List(list) => {
                list.check_homogeneous()?;
                // End payloads are zero bytes wide, so such a list only reads back empty
                if list.element == TagID::End && !list.is_empty() {
                    return Err(Error::InvalidLength(
                        i32::try_from(list.len()).unwrap_or(i32::MAX),
                    ));
                }
                buf.push(list.element.as_u8());
                write_count::<O>(buf, list.len())?;
                for item in list {
                    item.write_payload::<O>(buf)?;
                }
            }
            Value::Compound(children) => {
                for child in children {
                    // a stored End would terminate the compound early
                    if child.tag_id() != TagID::End {
                        child.write::<O>(buf)?;
                    }
                }
                buf.push(TagID::End.as_u8());
            }
            Value::IntArray(values) => {
                write_count::<O>(buf, values.len())?;
                for v in values {
                    buf.extend_from_slice(&byteorder::I32::<O>::new(*v).to_bytes());
                }
            }
            Value::LongArray(values) => {
                write_count::<O>(buf, values.len())?;
                for v in values {
                    buf.extend_from_slice(&byteorder::I64::<O>::new(*v).to_bytes());
                }
            }
        }
        Ok(())
    }
}

fn write_count<O: ByteOrder>(buf: &mut Vec<u8>, len: usize) -> Result<()> {
    let len = i32::try_from(len).map_err(|_| Error::ListTooLong(len))?;
    buf.extend_from_slice(&byteorder::I32::<O>::new(len).to_bytes());
    Ok(())
}

fn write_text<O: ByteOrder>(buf: &mut Vec<u8>, value: &str) -> Result<()> {
    let len = text::encoded_len(value);
    let len = u16::try_from(len).map_err(|_| Error::StringTooLong(len))?;
    let bytes = text::encode_latin1(value)?;
    buf.extend_from_slice(&byteorder::U16::<O>::new(len).to_bytes());
    buf.extend_from_slice(&bytes);
    Ok(())
}
