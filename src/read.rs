use crate::{ByteOrder, Cursor, Error, List, ReadConfig, Result, Tag, TagID, Value};

impl Tag {
    /// Decodes one fully-headered tag: type id, name, then payload.
    ///
    /// An End id consumes only that byte and yields [`Tag::end`]. Any
    /// failure aborts the whole decode; nothing partial is returned.
    ///
    /// # Example
    ///
    /// ```
    /// use nbt_inventory::{BigEndian, Cursor, Tag, Value};
    ///
    /// let data = [0x01, 0x00, 0x04, b'S', b'l', b'o', b't', 0x02];
    /// let mut cursor = Cursor::new(&data);
    /// let tag = Tag::read::<BigEndian>(&mut cursor).unwrap();
    /// assert_eq!(tag, Tag::new("Slot", Value::Byte(2)));
    /// assert_eq!(cursor.position(), data.len());
    /// ```
    pub fn read<O: ByteOrder>(cursor: &mut Cursor<'_, O>) -> Result<Tag> {
        Self::read_with(cursor, &ReadConfig::default())
    }

    pub fn read_with<O: ByteOrder>(
        cursor: &mut Cursor<'_, O>,
        config: &ReadConfig,
    ) -> Result<Tag> {
        read_tag(cursor, config, 0)
    }
}

impl Value {
    /// Decodes a headerless payload of type `tag_id`, as stored inside
    /// lists and arrays.
    pub fn read_payload<O: ByteOrder>(tag_id: TagID, cursor: &mut Cursor<'_, O>) -> Result<Value> {
        Self::read_payload_with(tag_id, cursor, &ReadConfig::default())
    }

    pub fn read_payload_with<O: ByteOrder>(
        tag_id: TagID,
        cursor: &mut Cursor<'_, O>,
        config: &ReadConfig,
    ) -> Result<Value> {
        read_payload(tag_id, cursor, config, 0)
    }
}

fn read_tag<O: ByteOrder>(
    cursor: &mut Cursor<'_, O>,
    config: &ReadConfig,
    depth: usize,
) -> Result<Tag> {
    let tag_id = TagID::from_u8(cursor.read_u8()?)?;
    if tag_id == TagID::End {
        return Ok(Tag::end());
    }
    let name = cursor.read_prefixed_text()?;
    let value = read_payload(tag_id, cursor, config, depth)?;
    Ok(Tag { name, value })
}

fn read_payload<O: ByteOrder>(
    tag_id: TagID,
    cursor: &mut Cursor<'_, O>,
    config: &ReadConfig,
    depth: usize,
) -> Result<Value> {
    Ok(match tag_id {
        TagID::End => Value::End,
        TagID::Byte => Value::Byte(cursor.read_i8()?),
        TagID::Short => Value::Short(cursor.read_i16()?),
        TagID::Int => Value::Int(cursor.read_i32()?),
        TagID::Long => Value::Long(cursor.read_i64()?),
        TagID::Float => Value::Float(cursor.read_f32()?),
        TagID::Double => Value::Double(cursor.read_f64()?),
        TagID::ByteArray => {
            let len = read_count(cursor, 1)?;
            Value::ByteArray(
                (0..len)
                    .map(|_| cursor.read_i8())
                    .collect::<Result<_>>()?,
            )
        }
        TagID::String => Value::String(cursor.read_prefixed_text()?),
        TagID::List => Value::List(read_list(cursor, config, depth + 1)?),
        TagID::Compound => Value::Compound(read_compound(cursor, config, depth + 1)?),
        TagID::IntArray => {
            let len = read_count(cursor, 4)?;
            Value::IntArray(
                (0..len)
                    .map(|_| cursor.read_i32())
                    .collect::<Result<_>>()?,
            )
        }
        TagID::LongArray => {
            let len = read_count(cursor, 8)?;
            Value::LongArray(
                (0..len)
                    .map(|_| cursor.read_i64())
                    .collect::<Result<_>>()?,
            )
        }
    })
}

/// Reads a signed 32-bit count and checks that `count` elements of at
/// least `min_size` bytes each can still fit in the input.
fn read_count<O: ByteOrder>(cursor: &mut Cursor<'_, O>, min_size: usize) -> Result<usize> {
    let raw = cursor.read_i32()?;
    let len = usize::try_from(raw).map_err(|_| Error::InvalidLength(raw))?;
    match len.checked_mul(min_size) {
        Some(size) if size <= cursor.remaining() => Ok(len),
        _ => Err(Error::LengthExceedsInput(len)),
    }
}

fn check_depth(config: &ReadConfig, depth: usize) -> Result<()> {
    if depth > config.max_depth {
        return Err(Error::DepthLimitExceeded(config.max_depth));
    }
    Ok(())
}

fn read_list<O: ByteOrder>(
    cursor: &mut Cursor<'_, O>,
    config: &ReadConfig,
    depth: usize,
) -> Result<List> {
    check_depth(config, depth)?;
    let element = TagID::from_u8(cursor.read_u8()?)?;
    let len = read_count(cursor, element.min_payload_size())?;
    // End payloads are zero bytes wide, so the bound above cannot cap them.
    if element == TagID::End && len != 0 {
        return Err(Error::InvalidLength(len as i32));
    }
    let mut items = Vec::with_capacity(len);
    for _ in 0..len {
        items.push(read_payload(element, cursor, config, depth)?);
    }
    Ok(List { element, items })
}

fn read_compound<O: ByteOrder>(
    cursor: &mut Cursor<'_, O>,
    config: &ReadConfig,
    depth: usize,
) -> Result<Vec<Tag>> {
    check_depth(config, depth)?;
    let mut children = Vec::new();
    loop {
        if cursor.peek()? == TagID::End as u8 {
            cursor.read_u8()?;
            return Ok(children);
        }
        children.push(read_tag(cursor, config, depth)?);
    }
}
