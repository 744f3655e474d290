use bytes::Bytes;
use nbt_inventory::{
    BigEndian, Cursor, INVENTORY_MARKER, LittleEndian, Region, Tag, splice, splice_shared,
};

/// Whatever decodes must re-encode to exactly the bytes it was read from.
pub fn test_round_trip(data: &[u8]) {
    let mut cursor = Cursor::<BigEndian>::new(data);
    if let Ok(tag) = Tag::read(&mut cursor) {
        let bytes = tag.write_to_vec::<BigEndian>().unwrap();
        assert_eq!(&bytes[..], &data[..cursor.position()]);
    }

    let mut cursor = Cursor::<LittleEndian>::new(data);
    if let Ok(tag) = Tag::read(&mut cursor) {
        let bytes = tag.write_to_vec::<LittleEndian>().unwrap();
        assert_eq!(&bytes[..], &data[..cursor.position()]);
    }
}

/// Splicing a located document with its own encoding is the identity.
pub fn test_region(data: &[u8]) {
    if let Ok((region, tag)) = Region::decode(data, &INVENTORY_MARKER) {
        let encoded = tag.write_to_vec::<BigEndian>().unwrap();
        assert_eq!(splice(data, region.start, region.end, &encoded).unwrap(), data);

        let shared = Bytes::copy_from_slice(data);
        let spliced = splice_shared(&shared, region.start, region.end, &encoded).unwrap();
        assert_eq!(spliced, shared);
    }
}
