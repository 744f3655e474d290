use nbt_inventory::{BigEndian, Cursor, Error, Tag, TagID, Value};

// ==================== Helper Functions ====================

fn read(data: &[u8]) -> Result<Tag, Error> {
    Tag::read::<BigEndian>(&mut Cursor::new(data))
}

fn create_list_header(tag: u8, count: i32) -> Vec<u8> {
    let mut data = vec![0x09, 0x00, 0x00]; // Root list
    data.push(tag);
    data.extend_from_slice(&count.to_be_bytes());
    data
}

fn create_compound_start() -> Vec<u8> {
    vec![0x0A, 0x00, 0x00]
}

// ==================== Buffer Exhausted ====================

#[test]
fn test_empty_slice() {
    match read(&[]) {
        Err(Error::EndOfFile) => {}
        other => panic!("Expected EndOfFile, got {other:?}"),
    }
}

#[test]
fn test_eof_in_header() {
    match read(&[0x01, 0x00]) {
        Err(Error::EndOfFile) => {}
        other => panic!("Expected EndOfFile, got {other:?}"),
    }
}

#[test]
fn test_eof_in_name() {
    match read(&[0x01, 0x00, 0x05, b'S', b'l']) {
        Err(Error::EndOfFile) => {}
        other => panic!("Expected EndOfFile, got {other:?}"),
    }
}

#[test]
fn test_eof_in_scalar_payload() {
    for (tag, width) in [(2u8, 2usize), (3, 4), (4, 8), (5, 4), (6, 8)] {
        let mut data = vec![tag, 0x00, 0x00];
        data.extend(std::iter::repeat_n(0u8, width - 1));
        match read(&data) {
            Err(Error::EndOfFile) => {}
            other => panic!("Expected EndOfFile for tag {tag}, got {other:?}"),
        }
    }
}

#[test]
fn test_eof_in_string_body() {
    let data = vec![0x08, 0x00, 0x00, 0x00, 0x04, b'a', b'b'];
    match read(&data) {
        Err(Error::EndOfFile) => {}
        other => panic!("Expected EndOfFile, got {other:?}"),
    }
}

#[test]
fn test_eof_in_list_header() {
    match read(&[0x09, 0x00, 0x00, 0x01, 0x00]) {
        Err(Error::EndOfFile) => {}
        other => panic!("Expected EndOfFile, got {other:?}"),
    }
}

#[test]
fn test_eof_in_list_body_complex() {
    let mut data = create_list_header(10, 1); // Compound elements
    data.push(0x01); // Byte inside compound, header cut off
    match read(&data) {
        Err(Error::EndOfFile) => {}
        other => panic!("Expected EndOfFile, got {other:?}"),
    }
}

#[test]
fn test_compound_without_end() {
    let mut data = create_compound_start();
    data.extend_from_slice(&[0x01, 0x00, 0x01, b'a', 0x05]);
    match read(&data) {
        Err(Error::EndOfFile) => {}
        other => panic!("Expected EndOfFile, got {other:?}"),
    }
}

// ==================== Unknown Type Id ====================

#[test]
fn test_invalid_root_tag() {
    match read(&[0x0D, 0x00, 0x00]) {
        Err(Error::InvalidTagType(0x0D)) => {}
        other => panic!("Expected InvalidTagType, got {other:?}"),
    }
}

#[test]
fn test_invalid_tag_in_compound() {
    let mut data = create_compound_start();
    data.push(0xFF);
    match read(&data) {
        Err(Error::InvalidTagType(0xFF)) => {}
        other => panic!("Expected InvalidTagType, got {other:?}"),
    }
}

#[test]
fn test_invalid_list_element_type() {
    let data = create_list_header(0x20, 0);
    match read(&data) {
        Err(Error::InvalidTagType(0x20)) => {}
        other => panic!("Expected InvalidTagType, got {other:?}"),
    }
}

#[test]
fn test_tag_id_table() {
    for id in 0u8..=12 {
        assert_eq!(TagID::from_u8(id).unwrap().as_u8(), id);
    }
    for id in 13u8..=255 {
        assert!(matches!(TagID::try_from(id), Err(Error::InvalidTagType(b)) if b == id));
    }
}

// ==================== Malformed Counts ====================

#[test]
fn test_negative_list_count() {
    let data = create_list_header(1, -1);
    match read(&data) {
        Err(Error::InvalidLength(-1)) => {}
        other => panic!("Expected InvalidLength, got {other:?}"),
    }
}

#[test]
fn test_negative_array_count() {
    let mut data = vec![0x0B, 0x00, 0x00];
    data.extend_from_slice(&(-5i32).to_be_bytes());
    match read(&data) {
        Err(Error::InvalidLength(-5)) => {}
        other => panic!("Expected InvalidLength, got {other:?}"),
    }
}

#[test]
fn test_huge_count_is_rejected_before_reading() {
    let mut data = vec![0x0C, 0x00, 0x00];
    data.extend_from_slice(&i32::MAX.to_be_bytes());
    data.extend_from_slice(&[0; 16]);
    match read(&data) {
        Err(Error::LengthExceedsInput(len)) => assert_eq!(len, i32::MAX as usize),
        other => panic!("Expected LengthExceedsInput, got {other:?}"),
    }

    let data = create_list_header(10, 1000);
    match read(&data) {
        Err(Error::LengthExceedsInput(1000)) => {}
        other => panic!("Expected LengthExceedsInput, got {other:?}"),
    }
}

#[test]
fn test_list_of_end_with_elements() {
    let data = create_list_header(0, 3);
    match read(&data) {
        Err(Error::InvalidLength(3)) => {}
        other => panic!("Expected InvalidLength, got {other:?}"),
    }
}

#[test]
fn test_failure_inside_nested_value_fails_whole_decode() {
    // valid first child, broken second child
    let mut data = create_compound_start();
    data.extend_from_slice(&[0x01, 0x00, 0x01, b'a', 0x05]);
    data.extend_from_slice(&[0x0B, 0x00, 0x01, b'b', 0x00, 0x00, 0x00, 0x02, 0x00]);
    assert!(read(&data).is_err());

    // the same prefix alone, terminated, is fine
    let mut ok = create_compound_start();
    ok.extend_from_slice(&[0x01, 0x00, 0x01, b'a', 0x05, 0x00]);
    assert_eq!(
        read(&ok).unwrap().value,
        Value::Compound(vec![Tag::new("a", Value::Byte(5))])
    );
}
