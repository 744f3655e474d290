use std::hint::black_box;

use criterion::{Criterion, criterion_group, criterion_main};
use nbt_inventory::{
    BigEndian, Cursor, INVENTORY_MARKER, Item, List, SaveFile, Tag, TagID, Value, locate,
};

fn full_inventory() -> Tag {
    let elements = (0..36)
        .map(|slot| {
            Value::Compound(vec![
                Tag::new("Slot", Value::Byte(slot)),
                Tag::new("id", Value::String(format!("minecraft:item_{slot}"))),
                Tag::new("Count", Value::Byte(64)),
                Tag::new(
                    "tag",
                    Value::Compound(vec![
                        Tag::new("Damage", Value::Int(slot as i32)),
                        Tag::new("Lore", Value::IntArray(vec![1, 2, 3, 4])),
                    ]),
                ),
            ])
        })
        .collect();
    Tag::new(
        "Inventory",
        Value::List(List::from_items(TagID::Compound, elements).unwrap()),
    )
}

fn save_buffer(inventory: &Tag) -> Vec<u8> {
    let mut data = vec![0x0A, 0x00, 0x00];
    Tag::new("Padding", Value::ByteArray(vec![7; 16 * 1024]))
        .write::<BigEndian>(&mut data)
        .unwrap();
    inventory.write::<BigEndian>(&mut data).unwrap();
    data.push(0x00);
    data
}

fn bench_codec(c: &mut Criterion) {
    let inventory = full_inventory();
    let bytes = inventory.write_to_vec::<BigEndian>().unwrap();
    let save = save_buffer(&inventory);

    c.bench_function("decode_inventory", |b| {
        b.iter(|| Tag::read::<BigEndian>(&mut Cursor::new(black_box(&bytes))).unwrap())
    });
    c.bench_function("encode_inventory", |b| {
        b.iter(|| black_box(&inventory).write_to_vec::<BigEndian>().unwrap())
    });
    c.bench_function("locate_marker", |b| {
        b.iter(|| locate(black_box(&save), &INVENTORY_MARKER).unwrap())
    });

    let file = SaveFile::from_decompressed(save.clone()).unwrap();
    let items: Vec<Item> = file.items().unwrap();
    c.bench_function("patch_save", |b| {
        b.iter(|| file.patched_bytes(black_box(&items)).unwrap())
    });
}

criterion_group!(benches, bench_codec);
criterion_main!(benches);
