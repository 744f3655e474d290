//! Example: listing and editing the inventory of a player save
//!
//! Prints the decoded inventory list and its items. With an output path and
//! one or more `slot:count:id` edits, writes a patched copy of the save.
//!
//! Run with:
//!   cargo run --example dump_inventory -- level.dat
//!   cargo run --example dump_inventory -- level.dat out.dat 0:64:minecraft:tnt

use std::env;

use nbt_inventory::{Item, SaveFile};
use tracing_subscriber::EnvFilter;

/// Parses `slot:count:id`; the id itself may contain colons.
fn parse_item(arg: &str) -> Option<Item> {
    let mut parts = arg.splitn(3, ':');
    let slot = parts.next()?.parse().ok()?;
    let count = parts.next()?.parse().ok()?;
    let id = parts.next()?;
    Some(Item::new(slot, count, id))
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let args: Vec<String> = env::args().collect();

    if args.len() < 2 {
        println!("Usage: cargo run --example dump_inventory -- <save.dat> [<out.dat> <slot:count:id>...]");
        return Ok(());
    }

    let save = SaveFile::open(&args[1])?;
    let region = save.region();
    println!(
        "Inventory at bytes {}..{} of {}",
        region.start,
        region.end,
        save.data().len()
    );
    println!("{}", save.inventory());
    println!();

    let mut items = save.items()?;
    for item in &items {
        let marker = if item.is_valid() { "" } else { " (invalid)" };
        println!("{item}{marker}");
    }

    if let Some(output) = args.get(2) {
        for arg in &args[3..] {
            let Some(edit) = parse_item(arg) else {
                return Err(format!("bad item {arg:?}, expected slot:count:id").into());
            };
            items.retain(|item| item.slot != edit.slot);
            items.push(edit);
        }
        items.retain(Item::is_valid);
        save.write_items(&items, output)?;
        println!("Wrote {} items to {output}", items.len());
    }

    Ok(())
}
