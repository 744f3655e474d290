//! Codec for the NBT tagged-tree format, plus the pieces needed to edit the
//! inventory list embedded in a gzip-compressed save file without touching
//! any other byte of it.
//!
//! ```
//! use nbt_inventory::{BigEndian, Cursor, List, Tag, TagID, Value};
//!
//! let slot = Value::Compound(vec![
//!     Tag::new("Slot", Value::Byte(2)),
//!     Tag::new("id", Value::String("minecraft:tnt".into())),
//!     Tag::new("Count", Value::Byte(64)),
//! ]);
//! let inventory = Tag::new(
//!     "Inventory",
//!     Value::List(List::from_items(TagID::Compound, vec![slot]).unwrap()),
//! );
//! let bytes = inventory.write_to_vec::<BigEndian>().unwrap();
//! let decoded = Tag::read::<BigEndian>(&mut Cursor::new(&bytes)).unwrap();
//! assert_eq!(decoded, inventory);
//! ```

pub use zerocopy::BigEndian;
pub use zerocopy::LittleEndian;

mod config;
mod cursor;
mod error;
pub mod inventory;
pub mod patch;
mod read;
pub mod region;
pub mod save;
mod tag;
pub mod text;
mod util;
mod value;
mod write;

pub use config::*;
pub use cursor::*;
pub use error::*;
pub use inventory::{Item, items_from_list, rebuild_list};
pub use patch::*;
pub use region::*;
pub use save::SaveFile;
pub use tag::*;
pub use util::*;
pub use value::*;
