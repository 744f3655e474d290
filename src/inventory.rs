//! Flat view of the inventory list.
//!
//! Each element of the `Inventory` list is a compound with `Slot` (Byte),
//! `Count` (Byte) and `id` (String) children. [`items_from_list`] reads them
//! out, [`rebuild_list`] produces a replacement list from edited items.

use std::fmt;

use crate::{Error, List, Result, Tag, TagID, Value};

pub const SLOT: &str = "Slot";
pub const COUNT: &str = "Count";
pub const ID: &str = "id";

/// One inventory entry. A field is `None` when the compound lacked that
/// child or held it with an unexpected type.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Item {
    pub slot: Option<i8>,
    pub count: Option<i8>,
    pub id: Option<String>,
}

impl Item {
    pub fn new(slot: i8, count: i8, id: impl Into<String>) -> Self {
        Self {
            slot: Some(slot),
            count: Some(count),
            id: Some(id.into()),
        }
    }

    /// Reads the `Slot`, `Count` and `id` children; others are ignored. When
    /// a name repeats, the last child with it wins.
    pub fn from_compound(children: &[Tag]) -> Self {
        let find = |name: &str| children.iter().rev().find(|tag| tag.name == name);
        Self {
            slot: find(SLOT).and_then(|tag| tag.value.as_byte()),
            count: find(COUNT).and_then(|tag| tag.value.as_byte()),
            id: find(ID).and_then(|tag| tag.value.as_str()).map(str::to_owned),
        }
    }

    /// Slot in the hotbar/main grid (0..=35), armor (100..=103) or the
    /// offhand (-106), a count of 1..=255 as an unsigned byte and a
    /// non-empty id.
    ///
    /// ```
    /// use nbt_inventory::Item;
    ///
    /// assert!(Item::new(-106, 1, "minecraft:shield").is_valid());
    /// assert!(!Item::new(36, 1, "minecraft:stone").is_valid());
    /// assert!(!Item::new(0, 0, "minecraft:stone").is_valid());
    /// ```
    pub fn is_valid(&self) -> bool {
        let (Some(slot), Some(count), Some(id)) = (self.slot, self.count, &self.id) else {
            return false;
        };
        matches!(slot, 0..=35 | 100..=103 | -106) && count != 0 && !id.is_empty()
    }

    /// Element compound in `Slot`, `id`, `Count` order.
    fn to_compound(&self, index: usize) -> Result<Value> {
        let (Some(slot), Some(count), Some(id)) = (self.slot, self.count, &self.id) else {
            return Err(Error::InvalidItem(index));
        };
        Ok(Value::Compound(vec![
            Tag::new(SLOT, Value::Byte(slot)),
            Tag::new(ID, Value::String(id.clone())),
            Tag::new(COUNT, Value::Byte(count)),
        ]))
    }
}

impl fmt::Display for Item {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fn opt<T: fmt::Display>(value: &Option<T>) -> String {
            value
                .as_ref()
                .map_or_else(|| "?".to_owned(), ToString::to_string)
        }
        write!(
            f,
            "Slot {}, Count {}, ID {}",
            opt(&self.slot),
            opt(&self.count),
            opt(&self.id)
        )
    }
}

/// Extracts one [`Item`] per compound element of an inventory list.
/// Elements that are not compounds give an empty item.
///
/// # Errors
///
/// [`Error::NotAList`] if `tag` is not a List.
pub fn items_from_list(tag: &Tag) -> Result<Vec<Item>> {
    let list = tag
        .value
        .as_list()
        .ok_or(Error::NotAList(tag.tag_id().as_u8()))?;
    Ok(list
        .iter()
        .map(|element| element.as_compound().map(Item::from_compound).unwrap_or_default())
        .collect())
}

/// A list with `template`'s name whose compound elements hold `items`.
/// With no items the template's element type is kept.
///
/// # Errors
///
/// [`Error::NotAList`] if `template` is not a List, [`Error::InvalidItem`]
/// for the first item missing a field.
pub fn rebuild_list(template: &Tag, items: &[Item]) -> Result<Tag> {
    let Some(original) = template.value.as_list() else {
        return Err(Error::NotAList(template.tag_id().as_u8()));
    };
    // an empty inventory may be stored as a list of End
    let element = if items.is_empty() {
        original.element
    } else {
        TagID::Compound
    };
    let elements = items
        .iter()
        .enumerate()
        .map(|(index, item)| item.to_compound(index))
        .collect::<Result<Vec<_>>>()?;
    Ok(Tag::new(
        template.name.clone(),
        Value::List(List::from_items(element, elements)?),
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn element(children: Vec<Tag>) -> Value {
        Value::Compound(children)
    }

    #[test]
    fn extra_and_missing_children() {
        let list = Tag::new(
            "Inventory",
            Value::List(List {
                element: TagID::Compound,
                items: vec![
                    element(vec![
                        Tag::new("Slot", Value::Byte(3)),
                        Tag::new("tag", Value::Compound(vec![])),
                        Tag::new("id", Value::String("minecraft:bow".into())),
                        Tag::new("Count", Value::Byte(1)),
                    ]),
                    element(vec![
                        Tag::new("Slot", Value::Int(4)),
                        Tag::new("id", Value::String("minecraft:dirt".into())),
                    ]),
                ],
            }),
        );
        let items = items_from_list(&list).unwrap();
        assert_eq!(items[0], Item::new(3, 1, "minecraft:bow"));
        assert_eq!(
            items[1],
            Item {
                slot: None,
                count: None,
                id: Some("minecraft:dirt".into()),
            }
        );
        assert!(!items[1].is_valid());
    }

    #[test]
    fn repeated_child_last_wins() {
        let item = Item::from_compound(&[
            Tag::new("Slot", Value::Byte(0)),
            Tag::new("Count", Value::Byte(1)),
            Tag::new("id", Value::String("minecraft:stone".into())),
            Tag::new("Count", Value::Byte(5)),
        ]);
        assert_eq!(item, Item::new(0, 5, "minecraft:stone"));
    }

    #[test]
    fn count_is_checked_as_unsigned_byte() {
        let with_count = |count: i8| Item::new(0, count, "minecraft:stone");
        assert!(!with_count(0).is_valid());
        assert!(with_count(1).is_valid());
        assert!(with_count(127).is_valid());
        // 0xC8, a stored count of 200
        assert!(with_count(-56).is_valid());
        assert!(with_count(200u8 as i8).is_valid());
    }

    #[test]
    fn rebuild_rejects_incomplete_item() {
        let template = Tag::new("Inventory", Value::List(List::new(TagID::Compound)));
        let items = [Item::new(0, 1, "a"), Item::default()];
        match rebuild_list(&template, &items) {
            Err(Error::InvalidItem(1)) => {}
            other => panic!("expected InvalidItem, got {other:?}"),
        }
    }

    #[test]
    fn non_list_is_rejected() {
        let tag = Tag::new("Inventory", Value::Int(0));
        assert!(matches!(items_from_list(&tag), Err(Error::NotAList(3))));
        assert!(matches!(rebuild_list(&tag, &[]), Err(Error::NotAList(3))));
    }

    #[test]
    fn display_marks_missing_fields() {
        let item = Item {
            slot: Some(2),
            count: None,
            id: Some("minecraft:tnt".into()),
        };
        assert_eq!(item.to_string(), "Slot 2, Count ?, ID minecraft:tnt");
    }
}
