//! In-memory tag tree.
//!
//! A [`Tag`] is a fully-headered node: a name plus a [`Value`]. Compounds
//! hold `Tag`s because each child carries its own header on the wire. Lists
//! and the three array types hold payloads only, so their elements are bare
//! [`Value`]s (or plain numbers for the arrays).

use std::fmt;

use crate::{Error, Result, TagID};

/// A named node of the tree.
///
/// The type id is not stored separately: it is always [`Value::tag_id`] of
/// `value`, so a decoded tag's id matches the byte it was read from.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Tag {
    pub name: String,
    pub value: Value,
}

/// The payload of a tag, without type id or name.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Value {
    End,
    Byte(i8),
    Short(i16),
    Int(i32),
    Long(i64),
    Float(f32),
    Double(f64),
    ByteArray(Vec<i8>),
    String(String),
    List(List),
    /// Children in stream order. The End terminator is never stored.
    Compound(Vec<Tag>),
    IntArray(Vec<i32>),
    LongArray(Vec<i64>),
}

/// A homogeneous sequence of payloads sharing one element type.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct List {
    pub element: TagID,
    pub items: Vec<Value>,
}

impl Tag {
    pub fn new(name: impl Into<String>, value: Value) -> Self {
        Self {
            name: name.into(),
            value,
        }
    }

    /// The End marker that terminates a compound.
    pub const fn end() -> Self {
        Self {
            name: String::new(),
            value: Value::End,
        }
    }

    #[inline]
    pub fn tag_id(&self) -> TagID {
        self.value.tag_id()
    }

    /// First compound child called `name`, if this tag is a compound.
    pub fn get(&self, name: &str) -> Option<&Tag> {
        self.value.get(name)
    }

    pub fn get_mut(&mut self, name: &str) -> Option<&mut Tag> {
        self.value.get_mut(name)
    }
}

impl Value {
    pub fn tag_id(&self) -> TagID {
        match self {
            Value::End => TagID::End,
            Value::Byte(_) => TagID::Byte,
            Value::Short(_) => TagID::Short,
            Value::Int(_) => TagID::Int,
            Value::Long(_) => TagID::Long,
            Value::Float(_) => TagID::Float,
            Value::Double(_) => TagID::Double,
            Value::ByteArray(_) => TagID::ByteArray,
            Value::String(_) => TagID::String,
            Value::List(_) => TagID::List,
            Value::Compound(_) => TagID::Compound,
            Value::IntArray(_) => TagID::IntArray,
            Value::LongArray(_) => TagID::LongArray,
        }
    }

    pub fn get(&self, name: &str) -> Option<&Tag> {
        self.as_compound()?.iter().find(|tag| tag.name == name)
    }

    pub fn get_mut(&mut self, name: &str) -> Option<&mut Tag> {
        match self {
            Value::Compound(children) => children.iter_mut().find(|tag| tag.name == name),
            _ => None,
        }
    }

    pub fn as_byte(&self) -> Option<i8> {
        match self {
            Value::Byte(v) => Some(*v),
            _ => None,
        }
    }

    pub fn as_short(&self) -> Option<i16> {
        match self {
            Value::Short(v) => Some(*v),
            _ => None,
        }
    }

    pub fn as_int(&self) -> Option<i32> {
        match self {
            Value::Int(v) => Some(*v),
            _ => None,
        }
    }

    pub fn as_long(&self) -> Option<i64> {
        match self {
            Value::Long(v) => Some(*v),
            _ => None,
        }
    }

    pub fn as_float(&self) -> Option<f32> {
        match self {
            Value::Float(v) => Some(*v),
            _ => None,
        }
    }

    pub fn as_double(&self) -> Option<f64> {
        match self {
            Value::Double(v) => Some(*v),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::String(v) => Some(v),
            _ => None,
        }
    }

    pub fn as_list(&self) -> Option<&List> {
        match self {
            Value::List(v) => Some(v),
            _ => None,
        }
    }

    pub fn as_compound(&self) -> Option<&[Tag]> {
        match self {
            Value::Compound(v) => Some(v),
            _ => None,
        }
    }
}

impl List {
    pub const fn new(element: TagID) -> Self {
        Self {
            element,
            items: Vec::new(),
        }
    }

    /// Builds a list, checking every item against `element`.
    pub fn from_items(element: TagID, items: Vec<Value>) -> Result<Self> {
        let list = Self { element, items };
        list.check_homogeneous()?;
        Ok(list)
    }

    /// Appends `item` if it has the list's element type.
    pub fn push(&mut self, item: Value) -> Result<()> {
        let actual = item.tag_id();
        if actual != self.element {
            return Err(Error::TagMismatch(self.element.as_u8(), actual.as_u8()));
        }
        self.items.push(item);
        Ok(())
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Value> {
        self.items.iter()
    }

    pub(crate) fn check_homogeneous(&self) -> Result<()> {
        match self.items.iter().find(|item| item.tag_id() != self.element) {
            Some(item) => Err(Error::TagMismatch(
                self.element.as_u8(),
                item.tag_id().as_u8(),
            )),
            None => Ok(()),
        }
    }
}

impl<'a> IntoIterator for &'a List {
    type Item = &'a Value;
    type IntoIter = std::slice::Iter<'a, Value>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

impl fmt::Display for Tag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_tree(f, Some(&self.name), &self.value, 0)
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_tree(f, None, self, 0)
    }
}

fn write_tree(
    f: &mut fmt::Formatter<'_>,
    name: Option<&str>,
    value: &Value,
    indent: usize,
) -> fmt::Result {
    let pad = "  ".repeat(indent);
    let label = match name {
        Some(name) => format!("{name:?}: "),
        None => String::new(),
    };
    match value {
        Value::End => write!(f, "{pad}End"),
        Value::Byte(v) => write!(f, "{pad}{label}Byte({v})"),
        Value::Short(v) => write!(f, "{pad}{label}Short({v})"),
        Value::Int(v) => write!(f, "{pad}{label}Int({v})"),
        Value::Long(v) => write!(f, "{pad}{label}Long({v})"),
        Value::Float(v) => write!(f, "{pad}{label}Float({v})"),
        Value::Double(v) => write!(f, "{pad}{label}Double({v})"),
        Value::ByteArray(v) => write!(f, "{pad}{label}ByteArray({v:?})"),
        Value::String(v) => write!(f, "{pad}{label}String({v:?})"),
        Value::IntArray(v) => write!(f, "{pad}{label}IntArray({v:?})"),
        Value::LongArray(v) => write!(f, "{pad}{label}LongArray({v:?})"),
        Value::List(list) => {
            write!(f, "{pad}{label}List<{:?}>[{}] {{", list.element, list.len())?;
            for item in list {
                writeln!(f)?;
                write_tree(f, None, item, indent + 1)?;
            }
            write!(f, "\n{pad}}}")
        }
        Value::Compound(children) => {
            write!(f, "{pad}{label}Compound[{}] {{", children.len())?;
            for child in children {
                writeln!(f)?;
                write_tree(f, Some(&child.name), &child.value, indent + 1)?;
            }
            write!(f, "\n{pad}}}")
        }
    }
}
