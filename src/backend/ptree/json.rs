use std::{
    fmt::{self, Formatter},
    io::{BufRead, Write},
};

use serde::{
    Deserialize, Deserializer, Serialize, Serializer,
    de::{Error as DeError, MapAccess, SeqAccess, Visitor},
    ser::{Error as _, SerializeMap, SerializeSeq},
};

use super::{PropertyTree, PropertyTreeError};
use crate::Format;

/// JSON in property tree form.
///
/// A node without children is a string. A node whose children all have empty keys is an
/// array, any other node is an object. Repeated keys are written and read back as repeated
/// object members, in order. Numbers, booleans and null are read as their text.
pub struct PtreeJson;

impl Format for PtreeJson {
    type Document = PropertyTree;
    type Error = PropertyTreeError;

    fn name() -> &'static str {
        "ptree_json"
    }

    fn write(buffer: &mut impl Write, document: &PropertyTree) -> Result<(), PropertyTreeError> {
        serde_json::to_writer_pretty(&mut *buffer, document)?;
        buffer.write_all(b"\n")?;
        Ok(())
    }

    fn read(buffer: &mut impl BufRead) -> Result<PropertyTree, PropertyTreeError> {
        Ok(serde_json::from_reader(buffer)?)
    }
}

impl Serialize for PropertyTree {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        if self.children.is_empty() {
            return serializer.serialize_str(&self.value);
        }

        if !self.value.is_empty() {
            return Err(S::Error::custom("node holds both a value and children"));
        }

        if self.children.iter().all(|(key, _)| key.is_empty()) {
            let mut sequence = serializer.serialize_seq(Some(self.children.len()))?;
            for (_, child) in &self.children {
                sequence.serialize_element(child)?;
            }
            return sequence.end();
        }

        let mut map = serializer.serialize_map(Some(self.children.len()))?;
        for (key, child) in &self.children {
            map.serialize_entry(key, child)?;
        }
        map.end()
    }
}

struct PropertyTreeVisitor;

impl<'de> Visitor<'de> for PropertyTreeVisitor {
    type Value = PropertyTree;

    fn expecting(&self, formatter: &mut Formatter) -> fmt::Result {
        formatter.write_str("a JSON value")
    }

    fn visit_bool<E: DeError>(self, value: bool) -> Result<PropertyTree, E> {
        Ok(PropertyTree::with_value(value.to_string()))
    }

    fn visit_i64<E: DeError>(self, value: i64) -> Result<PropertyTree, E> {
        Ok(PropertyTree::with_value(value.to_string()))
    }

    fn visit_u64<E: DeError>(self, value: u64) -> Result<PropertyTree, E> {
        Ok(PropertyTree::with_value(value.to_string()))
    }

    fn visit_f64<E: DeError>(self, value: f64) -> Result<PropertyTree, E> {
        Ok(PropertyTree::with_value(value.to_string()))
    }

    fn visit_str<E: DeError>(self, value: &str) -> Result<PropertyTree, E> {
        Ok(PropertyTree::with_value(value))
    }

    fn visit_string<E: DeError>(self, value: String) -> Result<PropertyTree, E> {
        Ok(PropertyTree::with_value(value))
    }

    fn visit_unit<E: DeError>(self) -> Result<PropertyTree, E> {
        Ok(PropertyTree::with_value("null"))
    }

    fn visit_seq<A: SeqAccess<'de>>(self, mut sequence: A) -> Result<PropertyTree, A::Error> {
        let mut tree = PropertyTree::new();
        while let Some(child) = sequence.next_element::<PropertyTree>()? {
            tree.add_child(String::new(), child);
        }
        Ok(tree)
    }

    fn visit_map<A: MapAccess<'de>>(self, mut map: A) -> Result<PropertyTree, A::Error> {
        let mut tree = PropertyTree::new();
        while let Some((key, child)) = map.next_entry::<String, PropertyTree>()? {
            tree.add_child(key, child);
        }
        Ok(tree)
    }
}

impl<'de> Deserialize<'de> for PropertyTree {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_any(PropertyTreeVisitor)
    }
}
