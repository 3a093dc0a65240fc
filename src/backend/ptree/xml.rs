use std::io::{BufRead, Write};

use ::xml::{
    ParserConfig,
    reader::XmlEvent,
    writer::{EmitterConfig, EventWriter, XmlEvent as WriterEvent},
};

use super::{PropertyTree, PropertyTreeError};
use crate::{Format, backend::is_xml_name};

/// XML in property tree form: keys become element names, values become element text.
///
/// Text around child elements is kept only when it is not blank.
pub struct PtreeXml;

fn write_tree<W: Write>(writer: &mut EventWriter<W>, key: &str, tree: &PropertyTree) -> Result<(), PropertyTreeError> {
    if !is_xml_name(key) {
        return Err(PropertyTreeError::InvalidName(key.to_string()));
    }

    writer.write(WriterEvent::start_element(key))?;
    if !tree.value.is_empty() {
        writer.write(WriterEvent::characters(&tree.value))?;
    }
    for (child_key, child) in tree.iter() {
        write_tree(writer, child_key, child)?;
    }
    writer.write(WriterEvent::end_element())?;

    Ok(())
}

impl Format for PtreeXml {
    type Document = PropertyTree;
    type Error = PropertyTreeError;

    fn name() -> &'static str {
        "ptree_xml"
    }

    fn write(buffer: &mut impl Write, document: &PropertyTree) -> Result<(), PropertyTreeError> {
        let [(key, root)] = document.children.as_slice() else {
            return Err(PropertyTreeError::RootCount(document.len()));
        };

        let mut writer = EmitterConfig::new().perform_indent(true).create_writer(buffer);
        write_tree(&mut writer, key, root)
    }

    fn read(buffer: &mut impl BufRead) -> Result<PropertyTree, PropertyTreeError> {
        let reader = ParserConfig::new().create_reader(buffer);
        let mut open: Vec<(String, PropertyTree)> = Vec::new();
        let mut document = PropertyTree::new();

        for event in reader {
            match event? {
                XmlEvent::StartElement { name, .. } => open.push((name.local_name, PropertyTree::new())),
                XmlEvent::EndElement { .. } => {
                    let Some((key, mut tree)) = open.pop() else {
                        continue;
                    };

                    if !tree.children.is_empty() && tree.value.trim().is_empty() {
                        tree.value.clear();
                    }

                    match open.last_mut() {
                        Some((_, parent)) => parent.add_child(key, tree),
                        None => document.add_child(key, tree),
                    };
                }
                XmlEvent::Characters(text) | XmlEvent::CData(text) | XmlEvent::Whitespace(text) => {
                    if let Some((_, tree)) = open.last_mut() {
                        tree.value.push_str(&text);
                    }
                }
                _ => {}
            }
        }

        Ok(document)
    }
}
