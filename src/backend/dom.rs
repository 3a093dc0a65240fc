use std::{
    borrow::Cow,
    io::{BufRead, Write},
};

use thiserror::Error as ThisError;
use xml::{ParserConfig, reader::XmlEvent, writer::EmitterConfig};
use xmltree::{Element, ParseError, XMLNode};

use super::check_xml_name;
use crate::{
    ArchiveError, Document, Format,
    tree::{Child, NodeMut, NodeRef},
};

#[derive(Debug, ThisError)]
pub enum DomXmlError {
    #[error("IO Error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Failed To Parse XML: {0}")]
    Parse(#[from] ParseError),
    #[error("Failed To Write XML: {0}")]
    Write(#[from] xml::writer::Error),
    #[error("XML Needs Exactly One Root Element, Found {0}")]
    RootCount(usize),
}

/// Top level elements of an XML document held as `xmltree` elements.
#[derive(Clone, Debug, Default)]
pub struct DomDocument {
    roots: Vec<Element>,
}

impl DomDocument {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn roots(&self) -> &[Element] {
        &self.roots
    }
}

impl From<Element> for DomDocument {
    fn from(root: Element) -> Self {
        Self { roots: vec![root] }
    }
}

impl Document for DomDocument {
    type Node<'a> = &'a mut Element;
    type Root<'a> = &'a Element;

    fn append_root(&mut self, name: &str) -> Result<&mut Element, ArchiveError> {
        check_xml_name(name)?;
        let index = self.roots.len();
        self.roots.push(Element::new(name));
        Ok(&mut self.roots[index])
    }

    fn find_root(&self, name: &str) -> Option<&Element> {
        self.roots.iter().find(|root| root.name == name)
    }
}

impl NodeMut for &mut Element {
    type Child<'a>
        = &'a mut Element
    where
        Self: 'a;

    fn append_child(&mut self, name: &str) -> Result<&mut Element, ArchiveError> {
        check_xml_name(name)?;
        let index = self.children.len();
        self.children.push(XMLNode::Element(Element::new(name)));

        match &mut self.children[index] {
            XMLNode::Element(child) => Ok(child),
            _ => unreachable!("an element was just pushed"),
        }
    }

    fn set_text(&mut self, text: String) {
        if !text.is_empty() {
            self.children.push(XMLNode::Text(text));
        }
    }
}

impl<'e> NodeRef for &'e Element {
    fn name(&self) -> Cow<'_, str> {
        Cow::Borrowed(self.name.as_str())
    }

    fn text(&self) -> Cow<'_, str> {
        self.get_text().unwrap_or_default()
    }

    fn child(&self, name: &str) -> Option<Self> {
        let element: &'e Element = *self;

        element.children.iter().find_map(|node| match node {
            XMLNode::Element(child) if child.name == name => Some(child),
            _ => None,
        })
    }

    fn children(&self) -> impl Iterator<Item = Child<Self>> {
        let element: &'e Element = *self;

        element.children.iter().filter_map(|node| match node {
            XMLNode::Element(child) => Some(Child::Element(child)),
            XMLNode::Text(text) if text.trim().is_empty() => None,
            XMLNode::Text(_) | XMLNode::CData(_) => Some(Child::Other("text")),
            XMLNode::Comment(_) => Some(Child::Other("comment")),
            _ => Some(Child::Other("processing instruction")),
        })
    }
}

/// XML through `xmltree`.
pub struct DomXml;

impl Format for DomXml {
    type Document = DomDocument;
    type Error = DomXmlError;

    fn name() -> &'static str {
        "dom_xml"
    }

    fn write(buffer: &mut impl Write, document: &DomDocument) -> Result<(), DomXmlError> {
        match document.roots() {
            [root] => Ok(root.write_with_config(buffer, EmitterConfig::new().perform_indent(true))?),
            roots => Err(DomXmlError::RootCount(roots.len())),
        }
    }

    fn read(buffer: &mut impl BufRead) -> Result<DomDocument, DomXmlError> {
        let reader = ParserConfig::new()
            .ignore_comments(false)
            .whitespace_to_characters(true)
            .create_reader(buffer);
        let mut document = DomDocument::new();
        let mut open: Vec<Element> = Vec::new();

        for event in reader {
            match event.map_err(ParseError::MalformedXml)? {
                XmlEvent::StartElement { name, attributes, .. } => {
                    let mut element = Element::new(&name.local_name);
                    for attribute in attributes {
                        element.attributes.insert(attribute.name.local_name, attribute.value);
                    }
                    open.push(element);
                }
                XmlEvent::EndElement { .. } => {
                    let Some(mut element) = open.pop() else {
                        continue;
                    };
                    strip_layout(&mut element);

                    match open.last_mut() {
                        Some(parent) => parent.children.push(XMLNode::Element(element)),
                        None => document.roots.push(element),
                    }
                }
                XmlEvent::Characters(text) => append(&mut open, XMLNode::Text(text)),
                XmlEvent::CData(text) => append(&mut open, XMLNode::CData(text)),
                XmlEvent::Comment(text) => append(&mut open, XMLNode::Comment(text)),
                XmlEvent::ProcessingInstruction { name, data } => append(&mut open, XMLNode::ProcessingInstruction(name, data)),
                _ => {}
            }
        }

        Ok(document)
    }
}

/// Content outside the root element is dropped.
fn append(open: &mut [Element], node: XMLNode) {
    if let Some(parent) = open.last_mut() {
        parent.children.push(node);
    }
}

/// Drops blank text between the element children of `element`. A leaf keeps its text as is.
fn strip_layout(element: &mut Element) {
    if element.children.iter().any(|node| matches!(node, XMLNode::Element(_))) {
        element.children.retain(|node| !matches!(node, XMLNode::Text(text) if text.trim().is_empty()));
    }
}
