use std::{
    borrow::Cow,
    io::{BufRead, Write},
};

use indexmap::IndexSet;
use thiserror::Error as ThisError;
use xml::{
    ParserConfig,
    reader::XmlEvent,
    writer::{EmitterConfig, EventWriter, XmlEvent as WriterEvent},
};

use super::check_xml_name;
use crate::{
    ArchiveError, Document, Format,
    tree::{Child, NodeMut, NodeRef},
};

#[derive(Debug, ThisError)]
pub enum ArenaXmlError {
    #[error("IO Error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Failed To Read XML: {0}")]
    Read(#[from] xml::reader::Error),
    #[error("Failed To Write XML: {0}")]
    Write(#[from] xml::writer::Error),
    #[error("XML Needs Exactly One Root Element, Found {0}")]
    RootCount(usize),
}

/// Index of a node inside the [`ArenaDocument`] that created it.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct NodeId(usize);

#[derive(Clone, Debug)]
enum NodeKind {
    Document,
    /// Index into the document's name table.
    Element(usize),
    Text(String),
    Comment(String),
}

#[derive(Clone, Debug)]
struct NodeData {
    kind: NodeKind,
    children: Vec<NodeId>,
}

/// An XML document stored as a flat list of nodes.
///
/// Node 0 is the document itself, top level elements are its children. Element names are
/// interned, so looking a child up by name compares indices once the name is resolved.
#[derive(Clone, Debug)]
pub struct ArenaDocument {
    nodes: Vec<NodeData>,
    names: IndexSet<String>,
}

impl Default for ArenaDocument {
    fn default() -> Self {
        Self {
            nodes: vec![NodeData {
                kind: NodeKind::Document,
                children: Vec::new(),
            }],
            names: IndexSet::new(),
        }
    }
}

impl ArenaDocument {
    pub const ROOT: NodeId = NodeId(0);

    pub fn new() -> Self {
        Self::default()
    }

    pub fn append_element(&mut self, parent: NodeId, name: &str) -> NodeId {
        let symbol = match self.names.get_index_of(name) {
            Some(symbol) => symbol,
            None => self.names.insert_full(name.to_string()).0,
        };
        self.push(parent, NodeKind::Element(symbol))
    }

    pub fn append_text(&mut self, parent: NodeId, text: impl Into<String>) -> NodeId {
        self.push(parent, NodeKind::Text(text.into()))
    }

    pub fn append_comment(&mut self, parent: NodeId, text: impl Into<String>) -> NodeId {
        self.push(parent, NodeKind::Comment(text.into()))
    }

    fn push(&mut self, parent: NodeId, kind: NodeKind) -> NodeId {
        let node = NodeId(self.nodes.len());
        self.nodes.push(NodeData { kind, children: Vec::new() });
        self.nodes[parent.0].children.push(node);
        node
    }

    /// Name of an element node, `None` for any other kind of node.
    pub fn name(&self, node: NodeId) -> Option<&str> {
        match self.nodes[node.0].kind {
            NodeKind::Element(symbol) => self.names.get_index(symbol).map(String::as_str),
            _ => None,
        }
    }

    pub fn children(&self, node: NodeId) -> &[NodeId] {
        &self.nodes[node.0].children
    }

    /// Concatenated text children of a node.
    pub fn text(&self, node: NodeId) -> Cow<'_, str> {
        let mut texts = self.children(node).iter().filter_map(|&child| match &self.nodes[child.0].kind {
            NodeKind::Text(text) => Some(text.as_str()),
            _ => None,
        });

        let Some(first) = texts.next() else {
            return Cow::Borrowed("");
        };

        match texts.next() {
            None => Cow::Borrowed(first),
            Some(second) => {
                let mut text = format!("{first}{second}");
                texts.for_each(|rest| text.push_str(rest));
                Cow::Owned(text)
            }
        }
    }

    pub fn elements(&self, node: NodeId) -> impl Iterator<Item = NodeId> + '_ {
        self.children(node)
            .iter()
            .copied()
            .filter(|&child| matches!(self.nodes[child.0].kind, NodeKind::Element(_)))
    }

    /// First element child of `parent` called `name`.
    pub fn find_element(&self, parent: NodeId, name: &str) -> Option<NodeId> {
        let symbol = self.names.get_index_of(name)?;
        self.children(parent)
            .iter()
            .copied()
            .find(|&child| matches!(self.nodes[child.0].kind, NodeKind::Element(found) if found == symbol))
    }

    /// Drops blank text between the element children of `node`.
    fn strip_layout(&mut self, node: NodeId) {
        if self.elements(node).next().is_none() {
            return;
        }

        let nodes = &self.nodes;
        let children: Vec<NodeId> = nodes[node.0]
            .children
            .iter()
            .copied()
            .filter(|&child| !matches!(&nodes[child.0].kind, NodeKind::Text(text) if text.trim().is_empty()))
            .collect();
        self.nodes[node.0].children = children;
    }
}

/// Save cursor into an [`ArenaDocument`].
pub struct ArenaCursor<'d> {
    document: &'d mut ArenaDocument,
    node: NodeId,
}

impl NodeMut for ArenaCursor<'_> {
    type Child<'a>
        = ArenaCursor<'a>
    where
        Self: 'a;

    fn append_child(&mut self, name: &str) -> Result<ArenaCursor<'_>, ArchiveError> {
        check_xml_name(name)?;
        let node = self.document.append_element(self.node, name);
        Ok(ArenaCursor {
            document: &mut *self.document,
            node,
        })
    }

    fn set_text(&mut self, text: String) {
        if !text.is_empty() {
            self.document.append_text(self.node, text);
        }
    }
}

/// Load cursor into an [`ArenaDocument`].
#[derive(Clone, Copy, Debug)]
pub struct ArenaNode<'d> {
    document: &'d ArenaDocument,
    node: NodeId,
}

impl ArenaNode<'_> {
    pub fn id(&self) -> NodeId {
        self.node
    }
}

impl NodeRef for ArenaNode<'_> {
    fn name(&self) -> Cow<'_, str> {
        Cow::Borrowed(self.document.name(self.node).unwrap_or_default())
    }

    fn text(&self) -> Cow<'_, str> {
        self.document.text(self.node)
    }

    fn child(&self, name: &str) -> Option<Self> {
        let node = self.document.find_element(self.node, name)?;
        Some(ArenaNode { document: self.document, node })
    }

    fn children(&self) -> impl Iterator<Item = Child<Self>> {
        let document = self.document;

        document.children(self.node).iter().filter_map(move |&node| match &document.nodes[node.0].kind {
            NodeKind::Element(_) => Some(Child::Element(ArenaNode { document, node })),
            NodeKind::Text(text) if text.trim().is_empty() => None,
            NodeKind::Text(_) => Some(Child::Other("text")),
            NodeKind::Comment(_) => Some(Child::Other("comment")),
            NodeKind::Document => None,
        })
    }
}

impl Document for ArenaDocument {
    type Node<'a> = ArenaCursor<'a>;
    type Root<'a> = ArenaNode<'a>;

    fn append_root(&mut self, name: &str) -> Result<ArenaCursor<'_>, ArchiveError> {
        check_xml_name(name)?;
        let node = self.append_element(Self::ROOT, name);
        Ok(ArenaCursor { document: self, node })
    }

    fn find_root(&self, name: &str) -> Option<ArenaNode<'_>> {
        let node = self.find_element(Self::ROOT, name)?;
        Some(ArenaNode { document: self, node })
    }
}

fn write_node<W: Write>(writer: &mut EventWriter<W>, document: &ArenaDocument, node: NodeId) -> Result<(), xml::writer::Error> {
    match &document.nodes[node.0].kind {
        NodeKind::Element(_) => {
            writer.write(WriterEvent::start_element(document.name(node).unwrap_or_default()))?;
            for &child in document.children(node) {
                write_node(writer, document, child)?;
            }
            writer.write(WriterEvent::end_element())?;
        }
        NodeKind::Text(text) => writer.write(WriterEvent::characters(text))?,
        NodeKind::Comment(text) => writer.write(WriterEvent::comment(text))?,
        NodeKind::Document => {}
    }
    Ok(())
}

/// XML through the arena document.
///
/// Comments are kept, so they show up as unexpected content inside containers.
pub struct ArenaXml;

impl Format for ArenaXml {
    type Document = ArenaDocument;
    type Error = ArenaXmlError;

    fn name() -> &'static str {
        "arena_xml"
    }

    fn write(buffer: &mut impl Write, document: &ArenaDocument) -> Result<(), ArenaXmlError> {
        let roots = document.elements(ArenaDocument::ROOT).count();
        if roots != 1 {
            return Err(ArenaXmlError::RootCount(roots));
        }

        let mut writer = EmitterConfig::new().perform_indent(true).create_writer(buffer);
        for &node in document.children(ArenaDocument::ROOT) {
            write_node(&mut writer, document, node)?;
        }

        Ok(())
    }

    fn read(buffer: &mut impl BufRead) -> Result<ArenaDocument, ArenaXmlError> {
        let reader = ParserConfig::new().ignore_comments(false).create_reader(buffer);
        let mut document = ArenaDocument::new();
        let mut open = vec![ArenaDocument::ROOT];

        for event in reader {
            let parent = open.last().copied().unwrap_or(ArenaDocument::ROOT);

            match event? {
                XmlEvent::StartElement { name, .. } => {
                    let node = document.append_element(parent, &name.local_name);
                    open.push(node);
                }
                XmlEvent::EndElement { .. } => {
                    if let Some(node) = open.pop() {
                        document.strip_layout(node);
                    }
                }
                XmlEvent::Characters(text) | XmlEvent::CData(text) | XmlEvent::Whitespace(text) => {
                    if parent != ArenaDocument::ROOT {
                        document.append_text(parent, text);
                    }
                }
                XmlEvent::Comment(text) => {
                    document.append_comment(parent, text);
                }
                _ => {}
            }
        }

        Ok(document)
    }
}
