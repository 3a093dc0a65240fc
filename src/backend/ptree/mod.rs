use std::borrow::Cow;

use thiserror::Error as ThisError;

use crate::{
    ArchiveError, Document,
    tree::{Child, NodeMut, NodeRef},
};

mod json;
pub use json::PtreeJson;

mod xml;
pub use xml::PtreeXml;

#[derive(Debug, ThisError)]
pub enum PropertyTreeError {
    #[error("IO Error: {0}")]
    Io(#[from] std::io::Error),
    #[error("JSON Error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("Failed To Read XML: {0}")]
    XmlRead(#[from] ::xml::reader::Error),
    #[error("Failed To Write XML: {0}")]
    XmlWrite(#[from] ::xml::writer::Error),
    #[error("XML Needs Exactly One Root Element, Found {0}")]
    RootCount(usize),
    #[error("Invalid XML Element Name: {0:?}")]
    InvalidName(String),
}

/// A node holding a text value and an ordered list of keyed children.
///
/// Keys do not have to be unique. The tree itself has no key, so a document is just
/// the tree whose children are the top level nodes.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct PropertyTree {
    value: String,
    children: Vec<(String, PropertyTree)>,
}

impl PropertyTree {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_value(value: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            children: Vec::new(),
        }
    }

    pub fn value(&self) -> &str {
        &self.value
    }

    pub fn set_value(&mut self, value: impl Into<String>) {
        self.value = value.into();
    }

    /// Appends a child under `key` and returns it.
    pub fn add_child(&mut self, key: impl Into<String>, child: PropertyTree) -> &mut PropertyTree {
        let index = self.children.len();
        self.children.push((key.into(), child));
        &mut self.children[index].1
    }

    /// First child stored under `key`.
    pub fn get_child(&self, key: &str) -> Option<&PropertyTree> {
        self.find(key).map(|(_, child)| child)
    }

    fn find(&self, key: &str) -> Option<(&str, &PropertyTree)> {
        self.children
            .iter()
            .find(|(child_key, _)| child_key == key)
            .map(|(child_key, child)| (child_key.as_str(), child))
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &PropertyTree)> {
        self.children.iter().map(|(key, child)| (key.as_str(), child))
    }

    pub fn len(&self) -> usize {
        self.children.len()
    }

    pub fn is_empty(&self) -> bool {
        self.children.is_empty()
    }
}

impl NodeMut for &mut PropertyTree {
    type Child<'a>
        = &'a mut PropertyTree
    where
        Self: 'a;

    fn append_child(&mut self, name: &str) -> Result<&mut PropertyTree, ArchiveError> {
        Ok(self.add_child(name, PropertyTree::new()))
    }

    fn set_text(&mut self, text: String) {
        self.value = text;
    }
}

/// Load cursor into a [`PropertyTree`], carrying the key it was found under.
#[derive(Clone, Copy, Debug)]
pub struct PtreeNode<'t> {
    key: &'t str,
    tree: &'t PropertyTree,
}

impl NodeRef for PtreeNode<'_> {
    fn name(&self) -> Cow<'_, str> {
        Cow::Borrowed(self.key)
    }

    fn text(&self) -> Cow<'_, str> {
        Cow::Borrowed(self.tree.value())
    }

    fn child(&self, name: &str) -> Option<Self> {
        let (key, tree) = self.tree.find(name)?;
        Some(PtreeNode { key, tree })
    }

    fn children(&self) -> impl Iterator<Item = Child<Self>> {
        self.tree.iter().map(|(key, tree)| Child::Element(PtreeNode { key, tree }))
    }
}

impl Document for PropertyTree {
    type Node<'a> = &'a mut PropertyTree;
    type Root<'a> = PtreeNode<'a>;

    fn append_root(&mut self, name: &str) -> Result<&mut PropertyTree, ArchiveError> {
        Ok(self.add_child(name, PropertyTree::new()))
    }

    fn find_root(&self, name: &str) -> Option<PtreeNode<'_>> {
        let (key, tree) = self.find(name)?;
        Some(PtreeNode { key, tree })
    }
}
