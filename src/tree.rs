//! What a tree has to offer to be saved into and loaded from.
//!
//! A backend hands out cursors: [`NodeMut`] while saving, [`NodeRef`] while loading. The
//! document keeps ownership of every node, a cursor only points into it for one step of a walk.

use std::borrow::Cow;

use crate::ArchiveError;

/// Save side cursor.
pub trait NodeMut {
    type Child<'a>: NodeMut
    where
        Self: 'a;

    /// Appends a new child called `name`. Existing children are never reused.
    fn append_child(&mut self, name: &str) -> Result<Self::Child<'_>, ArchiveError>;

    fn set_text(&mut self, text: String);
}

/// A child met while enumerating a node.
#[derive(Clone, Copy, Debug)]
pub enum Child<N> {
    Element(N),
    /// Content that is not a named node, such as a comment or stray text.
    Other(&'static str),
}

/// Load side cursor.
pub trait NodeRef: Copy {
    fn name(&self) -> Cow<'_, str>;

    /// Text content of the node, empty when it has none.
    fn text(&self) -> Cow<'_, str>;

    /// First child whose name is exactly `name`.
    fn child(&self, name: &str) -> Option<Self>;

    /// Children in document order. Blank layout text is not reported.
    ///
    /// A property tree has nowhere to keep text beside its children, so its XML reader folds
    /// stray text into the node's value and only keyed children show up here.
    fn children(&self) -> impl Iterator<Item = Child<Self>>;
}

/// The owner of a tree.
pub trait Document {
    type Node<'a>: NodeMut
    where
        Self: 'a;
    type Root<'a>: NodeRef
    where
        Self: 'a;

    /// Appends a new top level node called `name`.
    fn append_root(&mut self, name: &str) -> Result<Self::Node<'_>, ArchiveError>;

    /// First top level node called `name`.
    fn find_root(&self, name: &str) -> Option<Self::Root<'_>>;
}
