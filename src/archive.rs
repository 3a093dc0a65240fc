use crate::{
    ArchiveError, Document, NamedContainer, NamedValue, Scalar, Sequence, Value,
    frontend::{Archive, make_nvp},
    tree::{Child, NodeMut, NodeRef},
};

/// How a [`Loader`] treats nodes inside a container that are not items.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum LoadPolicy {
    /// Skip them with a warning.
    #[default]
    Lenient,
    /// Fail the load with [`ArchiveError::UnexpectedSibling`].
    Strict,
}

impl LoadPolicy {
    fn unexpected(self, container: &str, expected: &str, found: String) -> Result<(), ArchiveError> {
        match self {
            LoadPolicy::Lenient => {
                log::warn!("skipping {found} under container {container:?}, expected {expected:?}");
                Ok(())
            }
            LoadPolicy::Strict => Err(ArchiveError::UnexpectedSibling {
                container: container.to_string(),
                expected: expected.to_string(),
                found,
            }),
        }
    }
}

/// Writes a record into the tree below its cursor.
pub struct Saver<N> {
    cursor: N,
}

impl<N: NodeMut> Saver<N> {
    pub fn new(cursor: N) -> Self {
        Self { cursor }
    }
}

impl<N: NodeMut> Archive for Saver<N> {
    type Error = ArchiveError;

    fn scalar<S: Scalar>(&mut self, value: &mut S) -> Result<(), ArchiveError> {
        self.cursor.set_text(value.to_text());
        Ok(())
    }

    fn named_value<T: Value + ?Sized>(&mut self, entry: NamedValue<'_, T>) -> Result<(), ArchiveError> {
        let child = self.cursor.append_child(entry.name)?;
        entry.value.dispatch(&mut Saver::new(child))
    }

    fn named_container<S: Sequence + ?Sized>(&mut self, entry: NamedContainer<'_, S>) -> Result<(), ArchiveError> {
        let mut container = Saver::new(self.cursor.append_child(entry.container_name)?);

        for item in entry.sequence.items_mut() {
            container.named_value(make_nvp(entry.item_name, item))?;
        }

        Ok(())
    }
}

/// Fills a record from the tree below its cursor.
pub struct Loader<N> {
    cursor: N,
    policy: LoadPolicy,
}

impl<N: NodeRef> Loader<N> {
    pub fn new(cursor: N) -> Self {
        Self::with_policy(cursor, LoadPolicy::default())
    }

    pub fn with_policy(cursor: N, policy: LoadPolicy) -> Self {
        Self { cursor, policy }
    }

    pub fn policy(&self) -> LoadPolicy {
        self.policy
    }

    fn required_child(&self, name: &str) -> Result<N, ArchiveError> {
        self.cursor.child(name).ok_or_else(|| ArchiveError::MissingChild {
            parent: self.cursor.name().into_owned(),
            name: name.to_string(),
        })
    }
}

impl<N: NodeRef> Archive for Loader<N> {
    type Error = ArchiveError;

    fn scalar<S: Scalar>(&mut self, value: &mut S) -> Result<(), ArchiveError> {
        let text = self.cursor.text();

        *value = S::from_text(&text).ok_or_else(|| ArchiveError::ParseScalar {
            node: self.cursor.name().into_owned(),
            kind: S::KIND,
            text: text.to_string(),
        })?;

        Ok(())
    }

    fn named_value<T: Value + ?Sized>(&mut self, entry: NamedValue<'_, T>) -> Result<(), ArchiveError> {
        let child = self.required_child(entry.name)?;
        entry.value.dispatch(&mut Loader::with_policy(child, self.policy))
    }

    fn named_container<S: Sequence + ?Sized>(&mut self, entry: NamedContainer<'_, S>) -> Result<(), ArchiveError> {
        let container = self.required_child(entry.container_name)?;

        for child in container.children() {
            match child {
                Child::Element(node) if node.name() == entry.item_name => {
                    entry.sequence.push_default().dispatch(&mut Loader::with_policy(node, self.policy))?;
                }
                Child::Element(node) => {
                    let found = format!("node {:?}", node.name());
                    self.policy.unexpected(entry.container_name, entry.item_name, found)?;
                }
                Child::Other(kind) => self.policy.unexpected(entry.container_name, entry.item_name, kind.to_string())?,
            }
        }

        Ok(())
    }
}

/// Saves `value` as a new top level node called `name`.
///
/// Saving twice into the same document appends a second node rather than replacing the first.
pub fn save<D: Document, T: Value + ?Sized>(document: &mut D, name: &str, value: &mut T) -> Result<(), ArchiveError> {
    log::debug!("saving {name:?}");
    let root = document.append_root(name)?;
    value.dispatch(&mut Saver::new(root))
}

/// Loads the top level node called `name` into `target` with the lenient policy.
pub fn load<D: Document, T: Value + ?Sized>(document: &D, name: &str, target: &mut T) -> Result<(), ArchiveError> {
    load_with(document, name, target, LoadPolicy::default())
}

pub fn load_with<D: Document, T: Value + ?Sized>(document: &D, name: &str, target: &mut T, policy: LoadPolicy) -> Result<(), ArchiveError> {
    log::debug!("loading {name:?} with {policy:?} policy");
    let root = document.find_root(name).ok_or_else(|| ArchiveError::MissingChild {
        parent: String::from("<document>"),
        name: name.to_string(),
    })?;
    target.dispatch(&mut Loader::with_policy(root, policy))
}
