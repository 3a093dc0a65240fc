use std::collections::VecDeque;

use crate::Scalar;

/// A field name paired with the value stored under it.
///
/// Built with [`make_nvp`] for the length of a single step of a walk.
#[derive(Debug)]
pub struct NamedValue<'a, T: ?Sized> {
    pub name: &'a str,
    pub value: &'a mut T,
}

/// A list stored under a container node, one item node per element.
///
/// Built with [`make_ncp`]. Items are written in order under `item_name` and read back
/// by matching that name.
#[derive(Debug)]
pub struct NamedContainer<'a, S: ?Sized> {
    pub container_name: &'a str,
    pub item_name: &'a str,
    pub sequence: &'a mut S,
}

pub fn make_nvp<'a, T: ?Sized>(name: &'a str, value: &'a mut T) -> NamedValue<'a, T> {
    NamedValue { name, value }
}

pub fn make_ncp<'a, S: ?Sized>(container_name: &'a str, item_name: &'a str, sequence: &'a mut S) -> NamedContainer<'a, S> {
    NamedContainer {
        container_name,
        item_name,
        sequence,
    }
}

/// One side of a walk: a [`Saver`](crate::Saver) writing nodes or a [`Loader`](crate::Loader) reading them.
pub trait Archive: Sized {
    type Error;

    /// Writes `value` as the text of the current node, or parses the current node's text into it.
    fn scalar<S: Scalar>(&mut self, value: &mut S) -> Result<(), Self::Error>;

    /// Steps into the child called `entry.name` and dispatches its value there.
    fn named_value<T: Value + ?Sized>(&mut self, entry: NamedValue<'_, T>) -> Result<(), Self::Error>;

    /// Steps into the container called `entry.container_name` and walks its items.
    fn named_container<S: Sequence + ?Sized>(&mut self, entry: NamedContainer<'_, S>) -> Result<(), Self::Error>;

    /// Applies a named value or container and hands the archive back for chaining.
    fn visit<E: Entry>(&mut self, entry: E) -> Result<&mut Self, Self::Error> {
        entry.apply(self)?;
        Ok(self)
    }
}

/// Something a record can list in its description.
pub trait Entry {
    fn apply<A: Archive>(self, archive: &mut A) -> Result<(), A::Error>;
}

impl<T: Value + ?Sized> Entry for NamedValue<'_, T> {
    fn apply<A: Archive>(self, archive: &mut A) -> Result<(), A::Error> {
        archive.named_value(self)
    }
}

impl<S: Sequence + ?Sized> Entry for NamedContainer<'_, S> {
    fn apply<A: Archive>(self, archive: &mut A) -> Result<(), A::Error> {
        archive.named_container(self)
    }
}

/// A record that lists its own fields.
///
/// The order fields are listed in is the order they are written in, and a loader expects
/// the same list, so one implementation serves both directions.
pub trait Describe {
    fn describe<A: Archive>(&mut self, archive: &mut A) -> Result<(), A::Error>;
}

/// Anything that can sit behind a field name.
///
/// Records get this through [`Describe`]. Scalars get it through [`scalar_value!`](crate::scalar_value),
/// which hands the value to [`Archive::scalar`] instead.
pub trait Value {
    fn dispatch<A: Archive>(&mut self, archive: &mut A) -> Result<(), A::Error>;
}

impl<T: Describe + ?Sized> Value for T {
    fn dispatch<A: Archive>(&mut self, archive: &mut A) -> Result<(), A::Error> {
        self.describe(archive)
    }
}

/// An ordered list that can be stored as a named container.
pub trait Sequence {
    type Item: Value + Default;

    fn items_mut(&mut self) -> impl Iterator<Item = &mut Self::Item>;

    /// Appends a default item and returns it for loading into.
    fn push_default(&mut self) -> &mut Self::Item;
}

impl<T: Value + Default> Sequence for Vec<T> {
    type Item = T;

    fn items_mut(&mut self) -> impl Iterator<Item = &mut T> {
        self.iter_mut()
    }

    fn push_default(&mut self) -> &mut T {
        let index = self.len();
        self.push(T::default());
        &mut self[index]
    }
}

impl<T: Value + Default> Sequence for VecDeque<T> {
    type Item = T;

    fn items_mut(&mut self) -> impl Iterator<Item = &mut T> {
        self.iter_mut()
    }

    fn push_default(&mut self) -> &mut T {
        let index = self.len();
        self.push_back(T::default());
        &mut self[index]
    }
}
