//! Describe a record once, then save it to or load it from any tree of named nodes.
//!
//! A record opts in by implementing [`Describe`] and listing its fields as named values
//! (and its lists as named containers). The same description drives both directions:
//! [`save`] walks it to build nodes, [`load`] walks it to fill the record back in.
//! Which physical tree sits underneath is decided by the [`Document`] handed in, see
//! [`backend`] for the bundled ones.
//!
//! ```
//! use simpleserial::backend::ptree::PropertyTree;
//! use simpleserial::{Archive, Describe, load, make_nvp, save};
//!
//! #[derive(Debug, Default, PartialEq)]
//! struct Branch {
//!     id: i32,
//!     name: String,
//! }
//!
//! impl Describe for Branch {
//!     fn describe<A: Archive>(&mut self, archive: &mut A) -> Result<(), A::Error> {
//!         archive.visit(make_nvp("BranchID", &mut self.id))?.visit(make_nvp("Name", &mut self.name))?;
//!         Ok(())
//!     }
//! }
//!
//! let mut branch = Branch { id: 7, name: String::from("north") };
//! let mut document = PropertyTree::new();
//! save(&mut document, "Branch", &mut branch).unwrap();
//!
//! let mut loaded = Branch::default();
//! load(&document, "Branch", &mut loaded).unwrap();
//! assert_eq!(loaded, branch);
//! ```

mod archive;

pub use archive::LoadPolicy;
pub use archive::Loader;
pub use archive::Saver;
pub use archive::load;
pub use archive::load_with;
pub use archive::save;

mod error;

pub use error::ArchiveError;

mod format;

pub use format::Format;
pub use format::read_file;
pub use format::write_file;

mod frontend;

pub use frontend::Archive;
pub use frontend::Describe;
pub use frontend::Entry;
pub use frontend::NamedContainer;
pub use frontend::NamedValue;
pub use frontend::Sequence;
pub use frontend::Value;
pub use frontend::make_ncp;
pub use frontend::make_nvp;

mod scalar;

pub use scalar::Scalar;

pub mod tree;

pub use tree::Document;

pub mod backend;
