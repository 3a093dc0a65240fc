//! Bundled trees.
//!
//! - [`dom`]: XML elements from the `xmltree` crate.
//! - [`arena`]: an index based XML document built from `xml-rs` events.
//! - [`ptree`]: a property tree, written as JSON or XML.

use std::sync::LazyLock;

use regex::Regex;

use crate::ArchiveError;

pub mod arena;
pub mod dom;
pub mod ptree;

static XML_NAME: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^[\p{L}_][\p{L}\p{N}_.\-]*$").expect("xml name pattern is valid"));

pub(crate) fn is_xml_name(name: &str) -> bool {
    XML_NAME.is_match(name)
}

pub(crate) fn check_xml_name(name: &str) -> Result<(), ArchiveError> {
    if is_xml_name(name) {
        return Ok(());
    }

    Err(ArchiveError::InvalidName(name.to_string()))
}
