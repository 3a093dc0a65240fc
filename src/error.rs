use thiserror::Error as ThisError;

/// Errors raised while walking a record against a tree.
///
/// A walk stops at the first error. Whatever was written to the document or read into
/// the target up to that point is left as is.
#[derive(Debug, ThisError)]
pub enum ArchiveError {
    #[error("Missing Required Child {name:?} Under {parent:?}")]
    MissingChild { parent: String, name: String },
    #[error("Unexpected {found} Under Container {container:?}, Expected {expected:?}")]
    UnexpectedSibling { container: String, expected: String, found: String },
    #[error("Failed To Parse {kind} From {text:?} In Node {node:?}")]
    ParseScalar { node: String, kind: &'static str, text: String },
    #[error("Invalid Node Name: {0:?}")]
    InvalidName(String),
}
