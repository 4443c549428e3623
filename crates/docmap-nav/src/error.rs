//! Navigation model errors.

use std::path::PathBuf;

/// Error raised while loading or constructing a navigation model.
///
/// Every variant aborts construction. There is no partial model: a tree
/// with a malformed node or an ambiguous path would produce broken links
/// or ambiguous redirects.
#[derive(Debug, thiserror::Error)]
pub enum NavError {
    /// A node cannot be placed in the tree.
    #[error("Invalid navigation node \"{name}\": {reason}")]
    InvalidNode {
        /// Display name of the offending node.
        name: String,
        /// What is missing.
        reason: &'static str,
    },

    /// Two nodes declare the same `href`.
    #[error("Duplicate page path: {path}")]
    DuplicatePath {
        /// The path declared twice.
        path: String,
    },

    /// An alias collides with another alias or with a page path.
    #[error("Duplicate alias: {alias} (already {existing})")]
    DuplicateAlias {
        /// The colliding alias.
        alias: String,
        /// What the alias collides with (`page path` or `alias of <href>`).
        existing: String,
    },

    /// Tree file could not be read.
    #[error("Failed to read {}: {source}", path.display())]
    Load {
        /// Tree file path.
        path: PathBuf,
        /// Underlying I/O error.
        source: std::io::Error,
    },

    /// Tree file content is not a valid tree.
    #[error("Failed to parse {}: {message}", path.display())]
    Parse {
        /// Tree file path.
        path: PathBuf,
        /// Parser message.
        message: String,
    },

    /// Tree file extension is not one of `yaml`, `yml`, `json`, `toml`.
    #[error("Unsupported navigation file format: {}", path.display())]
    UnsupportedFormat {
        /// Tree file path.
        path: PathBuf,
    },
}
