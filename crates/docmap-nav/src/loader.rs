//! Loading authored trees from disk.
//!
//! The format is picked from the file extension:
//! - `.yaml` / `.yml`: a top-level sequence of nodes
//! - `.json`: a top-level array of nodes
//! - `.toml`: a `[[category]]` array of tables (TOML has no top-level arrays)

use std::path::Path;

use serde::Deserialize;

use crate::error::NavError;
use crate::navigation::Navigation;
use crate::node::Node;

/// TOML document wrapper around the root node list.
#[derive(Deserialize)]
struct TomlTree {
    #[serde(default)]
    category: Vec<Node>,
}

/// Read and parse a tree file.
///
/// # Errors
///
/// Returns [`NavError::Load`] if the file cannot be read,
/// [`NavError::UnsupportedFormat`] for an unknown extension and
/// [`NavError::Parse`] for malformed content.
pub fn load_tree(path: &Path) -> Result<Vec<Node>, NavError> {
    let format = Format::from_path(path)?;
    let content = std::fs::read_to_string(path).map_err(|source| NavError::Load {
        path: path.to_path_buf(),
        source,
    })?;

    let root = format
        .parse(&content)
        .map_err(|message| NavError::Parse {
            path: path.to_path_buf(),
            message,
        })?;

    tracing::info!(path = %path.display(), nodes = root.len(), "Loaded navigation tree");
    Ok(root)
}

impl Navigation {
    /// Load a tree file and build the model.
    ///
    /// # Errors
    ///
    /// Returns loader errors from [`load_tree`] and construction errors from
    /// [`Navigation::new`].
    pub fn load(path: &Path) -> Result<Self, NavError> {
        Self::new(load_tree(path)?)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Format {
    Yaml,
    Json,
    Toml,
}

impl Format {
    fn from_path(path: &Path) -> Result<Self, NavError> {
        match path.extension().and_then(|ext| ext.to_str()) {
            Some("yaml" | "yml") => Ok(Self::Yaml),
            Some("json") => Ok(Self::Json),
            Some("toml") => Ok(Self::Toml),
            _ => Err(NavError::UnsupportedFormat {
                path: path.to_path_buf(),
            }),
        }
    }

    fn parse(self, content: &str) -> Result<Vec<Node>, String> {
        match self {
            Self::Yaml => {
                if content.trim().is_empty() {
                    return Ok(Vec::new());
                }
                serde_yaml::from_str(content).map_err(|e| e.to_string())
            }
            Self::Json => serde_json::from_str(content).map_err(|e| e.to_string()),
            Self::Toml => toml::from_str::<TomlTree>(content)
                .map(|tree| tree.category)
                .map_err(|e| e.to_string()),
        }
    }
}
