//! Parser trait definition

use std::path::Path;

use crate::parser::types::PackageManifest;

/// Trait for parsing package manifests
pub trait ManifestParser {
    /// Parse the content and extract the manifest
    fn parse(&self, content: &str) -> Result<PackageManifest, ParseError>;

    /// Read and parse the manifest at `path`
    fn parse_file(&self, path: &Path) -> Result<PackageManifest, ParseError> {
        let content = std::fs::read_to_string(path).map_err(|source| ParseError::Read {
            path: path.display().to_string(),
            source,
        })?;
        self.parse(&content)
    }
}

/// Error type for parsing operations
#[derive(Debug, thiserror::Error)]
pub enum ParseError {
    /// The manifest could not be read
    #[error("Failed to read {path}: {source}")]
    Read {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// Invalid syntax in the file
    #[error("Invalid syntax: {0}")]
    InvalidSyntax(#[from] serde_json::Error),

    /// The document parsed but is not shaped like a manifest
    #[error("Failed to parse file: {0}")]
    ParseFailed(String),
}
