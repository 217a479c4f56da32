//! Prebuild records produced by prebuild tooling

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::version::error::PrebuildError;

/// An already-compiled artifact for one runtime target
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PrebuildRecord {
    /// Runtime the artifact was built for (e.g. "napi", "node", "electron")
    pub runtime: String,
    /// Target version; for N-API prebuilds this is the N-API version as text
    pub target: String,
}

impl PrebuildRecord {
    pub fn new(runtime: impl Into<String>, target: impl Into<String>) -> Self {
        Self {
            runtime: runtime.into(),
            target: target.into(),
        }
    }
}

/// Returns `true` if any record targets exactly `version`.
///
/// Targets are compared as strings, so "02" does not match "2".
pub fn prebuild_exists(prebuilds: &[PrebuildRecord], version: &str) -> bool {
    prebuilds.iter().any(|prebuild| prebuild.target == version)
}

/// Parse a JSON array of `{ "runtime": ..., "target": ... }` records
pub fn parse_prebuilds(content: &str) -> Result<Vec<PrebuildRecord>, PrebuildError> {
    Ok(serde_json::from_str(content)?)
}

/// Read and parse a prebuild list from `path`
pub fn load_prebuilds(path: &Path) -> Result<Vec<PrebuildRecord>, PrebuildError> {
    let content = std::fs::read_to_string(path).map_err(|source| PrebuildError::Read {
        path: path.display().to_string(),
        source,
    })?;
    parse_prebuilds(&content)
}
