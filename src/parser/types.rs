//! Manifest types shared by parsers and the version resolver

/// The parts of a package manifest relevant to N-API builds
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PackageManifest {
    /// Package name, if declared
    pub name: Option<String>,
    /// Package version, if declared
    pub version: Option<String>,
    /// The `binary` section used by native addon tooling
    pub binary: Option<BinaryConfig>,
}

/// The `binary` section of a manifest
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BinaryConfig {
    /// Free-form note left by the package author
    pub note: Option<String>,
    /// N-API versions the package declares support for, normalized to integers.
    /// Duplicates and declaration order are kept as written.
    pub napi_versions: Option<Vec<u32>>,
}

impl PackageManifest {
    /// Build a manifest that only declares N-API versions
    pub fn with_napi_versions(versions: impl IntoIterator<Item = u32>) -> Self {
        Self {
            binary: Some(BinaryConfig {
                note: None,
                napi_versions: Some(versions.into_iter().collect()),
            }),
            ..Default::default()
        }
    }

    /// The declared N-API versions, empty when the manifest declares none
    pub fn napi_versions(&self) -> &[u32] {
        self.binary
            .as_ref()
            .and_then(|binary| binary.napi_versions.as_deref())
            .unwrap_or_default()
    }
}
