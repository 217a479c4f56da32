//! Host runtime description
//!
//! The resolver never reads process-wide state. Callers build a
//! [`RuntimeDescriptor`] once from whatever the host reports and pass it in.

use semver::Version;
use tracing::debug;

use crate::version::error::RuntimeError;
use crate::version::semver::parse_version;

/// Version information reported by the host runtime
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RuntimeDescriptor {
    version: Version,
    declared_napi_version: Option<u32>,
}

impl RuntimeDescriptor {
    pub fn new(version: Version, declared_napi_version: Option<u32>) -> Self {
        Self {
            version,
            declared_napi_version,
        }
    }

    /// Build a descriptor from a version string such as "v18.17.0"
    pub fn parse(version: &str, declared_napi_version: Option<u32>) -> Result<Self, RuntimeError> {
        let parsed =
            parse_version(version).ok_or_else(|| RuntimeError::InvalidVersion(version.to_string()))?;
        Ok(Self::new(parsed, declared_napi_version))
    }

    /// The runtime's own version
    pub fn version(&self) -> &Version {
        &self.version
    }

    /// The N-API version the runtime reports directly, if any
    pub fn declared_napi_version(&self) -> Option<u32> {
        self.declared_napi_version
    }

    /// The highest N-API version this runtime supports, or `None` if it has no N-API.
    ///
    /// Runtimes that report a version are trusted. Older runtimes that shipped
    /// N-API before reporting it are covered by a fixed table which must not grow.
    pub fn napi_version(&self) -> Option<u32> {
        if let Some(declared) = self.declared_napi_version {
            return Some(declared);
        }

        let inferred = match (self.version.major, self.version.minor) {
            (9, minor) if minor >= 3 => Some(2),
            (8, _) => Some(1),
            _ => None,
        };
        debug!(
            "Inferred N-API version {:?} for runtime {}",
            inferred, self.version
        );
        inferred
    }
}
