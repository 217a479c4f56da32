use std::path::{Path, PathBuf};

// =============================================================================
// Runtime identification
// =============================================================================

/// Canonical runtime name used by prebuild tooling for N-API builds
pub const NAPI_RUNTIME: &str = "napi";

/// Environment variable holding the host runtime version (e.g. "v18.17.0")
pub const NODE_VERSION_ENV: &str = "NAPI_NODE_VERSION";

/// Environment variable holding the N-API version the host reports directly
pub const NAPI_VERSION_ENV: &str = "NAPI_VERSION";

// =============================================================================
// Manifest
// =============================================================================

/// Manifest file name looked up when no path is given
pub const DEFAULT_MANIFEST_FILE: &str = "package.json";

// =============================================================================
// Warning messages
// =============================================================================

/// Emitted when the package declares a version the runtime cannot load
pub const RUNTIME_UNSUPPORTED_MESSAGE: &str = "This runtime does not support N-API version";

/// Emitted when the package does not declare the requested version
pub const PACKAGE_UNSUPPORTED_MESSAGE: &str = "This package does not support N-API version";

/// Returns the manifest path, defaulting to `package.json` in `dir`.
pub fn manifest_path(explicit: Option<&Path>, dir: &Path) -> PathBuf {
    explicit
        .map(Path::to_path_buf)
        .unwrap_or_else(|| dir.join(DEFAULT_MANIFEST_FILE))
}

/// Returns `true` if `runtime` names the N-API runtime.
///
/// The comparison is exact and case-sensitive: `"napi"` matches,
/// `"n-api"` and `"NAPI"` do not.
pub fn is_napi_runtime(runtime: &str) -> bool {
    runtime == NAPI_RUNTIME
}
