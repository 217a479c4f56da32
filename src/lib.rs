//! Helpers for native addon build tooling that targets N-API.
//!
//! Given a [`RuntimeDescriptor`](version::RuntimeDescriptor) and a
//! [`PackageManifest`](parser::PackageManifest), a
//! [`VersionResolver`](version::VersionResolver) picks the N-API version to
//! build and reports versions that cannot be used.

pub mod config;
pub mod logging;
pub mod parser;
pub mod version;

pub use config::is_napi_runtime;
