//! N-API version resolution layer
//!
//! This module decides which N-API version a native addon should be built
//! against and reports versions that the runtime or the package cannot use.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────┐     ┌─────────────┐     ┌─────────────┐
//! │   Runtime   │────▶│  Resolver   │◀────│  Manifest   │
//! │ (host info) │     │  (decide)   │     │ (parser/)   │
//! └─────────────┘     └─────────────┘     └─────────────┘
//!                            │
//!               ┌────────────┴────────────┐
//!               ▼                         ▼
//!        ┌─────────────┐           ┌─────────────┐
//!        │  Prebuilds  │           │   LogSink   │
//!        │  (targets)  │           │  (warnings) │
//!        └─────────────┘           └─────────────┘
//! ```
//!
//! # Modules
//!
//! - [`resolver`]: `VersionResolver` and the unsupported-version classification
//! - [`runtime`]: `RuntimeDescriptor` with the fallback table for older runtimes
//! - [`prebuild`]: Prebuild records and their loader
//! - [`sink`]: `LogSink` capability and the `tracing` implementation
//! - [`error`]: Error types for runtime and prebuild inputs
//! - [`semver`]: Version string normalization

pub mod error;
pub mod prebuild;
pub mod resolver;
pub mod runtime;
pub mod semver;
pub mod sink;

pub use prebuild::PrebuildRecord;
pub use resolver::{NapiVersionInput, UnsupportedReason, VersionResolver};
pub use runtime::RuntimeDescriptor;
pub use sink::{LogSink, TracingLogSink};
