//! Parser layer
//! - traits.rs: ManifestParser trait and ParseError
//! - types.rs: Manifest types (PackageManifest, BinaryConfig)
//! - package_json.rs: package.json parser

pub mod package_json;
pub mod traits;
pub mod types;

pub use package_json::PackageJsonParser;
pub use traits::{ManifestParser, ParseError};
pub use types::{BinaryConfig, PackageManifest};
