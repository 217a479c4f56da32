//! package.json parser

use serde_json::{Map, Value};
use tracing::warn;

use crate::parser::traits::{ManifestParser, ParseError};
use crate::parser::types::{BinaryConfig, PackageManifest};
use crate::version::semver::parse_napi_version;

/// Parser for package.json files
pub struct PackageJsonParser;

impl PackageJsonParser {
    pub fn new() -> Self {
        Self
    }
}

impl Default for PackageJsonParser {
    fn default() -> Self {
        Self::new()
    }
}

impl ManifestParser for PackageJsonParser {
    fn parse(&self, content: &str) -> Result<PackageManifest, ParseError> {
        let document: Value = serde_json::from_str(content).inspect_err(|e| {
            warn!("Failed to parse JSON content: {}", e);
        })?;

        let Value::Object(root) = document else {
            return Err(ParseError::ParseFailed(
                "package.json root must be an object".to_string(),
            ));
        };

        Ok(PackageManifest {
            name: Self::string_field(&root, "name"),
            version: Self::string_field(&root, "version"),
            binary: root.get("binary").and_then(Self::extract_binary),
        })
    }
}

impl PackageJsonParser {
    /// Key holding the declared N-API versions inside `binary`
    const NAPI_VERSIONS_FIELD: &'static str = "napi_versions";

    fn string_field(object: &Map<String, Value>, key: &str) -> Option<String> {
        object.get(key).and_then(Value::as_str).map(str::to_string)
    }

    /// Extract the `binary` section; anything other than an object is ignored
    fn extract_binary(value: &Value) -> Option<BinaryConfig> {
        let Some(binary) = value.as_object() else {
            warn!("Ignoring non-object \"binary\" section");
            return None;
        };

        let napi_versions = match binary.get(Self::NAPI_VERSIONS_FIELD) {
            None | Some(Value::Null) => None,
            Some(Value::Array(entries)) => {
                Some(entries.iter().filter_map(Self::normalize_version).collect())
            }
            Some(other) => {
                warn!("Ignoring non-array \"napi_versions\": {}", other);
                None
            }
        };

        Some(BinaryConfig {
            note: Self::string_field(binary, "note"),
            napi_versions,
        })
    }

    /// Normalize one declared entry: integers and numeric strings are accepted
    fn normalize_version(entry: &Value) -> Option<u32> {
        let version = match entry {
            Value::Number(number) => number.as_u64().and_then(|n| u32::try_from(n).ok()),
            Value::String(text) => parse_napi_version(text),
            _ => None,
        };

        if version.is_none() {
            warn!("Ignoring invalid N-API version entry: {}", entry);
        }
        version
    }
}
