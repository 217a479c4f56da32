//! N-API version resolution
//!
//! [`VersionResolver`] answers "which N-API version should be built?" and
//! "is this N-API version usable?" for one runtime and one package manifest.

use std::fmt;

use indexmap::IndexSet;
use tracing::debug;

use crate::config::{PACKAGE_UNSUPPORTED_MESSAGE, RUNTIME_UNSUPPORTED_MESSAGE};
use crate::parser::types::PackageManifest;
use crate::version::prebuild::{PrebuildRecord, prebuild_exists};
use crate::version::runtime::RuntimeDescriptor;
use crate::version::semver::parse_napi_version;
use crate::version::sink::LogSink;

/// A value that can be read as an N-API version
///
/// Integers are taken as-is. Text is normalized with [`parse_napi_version`],
/// so "3" and 3 are the same version and "abc" is no version at all.
pub trait NapiVersionInput: fmt::Display {
    fn as_napi_version(&self) -> Option<u32>;
}

impl NapiVersionInput for u32 {
    fn as_napi_version(&self) -> Option<u32> {
        Some(*self)
    }
}

impl NapiVersionInput for str {
    fn as_napi_version(&self) -> Option<u32> {
        parse_napi_version(self)
    }
}

impl NapiVersionInput for String {
    fn as_napi_version(&self) -> Option<u32> {
        parse_napi_version(self)
    }
}

impl<T: NapiVersionInput + ?Sized> NapiVersionInput for &T {
    fn as_napi_version(&self) -> Option<u32> {
        (**self).as_napi_version()
    }
}

/// Why a requested N-API version cannot be used
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UnsupportedReason {
    /// The package declares the version but the runtime is too old for it
    Runtime,
    /// The package does not declare the version
    Package,
}

impl UnsupportedReason {
    /// The fixed warning text for this reason
    pub fn message(&self) -> &'static str {
        match self {
            UnsupportedReason::Runtime => RUNTIME_UNSUPPORTED_MESSAGE,
            UnsupportedReason::Package => PACKAGE_UNSUPPORTED_MESSAGE,
        }
    }
}

impl fmt::Display for UnsupportedReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.message())
    }
}

/// Resolves N-API versions for a runtime and a package manifest
#[derive(Debug, Clone, Copy)]
pub struct VersionResolver<'a> {
    runtime: &'a RuntimeDescriptor,
    manifest: &'a PackageManifest,
}

impl<'a> VersionResolver<'a> {
    pub fn new(runtime: &'a RuntimeDescriptor, manifest: &'a PackageManifest) -> Self {
        Self { runtime, manifest }
    }

    /// The highest N-API version the runtime supports
    pub fn napi_version(&self) -> Option<u32> {
        self.runtime.napi_version()
    }

    /// The N-API versions the package declares, de-duplicated in declaration order.
    ///
    /// Returns `None` when the manifest declares no versions.
    pub fn build_versions(&self) -> Option<Vec<String>> {
        let versions: IndexSet<u32> = self.manifest.napi_versions().iter().copied().collect();
        if versions.is_empty() {
            return None;
        }
        Some(versions.iter().map(u32::to_string).collect())
    }

    /// Returns `true` if the manifest declares `version`
    pub fn package_supports_version(&self, version: u32) -> bool {
        self.manifest.napi_versions().contains(&version)
    }

    /// Returns `true` if both the runtime and the package support `version`
    pub fn is_supported_version(&self, version: impl NapiVersionInput) -> bool {
        let Some(version) = version.as_napi_version() else {
            return false;
        };
        self.napi_version()
            .is_some_and(|runtime_version| version <= runtime_version)
            && self.package_supports_version(version)
    }

    /// The greatest declared version the runtime can load.
    ///
    /// Returns `None` if the package declares nothing, if every declared
    /// version is newer than the runtime, or if the runtime has no N-API.
    pub fn best_build_version(&self) -> Option<u32> {
        let runtime_version = self.napi_version()?;
        let best = self
            .manifest
            .napi_versions()
            .iter()
            .copied()
            .fold(0, |best, version| {
                if version > best && version <= runtime_version {
                    version
                } else {
                    best
                }
            });
        debug!(
            "Best N-API build version {} for runtime N-API {}",
            best, runtime_version
        );
        (best != 0).then_some(best)
    }

    /// Classify why `version` is unsupported, or `None` if it is supported
    pub fn unsupported_reason(&self, version: impl NapiVersionInput) -> Option<UnsupportedReason> {
        if self.is_supported_version(&version) {
            return None;
        }
        Some(self.blame(version.as_napi_version()))
    }

    /// Warn through `log` if `version` is not supported by the runtime or the package
    pub fn log_unsupported_version(&self, version: impl NapiVersionInput, log: &impl LogSink) {
        if let Some(reason) = self.unsupported_reason(&version) {
            log.warn(reason.message(), &version.to_string());
        }
    }

    /// Warn through `log` for each target that has no prebuild.
    ///
    /// `targets` may hold one version (e.g. `["3"]` or `Some(v)`) or many; each is
    /// checked independently and warnings follow input order.
    pub fn log_missing_napi_versions<I>(
        &self,
        targets: I,
        prebuilds: &[PrebuildRecord],
        log: &impl LogSink,
    ) where
        I: IntoIterator,
        I::Item: AsRef<str>,
    {
        for target in targets {
            let target = target.as_ref();
            if prebuild_exists(prebuilds, target) {
                continue;
            }
            let reason = self.blame(parse_napi_version(target));
            log.warn(reason.message(), target);
        }
    }

    fn blame(&self, version: Option<u32>) -> UnsupportedReason {
        match version {
            Some(version) if self.package_supports_version(version) => UnsupportedReason::Runtime,
            _ => UnsupportedReason::Package,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::version::sink::MockLogSink;
    use rstest::rstest;
    use std::cell::RefCell;

    /// Sink that records every warning
    #[derive(Default)]
    struct RecordingSink {
        warnings: RefCell<Vec<(String, String)>>,
    }

    impl LogSink for RecordingSink {
        fn warn(&self, message: &str, version: &str) {
            self.warnings
                .borrow_mut()
                .push((message.to_string(), version.to_string()));
        }
    }

    impl RecordingSink {
        fn warnings(&self) -> Vec<(String, String)> {
            self.warnings.borrow().clone()
        }
    }

    fn runtime(napi_version: Option<u32>) -> RuntimeDescriptor {
        RuntimeDescriptor::parse("v18.0.0", napi_version).unwrap()
    }

    fn warning(reason: UnsupportedReason, version: &str) -> (String, String) {
        (reason.message().to_string(), version.to_string())
    }

    #[test]
    fn build_versions_dedups_in_declaration_order() {
        let runtime = runtime(Some(3));
        let manifest = PackageManifest::with_napi_versions([2, 2, 3]);
        let resolver = VersionResolver::new(&runtime, &manifest);

        assert_eq!(
            resolver.build_versions(),
            Some(vec!["2".to_string(), "3".to_string()])
        );
    }

    #[test]
    fn build_versions_keeps_first_seen_order_when_unsorted() {
        let runtime = runtime(Some(3));
        let manifest = PackageManifest::with_napi_versions([4, 1, 4, 3, 1]);
        let resolver = VersionResolver::new(&runtime, &manifest);

        assert_eq!(
            resolver.build_versions(),
            Some(vec!["4".to_string(), "1".to_string(), "3".to_string()])
        );
    }

    #[test]
    fn build_versions_is_none_without_declared_versions() {
        let runtime = runtime(Some(3));
        let empty = PackageManifest::with_napi_versions([]);
        let missing = PackageManifest::default();

        assert_eq!(VersionResolver::new(&runtime, &empty).build_versions(), None);
        assert_eq!(VersionResolver::new(&runtime, &missing).build_versions(), None);
    }

    #[rstest]
    #[case(1, false)]
    #[case(2, true)]
    #[case(3, true)]
    #[case(4, false)]
    fn package_supports_version_checks_declared_list(#[case] version: u32, #[case] expected: bool) {
        let runtime = runtime(Some(2));
        let manifest = PackageManifest::with_napi_versions([2, 3]);
        let resolver = VersionResolver::new(&runtime, &manifest);

        assert_eq!(resolver.package_supports_version(version), expected);
    }

    #[rstest]
    #[case(Some(2), "1", false)] // not declared
    #[case(Some(2), "2", true)]
    #[case(Some(2), "3", false)] // newer than runtime
    #[case(Some(2), "4", false)] // neither
    #[case(Some(3), "3", true)]
    #[case(None, "2", false)] // runtime without N-API
    #[case(Some(3), "abc", false)]
    #[case(Some(3), "", false)]
    #[case(Some(3), " 3 ", true)]
    #[case(Some(3), "+3", true)]
    #[case(Some(3), "-3", false)]
    fn is_supported_version_requires_runtime_and_package(
        #[case] runtime_version: Option<u32>,
        #[case] version: &str,
        #[case] expected: bool,
    ) {
        let runtime = runtime(runtime_version);
        let manifest = PackageManifest::with_napi_versions([2, 3]);
        let resolver = VersionResolver::new(&runtime, &manifest);

        assert_eq!(resolver.is_supported_version(version), expected);
    }

    #[test]
    fn is_supported_version_treats_text_and_integers_alike() {
        let runtime = runtime(Some(3));
        let manifest = PackageManifest::with_napi_versions([2, 3]);
        let resolver = VersionResolver::new(&runtime, &manifest);

        for version in 0..6u32 {
            assert_eq!(
                resolver.is_supported_version(version),
                resolver.is_supported_version(version.to_string()),
                "version {version}"
            );
        }
    }

    #[rstest]
    #[case(vec![2, 3], Some(3), Some(3))]
    #[case(vec![2, 3], Some(2), Some(2))]
    #[case(vec![2, 3], Some(1), None)]
    #[case(vec![3, 2, 3], Some(9), Some(3))]
    #[case(vec![1, 4, 2], Some(3), Some(2))]
    #[case(vec![], Some(3), None)]
    #[case(vec![0], Some(3), None)]
    #[case(vec![2, 3], None, None)]
    fn best_build_version_picks_greatest_loadable_version(
        #[case] declared: Vec<u32>,
        #[case] runtime_version: Option<u32>,
        #[case] expected: Option<u32>,
    ) {
        let runtime = runtime(runtime_version);
        let manifest = PackageManifest::with_napi_versions(declared);
        let resolver = VersionResolver::new(&runtime, &manifest);

        assert_eq!(resolver.best_build_version(), expected);
    }

    #[rstest]
    #[case(vec![2, 3], "1", Some(UnsupportedReason::Package))]
    #[case(vec![2, 3], "2", None)]
    #[case(vec![2, 3], "4", Some(UnsupportedReason::Package))]
    #[case(vec![2, 3, 4], "4", Some(UnsupportedReason::Runtime))]
    #[case(vec![2, 3], "3", Some(UnsupportedReason::Runtime))]
    #[case(vec![2, 3], "abc", Some(UnsupportedReason::Package))]
    fn unsupported_reason_separates_runtime_from_package(
        #[case] declared: Vec<u32>,
        #[case] version: &str,
        #[case] expected: Option<UnsupportedReason>,
    ) {
        let runtime = runtime(Some(2));
        let manifest = PackageManifest::with_napi_versions(declared);
        let resolver = VersionResolver::new(&runtime, &manifest);

        assert_eq!(resolver.unsupported_reason(version), expected);
    }

    #[rstest]
    #[case(vec![2, 3], "1", vec![warning(UnsupportedReason::Package, "1")])]
    #[case(vec![2, 3], "2", vec![])]
    #[case(vec![2, 3], "4", vec![warning(UnsupportedReason::Package, "4")])]
    #[case(vec![2, 3, 4], "4", vec![warning(UnsupportedReason::Runtime, "4")])]
    fn log_unsupported_version_emits_at_most_one_warning(
        #[case] declared: Vec<u32>,
        #[case] version: &str,
        #[case] expected: Vec<(String, String)>,
    ) {
        let runtime = runtime(Some(2));
        let manifest = PackageManifest::with_napi_versions(declared);
        let resolver = VersionResolver::new(&runtime, &manifest);
        let sink = RecordingSink::default();

        resolver.log_unsupported_version(version, &sink);

        assert_eq!(sink.warnings(), expected);
    }

    #[test]
    fn log_unsupported_version_passes_integer_version_as_text() {
        let runtime = runtime(Some(2));
        let manifest = PackageManifest::with_napi_versions([2, 3]);
        let resolver = VersionResolver::new(&runtime, &manifest);
        let sink = RecordingSink::default();

        resolver.log_unsupported_version(3u32, &sink);

        assert_eq!(sink.warnings(), vec![warning(UnsupportedReason::Runtime, "3")]);
    }

    #[test]
    fn log_unsupported_version_stays_silent_when_supported() {
        let runtime = runtime(Some(3));
        let manifest = PackageManifest::with_napi_versions([2, 3]);
        let resolver = VersionResolver::new(&runtime, &manifest);
        let mut sink = MockLogSink::new();
        sink.expect_warn().times(0);

        resolver.log_unsupported_version("3", &sink);
    }

    #[test]
    fn log_missing_napi_versions_warns_for_each_target_without_prebuild() {
        let runtime = runtime(Some(3));
        let manifest = PackageManifest::with_napi_versions([2, 3]);
        let resolver = VersionResolver::new(&runtime, &manifest);
        let prebuilds = vec![PrebuildRecord::new("napi", "2"), PrebuildRecord::new("napi", "3")];
        let sink = RecordingSink::default();

        resolver.log_missing_napi_versions(["1", "2", "3", "4"], &prebuilds, &sink);

        assert_eq!(
            sink.warnings(),
            vec![
                warning(UnsupportedReason::Package, "1"),
                warning(UnsupportedReason::Package, "4"),
            ]
        );
    }

    #[test]
    fn log_missing_napi_versions_blames_runtime_for_declared_versions() {
        let runtime = runtime(Some(2));
        let manifest = PackageManifest::with_napi_versions([2, 3]);
        let resolver = VersionResolver::new(&runtime, &manifest);
        let prebuilds = vec![PrebuildRecord::new("napi", "2")];
        let sink = RecordingSink::default();

        resolver.log_missing_napi_versions(vec!["3".to_string()], &prebuilds, &sink);

        assert_eq!(sink.warnings(), vec![warning(UnsupportedReason::Runtime, "3")]);
    }

    #[test]
    fn log_missing_napi_versions_accepts_a_single_target() {
        let runtime = runtime(Some(3));
        let manifest = PackageManifest::with_napi_versions([2, 3]);
        let resolver = VersionResolver::new(&runtime, &manifest);
        let mut sink = MockLogSink::new();
        sink.expect_warn().times(1).return_const(());

        resolver.log_missing_napi_versions(Some("4"), &[], &sink);
    }

    #[test]
    fn log_missing_napi_versions_matches_targets_as_strings() {
        let runtime = runtime(Some(3));
        let manifest = PackageManifest::with_napi_versions([2, 3]);
        let resolver = VersionResolver::new(&runtime, &manifest);
        let prebuilds = vec![PrebuildRecord::new("napi", "2")];
        let sink = RecordingSink::default();

        resolver.log_missing_napi_versions(["02"], &prebuilds, &sink);

        assert_eq!(sink.warnings(), vec![warning(UnsupportedReason::Runtime, "02")]);
    }
}
