use semver::Version;

/// Parse a runtime version string into a semver::Version, normalizing partial versions.
///
/// Strips a leading 'v' (as in "v18.17.0") and pads partial versions with zeros.
/// Pre-release and build suffixes are kept by semver and ignored by callers.
///
/// Examples:
/// - "v8" -> Version(8, 0, 0)
/// - "9.3" -> Version(9, 3, 0)
/// - "v10.0.0-rc.1" -> Version(10, 0, 0-rc.1)
pub fn parse_version(version: &str) -> Option<Version> {
    let version = version.trim();
    let version = version.strip_prefix('v').unwrap_or(version);
    let (core, suffix) = match version.find(['-', '+']) {
        Some(pos) => version.split_at(pos),
        None => (version, ""),
    };

    let parts: Vec<&str> = core.split('.').collect();
    let normalized = match parts.len() {
        1 => format!("{}.0.0{}", parts[0], suffix),
        2 => format!("{}.{}.0{}", parts[0], parts[1], suffix),
        _ => version.to_string(),
    };
    Version::parse(&normalized).ok()
}

/// Parse an N-API version from text.
///
/// Leading and trailing whitespace and a single leading '+' are ignored, and
/// the leading run of ASCII digits is taken, so "3", " 3 ", "+3" and "3abc"
/// all give 3. Negative or non-numeric text is not a version.
pub fn parse_napi_version(version: &str) -> Option<u32> {
    let trimmed = version.trim();
    let trimmed = trimmed.strip_prefix('+').unwrap_or(trimmed);
    let end = trimmed
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(trimmed.len());
    trimmed[..end].parse().ok()
}
