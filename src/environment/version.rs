//! PHP version identifiers.
//!
//! PHP encodes its version as `PHP_VERSION_ID = major * 10000 + minor * 100
//! + release`. Probes normally report the id directly; these helpers derive
//! it from a version string when they don't.

use regex::Regex;
use std::sync::LazyLock;

/// Leading `major.minor[.release]` of a version string.
static VERSION_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^\s*(\d+)\.(\d+)(?:\.(\d+))?").expect("VERSION_REGEX must compile")
});

/// Compose a `PHP_VERSION_ID` from its parts.
pub fn version_id(major: u32, minor: u32, release: u32) -> u32 {
    major * 10_000 + minor * 100 + release
}

/// Parse a version string such as `8.3.12`, `8.4.0RC1` or `8.2.7-dev` into
/// a `PHP_VERSION_ID`.
pub fn parse_version_id(version: &str) -> Option<u32> {
    let caps = VERSION_REGEX.captures(version)?;
    let major: u32 = caps.get(1)?.as_str().parse().ok()?;
    let minor: u32 = caps.get(2)?.as_str().parse().ok()?;
    let release: u32 = match caps.get(3) {
        Some(m) => m.as_str().parse().ok()?,
        None => 0,
    };
    if minor > 99 || release > 99 {
        return None;
    }
    Some(version_id(major, minor, release))
}

/// `major.minor` series for a version id (e.g. `80312` → `8.3`).
pub fn series(version_id: u32) -> String {
    format!("{}.{}", version_id / 10_000, (version_id / 100) % 100)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn composes_version_id() {
        assert_eq!(version_id(8, 3, 12), 80312);
        assert_eq!(version_id(7, 4, 0), 70400);
    }

    #[test]
    fn parses_plain_release() {
        assert_eq!(parse_version_id("8.3.12"), Some(80312));
    }

    #[test]
    fn parses_suffixed_versions() {
        assert_eq!(parse_version_id("8.4.0RC1"), Some(80400));
        assert_eq!(parse_version_id("8.2.7-dev"), Some(80207));
        assert_eq!(parse_version_id("8.3.6-1ubuntu1"), Some(80306));
    }

    #[test]
    fn parses_major_minor_only() {
        assert_eq!(parse_version_id("8.1"), Some(80100));
    }

    #[test]
    fn rejects_garbage() {
        assert_eq!(parse_version_id("php"), None);
        assert_eq!(parse_version_id(""), None);
        assert_eq!(parse_version_id("8"), None);
    }

    #[test]
    fn rejects_out_of_range_parts() {
        assert_eq!(parse_version_id("8.100.0"), None);
    }

    #[test]
    fn series_of_version_id() {
        assert_eq!(series(80312), "8.3");
        assert_eq!(series(70400), "7.4");
    }
}
