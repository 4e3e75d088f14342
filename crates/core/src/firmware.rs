//! Firmware version syntax checks.
//!
//! Devices report their firmware as a semantic version
//! (`MAJOR.MINOR.PATCH[-prerelease][+buildmetadata]`). Older devices send
//! other formats; rejecting those is what prompts them to request an update
//! from the firmware service.

use std::sync::LazyLock;

use regex::Regex;

/// Field name used when reporting firmware format errors.
pub const FIRMWARE_VERSION_FIELD: &str = "FirmwareVersion";

/// Message reported when the firmware version is not a semantic version.
pub const INVALID_FIRMWARE_MESSAGE: &str =
    "The firmware value does not match semantic versioning format.";

/// Semantic versioning 2.0.0 grammar, anchored at both ends.
///
/// Digits are ASCII only. Numeric identifiers (core parts and numeric
/// prerelease identifiers) must not carry leading zeros; build metadata
/// identifiers may.
pub const SEMVER_PATTERN: &str = concat!(
    r"^(?P<major>0|[1-9][0-9]*)\.(?P<minor>0|[1-9][0-9]*)\.(?P<patch>0|[1-9][0-9]*)",
    r"(?:-(?P<prerelease>(?:0|[1-9][0-9]*|[0-9]*[a-zA-Z-][0-9a-zA-Z-]*)",
    r"(?:\.(?:0|[1-9][0-9]*|[0-9]*[a-zA-Z-][0-9a-zA-Z-]*))*))?",
    r"(?:\+(?P<buildmetadata>[0-9a-zA-Z-]+(?:\.[0-9a-zA-Z-]+)*))?$",
);

/// Compiled once, reused for every request.
static SEMVER_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(SEMVER_PATTERN).expect("valid regex"));

/// Return `true` when `version` is a complete semantic version string.
pub fn is_valid_semantic_version(version: &str) -> bool {
    SEMVER_RE.is_match(version)
}
