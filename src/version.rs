//! Semantic version parsing and bumping

use crate::error::VersionError;
use crate::types::BumpKind;
use semver::{BuildMetadata, Prerelease, Version};

/// Parse `MAJOR.MINOR.PATCH[-pre][+build]`
pub fn parse(input: &str) -> Result<Version, VersionError> {
    Version::parse(input).map_err(|source| VersionError::Parse {
        input: input.to_string(),
        source,
    })
}

/// Compute the next version for `kind`
///
/// Bumping major resets minor and patch; bumping minor resets patch.
/// Pre-release and build metadata are dropped on every bump, so
/// `1.2.3-rc.1` bumped patch becomes `1.2.4`. A component already at
/// `u64::MAX` cannot be incremented and yields `VersionError::Overflow`.
pub fn bump(version: &Version, kind: BumpKind) -> Result<Version, VersionError> {
    let overflow = || VersionError::Overflow {
        version: version.to_string(),
        component: kind.as_str(),
    };

    let (major, minor, patch) = match kind {
        BumpKind::Major => (version.major.checked_add(1).ok_or_else(overflow)?, 0, 0),
        BumpKind::Minor => (
            version.major,
            version.minor.checked_add(1).ok_or_else(overflow)?,
            0,
        ),
        BumpKind::Patch => (
            version.major,
            version.minor,
            version.patch.checked_add(1).ok_or_else(overflow)?,
        ),
    };

    Ok(Version {
        major,
        minor,
        patch,
        pre: Prerelease::EMPTY,
        build: BuildMetadata::EMPTY,
    })
}

/// Parse, bump and render back to canonical form in one step
pub fn bump_str(input: &str, kind: BumpKind) -> Result<String, VersionError> {
    let version = parse(input)?;
    Ok(bump(&version, kind)?.to_string())
}
