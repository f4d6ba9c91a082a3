use crate::error::{ReleaseError, Result};

/// The three release tiers derived from one exact version.
///
/// A tag `widgets/v1.2.3` fans out into the floating aliases `v1` and `v1.2`
/// plus the exact version itself. The aliases always point at the newest
/// matching exact release, so they are deleted and recreated on every run;
/// the exact version is created once and never moved.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TierSet {
    pub major: String,
    pub major_minor: String,
    pub exact: String,
}

impl TierSet {
    /// Iteration order for publishing: floating aliases first (deletable),
    /// the exact version last (never pre-deleted).
    pub fn tiers(&self) -> [(&str, bool); 3] {
        [
            (self.major.as_str(), true),
            (self.major_minor.as_str(), true),
            (self.exact.as_str(), false),
        ]
    }
}

/// Validates a version string and derives its release tiers.
///
/// The version must be a full semantic version with a leading `v`
/// (e.g. "v1.2.3", "v1.2.3-rc1", "v0.4.0+build5"). Pre-release and build
/// metadata are stripped from the derived aliases per semver rules.
///
/// # Example
/// ```ignore
/// let tiers = derive_tiers("v1.2.3-rc1")?;
/// assert_eq!(tiers.major, "v1");
/// assert_eq!(tiers.major_minor, "v1.2");
/// assert_eq!(tiers.exact, "v1.2.3-rc1");
/// ```
pub fn derive_tiers(version: &str) -> Result<TierSet> {
    let parsed = parse(version)?;

    Ok(TierSet {
        major: format!("v{}", parsed.major),
        major_minor: format!("v{}.{}", parsed.major, parsed.minor),
        exact: version.to_string(),
    })
}

/// Checks whether a string is a valid `v`-prefixed semantic version.
pub fn is_valid(version: &str) -> bool {
    parse(version).is_ok()
}

fn parse(version: &str) -> Result<semver::Version> {
    let bare = version.strip_prefix('v').ok_or_else(|| {
        ReleaseError::version(format!("'{}' is missing the leading 'v'", version))
    })?;

    semver::Version::parse(bare)
        .map_err(|e| ReleaseError::version(format!("'{}' is not a semantic version: {}", version, e)))
}
