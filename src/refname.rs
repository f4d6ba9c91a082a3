use crate::error::{ReleaseError, Result};
use crate::version;

/// A parsed triggering reference name of the form `component/version`.
///
/// The component names both the local asset directory and the common prefix
/// of every release tag produced from this run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RefName {
    pub component: String,
    pub version: String,
}

impl RefName {
    /// Parses and validates a reference name.
    ///
    /// The name must split into exactly two non-empty parts on `/`, and the
    /// second part must be a valid `v`-prefixed semantic version.
    pub fn parse(raw: &str) -> Result<Self> {
        let mut parts = raw.splitn(3, '/');
        let component = parts.next().unwrap_or_default();
        let version = parts.next().unwrap_or_default();

        if component.is_empty() || version.is_empty() || parts.next().is_some() {
            return Err(ReleaseError::ref_format(format!(
                "'{}' is not of the form component/version",
                raw
            )));
        }

        if !version::is_valid(version) {
            return Err(ReleaseError::version(format!(
                "'{}' in tag '{}' is not a valid semantic version",
                version, raw
            )));
        }

        Ok(RefName {
            component: component.to_string(),
            version: version.to_string(),
        })
    }

    /// The release tag for one derived version: `component/derived`.
    pub fn tag_for(&self, derived_version: &str) -> String {
        format!("{}/{}", self.component, derived_version)
    }
}

/// Reads the triggering reference name from the process environment.
pub fn from_env(var: &str) -> Result<String> {
    match std::env::var(var) {
        Ok(value) if !value.is_empty() => Ok(value),
        _ => Err(ReleaseError::config(format!("missing env var {}", var))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_valid_ref() {
        let parsed = RefName::parse("widgets/v2.3.1").unwrap();
        assert_eq!(parsed.component, "widgets");
        assert_eq!(parsed.version, "v2.3.1");
    }

    #[test]
    fn test_parse_no_separator() {
        let err = RefName::parse("widgets").unwrap_err();
        assert!(matches!(err, ReleaseError::RefFormat(_)));
    }

    #[test]
    fn test_parse_too_many_separators() {
        let err = RefName::parse("a/b/c").unwrap_err();
        assert!(matches!(err, ReleaseError::RefFormat(_)));
    }

    #[test]
    fn test_parse_empty_parts() {
        assert!(matches!(
            RefName::parse("/v1.2.3").unwrap_err(),
            ReleaseError::RefFormat(_)
        ));
        assert!(matches!(
            RefName::parse("widgets/").unwrap_err(),
            ReleaseError::RefFormat(_)
        ));
        assert!(matches!(
            RefName::parse("/").unwrap_err(),
            ReleaseError::RefFormat(_)
        ));
    }

    #[test]
    fn test_parse_invalid_version() {
        // Missing the leading 'v'
        let err = RefName::parse("checktypes/1.2.3").unwrap_err();
        assert!(matches!(err, ReleaseError::Version(_)));
    }

    #[test]
    fn test_parse_prerelease_version() {
        let parsed = RefName::parse("api/v1.0.0-beta.2").unwrap();
        assert_eq!(parsed.version, "v1.0.0-beta.2");
    }

    #[test]
    fn test_tag_for() {
        let parsed = RefName::parse("widgets/v2.3.1").unwrap();
        assert_eq!(parsed.tag_for("v2"), "widgets/v2");
        assert_eq!(parsed.tag_for("v2.3.1"), "widgets/v2.3.1");
    }
}
