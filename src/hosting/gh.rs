use crate::error::{ReleaseError, Result};
use crate::exec;
use crate::hosting::ReleaseHost;
use std::ffi::OsString;
use std::path::PathBuf;

/// Release host backed by the `gh` command-line client.
///
/// Authentication, repository selection and network handling are all `gh`'s
/// concern; this type only builds argument lists and interprets exit status.
pub struct GhHost;

/// Builds the `gh release create` argument list. Asset paths are appended as
/// `OsString` so file names that are not valid UTF-8 are attached like any
/// other file.
fn create_args(tag: &str, target: &str, assets: &[PathBuf]) -> Vec<OsString> {
    let mut args: Vec<OsString> = ["release", "create", "--target", target, tag]
        .iter()
        .map(OsString::from)
        .collect();
    args.extend(assets.iter().map(|p| p.clone().into_os_string()));
    args
}

impl ReleaseHost for GhHost {
    fn delete_release(&self, tag: &str) -> Result<()> {
        exec::run("gh", &["release", "delete", "--cleanup-tag", "--yes", tag])
            .map_err(|e| ReleaseError::hosting(format!("gh release delete: {}", e)))?;
        Ok(())
    }

    fn create_release(&self, tag: &str, target: &str, assets: &[PathBuf]) -> Result<()> {
        let args = create_args(tag, target, assets);
        exec::run("gh", &args)
            .map_err(|e| ReleaseError::hosting(format!("gh release create: {}", e)))?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_args_order() {
        let assets = vec![
            PathBuf::from("widgets/a.tar.gz"),
            PathBuf::from("widgets/b.tar.gz"),
        ];
        let args = create_args("widgets/v2", "deadbeef", &assets);

        let expected: Vec<OsString> = [
            "release",
            "create",
            "--target",
            "deadbeef",
            "widgets/v2",
            "widgets/a.tar.gz",
            "widgets/b.tar.gz",
        ]
        .iter()
        .map(OsString::from)
        .collect();
        assert_eq!(args, expected);
    }

    #[test]
    fn test_create_args_without_assets() {
        let args = create_args("widgets/v2.3.1", "deadbeef", &[]);
        assert_eq!(args.len(), 5);
    }

    #[cfg(unix)]
    #[test]
    fn test_create_args_keeps_non_utf8_assets() {
        use std::ffi::OsStr;
        use std::os::unix::ffi::OsStrExt;

        let bad = PathBuf::from(OsStr::from_bytes(b"widgets/bad\xff.tar.gz"));
        let assets = vec![PathBuf::from("widgets/ok.tar.gz"), bad.clone()];

        let args = create_args("widgets/v1", "deadbeef", &assets);

        // Both collected assets must appear in the argument list
        assert_eq!(args.len(), 7);
        assert_eq!(args[5], OsString::from("widgets/ok.tar.gz"));
        assert_eq!(args[6], bad.into_os_string());
    }
}
