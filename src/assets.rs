use crate::error::Result;
use crate::warning::PublishWarning;
use std::fs;
use std::path::{Path, PathBuf};

/// Collects the release assets from a component directory.
///
/// Enumerates the direct children of `dir`. Regular files become assets,
/// joined with the directory path. Subdirectories are excluded and reported
/// as warnings; they never fail the run and are never recursed into.
///
/// Paths come back in filesystem enumeration order, which is not stable
/// across filesystems. The hosting tool attaches all listed files regardless
/// of order, so ordering is not a correctness requirement.
///
/// # Returns
/// * `Ok((assets, warnings))` - Asset paths plus any skipped-directory warnings
/// * `Err` - If the directory cannot be read (missing, permission denied)
pub fn collect_assets(dir: &str) -> Result<(Vec<PathBuf>, Vec<PublishWarning>)> {
    let mut assets = Vec::new();
    let mut warnings = Vec::new();

    for entry in fs::read_dir(Path::new(dir))? {
        let entry = entry?;
        let path = entry.path();

        if entry.file_type()?.is_dir() {
            warnings.push(PublishWarning::SkippedDirectory { path });
            continue;
        }

        assets.push(path);
    }

    Ok((assets, warnings))
}
