use crate::error::{ReleaseError, Result};
use crate::exec;

/// Resolves a reference name to the commit hash it points to.
///
/// Delegates to `git show-ref --hash`, which resolves both annotated and
/// lightweight tags. For ambiguous refs git can print several hashes, one
/// per line; the first line is taken.
///
/// # Returns
/// * `Ok(hash)` - Trimmed hex object id
/// * `Err` - If the ref cannot be resolved, wrapping git's stderr text
pub fn resolve_commit(ref_name: &str) -> Result<String> {
    let output = exec::run("git", &["show-ref", "--hash", ref_name])
        .map_err(|e| ReleaseError::vcs(format!("git show-ref: {}", e)))?;

    let hash = output.lines().next().unwrap_or_default().trim();

    if !looks_like_hash(hash) {
        return Err(ReleaseError::vcs(format!(
            "git show-ref returned unexpected output for '{}': '{}'",
            ref_name, output
        )));
    }

    Ok(hash.to_string())
}

fn looks_like_hash(s: &str) -> bool {
    // SHA-1 today, SHA-256 repositories produce 64 hex chars;
    // git prints object ids in lowercase
    (s.len() == 40 || s.len() == 64)
        && s.bytes().all(|b| matches!(b, b'0'..=b'9' | b'a'..=b'f'))
}
