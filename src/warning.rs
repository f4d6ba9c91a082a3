use std::fmt;
use std::path::PathBuf;

/// Warnings that occur while preparing or publishing releases.
/// These are non-fatal issues that should be reported to the user.
#[derive(Debug, Clone, PartialEq)]
pub enum PublishWarning {
    /// A directory entry inside the asset directory was skipped
    SkippedDirectory { path: PathBuf },
    /// Pre-delete of a floating alias release failed (commonly because
    /// the release does not exist yet)
    AliasDeleteFailed { tag: String, reason: String },
}

impl fmt::Display for PublishWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PublishWarning::SkippedDirectory { path } => {
                write!(f, "Skipping directory '{}'", path.display())
            }
            PublishWarning::AliasDeleteFailed { tag, reason } => {
                write!(f, "Could not delete release '{}': {}", tag, reason)
            }
        }
    }
}
