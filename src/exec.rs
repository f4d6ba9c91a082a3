use crate::error::{ReleaseError, Result};
use std::ffi::OsStr;
use std::process::Command;

/// Runs an external tool as a blocking subprocess and captures its output.
///
/// Arguments are passed through as `OsStr`, so file-name arguments that are
/// not valid UTF-8 reach the tool unchanged. Standard output and standard
/// error are both captured. On success the trimmed standard output is
/// returned. A non-zero exit status becomes a `Command` error carrying the
/// exit code and the captured standard error text, so callers can surface
/// the tool's own diagnostic.
///
/// No timeout is imposed; a hang in the external tool hangs the run.
pub fn run<S: AsRef<OsStr>>(program: &str, args: &[S]) -> Result<String> {
    let output = Command::new(program).args(args).output().map_err(|e| {
        ReleaseError::command(format!("failed to execute {}: {}", program, e))
    })?;

    if !output.status.success() {
        let rendered: Vec<String> = args
            .iter()
            .map(|a| a.as_ref().to_string_lossy().into_owned())
            .collect();
        let stderr = String::from_utf8_lossy(&output.stderr);
        return Err(ReleaseError::command(format!(
            "{} {} exited with {}: {}",
            program,
            rendered.join(" "),
            output
                .status
                .code()
                .map(|c| c.to_string())
                .unwrap_or_else(|| "signal".to_string()),
            stderr.trim()
        )));
    }

    Ok(String::from_utf8_lossy(&output.stdout).trim().to_string())
}
