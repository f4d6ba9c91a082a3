use crate::error::{ReleaseError, Result};
use crate::hosting::ReleaseHost;
use std::collections::HashSet;
use std::path::PathBuf;
use std::sync::Mutex;

/// A recorded hosting operation, in invocation order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HostOp {
    Delete {
        tag: String,
    },
    Create {
        tag: String,
        target: String,
        assets: Vec<PathBuf>,
    },
}

/// Mock release host for testing without the `gh` binary.
///
/// Records every operation and can be told to fail deletes or creates for
/// specific tags.
pub struct MockHost {
    ops: Mutex<Vec<HostOp>>,
    fail_delete: HashSet<String>,
    fail_create: HashSet<String>,
}

impl MockHost {
    /// Create a mock host where every operation succeeds
    pub fn new() -> Self {
        MockHost {
            ops: Mutex::new(Vec::new()),
            fail_delete: HashSet::new(),
            fail_create: HashSet::new(),
        }
    }

    /// Make delete_release fail for the given tag
    pub fn fail_delete_for(mut self, tag: impl Into<String>) -> Self {
        self.fail_delete.insert(tag.into());
        self
    }

    /// Make create_release fail for the given tag
    pub fn fail_create_for(mut self, tag: impl Into<String>) -> Self {
        self.fail_create.insert(tag.into());
        self
    }

    /// All operations recorded so far, in order
    pub fn operations(&self) -> Vec<HostOp> {
        self.ops.lock().unwrap().clone()
    }
}

impl Default for MockHost {
    fn default() -> Self {
        Self::new()
    }
}

impl ReleaseHost for MockHost {
    fn delete_release(&self, tag: &str) -> Result<()> {
        self.ops.lock().unwrap().push(HostOp::Delete {
            tag: tag.to_string(),
        });

        if self.fail_delete.contains(tag) {
            return Err(ReleaseError::hosting(format!(
                "release not found: {}",
                tag
            )));
        }
        Ok(())
    }

    fn create_release(&self, tag: &str, target: &str, assets: &[PathBuf]) -> Result<()> {
        self.ops.lock().unwrap().push(HostOp::Create {
            tag: tag.to_string(),
            target: target.to_string(),
            assets: assets.to_vec(),
        });

        if self.fail_create.contains(tag) {
            return Err(ReleaseError::hosting(format!(
                "could not create release: {}",
                tag
            )));
        }
        Ok(())
    }
}
