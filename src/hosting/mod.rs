//! Release hosting abstraction layer
//!
//! This module provides a trait-based abstraction over the release hosting
//! tool, allowing for multiple implementations including the real `gh`
//! command-line client and a mock implementation for testing.
//!
//! Most code should depend on the [ReleaseHost] trait rather than concrete
//! implementations. The concrete implementations are:
//!
//! - [gh::GhHost]: the real implementation shelling out to the `gh` binary
//! - [mock::MockHost]: a recording implementation for tests

pub mod gh;
pub mod mock;

pub use gh::GhHost;
pub use mock::MockHost;

use crate::error::Result;
use std::path::PathBuf;

/// Operations the release hosting tool must support.
///
/// Implementors must be `Send + Sync`.
pub trait ReleaseHost: Send + Sync {
    /// Delete the release at `tag`, removing its underlying tag as well.
    ///
    /// Callers treat failure here as tolerable: the common case is that the
    /// release simply does not exist yet.
    fn delete_release(&self, tag: &str) -> Result<()>;

    /// Create a new release at `tag`, pointing at `target`, with every path
    /// in `assets` attached.
    ///
    /// Fails if a release at `tag` already exists, which is why floating
    /// aliases are deleted first.
    fn create_release(&self, tag: &str, target: &str, assets: &[PathBuf]) -> Result<()>;
}
