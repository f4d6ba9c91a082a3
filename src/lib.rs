pub mod assets;
pub mod config;
pub mod error;
pub mod exec;
pub mod git_ops;
pub mod hosting;
pub mod publisher;
pub mod refname;
pub mod ui;
pub mod version;
pub mod warning;

pub use error::{ReleaseError, Result};
