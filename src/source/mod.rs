//! Data-source abstraction layer.
//!
//! The core never talks to a network or a git repository itself. This module
//! defines the [CommitSource] trait, the seam where a hosting-service client
//! (or anything else) hands the core its inputs already resolved to memory:
//!
//! - [file::FileSource]: reads the tag list and commit list from TOML files
//! - [mock::MockSource]: an in-memory implementation for testing
//!
//! A real HTTP integration would implement this trait and map transport
//! failures (404/403/5xx) to legible [crate::error::ChangelogError::Source]
//! messages at that boundary, before data reaches the pipeline.

pub mod file;
pub mod mock;

pub use file::FileSource;
pub use mock::MockSource;

use crate::domain::{Commit, Tag};
use crate::error::Result;

/// Supplies the pipeline's two inputs.
///
/// Implementors must be `Send + Sync`; the pipeline itself holds no state
/// between calls, so concurrent invocations are independent.
pub trait CommitSource: Send + Sync {
    /// The repository's tag list, newest first. The order is trusted as-is
    /// and never re-sorted downstream.
    fn list_tags(&self) -> Result<Vec<Tag>>;

    /// Commits between two named release points, in the order the
    /// collaborator enumerates them.
    fn commits_between(&self, base: &Tag, head: &Tag) -> Result<Vec<Commit>>;
}
