use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::domain::{Commit, Tag};
use crate::error::{ChangelogError, Result};
use crate::source::CommitSource;

/// TOML-file-backed source, standing in for the hosting-service fetch.
///
/// Tags file:
///
/// ```toml
/// [[tags]]
/// name = "v2.0.0"
/// commit_sha = "def5678901234567890123456789012345678901"
/// ```
///
/// Commits file (the already-fetched list for the range of interest):
///
/// ```toml
/// [[commits]]
/// sha = "abc1234567890123456789012345678901234567"
/// message = "feat: add export"
/// author_name = "Jo Doe"
/// author_date = "2024-03-01T12:00:00Z"
/// ```
pub struct FileSource {
    tags_path: PathBuf,
    commits_path: Option<PathBuf>,
}

#[derive(Deserialize)]
struct TagsFile {
    tags: Vec<Tag>,
}

#[derive(Deserialize)]
struct CommitsFile {
    commits: Vec<Commit>,
}

impl FileSource {
    pub fn new(tags_path: impl Into<PathBuf>, commits_path: Option<PathBuf>) -> Self {
        FileSource {
            tags_path: tags_path.into(),
            commits_path,
        }
    }
}

fn read_toml<T: serde::de::DeserializeOwned>(path: &Path) -> Result<T> {
    let text = fs::read_to_string(path)
        .map_err(|e| ChangelogError::source(format!("cannot read {}: {}", path.display(), e)))?;
    toml::from_str(&text)
        .map_err(|e| ChangelogError::source(format!("cannot parse {}: {}", path.display(), e)))
}

impl CommitSource for FileSource {
    fn list_tags(&self) -> Result<Vec<Tag>> {
        let parsed: TagsFile = read_toml(&self.tags_path)?;
        Ok(parsed.tags)
    }

    fn commits_between(&self, _base: &Tag, _head: &Tag) -> Result<Vec<Commit>> {
        // The file already holds the commits for the requested range; there
        // is no compare endpoint to hit here.
        let path = self
            .commits_path
            .as_deref()
            .ok_or_else(|| ChangelogError::source("no commits file was provided"))?;
        let parsed: CommitsFile = read_toml(path)?;
        Ok(parsed.commits)
    }
}
