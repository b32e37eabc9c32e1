use crate::domain::{Commit, Tag};
use crate::error::Result;
use crate::source::CommitSource;

/// In-memory source for tests, no files or network involved.
#[derive(Debug, Clone, Default)]
pub struct MockSource {
    tags: Vec<Tag>,
    commits: Vec<Commit>,
}

impl MockSource {
    pub fn new() -> Self {
        MockSource::default()
    }

    /// Append a tag; callers supply tags newest first, as the real
    /// collaborator does.
    pub fn add_tag(&mut self, name: impl Into<String>, sha: impl Into<String>) {
        self.tags.push(Tag::new(name, sha));
    }

    /// Append a commit to the canned range result.
    pub fn add_commit(&mut self, commit: Commit) {
        self.commits.push(commit);
    }
}

impl CommitSource for MockSource {
    fn list_tags(&self) -> Result<Vec<Tag>> {
        Ok(self.tags.clone())
    }

    fn commits_between(&self, _base: &Tag, _head: &Tag) -> Result<Vec<Commit>> {
        Ok(self.commits.clone())
    }
}
