use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A single commit record as supplied by the hosting collaborator.
///
/// Identity is the sha. The message may span multiple lines; only the first
/// line (the subject) participates in filtering, classification, and
/// rendering, except for the `BREAKING CHANGE:` footer scan.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Commit {
    pub sha: String,
    pub message: String,
    pub author_name: String,
    pub author_date: DateTime<Utc>,
}

impl Commit {
    pub fn new(
        sha: impl Into<String>,
        message: impl Into<String>,
        author_name: impl Into<String>,
        author_date: DateTime<Utc>,
    ) -> Self {
        Commit {
            sha: sha.into(),
            message: message.into(),
            author_name: author_name.into(),
            author_date,
        }
    }

    /// The first line of the message, body discarded.
    pub fn subject(&self) -> &str {
        self.message.lines().next().unwrap_or("")
    }

    /// First 7 characters of the sha (or the whole sha when shorter).
    pub fn short_sha(&self) -> &str {
        if self.sha.len() > 7 {
            &self.sha[..7]
        } else {
            &self.sha
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn commit(sha: &str, message: &str) -> Commit {
        Commit::new(sha, message, "Test Author", Utc::now())
    }

    #[test]
    fn test_subject_strips_body() {
        let c = commit("abc", "feat: add login\n\nlonger body text");
        assert_eq!(c.subject(), "feat: add login");
    }

    #[test]
    fn test_subject_of_single_line_message() {
        let c = commit("abc", "fix: off by one");
        assert_eq!(c.subject(), "fix: off by one");
    }

    #[test]
    fn test_subject_of_empty_message() {
        let c = commit("abc", "");
        assert_eq!(c.subject(), "");
    }

    #[test]
    fn test_short_sha_truncates_to_seven() {
        let c = commit("abc1234def5678", "feat: x");
        assert_eq!(c.short_sha(), "abc1234");
    }

    #[test]
    fn test_short_sha_keeps_short_input() {
        let c = commit("ab12", "feat: x");
        assert_eq!(c.short_sha(), "ab12");
    }
}
