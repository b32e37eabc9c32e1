use serde::{Deserialize, Serialize};

/// A release tag: a named pointer to a commit.
///
/// Identity is the name; two tags with the same name are the same tag.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tag {
    pub name: String,
    pub commit_sha: String,
}

impl Tag {
    pub fn new(name: impl Into<String>, commit_sha: impl Into<String>) -> Self {
        Tag {
            name: name.into(),
            commit_sha: commit_sha.into(),
        }
    }
}

/// Positional view over a repository's tag list.
///
/// The list is kept in the order the collaborator supplied it, newest first
/// (index 0 = most recent release). Tags are never re-sorted here: name-based
/// version comparison is deliberately not done, the supplied order is trusted.
#[derive(Debug, Clone)]
pub struct TagIndex {
    tags: Vec<Tag>,
}

impl TagIndex {
    /// Build an index from a newest-first tag list.
    pub fn new(tags: Vec<Tag>) -> Self {
        TagIndex { tags }
    }

    /// Position of a tag by name. Duplicate names: first match wins.
    pub fn position_of(&self, name: &str) -> Option<usize> {
        self.tags.iter().position(|t| t.name == name)
    }

    /// Look up a tag by name.
    pub fn get(&self, name: &str) -> Option<&Tag> {
        self.position_of(name).map(|i| &self.tags[i])
    }

    /// The next-older neighbor of the named tag, or `None` when the tag is
    /// the oldest in the list (or absent).
    pub fn predecessor(&self, name: &str) -> Option<&Tag> {
        self.position_of(name).and_then(|i| self.tags.get(i + 1))
    }

    pub fn len(&self) -> usize {
        self.tags.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tags.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Tag> {
        self.tags.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn index() -> TagIndex {
        TagIndex::new(vec![
            Tag::new("v3", "ccc3333"),
            Tag::new("v2", "bbb2222"),
            Tag::new("v1", "aaa1111"),
        ])
    }

    #[test]
    fn test_position_of() {
        let idx = index();
        assert_eq!(idx.position_of("v3"), Some(0));
        assert_eq!(idx.position_of("v1"), Some(2));
        assert_eq!(idx.position_of("v9"), None);
    }

    #[test]
    fn test_predecessor_is_older_neighbor() {
        let idx = index();
        assert_eq!(idx.predecessor("v3").map(|t| t.name.as_str()), Some("v2"));
        assert_eq!(idx.predecessor("v2").map(|t| t.name.as_str()), Some("v1"));
    }

    #[test]
    fn test_oldest_tag_has_no_predecessor() {
        let idx = index();
        assert!(idx.predecessor("v1").is_none());
    }

    #[test]
    fn test_predecessor_of_unknown_tag() {
        let idx = index();
        assert!(idx.predecessor("v9").is_none());
    }

    #[test]
    fn test_duplicate_names_first_match_wins() {
        let idx = TagIndex::new(vec![
            Tag::new("v1", "first"),
            Tag::new("v1", "second"),
        ]);
        assert_eq!(idx.position_of("v1"), Some(0));
        assert_eq!(idx.get("v1").map(|t| t.commit_sha.as_str()), Some("first"));
    }

    #[test]
    fn test_len_and_empty() {
        assert_eq!(index().len(), 3);
        assert!(TagIndex::new(vec![]).is_empty());
    }
}
