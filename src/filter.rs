//! Pre-classification commit filtering.
//!
//! Filtering works on coarse prefix *families* without the colon anchor
//! (`"feat"` also catches `"feature update"`), while classification in
//! [`crate::classifier`] is strict about the conventional `type:` form. The
//! two tiers are intentionally asymmetric: a commit the filter lets through
//! may still classify as Other.

use crate::domain::Commit;

/// Coarse prefix families used only for inclusion/exclusion.
///
/// Note there is no `merge` render category: merge commits that survive
/// filtering end up in Other.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FilterFamily {
    Feat,
    Fix,
    Chore,
    Docs,
    Merge,
}

impl FilterFamily {
    pub const ALL: [FilterFamily; 5] = [
        FilterFamily::Feat,
        FilterFamily::Fix,
        FilterFamily::Chore,
        FilterFamily::Docs,
        FilterFamily::Merge,
    ];
}

/// The five per-family toggles. Everything enabled by default; filters only
/// ever remove commits, never add.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FilterSet {
    pub feat: bool,
    pub fix: bool,
    pub chore: bool,
    pub docs: bool,
    pub merge: bool,
}

impl Default for FilterSet {
    fn default() -> Self {
        FilterSet {
            feat: true,
            fix: true,
            chore: true,
            docs: true,
            merge: true,
        }
    }
}

impl FilterSet {
    pub fn all_enabled() -> Self {
        FilterSet::default()
    }

    pub fn is_enabled(&self, family: FilterFamily) -> bool {
        match family {
            FilterFamily::Feat => self.feat,
            FilterFamily::Fix => self.fix,
            FilterFamily::Chore => self.chore,
            FilterFamily::Docs => self.docs,
            FilterFamily::Merge => self.merge,
        }
    }

    pub fn disable(mut self, family: FilterFamily) -> Self {
        match family {
            FilterFamily::Feat => self.feat = false,
            FilterFamily::Fix => self.fix = false,
            FilterFamily::Chore => self.chore = false,
            FilterFamily::Docs => self.docs = false,
            FilterFamily::Merge => self.merge = false,
        }
        self
    }
}

/// Apply the family toggles to a commit list, preserving order.
///
/// Families are checked in a fixed priority so at most one exclusion applies
/// per commit: merge, then feat, then fix, then chore, then docs. A commit
/// matching no recognized prefix is always retained.
pub fn filter_commits(commits: &[Commit], filters: &FilterSet) -> Vec<Commit> {
    commits
        .iter()
        .filter(|c| retained(c, filters))
        .cloned()
        .collect()
}

fn retained(commit: &Commit, filters: &FilterSet) -> bool {
    let subject = commit.subject().to_lowercase();

    if subject.starts_with("merge") {
        filters.merge
    } else if subject.starts_with("feat") {
        // "feat" also covers "feature"
        filters.feat
    } else if subject.starts_with("fix") {
        filters.fix
    } else if subject.starts_with("chore")
        || subject.starts_with("refactor")
        || subject.starts_with("style")
        || subject.starts_with("test")
    {
        filters.chore
    } else if subject.starts_with("docs") {
        filters.docs
    } else {
        true
    }
}
