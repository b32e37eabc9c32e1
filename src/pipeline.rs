//! End-to-end changelog generation.
//!
//! Orchestrates resolve range → fetch → filter → classify → render. Each run
//! is a pure function of its inputs; nothing is retained between calls, so
//! concurrent requests are naturally independent. Every failure surfaces as
//! a typed [ChangelogError] and the next request starts fresh.

use crate::domain::{Commit, TagIndex};
use crate::error::{ChangelogError, Result};
use crate::filter::{filter_commits, FilterSet};
use crate::renderer::{self, ClassifiedCommits};
use crate::resolver::{resolve_range, RangeMode, TagRange};
use crate::source::CommitSource;

/// One changelog request: which repository, which range, which filters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChangelogRequest {
    /// Repository full name, e.g. "acme/widget"; used only in the document
    /// header.
    pub repo_full_name: String,
    pub mode: RangeMode,
    pub filters: FilterSet,
}

/// Generate the changelog for an already-resolved range and its commits.
///
/// Guards: an empty commit list fails with `EmptyRange` before any
/// filtering; a list emptied by the filters fails with `EmptyAfterFilter`
/// without ever invoking classification. Disabling every filter family is
/// not an error here, it simply funnels into the latter guard.
pub fn generate_for_range(
    repo_full_name: &str,
    range: &TagRange,
    commits: &[Commit],
    filters: &FilterSet,
) -> Result<String> {
    if commits.is_empty() {
        return Err(ChangelogError::EmptyRange {
            base: range.base.name.clone(),
            head: range.head.name.clone(),
        });
    }

    let filtered = filter_commits(commits, filters);
    if filtered.is_empty() {
        return Err(ChangelogError::EmptyAfterFilter {
            base: range.base.name.clone(),
            head: range.head.name.clone(),
        });
    }

    let classified = ClassifiedCommits::from_commits(&filtered);
    Ok(renderer::render(
        &classified,
        repo_full_name,
        &range.base,
        &range.head,
    ))
}

/// Run the whole pipeline against a data source.
pub fn run<S: CommitSource>(source: &S, request: &ChangelogRequest) -> Result<String> {
    let index = TagIndex::new(source.list_tags()?);
    let range = resolve_range(&index, &request.mode)?;
    let commits = source.commits_between(&range.base, &range.head)?;
    generate_for_range(&request.repo_full_name, &range, &commits, &request.filters)
}

/// Map the two empty-result diagnostics to their short user-facing
/// documents. Other errors have no document form and yield `None`.
pub fn fallback_document(repo_full_name: &str, err: &ChangelogError) -> Option<String> {
    match err {
        ChangelogError::EmptyRange { base, head } => {
            Some(renderer::no_commits_document(repo_full_name, base, head))
        }
        ChangelogError::EmptyAfterFilter { base, head } => {
            Some(renderer::filtered_out_document(repo_full_name, base, head))
        }
        _ => None,
    }
}
