//! Markdown changelog rendering.

use crate::classifier::{classify_commit, Category};
use crate::domain::{Commit, Tag};

/// Commits grouped by render category, input order preserved per bucket.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ClassifiedCommits {
    pub breaking: Vec<Commit>,
    pub features: Vec<Commit>,
    pub fixes: Vec<Commit>,
    pub chores: Vec<Commit>,
    pub other: Vec<Commit>,
}

impl ClassifiedCommits {
    /// Group a commit list into category buckets.
    pub fn from_commits(commits: &[Commit]) -> Self {
        let mut grouped = ClassifiedCommits::default();
        for commit in commits {
            match classify_commit(commit) {
                Category::Breaking => grouped.breaking.push(commit.clone()),
                Category::Feature => grouped.features.push(commit.clone()),
                Category::Fix => grouped.fixes.push(commit.clone()),
                Category::Chore => grouped.chores.push(commit.clone()),
                Category::Other => grouped.other.push(commit.clone()),
            }
        }
        grouped
    }
}

fn push_header(lines: &mut Vec<String>, repo_full_name: &str, base: &str, head: &str) {
    lines.push(format!("# Changelog: {}", repo_full_name));
    lines.push(String::new());
    lines.push(format!("**{}** → **{}**", base, head));
    lines.push(String::new());
    lines.push("---".to_string());
    lines.push(String::new());
}

fn push_section(lines: &mut Vec<String>, title: &str, commits: &[Commit]) {
    if commits.is_empty() {
        return;
    }
    lines.push(format!("## {}", title));
    lines.push(String::new());
    for commit in commits {
        lines.push(format!("- {} (`{}`)", commit.subject(), commit.short_sha()));
    }
    lines.push(String::new());
}

/// Serialize classified commits to the changelog document.
///
/// Sections appear in a fixed order and are omitted entirely when empty. The
/// header (title, range line, rule) is always present. Output is a pure
/// function of the inputs: identical inputs give byte-identical markdown.
pub fn render(
    classified: &ClassifiedCommits,
    repo_full_name: &str,
    base: &Tag,
    head: &Tag,
) -> String {
    let mut lines = Vec::new();

    push_header(&mut lines, repo_full_name, &base.name, &head.name);

    push_section(&mut lines, "⚠️ Breaking Changes", &classified.breaking);
    push_section(&mut lines, "✨ Features", &classified.features);
    push_section(&mut lines, "🐛 Bug Fixes", &classified.fixes);
    push_section(&mut lines, "🔧 Chores", &classified.chores);
    push_section(&mut lines, "📝 Other Changes", &classified.other);

    lines.join("\n")
}

/// Short document for a range that contains no commits at all.
pub fn no_commits_document(repo_full_name: &str, base: &str, head: &str) -> String {
    let mut lines = Vec::new();
    push_header(&mut lines, repo_full_name, base, head);
    lines.push(format!(
        "No commits were found between **{}** and **{}**.",
        base, head
    ));
    lines.join("\n")
}

/// Short document for a range whose commits were all excluded by filters.
/// Worded distinctly from [`no_commits_document`] so "nothing changed" and
/// "filters too strict" stay distinguishable.
pub fn filtered_out_document(repo_full_name: &str, base: &str, head: &str) -> String {
    let mut lines = Vec::new();
    push_header(&mut lines, repo_full_name, base, head);
    lines.push(format!(
        "No commits between **{}** and **{}** match the active filters. \
         Enable more categories to see them.",
        base, head
    ));
    lines.join("\n")
}
