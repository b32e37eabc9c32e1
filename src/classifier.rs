//! Commit classification into render categories.

use regex::Regex;

use crate::domain::Commit;

/// Render category of a commit. Mutually exclusive and exhaustive: every
/// commit maps to exactly one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    Breaking,
    Feature,
    Fix,
    Chore,
    Other,
}

/// Classify one commit message. Pure function of the message text,
/// first match wins:
///
/// 1. Breaking: `BREAKING CHANGE:` anywhere in the message, or the
///    conventional shorthand `type(scope)!:` / `type!:` at the start. The
///    type token is any run of lowercase letters, broader than the known
///    conventional vocabulary.
/// 2. Feature: subject starts with `feat:` or `feature:` (case-insensitive).
/// 3. Fix: subject starts with `fix:`.
/// 4. Chore: subject starts with `chore:`, `docs:`, `style:`, `refactor:`,
///    or `test:`.
/// 5. Other: everything else, including merge commits that survived
///    filtering and unprefixed messages.
///
/// Unlike the filter families, the prefixes here require the colon: this is
/// the strict tier, and loose prefixes like `"feature update"` fall through
/// to Other.
pub fn classify(message: &str) -> Category {
    if message.contains("BREAKING CHANGE:") {
        return Category::Breaking;
    }

    if let Ok(re) = Regex::new(r"^[a-z]+(\(.+\))?!:") {
        if re.is_match(message) {
            return Category::Breaking;
        }
    }

    let subject = message.lines().next().unwrap_or("").to_lowercase();

    if subject.starts_with("feat:") || subject.starts_with("feature:") {
        Category::Feature
    } else if subject.starts_with("fix:") {
        Category::Fix
    } else if subject.starts_with("chore:")
        || subject.starts_with("docs:")
        || subject.starts_with("style:")
        || subject.starts_with("refactor:")
        || subject.starts_with("test:")
    {
        Category::Chore
    } else {
        Category::Other
    }
}

/// Classify a commit record by its message.
pub fn classify_commit(commit: &Commit) -> Category {
    classify(&commit.message)
}
