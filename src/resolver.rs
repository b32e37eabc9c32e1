//! Tag-range resolution.
//!
//! Turns a user selection into a concrete `(base, head)` tag pair. Automatic
//! mode encodes the common "changelog since the previous release" case;
//! manual mode exists because tag lists are not guaranteed to be
//! chronological by name, so the user is the arbiter of direction, not a
//! string comparison of version numbers.

use crate::domain::{Tag, TagIndex};
use crate::error::{ChangelogError, Result};

/// How the user selected the range.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RangeMode {
    /// Diff the selected tag against its immediate predecessor.
    Auto { tag: String },
    /// Explicit endpoints; `from` must be strictly older than `to`.
    Manual { from: String, to: String },
}

/// A resolved range. `base` is the older endpoint, `head` the newer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TagRange {
    pub base: Tag,
    pub head: Tag,
}

/// Resolve a selection against the tag index, or explain why it cannot be.
pub fn resolve_range(index: &TagIndex, mode: &RangeMode) -> Result<TagRange> {
    match mode {
        RangeMode::Auto { tag } => resolve_auto(index, tag),
        RangeMode::Manual { from, to } => resolve_manual(index, from, to),
    }
}

fn resolve_auto(index: &TagIndex, tag: &str) -> Result<TagRange> {
    let head = index
        .get(tag)
        .cloned()
        .ok_or_else(|| ChangelogError::TagNotFound(tag.to_string()))?;

    let base = index
        .predecessor(tag)
        .cloned()
        .ok_or_else(|| ChangelogError::NoOlderTag(tag.to_string()))?;

    Ok(TagRange { base, head })
}

fn resolve_manual(index: &TagIndex, from: &str, to: &str) -> Result<TagRange> {
    if from.is_empty() || to.is_empty() {
        return Err(ChangelogError::MissingSelection);
    }

    if from == to {
        return Err(ChangelogError::IdenticalTags(from.to_string()));
    }

    let from_pos = index.position_of(from);
    let to_pos = index.position_of(to);

    // Lower index = newer. FROM must sit strictly below TO in the list.
    if let (Some(f), Some(t)) = (from_pos, to_pos) {
        if f < t {
            return Err(ChangelogError::InvalidOrder {
                from: from.to_string(),
                to: to.to_string(),
            });
        }
    }

    if from_pos.is_none() {
        return Err(ChangelogError::TagNotFound(from.to_string()));
    }
    if to_pos.is_none() {
        return Err(ChangelogError::TagNotFound(to.to_string()));
    }

    // Both present, order already checked
    let base = index.get(from).cloned().unwrap();
    let head = index.get(to).cloned().unwrap();

    Ok(TagRange { base, head })
}
