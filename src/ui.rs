//! Terminal output formatting. Pure printing, no interaction.

use crate::domain::Tag;

/// Format and print an error message in red.
pub fn display_error(message: &str) {
    eprintln!("\x1b[31mERROR:\x1b[0m {}", message);
}

/// Format and print a success message with green checkmark.
pub fn display_success(message: &str) {
    println!("\x1b[32m✓\x1b[0m {}", message);
}

/// Format and print a status message with yellow arrow.
pub fn display_status(message: &str) {
    println!("\x1b[33m→\x1b[0m {}", message);
}

/// Print the repository's tag list, newest first, marking the most recent.
pub fn display_tag_list(tags: &[Tag]) {
    if tags.is_empty() {
        println!("No tags found.");
        return;
    }

    println!("\x1b[1mTags (newest first):\x1b[0m");
    for (i, tag) in tags.iter().enumerate() {
        let short_sha = if tag.commit_sha.len() > 7 {
            &tag.commit_sha[..7]
        } else {
            tag.commit_sha.as_str()
        };
        if i == 0 {
            println!("  - {} ({}) \x1b[32m[latest]\x1b[0m", tag.name, short_sha);
        } else {
            println!("  - {} ({})", tag.name, short_sha);
        }
    }
}
