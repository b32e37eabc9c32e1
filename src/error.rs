use thiserror::Error;

/// Unified error type for changelog generation
#[derive(Error, Debug)]
pub enum ChangelogError {
    #[error("Tag '{0}' was not found in the repository's tag list")]
    TagNotFound(String),

    #[error("Tag '{0}' is the oldest known tag; select a range manually instead")]
    NoOlderTag(String),

    #[error("Manual range requires both a 'from' tag and a 'to' tag")]
    MissingSelection,

    #[error("'from' and 'to' both name tag '{0}'; pick two different tags")]
    IdenticalTags(String),

    #[error("Tag '{from}' is newer than '{to}'; 'from' must be the older tag")]
    InvalidOrder { from: String, to: String },

    #[error("No commits exist between '{base}' and '{head}'")]
    EmptyRange { base: String, head: String },

    #[error("All commits between '{base}' and '{head}' were excluded by the active filters")]
    EmptyAfterFilter { base: String, head: String },

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Data source error: {0}")]
    Source(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Convenience type alias for Results in changelog-gen
pub type Result<T> = std::result::Result<T, ChangelogError>;

impl ChangelogError {
    /// Create a configuration error with context
    pub fn config(msg: impl Into<String>) -> Self {
        ChangelogError::Config(msg.into())
    }

    /// Create a data source error with context
    pub fn source(msg: impl Into<String>) -> Self {
        ChangelogError::Source(msg.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = ChangelogError::TagNotFound("v9.9.9".to_string());
        assert_eq!(
            err.to_string(),
            "Tag 'v9.9.9' was not found in the repository's tag list"
        );
    }

    #[test]
    fn test_error_from_io() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let err: ChangelogError = io_err.into();
        assert!(err.to_string().contains("I/O error"));
    }

    #[test]
    fn test_error_constructors() {
        assert!(ChangelogError::config("bad toml")
            .to_string()
            .contains("Configuration"));
        assert!(ChangelogError::source("missing file")
            .to_string()
            .contains("Data source"));
    }

    #[test]
    fn test_range_errors_name_both_tags() {
        let err = ChangelogError::InvalidOrder {
            from: "v3".to_string(),
            to: "v1".to_string(),
        };
        let msg = err.to_string();
        assert!(msg.contains("v3") && msg.contains("v1"));

        let err = ChangelogError::EmptyRange {
            base: "v1.0.0".to_string(),
            head: "v2.0.0".to_string(),
        };
        let msg = err.to_string();
        assert!(msg.contains("v1.0.0") && msg.contains("v2.0.0"));
    }

    #[test]
    fn test_empty_after_filter_distinct_from_empty_range() {
        let empty = ChangelogError::EmptyRange {
            base: "v1".to_string(),
            head: "v2".to_string(),
        };
        let filtered = ChangelogError::EmptyAfterFilter {
            base: "v1".to_string(),
            head: "v2".to_string(),
        };
        // The user must be able to tell "nothing changed" from "filters too strict"
        assert_ne!(empty.to_string(), filtered.to_string());
        assert!(filtered.to_string().contains("filters"));
    }

    #[test]
    fn test_error_all_variants_nonempty() {
        let errors = vec![
            ChangelogError::TagNotFound("t".to_string()),
            ChangelogError::NoOlderTag("t".to_string()),
            ChangelogError::MissingSelection,
            ChangelogError::IdenticalTags("t".to_string()),
            ChangelogError::config("c"),
            ChangelogError::source("s"),
        ];

        for err in errors {
            assert!(!err.to_string().is_empty());
        }
    }
}
