use thiserror::Error;

/// Unified error type for semver-tool operations
///
/// Field extraction and mutation signal failure through `Option` or by
/// echoing their input; this type covers the surfaces that need a reason:
/// `FromStr` impls, configuration parsing and I/O.
#[derive(Error, Debug)]
pub enum SemverError {
    #[error("Invalid version: {0}")]
    InvalidVersion(String),

    #[error("Invalid part: {0}")]
    InvalidPart(String),

    #[error("Config parse error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Convenience type alias for Results in semver-tool
pub type Result<T> = std::result::Result<T, SemverError>;

impl SemverError {
    /// Create an invalid version error with context
    pub fn invalid_version(msg: impl Into<String>) -> Self {
        SemverError::InvalidVersion(msg.into())
    }

    /// Create an invalid part error with context
    pub fn invalid_part(msg: impl Into<String>) -> Self {
        SemverError::InvalidPart(msg.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = SemverError::invalid_version("'x' has no valid major component");
        assert_eq!(
            err.to_string(),
            "Invalid version: 'x' has no valid major component"
        );
    }

    #[test]
    fn test_error_from_io() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let err: SemverError = io_err.into();
        assert!(err.to_string().contains("I/O error"));
    }

    #[test]
    fn test_error_from_toml() {
        let toml_err = toml::from_str::<toml::Value>("= broken").unwrap_err();
        let err: SemverError = toml_err.into();
        assert!(err.to_string().starts_with("Config parse error"));
    }

    #[test]
    fn test_error_messages_are_descriptive() {
        let error_pairs = vec![
            (SemverError::invalid_version("x"), "Invalid version"),
            (SemverError::invalid_part("x"), "Invalid part"),
        ];

        for (err, expected_prefix) in error_pairs {
            let msg = err.to_string();
            assert!(
                msg.starts_with(expected_prefix),
                "Error message should start with '{}', but got '{}'",
                expected_prefix,
                msg
            );
        }
    }

    #[test]
    fn test_error_empty_messages() {
        let errors = vec![
            SemverError::invalid_version(""),
            SemverError::invalid_part(""),
        ];

        for err in errors {
            // Even with empty message, the error type prefix should be present
            assert!(!err.to_string().is_empty());
        }
    }
}
