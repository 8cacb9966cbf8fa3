//! Error types for signstream.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum SignstreamError {
    // Contract violations from the host
    #[error("Classifier confidence {value} is outside [0, 1]")]
    ConfidenceOutOfRange { value: f64 },

    #[error("Sample timestamp precedes an earlier sample in this session")]
    NonMonotonicTimestamp,

    // Lexicon loading errors
    #[error("Failed to read lexicon '{path}': {message}")]
    LexiconRead { path: String, message: String },

    // Configuration errors
    #[error("Configuration error: {0}")]
    Config(#[from] toml::de::Error),

    // General I/O errors
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    // Generic error for cases not covered above
    #[error("{0}")]
    Other(String),
}

// Type alias for convenience
pub type Result<T> = std::result::Result<T, SignstreamError>;

#[cfg(test)]
mod tests {
    use super::*;
    use std::io;

    #[test]
    fn test_confidence_out_of_range_display() {
        let error = SignstreamError::ConfidenceOutOfRange { value: 1.5 };
        assert_eq!(
            error.to_string(),
            "Classifier confidence 1.5 is outside [0, 1]"
        );
    }

    #[test]
    fn test_non_monotonic_timestamp_display() {
        let error = SignstreamError::NonMonotonicTimestamp;
        assert_eq!(
            error.to_string(),
            "Sample timestamp precedes an earlier sample in this session"
        );
    }

    #[test]
    fn test_lexicon_read_display() {
        let error = SignstreamError::LexiconRead {
            path: "/data/words.txt".to_string(),
            message: "permission denied".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Failed to read lexicon '/data/words.txt': permission denied"
        );
    }

    #[test]
    fn test_other_display() {
        let error = SignstreamError::Other("unexpected error".to_string());
        assert_eq!(error.to_string(), "unexpected error");
    }

    #[test]
    fn test_from_io_error() {
        let io_error = io::Error::new(io::ErrorKind::NotFound, "file not found");
        let error: SignstreamError = io_error.into();
        assert!(error.to_string().contains("file not found"));
    }

    #[test]
    fn test_from_toml_error() {
        let toml_str = "invalid = toml = syntax";
        let toml_error = toml::from_str::<toml::Value>(toml_str).unwrap_err();
        let error: SignstreamError = toml_error.into();
        assert!(error.to_string().contains("Configuration error"));
    }

    #[test]
    fn test_result_type_alias() {
        fn returns_result() -> Result<i32> {
            Ok(42)
        }
        assert_eq!(returns_result().unwrap(), 42);
    }

    #[test]
    fn test_error_source_chain_io() {
        let io_error = io::Error::new(io::ErrorKind::PermissionDenied, "access denied");
        let error: SignstreamError = io_error.into();

        let error_trait: &dyn std::error::Error = &error;
        assert!(error_trait.source().is_some());
    }

    #[test]
    fn test_error_is_send_and_sync() {
        fn assert_send<T: Send>() {}
        fn assert_sync<T: Sync>() {}

        assert_send::<SignstreamError>();
        assert_sync::<SignstreamError>();
    }
}
