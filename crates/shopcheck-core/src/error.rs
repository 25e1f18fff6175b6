//! Unified error types for shopcheck

use thiserror::Error;

/// Unified error type for all verification operations
#[derive(Error, Debug)]
pub enum CheckError {
    // Browser errors
    #[error("Browser error: {0}")]
    Browser(String),

    #[error("Element not found: {0}")]
    ElementNotFound(String),

    #[error("Assertion timed out: {0}")]
    AssertionTimeout(String),

    #[error("Screenshot failed: {0}")]
    Screenshot(String),

    // I/O errors
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    // Generic
    #[error("{0}")]
    Other(String),
}

/// Result type alias using CheckError
pub type Result<T> = std::result::Result<T, CheckError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display_includes_context() {
        let err = CheckError::ElementNotFound("button:has(svg.lucide-globe)".to_string());
        assert_eq!(
            err.to_string(),
            "Element not found: button:has(svg.lucide-globe)"
        );

        let err = CheckError::AssertionTimeout("product grid or empty state".to_string());
        assert!(err.to_string().starts_with("Assertion timed out:"));
    }

    #[test]
    fn test_io_error_conversion() {
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "no such file");
        let err: CheckError = io.into();
        assert!(matches!(err, CheckError::Io(_)));
    }
}
