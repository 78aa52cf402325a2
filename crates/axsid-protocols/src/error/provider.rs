//! Tree provider errors.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ProviderError {
    #[error("Provider unavailable: {0}")]
    Unavailable(String),

    #[error("Capture failed: {0}")]
    CaptureFailed(String),

    #[error("Invalid tree data: {0}")]
    InvalidTree(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_provider_error_unavailable() {
        let err = ProviderError::Unavailable("page closed".to_string());
        assert!(err.to_string().contains("unavailable"));
        assert!(err.to_string().contains("page closed"));
    }

    #[test]
    fn test_provider_error_invalid_tree() {
        let err = ProviderError::InvalidTree("no root".to_string());
        assert!(err.to_string().contains("Invalid tree data"));
    }

    #[test]
    fn test_provider_error_from_io() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "tree.json");
        let err: ProviderError = io_err.into();
        assert!(err.to_string().contains("I/O error"));
    }

    #[test]
    fn test_provider_error_from_json() {
        let json_err = serde_json::from_str::<serde_json::Value>("{broken").unwrap_err();
        let err: ProviderError = json_err.into();
        assert!(err.to_string().contains("Serialization error"));
    }
}
