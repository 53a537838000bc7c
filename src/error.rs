//! Error types for habitr.

use thiserror::Error;

/// All errors the crate can produce.
///
/// Read and write failures are distinct variants so callers can degrade a
/// failed read to an empty view while still surfacing a failed write.
#[derive(Error, Debug)]
pub enum HabitrError {
    /// Configuration could not be loaded or saved.
    #[error("Configuration error: {0}")]
    Config(String),

    /// The storage backend failed to read, or a stored payload was malformed.
    #[error("Storage read error: {0}")]
    StorageRead(String),

    /// The storage backend failed to persist a change.
    #[error("Storage write error: {0}")]
    StorageWrite(String),

    /// A named item does not exist.
    #[error("{0} not found")]
    NotFound(String),

    /// User input failed validation.
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// JSON serialization or deserialization failed.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// An underlying I/O operation failed.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = HabitrError::NotFound("habit 'swim'".to_string());
        assert_eq!(err.to_string(), "habit 'swim' not found");

        let err = HabitrError::StorageRead("disk on fire".to_string());
        assert!(err.to_string().contains("read"));

        let err = HabitrError::StorageWrite("read-only".to_string());
        assert!(err.to_string().contains("write"));
    }

    #[test]
    fn test_json_error_converts() {
        let json_err = serde_json::from_str::<Vec<u8>>("not json").unwrap_err();
        let err: HabitrError = json_err.into();
        assert!(matches!(err, HabitrError::Json(_)));
    }
}
