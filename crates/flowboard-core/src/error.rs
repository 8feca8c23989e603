use thiserror::Error;

/// Core error type for the Flowboard node store
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum StoreError {
    /// Write targeted an unshared node type without a flow namespace
    #[error("Unroutable write for node {0}: type is not shared and no flow namespace was given")]
    UnroutableWrite(String),

    /// Write named a flow namespace that was never declared
    #[error("Unknown flow namespace: {0}")]
    UnknownNamespace(String),

    /// State store error
    #[error("State store error: {0}")]
    StateStoreError(String),

    /// Serialization error
    #[error("Serialization error: {0}")]
    SerializationError(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    ConfigurationError(String),

    /// Generic error
    #[error("{0}")]
    Other(String),
}

impl From<serde_json::Error> for StoreError {
    fn from(err: serde_json::Error) -> Self {
        StoreError::SerializationError(err.to_string())
    }
}

impl From<String> for StoreError {
    fn from(err: String) -> Self {
        StoreError::Other(err)
    }
}

impl From<&str> for StoreError {
    fn from(err: &str) -> Self {
        StoreError::Other(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let errors = vec![
            (
                StoreError::UnroutableWrite("fxExposure-1".to_string()),
                "Unroutable write for node fxExposure-1: type is not shared and no flow namespace was given",
            ),
            (
                StoreError::UnknownNamespace("not-a-real-namespace".to_string()),
                "Unknown flow namespace: not-a-real-namespace",
            ),
            (
                StoreError::StateStoreError("lock".to_string()),
                "State store error: lock",
            ),
            (
                StoreError::SerializationError("ser_err".to_string()),
                "Serialization error: ser_err",
            ),
            (
                StoreError::ConfigurationError("config_err".to_string()),
                "Configuration error: config_err",
            ),
            (StoreError::Other("other_err".to_string()), "other_err"),
        ];

        for (error, expected_msg) in errors {
            assert_eq!(error.to_string(), expected_msg);
        }
    }

    #[test]
    fn test_from_serde_json_error() {
        let json_error = serde_json::from_str::<serde_json::Value>("invalid json").unwrap_err();
        let error: StoreError = json_error.into();

        match error {
            StoreError::SerializationError(msg) => {
                assert!(msg.contains("expected value"));
            }
            _ => panic!("Expected SerializationError variant"),
        }
    }

    #[test]
    fn test_from_string() {
        let error: StoreError = "test error message".to_string().into();

        match error {
            StoreError::Other(msg) => {
                assert_eq!(msg, "test error message");
            }
            _ => panic!("Expected Other variant"),
        }
    }

    #[test]
    fn test_error_clone_and_eq() {
        let original = StoreError::UnknownNamespace("payments".to_string());
        let cloned = original.clone();

        assert_eq!(original, cloned);
    }
}
