use thiserror::Error;

use flowboard_core::StoreError;

/// Error type for canvas-layer operations
#[derive(Debug, Error)]
pub enum CanvasError {
    /// Catalog content is structurally invalid
    #[error("Catalog error: {0}")]
    CatalogError(String),

    /// Catalog file failed to parse
    #[error("Catalog parse error: {0}")]
    CatalogParseError(#[from] serde_yaml::Error),

    /// Store operation failed
    #[error("Store error: {0}")]
    StoreError(#[from] StoreError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_store_error_conversion() {
        let err: CanvasError = StoreError::UnknownNamespace("bogus".to_string()).into();

        assert_eq!(err.to_string(), "Store error: Unknown flow namespace: bogus");
    }
}
