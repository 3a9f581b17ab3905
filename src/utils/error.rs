// src/utils/error.rs
use std::path::PathBuf;
use thiserror::Error;

// Errors raised while turning a source document into cleaned text
#[derive(Error, Debug)]
pub enum DocumentError {
    #[error("File not found: {}", .0.display())]
    NotFound(PathBuf),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("PDF text extraction failed for {}: {reason}", .path.display())]
    Pdf { path: PathBuf, reason: String },

    #[error("Unsupported document format: {}", .0.display())]
    UnsupportedFormat(PathBuf),
}

#[derive(Error, Debug)]
pub enum StorageError {
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(String),
}

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Document loading failed: {0}")]
    Document(#[from] DocumentError),

    #[error("Storage error: {0}")]
    Storage(#[from] StorageError),

    #[error("Data processing failed: {0}")]
    Processing(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_document_error_converts_into_app_error() {
        let err: AppError = DocumentError::NotFound(PathBuf::from("missing.pdf")).into();
        assert!(matches!(err, AppError::Document(DocumentError::NotFound(_))));
        assert_eq!(
            err.to_string(),
            "Document loading failed: File not found: missing.pdf"
        );
    }

    #[test]
    fn test_storage_error_message() {
        let err = StorageError::SerializationError("bad value".to_string());
        assert_eq!(err.to_string(), "Serialization error: bad value");
    }
}
