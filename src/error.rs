/// Error types for document assembly and serialization.
use thiserror::Error;

/// Result type for document assembly operations.
pub type Result<T> = std::result::Result<T, DocxError>;

/// Error types for document assembly operations.
#[derive(Error, Debug)]
pub enum DocxError {
    /// A content node references a style id with no registered definition
    #[error("unknown style reference: {0}")]
    UnknownStyle(String),

    /// A paragraph references a numbering definition with no registered definition
    #[error("unknown numbering reference: {0}")]
    UnknownNumbering(String),

    /// Malformed tree shape (empty table, mismatched cell counts, ...)
    #[error("invalid document structure: {0}")]
    InvalidStructure(String),

    /// XML generation error
    #[error("XML error: {0}")]
    Xml(String),

    /// ZIP container error
    #[error("ZIP error: {0}")]
    Zip(#[from] zip::result::ZipError),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
