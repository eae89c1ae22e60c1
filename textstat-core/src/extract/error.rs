use std::path::PathBuf;

use thiserror::Error;

use crate::extract::DocumentFormat;

/// Result type alias for extraction.
pub type Result<T> = std::result::Result<T, ExtractionError>;

/// Why a document could not be turned into text.
///
/// The `Display` output is the message shown to the user in a failed report.
#[derive(Error, Debug)]
pub enum ExtractionError {
    #[error("File not found: {}", .0.display())]
    NotFound(PathBuf),

    #[error("Unsupported file format: {0}")]
    Unsupported(String),

    #[error("Unable to read .{} file. {reason}", .format.extension())]
    HandlerUnavailable {
        format: DocumentFormat,
        reason: String,
    },

    #[error("Unable to read .doc file. Please install antiword or convert to .docx format.")]
    ConverterFailed,

    #[error("Error reading file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Error reading .docx file: {0}")]
    Docx(String),

    #[error("Error reading .pdf file: {0}")]
    Pdf(String),
}

impl From<zip::result::ZipError> for ExtractionError {
    fn from(err: zip::result::ZipError) -> Self {
        ExtractionError::Docx(err.to_string())
    }
}

impl From<quick_xml::Error> for ExtractionError {
    fn from(err: quick_xml::Error) -> Self {
        ExtractionError::Docx(err.to_string())
    }
}
