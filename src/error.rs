use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while turning a PDF file into text.
#[derive(Debug, Error)]
pub enum DocumentError {
    /// The path does not exist or cannot be read.
    #[error("cannot read '{path}': {source}")]
    FileAccess {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The file exists but is not a PDF we can extract text from.
    #[error("'{path}' is not a readable PDF: {source}")]
    Extraction {
        path: PathBuf,
        #[source]
        source: pdf_extract::OutputError,
    },
}
