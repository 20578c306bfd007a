use std::fs;
use std::path::Path;

use log::debug;
use pdf_extract::extract_text_by_pages;

use crate::error::DocumentError;

/// Extracts per-page text in document order. No page is skipped or merged;
/// a page with an empty text layer yields an empty string.
pub fn extract_pages(path: &Path) -> Result<Vec<String>, DocumentError> {
    fs::metadata(path).map_err(|source| DocumentError::FileAccess {
        path: path.to_path_buf(),
        source,
    })?;

    let pages = extract_text_by_pages(path).map_err(|source| DocumentError::Extraction {
        path: path.to_path_buf(),
        source,
    })?;

    debug!("extracted {} pages from {}", pages.len(), path.display());

    // Keep newlines, the filter classifies per physical line.
    Ok(pages
        .into_iter()
        .map(|page| page.replace(|c: char| c.is_control() && c != '\n', ""))
        .collect())
}
