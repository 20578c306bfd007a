pub mod filter;
pub mod pdf;

use std::path::Path;

use crate::error::DocumentError;

/// Ordered per-page text of one PDF, immutable once extracted.
#[derive(Debug)]
pub struct Document {
    pages: Vec<String>,
}

impl Document {
    /// Reads the whole file eagerly. A document with zero pages is valid and
    /// yields an empty cleaned text.
    pub fn load(path: &Path) -> Result<Self, DocumentError> {
        let pages = pdf::extract_pages(path)?;
        Ok(Self { pages })
    }

    pub fn pages(&self) -> &[String] {
        &self.pages
    }

    pub fn page_count(&self) -> usize {
        self.pages.len()
    }

    /// Filters every page and joins the survivors with single newlines.
    /// Pages left empty by the filter are dropped from the joined text.
    /// Deterministic: the same file always yields the same string.
    pub fn cleaned_text(&self) -> String {
        let filtered: Vec<String> = self
            .pages
            .iter()
            .map(|page| filter::clean_page(page))
            .filter(|page| !page.trim().is_empty())
            .collect();
        filtered.join("\n")
    }

    /// Unfiltered pages joined with single newlines.
    pub fn raw_text(&self) -> String {
        self.pages.join("\n")
    }
}
